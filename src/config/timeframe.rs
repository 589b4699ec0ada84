//! Ranking window definitions.

use std::fmt;
use std::str::FromStr;

/// Window used by Reddit to rank "top" posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    Year,
    /// Default window.
    #[default]
    Month,
    Week,
    Day,
}

impl Timeframe {
    /// Value of the `t` query parameter for this window.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Year => "year",
            Timeframe::Month => "month",
            Timeframe::Week => "week",
            Timeframe::Day => "day",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "year" => Ok(Timeframe::Year),
            "month" => Ok(Timeframe::Month),
            "week" => Ok(Timeframe::Week),
            "day" => Ok(Timeframe::Day),
            _ => Err(format!(
                "Unknown timeframe: '{}' (expected year, month, week or day)",
                s
            )),
        }
    }
}
