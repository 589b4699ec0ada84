//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{validate_limit, Config, Timeframe};
use crate::error::Result;

/// Reddit top-images downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dl-reddit-top",
    version,
    about = "Download the top image posts of subreddits",
    long_about = "Download the top image posts of the subreddits listed in a section of the \
                  config file, optionally sending an email when the run is done.\n\n\
                  Without --config, the first section of the config file is used."
)]
pub struct Args {
    /// Config section to run.
    #[arg(short, long, value_name = "SECTION")]
    pub config: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub debug: bool,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "dl-reddit-top.conf")]
    pub config_file: PathBuf,

    /// Path to the SMTP credentials file.
    #[arg(long, value_name = "PATH", default_value = ".credentials")]
    pub credentials: PathBuf,

    /// Directory to save images to.
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,

    /// Ranking window for top posts.
    #[arg(short, long, value_enum)]
    pub timeframe: Option<TimeframeArg>,

    /// Maximum number of posts to fetch per subreddit.
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Don't send the notification email, even if the section enables it.
    #[arg(long)]
    pub no_email: bool,
}

/// CLI timeframe argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeframeArg {
    Year,
    Month,
    Week,
    Day,
}

impl From<TimeframeArg> for Timeframe {
    fn from(arg: TimeframeArg) -> Self {
        match arg {
            TimeframeArg::Year => Timeframe::Year,
            TimeframeArg::Month => Timeframe::Month,
            TimeframeArg::Week => Timeframe::Week,
            TimeframeArg::Day => Timeframe::Day,
        }
    }
}

impl Args {
    /// Merge CLI arguments into a loaded config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) -> Result<()> {
        if let Some(dir) = &self.output_directory {
            config.output_directory = dir.clone();
        }

        if let Some(timeframe) = self.timeframe {
            config.timeframe = timeframe.into();
        }

        if let Some(limit) = self.limit {
            validate_limit(limit)?;
            config.limit = limit;
        }

        if self.no_email {
            config.email = None;
        }

        Ok(())
    }
}
