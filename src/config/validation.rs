//! Configuration value parsing and validation.

use crate::error::{Error, Result};
use regex::Regex;

/// Default number of posts requested per subreddit.
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest listing Reddit will page through.
pub const MAX_LIMIT: u32 = 1000;

/// Parse a `True`/`False` flag.
pub fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Expected True or False, got '{}'", other),
        }),
    }
}

/// Split the comma-separated `subreddits` value, keeping the listed order.
pub fn parse_subreddits(value: &str) -> Result<Vec<String>> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(
            "subreddits (at least one subreddit required)".to_string(),
        ));
    }

    let subreddits: Vec<String> = value.split(',').map(|s| s.trim().to_string()).collect();
    validate_subreddits(&subreddits)?;

    Ok(subreddits)
}

/// Whether `name` is a bare subreddit name: 2-21 chars of `[A-Za-z0-9_]`,
/// not starting with an underscore.
pub fn is_valid_subreddit_name(name: &str) -> bool {
    let name_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_]{1,20}$").unwrap();
    name_pattern.is_match(name)
}

/// Validate subreddit names.
pub fn validate_subreddits<S: AsRef<str>>(subreddits: &[S]) -> Result<()> {
    for name in subreddits {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(Error::ConfigValidation {
                field: "subreddits".to_string(),
                message: "Empty entry in subreddit list".to_string(),
            });
        }

        if !is_valid_subreddit_name(name) {
            return Err(Error::ConfigValidation {
                field: "subreddits".to_string(),
                message: format!(
                    "Subreddit '{}' is not a valid name. Use the bare name without 'r/'.",
                    name
                ),
            });
        }
    }

    Ok(())
}

/// Parse the per-subreddit post limit.
pub fn parse_limit(value: &str) -> Result<u32> {
    let limit: u32 = value.trim().parse().map_err(|_| Error::ConfigValidation {
        field: "limit".to_string(),
        message: format!("'{}' is not a number", value.trim()),
    })?;
    validate_limit(limit)?;
    Ok(limit)
}

/// Validate the per-subreddit post limit.
pub fn validate_limit(limit: u32) -> Result<()> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(Error::ConfigValidation {
            field: "limit".to_string(),
            message: format!("Limit must be between 1 and {} (got {})", MAX_LIMIT, limit),
        });
    }
    Ok(())
}

/// Parse an SMTP port.
pub fn parse_port(value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(Error::ConfigValidation {
            field: "smtp_port".to_string(),
            message: format!("'{}' is not a valid port", value.trim()),
        }),
    }
}

/// Minimal sanity check on an email address.
pub fn validate_address(field: &str, address: &str) -> Result<()> {
    let address_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    if !address_pattern.is_match(address) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' is not an email address", address),
        });
    }

    Ok(())
}
