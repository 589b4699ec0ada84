//! Configuration module for reddit-top-dl.
//!
//! This module handles:
//! - Loading a named section from the INI config file
//! - Loading SMTP credentials from their own file
//! - Configuration validation

pub mod loader;
pub mod timeframe;
pub mod validation;

pub use loader::{Config, Credentials, EmailConfig};
pub use timeframe::Timeframe;
pub use validation::{
    is_valid_subreddit_name, parse_bool, parse_subreddits, validate_limit, DEFAULT_LIMIT,
};
