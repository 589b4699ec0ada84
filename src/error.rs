//! Error types for the reddit-top-dl application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("No config section \"{0}\" was found")]
    MissingSection(String),

    #[error("Config parse error: {0}")]
    Ini(#[from] ini::ParseError),

    // Fetch errors
    #[error("Could not get r/{subreddit} data: {message}")]
    Fetch { subreddit: String, message: String },

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // Notification errors
    #[error("Email notification failed: {0}")]
    Notify(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error comes from loading or validating configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::MissingSection(_)
                | Error::Ini(_)
        )
    }

    /// Build a fetch error for a subreddit.
    pub fn fetch(subreddit: &str, message: impl Into<String>) -> Self {
        Error::Fetch {
            subreddit: subreddit.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    use super::Error;
    use crate::download::GlobalState;

    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_SUBREDDITS_FAILED: i32 = 6;

    /// Exit code for a run that stopped with an error.
    pub fn for_error(error: &Error) -> i32 {
        if error.is_config() {
            CONFIG_ERROR
        } else {
            UNEXPECTED_ERROR
        }
    }

    /// Exit code for a run that went through every subreddit.
    ///
    /// The notification outcome does not count.
    pub fn for_run(state: &GlobalState) -> i32 {
        if state.has_failures() {
            SOME_SUBREDDITS_FAILED
        } else {
            SUCCESS
        }
    }
}
