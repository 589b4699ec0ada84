//! reddit-top-dl - Download the top image posts of subreddits
//!
//! This library fetches "top" listings from Reddit, keeps the posts that link
//! directly to an image, and saves those images into a local directory.
//!
//! # Features
//!
//! - Named sections in an INI config file, one run per section
//! - Top posts by year, month, week or day
//! - Image detection from the linked URL
//! - Streaming downloads with in-run deduplication via MD5
//! - Optional email notification once a run is complete
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reddit_top_dl::{runner, Config, RedditApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("dl-reddit-top.conf"), Some("FunnyAnimals"))?;
//!     let api = RedditApi::new(&config.user_agent)?;
//!
//!     let state = runner::run(&api, None, &config, runner::RunOptions::default()).await;
//!     println!("{}", state.summary_line());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod notify;
pub mod output;
pub mod runner;

// Re-exports for convenience
pub use api::{ForumClient, RedditApi};
pub use config::{Config, Credentials, EmailConfig, Timeframe};
pub use download::{download_image, download_subreddit, fetch_top_posts, DownloadState, GlobalState};
pub use error::{Error, Result};
pub use media::{is_image_post, Post};
pub use notify::{EmailMessage, Notifier, SmtpNotifier};
