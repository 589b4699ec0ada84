//! Download module for fetching subreddit listings and saving images.

pub mod media;
pub mod state;
pub mod subreddit;

pub use media::{download_image, DownloadOutcome};
pub use state::{DownloadState, EmailStatus, GlobalState};
pub use subreddit::{download_subreddit, fetch_top_posts};
