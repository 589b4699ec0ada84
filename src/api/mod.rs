//! Reddit API module.
//!
//! This module provides:
//! - The `ForumClient` seam used by the download pipeline
//! - An HTTP client for Reddit's public JSON listings
//! - Listing response types

pub mod client;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::{ByteStream, ForumClient, ImageResponse, RedditApi, PAGE_SIZE};
pub use types::*;
