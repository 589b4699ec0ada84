//! Post representation.

use chrono::{DateTime, Utc};
use url::Url;

/// A fetched post, kept only until its download decision is made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    /// Base-36 post ID.
    pub id: String,

    pub title: String,

    /// Subreddit the post was fetched from.
    pub subreddit: String,

    /// Linked URL.
    pub url: String,

    /// Creation time in seconds since the epoch (UTC).
    pub created_utc: i64,

    /// Reddit's content hint for the link, e.g. `image` or `hosted:video`.
    pub content_type: Option<String>,
}

impl Post {
    /// Lowercased file extension of the URL path, ignoring any query string.
    pub fn url_extension(&self) -> Option<String> {
        let url = Url::parse(&self.url).ok()?;
        let last_segment = url.path_segments()?.next_back()?;
        let (stem, ext) = last_segment.rsplit_once('.')?;

        if stem.is_empty() || ext.is_empty() {
            return None;
        }

        Some(ext.to_lowercase())
    }

    /// Creation date for filenames (`YYYY-MM-DD`).
    pub fn created_date(&self) -> String {
        DateTime::<Utc>::from_timestamp(self.created_utc, 0)
            .unwrap_or_default()
            .format("%Y-%m-%d")
            .to_string()
    }
}
