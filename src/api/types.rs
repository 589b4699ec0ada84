//! Reddit listing response types.

use serde::Deserialize;

/// A listing wrapper as returned by `/r/<sub>/top.json`.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

/// The contents of a listing page.
#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    /// Cursor for the next page, absent on the last page.
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// One listing entry (`kind` is `t3` for links).
#[derive(Debug, Clone, Deserialize)]
pub struct Thing {
    pub kind: String,
    pub data: PostData,
}

/// Fields of a link post used by the downloader.
#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    /// Base-36 post ID.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subreddit: String,
    /// Linked URL; for self posts this points back at the thread.
    pub url: Option<String>,
    /// Creation time in seconds since the epoch (UTC).
    #[serde(default)]
    pub created_utc: f64,
    /// Reddit's guess at the link's content ("image", "link", "hosted:video", ...).
    pub post_hint: Option<String>,
    #[serde(default)]
    pub is_video: bool,
}
