//! In-memory `ForumClient` for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::api::client::{ForumClient, ImageResponse};
use crate::api::types::{ListingData, PostData, Thing};
use crate::config::Timeframe;
use crate::error::{Error, Result};

/// Canned listings and image bodies, with a record of every call.
#[derive(Default)]
pub struct MockForum {
    listings: HashMap<String, std::result::Result<Vec<PostData>, String>>,
    images: HashMap<String, std::result::Result<(String, Vec<u8>), String>>,
    broken: HashSet<String>,
    pub listing_calls: Mutex<Vec<(String, Timeframe)>>,
    pub image_calls: Mutex<Vec<String>>,
}

impl MockForum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `posts` for a subreddit.
    pub fn with_posts(mut self, subreddit: &str, posts: Vec<PostData>) -> Self {
        self.listings.insert(subreddit.to_string(), Ok(posts));
        self
    }

    /// Fail every listing request for a subreddit.
    pub fn with_failing_subreddit(mut self, subreddit: &str, message: &str) -> Self {
        self.listings
            .insert(subreddit.to_string(), Err(message.to_string()));
        self
    }

    /// Serve `bytes` as an image at `url`.
    pub fn with_image(mut self, url: &str, bytes: &[u8]) -> Self {
        self.images
            .insert(url.to_string(), Ok(("image/jpeg".to_string(), bytes.to_vec())));
        self
    }

    /// Serve `bytes` at `url` with a specific content type.
    pub fn with_body(mut self, url: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.images.insert(
            url.to_string(),
            Ok((content_type.to_string(), bytes.to_vec())),
        );
        self
    }

    /// Answer `url` with an HTTP error.
    pub fn with_missing_image(mut self, url: &str, message: &str) -> Self {
        self.images
            .insert(url.to_string(), Err(message.to_string()));
        self
    }

    /// Serve a body at `url` that fails after its first chunk.
    pub fn with_broken_stream(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    pub fn listing_subreddits(&self) -> Vec<String> {
        self.listing_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.image_calls.lock().unwrap().clone()
    }
}

/// Build listing data for a post.
pub fn post(id: &str, subreddit: &str, title: &str, url: &str) -> PostData {
    PostData {
        id: id.to_string(),
        title: title.to_string(),
        subreddit: subreddit.to_string(),
        url: Some(url.to_string()),
        created_utc: 1_700_000_000.0,
        post_hint: None,
        is_video: false,
    }
}

#[async_trait]
impl ForumClient for MockForum {
    async fn top_listing(
        &self,
        subreddit: &str,
        timeframe: Timeframe,
        _after: Option<&str>,
        limit: u32,
    ) -> Result<ListingData> {
        self.listing_calls
            .lock()
            .unwrap()
            .push((subreddit.to_string(), timeframe));

        match self.listings.get(subreddit) {
            Some(Ok(posts)) => Ok(ListingData {
                after: None,
                children: posts
                    .iter()
                    .take(limit as usize)
                    .cloned()
                    .map(|data| Thing {
                        kind: "t3".to_string(),
                        data,
                    })
                    .collect(),
            }),
            Some(Err(message)) => Err(Error::fetch(subreddit, message.clone())),
            None => Err(Error::fetch(subreddit, "HTTP 404 Not Found")),
        }
    }

    async fn open_image(&self, url: &str) -> Result<ImageResponse> {
        self.image_calls.lock().unwrap().push(url.to_string());

        if self.broken.contains(url) {
            let chunks: Vec<Result<Vec<u8>>> = vec![
                Ok(b"\xff\xd8\xff\xe0".to_vec()),
                Err(Error::Download("Stream error: connection reset".to_string())),
            ];
            return Ok(ImageResponse {
                content_type: Some("image/jpeg".to_string()),
                content_length: None,
                body: stream::iter(chunks).boxed(),
            });
        }

        match self.images.get(url) {
            Some(Ok((content_type, bytes))) => {
                let chunks: Vec<Result<Vec<u8>>> =
                    bytes.chunks(4).map(|chunk| Ok(chunk.to_vec())).collect();
                Ok(ImageResponse {
                    content_type: Some(content_type.clone()),
                    content_length: Some(bytes.len() as u64),
                    body: stream::iter(chunks).boxed(),
                })
            }
            Some(Err(message)) => Err(Error::Download(message.clone())),
            None => Err(Error::Download(
                "Failed to download file: HTTP 404 Not Found".to_string(),
            )),
        }
    }
}
