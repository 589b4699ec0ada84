//! Reddit HTTP client.

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{header, Client, StatusCode};
use url::Url;

use crate::api::types::{Listing, ListingData};
use crate::config::Timeframe;
use crate::error::{Error, Result};

/// Reddit base URL.
const API_BASE: &str = "https://www.reddit.com";

/// Maximum posts Reddit returns per listing page.
pub const PAGE_SIZE: u32 = 100;

/// Body chunks of a downloaded file.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>>>;

/// An opened image download.
pub struct ImageResponse {
    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

/// Source of subreddit listings and image bodies.
#[async_trait]
pub trait ForumClient: Send + Sync {
    /// Fetch one page of top posts for a subreddit.
    async fn top_listing(
        &self,
        subreddit: &str,
        timeframe: Timeframe,
        after: Option<&str>,
        limit: u32,
    ) -> Result<ListingData>;

    /// Start downloading an image; fails on a non-2xx response.
    async fn open_image(&self, url: &str) -> Result<ImageResponse>;
}

/// Client for Reddit's public JSON listings.
pub struct RedditApi {
    client: Client,
    base_url: Url,
}

impl RedditApi {
    /// Create a client against www.reddit.com.
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_base_url(user_agent, API_BASE)
    }

    /// Create a client against another host (mirrors, local proxies).
    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Build the listing URL for a page of top posts.
    fn listing_url(
        &self,
        subreddit: &str,
        timeframe: Timeframe,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Url> {
        let mut url = self.base_url.join(&format!("r/{}/top.json", subreddit))?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("t", timeframe.as_str())
                .append_pair("limit", &limit.min(PAGE_SIZE).to_string())
                .append_pair("raw_json", "1");
            if let Some(after) = after {
                query.append_pair("after", after);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl ForumClient for RedditApi {
    async fn top_listing(
        &self,
        subreddit: &str,
        timeframe: Timeframe,
        after: Option<&str>,
        limit: u32,
    ) -> Result<ListingData> {
        let url = self.listing_url(subreddit, timeframe, after, limit)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(subreddit, e.to_string()))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::fetch(subreddit, "rate limited (HTTP 429)"));
        }

        if !status.is_success() {
            return Err(Error::fetch(subreddit, format!("HTTP {}", status)));
        }

        // Unknown subreddits are redirected to the search page
        let expected_prefix = format!("/r/{}/", subreddit.to_lowercase());
        if !response
            .url()
            .path()
            .to_lowercase()
            .starts_with(&expected_prefix)
        {
            return Err(Error::fetch(
                subreddit,
                format!("redirected to {}", response.url()),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::fetch(subreddit, e.to_string()))?;
        tracing::debug!("Listing response length: {} bytes", text.len());

        let listing: Listing = serde_json::from_str(&text).map_err(|e| {
            Error::fetch(
                subreddit,
                format!(
                    "Error finding data in feed: {} - Response: {}",
                    e,
                    text.chars().take(200).collect::<String>()
                ),
            )
        })?;

        Ok(listing.data)
    }

    async fn open_image(&self, url: &str) -> Result<ImageResponse> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                status
            )));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let content_length = response.content_length();

        let body = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| Error::Download(format!("Stream error: {}", e)))
            })
            .boxed();

        Ok(ImageResponse {
            content_type,
            content_length,
            body,
        })
    }
}
