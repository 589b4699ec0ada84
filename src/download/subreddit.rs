//! Subreddit download logic.

use std::collections::HashSet;
use std::time::Duration;

use indicatif::ProgressBar;
use rand::Rng;
use tokio::time::sleep;

use crate::api::{ForumClient, PAGE_SIZE};
use crate::config::{Config, Timeframe};
use crate::download::media::{download_image, DownloadOutcome};
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::media::{is_image_post, parse_listing, Post};
use crate::output::{create_item_bar, create_spinner};

/// Fetch up to `limit` top posts for a subreddit, following listing cursors.
pub async fn fetch_top_posts(
    client: &dyn ForumClient,
    subreddit: &str,
    timeframe: Timeframe,
    limit: u32,
) -> Result<Vec<Post>> {
    let limit = limit as usize;
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut posts: Vec<Post> = Vec::new();
    let mut after: Option<String> = None;

    loop {
        // Rate limiting delay between pages
        if after.is_some() {
            let delay_ms = rand::thread_rng().gen_range(1000..2000);
            sleep(Duration::from_millis(delay_ms)).await;
        }

        let page_limit = (limit - posts.len()).min(PAGE_SIZE as usize) as u32;
        let page = client
            .top_listing(subreddit, timeframe, after.as_deref(), page_limit)
            .await?;

        let next = page.after.clone();
        let page_len = page.children.len();
        posts.extend(parse_listing(page, subreddit));

        tracing::debug!(
            "r/{}: {} entries on page, {} posts so far",
            subreddit,
            page_len,
            posts.len()
        );

        if page_len == 0 || posts.len() >= limit {
            break;
        }

        match next {
            Some(cursor) => after = Some(cursor),
            None => break,
        }
    }

    posts.truncate(limit);
    Ok(posts)
}

/// Fetch, filter and download the top images of one subreddit.
///
/// A fetch failure is returned as an error. Failures of single downloads are
/// logged and counted in the returned state.
pub async fn download_subreddit(
    client: &dyn ForumClient,
    config: &Config,
    subreddit: &str,
    seen_hashes: &mut HashSet<String>,
    show_progress: bool,
) -> Result<DownloadState> {
    let spinner = if show_progress {
        create_spinner(&format!("Fetching top posts from r/{}...", subreddit))
    } else {
        ProgressBar::hidden()
    };

    let fetched = fetch_top_posts(client, subreddit, config.timeframe, config.limit).await;
    spinner.finish_and_clear();
    let posts = fetched?;

    tracing::info!("Downloaded r/{} feed: {} posts", subreddit, posts.len());

    let mut state = DownloadState::new(subreddit);
    state.posts_found = posts.len() as u64;

    let images: Vec<&Post> = posts
        .iter()
        .filter(|post| {
            let is_image = is_image_post(post);
            if is_image {
                tracing::debug!("Found image: {}", post.title);
            } else {
                tracing::debug!("Skipping non-image: {} ({})", post.title, post.url);
            }
            is_image
        })
        .collect();
    state.images_found = images.len() as u64;

    if images.is_empty() {
        tracing::info!("No image posts found in r/{}", subreddit);
        return Ok(state);
    }

    let progress = if show_progress {
        create_item_bar(images.len() as u64, &format!("r/{}", subreddit))
    } else {
        ProgressBar::hidden()
    };

    for post in images {
        tracing::debug!("Processing: {}", post.title);

        match download_image(client, post, &config.output_directory, seen_hashes).await {
            Ok(DownloadOutcome::Saved(path)) => state.mark_saved(path),
            Ok(DownloadOutcome::Existing(path)) => {
                tracing::debug!("Found existing file: {}", path.display());
                state.increment_existing();
            }
            Ok(DownloadOutcome::Duplicate(_)) => {
                tracing::warn!("Found duplicate image: {}", post.title);
                state.increment_duplicate();
            }
            Err(e) => {
                tracing::warn!("Failed to download post {} ({}): {}", post.id, post.url, e);
                state.increment_failed();
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();

    tracing::info!(
        "r/{} complete: {} downloaded, {} skipped, {} failed",
        subreddit,
        state.downloaded(),
        state.skipped(),
        state.failed_count
    );

    Ok(state)
}
