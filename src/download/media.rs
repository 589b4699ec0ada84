//! Image downloading.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{ByteStream, ForumClient};
use crate::dedup::ContentHasher;
use crate::error::{Error, Result};
use crate::fs::{make_filename, output_path, partial_path};
use crate::media::Post;

/// Result of handling one image post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Written to this path.
    Saved(PathBuf),
    /// A file with this name already existed; nothing was fetched.
    Existing(PathBuf),
    /// Same content as an image saved earlier in the run.
    Duplicate(String),
}

/// Download an image post into `output_dir`.
///
/// Existing files are skipped without a request. The body is streamed to a
/// `.part` file and renamed once complete, so an interrupted download never
/// leaves a file under the final name.
pub async fn download_image(
    client: &dyn ForumClient,
    post: &Post,
    output_dir: &Path,
    seen_hashes: &mut HashSet<String>,
) -> Result<DownloadOutcome> {
    let filename = make_filename(post)?;
    let output_path = output_path(output_dir, &filename);
    tracing::debug!("Filename: {}", filename);

    if output_path.exists() {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(DownloadOutcome::Existing(output_path));
    }

    tokio::fs::create_dir_all(output_dir).await?;

    let response = client.open_image(&post.url).await?;

    if let Some(content_type) = response.content_type.as_deref() {
        if !is_image_content_type(content_type) {
            return Err(Error::Download(format!(
                "Unexpected content type '{}' for {}",
                content_type, post.url
            )));
        }
    }

    if let Some(length) = response.content_length {
        tracing::debug!("Content length: {} bytes", length);
    }

    let part_path = partial_path(&output_path);
    let hash = match stream_to_file(response.body, &part_path).await {
        Ok(hash) => hash,
        Err(e) => {
            remove_partial(&part_path).await;
            return Err(e);
        }
    };
    tracing::debug!("Calculated md5: {}", hash);

    if seen_hashes.contains(&hash) {
        remove_partial(&part_path).await;
        return Ok(DownloadOutcome::Duplicate(hash));
    }

    finish_partial(&part_path, &output_path).await?;
    seen_hashes.insert(hash);

    tracing::info!("Downloaded: {}", output_path.display());

    Ok(DownloadOutcome::Saved(output_path))
}

/// Stream a body to `path`, returning its MD5 digest.
async fn stream_to_file(mut body: ByteStream, path: &Path) -> Result<String> {
    let mut file = File::create(path).await?;
    let mut hasher = ContentHasher::new();

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        hasher.update(&chunk);
    }

    file.flush().await?;

    if hasher.bytes() == 0 {
        return Err(Error::Download("Empty response body".to_string()));
    }

    Ok(hasher.finalize())
}

/// Move a completed `.part` file to its final name.
async fn finish_partial(part_path: &Path, output_path: &Path) -> Result<()> {
    if let Err(e) = tokio::fs::rename(part_path, output_path).await {
        remove_partial(part_path).await;
        return Err(e.into());
    }
    Ok(())
}

async fn remove_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::debug!("Could not remove {}: {}", path.display(), e);
    }
}

/// Whether a response `Content-Type` can carry image bytes.
fn is_image_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    essence.starts_with("image/") || essence == "application/octet-stream"
}
