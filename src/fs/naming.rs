//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};
use crate::media::Post;

/// Check a generated filename and replace characters Windows rejects.
///
/// Names that could escape the output directory are an error.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(name.to_string()));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(name.escape_default().to_string()));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename("empty filename".to_string()));
    }

    Ok(sanitized)
}

/// Longest title slug kept in a filename, in characters.
const MAX_SLUG_CHARS: usize = 50;

/// Extension used when the URL carries none.
const FALLBACK_EXTENSION: &str = "jpg";

/// Turn a post title into a filename-safe slug.
///
/// Punctuation is dropped, whitespace runs become `-`, and the result is cut
/// to 50 characters.
pub fn slugify_title(title: &str) -> String {
    let punctuation = Regex::new(r"[^\w\s]").unwrap();
    let whitespace = Regex::new(r"\s+").unwrap();

    let stripped = punctuation.replace_all(title.trim(), "");
    let dashed = whitespace.replace_all(stripped.trim(), "-");

    dashed
        .chars()
        .take(MAX_SLUG_CHARS)
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

/// Generate the filename for a post.
///
/// Produces `<YYYY-MM-DD>_<subreddit>_<slug>_<id>.<ext>`. The name depends only
/// on the post, so reruns map a post to the same file.
pub fn make_filename(post: &Post) -> Result<String> {
    let subreddit = &post.subreddit;
    let slug = slugify_title(&post.title);
    let extension = post
        .url_extension()
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());

    let filename = if slug.is_empty() {
        format!(
            "{}_{}_{}.{}",
            post.created_date(),
            subreddit,
            post.id,
            extension
        )
    } else {
        format!(
            "{}_{}_{}_{}.{}",
            post.created_date(),
            subreddit,
            slug,
            post.id,
            extension
        )
    };

    sanitize_filename(&filename)
}

/// Temporary name a download is streamed to before it is complete.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
