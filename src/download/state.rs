//! Download state tracking.

use std::collections::HashSet;
use std::path::PathBuf;

/// Per-subreddit download state.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub subreddit: String,

    // Listing
    pub posts_found: u64,
    pub images_found: u64,

    // Files written during this run
    pub saved_files: Vec<PathBuf>,

    // Statistics
    pub existing_count: u64,
    pub duplicate_count: u64,
    pub failed_count: u64,
}

impl DownloadState {
    /// Create a new download state for a subreddit.
    pub fn new(subreddit: &str) -> Self {
        Self {
            subreddit: subreddit.to_string(),
            ..Default::default()
        }
    }

    /// Record a newly written file.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.saved_files.push(path);
    }

    /// Increment the count of files already on disk.
    pub fn increment_existing(&mut self) {
        self.existing_count += 1;
    }

    /// Increment the count of same-content images.
    pub fn increment_duplicate(&mut self) {
        self.duplicate_count += 1;
    }

    /// Increment the count of failed downloads.
    pub fn increment_failed(&mut self) {
        self.failed_count += 1;
    }

    /// Number of files written.
    pub fn downloaded(&self) -> u64 {
        self.saved_files.len() as u64
    }

    /// Posts skipped because the file existed or the content was a duplicate.
    pub fn skipped(&self) -> u64 {
        self.existing_count + self.duplicate_count
    }
}

/// Outcome of the end-of-run notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailStatus {
    #[default]
    NotRequested,
    Sent,
    Failed,
}

/// Global statistics across all subreddits.
#[derive(Debug, Default)]
pub struct GlobalState {
    /// Content hashes of every image saved this run.
    pub seen_hashes: HashSet<String>,

    pub posts_found: u64,
    pub images_found: u64,
    pub downloaded: u64,
    pub existing_count: u64,
    pub duplicate_count: u64,
    pub downloads_failed: u64,
    pub subreddits_processed: u64,
    pub subreddits_failed: u64,
    pub email: EmailStatus,
}

impl GlobalState {
    /// Add statistics from a subreddit's download state.
    pub fn add_subreddit_stats(&mut self, state: &DownloadState) {
        self.posts_found += state.posts_found;
        self.images_found += state.images_found;
        self.downloaded += state.downloaded();
        self.existing_count += state.existing_count;
        self.duplicate_count += state.duplicate_count;
        self.downloads_failed += state.failed_count;
        self.subreddits_processed += 1;
    }

    /// Mark a subreddit as failed.
    pub fn mark_subreddit_failed(&mut self) {
        self.subreddits_failed += 1;
    }

    /// Whether any subreddit or download failed.
    ///
    /// Notification failures are not counted.
    pub fn has_failures(&self) -> bool {
        self.subreddits_failed > 0 || self.downloads_failed > 0
    }

    /// One-line description of the run.
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "Downloaded {} image(s) from {} subreddit(s); {} skipped",
            self.downloaded,
            self.subreddits_processed,
            self.existing_count + self.duplicate_count
        );

        if self.has_failures() {
            line.push_str(&format!(
                "; {} subreddit(s) and {} download(s) failed",
                self.subreddits_failed, self.downloads_failed
            ));
        }

        line.push('.');
        line
    }
}
