//! Statistics reporting.

use console::style;

use crate::download::{DownloadState, EmailStatus, GlobalState};

/// Print statistics for a single subreddit.
pub fn print_subreddit_stats(state: &DownloadState) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for r/{}:", state.subreddit)).bold()
    );
    println!("  Posts:      {}", state.posts_found);
    println!("  Images:     {}", state.images_found);
    println!("  Downloaded: {}", state.downloaded());
    println!(
        "  Skipped:    {} ({} existing, {} duplicates)",
        state.skipped(),
        state.existing_count,
        state.duplicate_count
    );
    if state.failed_count > 0 {
        println!("  Failed:     {}", style(state.failed_count).red());
    }
}

/// Print global statistics across all subreddits.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Subreddits processed: {}", state.subreddits_processed);
    if state.subreddits_failed > 0 {
        println!(
            "  Subreddits failed:    {}",
            style(state.subreddits_failed).red()
        );
    }
    println!("  Images found: {}", state.images_found);
    println!("  Downloaded:   {}", style(state.downloaded).green());
    println!(
        "  Skipped:      {} ({} existing, {} duplicates)",
        state.existing_count + state.duplicate_count,
        state.existing_count,
        state.duplicate_count
    );
    if state.downloads_failed > 0 {
        println!("  Failed:       {}", style(state.downloads_failed).red());
    }
    match state.email {
        EmailStatus::NotRequested => {}
        EmailStatus::Sent => println!("  Email:        sent"),
        EmailStatus::Failed => println!("  Email:        {}", style("failed").red()),
    }
    println!("{}", style("═".repeat(50)).dim());
}
