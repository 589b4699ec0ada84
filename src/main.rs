//! dl-reddit-top - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_top_dl::{
    api::RedditApi,
    cli::Args,
    config::Config,
    error::{exit_codes, Result},
    fs::ensure_output_dir,
    notify::Notifier,
    output::{print_banner, print_config_summary, print_error, print_global_stats, print_info},
    runner::{self, RunOptions},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::for_error(&e) as u8)
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let mut config = Config::load(&args.config_file, args.config.as_deref())?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config)?;

    ensure_output_dir(&config.output_directory)?;

    // Print configuration summary
    print_config_summary(
        &config.name,
        &config.subreddits,
        config.timeframe.as_str(),
        &config.output_directory.display().to_string(),
        config.email_enabled(),
    );

    let notifier = runner::build_notifier(&config, &args.credentials)?;

    // Initialize API client
    let api = RedditApi::new(&config.user_agent)?;
    print_info(&format!("Fetching top posts of the {}", config.timeframe));

    let options = RunOptions {
        show_progress: !args.debug,
    };
    let global_state = runner::run(
        &api,
        notifier.as_ref().map(|n| n as &dyn Notifier),
        &config,
        options,
    )
    .await;

    // Print global statistics
    print_global_stats(&global_state);

    Ok(exit_codes::for_run(&global_state))
}
