//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     dl-reddit-top                                     ║
║     Top image posts from your favourite subreddits    ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    section: &str,
    subreddits: &[String],
    timeframe: &str,
    output_dir: &str,
    send_email: bool,
) {
    println!();
    println!("{}", style(format!("Configuration [{}]:", section)).bold());
    println!("  Subreddits: {}", subreddits.join(", "));
    println!("  Timeframe:  {}", timeframe);
    println!("  Directory:  {}", output_dir);
    println!("  Email:      {}", if send_email { "yes" } else { "no" });
    println!();
}
