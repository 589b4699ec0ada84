//! Run orchestration: every subreddit of a section, then the notification.

use std::path::Path;

use crate::api::ForumClient;
use crate::config::{Config, Credentials};
use crate::download::{download_subreddit, EmailStatus, GlobalState};
use crate::error::Result;
use crate::notify::{EmailMessage, Notifier, SmtpNotifier};
use crate::output::{print_error, print_info, print_subreddit_stats, print_success, print_warning};

/// Runtime switches that do not come from the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Draw spinners and progress bars.
    pub show_progress: bool,
}

/// Build the SMTP notifier when the section enables email.
///
/// The credentials file is not touched otherwise. Only its path is logged.
pub fn build_notifier(config: &Config, credentials_path: &Path) -> Result<Option<SmtpNotifier>> {
    let Some(email) = &config.email else {
        return Ok(None);
    };

    let credentials = Credentials::load(credentials_path)?;
    tracing::debug!("Loaded credentials from {}", credentials_path.display());

    Ok(Some(SmtpNotifier::new(credentials, email)))
}

/// Process every subreddit of `config` in order, then send the notification.
///
/// A subreddit that cannot be fetched is reported and skipped. The notifier is
/// only called when the section enables email, once, after all downloads.
pub async fn run(
    client: &dyn ForumClient,
    notifier: Option<&dyn Notifier>,
    config: &Config,
    options: RunOptions,
) -> GlobalState {
    let mut global_state = GlobalState::default();

    for subreddit in &config.subreddits {
        print_info(&format!("Processing subreddit: r/{}", subreddit));

        match download_subreddit(
            client,
            config,
            subreddit,
            &mut global_state.seen_hashes,
            options.show_progress,
        )
        .await
        {
            Ok(state) => {
                print_subreddit_stats(&state);
                global_state.add_subreddit_stats(&state);
            }
            Err(e) => {
                print_error(&format!("Failed to process r/{}: {}", subreddit, e));
                global_state.mark_subreddit_failed();
            }
        }
    }

    if let (Some(email), Some(notifier)) = (&config.email, notifier) {
        let message = EmailMessage::compose(email, &global_state.summary_line());

        match notifier.send(&message).await {
            Ok(()) => {
                print_success(&format!("Notification sent to {}", email.address));
                global_state.email = EmailStatus::Sent;
            }
            Err(e) => {
                print_warning(&format!("{}", e));
                global_state.email = EmailStatus::Failed;
            }
        }
    }

    global_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{post, MockForum};
    use crate::config::{EmailConfig, Timeframe};
    use crate::notify::mock::RecordingNotifier;

    const FUNNY_ANIMALS: &str = r#"
[FunnyAnimals]
send_email = True
email_address = someone@example.com
email_subject = Funny animals are ready
email_body = New pictures were downloaded.
output_directory = /placeholder
subreddits = AnimalsBeingBros,rarepuppers
timeframe = month
"#;

    fn funny_animals(output_dir: &Path) -> Config {
        let mut config = Config::parse(FUNNY_ANIMALS, Some("FunnyAnimals")).unwrap();
        config.output_directory = output_dir.to_path_buf();
        config
    }

    fn funny_animals_forum() -> MockForum {
        MockForum::new()
            .with_posts(
                "AnimalsBeingBros",
                vec![
                    post("bro1", "AnimalsBeingBros", "Cat helps dog", "https://i.redd.it/bro1.jpg"),
                    post("bro2", "AnimalsBeingBros", "Otters holding hands", "https://v.redd.it/bro2"),
                ],
            )
            .with_posts(
                "rarepuppers",
                vec![
                    post("pup1", "rarepuppers", "Smol boy", "https://i.imgur.com/pup1.png"),
                    post("pup2", "rarepuppers", "Doggo story", "https://www.reddit.com/r/rarepuppers/comments/pup2/doggo_story/"),
                ],
            )
            .with_image("https://i.redd.it/bro1.jpg", b"cat and dog")
            .with_image("https://i.imgur.com/pup1.png", b"small boy")
    }

    fn sorted_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_build_notifier_skips_credentials_when_email_off() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = funny_animals(dir.path());
        config.email = None;

        let notifier = build_notifier(&config, &dir.path().join("missing")).unwrap();
        assert!(notifier.is_none());
    }

    #[test]
    fn test_build_notifier_loads_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let config = funny_animals(dir.path());
        let path = dir.path().join(".credentials");

        let err = build_notifier(&config, &path).unwrap_err();
        assert!(err.is_config());

        std::fs::write(
            &path,
            "[credentials]\naddress = sender@example.com\npassword = hunter2\n",
        )
        .unwrap();
        assert!(build_notifier(&config, &path).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_funny_animals_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = funny_animals(dir.path());
        let client = funny_animals_forum();
        let notifier = RecordingNotifier::new();

        let state = run(&client, Some(&notifier), &config, RunOptions::default()).await;

        assert_eq!(
            client.listing_subreddits(),
            vec!["AnimalsBeingBros", "rarepuppers"]
        );
        assert!(client
            .listing_calls
            .lock()
            .unwrap()
            .iter()
            .all(|(_, timeframe)| *timeframe == Timeframe::Month));
        assert_eq!(
            sorted_files(dir.path()),
            vec![
                "2023-11-14_AnimalsBeingBros_Cat-helps-dog_bro1.jpg",
                "2023-11-14_rarepuppers_Smol-boy_pup1.png",
            ]
        );

        assert_eq!(notifier.sent_count(), 1);
        let sent = notifier.sent.lock().unwrap()[0].clone();
        assert_eq!(sent.to, "someone@example.com");
        assert_eq!(sent.subject, "Funny animals are ready");
        assert!(sent.body.starts_with("New pictures were downloaded."));
        assert!(sent.body.contains("Downloaded 2 image(s) from 2 subreddit(s)"));

        assert_eq!(state.downloaded, 2);
        assert_eq!(state.email, EmailStatus::Sent);
        assert!(!state.has_failures());
    }

    #[tokio::test]
    async fn test_failed_subreddit_does_not_block_others() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = funny_animals(dir.path());
        config.subreddits = vec![
            "doesnotexist".to_string(),
            "AnimalsBeingBros".to_string(),
            "rarepuppers".to_string(),
        ];
        let client = funny_animals_forum().with_failing_subreddit("doesnotexist", "HTTP 404");
        let notifier = RecordingNotifier::new();

        let state = run(&client, Some(&notifier), &config, RunOptions::default()).await;

        assert_eq!(
            client.listing_subreddits(),
            vec!["doesnotexist", "AnimalsBeingBros", "rarepuppers"]
        );
        assert_eq!(state.subreddits_failed, 1);
        assert_eq!(state.subreddits_processed, 2);
        assert_eq!(state.downloaded, 2);
        assert!(state.has_failures());
        assert_eq!(notifier.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_email_disabled_never_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = funny_animals(dir.path());
        config.email = None;
        let client = funny_animals_forum().with_failing_subreddit("rarepuppers", "HTTP 500");
        let notifier = RecordingNotifier::new();

        let state = run(&client, Some(&notifier), &config, RunOptions::default()).await;

        assert_eq!(notifier.sent_count(), 0);
        assert_eq!(state.email, EmailStatus::NotRequested);
    }

    #[tokio::test]
    async fn test_notify_failure_keeps_downloads() {
        let dir = tempfile::tempdir().unwrap();
        let config = funny_animals(dir.path());
        let client = funny_animals_forum();
        let notifier = RecordingNotifier::failing();

        let state = run(&client, Some(&notifier), &config, RunOptions::default()).await;

        assert_eq!(state.email, EmailStatus::Failed);
        assert_eq!(state.downloaded, 2);
        assert!(!state.has_failures());
        assert_eq!(sorted_files(dir.path()).len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_content_across_subreddits() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = funny_animals(dir.path());
        config.email = Some(EmailConfig {
            address: "someone@example.com".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 587,
        });
        let client = MockForum::new()
            .with_posts(
                "AnimalsBeingBros",
                vec![post("a", "AnimalsBeingBros", "Repost", "https://i.redd.it/a.jpg")],
            )
            .with_posts(
                "rarepuppers",
                vec![post("b", "rarepuppers", "Repost", "https://i.redd.it/b.jpg")],
            )
            .with_image("https://i.redd.it/a.jpg", b"identical")
            .with_image("https://i.redd.it/b.jpg", b"identical");

        let state = run(&client, None, &config, RunOptions::default()).await;

        assert_eq!(state.downloaded, 1);
        assert_eq!(state.duplicate_count, 1);
        assert_eq!(state.email, EmailStatus::NotRequested);
    }
}
