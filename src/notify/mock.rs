//! Recording `Notifier` for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::notify::email::{EmailMessage, Notifier};

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose sends always fail after being recorded.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());

        if self.fail {
            return Err(Error::Notify("535 authentication failed".to_string()));
        }

        Ok(())
    }
}
