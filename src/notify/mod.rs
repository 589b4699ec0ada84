//! Notification module.
//!
//! Sends the optional end-of-run email.

pub mod email;
#[cfg(test)]
pub mod mock;

pub use email::{EmailMessage, Notifier, SmtpNotifier};
