//! Operator alert channel abstraction
//!
//! Error-category log entries are mirrored to an external channel where
//! operators watch for trouble. The channel itself (chat webhook, mail pipe,
//! pager bridge) lives outside this crate; this module defines the seam.

use thiserror::Error;

/// Errors an alert channel can report back
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The channel rejected the message or could not deliver it
    #[error("alert delivery failed: {0}")]
    Delivery(String),

    /// I/O failure while talking to the channel
    #[error("alert channel I/O error")]
    Io(#[from] std::io::Error),
}

/// Trait for operator alert channels
///
/// Implementations deliver one short, pre-formatted text message. The contract
/// is fire-and-forget: the caller hands over the text and does not retry or
/// queue on failure. Implementations should bound their own delivery time;
/// callers apply no timeout.
///
/// # Object Safety
/// This trait is object-safe to allow `Arc<dyn Notifier>` usage.
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the alert channel
    fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Alert channel that discards every message
///
/// For hosts without an operator channel wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn send(&self, _text: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}
