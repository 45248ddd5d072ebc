//! Outbound mail — pluggable, trait-based delivery through a configured relay.
//!
//! Default backend: `SmtpMailer` (lettre, async STARTTLS submission).
//! `AppState` holds an `Arc<dyn Mailer>`, wired at startup.
//!
//! One network send per call; not idempotent — calling twice sends twice.
//! No deduplication, no retry.

use async_trait::async_trait;
use thiserror::Error;

pub mod smtp;

pub use smtp::SmtpMailer;

// ────────────────────────────────────────────────────────────────────────────
// Message data model
// ────────────────────────────────────────────────────────────────────────────

/// A single binary attachment carried by an [`EmailRequest`].
///
/// Invariant: `content` is non-empty. Enforced when the wire message is
/// built — an empty attachment is a [`MailError::EmptyAttachment`].
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

/// One outbound email: recipient, subject, HTML body, optional attachments.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Result of a successful relay submission.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    /// Provider-assigned identifier, taken from the relay's acceptance response.
    pub message_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to assemble message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("invalid attachment content type '{0}'")]
    ContentType(String),

    #[error("attachment '{0}' has empty content")]
    EmptyAttachment(String),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("relay rejected the message: {0}")]
    Relay(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The delivery backend. Implement this to swap transports without touching
/// the handler code.
///
/// Carried in `AppState` as `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, request: &EmailRequest) -> Result<DeliveryOutcome, MailError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────

/// Recording mailer for tests: captures every request and answers each send
/// from a pre-scripted result queue (an exhausted queue answers success).
#[cfg(test)]
pub struct MockMailer {
    pub sent: std::sync::Mutex<Vec<EmailRequest>>,
    results: std::sync::Mutex<std::collections::VecDeque<Result<(), String>>>,
}

#[cfg(test)]
impl MockMailer {
    /// Accepts every send.
    pub fn healthy() -> Self {
        Self::scripted(vec![])
    }

    /// Rejects every send (unreachable relay).
    pub fn unreachable() -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
            results: std::sync::Mutex::new(
                std::iter::repeat(Err("connection refused".to_string()))
                    .take(8)
                    .collect(),
            ),
        }
    }

    /// Answers sends in order from `script`; once exhausted, accepts.
    pub fn scripted(script: Vec<Result<(), String>>) -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
            results: std::sync::Mutex::new(script.into_iter().collect()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, request: &EmailRequest) -> Result<DeliveryOutcome, MailError> {
        self.sent.lock().unwrap().push(request.clone());
        match self.results.lock().unwrap().pop_front() {
            Some(Err(reason)) => Err(MailError::Relay(reason)),
            _ => Ok(DeliveryOutcome {
                message_id: format!("mock-{}", self.sent_count()),
            }),
        }
    }
}
