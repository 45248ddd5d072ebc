use std::sync::Arc;

use crate::config::Config;
use crate::convert::ResumeConverter;
use crate::mail::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable delivery backend. Default: `SmtpMailer` over the configured relay.
    pub mailer: Arc<dyn Mailer>,
    /// Conversion pipeline: ordered strategy list, first success wins.
    pub converter: Arc<ResumeConverter>,
    pub config: Config,
}
