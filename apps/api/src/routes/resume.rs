//! The resume-request boundary: validate, convert, deliver, report.

use askama::Template;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::convert::{ConversionResult, PDF_CONTENT_TYPE, RESUME_FILENAME};
use crate::errors::AppError;
use crate::mail::{EmailAttachment, EmailRequest};
use crate::resume::views::{OwnerNotification, RequesterEmail};
use crate::resume::RenderedResume;
use crate::state::AppState;

const RESUME_SUBJECT: &str = "Jick T. Lampago - Resume";
const NOTIFICATION_SUBJECT: &str = "New Resume Request from Portfolio";

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub success: bool,
    pub message: String,
}

/// Deliberately loose check: non-empty, an `@` and a `.` anywhere.
fn is_plausible_email(address: &str) -> bool {
    !address.is_empty() && address.contains('@') && address.contains('.')
}

/// POST /api/v1/resume/request
///
/// Three terminal outcomes: 400 on a malformed address (no side effects),
/// 500 when the requester send fails (the owner notification is then never
/// attempted), 200 once the relay accepts the requester email — regardless
/// of conversion outcome and of the owner notification result.
pub async fn handle_request_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    if !is_plausible_email(&request.email) {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }

    let now = Utc::now();
    let resume = RenderedResume::build(now)?;

    let conversion = state.converter.convert(&resume).await;
    let attachments = match &conversion {
        ConversionResult::Artifact { bytes, strategy } => {
            info!(strategy, "resume artifact ready ({} bytes)", bytes.len());
            vec![EmailAttachment {
                filename: RESUME_FILENAME.to_string(),
                content: bytes.clone(),
                content_type: PDF_CONTENT_TYPE.to_string(),
            }]
        }
        ConversionResult::NoArtifact { failures } => {
            for failure in failures {
                warn!(strategy = failure.strategy, "conversion failed: {}", failure.reason);
            }
            warn!("no resume artifact; sending plain confirmation");
            vec![]
        }
    };
    let pdf_attached = conversion.bytes().is_some();

    let confirmation = EmailRequest {
        to: request.email.clone(),
        subject: RESUME_SUBJECT.to_string(),
        html: RequesterEmail {
            requester: request.email.clone(),
        }
        .render()?,
        attachments,
    };

    // Requester first; a failure here is terminal for the request and
    // short-circuits the owner notification.
    let outcome = state.mailer.send(&confirmation).await?;
    info!(to = %request.email, message_id = %outcome.message_id, "resume email sent");

    notify_owner(&state, &request.email, now, pdf_attached).await;

    Ok(Json(ResumeResponse {
        success: true,
        message: "Resume sent successfully! The professional PDF has been attached to your email."
            .to_string(),
    }))
}

/// Best-effort owner notification: failures are logged, never surfaced.
async fn notify_owner(state: &AppState, requester: &str, now: DateTime<Utc>, pdf_attached: bool) {
    let notification = OwnerNotification {
        requester: requester.to_string(),
        requested_at: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        pdf_attached,
    };

    let html = match notification.render() {
        Ok(html) => html,
        Err(e) => {
            warn!("owner notification template failed: {e}");
            return;
        }
    };

    let message = EmailRequest {
        to: state.config.owner_email.clone(),
        subject: NOTIFICATION_SUBJECT.to_string(),
        html,
        attachments: vec![],
    };

    if let Err(e) = state.mailer.send(&message).await {
        warn!("owner notification failed: {e}");
    }
}
