pub mod health;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/request",
            post(resume::handle_request_resume),
        )
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// End-to-end request scenarios
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::convert::testing::{AlwaysFails, AlwaysSucceeds};
    use crate::convert::{RenderStrategy, ResumeConverter};
    use crate::mail::MockMailer;

    const OWNER: &str = "owner@jicklampago.xyz";

    fn test_config() -> Config {
        Config {
            mail_host: "smtp.test.invalid".to_string(),
            mail_port: 587,
            mail_user: "owner@jicklampago.xyz".to_string(),
            mail_password: "secret".to_string(),
            mail_from: "no-reply@jicklampago.xyz".to_string(),
            owner_email: OWNER.to_string(),
            chrome_executable: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn app(mailer: Arc<MockMailer>, strategies: Vec<Arc<dyn RenderStrategy>>) -> Router {
        build_router(AppState {
            mailer,
            converter: Arc::new(ResumeConverter::new(strategies)),
            config: test_config(),
        })
    }

    async fn post_email(app: Router, email: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resume/request")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(r#"{{"email":"{email}"}}"#)))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_ok() {
        let mailer = Arc::new(MockMailer::healthy());
        let app = app(mailer, vec![Arc::new(AlwaysSucceeds::new("stub"))]);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Scenario A: both strategies healthy → 200, requester gets the PDF,
    // owner gets a notification without attachment.
    #[tokio::test]
    async fn test_healthy_pipeline_delivers_pdf_and_notification() {
        let mailer = Arc::new(MockMailer::healthy());
        let app = app(
            mailer.clone(),
            vec![
                Arc::new(AlwaysSucceeds::new("primary")),
                Arc::new(AlwaysSucceeds::new("fallback")),
            ],
        );

        let (status, body) = post_email(app, "test@example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].as_str().unwrap().contains("Resume sent"));

        let sent = mailer.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 2);

        assert_eq!(sent[0].to, "test@example.com");
        assert_eq!(sent[0].subject, "Jick T. Lampago - Resume");
        assert_eq!(sent[0].attachments.len(), 1);
        assert_eq!(sent[0].attachments[0].filename, "Jick_Lampago_Resume.pdf");
        assert_eq!(sent[0].attachments[0].content_type, "application/pdf");
        assert!(!sent[0].attachments[0].content.is_empty());

        assert_eq!(sent[1].to, OWNER);
        assert_eq!(sent[1].subject, "New Resume Request from Portfolio");
        assert!(sent[1].attachments.is_empty());
        assert!(sent[1].html.contains("test@example.com"));
    }

    // Scenario B: malformed address → 400, zero sends.
    #[tokio::test]
    async fn test_invalid_email_is_rejected_without_side_effects() {
        let mailer = Arc::new(MockMailer::healthy());
        let app = app(mailer.clone(), vec![Arc::new(AlwaysSucceeds::new("stub"))]);

        let (status, body) = post_email(app, "not-an-email").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email address");
        assert_eq!(mailer.sent_count(), 0);
    }

    // Scenario C: primary fails, fallback succeeds → 200 with an attachment
    // produced by the fallback, invoked exactly once.
    #[tokio::test]
    async fn test_primary_failure_falls_back_and_still_attaches() {
        let mailer = Arc::new(MockMailer::healthy());
        let fallback = Arc::new(AlwaysSucceeds::new("fallback"));
        let app = app(
            mailer.clone(),
            vec![Arc::new(AlwaysFails { label: "primary" }), fallback.clone()],
        );

        let (status, _) = post_email(app, "test@example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
        let sent = mailer.sent.lock().unwrap().clone();
        assert_eq!(sent[0].attachments.len(), 1);
    }

    // Scenario D: every strategy fails → 200, plain email without attachment.
    #[tokio::test]
    async fn test_conversion_collapse_still_sends_plain_email() {
        let mailer = Arc::new(MockMailer::healthy());
        let app = app(
            mailer.clone(),
            vec![
                Arc::new(AlwaysFails { label: "primary" }),
                Arc::new(AlwaysFails { label: "fallback" }),
            ],
        );

        let (status, body) = post_email(app, "test@example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let sent = mailer.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].attachments.is_empty());
        assert!(sent[1].html.contains("PDF Attached:</strong> No"));
    }

    // Scenario E: relay unreachable → 500, single attempt, owner
    // notification never attempted.
    #[tokio::test]
    async fn test_unreachable_relay_returns_500_and_short_circuits() {
        let mailer = Arc::new(MockMailer::unreachable());
        let app = app(mailer.clone(), vec![Arc::new(AlwaysSucceeds::new("stub"))]);

        let (status, body) = post_email(app, "test@example.com").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to send resume. Please try again.");
        assert_eq!(mailer.sent_count(), 1, "owner send must not be attempted");
    }

    // Owner-notification failure is invisible to the caller.
    #[tokio::test]
    async fn test_owner_notification_failure_does_not_fail_the_request() {
        let mailer = Arc::new(MockMailer::scripted(vec![
            Ok(()),
            Err("mailbox full".to_string()),
        ]));
        let app = app(mailer.clone(), vec![Arc::new(AlwaysSucceeds::new("stub"))]);

        let (status, body) = post_email(app, "test@example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(mailer.sent_count(), 2);
    }
}
