//! Askama views — each struct pairs data with its HTML template file.

use askama::Template;

use crate::resume::content::ResumeContent;

/// The styled, print-ready resume document.
#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumeDocument {
    pub content: ResumeContent,
}

/// Confirmation email sent to the visitor who requested the resume.
#[derive(Template)]
#[template(path = "requester_email.html")]
pub struct RequesterEmail {
    pub requester: String,
}

/// Internal notification sent to the site owner for each request.
#[derive(Template)]
#[template(path = "owner_email.html")]
pub struct OwnerNotification {
    pub requester: String,
    pub requested_at: String,
    pub pdf_attached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requester_email_echoes_the_address() {
        let html = RequesterEmail {
            requester: "visitor@example.com".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains("visitor@example.com"));
        assert!(html.contains("Resume Request Received"));
    }

    #[test]
    fn test_owner_notification_reports_attachment_state() {
        let with_pdf = OwnerNotification {
            requester: "visitor@example.com".to_string(),
            requested_at: "2024-03-01 12:00:00 UTC".to_string(),
            pdf_attached: true,
        }
        .render()
        .unwrap();
        assert!(with_pdf.contains("visitor@example.com"));
        assert!(with_pdf.contains("PDF Attached:</strong> Yes"));

        let without_pdf = OwnerNotification {
            requester: "visitor@example.com".to_string(),
            requested_at: "2024-03-01 12:00:00 UTC".to_string(),
            pdf_attached: false,
        }
        .render()
        .unwrap();
        assert!(without_pdf.contains("PDF Attached:</strong> No"));
    }
}
