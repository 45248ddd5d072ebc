//! The resume document: fixed content plus its rendered HTML form.

pub mod content;
pub mod views;

use askama::Template;
use chrono::{DateTime, Utc};

use crate::resume::content::ResumeContent;
use crate::resume::views::ResumeDocument;

/// A resume ready for conversion: the structured content paired with the
/// styled HTML document rendered from it.
///
/// The browser strategy consumes `html`; the direct-drawing fallback lays out
/// `content` itself.
#[derive(Debug, Clone)]
pub struct RenderedResume {
    pub content: ResumeContent,
    pub html: String,
}

impl RenderedResume {
    /// Builds the resume for the given clock reading. Pure — the only
    /// dynamic input is `now`, which feeds the elapsed-experience summary.
    pub fn build(now: DateTime<Utc>) -> Result<Self, askama::Error> {
        let content = ResumeContent::standard(now);
        let html = ResumeDocument {
            content: content.clone(),
        }
        .render()?;
        Ok(Self { content, html })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_build_renders_identity_and_summary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let resume = RenderedResume::build(now).unwrap();
        assert!(resume.html.contains("JICK T. LAMPAGO"));
        assert!(resume.html.contains("Frontend Developer"));
        assert!(resume.html.contains("4.0 years of experience"));
        assert!(resume.html.contains("WORK EXPERIENCE"));
        assert!(resume.html.contains("TECHNICAL SKILLS"));
        assert!(resume.html.contains("EDUCATION"));
        assert!(resume.html.contains("CHARACTER REFERENCE"));
    }

    #[test]
    fn test_build_is_deterministic_for_a_fixed_clock() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap();
        let first = RenderedResume::build(now).unwrap();
        let second = RenderedResume::build(now).unwrap();
        assert_eq!(first.html, second.html);
    }
}
