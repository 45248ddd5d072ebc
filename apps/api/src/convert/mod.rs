//! Document conversion — turns the rendered resume into a print-ready PDF.
//!
//! Two strategies behind one trait, tried in strict order, first success
//! wins: headless Chromium (primary) and direct vector drawing (fallback).
//! A strategy failure never escapes this module — when every strategy fails
//! the result is [`ConversionResult::NoArtifact`], and the rest of the
//! pipeline proceeds without an attachment.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

pub mod chromium;
pub mod metrics;
pub mod vector;

pub use chromium::ChromiumPdf;
pub use vector::VectorPdf;

use crate::config::Config;
use crate::resume::RenderedResume;

/// Attachment name the artifact is delivered under.
pub const RESUME_FILENAME: &str = "Jick_Lampago_Resume.pdf";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("failed to launch rendering process: {0}")]
    Launch(String),

    #[error("failed to load document content: {0}")]
    Load(String),

    #[error("pdf export failed: {0}")]
    Export(String),

    #[error("rendering timed out after {0:?}")]
    Timeout(Duration),

    #[error("page layout failed: {0}")]
    Layout(String),

    #[error("render worker aborted: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// One conversion mechanism. Implementations classify their own errors into
/// [`StrategyError`]; the orchestrator decides what a failure means.
#[async_trait]
pub trait RenderStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn render(&self, resume: &RenderedResume) -> Result<Vec<u8>, StrategyError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// A strategy that was tried and the reason it failed.
#[derive(Debug, Clone)]
pub struct StrategyFailure {
    pub strategy: &'static str,
    pub reason: String,
}

/// Outcome of one conversion attempt across the strategy list.
#[derive(Debug, Clone)]
pub enum ConversionResult {
    /// A strategy produced the binary document.
    Artifact {
        bytes: Vec<u8>,
        strategy: &'static str,
    },
    /// Every strategy failed. A valid, non-fatal outcome — delivery proceeds
    /// without an attachment.
    NoArtifact { failures: Vec<StrategyFailure> },
}

impl ConversionResult {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            ConversionResult::Artifact { bytes, .. } => Some(bytes),
            ConversionResult::NoArtifact { .. } => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

/// Ordered strategy list. First success wins; failures fall through.
pub struct ResumeConverter {
    strategies: Vec<Arc<dyn RenderStrategy>>,
}

impl ResumeConverter {
    pub fn new(strategies: Vec<Arc<dyn RenderStrategy>>) -> Self {
        Self { strategies }
    }

    /// The production pipeline: Chromium print first, vector drawing second.
    pub fn standard(config: &Config) -> Self {
        Self::new(vec![
            Arc::new(ChromiumPdf::new(config)),
            Arc::new(VectorPdf),
        ])
    }

    pub async fn convert(&self, resume: &RenderedResume) -> ConversionResult {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            match strategy.render(resume).await {
                Ok(bytes) => {
                    info!(
                        strategy = strategy.name(),
                        bytes = bytes.len(),
                        "conversion succeeded"
                    );
                    return ConversionResult::Artifact {
                        bytes,
                        strategy: strategy.name(),
                    };
                }
                Err(e) => {
                    warn!(strategy = strategy.name(), "conversion strategy failed: {e}");
                    failures.push(StrategyFailure {
                        strategy: strategy.name(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        ConversionResult::NoArtifact { failures }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
