//! Primary strategy — print the HTML document through headless Chromium.
//!
//! The whole launch/load/export sequence is blocking, so it runs inside
//! `tokio::task::spawn_blocking` and is bounded by an explicit timeout.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tracing::{debug, warn};

use crate::config::Config;
use crate::convert::{RenderStrategy, StrategyError};
use crate::resume::RenderedResume;

/// Hard bound on one full render attempt (launch + load + export).
const RENDER_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout applied to page-load waits inside the tab.
const LOAD_TIMEOUT: Duration = Duration::from_secs(20);

pub struct ChromiumPdf {
    executable: Option<PathBuf>,
}

impl ChromiumPdf {
    pub fn new(config: &Config) -> Self {
        Self {
            executable: config.chrome_executable.clone(),
        }
    }
}

#[async_trait]
impl RenderStrategy for ChromiumPdf {
    fn name(&self) -> &'static str {
        "chromium"
    }

    async fn render(&self, resume: &RenderedResume) -> Result<Vec<u8>, StrategyError> {
        let html = resume.html.clone();
        let executable = self.executable.clone();

        let worker = tokio::task::spawn_blocking(move || print_to_pdf(&html, executable));
        match tokio::time::timeout(RENDER_TIMEOUT, worker).await {
            Err(_) => Err(StrategyError::Timeout(RENDER_TIMEOUT)),
            Ok(joined) => joined?,
        }
    }
}

/// Blocking render path. The `Browser` guard kills the Chromium process and
/// the temp-file guard unlinks the page on every exit, including early `?`
/// returns.
fn print_to_pdf(html: &str, executable: Option<PathBuf>) -> Result<Vec<u8>, StrategyError> {
    let page = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".html")
        .tempfile()?;
    std::fs::write(page.path(), html)?;

    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .path(executable)
        .args(launch_flags())
        .build()
        .map_err(|e| StrategyError::Launch(e.to_string()))?;

    let browser = Browser::new(options).map_err(|e| StrategyError::Launch(e.to_string()))?;
    let tab = browser
        .new_tab()
        .map_err(|e| StrategyError::Launch(e.to_string()))?;
    tab.set_default_timeout(LOAD_TIMEOUT);

    let url = format!("file://{}", page.path().display());
    tab.navigate_to(&url)
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| StrategyError::Load(e.to_string()))?;

    let pdf = tab
        .print_to_pdf(Some(pdf_options()))
        .map_err(|e| StrategyError::Export(e.to_string()))?;

    debug!(bytes = pdf.len(), "chromium export complete");

    if let Err(e) = page.close() {
        warn!("failed to remove temporary resume page: {e}");
    }

    Ok(pdf)
}

/// A4 paper, 1 cm margins, print background — print parity with the
/// on-screen document.
fn pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        margin_top: Some(0.39),
        margin_bottom: Some(0.39),
        margin_left: Some(0.39),
        margin_right: Some(0.39),
        ..Default::default()
    }
}

/// Flags for constrained execution environments (containers, serverless).
fn launch_flags() -> Vec<&'static OsStr> {
    [
        "--disable-dev-shm-usage",
        "--disable-gpu",
        "--no-first-run",
        "--no-zygote",
    ]
    .iter()
    .map(OsStr::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_options_request_a4_with_fixed_margins() {
        let options = pdf_options();
        assert_eq!(options.print_background, Some(true));
        assert_eq!(options.paper_width, Some(8.27));
        assert_eq!(options.paper_height, Some(11.69));
        for margin in [
            options.margin_top,
            options.margin_bottom,
            options.margin_left,
            options.margin_right,
        ] {
            assert_eq!(margin, Some(0.39));
        }
    }

    #[test]
    fn test_launch_flags_disable_shared_memory_and_gpu() {
        let flags = launch_flags();
        assert!(flags.contains(&OsStr::new("--disable-dev-shm-usage")));
        assert!(flags.contains(&OsStr::new("--disable-gpu")));
    }
}
