//! Fallback strategy — direct vector drawing with printpdf.
//!
//! No external process: the logical content is laid out onto fixed-size A4
//! pages with manual word-wrapping and explicit y-advancement per line.
//! Lower fidelity than the browser print is acceptable.

use async_trait::async_trait;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::convert::metrics::HELVETICA;
use crate::convert::{RenderStrategy, StrategyError};
use crate::resume::content::ResumeContent;
use crate::resume::RenderedResume;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const COLUMN_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const PT_TO_MM: f32 = 0.352_778;
/// Line advance as a multiple of the font size.
const LINE_SPACING: f32 = 1.4;

pub struct VectorPdf;

#[async_trait]
impl RenderStrategy for VectorPdf {
    fn name(&self) -> &'static str {
        "vector"
    }

    async fn render(&self, resume: &RenderedResume) -> Result<Vec<u8>, StrategyError> {
        let content = resume.content.clone();
        tokio::task::spawn_blocking(move || draw_resume(&content)).await?
    }
}

/// Y-cursor over a growing document: writes lines top-down, breaks to a new
/// page when the cursor would pass the bottom margin.
struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Millimeters above the page bottom.
    y: f32,
}

impl PageCursor {
    fn new(title: &str) -> Result<Self, StrategyError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| StrategyError::Layout(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| StrategyError::Layout(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn break_page_if_needed(&mut self, needed_mm: f32) {
        if self.y - needed_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn line(&mut self, text: &str, size_pt: f32, bold: bool) {
        let advance = size_pt * PT_TO_MM * LINE_SPACING;
        self.break_page_if_needed(advance);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= advance;
    }

    /// Word-wraps `text` to the column width and writes each resulting line.
    fn wrapped(&mut self, text: &str, size_pt: f32) {
        let max_width_em = COLUMN_WIDTH_MM / (size_pt * PT_TO_MM);
        for line in HELVETICA.wrap(text, max_width_em) {
            self.line(&line, size_pt, false);
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn finish(self) -> Result<Vec<u8>, StrategyError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| StrategyError::Layout(e.to_string()))
    }
}

fn draw_resume(content: &ResumeContent) -> Result<Vec<u8>, StrategyError> {
    let mut cursor = PageCursor::new("Jick T. Lampago - Resume")?;

    cursor.line(&content.name, 20.0, true);
    cursor.line(&content.title, 12.0, false);
    cursor.gap(2.0);
    cursor.line(&format!("Email: {}", content.contact.email), 10.0, false);
    cursor.line(&format!("Phone: {}", content.contact.phone), 10.0, false);
    cursor.line(&format!("Location: {}", content.contact.location), 10.0, false);
    for link in &content.contact.links {
        cursor.line(link, 10.0, false);
    }

    cursor.gap(4.0);
    cursor.line("PROFESSIONAL SUMMARY", 14.0, true);
    cursor.wrapped(&content.summary, 10.0);

    cursor.gap(4.0);
    cursor.line("WORK EXPERIENCE", 14.0, true);
    for job in &content.experience {
        cursor.line(&job.role, 12.0, true);
        cursor.line(&format!("{} | {}", job.company, job.period), 10.0, false);
        for bullet in &job.bullets {
            cursor.wrapped(&format!("- {bullet}"), 9.0);
        }
        cursor.gap(3.0);
    }

    cursor.gap(1.0);
    cursor.line("TECHNICAL SKILLS", 14.0, true);
    for category in &content.skills {
        cursor.wrapped(
            &format!("{}: {}", category.label, category.skills.join(", ")),
            10.0,
        );
    }

    cursor.finish()
}
