//! Plain-text PDF export for enhanced resumes

use crate::error::{Result, ResumeAnalyserError};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::Path;

/// US Letter, in points.
pub const PAGE_WIDTH_PT: f32 = 612.0;
pub const PAGE_HEIGHT_PT: f32 = 792.0;
pub const MARGIN_PT: f32 = 50.0;
pub const LINE_HEIGHT_PT: f32 = 15.0;
const FONT_SIZE: f32 = 11.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Baseline, measured from the bottom of the page in points.
    pub y: f32,
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Split `text` into pages of placed lines.
///
/// Lines are trimmed and drawn top-down from the top margin; a new page starts
/// once the cursor falls below the bottom margin. Always yields one page.
pub fn layout_pages(text: &str) -> Vec<Vec<PlacedLine>> {
    let top = PAGE_HEIGHT_PT - MARGIN_PT;
    let mut pages = vec![Vec::new()];
    let mut y = top;

    for line in text.split('\n') {
        if y < MARGIN_PT {
            pages.push(Vec::new());
            y = top;
        }
        if let Some(page) = pages.last_mut() {
            page.push(PlacedLine {
                text: line.trim().to_string(),
                y,
            });
        }
        y -= LINE_HEIGHT_PT;
    }

    pages
}

/// Render `text` as a paginated PDF document.
pub fn render_text_pdf(text: &str, title: &str) -> Result<Vec<u8>> {
    let width = pt_to_mm(PAGE_WIDTH_PT);
    let height = pt_to_mm(PAGE_HEIGHT_PT);

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ResumeAnalyserError::PdfRendering(format!("Failed to load font: {:?}", e)))?;

    for (index, lines) in layout_pages(text).iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let current_layer = doc.get_page(page).get_layer(layer);

        for line in lines.iter().filter(|l| !l.text.is_empty()) {
            current_layer.use_text(line.text.clone(), FONT_SIZE, pt_to_mm(MARGIN_PT), pt_to_mm(line.y), &font);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ResumeAnalyserError::PdfRendering(format!("Failed to write PDF: {:?}", e)))
}

pub fn save_text_as_pdf(text: &str, path: &Path) -> Result<()> {
    let bytes = render_text_pdf(text, "Enhanced Resume")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_fits_one_page() {
        let pages = layout_pages("Jane Doe\n  Rust developer  ");

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0][0].y, PAGE_HEIGHT_PT - MARGIN_PT);
        assert_eq!(pages[0][1].text, "Rust developer");
        assert_eq!(pages[0][1].y, PAGE_HEIGHT_PT - MARGIN_PT - LINE_HEIGHT_PT);
    }

    #[test]
    fn test_page_break_after_cursor_leaves_margin() {
        let text = vec!["line"; 100].join("\n");

        let pages = layout_pages(&text);

        // 742, 727, ... down to 52 is 47 lines per page
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 47);
        assert_eq!(pages[1].len(), 47);
        assert_eq!(pages[2].len(), 6);
        assert!(pages.iter().flatten().all(|l| l.y >= MARGIN_PT));
    }

    #[test]
    fn test_exactly_full_page_has_no_trailing_blank_page() {
        let text = vec!["line"; 47].join("\n");
        assert_eq!(layout_pages(&text).len(), 1);
    }

    #[test]
    fn test_empty_text_is_single_page() {
        assert_eq!(layout_pages("").len(), 1);
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_text_pdf("Enhanced Resume\n\nJane Doe", "Test").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
