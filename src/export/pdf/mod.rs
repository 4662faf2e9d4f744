//! PDF renderer with a hand-rolled single-page layout engine.
//!
//! Layout runs in direct point units on an A4 page: a cursor tracks how
//! far below the top margin the next baseline sits, and every printed
//! line advances it by the style's size plus a fractional gap. Only the
//! final `write` step touches the PDF object machinery (via `pdf-writer`).

mod metrics;

use std::io::Write;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::export::ExportError;
use crate::export::document::{ContactLabels, DocumentRenderer};
use crate::export::facade::Contact;

/// A4 page size in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

/// Page margins in points.
const MARGIN_X: f32 = 57.0;
const MARGIN_Y: f32 = 85.0;

/// Extra advance after each printed line, as a fraction of the font size.
const LINE_GAP: f32 = 0.075;

/// Gap before the attachments header.
const SECTION_GAP: f32 = 4.0;

/// Gap after each contact's row group.
const CONTACT_GROUP_GAP: f32 = 3.0;

/// Gap between the contact label column and the value column.
const COLUMN_GAP: f32 = 6.0;

/// Resource names of the two page fonts.
const FONT_REGULAR: &[u8] = b"F1";
const FONT_BOLD: &[u8] = b"F2";

/// A text style: all styles share the same (black) color and differ only
/// in size and weight.
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: f32,
    bold: bool,
}

const STYLE_TITLE: TextStyle = TextStyle {
    size: 32.0,
    bold: true,
};
const STYLE_SECTION: TextStyle = TextStyle {
    size: 24.0,
    bold: true,
};
const STYLE_SUBSECTION: TextStyle = TextStyle {
    size: 18.0,
    bold: true,
};
const STYLE_BODY: TextStyle = TextStyle {
    size: 11.0,
    bold: false,
};

/// One positioned line of text, in PDF page coordinates (origin bottom
/// left, y is the baseline).
#[derive(Debug)]
struct TextOp {
    x: f32,
    y: f32,
    size: f32,
    bold: bool,
    text: String,
}

/// Renders a note onto a single fixed-size PDF page.
#[derive(Debug, Default)]
pub struct PdfRenderer {
    ops: Vec<TextOp>,
    cursor: f32,
}

impl PdfRenderer {
    /// Creates a renderer for a single export call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints one line at the left margin: advance the cursor by the
    /// style size, place the baseline, then advance by the line gap.
    fn print(&mut self, text: &str, style: TextStyle) {
        self.print_at(text, style, 0.0);
    }

    /// Like [`print`](Self::print), with a horizontal offset from the
    /// left margin.
    fn print_at(&mut self, text: &str, style: TextStyle, x_offset: f32) {
        self.cursor += style.size;
        self.ops.push(TextOp {
            x: MARGIN_X + x_offset,
            y: PAGE_HEIGHT - MARGIN_Y - self.cursor,
            size: style.size,
            bold: style.bold,
            text: text.to_string(),
        });
        self.cursor += LINE_GAP * style.size;
    }

    /// Greedy word-wrap bounded by the printable width.
    fn wrap(text: &str, style: TextStyle, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{line} {word}")
                };
                if metrics::text_width(&candidate, style.size, style.bold) <= max_width
                    || line.is_empty()
                {
                    line = candidate;
                } else {
                    lines.push(line);
                    line = word.to_string();
                }
            }
            lines.push(line);
        }

        lines
    }

    fn contact_row(&mut self, label: &str, value: &str, column_width: f32) {
        let saved = self.cursor;
        self.print(label, STYLE_BODY);
        self.cursor = saved;
        self.print_at(value, STYLE_BODY, column_width + COLUMN_GAP);
    }
}

impl DocumentRenderer for PdfRenderer {
    fn begin(&mut self) {
        self.ops.clear();
        self.cursor = 0.0;
    }

    fn title(&mut self, text: &str, _category_color: Option<&str>) {
        self.print(text, STYLE_TITLE);
    }

    fn text_content(&mut self, text: &str) {
        let max_width = PAGE_WIDTH - 2.0 * MARGIN_X;
        for line in Self::wrap(text, STYLE_BODY, max_width) {
            self.print(&line, STYLE_BODY);
        }
    }

    fn checklist_item(&mut self, text: &str, checked: bool) {
        let glyph = if checked { '\u{2611}' } else { '\u{2610}' };
        self.print(&format!("{glyph} {text}"), STYLE_BODY);
    }

    fn begin_attachments(&mut self, title: &str) {
        self.cursor += SECTION_GAP;
        self.print(title, STYLE_SECTION);
    }

    fn location(&mut self, label: &str, address: &str) {
        self.print(label, STYLE_SUBSECTION);
        self.print(address, STYLE_BODY);
    }

    fn reminder(&mut self, label: &str, text: &str) {
        self.print(label, STYLE_SUBSECTION);
        self.print(text, STYLE_BODY);
    }

    fn begin_contacts(&mut self, label: &str) {
        self.print(label, STYLE_SUBSECTION);
    }

    fn contact(&mut self, labels: &ContactLabels, contact: &Contact) {
        let column_width = [&labels.name, &labels.phone, &labels.email]
            .iter()
            .map(|label| metrics::text_width(label, STYLE_BODY.size, STYLE_BODY.bold))
            .fold(0.0f32, f32::max);

        self.contact_row(&labels.name, &contact.name, column_width);
        self.contact_row(&labels.phone, &contact.phone, column_width);
        self.contact_row(&labels.email, &contact.email, column_width);
        self.cursor += CONTACT_GROUP_GAP;
    }

    fn timestamp(&mut self, text: &str) {
        // Anchored to the bottom margin region, wherever the body ended.
        let saved = self.cursor;
        self.cursor = PAGE_HEIGHT - 2.0 * MARGIN_Y;
        self.print(text, STYLE_BODY);
        self.cursor = saved;
    }

    fn write(&mut self, sink: &mut dyn Write) -> Result<(), ExportError> {
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let page_id = Ref::new(3);
        let font_regular_id = Ref::new(4);
        let font_bold_id = Ref::new(5);
        let content_id = Ref::new(6);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id).kids([page_id]).count(1);

        {
            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            page.parent(page_tree_id);
            page.contents(content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(FONT_REGULAR), font_regular_id);
            fonts.pair(Name(FONT_BOLD), font_bold_id);
        }

        pdf.type1_font(font_regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(font_bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let mut content = Content::new();
        for op in &self.ops {
            let font = if op.bold { FONT_BOLD } else { FONT_REGULAR };
            let encoded = encode_win_ansi(&op.text);
            content.begin_text();
            content.set_font(Name(font), op.size);
            content.next_line(op.x, op.y);
            content.show(Str(&encoded));
            content.end_text();
        }
        pdf.stream(content_id, &content.finish());

        sink.write_all(&pdf.finish())
            .map_err(ExportError::from_write)
    }
}

/// Encodes text for the WinAnsi-encoded page fonts. Characters without a
/// WinAnsi code point degrade to `?` in the byte stream; layout has
/// already been measured against the original characters.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactRecord, Note};
    use crate::export::document::render;
    use crate::export::facade::NoteFacade;
    use crate::export::labels::EnglishLabels;
    use pretty_assertions::assert_eq;

    // Fri, Mar 1 2019 18:18:28 UTC
    const TEST_TIME_MILLIS: i64 = 1551464308000;

    fn rendered(note: &Note, contacts: Vec<ContactRecord>) -> PdfRenderer {
        let facade = NoteFacade::new(note, contacts, &EnglishLabels);
        let mut renderer = PdfRenderer::new();
        render(&facade, &mut renderer);
        renderer
    }

    #[test]
    fn test_output_has_pdf_magic() {
        let note = Note::builder().title("Test Note").content("Abc\n123").build();
        let mut renderer = rendered(&note, Vec::new());

        let mut sink = Vec::new();
        renderer.write(&mut sink).unwrap();

        assert_eq!(&sink[1..4], b"PDF");
    }

    #[test]
    fn test_print_advances_by_size_plus_gap() {
        let mut renderer = PdfRenderer::new();
        renderer.begin();

        renderer.print("a", STYLE_BODY);
        let first = renderer.cursor;
        renderer.print("b", STYLE_BODY);

        let advance = STYLE_BODY.size + LINE_GAP * STYLE_BODY.size;
        assert!((first - advance).abs() < 1e-4);
        assert!((renderer.cursor - 2.0 * advance).abs() < 1e-4);
    }

    #[test]
    fn test_lines_stack_without_overlap() {
        let note = Note::builder()
            .title("Test Note")
            .content("Abc\n123")
            .build();
        let renderer = rendered(&note, Vec::new());

        // Baselines strictly descend and stay at least a line apart.
        for pair in renderer.ops.windows(2) {
            assert!(pair[1].y <= pair[0].y - pair[1].size);
        }
    }

    #[test]
    fn test_body_wraps_within_margins() {
        let long = "word ".repeat(200);
        let note = Note::builder().title("t").content(long).build();
        let renderer = rendered(&note, Vec::new());

        let max_width = PAGE_WIDTH - 2.0 * MARGIN_X;
        for op in renderer.ops.iter().filter(|op| !op.bold) {
            assert!(metrics::text_width(&op.text, op.size, op.bold) <= max_width);
        }
    }

    #[test]
    fn test_checklist_items_not_wrapped() {
        let item = "item ".repeat(100);
        let note = Note::builder()
            .title("t")
            .checklist(true)
            .content(format!("[x] {}", item.trim()))
            .build();
        let renderer = rendered(&note, Vec::new());

        let body_ops: Vec<_> = renderer.ops.iter().filter(|op| !op.bold).collect();
        assert_eq!(body_ops.len(), 1);
        assert!(body_ops[0].text.starts_with('\u{2611}'));
    }

    #[test]
    fn test_contact_rows_share_baseline_and_column() {
        let note = Note::builder().title("t").content("c").build();
        let contacts = vec![ContactRecord::new(
            "First Person",
            vec!["123-123456".to_string()],
            vec!["email@address.com".to_string()],
        )];
        let renderer = rendered(&note, contacts);

        let name_label = renderer.ops.iter().find(|op| op.text == "Name").unwrap();
        let name_value = renderer
            .ops
            .iter()
            .find(|op| op.text == "First Person")
            .unwrap();
        let phone_value = renderer
            .ops
            .iter()
            .find(|op| op.text == "123-123456")
            .unwrap();

        assert_eq!(name_label.y, name_value.y);
        assert!(name_value.x > name_label.x);
        assert_eq!(name_value.x, phone_value.x);
    }

    #[test]
    fn test_timestamp_anchored_to_bottom_margin() {
        let note = Note::builder()
            .title("Test Note")
            .content("Abc")
            .creation(TEST_TIME_MILLIS)
            .last_modification(TEST_TIME_MILLIS)
            .build();
        let renderer = rendered(&note, Vec::new());

        let timestamp = renderer.ops.last().unwrap();
        assert!(timestamp.text.starts_with("Last update"));
        assert_eq!(timestamp.y, MARGIN_Y - STYLE_BODY.size);
    }

    #[test]
    fn test_wrap_preserves_blank_paragraphs() {
        let lines = PdfRenderer::wrap("a\n\nb", STYLE_BODY, 100.0);

        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_breaks_long_text() {
        let lines = PdfRenderer::wrap(&"word ".repeat(50), STYLE_BODY, 100.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics::text_width(line, STYLE_BODY.size, STYLE_BODY.bold) <= 100.0);
        }
    }

    #[test]
    fn test_encode_win_ansi_degrades_gracefully() {
        assert_eq!(encode_win_ansi("abc"), b"abc");
        assert_eq!(encode_win_ansi("\u{2611} x"), b"? x");
    }
}
