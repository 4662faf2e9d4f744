//! Plain-text renderer.

use std::io::Write;

use crate::export::ExportError;
use crate::export::document::{ContactLabels, DocumentRenderer};
use crate::export::facade::Contact;

const NEWLINE: char = '\n';
const UNDERLINE_CHAR: char = '=';

/// Renders a note as newline-delimited UTF-8 text.
///
/// Titles (and the attachments header) are underlined with `=` to the
/// exact character count of the heading; contact rows are column-aligned
/// on the widest of the three row labels.
#[derive(Debug, Default)]
pub struct TextRenderer {
    buf: String,
}

impl TextRenderer {
    /// Creates a renderer for a single export call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an underlined heading.
    fn push_title(&mut self, title: &str) {
        self.buf.push_str(title);
        self.buf.push(NEWLINE);
        for _ in title.chars() {
            self.buf.push(UNDERLINE_CHAR);
        }
        self.buf.push(NEWLINE);
    }

    /// Appends an attachment label: blank line, `<label>: `, blank line.
    fn push_label(&mut self, label: &str) {
        self.buf.push(NEWLINE);
        self.buf.push_str(label);
        self.buf.push_str(": ");
        self.buf.push(NEWLINE);
    }

    /// Builds a fixed-width label column: `<label>: ` padded with spaces
    /// until the value column starts at `longest + 2` characters.
    fn make_column(label: &str, longest: usize) -> String {
        let mut column = String::from(label);
        column.push_str(": ");
        for _ in label.chars().count()..longest {
            column.push(' ');
        }
        column
    }
}

impl DocumentRenderer for TextRenderer {
    fn begin(&mut self) {
        self.buf.clear();
    }

    fn title(&mut self, text: &str, _category_color: Option<&str>) {
        self.push_title(text);
        self.buf.push(NEWLINE);
    }

    fn text_content(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push(NEWLINE);
    }

    fn checklist_item(&mut self, text: &str, checked: bool) {
        let checked_char = if checked { 'X' } else { ' ' };
        self.buf.push_str(" - [");
        self.buf.push(checked_char);
        self.buf.push_str("] ");
        self.buf.push_str(text);
        self.buf.push(NEWLINE);
    }

    fn begin_attachments(&mut self, title: &str) {
        self.buf.push(NEWLINE);
        self.push_title(title);
    }

    fn location(&mut self, label: &str, address: &str) {
        self.push_label(label);
        self.buf.push_str(address);
        self.buf.push(NEWLINE);
    }

    fn reminder(&mut self, label: &str, text: &str) {
        self.push_label(label);
        self.buf.push_str(text);
        self.buf.push(NEWLINE);
    }

    fn begin_contacts(&mut self, label: &str) {
        self.push_label(label);
    }

    fn contact(&mut self, labels: &ContactLabels, contact: &Contact) {
        let longest = [&labels.name, &labels.phone, &labels.email]
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        for (label, value) in [
            (&labels.name, &contact.name),
            (&labels.phone, &contact.phone),
            (&labels.email, &contact.email),
        ] {
            self.buf.push_str(&Self::make_column(label, longest));
            self.buf.push_str(value);
            self.buf.push(NEWLINE);
        }
        self.buf.push(NEWLINE);
    }

    fn timestamp(&mut self, text: &str) {
        self.buf.push(NEWLINE);
        self.buf.push_str(text);
        self.buf.push(NEWLINE);
    }

    fn write(&mut self, sink: &mut dyn Write) -> Result<(), ExportError> {
        sink.write_all(self.buf.as_bytes())
            .map_err(ExportError::from_write)
    }
}
