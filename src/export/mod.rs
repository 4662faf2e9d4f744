//! Export pipeline for converting notes to text, HTML and PDF.
//!
//! The pipeline normalizes a note through [`NoteFacade`], drives one
//! single-use format renderer through the fixed document traversal, and
//! serializes the result to a byte sink.

mod dates;
mod document;
mod facade;
mod html;
mod labels;
mod pdf;
mod replacer;
mod text;

pub use document::{ContactLabels, DocumentRenderer, render};
pub use facade::{CHECKED_MARKER, ChecklistItem, Contact, NoteFacade, UNCHECKED_MARKER};
pub use html::HtmlRenderer;
pub use labels::{EnglishLabels, Label, LabelProvider};
pub use pdf::PdfRenderer;
pub use replacer::Replacer;
pub use text::TextRenderer;

use std::io::{self, Write};

use thiserror::Error;

use crate::domain::{ContactRecord, Note};

/// The supported output document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Newline-delimited plain text.
    Text,
    /// A static HTML page.
    Html,
    /// A single-page PDF.
    Pdf,
}

impl ExportFormat {
    /// Returns the conventional file extension, with the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => ".txt",
            ExportFormat::Html => ".html",
            ExportFormat::Pdf => ".pdf",
        }
    }

    /// Returns the MIME type of the produced document.
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Html => "text/html",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Error raised by a [`ContactResolver`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ContactResolveError {
    message: String,
}

impl ContactResolveError {
    /// Creates an error with a human-readable cause description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Resolves a note's contact attachments into contact records.
///
/// The export core never talks to a contact store itself; whatever is
/// returned here is what ends up in the document.
pub trait ContactResolver {
    /// Resolves the contacts attached to a note.
    fn resolve(&self, note: &Note) -> Result<Vec<ContactRecord>, ContactResolveError>;
}

/// Resolver for notes without contact attachments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContacts;

impl ContactResolver for NoContacts {
    fn resolve(&self, _note: &Note) -> Result<Vec<ContactRecord>, ContactResolveError> {
        Ok(Vec::new())
    }
}

/// Resolver returning an already-resolved list of contact records.
#[derive(Debug, Clone, Default)]
pub struct FixedContacts(pub Vec<ContactRecord>);

impl ContactResolver for FixedContacts {
    fn resolve(&self, _note: &Note) -> Result<Vec<ContactRecord>, ContactResolveError> {
        Ok(self.0.clone())
    }
}

/// Errors surfaced to the caller of [`export_note`].
///
/// On error no partial output is guaranteed to be meaningful; callers
/// should discard the sink's contents.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Resolving the note's contact attachments failed.
    #[error("failed to resolve attached contacts: {source}")]
    Contacts {
        #[source]
        source: ContactResolveError,
    },

    /// Writing the finished document to the sink failed.
    #[error("failed to write document: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub(crate) fn from_write(source: io::Error) -> Self {
        ExportError::Write { source }
    }
}

/// Exports a note to a sink in the requested format.
///
/// Builds the facade (resolving contacts through `contacts`), drives
/// exactly one renderer through the full document traversal, then
/// serializes the accumulated document.
///
/// # Errors
///
/// Returns [`ExportError::Contacts`] when contact resolution fails and
/// [`ExportError::Write`] when the sink rejects the document bytes.
pub fn export_note(
    note: &Note,
    format: ExportFormat,
    labels: &dyn LabelProvider,
    contacts: &dyn ContactResolver,
    sink: &mut dyn Write,
) -> Result<(), ExportError> {
    let records = contacts
        .resolve(note)
        .map_err(|source| ExportError::Contacts { source })?;
    let facade = NoteFacade::new(note, records, labels);

    match format {
        ExportFormat::Text => drive(&facade, TextRenderer::new(), sink),
        ExportFormat::Html => drive(&facade, HtmlRenderer::new(), sink),
        ExportFormat::Pdf => drive(&facade, PdfRenderer::new(), sink),
    }
}

fn drive<R: DocumentRenderer>(
    facade: &NoteFacade,
    mut renderer: R,
    sink: &mut dyn Write,
) -> Result<(), ExportError> {
    render(facade, &mut renderer);
    renderer.write(sink)
}
