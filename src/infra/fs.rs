//! Note-document file I/O with atomic output writes.
//!
//! Notes arrive as JSON documents carrying the note fields plus an
//! already-resolved `contacts` array (the stand-in for a platform
//! contact provider). Wire structs stay private; callers get domain
//! types back.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::{Attachment, Category, ContactRecord, Note};

/// Errors during note-document file operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse note at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// A parsed note document: the note plus its pre-resolved contacts.
#[derive(Debug)]
pub struct NoteDocument {
    /// The note to export.
    pub note: Note,
    /// Contact records resolved ahead of time.
    pub contacts: Vec<ContactRecord>,
}

#[derive(Deserialize)]
struct NoteFile {
    title: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    checklist: bool,
    category: Option<CategoryFile>,
    address: Option<String>,
    alarm: Option<String>,
    recurrence_rule: Option<String>,
    creation: Option<i64>,
    last_modification: Option<i64>,
    #[serde(default)]
    attachments: Vec<AttachmentFile>,
    #[serde(default)]
    contacts: Vec<ContactFile>,
}

#[derive(Deserialize)]
struct CategoryFile {
    #[serde(default)]
    id: i64,
    name: String,
    color: String,
}

#[derive(Deserialize)]
struct AttachmentFile {
    uri: String,
    mime_type: String,
}

#[derive(Deserialize)]
struct ContactFile {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    emails: Vec<String>,
}

impl NoteFile {
    fn into_document(self) -> NoteDocument {
        let mut builder = Note::builder().content(self.content).checklist(self.checklist);

        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(category) = self.category {
            builder = builder.category(Category::new(category.id, category.name, category.color));
        }
        if let Some(address) = self.address {
            builder = builder.address(address);
        }
        if let Some(alarm) = self.alarm {
            builder = builder.alarm(alarm);
        }
        if let Some(rrule) = self.recurrence_rule {
            builder = builder.recurrence_rule(rrule);
        }
        if let Some(creation) = self.creation {
            builder = builder.creation(creation);
        }
        if let Some(last_modification) = self.last_modification {
            builder = builder.last_modification(last_modification);
        }
        for attachment in self.attachments {
            builder = builder.attachment(Attachment::new(attachment.uri, attachment.mime_type));
        }

        NoteDocument {
            note: builder.build(),
            contacts: self
                .contacts
                .into_iter()
                .map(|c| ContactRecord::new(c.name, c.phones, c.emails))
                .collect(),
        }
    }
}

/// Reads a note document from a JSON file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist,
/// `FsError::PermissionDenied` if access is denied, and
/// `FsError::Parse` if the content is not a valid note document.
pub fn read_note_document(path: &Path) -> Result<NoteDocument, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    let file: NoteFile = serde_json::from_slice(&bytes).map_err(|source| FsError::Parse {
        path: path.into(),
        source,
    })?;
    Ok(file.into_document())
}

/// Writes bytes to a file atomically: the content lands in a temp file in
/// the target directory and is renamed into place, so a failed export
/// never leaves a half-written file behind.
///
/// # Errors
///
/// Returns `FsError::AtomicWrite` if the temp file cannot be created,
/// written or renamed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), FsError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|source| FsError::AtomicWrite {
        path: path.into(),
        source,
    })?;
    temp.write_all(bytes).map_err(|source| FsError::AtomicWrite {
        path: path.into(),
        source,
    })?;
    temp.flush().map_err(|source| FsError::AtomicWrite {
        path: path.into(),
        source,
    })?;
    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
