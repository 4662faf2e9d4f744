//! Infrastructure: note-file parsing and output writing

mod fs;

pub use fs::{FsError, NoteDocument, read_note_document, write_atomic};
