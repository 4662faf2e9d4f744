//! Core types: Note, Category, Attachment, ContactRecord

mod attachment;
mod category;
mod contact;
mod note;

pub use attachment::{Attachment, MIME_TYPE_CONTACT};
pub use category::Category;
pub use contact::ContactRecord;
pub use note::{Note, NoteBuilder};
