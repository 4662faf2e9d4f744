//! Attachment reference carried by a note.

/// MIME type marking an attachment as a contact reference.
pub const MIME_TYPE_CONTACT: &str = "text/x-vcard";

/// A reference to an external resource attached to a note.
///
/// The export pipeline only inspects the MIME type to find contact
/// references; other attachment kinds (images, audio) are not exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    uri: String,
    mime_type: String,
}

impl Attachment {
    /// Creates a new attachment reference.
    pub fn new(uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the attachment URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the attachment MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}
