//! Category assigned to a note.

/// A note category.
///
/// The color is stored the way the note store persists it: a signed
/// decimal string holding a packed 24-bit RGB value (possibly with a
/// sign-extended alpha byte). Conversion to a display color happens in
/// the export facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: i64,
    name: String,
    color: String,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Returns the category's identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the category's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored color string (signed decimal packed RGB).
    pub fn color(&self) -> &str {
        &self.color
    }
}
