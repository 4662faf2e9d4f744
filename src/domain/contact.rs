//! Resolved contact record.

/// A contact record as returned by a contact resolver.
///
/// Phone numbers and email addresses keep their multi-valued form here;
/// the export facade flattens them for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRecord {
    name: String,
    phones: Vec<String>,
    emails: Vec<String>,
}

impl ContactRecord {
    /// Creates a new contact record.
    pub fn new(
        name: impl Into<String>,
        phones: Vec<String>,
        emails: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phones,
            emails,
        }
    }

    /// Returns the contact's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact's phone numbers.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Returns the contact's email addresses.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }
}
