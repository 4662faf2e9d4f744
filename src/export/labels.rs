//! User-facing label lookup for exported documents.

/// Identifiers for the fixed set of labels appearing in an exported
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Heading of the attachments section.
    Attachments,
    /// Heading of the contacts sub-section.
    Contacts,
    /// Contact name row label.
    Name,
    /// Contact phone row label.
    Phone,
    /// Contact email row label.
    Email,
    /// Reminder sub-section label.
    Reminder,
    /// Location sub-section label.
    Location,
    /// "Last update" word in the timestamp line.
    LastUpdate,
    /// "Creation" word in the timestamp line.
    Creation,
}

/// Resolves label identifiers to display strings.
///
/// Implementations are expected to be pure lookups; the export core does
/// no fallback of its own.
pub trait LabelProvider {
    /// Returns the display string for a label.
    fn label(&self, label: Label) -> String;
}

/// English label set used when no other provider is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelProvider for EnglishLabels {
    fn label(&self, label: Label) -> String {
        let text = match label {
            Label::Attachments => "Attachments",
            Label::Contacts => "Contacts",
            Label::Name => "Name",
            Label::Phone => "Phone",
            Label::Email => "Email",
            Label::Reminder => "Reminder",
            Label::Location => "Location",
            Label::LastUpdate => "Last update",
            Label::Creation => "Creation",
        };
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_english_labels() {
        let labels = EnglishLabels;

        assert_eq!(labels.label(Label::Attachments), "Attachments");
        assert_eq!(labels.label(Label::LastUpdate), "Last update");
        assert_eq!(labels.label(Label::Creation), "Creation");
    }
}
