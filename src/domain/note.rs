//! Note struct representing a structured note to be exported.

use crate::domain::{Attachment, Category, MIME_TYPE_CONTACT};

/// A structured note.
///
/// This is the read-only input to the export pipeline. The content string
/// carries either free text or checklist lines, depending on the
/// `checklist` flag; timestamps are epoch milliseconds.
///
/// # Examples
///
/// ```
/// use jotter::domain::Note;
///
/// let note = Note::builder()
///     .title("API Design")
///     .content("Abc\n123")
///     .build();
/// assert_eq!(note.title(), Some("API Design"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Note {
    title: Option<String>,
    content: String,
    checklist: bool,
    category: Option<Category>,
    address: Option<String>,
    alarm: Option<String>,
    recurrence_rule: Option<String>,
    creation: Option<i64>,
    last_modification: Option<i64>,
    attachments: Vec<Attachment>,
}

impl Note {
    /// Creates a builder for constructing a Note.
    pub fn builder() -> NoteBuilder {
        NoteBuilder::default()
    }

    /// Returns the note's title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the raw content string.
    ///
    /// When [`is_checklist`](Self::is_checklist) is true the content holds
    /// one checklist line per newline-separated row.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true when the content should be parsed as a checklist.
    pub fn is_checklist(&self) -> bool {
        self.checklist
    }

    /// Returns the note's category, if any.
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Returns the location address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the alarm timestamp as a decimal epoch-milliseconds string.
    pub fn alarm(&self) -> Option<&str> {
        self.alarm.as_deref()
    }

    /// Returns the iCalendar-like recurrence rule, if any.
    pub fn recurrence_rule(&self) -> Option<&str> {
        self.recurrence_rule.as_deref()
    }

    /// Returns the creation time in epoch milliseconds.
    pub fn creation(&self) -> Option<i64> {
        self.creation
    }

    /// Returns the last-modification time in epoch milliseconds.
    pub fn last_modification(&self) -> Option<i64> {
        self.last_modification
    }

    /// Returns all attachments.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the attachments that reference contacts.
    pub fn contact_attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments
            .iter()
            .filter(|a| a.mime_type() == MIME_TYPE_CONTACT)
    }
}

/// Builder for [`Note`].
#[derive(Debug, Default)]
pub struct NoteBuilder {
    note: Note,
}

impl NoteBuilder {
    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.note.title = Some(title.into());
        self
    }

    /// Sets the content string.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.note.content = content.into();
        self
    }

    /// Marks the content as a checklist.
    pub fn checklist(mut self, checklist: bool) -> Self {
        self.note.checklist = checklist;
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: Category) -> Self {
        self.note.category = Some(category);
        self
    }

    /// Sets the location address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.note.address = Some(address.into());
        self
    }

    /// Sets the alarm timestamp (decimal epoch-milliseconds string).
    pub fn alarm(mut self, alarm: impl Into<String>) -> Self {
        self.note.alarm = Some(alarm.into());
        self
    }

    /// Sets the recurrence rule.
    pub fn recurrence_rule(mut self, rrule: impl Into<String>) -> Self {
        self.note.recurrence_rule = Some(rrule.into());
        self
    }

    /// Sets the creation time in epoch milliseconds.
    pub fn creation(mut self, millis: i64) -> Self {
        self.note.creation = Some(millis);
        self
    }

    /// Sets the last-modification time in epoch milliseconds.
    pub fn last_modification(mut self, millis: i64) -> Self {
        self.note.last_modification = Some(millis);
        self
    }

    /// Adds an attachment.
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.note.attachments.push(attachment);
        self
    }

    /// Builds the note.
    pub fn build(self) -> Note {
        self.note
    }
}
