//! Presentation-ready view over a note.
//!
//! `NoteFacade` is the single place where raw note data is turned into
//! display values: checklist parsing, category color conversion, reminder
//! phrases and the timestamp footer all live here, so the renderers only
//! deal in ready-made strings.

use crate::domain::{ContactRecord, Note};
use crate::export::dates;
use crate::export::labels::{Label, LabelProvider};

/// Prefix marking a checked checklist line.
pub const CHECKED_MARKER: &str = "[x] ";

/// Prefix marking an unchecked checklist line.
pub const UNCHECKED_MARKER: &str = "[ ] ";

/// A parsed checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Row text with the marker stripped.
    pub text: String,
    /// Whether the row was marked as done.
    pub checked: bool,
}

/// A contact flattened for display: multi-valued fields joined with ", ".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name.
    pub name: String,
    /// All phone numbers, joined.
    pub phone: String,
    /// All email addresses, joined.
    pub email: String,
}

impl Contact {
    fn from_record(record: &ContactRecord) -> Self {
        Self {
            name: record.name().to_string(),
            phone: record.phones().join(", "),
            email: record.emails().join(", "),
        }
    }
}

/// Read-only, per-export view over a note plus its resolved contacts.
///
/// Constructed once per export call and discarded afterwards. The
/// presence-gated accessors (`category_name`, `location`, `reminder`,
/// `contacts`, ...) must only be called after their predicate returned
/// true; violating that is a caller bug and panics rather than returning
/// a recoverable error.
pub struct NoteFacade<'a> {
    note: &'a Note,
    contacts: Vec<Contact>,
    labels: &'a dyn LabelProvider,
    alarm_millis: Option<i64>,
}

impl<'a> NoteFacade<'a> {
    /// Creates the facade from a note, its pre-resolved contact records
    /// and a label provider.
    ///
    /// An alarm string that does not parse as epoch milliseconds is
    /// logged and treated as "no reminder set".
    pub fn new(
        note: &'a Note,
        contacts: Vec<ContactRecord>,
        labels: &'a dyn LabelProvider,
    ) -> Self {
        let alarm_millis = note.alarm().and_then(|raw| match raw.parse::<i64>() {
            Ok(millis) => Some(millis),
            Err(_) => {
                log::warn!("alarm {raw:?} is not a valid epoch-milliseconds value, ignoring");
                None
            }
        });

        Self {
            note,
            contacts: contacts.iter().map(Contact::from_record).collect(),
            labels,
            alarm_millis,
        }
    }

    /// Returns the note title, or an empty string when unset.
    pub fn title(&self) -> &str {
        self.note.title().unwrap_or("")
    }

    /// Returns true when the note has a category.
    pub fn has_category(&self) -> bool {
        self.note.category().is_some()
    }

    /// Returns the category name.
    ///
    /// # Panics
    ///
    /// Panics when the note has no category.
    pub fn category_name(&self) -> &str {
        match self.note.category() {
            Some(category) => category.name(),
            None => panic!("note has no category"),
        }
    }

    /// Returns the category color as an uppercase `#RRGGBB` string.
    ///
    /// The stored value is a signed decimal string holding a packed RGB
    /// integer; the low 24 bits are the color, anything above (the alpha
    /// byte) is masked off.
    ///
    /// # Panics
    ///
    /// Panics when the note has no category, or when the stored color is
    /// not a decimal integer.
    pub fn category_color(&self) -> String {
        let category = match self.note.category() {
            Some(category) => category,
            None => panic!("note has no category"),
        };

        let packed = category
            .color()
            .parse::<i32>()
            .unwrap_or_else(|_| panic!("category color {:?} is not a decimal integer", category.color()));

        format!("#{:06X}", (packed as u32) & 0x00FF_FFFF)
    }

    /// Returns true when the content is a checklist.
    pub fn is_checklist(&self) -> bool {
        self.note.is_checklist()
    }

    /// Returns the free-text content.
    ///
    /// # Panics
    ///
    /// Panics when the note is a checklist.
    pub fn text_content(&self) -> &str {
        if self.is_checklist() {
            panic!("note is a checklist");
        }
        self.note.content()
    }

    /// Parses the content into checklist rows, in source order.
    ///
    /// Each non-empty line must start with [`CHECKED_MARKER`] or
    /// [`UNCHECKED_MARKER`]; lines matching neither are dropped with a
    /// warning.
    ///
    /// # Panics
    ///
    /// Panics when the note is not a checklist.
    pub fn checklist(&self) -> Vec<ChecklistItem> {
        if !self.is_checklist() {
            panic!("note is not a checklist");
        }

        let mut items = Vec::new();
        for line in self.note.content().split('\n') {
            if let Some(text) = line.strip_prefix(CHECKED_MARKER) {
                items.push(ChecklistItem {
                    text: text.to_string(),
                    checked: true,
                });
            } else if let Some(text) = line.strip_prefix(UNCHECKED_MARKER) {
                items.push(ChecklistItem {
                    text: text.to_string(),
                    checked: false,
                });
            } else {
                log::warn!("checklist line {line:?} has no checked/unchecked marker, dropping");
            }
        }

        items
    }

    /// Returns true when the note carries a non-empty address.
    pub fn has_location(&self) -> bool {
        self.note.address().is_some_and(|address| !address.is_empty())
    }

    /// Returns the location address.
    ///
    /// # Panics
    ///
    /// Panics when the note has no location.
    pub fn location(&self) -> &str {
        if !self.has_location() {
            panic!("note has no location");
        }
        self.note.address().unwrap_or("")
    }

    /// Returns true when the note has a reminder set.
    pub fn has_reminder(&self) -> bool {
        self.alarm_millis.is_some()
    }

    /// Returns the reminder phrase: recurring when the note carries a
    /// non-empty recurrence rule, one-time otherwise.
    ///
    /// # Panics
    ///
    /// Panics when the note has no reminder.
    pub fn reminder(&self) -> String {
        let alarm = match self.alarm_millis {
            Some(millis) => millis,
            None => panic!("note has no reminder"),
        };

        match self.note.recurrence_rule() {
            Some(rrule) if !rrule.is_empty() => dates::recurring_reminder_text(alarm, rrule),
            _ => dates::reminder_text(alarm),
        }
    }

    /// Returns true when at least one contact was resolved.
    pub fn has_contacts(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// Returns the resolved contacts.
    ///
    /// # Panics
    ///
    /// Panics when no contacts were resolved.
    pub fn contacts(&self) -> &[Contact] {
        if !self.has_contacts() {
            panic!("note has no contacts");
        }
        &self.contacts
    }

    /// Composes the timestamp footer:
    /// `"<last-update label> <lastMod> (<creation label> <creation>)"`.
    ///
    /// Returns an empty string when either timestamp is missing.
    pub fn timestamp(&self) -> String {
        let (last_mod, creation) = match (self.note.last_modification(), self.note.creation()) {
            (Some(last_mod), Some(creation)) => (last_mod, creation),
            _ => return String::new(),
        };

        format!(
            "{} {} ({} {})",
            self.label(Label::LastUpdate),
            dates::format_date(last_mod),
            self.label(Label::Creation),
            dates::format_date(creation),
        )
    }

    /// Resolves a display label through the configured provider.
    pub fn label(&self, label: Label) -> String {
        self.labels.label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::export::labels::EnglishLabels;
    use pretty_assertions::assert_eq;

    // Fri, Mar 1 2019 18:18:28 UTC
    const TEST_TIME_MILLIS: i64 = 1551464308000;

    fn facade_for(note: &Note) -> NoteFacade<'_> {
        NoteFacade::new(note, Vec::new(), &EnglishLabels)
    }

    #[test]
    fn test_text_note() {
        let note = Note::builder()
            .title("Note title")
            .content("Note Content\nSecond row")
            .creation(TEST_TIME_MILLIS)
            .last_modification(TEST_TIME_MILLIS + 500)
            .build();
        let facade = facade_for(&note);

        assert_eq!(facade.title(), "Note title");
        assert!(!facade.is_checklist());
        assert_eq!(facade.text_content(), "Note Content\nSecond row");
        assert_eq!(
            facade.timestamp(),
            "Last update Mar 1, 2019 6:18 PM (Creation Mar 1, 2019 6:18 PM)"
        );
    }

    #[test]
    fn test_missing_title_is_empty() {
        let note = Note::default();
        let facade = facade_for(&note);

        assert_eq!(facade.title(), "");
    }

    #[test]
    fn test_checklist_parsing() {
        let note = Note::builder()
            .checklist(true)
            .content("[ ] Unchecked item\n[x] Checked item")
            .build();
        let facade = facade_for(&note);

        assert!(facade.is_checklist());
        let items = facade.checklist();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Unchecked item");
        assert!(!items[0].checked);
        assert_eq!(items[1].text, "Checked item");
        assert!(items[1].checked);
    }

    #[test]
    fn test_checklist_drops_unmarked_lines() {
        let note = Note::builder()
            .checklist(true)
            .content("[x] Kept\nno marker here\n[ ] Also kept")
            .build();
        let facade = facade_for(&note);

        let items = facade.checklist();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Kept");
        assert_eq!(items[1].text, "Also kept");
    }

    #[test]
    #[should_panic(expected = "note is a checklist")]
    fn test_text_content_panics_for_checklist() {
        let note = Note::builder().checklist(true).build();
        let facade = facade_for(&note);

        facade.text_content();
    }

    #[test]
    #[should_panic(expected = "note is not a checklist")]
    fn test_checklist_panics_for_text_note() {
        let note = Note::default();
        let facade = facade_for(&note);

        facade.checklist();
    }

    #[test]
    fn test_no_category() {
        let note = Note::default();
        let facade = facade_for(&note);

        assert!(!facade.has_category());
    }

    #[test]
    #[should_panic(expected = "note has no category")]
    fn test_category_name_panics_without_category() {
        let note = Note::default();
        let facade = facade_for(&note);

        facade.category_name();
    }

    #[test]
    #[should_panic(expected = "note has no category")]
    fn test_category_color_panics_without_category() {
        let note = Note::default();
        let facade = facade_for(&note);

        facade.category_color();
    }

    #[test]
    fn test_category_color_conversion() {
        let note = Note::builder()
            .category(Category::new(1, "Category", "-16776961"))
            .build();
        let facade = facade_for(&note);

        assert!(facade.has_category());
        assert_eq!(facade.category_name(), "Category");
        // 0xFF0000FF masked to the low 24 bits
        assert_eq!(facade.category_color(), "#0000FF");
    }

    #[test]
    fn test_category_color_masks_alpha() {
        let note = Note::builder()
            .category(Category::new(2, "Pink", "-1499549"))
            .build();
        let facade = facade_for(&note);

        assert_eq!(facade.category_color(), "#E91E63");
    }

    #[test]
    fn test_no_attachments() {
        let note = Note::default();
        let facade = facade_for(&note);

        assert!(!facade.has_location());
        assert!(!facade.has_reminder());
        assert!(!facade.has_contacts());
    }

    #[test]
    fn test_empty_address_is_no_location() {
        let note = Note::builder().address("").build();
        let facade = facade_for(&note);

        assert!(!facade.has_location());
    }

    #[test]
    fn test_location() {
        let note = Note::builder().address("test address").build();
        let facade = facade_for(&note);

        assert!(facade.has_location());
        assert_eq!(facade.location(), "test address");
    }

    #[test]
    fn test_one_time_reminder() {
        let note = Note::builder().alarm(TEST_TIME_MILLIS.to_string()).build();
        let facade = facade_for(&note);

        assert!(facade.has_reminder());
        assert_eq!(facade.reminder(), "Fri, Mar 1 6:18 PM");
    }

    #[test]
    fn test_recurring_reminder() {
        let note = Note::builder()
            .alarm(TEST_TIME_MILLIS.to_string())
            .recurrence_rule("FREQ=WEEKLY;WKST=SU;BYDAY=TU")
            .build();
        let facade = facade_for(&note);

        assert_eq!(
            facade.reminder(),
            "Weekly on Tuesday starting from Fri, Mar 1 6:18 PM"
        );
    }

    #[test]
    fn test_invalid_alarm_is_ignored() {
        let note = Note::builder().alarm("not-a-number").build();
        let facade = facade_for(&note);

        assert!(!facade.has_reminder());
    }

    #[test]
    #[should_panic(expected = "note has no reminder")]
    fn test_reminder_panics_without_alarm() {
        let note = Note::default();
        let facade = facade_for(&note);

        facade.reminder();
    }

    #[test]
    fn test_contacts_join_multivalued_fields() {
        let note = Note::default();
        let records = vec![ContactRecord::new(
            "First Person",
            vec!["123-123456".to_string(), "555-000111".to_string()],
            vec!["email@address.com".to_string()],
        )];
        let facade = NoteFacade::new(&note, records, &EnglishLabels);

        assert!(facade.has_contacts());
        let contacts = facade.contacts();
        assert_eq!(contacts[0].name, "First Person");
        assert_eq!(contacts[0].phone, "123-123456, 555-000111");
        assert_eq!(contacts[0].email, "email@address.com");
    }

    #[test]
    #[should_panic(expected = "note has no contacts")]
    fn test_contacts_panics_when_empty() {
        let note = Note::default();
        let facade = facade_for(&note);

        facade.contacts();
    }

    #[test]
    fn test_timestamp_empty_when_creation_missing() {
        let note = Note::builder()
            .last_modification(TEST_TIME_MILLIS)
            .build();
        let facade = facade_for(&note);

        assert_eq!(facade.timestamp(), "");
    }
}
