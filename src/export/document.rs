//! Export traversal contract shared by all format renderers.
//!
//! The traversal order is fixed: title, content, attachments (location,
//! reminder, contacts — only when at least one is present), timestamp.
//! Renderers implement the leaf hooks of [`DocumentRenderer`] and a single
//! [`render`] function drives them, so no format can reorder sections.

use std::io::Write;

use crate::export::ExportError;
use crate::export::facade::{Contact, NoteFacade};
use crate::export::labels::Label;

/// The three contact row labels, resolved once per export.
#[derive(Debug, Clone)]
pub struct ContactLabels {
    /// Label for the name row.
    pub name: String,
    /// Label for the phone row.
    pub phone: String,
    /// Label for the email row.
    pub email: String,
}

impl ContactLabels {
    fn resolve(facade: &NoteFacade) -> Self {
        Self {
            name: facade.label(Label::Name),
            phone: facade.label(Label::Phone),
            email: facade.label(Label::Email),
        }
    }
}

/// Leaf-rendering hooks invoked by [`render`], in document order.
///
/// A renderer instance is single-use: construct, drive through [`render`],
/// serialize with [`write`](Self::write), discard.
pub trait DocumentRenderer {
    /// Called first; sets up renderer state.
    fn begin(&mut self);

    /// Title section. `text` already carries the parenthesized category
    /// suffix when a category is present; `category_color` is the
    /// `#RRGGBB` category color, or `None` without a category.
    fn title(&mut self, text: &str, category_color: Option<&str>);

    /// Free-text content (raw, newline-separated).
    fn text_content(&mut self, text: &str);

    /// One parsed checklist row; called once per row, in parse order.
    fn checklist_item(&mut self, text: &str, checked: bool);

    /// Start of the attachments section. Only called when at least one
    /// of location, reminder or contacts is present.
    fn begin_attachments(&mut self, title: &str);

    /// Location attachment.
    fn location(&mut self, label: &str, address: &str);

    /// Reminder attachment.
    fn reminder(&mut self, label: &str, text: &str);

    /// Start of the contacts sub-section.
    fn begin_contacts(&mut self, label: &str);

    /// One resolved contact.
    fn contact(&mut self, labels: &ContactLabels, contact: &Contact);

    /// Timestamp footer. Skipped when the composed string is empty.
    fn timestamp(&mut self, text: &str);

    /// Serializes the accumulated document to the sink.
    fn write(&mut self, sink: &mut dyn Write) -> Result<(), ExportError>;
}

/// Drives a renderer through the fixed traversal of a note.
///
/// Serialization is left to the caller (`renderer.write(sink)`), so the
/// orchestrator can separate document construction failures from sink
/// failures.
pub fn render(facade: &NoteFacade, renderer: &mut dyn DocumentRenderer) {
    renderer.begin();

    let title = if facade.has_category() {
        format!("{} ({})", facade.title(), facade.category_name())
    } else {
        facade.title().to_string()
    };
    let color = facade.has_category().then(|| facade.category_color());
    renderer.title(&title, color.as_deref());

    if facade.is_checklist() {
        for item in facade.checklist() {
            renderer.checklist_item(&item.text, item.checked);
        }
    } else {
        renderer.text_content(facade.text_content());
    }

    if facade.has_location() || facade.has_reminder() || facade.has_contacts() {
        renderer.begin_attachments(&facade.label(Label::Attachments));

        if facade.has_location() {
            renderer.location(&facade.label(Label::Location), facade.location());
        }
        if facade.has_reminder() {
            renderer.reminder(&facade.label(Label::Reminder), &facade.reminder());
        }
        if facade.has_contacts() {
            renderer.begin_contacts(&facade.label(Label::Contacts));
            let labels = ContactLabels::resolve(facade);
            for contact in facade.contacts() {
                renderer.contact(&labels, contact);
            }
        }
    }

    let timestamp = facade.timestamp();
    if !timestamp.is_empty() {
        renderer.timestamp(&timestamp);
    }
}
