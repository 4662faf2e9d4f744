//! HTML renderer built on the line-based [`Replacer`] templates.

use std::io::Write;

use crate::export::ExportError;
use crate::export::document::{ContactLabels, DocumentRenderer};
use crate::export::facade::Contact;
use crate::export::replacer::Replacer;

const HTML_TEMPLATE: &[&str] = &[
    "<!DOCTYPE html>",
    "<html lang=\"en\">",
    "<head>",
    "<meta charset=\"utf-8\">",
    "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
    "<title>",
    "$TITLE",
    "</title>",
    "<style>",
    "body {",
    "font-family: sans-serif;",
    "color: #464646;",
    "background: #cccccc;",
    "padding: 0;",
    "margin: 0;",
    "}",
    "",
    "h1 {",
    "padding: 0;",
    "margin: 0;",
    "}",
    "",
    "header, section, footer {",
    "margin: 10px;",
    "}",
    "",
    "header, section {",
    "padding: 10px;",
    "background: #ffffff;",
    "}",
    "",
    "header {",
    "border-left: solid;",
    "border-color: ",
    "$CATEGORY_COLOR",
    ";",
    "border-width: 8px;",
    "}",
    "",
    "ul {",
    "list-style-type: none;",
    "padding-left: 10px;",
    "}",
    "",
    "footer {",
    "font-size: smaller;",
    "}",
    "",
    ".contacts {",
    "margin-bottom: 1em;",
    "}",
    "</style>",
    "</head>",
    "",
    "<body>",
    "<header>",
    "<h1>",
    "$TITLE",
    "</h1>",
    "</header>",
    "",
    "<main>",
    "$CONTENT",
    "$ATTACHMENTS",
    "</main>",
    "",
    "<footer>",
    "<p>",
    "$TIME_STAMP",
    "</p>",
    "</footer>",
    "",
    "</body>",
    "</html>",
];

const TEXT_CONTENT_TEMPLATE: &[&str] = &[
    "<section class=\"content\">",
    "$TEXT",
    "</section>",
];

const CHECKLIST_CONTENT_TEMPLATE: &[&str] = &[
    "<section class=\"content\">",
    "<ul>",
    "$CHECKLIST_ITEMS",
    "</ul>",
    "</section>",
];

const CHECKED_ITEM_TEMPLATE: &[&str] = &["<li>\u{2611} ", "$TEXT", "</li>"];

const UNCHECKED_ITEM_TEMPLATE: &[&str] = &["<li>\u{2610} ", "$TEXT", "</li>"];

const ATTACHMENTS_TEMPLATE: &[&str] = &[
    "<section class=\"attachments\">",
    "<h2>",
    "$ATTACHMENTS_TITLE",
    "</h2>",
    "$ATTACHMENT_LIST",
    "</section>",
];

const LOCATION_TEMPLATE: &[&str] = &[
    "<h3>",
    "$LOCATION_TITLE",
    "</h3>",
    "<p>",
    "$LOCATION",
    "</p>",
];

const REMINDER_TEMPLATE: &[&str] = &[
    "<h3>",
    "$REMINDER_TITLE",
    "</h3>",
    "<p>",
    "$REMINDER",
    "</p>",
];

const CONTACTS_TEMPLATE: &[&str] = &[
    "<h3>",
    "$CONTACTS_TITLE",
    "</h3>",
    "$CONTACT_ITEMS",
];

const CONTACT_ITEM_TEMPLATE: &[&str] = &[
    "<table class=\"contacts\">",
    "    <tr>",
    "        <td>",
    "$NAME_LABEL",
    "</td>",
    "        <td>",
    "$NAME",
    "</td>",
    "    </tr>",
    "    <tr>",
    "        <td>",
    "$PHONE_LABEL",
    "</td>",
    "        <td>",
    "$PHONE",
    "</td>",
    "    </tr>",
    "    <tr>",
    "        <td>",
    "$EMAIL_LABEL",
    "</td>",
    "        <td><a href=\"mailto:",
    "$EMAIL",
    "\">",
    "$EMAIL",
    "</a></td>",
    "    </tr>",
    "</table>",
];

/// Border color used when the note has no category.
const DEFAULT_CATEGORY_COLOR: &str = "#FFFFFF";

#[derive(Debug)]
enum HtmlContent {
    Text(String),
    Checklist(Vec<(String, bool)>),
}

/// Renders a note as a static HTML page.
///
/// The traversal hooks only record facts; [`write`](DocumentRenderer::write)
/// expands the templates and emits the final UTF-8 document. A section
/// whose sub-parts all produced empty strings collapses to nothing.
#[derive(Debug)]
pub struct HtmlRenderer {
    title: String,
    category_color: String,
    content: HtmlContent,
    attachments_title: Option<String>,
    location: Option<(String, String)>,
    reminder: Option<(String, String)>,
    contacts_title: Option<String>,
    contact_labels: Option<ContactLabels>,
    contacts: Vec<Contact>,
    timestamp: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: String::new(),
            category_color: DEFAULT_CATEGORY_COLOR.to_string(),
            content: HtmlContent::Text(String::new()),
            attachments_title: None,
            location: None,
            reminder: None,
            contacts_title: None,
            contact_labels: None,
            contacts: Vec::new(),
            timestamp: String::new(),
        }
    }
}

impl HtmlRenderer {
    /// Creates a renderer for a single export call.
    pub fn new() -> Self {
        Self::default()
    }

    fn content_html(&self) -> String {
        match &self.content {
            HtmlContent::Text(text) => {
                let text = text.replace('\n', "<br>");
                Replacer::new(TEXT_CONTENT_TEMPLATE)
                    .variable("TEXT", || text.clone())
                    .replace()
            }
            HtmlContent::Checklist(items) => {
                let items = self.checklist_items_html(items);
                Replacer::new(CHECKLIST_CONTENT_TEMPLATE)
                    .variable("CHECKLIST_ITEMS", || items.clone())
                    .replace()
            }
        }
    }

    fn checklist_items_html(&self, items: &[(String, bool)]) -> String {
        let mut all = String::new();
        for (text, checked) in items {
            let template = if *checked {
                CHECKED_ITEM_TEMPLATE
            } else {
                UNCHECKED_ITEM_TEMPLATE
            };
            all.push_str(
                &Replacer::new(template)
                    .variable("TEXT", || text.clone())
                    .replace(),
            );
        }
        all
    }

    fn attachments_html(&self) -> String {
        let list = format!(
            "{}{}{}",
            self.location_html(),
            self.reminder_html(),
            self.contacts_html()
        );
        if list.is_empty() {
            return String::new();
        }

        let title = self.attachments_title.clone().unwrap_or_default();
        Replacer::new(ATTACHMENTS_TEMPLATE)
            .variable("ATTACHMENTS_TITLE", || title.clone())
            .variable("ATTACHMENT_LIST", || list.clone())
            .replace()
    }

    fn location_html(&self) -> String {
        match &self.location {
            Some((label, address)) => Replacer::new(LOCATION_TEMPLATE)
                .variable("LOCATION_TITLE", || label.clone())
                .variable("LOCATION", || address.clone())
                .replace(),
            None => String::new(),
        }
    }

    fn reminder_html(&self) -> String {
        match &self.reminder {
            Some((label, text)) => Replacer::new(REMINDER_TEMPLATE)
                .variable("REMINDER_TITLE", || label.clone())
                .variable("REMINDER", || text.clone())
                .replace(),
            None => String::new(),
        }
    }

    fn contacts_html(&self) -> String {
        let labels = match &self.contact_labels {
            Some(labels) => labels,
            None => return String::new(),
        };

        let mut items = String::new();
        for contact in &self.contacts {
            items.push_str(
                &Replacer::new(CONTACT_ITEM_TEMPLATE)
                    .variable("NAME_LABEL", || labels.name.clone())
                    .variable("PHONE_LABEL", || labels.phone.clone())
                    .variable("EMAIL_LABEL", || labels.email.clone())
                    .variable("NAME", || contact.name.clone())
                    .variable("PHONE", || contact.phone.clone())
                    .variable("EMAIL", || contact.email.clone())
                    .replace(),
            );
        }

        let title = self.contacts_title.clone().unwrap_or_default();
        Replacer::new(CONTACTS_TEMPLATE)
            .variable("CONTACTS_TITLE", || title.clone())
            .variable("CONTACT_ITEMS", || items.clone())
            .replace()
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn begin(&mut self) {
        *self = Self::default();
    }

    fn title(&mut self, text: &str, category_color: Option<&str>) {
        self.title = text.to_string();
        if let Some(color) = category_color {
            self.category_color = color.to_string();
        }
    }

    fn text_content(&mut self, text: &str) {
        self.content = HtmlContent::Text(text.to_string());
    }

    fn checklist_item(&mut self, text: &str, checked: bool) {
        match &mut self.content {
            HtmlContent::Checklist(items) => items.push((text.to_string(), checked)),
            HtmlContent::Text(_) => {
                self.content = HtmlContent::Checklist(vec![(text.to_string(), checked)]);
            }
        }
    }

    fn begin_attachments(&mut self, title: &str) {
        self.attachments_title = Some(title.to_string());
    }

    fn location(&mut self, label: &str, address: &str) {
        self.location = Some((label.to_string(), address.to_string()));
    }

    fn reminder(&mut self, label: &str, text: &str) {
        self.reminder = Some((label.to_string(), text.to_string()));
    }

    fn begin_contacts(&mut self, label: &str) {
        self.contacts_title = Some(label.to_string());
    }

    fn contact(&mut self, labels: &ContactLabels, contact: &Contact) {
        if self.contact_labels.is_none() {
            self.contact_labels = Some(labels.clone());
        }
        self.contacts.push(contact.clone());
    }

    fn timestamp(&mut self, text: &str) {
        self.timestamp = text.to_string();
    }

    fn write(&mut self, sink: &mut dyn Write) -> Result<(), ExportError> {
        let this = &*self;
        let document = Replacer::new(HTML_TEMPLATE)
            .variable("TITLE", || this.title.clone())
            .variable("CATEGORY_COLOR", || this.category_color.clone())
            .variable("CONTENT", || this.content_html())
            .variable("ATTACHMENTS", || this.attachments_html())
            .variable("TIME_STAMP", || this.timestamp.clone())
            .replace();

        sink.write_all(document.as_bytes())
            .map_err(ExportError::from_write)
    }
}
