//! Date and reminder text formatting for exported documents.
//!
//! All formatting is done in UTC so the same note always exports to the
//! same bytes.

use chrono::{DateTime, TimeZone, Utc};

/// Format used in the timestamp footer line.
const DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Format used for reminder instants.
const REMINDER_FORMAT: &str = "%a, %b %-d %-I:%M %p";

fn datetime(epoch_millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(epoch_millis).single()
}

/// Formats an epoch-milliseconds timestamp for the document footer,
/// e.g. `"Mar 1, 2019 6:18 PM"`.
///
/// An out-of-range timestamp formats to an empty string with a warning.
pub fn format_date(epoch_millis: i64) -> String {
    match datetime(epoch_millis) {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => {
            log::warn!("timestamp {epoch_millis} is out of range, formatting as empty");
            String::new()
        }
    }
}

/// Produces the one-time reminder phrase for an alarm instant,
/// e.g. `"Fri, Mar 1 6:18 PM"`.
pub fn reminder_text(epoch_millis: i64) -> String {
    match datetime(epoch_millis) {
        Some(dt) => dt.format(REMINDER_FORMAT).to_string(),
        None => {
            log::warn!("alarm timestamp {epoch_millis} is out of range, formatting as empty");
            String::new()
        }
    }
}

/// Produces the recurring reminder phrase for an alarm instant and an
/// iCalendar-like RRULE, e.g.
/// `"Weekly on Tuesday starting from Fri, Mar 1 6:18 PM"`.
///
/// A rule without a recognizable `FREQ` part falls back to the one-time
/// phrase with a warning.
pub fn recurring_reminder_text(epoch_millis: i64, rrule: &str) -> String {
    match frequency_phrase(rrule) {
        Some(phrase) => format!("{} starting from {}", phrase, reminder_text(epoch_millis)),
        None => {
            log::warn!("unrecognized recurrence rule {rrule:?}, using one-time reminder text");
            reminder_text(epoch_millis)
        }
    }
}

/// Builds the human frequency phrase from an RRULE: `FREQ` picks the base
/// word, the first `BYDAY` entry (if any) adds an "on <weekday>" clause.
fn frequency_phrase(rrule: &str) -> Option<String> {
    let mut freq = None;
    let mut byday = None;

    for part in rrule.split(';') {
        match part.split_once('=') {
            Some(("FREQ", value)) => freq = Some(value),
            Some(("BYDAY", value)) => byday = value.split(',').next(),
            _ => {}
        }
    }

    let base = match freq? {
        "DAILY" => "Daily",
        "WEEKLY" => "Weekly",
        "MONTHLY" => "Monthly",
        "YEARLY" => "Yearly",
        _ => return None,
    };

    match byday.and_then(weekday_name) {
        Some(day) => Some(format!("{base} on {day}")),
        None => Some(base.to_string()),
    }
}

fn weekday_name(code: &str) -> Option<&'static str> {
    // BYDAY entries may carry an ordinal prefix like "2TU"; only the
    // trailing two-letter code matters here.
    let code = code.get(code.len().saturating_sub(2)..)?;
    match code {
        "MO" => Some("Monday"),
        "TU" => Some("Tuesday"),
        "WE" => Some("Wednesday"),
        "TH" => Some("Thursday"),
        "FR" => Some("Friday"),
        "SA" => Some("Saturday"),
        "SU" => Some("Sunday"),
        _ => None,
    }
}
