//! Response bodies that are not plain JSON records.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Timestamp layout of the info page, e.g. `Wed Oct 14 2026 09:30:00 GMT+0200`.
const INFO_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// HTML fragment for `/info`.
pub fn render_info<Tz>(count: usize, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "<p>Phonebook has info for {count} people</p>\n<p>{}</p>\n",
        at.format(INFO_TIMESTAMP_FORMAT)
    )
}
