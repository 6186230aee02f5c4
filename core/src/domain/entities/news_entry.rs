//! News entry domain entity
//!
//! One item of the feed as it appears in the JSON document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by entries once `.` separators are replaced with `-`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    pub title: String,
    /// Display date, `YYYY.MM.DD`
    pub date: String,
    /// Key into the category mapping
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

impl NewsEntry {
    /// Parse the display date for ordering.
    ///
    /// Returns `None` when the date is not a valid `YYYY.MM.DD` value.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date.replace('.', "-"), DATE_FORMAT).ok()
    }

    /// Whether the entry carries a link worth rendering (`#` is a placeholder)
    pub fn details_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.is_empty() && *link != "#")
    }
}

/// Stable sort by descending date.
///
/// Entries with unparseable dates compare as older than every valid date.
/// Returns the number of entries whose date could not be parsed.
pub fn sort_newest_first(entries: &mut [NewsEntry]) -> usize {
    // `None < Some(_)`, so comparing b to a puts invalid dates last.
    entries.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    entries.iter().filter(|e| e.parsed_date().is_none()).count()
}
