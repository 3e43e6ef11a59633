//! The yearly reading rotation and the calendar helpers built on it.
//!
//! Every function here is pure: a calendar date in, a reference, key or label
//! out. The page never stores anything about the plan itself, so the same date
//! always maps to the same reading.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::preferences::Translation;

/// One short passage per day, cycled by day-of-year.
pub const READING_PLAN: [&str; 31] = [
    "Psalm 23",
    "Matthew 5",
    "Psalm 27",
    "Mark 4",
    "Psalm 46",
    "Luke 15",
    "Psalm 91",
    "John 10",
    "Psalm 16",
    "Matthew 6",
    "Psalm 121",
    "Mark 5",
    "Psalm 139",
    "Luke 10",
    "Psalm 103",
    "John 15",
    "Psalm 62",
    "Matthew 11",
    "Psalm 34",
    "Mark 10",
    "Psalm 84",
    "Luke 12",
    "Psalm 19",
    "John 6",
    "Psalm 40",
    "Matthew 14",
    "Psalm 130",
    "Mark 2",
    "Psalm 73",
    "Luke 24",
    "Psalm 90",
];

/// Canonical `YYYY-MM-DD` identifier of a local calendar day
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a stored key back into the calendar day it names
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        date_key(date)
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(date_key)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Days elapsed since January 1 of the date's own year (0-based)
pub fn day_index(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// The reading for a calendar day. Total: every date lands on a plan entry.
pub fn reference_for(date: NaiveDate) -> &'static str {
    READING_PLAN[day_index(date) as usize % READING_PLAN.len()]
}

pub fn date_key(date: NaiveDate) -> DateKey {
    DateKey(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// e.g. "Friday, March 1, 2024"
pub fn long_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. "Fri, Mar 1"
pub fn short_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Hour and minute of an instant in the given zone, e.g. "3:05 PM"
pub fn time_label<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format("%-I:%M %p").to_string()
}

/// The Monday-start week containing `date`. A Sunday closes the week that
/// began on the previous Monday.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let from_monday = u64::from(date.weekday().num_days_from_monday());
    let monday = date - Days::new(from_monday);
    std::array::from_fn(|offset| monday + Days::new(offset as u64))
}

/// Link to the passage viewer for a reference in the chosen translation
pub fn passage_url(base_url: &str, reference: &str, translation: Translation) -> String {
    format!(
        "{}?search={}&version={}",
        base_url,
        urlencoding::encode(reference),
        urlencoding::encode(translation.code())
    )
}
