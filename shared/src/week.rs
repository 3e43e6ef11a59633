//! Read-only summary of the current Monday-start week.

use chrono::NaiveDate;
use serde::Serialize;

use crate::reading_plan::{self, date_key, DateKey};
use crate::storage::{KeyValueStore, LocalState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDayStatus {
    pub date: NaiveDate,
    pub date_key: DateKey,
    pub label: String,
    pub reference: &'static str,
    pub read: bool,
}

impl WeekDayStatus {
    pub fn mark(&self) -> &'static str {
        if self.read {
            "\u{2713}"
        } else {
            " "
        }
    }

    pub fn aria_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Not read"
        }
    }
}

/// One row per day of the week containing `today`. Never writes.
pub fn week_status<S: KeyValueStore>(state: &LocalState<S>, today: NaiveDate) -> Vec<WeekDayStatus> {
    reading_plan::week_dates(today)
        .into_iter()
        .map(|date| {
            let date_key = date_key(date);
            WeekDayStatus {
                read: state.is_read(&date_key),
                label: reading_plan::short_label(date),
                reference: reading_plan::reference_for(date),
                date,
                date_key,
            }
        })
        .collect()
}
