//! A single day's reading state: read flag, read stamp and note.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt;

use crate::reading_plan::{self, date_key, DateKey};
use crate::share::SharePayload;
use crate::storage::{KeyValueStore, LocalState, DEFAULT_NOTE, DEFAULT_READ};

/// The three per-day fields, each stored under its own key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date_key: DateKey,
    pub read: bool,
    /// Present only while `read` is true
    pub read_at: Option<DateTime<Utc>>,
    pub note: String,
}

impl DayRecord {
    pub fn empty(date_key: DateKey) -> Self {
        Self {
            date_key,
            read: DEFAULT_READ,
            read_at: None,
            note: DEFAULT_NOTE.to_string(),
        }
    }

    pub fn load<S: KeyValueStore>(state: &LocalState<S>, date_key: DateKey) -> Self {
        let read = state.is_read(&date_key);
        Self {
            read_at: if read { state.read_at(&date_key) } else { None },
            note: state.note(&date_key),
            read,
            date_key,
        }
    }
}

/// What the day page shows and edits for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayState {
    pub date: NaiveDate,
    pub reference: &'static str,
    pub record: DayRecord,
}

impl DayState {
    /// Day with default fields, before storage has been read
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            reference: reading_plan::reference_for(date),
            record: DayRecord::empty(date_key(date)),
        }
    }

    pub fn load<S: KeyValueStore>(state: &LocalState<S>, date: NaiveDate) -> Self {
        Self {
            date,
            reference: reading_plan::reference_for(date),
            record: DayRecord::load(state, date_key(date)),
        }
    }

    pub fn is_read(&self) -> bool {
        self.record.read
    }

    pub fn note(&self) -> &str {
        &self.record.note
    }

    /// Flip read/unread. Marking read stamps `now`; unmarking drops the stamp.
    /// The in-memory day changes even when the write is lost.
    pub fn toggle_read<S: KeyValueStore>(&mut self, state: &LocalState<S>, now: DateTime<Utc>) -> bool {
        if self.record.read {
            self.record.read = false;
            self.record.read_at = None;
            state.mark_unread(&self.record.date_key);
            log::debug!("{} marked unread", self.record.date_key);
        } else {
            self.record.read = true;
            self.record.read_at = Some(now);
            state.mark_read(&self.record.date_key, now);
            log::debug!("{} marked read", self.record.date_key);
        }
        self.record.read
    }

    /// Replace the note with the editor's full text
    pub fn set_note<S: KeyValueStore>(&mut self, state: &LocalState<S>, text: impl Into<String>) {
        self.record.note = text.into();
        state.save_note(&self.record.date_key, &self.record.note);
    }

    pub fn long_label(&self) -> String {
        reading_plan::long_label(self.date)
    }

    pub fn read_button_label(&self) -> &'static str {
        if self.record.read {
            "Marked for today (undo)"
        } else {
            "Mark today as read"
        }
    }

    /// "Marked at 3:05 PM." while read, nothing otherwise
    pub fn marked_at_label<Tz>(&self, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if !self.record.read {
            return None;
        }
        self.record
            .read_at
            .as_ref()
            .map(|at| format!("Marked at {}.", reading_plan::time_label(at, tz)))
    }

    pub fn share_payload(&self) -> SharePayload {
        SharePayload::for_day(self.date, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageKey, UnavailableStore};

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap()
    }

    #[test]
    fn test_new_day_has_defaults() {
        let day = DayState::new(march_first());
        assert_eq!(day.reference, "Luke 24");
        assert!(!day.is_read());
        assert_eq!(day.note(), "");
        assert_eq!(day.record.date_key.as_str(), "2024-03-01");
    }

    #[test]
    fn test_toggle_twice_returns_to_unread_without_stamp() {
        let state = LocalState::new(MemoryStore::default());
        let mut day = DayState::load(&state, march_first());

        assert!(day.toggle_read(&state, morning()));
        assert_eq!(day.record.read_at, Some(morning()));
        assert!(state.store().contains_key("today-is-enough.readAt.2024-03-01"));

        assert!(!day.toggle_read(&state, morning()));
        assert_eq!(day.record.read_at, None);
        assert!(!state.store().contains_key("today-is-enough.readAt.2024-03-01"));
        assert!(!DayState::load(&state, march_first()).is_read());
    }

    #[test]
    fn test_read_state_survives_reload() {
        let state = LocalState::new(MemoryStore::default());
        let mut day = DayState::load(&state, march_first());
        day.toggle_read(&state, morning());

        let reloaded = DayState::load(&state, march_first());
        assert!(reloaded.is_read());
        assert_eq!(reloaded.record.read_at, Some(morning()));
        assert_eq!(reloaded.marked_at_label(&Utc).as_deref(), Some("Marked at 7:30 AM."));
    }

    #[test]
    fn test_note_reloads_for_same_day_only() {
        let state = LocalState::new(MemoryStore::default());
        let mut day = DayState::load(&state, march_first());
        day.set_note(&state, "g");
        day.set_note(&state, "grace");

        assert_eq!(DayState::load(&state, march_first()).note(), "grace");
        let next = march_first().succ_opt().unwrap();
        assert_eq!(DayState::load(&state, next).note(), "");
    }

    #[test]
    fn test_stale_stamp_is_ignored_while_unread() {
        let state = LocalState::new(MemoryStore::default());
        let key = date_key(march_first());
        state.set(StorageKey::ReadAt(&key), "2024-03-01T07:30:00.000Z");
        let day = DayState::load(&state, march_first());
        assert!(!day.is_read());
        assert_eq!(day.record.read_at, None);
        assert_eq!(day.marked_at_label(&Utc), None);
    }

    #[test]
    fn test_day_works_without_storage() {
        let state = LocalState::new(UnavailableStore);
        let mut day = DayState::load(&state, march_first());

        assert!(day.toggle_read(&state, morning()));
        assert_eq!(day.read_button_label(), "Marked for today (undo)");
        day.set_note(&state, "grace");
        assert_eq!(day.note(), "grace");

        assert!(!day.toggle_read(&state, morning()));
        assert_eq!(day.read_button_label(), "Mark today as read");
    }

    #[test]
    fn test_share_payload_names_the_day() {
        let day = DayState::new(march_first());
        let payload = day.share_payload();
        assert!(payload.text.ends_with("Friday, March 1, 2024 \u{2014} Luke 24"));
    }
}
