//! # Local state
//!
//! Everything the page remembers lives in a flat string key/value store on the
//! device. This module defines the capability the page needs from such a
//! store ([`KeyValueStore`]), the namespaced key scheme ([`StorageKey`]), and
//! the [`LocalState`] facade that turns store failures into defaults so the
//! page keeps working when storage is full or disabled.

use chrono::{DateTime, SecondsFormat, Utc};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::APP_NAMESPACE;
use crate::error::StorageError;
use crate::preferences::{Theme, Translation};
use crate::reading_plan::DateKey;

/// A day is unread until marked otherwise
pub const DEFAULT_READ: bool = false;
/// A day without a stored note shows an empty editor
pub const DEFAULT_NOTE: &str = "";

const TRUE_VALUE: &str = "true";
const FALSE_VALUE: &str = "false";

/// Minimal string key/value capability the page persists through.
///
/// Implementations report failures instead of panicking; [`LocalState`]
/// decides what a failure means.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Every key the page reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey<'a> {
    Read(&'a DateKey),
    ReadAt(&'a DateKey),
    Note(&'a DateKey),
    Theme,
    Translation,
}

impl StorageKey<'_> {
    /// Full key under `namespace`, e.g. `today-is-enough.read.2024-03-01`
    pub fn name(&self, namespace: &str) -> String {
        match self {
            StorageKey::Read(day) => format!("{}.read.{}", namespace, day),
            StorageKey::ReadAt(day) => format!("{}.readAt.{}", namespace, day),
            StorageKey::Note(day) => format!("{}.note.{}", namespace, day),
            StorageKey::Theme => format!("{}.theme", namespace),
            StorageKey::Translation => format!("{}.translation", namespace),
        }
    }
}

/// Failure-tolerant facade over a [`KeyValueStore`].
///
/// Reads that fail come back as absent, writes and removals that fail are
/// dropped. Each failure is logged once at `warn` and otherwise ignored.
#[derive(Debug, Clone)]
pub struct LocalState<S> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> LocalState<S> {
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, APP_NAMESPACE)
    }

    pub fn with_namespace(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, key: StorageKey<'_>) -> Option<String> {
        let name = key.name(&self.namespace);
        match self.store.get(&name) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Treating `{}` as absent: {}", name, err);
                None
            }
        }
    }

    pub fn set(&self, key: StorageKey<'_>, value: &str) {
        let name = key.name(&self.namespace);
        if let Err(err) = self.store.set(&name, value) {
            log::warn!("Dropping write of `{}`: {}", name, err);
        }
    }

    pub fn remove(&self, key: StorageKey<'_>) {
        let name = key.name(&self.namespace);
        if let Err(err) = self.store.remove(&name) {
            log::warn!("Dropping removal of `{}`: {}", name, err);
        }
    }

    pub fn is_read(&self, day: &DateKey) -> bool {
        self.get(StorageKey::Read(day))
            .map(|value| value == TRUE_VALUE)
            .unwrap_or(DEFAULT_READ)
    }

    /// When the day was marked read. An unparsable stamp reads as absent.
    pub fn read_at(&self, day: &DateKey) -> Option<DateTime<Utc>> {
        let raw = self.get(StorageKey::ReadAt(day))?;
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(instant) => Some(instant.with_timezone(&Utc)),
            Err(err) => {
                log::debug!("Ignoring malformed read stamp `{}` for {}: {}", raw, day, err);
                None
            }
        }
    }

    pub fn note(&self, day: &DateKey) -> String {
        self.get(StorageKey::Note(day))
            .unwrap_or_else(|| DEFAULT_NOTE.to_string())
    }

    /// Stored theme, if any. Unknown values count as never stored.
    pub fn theme(&self) -> Option<Theme> {
        self.get(StorageKey::Theme)
            .and_then(|value| value.parse().ok())
    }

    pub fn translation(&self) -> Translation {
        self.get(StorageKey::Translation)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn mark_read(&self, day: &DateKey, at: DateTime<Utc>) {
        self.set(StorageKey::Read(day), TRUE_VALUE);
        self.set(StorageKey::ReadAt(day), &format_instant(at));
    }

    pub fn mark_unread(&self, day: &DateKey) {
        self.set(StorageKey::Read(day), FALSE_VALUE);
        self.remove(StorageKey::ReadAt(day));
    }

    pub fn save_note(&self, day: &DateKey, note: &str) {
        self.set(StorageKey::Note(day), note);
    }

    pub fn save_theme(&self, theme: Theme) {
        self.set(StorageKey::Theme, theme.as_str());
    }

    pub fn save_translation(&self, translation: Translation) {
        self.set(StorageKey::Translation, translation.code());
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-03-01T08:15:00.000Z`
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// In-process store, used in tests and wherever device storage is not needed
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store that fails every call, as a browser with storage disabled does
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading_plan::date_key;
    use chrono::{NaiveDate, TimeZone};

    fn key(y: i32, m: u32, d: u32) -> DateKey {
        date_key(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_key_scheme() {
        let day = key(2024, 3, 1);
        assert_eq!(StorageKey::Read(&day).name(APP_NAMESPACE), "today-is-enough.read.2024-03-01");
        assert_eq!(StorageKey::ReadAt(&day).name(APP_NAMESPACE), "today-is-enough.readAt.2024-03-01");
        assert_eq!(StorageKey::Note(&day).name(APP_NAMESPACE), "today-is-enough.note.2024-03-01");
        assert_eq!(StorageKey::Theme.name(APP_NAMESPACE), "today-is-enough.theme");
        assert_eq!(StorageKey::Translation.name(APP_NAMESPACE), "today-is-enough.translation");
    }

    #[test]
    fn test_keys_never_collide() {
        let a = key(2024, 3, 1);
        let b = key(2024, 3, 2);
        let names = [
            StorageKey::Read(&a),
            StorageKey::ReadAt(&a),
            StorageKey::Note(&a),
            StorageKey::Read(&b),
            StorageKey::ReadAt(&b),
            StorageKey::Note(&b),
            StorageKey::Theme,
            StorageKey::Translation,
        ]
        .map(|k| k.name(APP_NAMESPACE));
        let unique: std::collections::HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_defaults_when_absent() {
        let state = LocalState::new(MemoryStore::default());
        let day = key(2024, 3, 1);
        assert!(!state.is_read(&day));
        assert_eq!(state.read_at(&day), None);
        assert_eq!(state.note(&day), "");
        assert_eq!(state.theme(), None);
        assert_eq!(state.translation(), Translation::Niv);
    }

    #[test]
    fn test_mark_read_then_unread_leaves_no_stamp() {
        let state = LocalState::new(MemoryStore::default());
        let day = key(2024, 3, 1);
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();

        state.mark_read(&day, at);
        assert!(state.is_read(&day));
        assert_eq!(state.read_at(&day), Some(at));
        assert_eq!(
            state.get(StorageKey::ReadAt(&day)).as_deref(),
            Some("2024-03-01T08:15:00.000Z")
        );

        state.mark_unread(&day);
        assert!(!state.is_read(&day));
        assert_eq!(state.get(StorageKey::Read(&day)).as_deref(), Some("false"));
        assert!(!state.store().contains_key("today-is-enough.readAt.2024-03-01"));
    }

    #[test]
    fn test_notes_are_per_day() {
        let state = LocalState::new(MemoryStore::default());
        state.save_note(&key(2024, 3, 1), "grace");
        assert_eq!(state.note(&key(2024, 3, 1)), "grace");
        assert_eq!(state.note(&key(2024, 3, 2)), "");
    }

    #[test]
    fn test_unknown_preference_values_fall_back() {
        let state = LocalState::new(MemoryStore::default());
        state.set(StorageKey::Theme, "sepia");
        state.set(StorageKey::Translation, "MSG");
        assert_eq!(state.theme(), None);
        assert_eq!(state.translation(), Translation::Niv);
    }

    #[test]
    fn test_malformed_stamp_reads_as_absent() {
        let state = LocalState::new(MemoryStore::default());
        let day = key(2024, 3, 1);
        state.set(StorageKey::ReadAt(&day), "yesterday-ish");
        assert_eq!(state.read_at(&day), None);
    }

    #[test]
    fn test_custom_namespace() {
        let state = LocalState::with_namespace(MemoryStore::default(), "preview");
        state.save_theme(Theme::Dark);
        assert_eq!(state.store().keys(), vec!["preview.theme".to_string()]);
    }

    #[test]
    fn test_unavailable_store_never_panics() {
        let state = LocalState::new(UnavailableStore);
        let day = key(2024, 3, 1);
        state.mark_read(&day, Utc::now());
        state.mark_unread(&day);
        state.save_note(&day, "grace");
        state.save_theme(Theme::Dark);
        state.save_translation(Translation::Kjv);
        assert!(!state.is_read(&day));
        assert_eq!(state.note(&day), "");
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn test_shared_store_through_rc() {
        let store = Rc::new(MemoryStore::default());
        let writer = LocalState::new(Rc::clone(&store));
        let reader = LocalState::new(Rc::clone(&store));
        writer.save_note(&key(2024, 3, 1), "peace");
        assert_eq!(reader.note(&key(2024, 3, 1)), "peace");
        assert_eq!(store.len(), 1);
    }
}
