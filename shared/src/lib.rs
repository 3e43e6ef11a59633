//! Domain logic for the Today Is Enough reading page.
//!
//! The browser front-end only renders and forwards events; the reading plan,
//! key scheme, storage fallbacks and day/week state all live here so they can
//! be exercised on the host.

pub mod config;
pub mod day;
pub mod error;
pub mod preferences;
pub mod reading_plan;
pub mod share;
pub mod storage;
pub mod week;

pub use config::AppConfig;
pub use day::{DayRecord, DayState};
pub use error::{PreferenceParseError, ShareError, StorageError, StorageOp};
pub use preferences::{Preferences, Theme, Translation};
pub use reading_plan::{date_key, reference_for, week_dates, DateKey, READING_PLAN};
pub use share::{share_with, AckGeneration, SharePayload, ShareOutcome, ShareStatus, ShareTarget};
pub use storage::{KeyValueStore, LocalState, MemoryStore, StorageKey, UnavailableStore};
pub use week::{week_status, WeekDayStatus};
