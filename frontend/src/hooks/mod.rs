pub mod use_day;
pub mod use_local_state;
pub mod use_preferences;
pub mod use_share;
pub mod use_week;
