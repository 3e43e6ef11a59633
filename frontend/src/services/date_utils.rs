use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use js_sys::Date;

/// Today's local calendar day as the browser sees it
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| Utc::now().date_naive())
}

/// Current instant, millisecond precision
pub fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(Date::now() as i64)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Address of the current page, used as the shared link
pub fn current_href() -> Option<String> {
    web_sys::window().and_then(|window| window.location().href().ok())
}
