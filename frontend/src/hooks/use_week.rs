use chrono::NaiveDate;
use yew::prelude::*;
use shared::{week_status, WeekDayStatus};
use crate::hooks::use_local_state::use_local_state;
use crate::services::theme;

/// Read flags for the week containing `today`; never writes
#[hook]
pub fn use_week(today: NaiveDate) -> Vec<WeekDayStatus> {
    let local_state = use_local_state();
    let days = use_state(Vec::<WeekDayStatus>::new);

    use_effect_with(today, {
        let days = days.clone();
        move |today| {
            // Only a stored theme is applied here; the day page owns the fallback
            if let Some(stored) = local_state.theme() {
                theme::apply_theme(stored);
            }
            days.set(week_status(&local_state, *today));
            || ()
        }
    });

    (*days).clone()
}
