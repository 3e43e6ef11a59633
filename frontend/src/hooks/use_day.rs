use chrono::NaiveDate;
use yew::prelude::*;
use shared::DayState;
use crate::hooks::use_local_state::use_local_state;
use crate::services::date_utils;

pub struct UseDayResult {
    pub state: DayState,
    pub actions: UseDayActions,
}

#[derive(Clone)]
pub struct UseDayActions {
    pub toggle_read: Callback<MouseEvent>,
    pub update_note: Callback<String>,
}

/// Read/note state of one calendar day, reloaded from storage on mount
#[hook]
pub fn use_day(date: NaiveDate) -> UseDayResult {
    let local_state = use_local_state();
    let day = use_state(|| DayState::new(date));

    use_effect_with(date, {
        let day = day.clone();
        let local_state = local_state.clone();
        move |date| {
            day.set(DayState::load(&local_state, *date));
            || ()
        }
    });

    let toggle_read = {
        let day = day.clone();
        let local_state = local_state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*day).clone();
            next.toggle_read(&local_state, date_utils::now());
            day.set(next);
        })
    };

    let update_note = {
        let day = day.clone();
        let local_state = local_state.clone();
        Callback::from(move |text: String| {
            let mut next = (*day).clone();
            next.set_note(&local_state, text);
            day.set(next);
        })
    };

    UseDayResult {
        state: (*day).clone(),
        actions: UseDayActions {
            toggle_read,
            update_note,
        },
    }
}
