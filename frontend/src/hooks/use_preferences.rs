use yew::prelude::*;
use shared::{Preferences, Translation};
use crate::hooks::use_local_state::use_local_state;
use crate::services::theme;

pub struct UsePreferencesResult {
    pub state: Preferences,
    pub actions: UsePreferencesActions,
}

#[derive(Clone)]
pub struct UsePreferencesActions {
    pub toggle_theme: Callback<MouseEvent>,
    pub select_translation: Callback<Translation>,
}

/// Theme and translation, applied to the document as soon as they change
#[hook]
pub fn use_preferences() -> UsePreferencesResult {
    let local_state = use_local_state();
    let preferences = use_state(Preferences::default);

    use_effect_with((), {
        let preferences = preferences.clone();
        let local_state = local_state.clone();
        move |_| {
            let loaded = Preferences::load(&local_state, theme::prefers_dark());
            theme::apply_theme(loaded.theme);
            preferences.set(loaded);
            || ()
        }
    });

    let toggle_theme = {
        let preferences = preferences.clone();
        let local_state = local_state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *preferences;
            let theme = next.toggle_theme(&local_state);
            theme::apply_theme(theme);
            preferences.set(next);
        })
    };

    let select_translation = {
        let preferences = preferences.clone();
        let local_state = local_state.clone();
        Callback::from(move |translation: Translation| {
            let mut next = *preferences;
            next.select_translation(&local_state, translation);
            preferences.set(next);
        })
    };

    UsePreferencesResult {
        state: *preferences,
        actions: UsePreferencesActions {
            toggle_theme,
            select_translation,
        },
    }
}
