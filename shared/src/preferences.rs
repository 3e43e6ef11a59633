//! Global, date-independent settings: colour theme and Bible translation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceParseError;
use crate::storage::{KeyValueStore, LocalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme to use when nothing has been stored yet
    pub fn from_device_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Label of the toggle button, naming the theme a click switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Light mode",
            Theme::Light => "Dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PreferenceParseError::Theme(other.to_string())),
        }
    }
}

/// Translations offered when opening a passage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Translation {
    #[default]
    Niv,
    Esv,
    Nlt,
    Nkjv,
    Kjv,
    Csb,
}

impl Translation {
    /// Display order of the translation picker
    pub const ALL: [Translation; 6] = [
        Translation::Niv,
        Translation::Esv,
        Translation::Nlt,
        Translation::Nkjv,
        Translation::Kjv,
        Translation::Csb,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Translation::Niv => "NIV",
            Translation::Esv => "ESV",
            Translation::Nlt => "NLT",
            Translation::Nkjv => "NKJV",
            Translation::Kjv => "KJV",
            Translation::Csb => "CSB",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Translation::Niv => "NIV (New International Version)",
            Translation::Esv => "ESV (English Standard Version)",
            Translation::Nlt => "NLT (New Living Translation)",
            Translation::Nkjv => "NKJV (New King James Version)",
            Translation::Kjv => "KJV (King James Version)",
            Translation::Csb => "CSB (Christian Standard Bible)",
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Translation {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Translation::ALL
            .into_iter()
            .find(|translation| translation.code() == s)
            .ok_or_else(|| PreferenceParseError::Translation(s.to_string()))
    }
}

/// Current theme and translation as shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub translation: Translation,
}

impl Preferences {
    /// Read both settings, falling back to the device's colour-scheme signal
    /// when no theme was ever stored
    pub fn load<S: KeyValueStore>(state: &LocalState<S>, prefers_dark: bool) -> Self {
        Self {
            theme: state
                .theme()
                .unwrap_or_else(|| Theme::from_device_preference(prefers_dark)),
            translation: state.translation(),
        }
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle_theme<S: KeyValueStore>(&mut self, state: &LocalState<S>) -> Theme {
        self.theme = self.theme.toggled();
        state.save_theme(self.theme);
        self.theme
    }

    pub fn select_translation<S: KeyValueStore>(
        &mut self,
        state: &LocalState<S>,
        translation: Translation,
    ) {
        self.translation = translation;
        state.save_translation(translation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UnavailableStore};

    #[test]
    fn test_theme_round_trips_through_its_stored_value() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Light mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_translation_codes() {
        let codes: Vec<&str> = Translation::ALL.iter().map(Translation::code).collect();
        assert_eq!(codes, ["NIV", "ESV", "NLT", "NKJV", "KJV", "CSB"]);
        assert_eq!("KJV".parse::<Translation>(), Ok(Translation::Kjv));
        assert_eq!(
            "MSG".parse::<Translation>(),
            Err(PreferenceParseError::Translation("MSG".to_string()))
        );
        assert_eq!(Translation::default(), Translation::Niv);
    }

    #[test]
    fn test_serde_uses_stored_spellings() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Translation::Nkjv).unwrap(), "\"NKJV\"");
    }

    #[test]
    fn test_load_falls_back_to_device_preference() {
        let state = LocalState::new(MemoryStore::default());
        assert_eq!(Preferences::load(&state, true).theme, Theme::Dark);
        assert_eq!(Preferences::load(&state, false).theme, Theme::Light);

        state.save_theme(Theme::Light);
        assert_eq!(Preferences::load(&state, true).theme, Theme::Light);
    }

    #[test]
    fn test_toggle_and_select_persist() {
        let state = LocalState::new(MemoryStore::default());
        let mut prefs = Preferences::load(&state, false);

        assert_eq!(prefs.toggle_theme(&state), Theme::Dark);
        prefs.select_translation(&state, Translation::Esv);

        let reloaded = Preferences::load(&state, false);
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.translation, Translation::Esv);
    }

    #[test]
    fn test_preferences_still_change_without_storage() {
        let state = LocalState::new(UnavailableStore);
        let mut prefs = Preferences::load(&state, false);
        prefs.toggle_theme(&state);
        prefs.select_translation(&state, Translation::Csb);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.translation, Translation::Csb);
    }
}
