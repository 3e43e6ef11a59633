use log::LevelFilter;

use crate::preferences::Translation;
use crate::reading_plan;

/// Prefix of every persisted key
pub const APP_NAMESPACE: &str = "today-is-enough";

pub const PASSAGE_BASE_URL: &str = "https://www.biblegateway.com/passage/";

/// How long the share button reads "Copied" after a clipboard copy
pub const COPIED_ACK_MS: u32 = 2000;

/// Application-wide settings, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub namespace: String,
    pub passage_base_url: String,
    pub copied_ack_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            namespace: APP_NAMESPACE.to_string(),
            passage_base_url: PASSAGE_BASE_URL.to_string(),
            copied_ack_ms: COPIED_ACK_MS,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
        }
    }
}

impl AppConfig {
    pub fn passage_url(&self, reference: &str, translation: Translation) -> String {
        reading_plan::passage_url(&self.passage_base_url, reference, translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.namespace, "today-is-enough");
        assert_eq!(config.copied_ack_ms, 2000);
        assert_eq!(
            config.passage_url("Luke 15", Translation::Esv),
            "https://www.biblegateway.com/passage/?search=Luke%2015&version=ESV"
        );
    }
}
