// ============================================================================
// CONFIG - API origin, user and log level
// ============================================================================
// Baked in at compile time (build.rs forwards BOOKINGS_* from .env), then
// optionally overridden from the page query string: ?userId=3&api=...
// ============================================================================

use std::str::FromStr;

use crate::models::UserId;
use crate::utils::{DEFAULT_API_URL, DEFAULT_USER_ID};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_id: UserId,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BOOKINGS_API_URL"),
            option_env!("BOOKINGS_USER_ID"),
            option_env!("BOOKINGS_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, user_id: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .filter(|url| !url.trim().is_empty())
                .map(|url| url.trim().to_string())
                .unwrap_or(defaults.api_base_url),
            user_id: user_id
                .and_then(|id| id.trim().parse().ok())
                .unwrap_or(defaults.user_id),
            log_level: log_level
                .and_then(|level| log::Level::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Apply query-string overrides. Blank or unparseable values are ignored.
    pub fn apply_overrides(mut self, user_id: Option<String>, api: Option<String>) -> Self {
        if let Some(raw) = user_id {
            match raw.trim().parse() {
                Ok(id) => self.user_id = id,
                Err(_) => log::warn!("⚠️ Ignoring invalid userId in URL: {}", raw),
            }
        }
        if let Some(api) = api.filter(|api| !api.trim().is_empty()) {
            self.api_base_url = api.trim().to_string();
        }
        self
    }

    /// Overrides from the current page URL (`?userId=`, `?user_id=`, `?api=`).
    pub fn with_location_overrides(self) -> Self {
        let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
            return self;
        };
        if search.is_empty() {
            return self;
        }
        match web_sys::UrlSearchParams::new_with_str(&search) {
            Ok(params) => {
                let user_id = params.get("userId").or_else(|| params.get("user_id"));
                self.apply_overrides(user_id, params.get("api"))
            }
            Err(e) => {
                log::warn!("⚠️ Could not parse query string {}: {:?}", search, e);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_env_is_missing() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn env_values_are_parsed() {
        let config = AppConfig::from_values(
            Some(" https://api.example.com "),
            Some("42"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.user_id, 42);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn bad_env_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("abc"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_replace_user_and_api() {
        let config = AppConfig::default()
            .apply_overrides(Some("7".into()), Some("http://10.0.0.5:3000".into()));
        assert_eq!(config.user_id, 7);
        assert_eq!(config.api_base_url, "http://10.0.0.5:3000");
    }

    #[test]
    fn missing_or_bad_overrides_keep_current_values() {
        let base = AppConfig::from_values(Some("http://api.local"), Some("5"), None);

        assert_eq!(base.clone().apply_overrides(None, None), base);
        assert_eq!(
            base.clone().apply_overrides(Some("x".into()), Some("  ".into())),
            base
        );
    }
}
