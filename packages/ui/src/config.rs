//! Process-wide application configuration.
//!
//! [`AppConfig`] is constructed once at application start and handed to
//! every consumer through context — there is no ambient global and no
//! per-request override point. The locale is fixed at `"en"`.

use dioxus::prelude::*;

/// Display locale exposed to every consumer.
pub const LOCALE: &str = "en";

/// Singleton configuration shared by all features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: &'static str,
    /// Application name shown in headers and title suffixes.
    pub brand: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: LOCALE,
            brand: "TaskHub",
        }
    }
}

/// Install the process-wide config. Called once from the app root.
pub fn provide_app_config() -> AppConfig {
    use_context_provider(AppConfig::default)
}

/// Read the config provided at application start.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_is_en() {
        assert_eq!(AppConfig::default().locale, "en");
        assert_eq!(LOCALE, "en");
    }
}
