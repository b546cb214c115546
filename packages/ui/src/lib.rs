//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::{provide_app_config, use_app_config, AppConfig, LOCALE};

mod page_title;
pub use page_title::set_page_title;

mod alert;
pub use alert::{
    alert_error, alert_info, alert_success, use_alerts, Alert, AlertBanners, AlertKind, Alerts,
    ErrorAlertBanners,
};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::{can_activate, GuardDecision};

mod modal;
pub use modal::ModalOverlay;
