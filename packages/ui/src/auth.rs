//! Authentication context and hooks for the UI.

use api::AccountInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub account: Option<AccountInfo>,
    /// True until the initial account fetch settles. Route guards hold
    /// navigation while this is set.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            account: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the account logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current account on mount
    let _ = use_resource(move || async move {
        match api::get_current_account().await {
            Ok(account) => {
                auth_state.set(AuthState {
                    account,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    account: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current account.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    account: None,
                    loading: false,
                });
                // Redirect to login
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to log out: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
