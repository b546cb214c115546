use dioxus::prelude::*;

use ui::{can_activate, set_page_title, use_app_config, use_auth, GuardDecision};

use crate::routes::{descriptor_for, RouteOutlet};
use crate::views::TodoList;
use crate::Route;

/// Guarded shell for routed entities.
///
/// Resolves the active route against the descriptor table, applies the
/// entry's page title, and evaluates the access guard before any child view
/// is instantiated. While the account fetch is pending nothing renders; on
/// deny the navigation is cancelled and replaced with `/login`.
///
/// Popup-outlet routes keep the list view mounted as the primary region and
/// render their dialog above it, so create/edit/delete overlays never
/// replace the underlying view.
#[component]
pub fn TodoLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let config = use_app_config();
    let route = use_route::<Route>();

    let descriptor = descriptor_for(&route);

    if let Some(descriptor) = descriptor {
        set_page_title(&format!("{} - {}", descriptor.title, config.brand));
    }

    let required = descriptor.map(|d| d.authorities).unwrap_or(&[]);
    match can_activate(&auth(), required) {
        // Navigation is held until the guard settles.
        GuardDecision::Pending => return rsx! {},
        GuardDecision::Deny => {
            nav.replace(Route::Login {});
            return rsx! {};
        }
        GuardDecision::Allow => {}
    }

    let popup = matches!(descriptor.map(|d| d.outlet), Some(RouteOutlet::Popup));

    rsx! {
        if popup {
            TodoList {}
        }
        Outlet::<Route> {}
    }
}
