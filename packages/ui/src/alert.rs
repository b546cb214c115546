//! Shared alert queue and banners.
//!
//! Feature views push alerts through the context signal installed at the app
//! root; [`AlertBanners`] renders success/info alerts and
//! [`ErrorAlertBanners`] renders errors, so the two stacks can sit in
//! different places in the page chrome. Alerts are dismissable and, in the
//! browser, expire on their own after a few seconds.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

/// Queue of live alerts, shared through context.
#[derive(Clone, Debug, Default)]
pub struct Alerts {
    pub entries: Vec<Alert>,
    next_id: u64,
}

impl Alerts {
    fn push(&mut self, kind: AlertKind, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Alert {
            id: self.next_id,
            kind,
            message: message.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|a| a.id != id);
    }
}

pub fn use_alerts() -> Signal<Alerts> {
    use_context::<Signal<Alerts>>()
}

pub fn alert_success(alerts: &mut Signal<Alerts>, message: &str) {
    let id = alerts.write().push(AlertKind::Success, message);
    expire_later(*alerts, id);
}

pub fn alert_info(alerts: &mut Signal<Alerts>, message: &str) {
    let id = alerts.write().push(AlertKind::Info, message);
    expire_later(*alerts, id);
}

/// Error alerts stay until dismissed.
pub fn alert_error(alerts: &mut Signal<Alerts>, message: &str) {
    alerts.write().push(AlertKind::Error, message);
}

#[cfg(target_arch = "wasm32")]
fn expire_later(mut alerts: Signal<Alerts>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
        alerts.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn expire_later(_alerts: Signal<Alerts>, _id: u64) {}

/// Success and info banners.
#[component]
pub fn AlertBanners() -> Element {
    let mut alerts = use_alerts();

    rsx! {
        div {
            class: "alert-stack",
            for alert in alerts().entries.into_iter().filter(|a| a.kind != AlertKind::Error) {
                div {
                    key: "{alert.id}",
                    class: if alert.kind == AlertKind::Success { "alert alert-success" } else { "alert alert-info" },
                    span { class: "alert-message", "{alert.message}" }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| alerts.write().dismiss(alert.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// Error banners.
#[component]
pub fn ErrorAlertBanners() -> Element {
    let mut alerts = use_alerts();

    rsx! {
        div {
            class: "alert-stack alert-stack-errors",
            for alert in alerts().entries.into_iter().filter(|a| a.kind == AlertKind::Error) {
                div {
                    key: "{alert.id}",
                    class: "alert alert-error",
                    span { class: "alert-message", "{alert.message}" }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| alerts.write().dismiss(alert.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes() {
        let mut alerts = Alerts::default();
        let first = alerts.push(AlertKind::Success, "saved");
        let second = alerts.push(AlertKind::Error, "failed");
        assert!(second > first);
        assert_eq!(alerts.entries.len(), 2);

        alerts.dismiss(first);
        assert_eq!(alerts.entries.len(), 1);
        assert_eq!(alerts.entries[0].kind, AlertKind::Error);
    }
}
