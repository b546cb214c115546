use dioxus::prelude::*;

use store::Todo;
use ui::{alert_success, use_alerts, ModalOverlay};

use crate::Route;

/// Delete confirmation dialog on the popup outlet. Deletion is a navigable
/// route so the confirmation itself is deep-linkable.
#[component]
pub fn TodoDelete(id: String) -> Element {
    let mut todo = use_signal(|| Option::<Todo>::None);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();
    let mut alerts = use_alerts();

    let load_id = id.clone();
    let _loader = use_resource(move || {
        let id = load_id.clone();
        async move {
            if let Ok(found) = api::get_todo(id).await {
                todo.set(Some(found));
            }
        }
    });

    let delete_id = id.clone();
    let handle_delete = move |_| {
        let id = delete_id.clone();
        spawn(async move {
            deleting.set(true);
            match api::delete_todo(id.clone()).await {
                Ok(()) => {
                    alert_success(&mut alerts, &format!("Todo {id} deleted"));
                    nav.push(Route::TodoList {});
                }
                Err(e) => {
                    deleting.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                nav.push(Route::TodoList {});
            },
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Confirm delete operation" }
                p {
                    class: "modal-text",
                    "Are you sure you want to delete Todo "
                    strong { "{id}" }
                    "?"
                }
                if let Some(todo) = todo() {
                    p { class: "modal-detail", "\u{201c}{todo.text}\u{201d}" }
                }
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-danger",
                        disabled: deleting(),
                        onclick: handle_delete,
                        if deleting() { "Deleting..." } else { "Delete" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            nav.push(Route::TodoList {});
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}
