use dioxus::prelude::*;

use store::Todo;
use ui::{alert_error, use_alerts};

use crate::Route;

/// Todo detail view on the primary outlet.
#[component]
pub fn TodoDetail(id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut todo = use_signal(|| Option::<Todo>::None);
    let mut alerts = use_alerts();

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            match api::get_todo(id).await {
                Ok(found) => todo.set(Some(found)),
                Err(e) => alert_error(&mut alerts, &format!("Failed to load todo: {e}")),
            }
        }
    });

    rsx! {
        div {
            class: "todo-page",

            if let Some(todo) = todo() {
                h2 { "Todo {todo.id.clone().unwrap_or_default()}" }
                dl {
                    class: "todo-fields",
                    dt { "Text" }
                    dd { "{todo.text}" }
                    dt { "Done" }
                    dd {
                        span {
                            class: if todo.done { "badge badge-done" } else { "badge badge-open" },
                            if todo.done { "done" } else { "open" }
                        }
                    }
                }
                div {
                    class: "todo-detail-actions",
                    Link { class: "btn btn-outline", to: Route::TodoList {}, "Back" }
                    Link {
                        class: "btn btn-primary",
                        to: Route::TodoEdit { id: todo.id.clone().unwrap_or_default() },
                        "Edit"
                    }
                }
            } else {
                p { class: "todo-empty", "Loading..." }
            }
        }
    }
}
