use dioxus::prelude::*;

use store::Todo;
use ui::{alert_error, use_alerts, use_auth, AlertBanners, ErrorAlertBanners, LogoutButton};

use crate::Route;

/// Todo list view on the primary outlet.
#[component]
pub fn TodoList() -> Element {
    let mut todos = use_signal(Vec::<Todo>::new);
    let mut alerts = use_alerts();
    let auth = use_auth();

    // Load todos on mount
    let _loader = use_resource(move || async move {
        match api::list_todos().await {
            Ok(list) => todos.set(list),
            Err(e) => alert_error(&mut alerts, &format!("Failed to load todos: {e}")),
        }
    });

    rsx! {
        div {
            class: "todo-page",

            header {
                class: "todo-header",
                h2 { "Todos" }
                div {
                    class: "todo-header-actions",
                    if let Some(account) = auth().account {
                        span { class: "todo-user", "{account.display_name()}" }
                    }
                    LogoutButton { class: "btn btn-outline" }
                    Link {
                        class: "btn btn-primary",
                        to: Route::TodoNew {},
                        "Create a new Todo"
                    }
                }
            }

            AlertBanners {}
            ErrorAlertBanners {}

            if todos().is_empty() {
                p { class: "todo-empty", "No todos found" }
            } else {
                table {
                    class: "todo-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Text" }
                            th { "Done" }
                            th {}
                        }
                    }
                    tbody {
                        for todo in todos() {
                            tr {
                                key: "{todo.id.clone().unwrap_or_default()}",
                                td {
                                    Link {
                                        to: Route::TodoDetail { id: todo.id.clone().unwrap_or_default() },
                                        "{todo.id.clone().unwrap_or_default()}"
                                    }
                                }
                                td { "{todo.text}" }
                                td {
                                    span {
                                        class: if todo.done { "badge badge-done" } else { "badge badge-open" },
                                        if todo.done { "done" } else { "open" }
                                    }
                                }
                                td {
                                    class: "todo-row-actions",
                                    Link {
                                        class: "btn btn-sm",
                                        to: Route::TodoDetail { id: todo.id.clone().unwrap_or_default() },
                                        "View"
                                    }
                                    Link {
                                        class: "btn btn-sm",
                                        to: Route::TodoEdit { id: todo.id.clone().unwrap_or_default() },
                                        "Edit"
                                    }
                                    Link {
                                        class: "btn btn-sm btn-danger",
                                        to: Route::TodoDelete { id: todo.id.clone().unwrap_or_default() },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
