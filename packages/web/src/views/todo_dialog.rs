use dioxus::prelude::*;

use store::Todo;
use ui::{alert_success, use_alerts, ModalOverlay};

use crate::Route;

/// Create dialog on the popup outlet.
#[component]
pub fn TodoNew() -> Element {
    rsx! {
        TodoDialog { todo_id: None::<String> }
    }
}

/// Edit dialog on the popup outlet.
#[component]
pub fn TodoEdit(id: String) -> Element {
    rsx! {
        TodoDialog { todo_id: Some(id) }
    }
}

/// Shared create/edit form rendered above the list view.
///
/// A new todo is staged with [`Todo::new`], so it always starts incomplete;
/// the done flag only becomes editable once the item exists.
#[component]
fn TodoDialog(todo_id: Option<String>) -> Element {
    let editing = todo_id.is_some();
    let mut draft = use_signal(|| Todo::new(None, "", false));
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let nav = use_navigator();
    let mut alerts = use_alerts();

    // Load the todo under edit
    let _loader = use_resource(move || {
        let todo_id = todo_id.clone();
        async move {
            if let Some(id) = todo_id {
                match api::get_todo(id).await {
                    Ok(found) => draft.set(found),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut todo = draft();
            todo.text = todo.text.trim().to_string();
            if todo.text.is_empty() {
                error.set(Some("Text is required".to_string()));
                return;
            }

            saving.set(true);
            let result = if todo.id.is_some() {
                api::update_todo(todo).await
            } else {
                api::create_todo(todo).await
            };

            match result {
                Ok(saved) => {
                    alert_success(
                        &mut alerts,
                        &format!("Todo {} saved", saved.id.unwrap_or_default()),
                    );
                    nav.push(Route::TodoList {});
                }
                Err(e) => {
                    saving.set(false);
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
            form {
                class: "modal-body",
                onsubmit: handle_save,

                h2 {
                    class: "modal-title",
                    if editing { "Edit Todo" } else { "Create a new Todo" }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "modal-field",
                    label { r#for: "todo-text", "Text" }
                    input {
                        id: "todo-text",
                        r#type: "text",
                        maxlength: "{store::MAX_TEXT_LEN}",
                        placeholder: "What needs doing?",
                        value: "{draft().text}",
                        oninput: move |evt: FormEvent| draft.write().text = evt.value(),
                    }
                }

                if editing {
                    div {
                        class: "modal-field modal-field-inline",
                        input {
                            id: "todo-done",
                            r#type: "checkbox",
                            checked: draft().done,
                            onchange: move |evt: FormEvent| draft.write().done = evt.checked(),
                        }
                        label { r#for: "todo-done", "Done" }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
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
