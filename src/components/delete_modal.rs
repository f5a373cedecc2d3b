//! Delete confirmation dialog, driven by the catalogue's confirm state.

use dioxus::prelude::*;

#[component]
pub fn DeleteModal(
    /// Title of the project awaiting confirmation
    title: String,
    /// Failure from the last attempt, shown inline
    #[props(default = None)]
    error: Option<String>,
    #[props(default = false)]
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "modal__title", "Delete project?" }
                p { class: "modal__body",
                    "\"{title}\" will be permanently deleted. This cannot be undone."
                }

                if let Some(err) = error {
                    p { class: "modal__error", "⚠️ {err}" }
                }

                div { class: "modal__actions",
                    button {
                        class: "btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
