//! Recent admin actions, newest first.

use dioxus::prelude::*;
use portfolio_core::ActivityEntry;

#[component]
pub fn ActivityPanel(entries: Vec<ActivityEntry>, on_clear: EventHandler<()>) -> Element {
    let rows: Vec<(String, String)> = entries
        .iter()
        .map(|entry| {
            let at = entry.at.with_timezone(&chrono::Local).format("%b %-d, %H:%M");
            (at.to_string(), entry.message.clone())
        })
        .collect();

    rsx! {
        aside { class: "activity-panel",
            header { class: "activity-panel__header",
                h2 { class: "section-header", "Recent activity" }
                if !entries.is_empty() {
                    button { class: "btn-link", onclick: move |_| on_clear.call(()), "Clear" }
                }
            }

            if entries.is_empty() {
                p { class: "empty-message", "No activity yet." }
            } else {
                ul { class: "activity-panel__list",
                    for (n, (at, message)) in rows.into_iter().enumerate() {
                        li { key: "{n}", class: "activity-panel__entry",
                            time { class: "activity-panel__time", "{at}" }
                            span { "{message}" }
                        }
                    }
                }
            }
        }
    }
}
