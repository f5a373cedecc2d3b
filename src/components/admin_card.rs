//! Admin Card Component
//!
//! One catalogue entry on the dashboard: thumbnail, draft badge, selection
//! checkbox and per-item actions. Cards are drag sources and drop targets
//! for reordering.

use dioxus::prelude::*;
use portfolio_core::GalleryItem;

#[derive(Clone, PartialEq, Props)]
pub struct AdminCardProps {
    pub item: GalleryItem,
    /// Admin-card rendition URL
    pub thumbnail: String,
    pub selected: bool,
    /// Position in the reorderable list, if the card can be dragged
    pub position: Option<usize>,
    /// Highlight as the current drop target
    #[props(default = false)]
    pub drop_target: bool,
    pub on_select: EventHandler<()>,
    pub on_toggle_published: EventHandler<()>,
    pub on_edit: EventHandler<()>,
    pub on_delete: EventHandler<()>,
    pub on_drag_start: EventHandler<usize>,
    pub on_drag_over: EventHandler<usize>,
    pub on_drop: EventHandler<usize>,
}

#[component]
pub fn AdminCard(props: AdminCardProps) -> Element {
    let item = &props.item;
    let position = props.position;

    let mut class = String::from("admin-card");
    if !item.published {
        class.push_str(" admin-card--draft");
    }
    if props.selected {
        class.push_str(" admin-card--selected");
    }
    if props.drop_target {
        class.push_str(" admin-card--drop-target");
    }

    let on_select = props.on_select;
    let on_toggle = props.on_toggle_published;
    let on_edit = props.on_edit;
    let on_delete = props.on_delete;
    let on_drag_start = props.on_drag_start;
    let on_drag_over = props.on_drag_over;
    let on_drop = props.on_drop;

    rsx! {
        div {
            class: "{class}",
            draggable: position.is_some(),
            ondragstart: move |_| {
                if let Some(pos) = position {
                    on_drag_start.call(pos);
                }
            },
            ondragover: move |evt| {
                evt.prevent_default();
                if let Some(pos) = position {
                    on_drag_over.call(pos);
                }
            },
            ondrop: move |evt| {
                evt.prevent_default();
                if let Some(pos) = position {
                    on_drop.call(pos);
                }
            },

            div { class: "admin-card__media",
                img { src: "{props.thumbnail}", alt: "{item.title}", loading: "lazy" }
                input {
                    class: "admin-card__check",
                    r#type: "checkbox",
                    checked: props.selected,
                    "aria-label": "Select {item.title}",
                    onchange: move |_| on_select.call(()),
                }
                if !item.published {
                    span { class: "badge badge--draft", "Draft" }
                }
            }

            div { class: "admin-card__body",
                span { class: "badge", "{item.category.label()}" }
                h3 { class: "admin-card__title", "{item.title}" }
                p { class: "admin-card__date", "{item.created_label()}" }
            }

            div { class: "admin-card__actions",
                button {
                    class: "btn-small",
                    onclick: move |_| on_toggle.call(()),
                    if item.published { "Unpublish" } else { "Publish" }
                }
                button { class: "btn-small", onclick: move |_| on_edit.call(()), "Edit" }
                button {
                    class: "btn-small btn-small--danger",
                    onclick: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
