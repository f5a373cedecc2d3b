//! Lightbox Component
//!
//! Full-screen slide viewer over the currently filtered list. Keyboard:
//! arrows navigate, +/- zoom, `f` toggles full screen, Escape closes.

use dioxus::prelude::*;
use portfolio_core::{GalleryItem, ViewerState};

#[derive(Clone, PartialEq, Props)]
pub struct LightboxProps {
    pub items: Vec<GalleryItem>,
    pub viewer: Signal<ViewerState>,
}

#[component]
pub fn Lightbox(props: LightboxProps) -> Element {
    let mut viewer = props.viewer;
    let state = viewer.read().clone();

    let Some(index) = state.index() else {
        return rsx! {};
    };
    let Some(item) = props.items.get(index).cloned() else {
        return rsx! {};
    };

    let on_key = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowRight => viewer.write().next(),
        Key::ArrowLeft => viewer.write().prev(),
        Key::Escape => viewer.write().close(),
        Key::Character(c) if c == "+" || c == "=" => viewer.write().zoom_in(),
        Key::Character(c) if c == "-" => viewer.write().zoom_out(),
        Key::Character(c) if c == "f" => viewer.write().toggle_fullscreen(),
        _ => {}
    };

    let on_wheel = move |evt: WheelEvent| {
        if evt.delta().strip_units().y < 0.0 {
            viewer.write().zoom_in();
        } else {
            viewer.write().zoom_out();
        }
    };

    let zoom = state.zoom();
    let frame_class = if state.is_fullscreen() {
        "lightbox lightbox--fullscreen"
    } else {
        "lightbox"
    };

    rsx! {
        div {
            class: "{frame_class}",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_key,

            div { class: "lightbox__toolbar",
                span { class: "lightbox__counter", "{index + 1} / {state.len()}" }
                button {
                    class: "lightbox__btn",
                    title: "Zoom out",
                    disabled: zoom <= portfolio_core::masonry::MIN_ZOOM,
                    onclick: move |_| viewer.write().zoom_out(),
                    "−"
                }
                button {
                    class: "lightbox__btn",
                    title: "Zoom in",
                    disabled: zoom >= portfolio_core::masonry::MAX_ZOOM,
                    onclick: move |_| viewer.write().zoom_in(),
                    "+"
                }
                button {
                    class: "lightbox__btn",
                    title: "Full screen",
                    onclick: move |_| viewer.write().toggle_fullscreen(),
                    "⛶"
                }
                button {
                    class: "lightbox__btn",
                    title: "Close",
                    onclick: move |_| viewer.write().close(),
                    "✕"
                }
            }

            button {
                class: "lightbox__nav lightbox__nav--prev",
                disabled: !state.has_prev(),
                onclick: move |_| viewer.write().prev(),
                "‹"
            }

            div { class: "lightbox__stage", onwheel: on_wheel,
                img {
                    key: "{item.id}",
                    class: "lightbox__img",
                    style: "transform: scale({zoom});",
                    src: "{item.renditions.full}",
                    alt: "{item.title}",
                }
            }

            button {
                class: "lightbox__nav lightbox__nav--next",
                disabled: !state.has_next(),
                onclick: move |_| viewer.write().next(),
                "›"
            }

            div { class: "lightbox__caption",
                span { class: "badge", "{item.category.label()}" }
                h2 { "{item.title}" }
                if let Some(description) = &item.description {
                    p { "{description}" }
                }
            }
        }
    }
}
