//! Masonry Grid Component
//!
//! Waterfall layout: each item goes into the currently shortest column,
//! using the image's aspect ratio as its height.

use dioxus::prelude::*;
use portfolio_core::masonry::relative_height;
use portfolio_core::{masonry_columns, GalleryItem};

use super::LqipImage;

#[derive(Clone, PartialEq, Props)]
pub struct MasonryGridProps {
    /// Items in display order
    pub items: Vec<GalleryItem>,
    pub columns: usize,
    /// Touch-style layout: overlays always visible
    #[props(default = false)]
    pub always_show_overlay: bool,
    /// Called with the clicked item's index in `items`
    pub on_open: EventHandler<usize>,
}

#[component]
pub fn MasonryGrid(props: MasonryGridProps) -> Element {
    let indexed: Vec<(usize, GalleryItem)> = props.items.iter().cloned().enumerate().collect();
    let columns = masonry_columns(&indexed, props.columns, |(_, item)| relative_height(item));
    let overlay_class = if props.always_show_overlay {
        "masonry-cell__overlay masonry-cell__overlay--visible"
    } else {
        "masonry-cell__overlay"
    };

    rsx! {
        div {
            class: "masonry",
            style: "grid-template-columns: repeat({columns.len()}, 1fr);",
            for (col, column) in columns.into_iter().enumerate() {
                div { key: "{col}", class: "masonry__column",
                    for (index, item) in column {
                        {
                            let on_open = props.on_open;
                            rsx! {
                                button {
                                    key: "{item.id}",
                                    class: "masonry-cell",
                                    onclick: move |_| on_open.call(index),
                                    LqipImage {
                                        src: item.renditions.thumbnail.clone(),
                                        alt: item.title.clone(),
                                        placeholder: item.lqip.clone(),
                                    }
                                    div { class: "{overlay_class}",
                                        span { class: "badge", "{item.category.label()}" }
                                        h3 { class: "masonry-cell__title", "{item.title}" }
                                        if let Some(description) = &item.description {
                                            p { class: "masonry-cell__description", "{description}" }
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
}
