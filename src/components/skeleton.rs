use dioxus::prelude::*;

/// Placeholder grid shown while the gallery loads.
#[component]
pub fn SkeletonGrid(columns: usize, #[props(default = 2)] rows: usize) -> Element {
    let columns = columns.max(1);
    // Alternating heights so the placeholder reads as masonry
    let heights = ["14rem", "18rem", "11rem", "16rem"];

    rsx! {
        div {
            class: "masonry masonry--skeleton",
            "aria-busy": "true",
            style: "grid-template-columns: repeat({columns}, 1fr);",
            for col in 0..columns {
                div { key: "{col}", class: "masonry__column",
                    for row in 0..rows {
                        div {
                            key: "{row}",
                            class: "skeleton-cell",
                            style: "height: {heights[(col + row) % heights.len()]};",
                        }
                    }
                }
            }
        }
    }
}
