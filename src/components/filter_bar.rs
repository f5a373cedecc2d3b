//! Filter Bar Component
//!
//! Category pills with counts, plus the sort selector.

use dioxus::prelude::*;
use portfolio_core::{CategoryFilter, SortMode};

#[derive(Clone, PartialEq, Props)]
pub struct FilterBarProps {
    /// "All" first, then every category with at least one item
    pub filters: Vec<(CategoryFilter, usize)>,
    pub active: CategoryFilter,
    pub sort: SortMode,
    pub on_select: EventHandler<CategoryFilter>,
    pub on_sort: EventHandler<SortMode>,
}

/// Horizontal row of category pills with the sort dropdown at the end.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterBar {
///         filters: visible_categories(&items),
///         active: view.read().active(),
///         sort: view.read().sort(),
///         on_select: move |f| view.write().set_category(f),
///         on_sort: move |s| view.write().set_sort(s),
///     }
/// }
/// ```
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let active = props.active;
    let on_sort = props.on_sort;

    rsx! {
        div { class: "filter-bar",
            div {
                class: "category-pills",
                role: "radiogroup",
                "aria-label": "Category filter",
                for (filter, count) in props.filters.iter().copied() {
                    {
                        let is_selected = filter == active;
                        let on_select = props.on_select;
                        rsx! {
                            button {
                                key: "{filter}",
                                class: if is_selected { "pill selected" } else { "pill" },
                                role: "radio",
                                "aria-checked": if is_selected { "true" } else { "false" },
                                onclick: move |_| on_select.call(filter),
                                "{filter.label()}"
                                span { class: "pill__count", "{count}" }
                            }
                        }
                    }
                }
            }

            select {
                class: "sort-select",
                "aria-label": "Sort order",
                value: "{props.sort.as_str()}",
                onchange: move |evt| on_sort.call(SortMode::parse(&evt.value())),
                for mode in SortMode::ALL {
                    option {
                        value: "{mode.as_str()}",
                        selected: mode == props.sort,
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
