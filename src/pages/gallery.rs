//! Public gallery page.
//!
//! Loads published projects once, then filters, sorts and pages them
//! locally. Resizing the window changes the page size and column count.

use dioxus::prelude::*;
use portfolio_core::gallery::{visible_categories, ExpandEffect};
use portfolio_core::{
    columns_for_width, CategoryFilter, GalleryItem, GalleryView, LoadState, SortMode, ViewerState,
};

use crate::app::Route;
use crate::components::{FilterBar, Lightbox, MasonryGrid, SkeletonGrid};
use crate::context::{use_services, use_services_ready};

/// Below this width overlays are always shown, as on touch screens.
const NARROW_WIDTH: u32 = 768;

#[component]
pub fn Gallery() -> Element {
    let services = use_services();
    let services_ready = use_services_ready();

    let mut load_state = use_signal(LoadState::default);
    let mut view = use_signal(GalleryView::new);
    let mut viewer = use_signal(|| ViewerState::new(0));
    // Bumped by the retry button
    let mut attempt = use_signal(|| 0u32);

    use_effect(move || {
        let _ = attempt();
        if !services_ready() {
            return;
        }
        spawn(async move {
            load_state.set(LoadState::Loading);
            let shared = services();
            let guard = shared.read().await;
            if let Some(ref svc) = *guard {
                let result = svc.gallery_loader().load().await;
                load_state.set(LoadState::from_result(result));
            }
        });
    });

    let state = load_state();
    let current = view();
    let width = current.viewport_width();
    let columns = columns_for_width(width);

    let source: Vec<GalleryItem> = state.items().to_vec();
    let filtered: Vec<GalleryItem> = current.arranged(&source).into_iter().cloned().collect();
    let visible: Vec<GalleryItem> = current.visible(&source).into_iter().cloned().collect();
    let show_more = current.show_more_label(&source);

    // Keep the viewer in step with the filtered list
    use_effect(use_reactive!(|(filtered,)| {
        viewer.write().set_len(filtered.len());
    }));

    let on_resize = move |evt: ResizeEvent| {
        if let Ok(size) = evt.get_border_box_size() {
            let px = size.width.max(0.0).round() as u32;
            if px != view.peek().viewport_width() {
                view.write().set_viewport_width(px);
            }
        }
    };

    let toggle_more = move |_| {
        if view.write().toggle_expanded() == ExpandEffect::ScrollToTop {
            let _ = document::eval(
                "document.getElementById('gallery-top')?.scrollIntoView({behavior: 'smooth'})",
            );
        }
    };

    rsx! {
        main { class: "gallery-page", onresize: on_resize,
            header { class: "site-header", id: "gallery-top",
                h1 { class: "page-title", "Portfolio" }
                p { class: "tagline", "Weddings, portraits and commercial work" }
                Link { class: "btn-link site-header__admin", to: Route::AdminLogin {}, "Admin" }
            }

            match state {
                LoadState::Loading => rsx! {
                    SkeletonGrid { columns }
                },
                LoadState::Failed(message) => rsx! {
                    div { class: "state-panel state-panel--error",
                        p { "Could not load the gallery: {message}" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| attempt += 1,
                            "Retry"
                        }
                    }
                },
                LoadState::Empty => rsx! {
                    div { class: "state-panel",
                        p { "No projects yet. Check back soon." }
                    }
                },
                LoadState::Ready(_) => rsx! {
                    FilterBar {
                        filters: visible_categories(&source),
                        active: current.active(),
                        sort: current.sort(),
                        on_select: move |filter: CategoryFilter| view.write().set_category(filter),
                        on_sort: move |mode: SortMode| view.write().set_sort(mode),
                    }

                    if visible.is_empty() {
                        div { class: "state-panel",
                            p { "Nothing in {current.active().label()} yet." }
                            button {
                                class: "btn-secondary",
                                onclick: move |_| view.write().reset_category(),
                                "Show all projects"
                            }
                        }
                    } else {
                        MasonryGrid {
                            items: visible.clone(),
                            columns,
                            always_show_overlay: width < NARROW_WIDTH,
                            on_open: move |index: usize| viewer.write().open_at(index),
                        }
                    }

                    if let Some(label) = show_more {
                        div { class: "show-more",
                            button { class: "btn-secondary", onclick: toggle_more, "{label}" }
                        }
                    }

                    Lightbox { items: filtered.clone(), viewer }
                },
            }
        }
    }
}
