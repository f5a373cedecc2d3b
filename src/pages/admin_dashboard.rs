//! Admin dashboard: the catalogue manager.
//!
//! Every write clones the catalogue, runs the admin operation on the clone
//! and absorbs the resulting items back, so no signal borrow is held across
//! an await.

use dioxus::prelude::*;
use portfolio_core::{ActivityEntry, Catalogue, PortfolioResult, ProjectId, RenditionSpec};

use crate::app::Route;
use crate::components::{ActivityPanel, AdminCard, DeleteModal};
use crate::context::{use_admin_session, use_services, use_services_ready, AdminSession, Services};

#[derive(Debug, Clone, PartialEq)]
enum AdminAction {
    Refresh,
    TogglePublished(ProjectId),
    ConfirmDelete,
    BulkDelete,
    BulkPublish(bool),
    Reorder { from: usize, to: usize },
}

impl AdminAction {
    fn writes(&self) -> bool {
        !matches!(self, AdminAction::Refresh)
    }
}

async fn perform(svc: &Services, catalogue: &mut Catalogue, action: AdminAction) -> PortfolioResult<()> {
    let admin = &svc.admin;
    match action {
        AdminAction::Refresh => admin.load(catalogue).await,
        AdminAction::TogglePublished(id) => admin.toggle_published(catalogue, &id).await.map(|_| ()),
        AdminAction::ConfirmDelete => admin.delete_confirmed(catalogue).await.map(|_| ()),
        AdminAction::BulkDelete => admin.bulk_delete(catalogue).await.map(|_| ()),
        AdminAction::BulkPublish(published) => admin
            .bulk_set_published(catalogue, published)
            .await
            .map(|_| ()),
        AdminAction::Reorder { from, to } => admin.apply_reorder(catalogue, from, to).await,
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let services_ready = use_services_ready();
    let mut session = use_admin_session();

    let mut catalogue = use_signal(Catalogue::new);
    let mut activity = use_signal(Vec::<ActivityEntry>::new);
    let mut writes_enabled = use_signal(|| Option::<bool>::None);
    let mut card_urls = use_signal(|| Option::<portfolio_core::ImageUrlBuilder>::None);
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut confirm_bulk = use_signal(|| false);
    let mut dragging = use_signal(|| Option::<usize>::None);
    let mut drop_target = use_signal(|| Option::<usize>::None);

    use_effect(move || {
        if !session().0 {
            navigator.replace(Route::AdminLogin {});
        }
    });

    let run = move |action: AdminAction| {
        spawn(async move {
            busy.set(true);
            notice.set(None);
            let shared = services();
            let guard = shared.read().await;
            if let Some(ref svc) = *guard {
                let writes = action.writes();
                let quiet = action == AdminAction::ConfirmDelete;
                let mut working = catalogue.peek().clone();
                let result = perform(svc, &mut working, action).await;
                if writes && result.is_ok() {
                    svc.save();
                }
                // Search and draft toggle may have changed while awaiting
                catalogue.write().absorb(working);
                activity.set(svc.admin.activity());
                if let Err(e) = result {
                    if !quiet {
                        notice.set(Some(e.to_string()));
                    }
                }
            }
            busy.set(false);
        });
    };

    // Initial load once services are up
    use_effect(move || {
        if !services_ready() {
            return;
        }
        spawn(async move {
            let shared = services();
            let guard = shared.read().await;
            if let Some(ref svc) = *guard {
                writes_enabled.set(Some(svc.writes_enabled()));
                card_urls.set(Some(svc.admin.urls().clone()));
                activity.set(svc.admin.activity());
            }
            drop(guard);
            run(AdminAction::Refresh);
        });
    });

    let logout = move |_| {
        spawn(async move {
            let shared = services();
            let mut guard = shared.write().await;
            if let Some(svc) = guard.as_mut() {
                if let Err(e) = svc.auth.logout() {
                    tracing::warn!("Logout failed: {}", e);
                }
            }
            drop(guard);
            session.set(AdminSession(false));
            navigator.replace(Route::Gallery {});
        });
    };

    let clear_activity = move |_| {
        spawn(async move {
            let shared = services();
            let guard = shared.read().await;
            if let Some(ref svc) = *guard {
                if let Err(e) = svc.admin.clear_activity() {
                    notice.set(Some(e.to_string()));
                }
                activity.set(svc.admin.activity());
            }
        });
    };

    let header = rsx! {
        header { class: "admin-header",
            h1 { class: "page-title", "Catalogue" }
            div { class: "admin-header__actions",
                Link { class: "btn-link", to: Route::Gallery {}, "View site" }
                button { class: "btn-secondary", onclick: logout, "Log out" }
            }
        }
    };

    match writes_enabled() {
        None => {
            return rsx! {
                main { class: "admin-page",
                    {header}
                    p { class: "loading-message", "Loading..." }
                }
            };
        }
        Some(false) => {
            return rsx! {
                main { class: "admin-page",
                    {header}
                    div { class: "state-panel state-panel--notice",
                        h2 { "Admin not configured" }
                        p {
                            "Set PORTFOLIO_WRITE_TOKEN to a token with write access to the content store, then restart."
                        }
                    }
                }
            };
        }
        Some(true) => {}
    }

    let cat = catalogue();
    let visible: Vec<_> = cat.visible().into_iter().cloned().collect();
    let positions: Vec<ProjectId> = cat.reorderable().into_iter().map(|item| item.id).collect();
    let selected_count = cat.selection.len();
    let all_selected = !visible.is_empty() && visible.iter().all(|i| cat.selection.contains(&i.id));
    let pending = cat
        .confirm
        .pending()
        .map(|id| (cat.title_of(id), cat.confirm.error().map(str::to_string)));
    let urls = card_urls();

    rsx! {
        main { class: "admin-page",
            {header}

            div { class: "admin-layout",
                section { class: "admin-main",
                    div { class: "admin-toolbar",
                        p { class: "admin-toolbar__count",
                            "{cat.len()} projects · {cat.draft_count()} drafts"
                        }
                        input {
                            class: "input admin-toolbar__search",
                            r#type: "search",
                            placeholder: "Search title, category, description",
                            value: "{cat.search()}",
                            oninput: move |evt| catalogue.write().set_search(evt.value()),
                        }
                        label { class: "toggle",
                            input {
                                r#type: "checkbox",
                                checked: cat.show_drafts(),
                                onchange: move |evt| catalogue.write().set_show_drafts(evt.checked()),
                            }
                            "Show drafts"
                        }
                        button {
                            class: "btn-secondary",
                            disabled: busy(),
                            onclick: move |_| run(AdminAction::Refresh),
                            "Refresh"
                        }
                        button {
                            class: "btn-primary",
                            onclick: move |_| {
                                navigator.push(Route::NewProject {});
                            },
                            "New project"
                        }
                    }

                    div { class: "admin-bulk",
                        label { class: "toggle",
                            input {
                                r#type: "checkbox",
                                checked: all_selected,
                                onchange: move |_| catalogue.write().toggle_select_all(),
                            }
                            "Select all"
                        }
                        if selected_count > 0 {
                            span { class: "admin-bulk__count", "{selected_count} selected" }
                            button {
                                class: "btn-small",
                                disabled: busy(),
                                onclick: move |_| run(AdminAction::BulkPublish(true)),
                                "Publish"
                            }
                            button {
                                class: "btn-small",
                                disabled: busy(),
                                onclick: move |_| run(AdminAction::BulkPublish(false)),
                                "Unpublish"
                            }
                            if confirm_bulk() {
                                button {
                                    class: "btn-small btn-small--danger",
                                    disabled: busy(),
                                    onclick: move |_| {
                                        confirm_bulk.set(false);
                                        run(AdminAction::BulkDelete);
                                    },
                                    "Confirm delete {selected_count}"
                                }
                                button {
                                    class: "btn-small",
                                    onclick: move |_| confirm_bulk.set(false),
                                    "Cancel"
                                }
                            } else {
                                button {
                                    class: "btn-small btn-small--danger",
                                    disabled: busy(),
                                    onclick: move |_| confirm_bulk.set(true),
                                    "Delete"
                                }
                            }
                        }
                    }

                    if let Some(message) = notice() {
                        div { class: "alert", role: "alert",
                            span { "⚠️ {message}" }
                            button { class: "btn-link", onclick: move |_| notice.set(None), "Dismiss" }
                        }
                    }

                    if visible.is_empty() {
                        p { class: "empty-message",
                            if cat.is_empty() { "No projects yet." } else { "No projects match." }
                        }
                    } else {
                        div { class: "admin-grid",
                            for item in visible {
                                {
                                    let id = item.id.clone();
                                    let position = positions.iter().position(|p| *p == item.id);
                                    let thumbnail = urls
                                        .as_ref()
                                        .and_then(|u| u.url(&item.image, &RenditionSpec::ADMIN_CARD).ok())
                                        .unwrap_or_else(|| item.renditions.thumbnail.clone());
                                    let select_id = id.clone();
                                    let toggle_id = id.clone();
                                    let edit_id = id.clone();
                                    let delete_id = id.clone();
                                    rsx! {
                                        AdminCard {
                                            key: "{id}",
                                            selected: cat.selection.contains(&id),
                                            thumbnail,
                                            position,
                                            drop_target: position.is_some() && drop_target() == position,
                                            item,
                                            on_select: move |_| catalogue.write().selection.toggle(&select_id),
                                            on_toggle_published: move |_| run(AdminAction::TogglePublished(toggle_id.clone())),
                                            on_edit: move |_| {
                                                navigator.push(Route::EditProject { id: edit_id.to_string() });
                                            },
                                            on_delete: move |_| catalogue.write().confirm.request(delete_id.clone()),
                                            on_drag_start: move |from: usize| dragging.set(Some(from)),
                                            on_drag_over: move |over: usize| {
                                                if drop_target() != Some(over) {
                                                    drop_target.set(Some(over));
                                                }
                                            },
                                            on_drop: move |to: usize| {
                                                drop_target.set(None);
                                                if let Some(from) = dragging.take() {
                                                    if from != to && !busy() {
                                                        run(AdminAction::Reorder { from, to });
                                                    }
                                                }
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                ActivityPanel { entries: activity(), on_clear: clear_activity }
            }

            if let Some((title, error)) = pending {
                DeleteModal {
                    title,
                    error,
                    busy: busy(),
                    on_confirm: move |_| run(AdminAction::ConfirmDelete),
                    on_cancel: move |_| catalogue.write().confirm.cancel(),
                }
            }
        }
    }
}
