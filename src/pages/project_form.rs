//! Create and edit forms for a single project.

use dioxus::prelude::*;
use portfolio_core::types::NewProject as ProjectInput;
use portfolio_core::{Catalogue, Category, GalleryItem, ImageUpload, ProjectId, ProjectPatch};

use crate::app::Route;
use crate::components::ImagePicker;
use crate::context::{use_admin_session, use_services, use_services_ready};

#[component]
pub fn NewProject() -> Element {
    rsx! {
        ProjectForm { id: None }
    }
}

#[component]
pub fn EditProject(id: String) -> Element {
    rsx! {
        ProjectForm { id: Some(id) }
    }
}

enum Save {
    Create(ProjectInput),
    Update(ProjectId, ProjectPatch),
}

/// Fields as typed, before validation.
#[derive(Debug, Clone, PartialEq)]
struct FormFields {
    title: String,
    category: Category,
    description: String,
    published: bool,
    order: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Wedding,
            description: String::new(),
            published: true,
            order: String::new(),
        }
    }
}

impl FormFields {
    fn from_item(item: &GalleryItem) -> Self {
        Self {
            title: item.title.clone(),
            category: item.category,
            description: item.description.clone().unwrap_or_default(),
            published: item.published,
            order: item.order.map(|o| o.to_string()).unwrap_or_default(),
        }
    }

    fn parsed_order(&self) -> Result<Option<i64>, String> {
        let raw = self.order.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<i64>()
            .map(Some)
            .map_err(|_| format!("Order must be a whole number, got '{}'", raw))
    }

    /// Only the fields that differ from `original`.
    fn patch(&self, original: &FormFields, image: Option<ImageUpload>) -> Result<ProjectPatch, String> {
        let order = self.parsed_order()?;
        Ok(ProjectPatch {
            title: (self.title != original.title).then(|| self.title.clone()),
            category: (self.category != original.category).then_some(self.category),
            description: (self.description != original.description).then(|| self.description.clone()),
            image,
            published: (self.published != original.published).then_some(self.published),
            order: if order != original.parsed_order().ok().flatten() { order } else { None },
        })
    }
}

#[component]
fn ProjectForm(id: Option<String>) -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let services_ready = use_services_ready();
    let session = use_admin_session();

    let editing = id.clone().map(ProjectId::new);
    let is_edit = editing.is_some();

    let mut fields = use_signal(FormFields::default);
    let mut original = use_signal(FormFields::default);
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut preview = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| is_edit);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if !session().0 {
            navigator.replace(Route::AdminLogin {});
        }
    });

    // Prefill when editing
    let load_id = editing.clone();
    use_effect(move || {
        if !services_ready() {
            return;
        }
        let Some(project) = load_id.clone() else {
            return;
        };
        spawn(async move {
            let shared = services();
            let guard = shared.read().await;
            if let Some(ref svc) = *guard {
                match svc.admin.get(&project).await {
                    Ok(item) => {
                        let loaded = FormFields::from_item(&item);
                        original.set(loaded.clone());
                        fields.set(loaded);
                        preview.set(Some(item.renditions.thumbnail.clone()));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            loading.set(false);
        });
    });

    let save_id = editing.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let current = fields.peek().clone();
        if current.title.trim().is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        let upload = image.peek().clone();
        if save_id.is_none() && upload.is_none() {
            error.set(Some("Choose an image for the new project".to_string()));
            return;
        }

        // Validate up front so nothing below holds a signal borrow across an await
        let plan = match (save_id.clone(), upload) {
            (None, Some(upload)) => Save::Create(ProjectInput {
                title: current.title.clone(),
                category: current.category,
                description: Some(current.description.clone()).filter(|d| !d.trim().is_empty()),
                image: upload,
            }),
            (Some(project), upload) => match current.patch(&original.peek(), upload) {
                Ok(patch) => Save::Update(project, patch),
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            },
            (None, None) => return,
        };

        saving.set(true);
        error.set(None);
        spawn(async move {
            let shared = services();
            let guard = shared.read().await;
            let Some(ref svc) = *guard else {
                saving.set(false);
                return;
            };

            // Create and update reload into this scratch list; the dashboard
            // fetches its own on return.
            let mut scratch = Catalogue::new();
            let result = match plan {
                Save::Create(input) => svc.admin.create(&mut scratch, input).await.map(|_| ()),
                Save::Update(project, patch) => svc.admin.update(&mut scratch, &project, patch).await,
            };

            match result {
                Ok(()) => {
                    svc.save();
                    drop(guard);
                    saving.set(false);
                    navigator.replace(Route::AdminDashboard {});
                }
                Err(e) => {
                    tracing::error!("Saving project failed: {}", e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    };

    let current = fields();
    let heading = if is_edit { "Edit project" } else { "New project" };

    rsx! {
        main { class: "admin-page",
            header { class: "admin-header",
                h1 { class: "page-title", "{heading}" }
                Link { class: "btn-link", to: Route::AdminDashboard {}, "← Back to catalogue" }
            }

            if loading() {
                p { class: "loading-message", "Loading..." }
            } else {
                form { class: "project-form", onsubmit: submit,
                    label { class: "field",
                        span { class: "field__label", "Title" }
                        input {
                            class: "input",
                            value: "{current.title}",
                            required: true,
                            oninput: move |evt| fields.write().title = evt.value(),
                        }
                    }

                    label { class: "field",
                        span { class: "field__label", "Category" }
                        select {
                            class: "input",
                            onchange: move |evt| fields.write().category = Category::parse(&evt.value()),
                            for category in Category::ASSIGNABLE {
                                option {
                                    value: "{category.as_str()}",
                                    selected: category == current.category,
                                    "{category.label()}"
                                }
                            }
                        }
                    }

                    label { class: "field",
                        span { class: "field__label", "Description" }
                        textarea {
                            class: "input",
                            rows: "4",
                            value: "{current.description}",
                            oninput: move |evt| fields.write().description = evt.value(),
                        }
                    }

                    if is_edit {
                        label { class: "toggle",
                            input {
                                r#type: "checkbox",
                                checked: current.published,
                                onchange: move |evt| fields.write().published = evt.checked(),
                            }
                            "Published"
                        }
                        label { class: "field",
                            span { class: "field__label", "Order" }
                            input {
                                class: "input",
                                inputmode: "numeric",
                                placeholder: "Unset",
                                value: "{current.order}",
                                oninput: move |evt| fields.write().order = evt.value(),
                            }
                        }
                    }

                    div { class: "field",
                        span { class: "field__label", "Image" }
                        if let Some(src) = preview() {
                            img { class: "project-form__preview", src: "{src}", alt: "Preview" }
                        }
                        ImagePicker {
                            label: if is_edit { "Replace image".to_string() } else { "Choose image".to_string() },
                            on_pick: move |upload: ImageUpload| {
                                preview.set(Some(upload.data_uri()));
                                image.set(Some(upload));
                            },
                        }
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", role: "alert", "⚠️ {err}" }
                    }

                    div { class: "project-form__actions",
                        button {
                            class: "btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                navigator.push(Route::AdminDashboard {});
                            },
                            "Cancel"
                        }
                        button {
                            class: "btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else if is_edit { "Save changes" } else { "Create project" }
                        }
                    }
                }
            }
        }
    }
}
