use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, is_offline, AdminSession, Services, SharedServices};
use crate::pages::{AdminDashboard, AdminLogin, EditProject, Gallery, NewProject};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Public gallery
/// - `/admin/login` - Password gate
/// - `/admin` - Catalogue dashboard
/// - `/admin/new` - Create a project
/// - `/admin/edit/:id` - Edit a project
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/new")]
    NewProject {},
    #[route("/admin/edit/:id")]
    EditProject { id: String },
}

/// Root application component.
///
/// Provides global styles, service context, and routing.
#[component]
pub fn App() -> Element {
    let services: Signal<SharedServices> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut services_ready: Signal<bool> = use_signal(|| false);
    let mut startup_error: Signal<Option<String>> = use_signal(|| None);
    let mut session: Signal<AdminSession> = use_signal(AdminSession::default);

    use_context_provider(|| services);
    use_context_provider(|| services_ready);
    use_context_provider(|| startup_error);
    use_context_provider(|| session);

    use_effect(move || {
        spawn(async move {
            match Services::open(get_data_dir(), is_offline()) {
                Ok(svc) => {
                    let authenticated = svc.auth.is_authenticated();
                    let shared = services();
                    let mut guard = shared.write().await;
                    *guard = Some(svc);
                    drop(guard);
                    session.set(AdminSession(authenticated));
                    services_ready.set(true);
                    tracing::info!("Services initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize services: {}", e);
                    startup_error.set(Some(e.to_string()));
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(err) = startup_error() {
            main { class: "startup-error",
                h1 { "Portfolio could not start" }
                p { "{err}" }
            }
        } else {
            Router::<Route> {}
        }
    }
}
