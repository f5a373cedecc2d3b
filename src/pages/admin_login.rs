//! Admin login page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_admin_session, use_services, AdminSession};

#[component]
pub fn AdminLogin() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let mut session = use_admin_session();

    let mut password = use_signal(String::new);
    let mut checking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in
    use_effect(move || {
        if session().0 {
            navigator.replace(Route::AdminDashboard {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if checking() {
            return;
        }
        checking.set(true);
        error.set(None);

        spawn(async move {
            let input = password.peek().clone();
            let shared = services();
            let mut guard = shared.write().await;
            let outcome = match guard.as_mut() {
                Some(svc) => svc.auth.login(&input).await,
                None => Ok(false),
            };
            drop(guard);

            match outcome {
                Ok(true) => {
                    session.set(AdminSession(true));
                    navigator.replace(Route::AdminDashboard {});
                }
                Ok(false) => {
                    error.set(Some("Incorrect password".to_string()));
                    password.set(String::new());
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                    password.set(String::new());
                }
            }
            checking.set(false);
        });
    };

    rsx! {
        main { class: "login-page",
            form { class: "login-card", onsubmit: submit,
                h1 { class: "page-title", "Admin" }
                p { class: "body-text", "Enter the admin password to manage the portfolio." }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    autofocus: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(err) = error() {
                    p { class: "form-error", role: "alert", "{err}" }
                }

                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: checking() || password().is_empty(),
                    if checking() { "Checking..." } else { "Sign in" }
                }

                Link { class: "btn-link", to: Route::Gallery {}, "← Back to gallery" }
            }
        }
    }
}
