//! Image Picker Component
//!
//! Native file dialog for choosing a project image. The file is validated
//! as PNG, JPEG or WebP and handed back with nothing uploaded yet.

use dioxus::prelude::*;
use portfolio_core::ImageUpload;
use rfd::FileDialog;

/// Button that opens the native file picker.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImagePicker {
///         on_pick: move |upload: ImageUpload| {
///             preview.set(Some(upload.data_uri()));
///             image.set(Some(upload));
///         },
///     }
/// }
/// ```
#[component]
pub fn ImagePicker(
    on_pick: EventHandler<ImageUpload>,
    #[props(default = "Choose image".to_string())] label: String,
) -> Element {
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Blocking dialog off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Image")
                    .pick_file()
                    .map(|path| ImageUpload::from_path(&path))
            })
            .await;

            match picked {
                Ok(Some(Ok(upload))) => on_pick.call(upload),
                Ok(Some(Err(e))) => error.set(Some(e.to_string())),
                Ok(None) => {}
                Err(e) => error.set(Some(format!("File picker error: {}", e))),
            }
            picking.set(false);
        });
    };

    rsx! {
        div { class: "image-upload",
            button {
                class: "image-upload-btn",
                r#type: "button",
                onclick: handle_pick,
                disabled: picking(),
                if picking() { "Opening..." } else { "{label}" }
            }

            if let Some(err) = error() {
                div { class: "image-upload__error", "⚠️ {err}" }
            }
        }
    }
}
