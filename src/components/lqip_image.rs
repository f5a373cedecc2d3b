//! Progressive image: blurred placeholder until the real image decodes.

use dioxus::prelude::*;

#[component]
pub fn LqipImage(
    src: String,
    alt: String,
    /// Tiny base64 preview from the store, if any
    #[props(default = None)]
    placeholder: Option<String>,
    #[props(default = "lqip__img".to_string())]
    class: String,
) -> Element {
    let mut loaded = use_signal(|| false);
    let mut failed = use_signal(|| false);

    rsx! {
        div { class: if loaded() { "lqip lqip--loaded" } else { "lqip" },
            if let Some(preview) = placeholder.filter(|_| !loaded()) {
                img {
                    class: "lqip__placeholder",
                    src: "{preview}",
                    alt: "",
                    "aria-hidden": "true",
                }
            }
            if failed() {
                div { class: "lqip__broken", "aria-label": "{alt}" }
            } else {
                img {
                    class: "{class}",
                    src: "{src}",
                    alt: "{alt}",
                    loading: "lazy",
                    onload: move |_| loaded.set(true),
                    onerror: move |_| failed.set(true),
                }
            }
        }
    }
}
