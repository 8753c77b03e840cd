use crate::components::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "space-y-4",
            h1 { class: "text-3xl font-bold", "Not found" }
            p { class: "text-neutrals-dark-200", "No test route is registered at /{path}." }
            Link { to: Route::Home {}, class: "text-primary-main underline", "Back to the catalog" }
        }
    }
}
