use crate::components::{route_icon, route_label, Icon, Route};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-3xl font-bold", "Home" }
            p { class: "text-neutrals-dark-200", "Pick a component to test it in isolation." }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                for route in Route::catalog() {
                    Link {
                        key: "{route}",
                        to: route.clone(),
                        class: "flex items-center gap-3 p-5 rounded-xl bg-white border border-slate-200 hover:border-primary-main transition-colors",
                        Icon { name: route_icon(&route).to_string(), class: "w-6 h-6 text-primary-main".to_string() }
                        span { class: "font-medium", {route_label(&route)} }
                        span { class: "ml-auto text-xs text-neutrals-dark-200", "{route}" }
                    }
                }
            }
        }
    }
}
