use crate::components::{route_icon, route_label, Icon, Route};
use crate::input::{press_point, HostKey, InputBus};
use dioxus::prelude::*;

/// Layout for every catalog page: navigation on the left, the routed page
/// on the right.
///
/// The shell also owns the in-process [`InputBus`]. Mouse-down and key-down
/// events reach this root after bubbling through the page, so dialogs off
/// the web renderer observe them from here.
#[component]
pub fn CatalogShell() -> Element {
    let bus = use_context_provider(InputBus::new);
    let pointer_bus = bus.clone();
    let key_bus = bus.clone();

    rsx! {
        div {
            class: "catalog-root flex h-screen bg-slate-100 text-neutrals-dark-500",
            tabindex: "0",
            onmousedown: move |evt: MouseEvent| {
                pointer_bus.dispatch_pointer_down(press_point(&evt));
            },
            onkeydown: move |evt: KeyboardEvent| {
                key_bus.dispatch_key_down(&HostKey::from_key_name(&evt.key().to_string()));
            },
            Sidebar {}
            main { class: "flex-1 overflow-y-auto p-8", Outlet::<Route> {} }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let current = use_route::<Route>();
    let navigator = use_navigator();
    let entries: Vec<Route> = std::iter::once(Route::Home {})
        .chain(Route::catalog())
        .collect();

    rsx! {
        aside { class: "w-64 bg-white border-r border-slate-200 flex flex-col h-full",
            div { class: "p-6 border-b border-slate-200",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-xl bg-primary-main flex items-center justify-center text-white font-bold text-lg",
                        "C"
                    }
                    div {
                        h1 { class: "text-lg font-bold", "UI Catalog" }
                        p { class: "text-xs text-neutrals-dark-200", "Component test routes" }
                    }
                }
            }
            nav { class: "flex-1 overflow-y-auto p-4 space-y-1",
                for route in entries {
                    NavItem {
                        key: "{route}",
                        icon: route_icon(&route).to_string(),
                        label: route_label(&route).to_string(),
                        active: route == current,
                        onclick: {
                            let route = route.clone();
                            move |_| {
                                navigator.push(route.clone());
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "flex items-center gap-3 px-3 py-2.5 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer";
    let active_class = if active {
        "bg-primary-main/15 text-primary-main shadow-sm"
    } else {
        "text-neutrals-dark-200 hover:text-neutrals-dark-500 hover:bg-slate-100"
    };

    rsx! {
        button {
            class: "{base_class} {active_class} w-full",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { "{label}" }
        }
    }
}
