//! Overlay dialog: a controlled modal that reports outside clicks, the escape
//! key and its close button through a single `on_close` callback.

mod controller;
mod policy;
mod region;
mod style;

pub use controller::{CloseCallback, DialogController, DialogPhase};
pub use policy::{DialogSize, DismissPolicy};

use crate::components::Icon;
use crate::input::{press_point, PlatformHost};
use dioxus::prelude::*;
use region::{use_platform_host, BodyRegion};
use std::cell::RefCell;
use std::rc::Rc;

type SharedController = Rc<RefCell<DialogController<PlatformHost>>>;

#[cfg(not(target_arch = "wasm32"))]
fn close_callback(on_close: EventHandler<()>) -> CloseCallback {
    Rc::new(move || on_close.call(()))
}

#[cfg(target_arch = "wasm32")]
fn close_callback(on_close: EventHandler<()>) -> CloseCallback {
    use dioxus::core::{Runtime, RuntimeGuard};

    // Document listeners fire outside the Dioxus runtime.
    let runtime = Runtime::current();
    Rc::new(move || {
        let _guard = RuntimeGuard::new(runtime.clone());
        on_close.call(());
    })
}

/// A modal dialog whose visibility is owned by the caller.
///
/// The dialog never hides itself. Every dismissal gesture ends up as one
/// `on_close` call and the caller decides whether to flip `is_open`.
/// Dismissal listeners are attached only while `is_open` is true and are
/// released when it turns false or the component unmounts.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] size: DialogSize,
    /// Name of an [`Icon`] shown before the title.
    icon: Option<String>,
    #[props(default = true)] closeable: bool,
    #[props(default)] hide_close_button: bool,
    #[props(default)] disable_close_on_escape: bool,
    #[props(default)] disable_close_on_click_outside: bool,
    content: Option<Element>,
    actions: Option<Element>,
) -> Element {
    let policy = DismissPolicy {
        closeable,
        hide_close_button,
        disable_close_on_escape,
        disable_close_on_click_outside,
    };

    let host = use_platform_host();
    let region = use_hook(|| BodyRegion::new(&host));
    let controller: SharedController = use_hook(|| {
        Rc::new(RefCell::new(DialogController::new(
            host.clone(),
            region.containment(),
            policy,
            close_callback(on_close),
        )))
    });
    use_drop({
        let controller = controller.clone();
        move || controller.borrow_mut().teardown()
    });

    // Listeners always see the props of the latest render.
    controller
        .borrow()
        .configure(policy, close_callback(on_close));
    controller.borrow_mut().sync(is_open);

    let open = controller.borrow().phase() == DialogPhase::Open;
    let backdrop = style::backdrop_class(open);
    let body = style::body_class(size, open);
    let region_for_mount = region.clone();
    let region_for_press = region.clone();
    let close_button = controller.clone();

    rsx! {
        div { class: "{backdrop}",
            div {
                class: "{body}",
                role: "dialog",
                aria_modal: "true",
                onmounted: move |evt| region_for_mount.record_mounted(evt),
                onmousedown: move |evt: MouseEvent| {
                    region_for_press.record_pointer_down(press_point(&evt))
                },
                div { class: style::HEADER,
                    div { class: style::HEADER_TITLE,
                        if let Some(icon) = icon {
                            i { class: style::HEADER_TITLE_ICON,
                                Icon { name: icon, class: "w-8 h-8".to_string() }
                            }
                        }
                        h3 { "{title}" }
                    }
                    if policy.shows_close_button() {
                        button {
                            class: style::CLOSE_BUTTON,
                            r#type: "button",
                            aria_label: "Close dialog",
                            onclick: move |_| {
                                close_button.borrow().activate_close_button();
                            },
                            Icon { name: "x".to_string(), class: "w-8 h-8".to_string() }
                        }
                    }
                }
                div { class: style::FORM,
                    {content}
                    {actions}
                }
            }
        }
    }
}
