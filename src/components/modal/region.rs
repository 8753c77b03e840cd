// The dialog body as a pointer-down containment test for each input host.

use crate::input::PlatformHost;
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::input::{HitPath, InputBus, PressPoint, RegionId};

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

/// Resolves the input host for this renderer. Off the web the shell
/// provides a shared [`InputBus`]; a dialog rendered without one gets a
/// private bus that never delivers events.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_platform_host() -> PlatformHost {
    use_hook(|| try_consume_context::<InputBus>().unwrap_or_default())
}

#[cfg(target_arch = "wasm32")]
pub fn use_platform_host() -> PlatformHost {
    use_hook(PlatformHost::default)
}

/// Header, content and actions of one dialog: everything a pointer-down may
/// land on without counting as "outside".
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, PartialEq)]
pub struct BodyRegion {
    bus: InputBus,
    id: RegionId,
}

#[cfg(not(target_arch = "wasm32"))]
impl BodyRegion {
    pub fn new(bus: &InputBus) -> Self {
        Self {
            bus: bus.clone(),
            id: RegionId::next(),
        }
    }

    pub fn containment(&self) -> impl Fn(&HitPath) -> bool + 'static {
        let id = self.id;
        move |path: &HitPath| path.passes_through(id)
    }

    /// Called from the body's own mouse-down handler while the event is
    /// still bubbling towards the shell.
    pub fn record_pointer_down(&self, point: PressPoint) {
        self.bus.mark_region(self.id, point);
    }

    pub fn record_mounted(&self, _evt: MountedEvent) {}
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct BodyRegion {
    element: Rc<RefCell<Option<web_sys::Element>>>,
}

#[cfg(target_arch = "wasm32")]
impl BodyRegion {
    pub fn new(_host: &PlatformHost) -> Self {
        Self::default()
    }

    pub fn containment(&self) -> impl Fn(&web_sys::Node) -> bool + 'static {
        let element = self.element.clone();
        move |node: &web_sys::Node| {
            element
                .borrow()
                .as_ref()
                .is_some_and(|body| body.contains(Some(node)))
        }
    }

    // Document listeners see the real target node, nothing to record.
    pub fn record_pointer_down(&self, _point: crate::input::PressPoint) {}

    pub fn record_mounted(&self, evt: MountedEvent) {
        if let Some(element) = evt.data().downcast::<web_sys::Element>() {
            *self.element.borrow_mut() = Some(element.clone());
        }
    }
}
