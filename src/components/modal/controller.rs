// Listener lifecycle and dismissal detection for an overlay dialog.

use super::policy::DismissPolicy;
use crate::input::{HostKey, InputHost, KeyHandler, PointerHandler, Subscription};
use dioxus::logger::tracing::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

pub type CloseCallback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Open,
}

// What the listeners consult on every event. Refreshed by `configure`.
struct Current {
    policy: DismissPolicy,
    on_close: CloseCallback,
}

fn request_close(current: &RefCell<Current>, channel: &str) {
    // Clone out first: the callback may reconfigure the dialog.
    let on_close = current.borrow().on_close.clone();
    info!("dialog dismissal requested via {channel}");
    on_close();
}

struct ArmedListeners<S: Subscription> {
    pointer: Option<S>,
    key: Option<S>,
}

impl<S: Subscription> ArmedListeners<S> {
    fn disarm(self) {
        if let Some(pointer) = self.pointer {
            pointer.cancel();
        }
        if let Some(key) = self.key {
            key.cancel();
        }
    }
}

/// Drives the dismissal side of a controlled dialog.
///
/// The caller owns the open flag and reports it through [`sync`]; the
/// controller only ever asks for a close through the callback. While open it
/// holds exactly one pointer-down and one key-down listener on the host.
///
/// [`sync`]: DialogController::sync
pub struct DialogController<H: InputHost> {
    host: H,
    contains: Rc<dyn Fn(&H::Target) -> bool>,
    current: Rc<RefCell<Current>>,
    armed: Option<ArmedListeners<H::Subscription>>,
}

impl<H: InputHost> DialogController<H> {
    /// `contains` decides whether a pointer-down target lies inside the
    /// dialog body (header, content and actions included).
    pub fn new(
        host: H,
        contains: impl Fn(&H::Target) -> bool + 'static,
        policy: DismissPolicy,
        on_close: CloseCallback,
    ) -> Self {
        Self {
            host,
            contains: Rc::new(contains),
            current: Rc::new(RefCell::new(Current { policy, on_close })),
            armed: None,
        }
    }

    /// Replaces the policy and callback seen by the listeners, including
    /// listeners that are already attached.
    pub fn configure(&self, policy: DismissPolicy, on_close: CloseCallback) {
        let mut current = self.current.borrow_mut();
        current.policy = policy;
        current.on_close = on_close;
    }

    pub fn policy(&self) -> DismissPolicy {
        self.current.borrow().policy
    }

    pub fn phase(&self) -> DialogPhase {
        if self.armed.is_some() {
            DialogPhase::Open
        } else {
            DialogPhase::Closed
        }
    }

    /// Follows the caller's open flag. Repeated calls with the same value
    /// do nothing.
    pub fn sync(&mut self, is_open: bool) {
        match (is_open, self.armed.is_some()) {
            (true, false) => {
                self.armed = Some(self.arm());
                debug!("dialog opened, dismissal listeners armed");
            }
            (false, true) => self.teardown(),
            _ => {}
        }
    }

    /// Releases any attached listeners. Safe to call in any phase.
    pub fn teardown(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.disarm();
            debug!("dialog closed, dismissal listeners released");
        }
    }

    /// The close button bypasses the per-channel flags but still requires
    /// the button to be shown at all.
    pub fn activate_close_button(&self) -> bool {
        if !self.policy().shows_close_button() {
            return false;
        }
        request_close(&self.current, "close button");
        true
    }

    fn arm(&self) -> ArmedListeners<H::Subscription> {
        let on_pointer: PointerHandler<H::Target> = {
            let current = self.current.clone();
            let contains = self.contains.clone();
            Rc::new(move |target: &H::Target| {
                let policy = current.borrow().policy;
                if policy.dismisses_on_pointer_down(contains(target)) {
                    request_close(&current, "outside click");
                }
            })
        };
        let on_key: KeyHandler = {
            let current = self.current.clone();
            Rc::new(move |key: &HostKey| {
                let policy = current.borrow().policy;
                if policy.dismisses_on_key(key) {
                    request_close(&current, "escape key");
                }
            })
        };

        let pointer = self
            .host
            .on_pointer_down(on_pointer)
            .map_err(|err| warn!("outside-click dismissal unavailable: {err}"))
            .ok();
        let key = self
            .host
            .on_key_down(on_key)
            .map_err(|err| warn!("escape dismissal unavailable: {err}"))
            .ok();

        ArmedListeners { pointer, key }
    }
}

impl<H: InputHost> Drop for DialogController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{HitPath, HostInputError, InputBus, RegionId};
    use std::cell::Cell;

    struct Harness {
        bus: InputBus,
        body: RegionId,
        closes: Rc<Cell<usize>>,
        controller: DialogController<InputBus>,
    }

    fn counter_callback(closes: &Rc<Cell<usize>>) -> CloseCallback {
        let closes = closes.clone();
        Rc::new(move || closes.set(closes.get() + 1))
    }

    fn harness(policy: DismissPolicy) -> Harness {
        let bus = InputBus::new();
        let body = RegionId::next();
        let closes = Rc::new(Cell::new(0));
        let controller = DialogController::new(
            bus.clone(),
            move |path: &HitPath| path.passes_through(body),
            policy,
            counter_callback(&closes),
        );
        Harness {
            bus,
            body,
            closes,
            controller,
        }
    }

    impl Harness {
        fn click_outside(&self) {
            self.bus.dispatch_pointer_down_at(&HitPath::outside());
        }

        fn click_inside(&self) {
            self.bus.dispatch_pointer_down_at(&HitPath::new(vec![self.body]));
        }

        fn press(&self, key: &str) {
            self.bus.dispatch_key_down(&HostKey::from_key_name(key));
        }
    }

    #[test]
    fn test_closed_dialog_ignores_input() {
        for closeable in [true, false] {
            let h = harness(DismissPolicy {
                closeable,
                ..DismissPolicy::default()
            });
            h.click_outside();
            h.press("Escape");
            assert_eq!(h.closes.get(), 0);
            assert_eq!(h.bus.listener_count(), 0, "No listeners while closed");
            assert_eq!(h.controller.phase(), DialogPhase::Closed);
        }
    }

    #[test]
    fn test_outside_click_requests_close_once() {
        let mut h = harness(DismissPolicy::default());
        h.controller.sync(true);

        h.click_outside();

        assert_eq!(h.closes.get(), 1);
        assert_eq!(
            h.controller.phase(),
            DialogPhase::Open,
            "The dialog stays open until the caller reacts"
        );
    }

    #[test]
    fn test_inside_clicks_never_close() {
        let mut h = harness(DismissPolicy::default());
        h.controller.sync(true);
        let nested = RegionId::next();

        h.click_inside();
        h.bus
            .dispatch_pointer_down_at(&HitPath::new(vec![nested, h.body]));

        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn test_escape_requests_close_once() {
        let mut h = harness(DismissPolicy::default());
        h.controller.sync(true);

        for key in ["Enter", "q", "Tab"] {
            h.press(key);
        }
        assert_eq!(h.closes.get(), 0);

        h.press("Escape");
        assert_eq!(h.closes.get(), 1);
    }

    #[test]
    fn test_escape_disabled_outside_click_still_works() {
        let mut h = harness(DismissPolicy {
            disable_close_on_escape: true,
            ..DismissPolicy::default()
        });
        h.controller.sync(true);

        h.press("Escape");
        assert_eq!(h.closes.get(), 0);
        h.click_outside();
        assert_eq!(h.closes.get(), 1);
    }

    #[test]
    fn test_outside_click_disabled_escape_still_works() {
        let mut h = harness(DismissPolicy {
            disable_close_on_click_outside: true,
            ..DismissPolicy::default()
        });
        h.controller.sync(true);

        h.click_outside();
        assert_eq!(h.closes.get(), 0);
        h.press("Escape");
        assert_eq!(h.closes.get(), 1);
    }

    #[test]
    fn test_not_closeable_has_no_dismissal_path() {
        let mut h = harness(DismissPolicy {
            closeable: false,
            ..DismissPolicy::default()
        });
        h.controller.sync(true);

        h.click_outside();
        h.press("Escape");
        assert!(!h.controller.activate_close_button());
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn test_hidden_close_button_keeps_ambient_channels() {
        let mut h = harness(DismissPolicy {
            hide_close_button: true,
            ..DismissPolicy::default()
        });
        h.controller.sync(true);

        assert!(!h.controller.activate_close_button());
        h.click_outside();
        h.press("Escape");
        assert_eq!(h.closes.get(), 2);
    }

    #[test]
    fn test_close_button_ignores_channel_flags() {
        let h = harness(DismissPolicy {
            disable_close_on_escape: true,
            disable_close_on_click_outside: true,
            ..DismissPolicy::default()
        });

        assert!(h.controller.activate_close_button());
        assert_eq!(h.closes.get(), 1);
    }

    #[test]
    fn test_rapid_toggle_leaves_no_listeners() {
        let mut h = harness(DismissPolicy::default());
        for open in [true, false, true, false] {
            h.controller.sync(open);
            assert!(h.bus.listener_count() <= 2, "At most one listener pair");
        }

        assert_eq!(h.bus.listener_count(), 0);
        h.click_outside();
        h.press("Escape");
        assert_eq!(h.closes.get(), 0, "No callbacks after the final close");
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut h = harness(DismissPolicy::default());
        h.controller.sync(true);
        h.controller.sync(true);
        assert_eq!(h.bus.listener_count(), 2);

        h.click_outside();
        assert_eq!(h.closes.get(), 1, "A single gesture closes once");

        h.controller.sync(false);
        h.controller.sync(false);
        assert_eq!(h.bus.listener_count(), 0);
    }

    #[test]
    fn test_listeners_read_current_configuration() {
        let mut h = harness(DismissPolicy::default());
        h.controller.sync(true);

        h.controller.configure(
            DismissPolicy {
                closeable: false,
                ..DismissPolicy::default()
            },
            counter_callback(&h.closes),
        );
        h.click_outside();
        assert_eq!(h.closes.get(), 0, "Listener used a stale policy");

        let replacement = Rc::new(Cell::new(0));
        h.controller
            .configure(DismissPolicy::default(), counter_callback(&replacement));
        h.press("Escape");
        assert_eq!(h.closes.get(), 0, "Listener used a stale callback");
        assert_eq!(replacement.get(), 1);
    }

    #[test]
    fn test_drop_while_open_releases_listeners() {
        let mut h = harness(DismissPolicy::default());
        h.controller.sync(true);
        let bus = h.bus.clone();
        let closes = h.closes.clone();

        drop(h);

        assert_eq!(bus.listener_count(), 0);
        bus.dispatch_pointer_down_at(&HitPath::outside());
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn test_close_callback_may_reconfigure() {
        let bus = InputBus::new();
        let closes = Rc::new(Cell::new(0));
        let controller = Rc::new(RefCell::new(None::<DialogController<InputBus>>));
        let on_close: CloseCallback = {
            let closes = closes.clone();
            let controller = Rc::downgrade(&controller);
            Rc::new(move || {
                closes.set(closes.get() + 1);
                if let Some(controller) = controller.upgrade() {
                    if let Some(controller) = controller.borrow().as_ref() {
                        controller.configure(DismissPolicy::default(), Rc::new(|| {}));
                    }
                }
            })
        };
        let mut dialog =
            DialogController::new(bus.clone(), |_: &HitPath| false, DismissPolicy::default(), on_close);
        dialog.sync(true);
        *controller.borrow_mut() = Some(dialog);

        bus.dispatch_key_down(&HostKey::Escape);
        bus.dispatch_key_down(&HostKey::Escape);
        assert_eq!(closes.get(), 1, "Second press goes to the replaced callback");
    }

    #[test]
    fn test_dialogs_on_one_bus_close_independently() {
        let bus = InputBus::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let first_body = RegionId::next();
        let second_body = RegionId::next();
        let mut a = DialogController::new(
            bus.clone(),
            move |p: &HitPath| p.passes_through(first_body),
            DismissPolicy::default(),
            counter_callback(&first),
        );
        let mut b = DialogController::new(
            bus.clone(),
            move |p: &HitPath| p.passes_through(second_body),
            DismissPolicy::default(),
            counter_callback(&second),
        );
        a.sync(true);
        b.sync(true);

        bus.dispatch_pointer_down_at(&HitPath::new(vec![second_body]));

        assert_eq!((first.get(), second.get()), (1, 0));
    }

    struct FailingKeys(InputBus);

    impl InputHost for FailingKeys {
        type Target = HitPath;
        type Subscription = crate::input::BusSubscription;

        fn on_pointer_down(
            &self,
            handler: PointerHandler<HitPath>,
        ) -> Result<Self::Subscription, HostInputError> {
            self.0.on_pointer_down(handler)
        }

        fn on_key_down(&self, _handler: KeyHandler) -> Result<Self::Subscription, HostInputError> {
            Err(HostInputError::NoDocument)
        }
    }

    #[test]
    fn test_attach_failure_keeps_other_channel() {
        let bus = InputBus::new();
        let closes = Rc::new(Cell::new(0));
        let mut controller = DialogController::new(
            FailingKeys(bus.clone()),
            |_: &HitPath| false,
            DismissPolicy::default(),
            counter_callback(&closes),
        );
        controller.sync(true);

        assert_eq!(controller.phase(), DialogPhase::Open);
        assert_eq!(bus.listener_count(), 1);
        bus.dispatch_pointer_down_at(&HitPath::outside());
        assert_eq!(closes.get(), 1);

        controller.sync(false);
        assert_eq!(bus.listener_count(), 0);
    }
}
