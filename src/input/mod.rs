//! Host input stream: the document-level pointer-down and key-down
//! notifications that overlays observe while they are open.

mod bus;
#[cfg(target_arch = "wasm32")]
mod document;

pub use bus::*;
#[cfg(target_arch = "wasm32")]
pub use document::*;

use dioxus::prelude::{InteractionLocation, MouseEvent};
use std::rc::Rc;

/// The input host used by mounted components on the current renderer.
#[cfg(target_arch = "wasm32")]
pub type PlatformHost = DocumentInput;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHost = InputBus;

/// The client point of a mouse event. Every handler the event bubbles
/// through reports the same value, which ties region marks to their press.
pub fn press_point(evt: &MouseEvent) -> PressPoint {
    let point = evt.client_coordinates();
    PressPoint::new(point.x, point.y)
}

pub type PointerHandler<T> = Rc<dyn Fn(&T)>;
pub type KeyHandler = Rc<dyn Fn(&HostKey)>;

// Only the web host can fail to attach.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug, thiserror::Error)]
pub enum HostInputError {
    #[error("no document is available to listen on")]
    NoDocument,
    #[error("failed to attach `{event}` listener: {reason}")]
    Attach { event: &'static str, reason: String },
}

/// A key identity as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostKey {
    Escape,
    Other(String),
}

impl HostKey {
    /// Maps a DOM `KeyboardEvent.key` name. Older engines report `"Esc"`.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => HostKey::Escape,
            other => HostKey::Other(other.to_string()),
        }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, HostKey::Escape)
    }
}

/// A live listener registration. Cancelling or dropping it detaches the
/// listener; detaching twice is a no-op.
pub trait Subscription {
    fn cancel(self);
}

/// A shared stream of ambient input events.
///
/// Hosts only observe: they never stop propagation or prevent the default
/// action of the events they report.
pub trait InputHost {
    /// What a pointer-down reports as its target.
    type Target: 'static;
    type Subscription: Subscription;

    fn on_pointer_down(
        &self,
        handler: PointerHandler<Self::Target>,
    ) -> Result<Self::Subscription, HostInputError>;

    fn on_key_down(&self, handler: KeyHandler) -> Result<Self::Subscription, HostInputError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_key_names() {
        assert_eq!(HostKey::from_key_name("Escape"), HostKey::Escape);
        assert_eq!(HostKey::from_key_name("Esc"), HostKey::Escape);
        assert!(!HostKey::from_key_name("Enter").is_escape());
        assert_eq!(
            HostKey::from_key_name("escape"),
            HostKey::Other("escape".to_string()),
            "Key names are case sensitive"
        );
    }

    #[test]
    fn test_attach_error_message() {
        let err = HostInputError::Attach {
            event: "keydown",
            reason: "TypeError".to_string(),
        };
        assert_eq!(err.to_string(), "failed to attach `keydown` listener: TypeError");
    }
}
