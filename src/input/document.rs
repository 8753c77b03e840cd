// Document-level listeners for the web renderer.

use super::{HostInputError, HostKey, InputHost, KeyHandler, PointerHandler, Subscription};
use dioxus::logger::tracing::warn;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const POINTER_DOWN: &str = "pointerdown";
const KEY_DOWN: &str = "keydown";

/// Listens on `window.document`. Listeners are removed again when their
/// subscription is cancelled or dropped; nothing is leaked with `forget()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentInput;

fn current_document() -> Result<web_sys::Document, HostInputError> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(HostInputError::NoDocument)
}

impl DocumentInput {
    fn listen(
        &self,
        event: &'static str,
        mut on_event: impl FnMut(&web_sys::Event) + 'static,
    ) -> Result<DocumentSubscription, HostInputError> {
        let document = current_document()?;
        let live = Rc::new(Cell::new(true));
        let callback = {
            let live = live.clone();
            Closure::wrap(Box::new(move |e: web_sys::Event| {
                if live.get() {
                    on_event(&e);
                }
            }) as Box<dyn FnMut(_)>)
        };

        document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| HostInputError::Attach {
                event,
                reason: format!("{err:?}"),
            })?;

        Ok(DocumentSubscription {
            document,
            event,
            callback: Some(callback),
            live,
        })
    }
}

impl InputHost for DocumentInput {
    type Target = web_sys::Node;
    type Subscription = DocumentSubscription;

    fn on_pointer_down(
        &self,
        handler: PointerHandler<web_sys::Node>,
    ) -> Result<DocumentSubscription, HostInputError> {
        self.listen(POINTER_DOWN, move |e| {
            if let Some(node) = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) {
                handler(&node);
            }
        })
    }

    fn on_key_down(&self, handler: KeyHandler) -> Result<DocumentSubscription, HostInputError> {
        self.listen(KEY_DOWN, move |e| {
            if let Some(key_event) = e.dyn_ref::<web_sys::KeyboardEvent>() {
                handler(&HostKey::from_key_name(&key_event.key()));
            }
        })
    }
}

pub struct DocumentSubscription {
    document: web_sys::Document,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
    // Cleared before removal so an event already queued for this listener is ignored.
    live: Rc<Cell<bool>>,
}

impl DocumentSubscription {
    fn release(&mut self) {
        self.live.set(false);
        if let Some(callback) = self.callback.take() {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref())
            {
                warn!("failed to remove `{}` listener: {err:?}", self.event);
            }
        }
    }
}

impl Subscription for DocumentSubscription {
    fn cancel(mut self) {
        self.release();
    }
}

impl Drop for DocumentSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
