// In-process input bus used by the desktop/mobile renderers and by tests.

use super::{HostInputError, HostKey, InputHost, KeyHandler, PointerHandler, Subscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static REGION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identifies a rendered region that pointer events can bubble through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

impl RegionId {
    pub fn next() -> Self {
        RegionId(REGION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The regions a pointer-down bubbled through, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitPath(Vec<RegionId>);

impl HitPath {
    pub fn new(regions: Vec<RegionId>) -> Self {
        Self(regions)
    }

    /// A pointer-down that landed outside every marked region.
    #[cfg(test)]
    pub fn outside() -> Self {
        Self::default()
    }

    pub fn passes_through(&self, region: RegionId) -> bool {
        self.0.contains(&region)
    }
}

/// Where a pointer-down landed, in client coordinates. Every handler on the
/// bubble path of one press reports the same point.
#[derive(Clone, Copy, Debug)]
pub struct PressPoint {
    x: f64,
    y: f64,
}

impl PressPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Bitwise: two handlers of one press see identical coordinates.
impl PartialEq for PressPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

// Regions marked by the press currently bubbling towards the dispatcher.
struct PendingPress {
    point: PressPoint,
    regions: Vec<RegionId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Pointer,
    Key,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    pointer: Vec<(u64, PointerHandler<HitPath>)>,
    key: Vec<(u64, KeyHandler)>,
    pending: Option<PendingPress>,
}

impl Listeners {
    fn alloc_id(&mut self) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.next_id
    }

    fn is_live(&self, channel: Channel, id: u64) -> bool {
        match channel {
            Channel::Pointer => self.pointer.iter().any(|(live, _)| *live == id),
            Channel::Key => self.key.iter().any(|(live, _)| *live == id),
        }
    }

    fn detach(&mut self, channel: Channel, id: u64) -> Option<Detached> {
        match channel {
            Channel::Pointer => {
                let index = self.pointer.iter().position(|(live, _)| *live == id)?;
                Some(Detached::Pointer(self.pointer.remove(index).1))
            }
            Channel::Key => {
                let index = self.key.iter().position(|(live, _)| *live == id)?;
                Some(Detached::Key(self.key.remove(index).1))
            }
        }
    }
}

#[allow(dead_code)]
enum Detached {
    Pointer(PointerHandler<HitPath>),
    Key(KeyHandler),
}

/// A cloneable handle to one shared input stream.
///
/// Dispatch snapshots the listener list when it starts, so a listener added
/// while an event is being delivered does not see that event. Liveness is
/// re-checked before every call, so a listener removed mid-dispatch is never
/// invoked afterwards.
#[derive(Clone, Default)]
pub struct InputBus {
    listeners: Rc<RefCell<Listeners>>,
}

impl PartialEq for InputBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl InputBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the pointer-down at `point` is bubbling through `region`.
    ///
    /// Marks left by an earlier press that never reached
    /// [`InputBus::dispatch_pointer_down`] are discarded here, so at most one
    /// press worth of regions is ever pending.
    pub fn mark_region(&self, region: RegionId, point: PressPoint) {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.pending.as_ref().map(|pending| pending.point) != Some(point) {
            listeners.pending = Some(PendingPress {
                point,
                regions: Vec::new(),
            });
        }
        if let Some(pending) = listeners.pending.as_mut() {
            if !pending.regions.contains(&region) {
                pending.regions.push(region);
            }
        }
    }

    /// Delivers the pointer-down at `point` along the regions it was marked
    /// with. Returns how many listeners ran.
    pub fn dispatch_pointer_down(&self, point: PressPoint) -> usize {
        let pending = self.listeners.borrow_mut().pending.take();
        let path = match pending {
            Some(pending) if pending.point == point => pending.regions,
            _ => Vec::new(),
        };
        self.dispatch_pointer_down_at(&HitPath::new(path))
    }

    pub fn dispatch_pointer_down_at(&self, target: &HitPath) -> usize {
        let snapshot = self.listeners.borrow().pointer.clone();
        let mut delivered = 0;
        for (id, handler) in snapshot {
            let live = self.listeners.borrow().is_live(Channel::Pointer, id);
            if !live {
                continue;
            }
            handler(target);
            delivered += 1;
        }
        delivered
    }

    pub fn dispatch_key_down(&self, key: &HostKey) -> usize {
        let snapshot = self.listeners.borrow().key.clone();
        let mut delivered = 0;
        for (id, handler) in snapshot {
            let live = self.listeners.borrow().is_live(Channel::Key, id);
            if !live {
                continue;
            }
            handler(key);
            delivered += 1;
        }
        delivered
    }

    /// Pointer plus key listeners currently attached.
    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        let listeners = self.listeners.borrow();
        listeners.pointer.len() + listeners.key.len()
    }

    fn subscribe(&self, channel: Channel, add: impl FnOnce(&mut Listeners, u64)) -> BusSubscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.alloc_id();
        add(&mut *listeners, id);
        BusSubscription {
            listeners: Rc::downgrade(&self.listeners),
            channel,
            id,
        }
    }
}

impl InputHost for InputBus {
    type Target = HitPath;
    type Subscription = BusSubscription;

    fn on_pointer_down(
        &self,
        handler: PointerHandler<HitPath>,
    ) -> Result<BusSubscription, HostInputError> {
        Ok(self.subscribe(Channel::Pointer, |listeners, id| {
            listeners.pointer.push((id, handler))
        }))
    }

    fn on_key_down(&self, handler: KeyHandler) -> Result<BusSubscription, HostInputError> {
        Ok(self.subscribe(Channel::Key, |listeners, id| {
            listeners.key.push((id, handler))
        }))
    }
}

pub struct BusSubscription {
    listeners: Weak<RefCell<Listeners>>,
    channel: Channel,
    id: u64,
}

impl BusSubscription {
    fn release(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let detached = listeners.borrow_mut().detach(self.channel, self.id);
            // Dropped once the borrow has ended: a handler may own other subscriptions.
            drop(detached);
        }
        self.listeners = Weak::new();
    }
}

impl Subscription for BusSubscription {
    fn cancel(mut self) {
        self.release();
    }
}

impl Drop for BusSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
