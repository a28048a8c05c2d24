//! Event dispatch system
//!
//! Listeners are registered per `(target, event type)` pair and receive a
//! [`ListenerId`] that removes them again. Scroll surfaces use this to keep
//! exactly one visibility listener attached at a time.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Identifier of the element an event is delivered to
pub type TargetId = u64;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const SCROLL: EventType = 30;
    pub const RESIZE: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;

    // Clipboard events
    pub const COPY: EventType = 71;
}

new_key_type! {
    /// Handle returned by [`EventDispatcher::register`]
    pub struct ListenerId;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: TargetId,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Scroll {
        /// Offset after the scroll was applied
        offset_y: f32,
        /// Change relative to the previous offset
        delta_y: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: TargetId, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

struct Registration {
    target: TargetId,
    event_type: EventType,
    handler: EventHandler,
}

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    listeners: SlotMap<ListenerId, Registration>,
    by_target: FxHashMap<(TargetId, EventType), SmallVec<[ListenerId; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            by_target: FxHashMap::default(),
        }
    }

    /// Register an event handler for a target and event type
    pub fn register<F>(&mut self, target: TargetId, event_type: EventType, handler: F) -> ListenerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let id = self.listeners.insert(Registration {
            target,
            event_type,
            handler: Arc::new(handler),
        });
        self.by_target
            .entry((target, event_type))
            .or_default()
            .push(id);
        tracing::trace!(?id, target_id = target, event_type, "listener registered");
        id
    }

    /// Remove a previously registered handler.
    ///
    /// Returns `false` if the id was already removed.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let Some(reg) = self.listeners.remove(id) else {
            return false;
        };
        let key = (reg.target, reg.event_type);
        if let Some(ids) = self.by_target.get_mut(&key) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.by_target.remove(&key);
            }
        }
        tracing::trace!(?id, target_id = reg.target, "listener removed");
        true
    }

    /// Number of handlers attached to a target for an event type
    pub fn listener_count(&self, target: TargetId, event_type: EventType) -> usize {
        self.by_target
            .get(&(target, event_type))
            .map_or(0, |ids| ids.len())
    }

    /// Total number of registered handlers
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Snapshot the handlers for a target, in registration order
    pub fn handlers_for(&self, target: TargetId, event_type: EventType) -> SmallVec<[EventHandler; 2]> {
        self.by_target
            .get(&(target, event_type))
            .into_iter()
            .flatten()
            .filter_map(|id| self.listeners.get(*id))
            .map(|reg| Arc::clone(&reg.handler))
            .collect()
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        for handler in self.handlers_for(event.target, event.event_type) {
            if event.propagation_stopped {
                break;
            }
            handler(event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatcher shared between surfaces and the components listening to them
pub type SharedDispatcher = Arc<Mutex<EventDispatcher>>;

/// Create an empty shared dispatcher
pub fn shared_dispatcher() -> SharedDispatcher {
    Arc::new(Mutex::new(EventDispatcher::new()))
}

/// Dispatch through a shared dispatcher.
///
/// The lock is released before handlers run, so a handler may register,
/// unregister, or emit further events.
pub fn emit(dispatcher: &SharedDispatcher, mut event: Event) -> Event {
    let handlers = dispatcher
        .lock()
        .unwrap()
        .handlers_for(event.target, event.event_type);
    for handler in handlers {
        if event.propagation_stopped {
            break;
        }
        handler(&event);
    }
    event
}
