//! Jumble Core Runtime
//!
//! Foundational primitives shared by the Jumble client crates:
//!
//! - **Event Dispatch**: listeners keyed by target and event type, removable by id
//! - **Page Identity**: opaque tokens naming which logical page owns a layout
//!
//! # Example
//!
//! ```rust
//! use jumble_core::events::{event_types, shared_dispatcher, emit, Event, EventData};
//!
//! let dispatcher = shared_dispatcher();
//! let id = dispatcher
//!     .lock()
//!     .unwrap()
//!     .register(7, event_types::SCROLL, |e| println!("scrolled: {:?}", e.data));
//!
//! emit(&dispatcher, Event::new(event_types::SCROLL, 7, EventData::Scroll {
//!     offset_y: 120.0,
//!     delta_y: 120.0,
//! }));
//!
//! assert!(dispatcher.lock().unwrap().unregister(id));
//! ```

pub mod events;
pub mod page;

pub use events::{
    emit, event_types, shared_dispatcher, Event, EventData, EventDispatcher, EventType,
    ListenerId, SharedDispatcher, TargetId,
};
pub use page::PageId;
