//! Core systems for Armature.
//!
//! This crate provides the substrate the Armature widget layer stands on:
//!
//! - **Object Model**: Parent-child ownership, naming, dynamic properties
//! - **Signal/Slot System**: Type-safe inter-object communication
//! - **Diagnostics**: Object-tree dump helpers built on `tracing`
//!
//! Armature widgets run entirely inside a host toolkit's UI event dispatch,
//! so all signal emission is direct and synchronous: for any single gesture,
//! the resulting state mutation and its notification complete before the
//! next event is processed.
//!
//! # Signal/Slot Example
//!
//! ```
//! use armature_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Object Example
//!
//! ```
//! use armature_core::{init_global_registry, Object, ObjectBase, ObjectId};
//!
//! init_global_registry();
//!
//! struct Knob {
//!     base: ObjectBase,
//! }
//!
//! impl Knob {
//!     fn new() -> Self {
//!         Self { base: ObjectBase::new::<Self>() }
//!     }
//! }
//!
//! impl Object for Knob {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let knob = Knob::new();
//! knob.base.set_name("gain");
//! assert_eq!(knob.base.name(), "gain");
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{ArmatureError, Result, SignalError};
pub use logging::{ObjectTreeDebug, TreeFormatOptions};
pub use object::{
    global_registry, init_global_registry, Object, ObjectBase, ObjectError, ObjectId,
    ObjectRegistry, ObjectResult, SharedObjectRegistry, WidgetState,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
