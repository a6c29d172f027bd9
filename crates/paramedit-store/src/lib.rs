//! Editable record storage for paramedit sessions.
//!
//! Provides the [`RecordStore`] that owns the working set of editable records
//! and the [`ParamEditor`] facade a host drives an editing session through.
//!
//! # Architecture
//!
//! The record set is replaced wholesale on every mutation: each add, edit or
//! delete builds a new immutable [`Snapshot`], so a snapshot handed out
//! earlier never observes a later change.
//!
//! # Modules
//!
//! - [`error`]: EditorError enum with all failure modes
//! - [`store`]: RecordStore, snapshots and id allocation
//! - [`editor`]: ParamEditor session facade and EditorEvent

pub mod editor;
pub mod error;
pub mod store;

// Re-export key types for ergonomic use.
pub use editor::{EditorEvent, ParamEditor};
pub use error::EditorError;
pub use store::{RecordStore, Snapshot};
