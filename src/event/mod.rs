//! Traversal Event Model
//!
//! The sort engine enters and exits graph nodes while discovering
//! dependencies and building the topological order. This module defines
//! what the engine reports about that traversal:
//!
//! - [`ExitCause`]: why a node's exploration ended
//! - [`Observer`]: the notification contract the engine delivers to
//! - [`TraversalEvent`]: a recorded enter/exit pair element
//! - [`RecordingObserver`]: buffers events for later inspection
//! - [`TracingObserver`]: forwards events to `tracing`
//!
//! Observers are side-effect-only collaborators: they receive `&mut self`
//! notifications, return nothing, and cannot influence the traversal.

mod cause;
mod observer;

pub use cause::ExitCause;
pub use observer::{Observer, RecordingObserver, TracingObserver, TraversalEvent};
