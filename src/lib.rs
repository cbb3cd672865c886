//! Taxis: Lazy Topological Sorting for Rust
//!
//! `taxis` (τάξις, Greek for "order" or "arrangement") computes topological
//! orderings of dependency graphs that are discovered *lazily*: the
//! dependencies of a node are not known until the node is first visited,
//! at which point an external [`DependencyProvider`] is asked for them.
//! Cycles are detected during traversal, and every step of the traversal is
//! reported to an [`Observer`].
//!
//! # Features
//!
//! - **Lazy discovery**: dependencies are fetched on demand, once per node,
//!   so providers may read manifests, parse files, or hit the network
//! - **Cycle detection**: back-edges fail the run with a witness node and
//!   the full cycle path
//! - **Traversal events**: enter/exit notifications with an [`ExitCause`]
//!   explaining why each node's exploration ended
//! - **Stack-safe**: uses an explicit frame stack, so graph depth is bounded
//!   by memory rather than by the call stack
//!
//! # Quick Start
//!
//! ```
//! use taxis::{sort, MapProvider};
//!
//! // app depends on lib, lib depends on nothing
//! let deps = MapProvider::from_edges([("app", vec!["lib"]), ("lib", vec![])]);
//!
//! let order = sort(["app"], deps).unwrap();
//! assert_eq!(order, vec!["lib", "app"]);
//! ```
//!
//! Cycles fail the run instead of producing an order:
//!
//! ```
//! use taxis::{sort, MapProvider, SortError};
//!
//! let deps = MapProvider::from_edges([("a", vec!["b"]), ("b", vec!["a"])]);
//!
//! match sort(["a"], deps) {
//!     Err(SortError::Cycle { witness, .. }) => assert_eq!(witness, "a"),
//!     other => panic!("expected a cycle, got {other:?}"),
//! }
//! ```
//!
//! # Module Organization
//!
//! Each module hides one design decision that is likely to change:
//!
//! - [`registry`]: Per-node traversal state and the finished order
//!   (hides the bookkeeping representation)
//! - [`event`]: Exit causes and observers (hides how traversal is reported)
//! - [`sort`]: The traversal engine and dependency provider contract
//!   (hides the traversal strategy)

pub mod event;
pub mod registry;
pub mod sort;

// Re-export commonly used types for convenience
pub use event::{ExitCause, Observer, RecordingObserver, TracingObserver, TraversalEvent};
pub use registry::{NodeState, Registry};
pub use sort::{
    sort, BoxError, DependencyProvider, MapProvider, SortError, SortResult, Sorter,
};

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use taxis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::event::{
        ExitCause, Observer, RecordingObserver, TracingObserver, TraversalEvent,
    };
    pub use crate::registry::{NodeState, Registry};
    pub use crate::sort::{
        sort, BoxError, DependencyProvider, MapProvider, SortError, SortResult, Sorter,
    };
}
