//! Node Registry
//!
//! Pure bookkeeping for one sort run: which traversal state each node is
//! in, and where finished nodes landed in the topological order. The
//! registry makes no algorithmic decisions; the sort engine owns one
//! registry per run and drives every transition.
//!
//! - [`NodeState`]: the per-node traversal state
//! - [`Registry`]: state tracking plus the append-only finished order
//!
//! The registry is a single-threaded owner's structure and has no
//! concurrency control.

mod state;
mod tracker;

pub use state::NodeState;
pub use tracker::Registry;
