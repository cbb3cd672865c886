//! Sort Engine
//!
//! The depth-first traversal that turns lazily discovered dependencies into
//! a topological order. The engine enters each root, asks the
//! [`DependencyProvider`] for that node's dependencies, explores them in
//! the exact order the provider returned, and appends each node to the
//! finished order once its whole dependency subtree has finished.
//!
//! Failures are fail-fast: the first back-edge or provider failure aborts
//! the entire run, including roots that have not been entered yet.
//!
//! - [`Sorter`]: configurable engine (provider plus optional observer)
//! - [`sort`]: one-shot convenience without an observer
//! - [`DependencyProvider`] / [`MapProvider`]: the dependency contract
//! - [`SortError`] / [`SortResult`]: how runs fail

mod engine;
mod error;
mod provider;

pub use engine::{sort, Sorter};
pub use error::{BoxError, SortError, SortResult};
pub use provider::{DependencyProvider, MapProvider};
