//! Error types for sort runs
//!
//! This module hides error representation details and provides a unified
//! error type for the traversal engine.

use std::fmt;
use thiserror::Error;

/// Boxed error type used by dependency providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for sort runs over nodes of type `N`.
pub type SortResult<T, N> = Result<T, SortError<N>>;

/// Errors that terminate a sort run.
///
/// Both variants are terminal: the engine never retries internally. Retry,
/// if desired, is the caller's responsibility on a fresh run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SortError<N: fmt::Debug> {
    /// A back-edge was detected: `witness` was re-entered while still in
    /// progress. `path` is the cycle, from the witness through its
    /// descendants and back to the witness.
    #[error("cycle detected: {}", render_path(.path))]
    Cycle {
        /// The node at which the back-edge was detected.
        witness: N,
        /// The cycle path, `witness -> ... -> witness`.
        path: Vec<N>,
    },

    /// The dependency provider could not produce a dependency list for
    /// `node`. The engine cannot reason about a node without its
    /// dependencies, so this is immediately fatal and distinct from a
    /// cycle.
    #[error("dependency provider failed for node {node:?}")]
    Provider {
        /// The node whose dependencies were being enumerated.
        node: N,
        /// The provider's underlying failure.
        #[source]
        source: BoxError,
    },
}

impl<N: fmt::Debug> SortError<N> {
    /// Creates a cycle error from its witness and path.
    pub fn cycle(witness: N, path: Vec<N>) -> Self {
        Self::Cycle { witness, path }
    }

    /// Creates a provider failure for the given node.
    pub fn provider(node: N, source: BoxError) -> Self {
        Self::Provider { node, source }
    }

    /// Returns the cycle path, if this error is a cycle.
    pub fn cycle_path(&self) -> Option<&[N]> {
        match self {
            Self::Cycle { path, .. } => Some(path),
            Self::Provider { .. } => None,
        }
    }
}

fn render_path<N: fmt::Debug>(path: &[N]) -> String {
    path.iter()
        .map(|node| format!("{node:?}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}
