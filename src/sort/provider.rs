//! Dependency provider contract

use super::error::BoxError;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Produces the ordered dependency list of a node, on demand.
///
/// This is the engine's only window into the graph: nothing about a node's
/// dependencies is known until the provider is asked. The engine asks at
/// most once per node per run, on the node's first entry, so a provider is
/// free to do expensive work per call (read a manifest, parse a file,
/// query a service).
///
/// The returned order is authoritative: the engine explores dependencies in
/// exactly this sequence, which determines the relative order of otherwise
/// unrelated nodes in the final result. The list may be empty, and it may
/// be a filtered or partial view of some larger graph; the engine infers no
/// completeness guarantee beyond the answer it was given.
///
/// A provider failure aborts the run. A provider that needs to cancel a
/// traversal can therefore simply refuse further work.
///
/// Closures implement this trait directly:
///
/// ```
/// use taxis::{sort, BoxError};
///
/// let provider = |node: &u32| -> Result<Vec<u32>, BoxError> {
///     // every node depends on its half, down to zero
///     Ok(if *node == 0 { vec![] } else { vec![node / 2] })
/// };
///
/// let order = sort([4u32], provider).unwrap();
/// assert_eq!(order, vec![0, 1, 2, 4]);
/// ```
pub trait DependencyProvider<N> {
    /// Returns the ordered dependencies of `node`.
    fn dependencies_of(&mut self, node: &N) -> Result<Vec<N>, BoxError>;
}

impl<N, F> DependencyProvider<N> for F
where
    F: FnMut(&N) -> Result<Vec<N>, BoxError>,
{
    fn dependencies_of(&mut self, node: &N) -> Result<Vec<N>, BoxError> {
        self(node)
    }
}

/// A provider backed by an in-memory adjacency map.
///
/// Every node reachable from the roots must have an entry; asking for a
/// node the map does not know is a provider failure, not an empty list.
///
/// # Example
///
/// ```
/// use taxis::{sort, MapProvider};
///
/// let deps = MapProvider::from_edges([
///     ("app", vec!["parser", "log"]),
///     ("parser", vec!["log"]),
///     ("log", vec![]),
/// ]);
///
/// let order = sort(["app"], deps).unwrap();
/// assert_eq!(order, vec!["log", "parser", "app"]);
/// ```
#[derive(Debug, Clone)]
pub struct MapProvider<N> {
    edges: HashMap<N, Vec<N>>,
}

impl<N> Default for MapProvider<N> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash> MapProvider<N> {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Builds a provider from `(node, dependencies)` pairs.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, Vec<N>)>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// Inserts or replaces the dependency list of `node`.
    pub fn insert(&mut self, node: N, dependencies: Vec<N>) {
        self.edges.insert(node, dependencies);
    }

    /// Returns the number of known nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the provider knows no nodes.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<N: Eq + Hash> From<HashMap<N, Vec<N>>> for MapProvider<N> {
    fn from(edges: HashMap<N, Vec<N>>) -> Self {
        Self { edges }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for MapProvider<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N> DependencyProvider<N> for MapProvider<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    fn dependencies_of(&mut self, node: &N) -> Result<Vec<N>, BoxError> {
        self.edges
            .get(node)
            .cloned()
            .ok_or_else(|| format!("unknown node: {node:?}").into())
    }
}
