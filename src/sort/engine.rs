//! Depth-first traversal engine
//!
//! The traversal is the classic DFS topological sort with explicit state
//! tracking, generalized to on-demand dependency discovery: a node's
//! dependencies are fetched from the provider the first time the node is
//! entered, never before and never again.
//!
//! Recursion is replaced by an explicit stack of `(node, remaining
//! dependencies)` frames, so the supported graph depth is bounded by memory
//! rather than by the call stack. The frames on the stack are exactly the
//! nodes currently `InProgress`, which is what makes cycle paths cheap to
//! report: when a back-edge hits an in-progress node, the cycle is the
//! stack suffix starting at that node.

use super::error::{SortError, SortResult};
use super::provider::DependencyProvider;
use crate::event::{ExitCause, Observer};
use crate::registry::{NodeState, Registry};
use std::fmt;
use std::hash::Hash;

/// One in-progress node and the dependencies it has not explored yet.
struct Frame<N> {
    node: N,
    deps: std::vec::IntoIter<N>,
}

/// Sorts the subgraph reachable from `roots`, without an observer.
///
/// Convenience wrapper around [`Sorter`] for callers that only want the
/// finished order.
///
/// # Example
///
/// ```
/// use taxis::{sort, MapProvider};
///
/// let deps = MapProvider::from_edges([
///     ("a", vec!["b", "c"]),
///     ("b", vec![]),
///     ("c", vec![]),
/// ]);
///
/// assert_eq!(sort(["a"], deps).unwrap(), vec!["b", "c", "a"]);
/// ```
pub fn sort<N, P>(roots: impl IntoIterator<Item = N>, provider: P) -> SortResult<Vec<N>, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
    P: DependencyProvider<N>,
{
    Sorter::new(provider).sort(roots)
}

/// The traversal engine: a dependency provider plus an observer.
///
/// A `Sorter` is consumed by [`sort`](Sorter::sort); every run owns a fresh
/// registry and traversal stack, so no state leaks between runs and
/// independent runs never need coordination.
///
/// # Example
///
/// ```
/// use taxis::{MapProvider, RecordingObserver, Sorter};
///
/// let deps = MapProvider::from_edges([("b", vec!["a"]), ("a", vec![])]);
/// let mut recorder = RecordingObserver::new();
///
/// let order = Sorter::new(deps)
///     .with_observer(&mut recorder)
///     .sort(["b"])
///     .unwrap();
///
/// assert_eq!(order, vec!["a", "b"]);
/// assert_eq!(recorder.len(), 4); // enter/exit for each of a and b
/// ```
pub struct Sorter<P, O = ()> {
    provider: P,
    observer: O,
}

impl<P> Sorter<P> {
    /// Creates an engine over `provider` with no observer.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            observer: (),
        }
    }
}

impl<P, O> Sorter<P, O> {
    /// Replaces the observer.
    ///
    /// Pass `&mut observer` to keep ownership and inspect the observer
    /// after the run.
    pub fn with_observer<O2>(self, observer: O2) -> Sorter<P, O2> {
        Sorter {
            provider: self.provider,
            observer,
        }
    }

    /// Runs the sort from the given roots.
    ///
    /// Roots are processed in order; a root whose state is no longer
    /// `Unvisited` (seen while exploring an earlier root, or listed twice)
    /// is skipped. The run is fail-fast: the first cycle or provider
    /// failure aborts everything, and later roots are never entered.
    ///
    /// On success the result is the finished order, a valid topological
    /// order of the subgraph reachable from the roots. On failure no order
    /// is returned.
    pub fn sort<N>(mut self, roots: impl IntoIterator<Item = N>) -> SortResult<Vec<N>, N>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        P: DependencyProvider<N>,
        O: Observer<N>,
    {
        let mut registry = Registry::new();

        for root in roots {
            if registry.state_of(&root) == NodeState::Unvisited {
                self.visit(&mut registry, root)?;
            }
        }

        Ok(registry.into_finished_order())
    }

    /// Explores the dependency subtree of `start`, which must be
    /// `Unvisited`.
    fn visit<N>(&mut self, registry: &mut Registry<N>, start: N) -> SortResult<(), N>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        P: DependencyProvider<N>,
        O: Observer<N>,
    {
        let mut stack: Vec<Frame<N>> = Vec::new();
        self.push_frame(registry, &mut stack, start)?;

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.deps.next(),
                None => return Ok(()),
            };

            match next {
                Some(dep) => match registry.state_of(&dep) {
                    NodeState::Finished => {
                        self.observer.enter(&dep);
                        self.observer.exit(&dep, ExitCause::AlreadySorted);
                    }
                    NodeState::InProgress => {
                        self.observer.enter(&dep);
                        self.observer.exit(&dep, ExitCause::Cycle);
                        return Err(self.fail_cycle(&mut stack, dep));
                    }
                    NodeState::Unvisited => {
                        self.push_frame(registry, &mut stack, dep)?;
                    }
                },
                None => {
                    if let Some(frame) = stack.pop() {
                        registry.mark_finished(frame.node.clone());
                        self.observer.exit(&frame.node, ExitCause::Sorted);
                    }
                }
            }
        }
    }

    /// Enters `node`: notifies the observer, marks it in progress, and
    /// fetches its dependencies from the provider (the single query this
    /// node will ever get in this run).
    fn push_frame<N>(
        &mut self,
        registry: &mut Registry<N>,
        stack: &mut Vec<Frame<N>>,
        node: N,
    ) -> SortResult<(), N>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        P: DependencyProvider<N>,
        O: Observer<N>,
    {
        self.observer.enter(&node);
        registry.mark_in_progress(node.clone());

        let deps = self
            .provider
            .dependencies_of(&node)
            .map_err(|source| SortError::provider(node.clone(), source))?;

        stack.push(Frame {
            node,
            deps: deps.into_iter(),
        });
        Ok(())
    }

    /// Unwinds the traversal stack after a back-edge hit `witness`.
    ///
    /// Every open frame exits with `DependencyCycle`, except the witness
    /// itself, which already exited with `Cycle` at the point of
    /// detection.
    fn fail_cycle<N>(&mut self, stack: &mut Vec<Frame<N>>, witness: N) -> SortError<N>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        O: Observer<N>,
    {
        tracing::debug!(witness = ?witness, "cycle detected during traversal");

        // The witness is InProgress, so its frame is on this stack.
        let start = stack
            .iter()
            .position(|frame| frame.node == witness)
            .expect("an InProgress node must have a frame on the traversal stack");

        let mut path: Vec<N> = stack[start..]
            .iter()
            .map(|frame| frame.node.clone())
            .collect();
        path.push(witness.clone());

        while let Some(frame) = stack.pop() {
            if frame.node != witness {
                self.observer.exit(&frame.node, ExitCause::DependencyCycle);
            }
        }

        SortError::cycle(witness, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{MapProvider, SortError};

    #[test]
    fn test_single_node_no_dependencies() {
        let deps = MapProvider::from_edges([("a", vec![])]);
        assert_eq!(sort(["a"], deps).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_no_roots_yields_empty_order() {
        let deps: MapProvider<&str> = MapProvider::new();
        let order = sort(std::iter::empty::<&str>(), deps).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_chain_is_sorted_bottom_up() {
        let deps = MapProvider::from_edges([
            ("c", vec!["b"]),
            ("b", vec!["a"]),
            ("a", vec![]),
        ]);
        assert_eq!(sort(["c"], deps).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dependency_order_is_authoritative() {
        // Unrelated siblings come out in exactly the provider's order.
        let deps = MapProvider::from_edges([
            ("root", vec!["z", "m", "a"]),
            ("z", vec![]),
            ("m", vec![]),
            ("a", vec![]),
        ]);
        assert_eq!(sort(["root"], deps).unwrap(), vec!["z", "m", "a", "root"]);
    }

    #[test]
    fn test_self_dependency_is_a_cycle_of_length_one() {
        let deps = MapProvider::from_edges([("a", vec!["a"])]);
        match sort(["a"], deps) {
            Err(SortError::Cycle { witness, path }) => {
                assert_eq!(witness, "a");
                assert_eq!(path, vec!["a", "a"]);
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_path_runs_witness_to_witness() {
        let deps = MapProvider::from_edges([
            ("r", vec!["a"]),
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
        ]);
        match sort(["r"], deps) {
            Err(SortError::Cycle { witness, path }) => {
                assert_eq!(witness, "a");
                assert_eq!(path, vec!["a", "b", "c", "a"]);
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_roots_are_entered_once() {
        let deps = MapProvider::from_edges([("a", vec![])]);
        assert_eq!(sort(["a", "a", "a"], deps).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_provider_is_queried_once_per_node() {
        use std::cell::RefCell;
        use std::collections::HashMap;

        // Owned keys: the closure sees each node behind a call-local
        // borrow, which must not escape into the map.
        let calls: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());
        let provider = |node: &&str| -> Result<Vec<&str>, crate::BoxError> {
            *calls.borrow_mut().entry((*node).to_string()).or_insert(0) += 1;
            Ok(match *node {
                // diamond: d -> {b, c} -> a
                "d" => vec!["b", "c"],
                "b" | "c" => vec!["a"],
                _ => vec![],
            })
        };

        let order = sort(["d"], provider).unwrap();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert!(calls.borrow().values().all(|&count| count == 1));
    }

    #[test]
    fn test_provider_failure_is_not_a_cycle() {
        // "b" is reachable but unknown to the provider.
        let deps = MapProvider::from_edges([("a", vec!["b"])]);
        match sort(["a"], deps) {
            Err(SortError::Provider { node, .. }) => assert_eq!(node, "b"),
            other => panic!("expected a provider failure, got {other:?}"),
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow_the_call_stack() {
        let provider = |node: &u32| -> Result<Vec<u32>, crate::BoxError> {
            Ok(if *node == 0 { vec![] } else { vec![node - 1] })
        };

        let depth = 100_000u32;
        let order = sort([depth], provider).unwrap();
        assert_eq!(order.len(), depth as usize + 1);
        assert_eq!(order.first(), Some(&0));
        assert_eq!(order.last(), Some(&depth));
    }
}
