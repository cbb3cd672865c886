//! Registry of traversal state and the finished order

use super::NodeState;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Internal slot for a node the engine has encountered.
///
/// `Unvisited` nodes have no slot, which is what makes lazy registration
/// work: entries are created on first encounter, never pre-declared.
#[derive(Debug, Clone)]
enum Slot {
    InProgress,
    Finished { position: usize },
}

/// Tracks traversal state per node and accumulates the finished order.
///
/// The registry is owned exclusively by one sort run. It enforces the state
/// machine `Unvisited → InProgress → Finished`: transitions that would skip
/// or repeat a state are engine bugs and panic rather than returning an
/// error.
///
/// # Example
///
/// ```
/// use taxis::{NodeState, Registry};
///
/// let mut registry = Registry::new();
/// assert_eq!(registry.state_of(&"a"), NodeState::Unvisited);
///
/// registry.mark_in_progress("a");
/// assert_eq!(registry.state_of(&"a"), NodeState::InProgress);
///
/// registry.mark_finished("a");
/// assert_eq!(registry.state_of(&"a"), NodeState::Finished);
/// assert_eq!(registry.position_of(&"a"), Some(0));
/// assert_eq!(registry.finished_order(), &["a"]);
/// ```
#[derive(Debug, Clone)]
pub struct Registry<N> {
    slots: HashMap<N, Slot>,
    order: Vec<N>,
}

impl<N> Registry<N> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Returns the number of nodes the registry has seen.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no node has been encountered yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the finished order built so far.
    ///
    /// The snapshot is a valid topological order only after the run
    /// completes without detecting a cycle.
    pub fn finished_order(&self) -> &[N] {
        &self.order
    }

    /// Consumes the registry and returns the finished order.
    pub fn into_finished_order(self) -> Vec<N> {
        self.order
    }
}

impl<N: Eq + Hash + fmt::Debug> Registry<N> {
    /// Returns the traversal state of `node`, `Unvisited` if never seen.
    pub fn state_of(&self, node: &N) -> NodeState {
        match self.slots.get(node) {
            None => NodeState::Unvisited,
            Some(Slot::InProgress) => NodeState::InProgress,
            Some(Slot::Finished { .. }) => NodeState::Finished,
        }
    }

    /// Returns the node's position in the finished order, if finished.
    pub fn position_of(&self, node: &N) -> Option<usize> {
        match self.slots.get(node) {
            Some(Slot::Finished { position }) => Some(*position),
            _ => None,
        }
    }

    /// Transitions `node` from `Unvisited` to `InProgress`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not `Unvisited`. A repeated or out-of-order
    /// transition is an engine bug, not a data problem.
    pub fn mark_in_progress(&mut self, node: N) {
        let previous = self.slots.insert(node, Slot::InProgress);
        assert!(
            previous.is_none(),
            "mark_in_progress called on a node that was already encountered"
        );
    }

    /// Transitions `node` from `InProgress` to `Finished`, appending it to
    /// the finished order and recording its position.
    ///
    /// # Panics
    ///
    /// Panics unless the node is currently `InProgress`.
    pub fn mark_finished(&mut self, node: N) {
        let slot = self.slots.get_mut(&node);
        match slot {
            Some(slot @ Slot::InProgress) => {
                *slot = Slot::Finished {
                    position: self.order.len(),
                };
                self.order.push(node);
            }
            _ => panic!("mark_finished called on {node:?}, which is not InProgress"),
        }
    }
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}
