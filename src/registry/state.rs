//! Per-node traversal state

use serde::{Deserialize, Serialize};

/// The traversal state of a node within a single sort run.
///
/// A node moves `Unvisited → InProgress → Finished` exactly once over the
/// lifetime of a run and never regresses. Nodes the engine has never seen
/// are `Unvisited` without occupying a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeState {
    /// The node has not been entered yet.
    Unvisited,
    /// The node has been entered and its dependency subtree is still being
    /// explored. Re-encountering an in-progress node is a back-edge.
    InProgress,
    /// The node and its whole dependency subtree finished cleanly; the node
    /// holds a position in the finished order.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_equality() {
        assert_eq!(NodeState::Unvisited, NodeState::Unvisited);
        assert_ne!(NodeState::InProgress, NodeState::Finished);
    }
}
