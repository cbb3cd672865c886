//! Exit causes for node traversal

use serde::{Deserialize, Serialize};

/// The reason a node's exploration ended.
///
/// Every `enter` notification is paired with exactly one `exit` carrying
/// one of these causes. The set is closed: consumers should match
/// exhaustively rather than treat unknown causes as recoverable.
///
/// Note the asymmetry between [`Cycle`](ExitCause::Cycle) and
/// [`DependencyCycle`](ExitCause::DependencyCycle): the former is detected
/// locally at the back-edge, the latter is propagated upward without being
/// re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitCause {
    /// The node was already sorted when it was re-encountered.
    ///
    /// It was searched successfully earlier in the same run, so neither the
    /// node nor its dependencies are processed again. A node reached
    /// through several dependents reports this once per re-encounter.
    AlreadySorted,

    /// The node is part of a cycle: it was re-entered while still in
    /// progress, which makes the re-entering edge a back-edge. The run is
    /// about to fail.
    Cycle,

    /// One of the node's dependencies is part of a cycle. The failure is
    /// propagated from below; this node is not itself the cycle witness.
    DependencyCycle,

    /// The node was appended to the finished order.
    ///
    /// Emitted at most once per node per run, and exactly once per node if
    /// the graph reachable from the roots is acyclic.
    ///
    /// Do not reconstruct the graph from `Sorted` events alone: a node's
    /// dependency list can legitimately be empty or partial, because the
    /// provider's answer is authoritative and need not reflect a complete
    /// view of the underlying graph.
    Sorted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_equality() {
        assert_eq!(ExitCause::Sorted, ExitCause::Sorted);
        assert_ne!(ExitCause::Cycle, ExitCause::DependencyCycle);
    }

    #[test]
    fn test_cause_is_copy() {
        let cause = ExitCause::AlreadySorted;
        let copy = cause;
        assert_eq!(cause, copy);
    }
}
