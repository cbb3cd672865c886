//! Observer contract and supplied observers

use super::ExitCause;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Receives traversal notifications from the sort engine.
///
/// The engine calls [`enter`](Observer::enter) before it begins exploring a
/// node's dependencies and [`exit`](Observer::exit) when that exploration
/// ends, with the [`ExitCause`] explaining why. Notifications are delivered
/// synchronously, in traversal order.
///
/// Observers are passive: they have no return value and cannot mutate
/// engine state. The default method bodies do nothing, so an observer may
/// implement only the notifications it cares about.
pub trait Observer<N> {
    /// Called before the engine explores `node`'s dependencies.
    fn enter(&mut self, node: &N) {
        let _ = node;
    }

    /// Called when the engine is done with `node`, with the cause.
    fn exit(&mut self, node: &N, cause: ExitCause) {
        let _ = (node, cause);
    }
}

/// The unit observer ignores all notifications.
impl<N> Observer<N> for () {}

/// Observing through a mutable reference lets callers keep ownership and
/// inspect the observer after the run.
impl<N, O: Observer<N> + ?Sized> Observer<N> for &mut O {
    fn enter(&mut self, node: &N) {
        (**self).enter(node);
    }

    fn exit(&mut self, node: &N, cause: ExitCause) {
        (**self).exit(node, cause);
    }
}

/// A single recorded traversal notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalEvent<N> {
    /// The engine entered `node`.
    Enter(N),
    /// The engine exited `node` with the given cause.
    Exit(N, ExitCause),
}

/// Buffers every traversal event for later inspection.
///
/// Useful for diagnostics and assertions about traversal order.
///
/// # Example
///
/// ```
/// use taxis::{ExitCause, MapProvider, RecordingObserver, Sorter, TraversalEvent};
///
/// let deps = MapProvider::from_edges([("a", vec![])]);
/// let mut recorder = RecordingObserver::new();
///
/// Sorter::new(deps).with_observer(&mut recorder).sort(["a"]).unwrap();
///
/// assert_eq!(
///     recorder.events(),
///     &[
///         TraversalEvent::Enter("a"),
///         TraversalEvent::Exit("a", ExitCause::Sorted),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordingObserver<N> {
    events: Vec<TraversalEvent<N>>,
}

impl<N> Default for RecordingObserver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> RecordingObserver<N> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in delivery order.
    pub fn events(&self) -> &[TraversalEvent<N>] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    pub fn into_events(self) -> Vec<TraversalEvent<N>> {
        self.events
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<N: Clone> Observer<N> for RecordingObserver<N> {
    fn enter(&mut self, node: &N) {
        self.events.push(TraversalEvent::Enter(node.clone()));
    }

    fn exit(&mut self, node: &N, cause: ExitCause) {
        self.events.push(TraversalEvent::Exit(node.clone(), cause));
    }
}

/// Forwards traversal events to [`tracing`].
///
/// Enters are logged at trace level, exits at debug level with their cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates a tracing observer.
    pub fn new() -> Self {
        Self
    }
}

impl<N: fmt::Debug> Observer<N> for TracingObserver {
    fn enter(&mut self, node: &N) {
        tracing::trace!(node = ?node, "entering node");
    }

    fn exit(&mut self, node: &N, cause: ExitCause) {
        tracing::debug!(node = ?node, cause = ?cause, "exiting node");
    }
}
