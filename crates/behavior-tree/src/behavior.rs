//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the lifecycle contract every
//! behavior tree node follows. The trait is generic over a context type `C`,
//! allowing nodes to read and write the host's world state while the tree
//! itself stays agnostic of it.
//!
//! # Lifecycle
//!
//! `initialize` → `tick` (any number of times, `abort` in between as
//! directed by the parent) → `dispose`. Control always flows from parent to
//! child; no node holds a reference back to its parent.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Reset runtime state to its initial condition.
    ///
    /// Cursors become unset, counters return to zero and the last observed
    /// status is cleared. Called once before the first tick, and again
    /// whenever a parent restarts this node (e.g. a repeater iteration).
    fn initialize(&mut self);

    /// Advance this node by exactly one step.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the host context. Nodes can read world
    ///   state and modify it.
    ///
    /// # Returns
    ///
    /// Never blocks: waiting is expressed by returning `Status::Running`.
    /// A node never returns `Status::Abort` from its own tick.
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Cancel this node if its last observed status is `Running`.
    ///
    /// Sets the status to `Status::Abort` and cascades into the running
    /// descendant chain only. Does nothing for a node that is not running.
    fn abort(&mut self, ctx: &mut C);

    /// Release resources held by this node and its subtree.
    ///
    /// No tick may follow.
    fn dispose(&mut self) {}

    /// The status observed at the last tick or abort, `None` if the node has
    /// not been ticked since it was initialized.
    fn status(&self) -> Option<Status>;

    /// Returns `true` if the last observed status is `Running`.
    #[inline]
    fn is_running(&self) -> bool {
        self.status() == Some(Status::Running)
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn initialize(&mut self) {
        (**self).initialize()
    }

    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn abort(&mut self, ctx: &mut C) {
        (**self).abort(ctx)
    }

    #[inline]
    fn dispose(&mut self) {
        (**self).dispose()
    }

    #[inline]
    fn status(&self) -> Option<Status> {
        (**self).status()
    }
}

/// Maps a status a node must not report from its own tick onto `Error`.
///
/// `Abort` belongs to parents. A tick that returns it broke the contract.
#[inline]
pub(crate) fn contain(status: Status) -> Status {
    match status {
        Status::Abort => Status::Error,
        status => status,
    }
}

/// Ticks `child` on behalf of a parent, with the result passed through
/// [`contain`].
#[inline]
pub(crate) fn tick_child<C>(child: &mut dyn Behavior<C>, ctx: &mut C) -> Status {
    contain(child.tick(ctx))
}
