use super::tick_child;
use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` and `Error` pass through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
    status: Option<Status>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            status: None,
        }
    }

    pub fn child(&self) -> &dyn Behavior<C> {
        self.child.as_ref()
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn initialize(&mut self) {
        self.status = None;
        self.child.initialize();
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = tick_child(self.child.as_mut(), ctx).invert();
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        self.child.abort(ctx);
        self.status = Some(Status::Abort);
    }

    fn dispose(&mut self) {
        self.child.dispose();
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}
