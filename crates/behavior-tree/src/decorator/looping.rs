use super::tick_child;
use crate::{Behavior, Status};

/// Re-runs its child until it succeeds.
///
/// # Semantics
///
/// One child tick per tick:
/// - `Failure` restarts the child and reports `Running`
/// - `Running` reports `Running`
/// - `Success` is returned, ending the loop
/// - `Error` is returned immediately
pub struct Until<C> {
    child: Box<dyn Behavior<C>>,
    status: Option<Status>,
}

impl<C> Until<C> {
    /// Creates a loop that restarts `child` until it succeeds.
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

impl<C> Behavior<C> for Until<C> {
    fn initialize(&mut self) {
        self.status = None;
        self.child.initialize();
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = match tick_child(self.child.as_mut(), ctx) {
            Status::Success => {
                self.child.initialize();
                Status::Success
            }
            Status::Failure => {
                self.child.initialize();
                Status::Running
            }
            other => other,
        };
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

/// Re-runs its child for as long as it succeeds.
///
/// # Semantics
///
/// One child tick per tick:
/// - `Success` restarts the child and reports `Running`
/// - `Running` reports `Running`
/// - `Failure` is returned, ending the loop
/// - `Error` is returned immediately
pub struct While<C> {
    child: Box<dyn Behavior<C>>,
    status: Option<Status>,
}

impl<C> While<C> {
    /// Creates a loop that restarts `child` while it succeeds.
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

impl<C> Behavior<C> for While<C> {
    fn initialize(&mut self) {
        self.status = None;
        self.child.initialize();
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = match tick_child(self.child.as_mut(), ctx) {
            Status::Success => {
                self.child.initialize();
                Status::Running
            }
            Status::Failure => {
                self.child.initialize();
                Status::Failure
            }
            other => other,
        };
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
