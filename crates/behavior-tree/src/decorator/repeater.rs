use super::tick_child;
use crate::{Behavior, BuildError, Status, Variable};

enum Count {
    Fixed(u32),
    Variable(Variable<u32>),
}

impl Count {
    fn get(&self) -> u32 {
        match self {
            Count::Fixed(count) => *count,
            Count::Variable(count) => count.get(),
        }
    }
}

/// Runs its child a number of times, one iteration per tick.
///
/// # Semantics
///
/// - `Running` from the child is returned as is
/// - `Success` or `Failure` completes an iteration: the child is
///   re-initialized and the repeater returns `Running` until the last
///   iteration, whose result is returned
/// - `Error` is returned immediately and restarts the count
///
/// A repeater built with [`Repeater::variable`] reads its count on every
/// tick. A count of zero completes immediately with `Success`, aborting a
/// child left running by the previous iteration.
pub struct Repeater<C> {
    child: Box<dyn Behavior<C>>,
    count: Count,
    completed: u32,
    status: Option<Status>,
}

impl<C> Repeater<C> {
    /// Repeats `child` exactly `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn new(count: u32, child: Box<dyn Behavior<C>>) -> Self {
        match Self::try_new(count, child) {
            Ok(repeater) => repeater,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`Repeater::new`].
    pub fn try_new(count: u32, child: Box<dyn Behavior<C>>) -> Result<Self, BuildError> {
        if count == 0 {
            return Err(BuildError::ZeroRepeat);
        }
        Ok(Self::with_count(Count::Fixed(count), child))
    }

    /// Repeats `child` as many times as `count` holds when checked.
    pub fn variable(count: Variable<u32>, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_count(Count::Variable(count), child)
    }

    fn with_count(count: Count, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            count,
            completed: 0,
            status: None,
        }
    }

    /// Iterations finished in the current cycle.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn child(&self) -> &dyn Behavior<C> {
        self.child.as_ref()
    }

    fn finish(&mut self, status: Status) -> Status {
        self.status = Some(status);
        status
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn initialize(&mut self) {
        self.completed = 0;
        self.status = None;
        self.child.initialize();
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let target = self.count.get();
        if target == 0 {
            self.child.abort(ctx);
            self.completed = 0;
            return self.finish(Status::Success);
        }

        let status = match tick_child(self.child.as_mut(), ctx) {
            Status::Running => Status::Running,
            outcome @ (Status::Success | Status::Failure) => {
                self.completed += 1;
                self.child.initialize();
                if self.completed >= target {
                    self.completed = 0;
                    outcome
                } else {
                    Status::Running
                }
            }
            _ => {
                self.completed = 0;
                Status::Error
            }
        };
        self.finish(status)
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        self.child.abort(ctx);
        self.completed = 0;
        self.status = Some(Status::Abort);
    }

    fn dispose(&mut self) {
        self.child.dispose();
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}
