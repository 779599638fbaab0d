//! Leaf nodes backed by closures.
//!
//! Domain-specific sensors and actuators normally implement [`Behavior`]
//! themselves. These two wrappers cover the common case where a closure is
//! enough.

use crate::behavior::contain;
use crate::{Behavior, BlackboardError, Status};

type ActionFn<C> = Box<dyn FnMut(&mut C) -> Status + Send + Sync>;
type AbortFn<C> = Box<dyn FnMut(&mut C) + Send + Sync>;
type PredicateFn<C> = Box<dyn Fn(&C) -> Result<bool, BlackboardError> + Send + Sync>;

/// Runs a closure every tick and reports its status.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let mut steps = 0;
/// let mut walk = Action::new(move |distance: &mut u32| {
///     steps += 1;
///     *distance = distance.saturating_sub(1);
///     if *distance == 0 { Status::Success } else { Status::Running }
/// });
///
/// let mut distance = 2;
/// walk.initialize();
/// assert_eq!(walk.tick(&mut distance), Status::Running);
/// assert_eq!(walk.tick(&mut distance), Status::Success);
/// ```
pub struct Action<C> {
    run: ActionFn<C>,
    on_abort: Option<AbortFn<C>>,
    status: Option<Status>,
}

impl<C> Action<C> {
    pub fn new(run: impl FnMut(&mut C) -> Status + Send + Sync + 'static) -> Self {
        Self {
            run: Box::new(run),
            on_abort: None,
            status: None,
        }
    }

    /// Call `on_abort` when a parent cancels this action while it runs.
    pub fn with_abort(mut self, on_abort: impl FnMut(&mut C) + Send + Sync + 'static) -> Self {
        self.on_abort = Some(Box::new(on_abort));
        self
    }
}

impl<C> Behavior<C> for Action<C> {
    fn initialize(&mut self) {
        self.status = None;
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = contain((self.run)(ctx));
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        if let Some(on_abort) = self.on_abort.as_mut() {
            on_abort(ctx);
        }
        self.status = Some(Status::Abort);
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

/// Evaluates a predicate: `true` is Success, `false` is Failure.
///
/// A fallible predicate that cannot read its inputs reports `Error`.
pub struct Condition<C> {
    predicate: PredicateFn<C>,
    status: Option<Status>,
}

impl<C> Condition<C> {
    pub fn new(predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self::fallible(move |ctx| Ok(predicate(ctx)))
    }

    pub fn fallible(
        predicate: impl Fn(&C) -> Result<bool, BlackboardError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            status: None,
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn initialize(&mut self) {
        self.status = None;
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = match (self.predicate)(ctx) {
            Ok(true) => Status::Success,
            Ok(false) => Status::Failure,
            Err(error) => {
                tracing::warn!("Condition: {}", error);
                Status::Error
            }
        };
        self.status = Some(status);
        status
    }

    // Conditions finish within a single tick.
    fn abort(&mut self, _ctx: &mut C) {}

    fn status(&self) -> Option<Status> {
        self.status
    }
}
