//! Scripted leaves shared by the unit tests.

use std::any::Any;

use crate::{
    Behavior, Blackboard, BlackboardError, Clock, FrameClock, MemoryBlackboard, Status,
};

/// World for scripted leaves: leaf `i` returns `outcomes[i]` when ticked.
pub(crate) struct TestContext {
    pub outcomes: Vec<Status>,
    pub ticks: Vec<u32>,
    pub aborts: Vec<u32>,
    pub clock: FrameClock,
    pub blackboard: MemoryBlackboard,
}

impl TestContext {
    /// `count` leaves, all scripted to succeed.
    pub fn new(count: usize) -> Self {
        Self {
            outcomes: vec![Status::Success; count],
            ticks: vec![0; count],
            aborts: vec![0; count],
            clock: FrameClock::new(),
            blackboard: MemoryBlackboard::new(),
        }
    }

    pub fn with_outcomes(outcomes: &[Status]) -> Self {
        let mut ctx = Self::new(outcomes.len());
        ctx.outcomes.copy_from_slice(outcomes);
        ctx
    }

    pub fn script(&mut self, leaf: usize, status: Status) {
        self.outcomes[leaf] = status;
    }
}

impl Clock for TestContext {
    fn frame(&self) -> u64 {
        self.clock.frame()
    }

    fn seconds(&self) -> f64 {
        self.clock.seconds()
    }
}

impl Blackboard for TestContext {
    fn try_get<T: Any>(&self, name: &str) -> Result<&T, BlackboardError> {
        self.blackboard.try_get(name)
    }

    fn set<T: Any + Send + Sync>(&mut self, name: &str, value: T) {
        self.blackboard.set(name, value);
    }

    fn has(&self, name: &str) -> bool {
        self.blackboard.has(name)
    }

    fn remove(&mut self, name: &str) -> bool {
        self.blackboard.remove(name)
    }
}

/// Leaf that replays whatever the context scripts for its id.
pub(crate) struct Scripted {
    id: usize,
    status: Option<Status>,
}

impl Behavior<TestContext> for Scripted {
    fn initialize(&mut self) {
        self.status = None;
    }

    fn tick(&mut self, ctx: &mut TestContext) -> Status {
        ctx.ticks[self.id] += 1;
        let status = ctx.outcomes[self.id];
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut TestContext) {
        if self.is_running() {
            ctx.aborts[self.id] += 1;
            self.status = Some(Status::Abort);
        }
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

pub(crate) fn scripted(id: usize) -> Box<dyn Behavior<TestContext>> {
    Box::new(Scripted { id, status: None })
}

/// Scripted leaves `0..count`.
pub(crate) fn scripted_leaves(count: usize) -> Vec<Box<dyn Behavior<TestContext>>> {
    (0..count).map(scripted).collect()
}
