//! Ready-made context combining a clock and a blackboard.

use std::any::Any;

use crate::{Blackboard, BlackboardError, Clock, FrameClock, MemoryBlackboard};

/// Context for hosts that do not need their own world type.
///
/// Implements [`Clock`] and [`Blackboard`] by delegating to its fields, so
/// every node in this crate, timing decorators included, can be ticked
/// against it.
#[derive(Debug, Default)]
pub struct TickContext {
    pub clock: FrameClock,
    pub blackboard: MemoryBlackboard,
}

impl TickContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame lasting `dt_seconds`.
    pub fn advance(&mut self, dt_seconds: f64) {
        self.clock.advance(dt_seconds);
    }
}

impl Clock for TickContext {
    #[inline]
    fn frame(&self) -> u64 {
        self.clock.frame()
    }

    #[inline]
    fn seconds(&self) -> f64 {
        self.clock.seconds()
    }
}

impl Blackboard for TickContext {
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
