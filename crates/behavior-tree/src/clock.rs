//! External timing source.
//!
//! The engine never measures time itself. Timing decorators ask the context
//! for the current frame and elapsed seconds through [`Clock`]; the host
//! decides what produces those numbers.

/// Current simulation time as seen by timing decorators.
pub trait Clock {
    /// Monotonic frame counter.
    fn frame(&self) -> u64;

    /// Monotonic elapsed time in seconds.
    fn seconds(&self) -> f64;
}

/// A clock advanced by hand, one frame at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    frame: u64,
    seconds: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame lasting `dt_seconds`.
    pub fn advance(&mut self, dt_seconds: f64) {
        self.frame += 1;
        self.seconds += dt_seconds;
    }

    /// Jump to an explicit frame and time.
    pub fn set(&mut self, frame: u64, seconds: f64) {
        self.frame = frame;
        self.seconds = seconds;
    }
}

impl Clock for FrameClock {
    #[inline]
    fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    fn seconds(&self) -> f64 {
        self.seconds
    }
}
