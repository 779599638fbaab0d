use super::tick_child;
use super::timing::{Param, Stamp, Window};
use crate::{Behavior, Blackboard, BuildError, Clock, Status, Variable};

/// Blocks its child for a while after every success.
///
/// # Semantics
///
/// - While the cooldown since the last child `Success` has not elapsed, the
///   child is not ticked and the decorator returns `Failure`
/// - Otherwise the child is ticked and its result returned; only `Success`
///   restarts the cooldown
/// - If the duration cannot be read from the blackboard, returns `Error`
/// - Whenever the child is not ticked, a running child is aborted first
///
/// The duration is resolved on every tick, so a variable or blackboard
/// entry may change it while the cooldown is running.
pub struct Cooldown<C> {
    child: Box<dyn Behavior<C>>,
    window: Window,
    last_success: Option<Stamp>,
    status: Option<Status>,
}

impl<C> Cooldown<C> {
    /// Creates a cooldown lasting a fixed number of frames.
    pub fn of_frames(frames: u64, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_window(Window::Frames(Param::Const(frames)), child)
    }

    /// Reads the frame count from `frames` on every tick.
    pub fn of_frames_variable(frames: Variable<u64>, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_window(Window::Frames(Param::Variable(frames)), child)
    }

    /// Reads a `u64` frame count from the blackboard entry `name`.
    pub fn of_frames_blackboard(name: impl Into<String>, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_window(Window::Frames(Param::Blackboard(name.into())), child)
    }

    /// # Panics
    ///
    /// Panics if `seconds` is negative or not finite.
    pub fn of_seconds(seconds: f64, child: Box<dyn Behavior<C>>) -> Self {
        match Self::try_of_seconds(seconds, child) {
            Ok(cooldown) => cooldown,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`Cooldown::of_seconds`].
    pub fn try_of_seconds(seconds: f64, child: Box<dyn Behavior<C>>) -> Result<Self, BuildError> {
        let window = Window::Seconds(Param::Const(seconds));
        window.check("Cooldown")?;
        Ok(Self::with_window(window, child))
    }

    /// Reads the number of seconds from `seconds` on every tick.
    pub fn of_seconds_variable(seconds: Variable<f64>, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_window(Window::Seconds(Param::Variable(seconds)), child)
    }

    /// Reads an `f64` number of seconds from the blackboard entry `name`.
    pub fn of_seconds_blackboard(name: impl Into<String>, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_window(Window::Seconds(Param::Blackboard(name.into())), child)
    }

    fn with_window(window: Window, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            window,
            last_success: None,
            status: None,
        }
    }

    /// Whether a success has been recorded since initialization.
    pub fn has_triggered(&self) -> bool {
        self.last_success.is_some()
    }

    pub fn child(&self) -> &dyn Behavior<C> {
        self.child.as_ref()
    }

    fn finish(&mut self, status: Status) -> Status {
        self.status = Some(status);
        status
    }
}

impl<C: Clock + Blackboard> Behavior<C> for Cooldown<C> {
    fn initialize(&mut self) {
        self.last_success = None;
        self.status = None;
        self.child.initialize();
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let span = match self.window.resolve(ctx) {
            Ok(span) => span,
            Err(error) => {
                tracing::warn!("Cooldown: {}", error);
                self.child.abort(ctx);
                return self.finish(Status::Error);
            }
        };

        if let Some(since) = self.last_success
            && !span.has_elapsed(since, ctx)
        {
            tracing::trace!("Cooldown: blocked, {} not yet elapsed", span);
            // A duration raised mid-run can block a child that is still going.
            self.child.abort(ctx);
            return self.finish(Status::Failure);
        }

        let status = tick_child(self.child.as_mut(), ctx);
        if status == Status::Success {
            self.last_success = Some(Stamp::now(ctx));
        }
        self.finish(status)
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
