use super::tick_child;
use super::timing::{Param, Stamp, Window};
use crate::{Behavior, Blackboard, BuildError, Clock, Status, Variable};

/// Lets its child run only for a bounded time.
///
/// # Semantics
///
/// - The window opens on the first tick after [`initialize`](Behavior::initialize)
/// - Inside the window the child is ticked and its result returned
/// - Once the window has elapsed, a running child is aborted and the limit
///   returns `Failure` on this and every later tick, without ticking the
///   child, until re-initialized
/// - If the duration cannot be read from the blackboard, a running child is
///   aborted and the limit returns `Error`
pub struct Limit<C> {
    child: Box<dyn Behavior<C>>,
    window: Window,
    started: Option<Stamp>,
    expired: bool,
    status: Option<Status>,
}

impl<C> Limit<C> {
    /// Creates a limit lasting a fixed number of frames.
    pub fn of_frames(frames: u64, child: Box<dyn Behavior<C>>) -> Self {
        Self::with_window(Window::Frames(Param::Const(frames)), child)
    }

    /// Reads the frame budget from `frames` on every tick.
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
            Ok(limit) => limit,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`Limit::of_seconds`].
    pub fn try_of_seconds(seconds: f64, child: Box<dyn Behavior<C>>) -> Result<Self, BuildError> {
        let window = Window::Seconds(Param::Const(seconds));
        window.check("Limit")?;
        Ok(Self::with_window(window, child))
    }

    /// Reads the budget in seconds from `seconds` on every tick.
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
            started: None,
            expired: false,
            status: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn child(&self) -> &dyn Behavior<C> {
        self.child.as_ref()
    }

    fn finish(&mut self, status: Status) -> Status {
        self.status = Some(status);
        status
    }
}

impl<C: Clock + Blackboard> Behavior<C> for Limit<C> {
    fn initialize(&mut self) {
        self.started = None;
        self.expired = false;
        self.status = None;
        self.child.initialize();
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.expired {
            return self.finish(Status::Failure);
        }

        let span = match self.window.resolve(ctx) {
            Ok(span) => span,
            Err(error) => {
                tracing::warn!("Limit: {}", error);
                self.child.abort(ctx);
                return self.finish(Status::Error);
            }
        };

        let started = *self.started.get_or_insert_with(|| Stamp::now(ctx));
        if span.has_elapsed(started, ctx) {
            tracing::debug!("Limit: expired after {}", span);
            self.expired = true;
            self.child.abort(ctx);
            return self.finish(Status::Failure);
        }

        let status = tick_child(self.child.as_mut(), ctx);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status::*;
    use crate::testing::{TestContext, scripted};

    #[test]
    fn expires_after_frame_budget() {
        let mut limit = Limit::of_frames(3, scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        for _ in 0..3 {
            assert_eq!(limit.tick(&mut ctx), Running);
            ctx.clock.advance(0.016);
        }
        assert_eq!(limit.tick(&mut ctx), Failure);
        assert_eq!(ctx.aborts, vec![1]);
        assert_eq!(ctx.ticks, vec![3]);

        ctx.clock.advance(0.016);
        assert_eq!(limit.tick(&mut ctx), Failure);
        assert_eq!(ctx.ticks, vec![3]);
        assert_eq!(ctx.aborts, vec![1]);
    }

    #[test]
    fn finished_child_is_not_aborted_on_expiry() {
        let mut limit = Limit::of_frames(1, scripted(0));
        limit.initialize();

        let mut ctx = TestContext::new(1);
        assert_eq!(limit.tick(&mut ctx), Success);
        ctx.clock.advance(0.016);
        assert_eq!(limit.tick(&mut ctx), Failure);
        assert_eq!(ctx.aborts, vec![0]);
    }

    #[test]
    fn seconds_limit_uses_clock_time() {
        let mut limit = Limit::of_seconds(1.0, scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        assert_eq!(limit.tick(&mut ctx), Running);
        ctx.clock.set(1, 0.9);
        assert_eq!(limit.tick(&mut ctx), Running);
        ctx.clock.set(2, 1.0);
        assert_eq!(limit.tick(&mut ctx), Failure);
        assert!(limit.is_expired());
    }

    #[test]
    fn initialize_rearms_window() {
        let mut limit = Limit::of_frames(1, scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        limit.tick(&mut ctx);
        ctx.clock.advance(0.016);
        assert_eq!(limit.tick(&mut ctx), Failure);

        limit.initialize();
        assert_eq!(limit.tick(&mut ctx), Running);
    }

    #[test]
    fn blackboard_duration_must_be_present() {
        let mut limit = Limit::of_frames_blackboard("budget", scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        assert_eq!(limit.tick(&mut ctx), Error);
        ctx.set("budget", 2_u64);
        assert_eq!(limit.tick(&mut ctx), Running);
    }

    #[test]
    fn abort_reaches_running_child() {
        let mut limit = Limit::of_frames(10, scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        limit.tick(&mut ctx);
        limit.abort(&mut ctx);
        assert_eq!(limit.status(), Some(Abort));
        assert_eq!(ctx.aborts, vec![1]);
    }

    #[test]
    fn frames_read_from_variable() {
        let frames = Variable::new(5);
        let mut limit = Limit::of_frames_variable(frames.clone(), scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        assert_eq!(limit.tick(&mut ctx), Running);
        ctx.clock.advance(0.016);
        assert_eq!(limit.tick(&mut ctx), Running);

        frames.set(1);
        assert_eq!(limit.tick(&mut ctx), Failure);
        assert_eq!(ctx.aborts, vec![1]);
    }

    #[test]
    fn seconds_read_from_blackboard() {
        let mut limit = Limit::of_seconds_blackboard("budget", scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        ctx.set("budget", 0.5_f64);
        assert_eq!(limit.tick(&mut ctx), Running);
        ctx.clock.set(3, 0.4);
        assert_eq!(limit.tick(&mut ctx), Running);
        ctx.clock.set(4, 0.5);
        assert_eq!(limit.tick(&mut ctx), Failure);
        assert_eq!(ctx.aborts, vec![1]);
    }

    #[test]
    fn wrongly_typed_entry_is_error() {
        let mut limit = Limit::of_seconds_blackboard("budget", scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        ctx.set("budget", 1_u32);
        assert_eq!(limit.tick(&mut ctx), Error);
        assert_eq!(ctx.ticks, vec![0]);
    }

    #[test]
    fn lost_duration_aborts_running_child() {
        let mut limit = Limit::of_frames_blackboard("budget", scripted(0));
        limit.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running]);
        ctx.set("budget", 5_u64);
        assert_eq!(limit.tick(&mut ctx), Running);

        ctx.remove("budget");
        assert_eq!(limit.tick(&mut ctx), Error);
        assert_eq!(ctx.aborts, vec![1]);
        assert_eq!(limit.child().status(), Some(Abort));
    }
}
