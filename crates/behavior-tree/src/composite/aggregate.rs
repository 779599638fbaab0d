//! Multi-child aggregators: [`Concurrent`] and [`Parallel`].
//!
//! Both tick every relevant child on each tick, in build order, and only
//! then combine the results:
//!
//! 1. any child `Error` ⇒ `Error`
//! 2. successes satisfy the success [`Mode`] ⇒ `Success`
//! 3. failures satisfy the failure [`Mode`] ⇒ `Failure`
//! 4. no child is still running ⇒ `Failure` (settled without meeting
//!    either threshold)
//! 5. otherwise ⇒ `Running`
//!
//! When the combined result is terminal, children still running are aborted.

use super::{check_children, dispose_all, initialize_all};
use crate::behavior::tick_child;
use crate::{Behavior, BuildError, Status};

/// Threshold for counting children towards a success or failure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    /// Every child must report the outcome.
    All,
    /// At least one child must report the outcome.
    Any,
}

impl Mode {
    fn is_met(self, count: usize, total: usize) -> bool {
        match self {
            Mode::All => count == total,
            Mode::Any => count > 0,
        }
    }
}

/// Combine this tick's child results.
fn aggregate(results: &[Option<Status>], success: Mode, failure: Mode) -> Status {
    let total = results.len();
    let (mut successes, mut failures, mut running) = (0, 0, 0);
    let mut error = false;

    for result in results.iter().flatten() {
        match result {
            Status::Success => successes += 1,
            Status::Failure => failures += 1,
            Status::Running => running += 1,
            Status::Error | Status::Abort => error = true,
        }
    }

    if error {
        Status::Error
    } else if success.is_met(successes, total) {
        Status::Success
    } else if failure.is_met(failures, total) {
        Status::Failure
    } else if running == 0 {
        Status::Failure
    } else {
        Status::Running
    }
}

fn abort_running<C>(children: &mut [Box<dyn Behavior<C>>], ctx: &mut C) {
    for child in children.iter_mut().filter(|child| child.is_running()) {
        child.abort(ctx);
    }
}

/// Ticks every child on every tick, finished or not.
///
/// Suited to children that are meant to re-run each cycle, such as
/// conditions guarding a long-running action.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Behavior, Concurrent, Mode, Status, action, condition};
///
/// // Keep moving while the path stays clear; stop as soon as either fails.
/// let mut guarded: Concurrent<bool> = Concurrent::with_modes(
///     vec![
///         condition(|clear: &bool| *clear),
///         action(|_: &mut bool| Status::Running),
///     ],
///     Mode::All,
///     Mode::Any,
/// );
/// guarded.initialize();
///
/// assert_eq!(guarded.tick(&mut true), Status::Running);
/// assert_eq!(guarded.tick(&mut false), Status::Failure);
/// ```
pub struct Concurrent<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    success: Mode,
    failure: Mode,
    results: Vec<Option<Status>>,
    status: Option<Status>,
}

impl<C> Concurrent<C> {
    /// Creates a concurrent node using `mode` for both thresholds.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>, mode: Mode) -> Self {
        Self::with_modes(children, mode, mode)
    }

    /// Creates a concurrent node with independent success/failure thresholds.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn with_modes(children: Vec<Box<dyn Behavior<C>>>, success: Mode, failure: Mode) -> Self {
        match Self::try_new(children, success, failure) {
            Ok(concurrent) => concurrent,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`Concurrent::with_modes`]. Fails if `children` is
    /// empty.
    pub fn try_new(
        children: Vec<Box<dyn Behavior<C>>>,
        success: Mode,
        failure: Mode,
    ) -> Result<Self, BuildError> {
        check_children("Concurrent", &children)?;
        let results = vec![None; children.len()];
        Ok(Self {
            children,
            success,
            failure,
            results,
            status: None,
        })
    }

    /// How many children must succeed for the node to succeed.
    pub fn success_mode(&self) -> Mode {
        self.success
    }

    /// How many children must fail for the node to fail.
    pub fn failure_mode(&self) -> Mode {
        self.failure
    }

    /// Child behaviors in build order.
    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Concurrent<C> {
    fn initialize(&mut self) {
        self.results.fill(None);
        self.status = None;
        initialize_all(&mut self.children);
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        for (child, result) in self.children.iter_mut().zip(self.results.iter_mut()) {
            *result = Some(tick_child(child.as_mut(), ctx));
        }

        let status = aggregate(&self.results, self.success, self.failure);
        if status.is_terminal() {
            abort_running(&mut self.children, ctx);
        }
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        abort_running(&mut self.children, ctx);
        self.status = Some(Status::Abort);
    }

    fn dispose(&mut self) {
        dispose_all(&mut self.children);
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

/// Ticks every unfinished child until the node as a whole finishes.
///
/// A child that reached a terminal result keeps it for the rest of the
/// activation and is not ticked again. Once the node returns a terminal
/// status, the next tick starts a new activation with every child eligible.
pub struct Parallel<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    success: Mode,
    failure: Mode,
    results: Vec<Option<Status>>,
    status: Option<Status>,
}

impl<C> Parallel<C> {
    /// Creates a parallel node using `mode` for both thresholds.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>, mode: Mode) -> Self {
        Self::with_modes(children, mode, mode)
    }

    /// Creates a parallel node with independent success/failure thresholds.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn with_modes(children: Vec<Box<dyn Behavior<C>>>, success: Mode, failure: Mode) -> Self {
        match Self::try_new(children, success, failure) {
            Ok(parallel) => parallel,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`Parallel::with_modes`]. Fails if `children` is
    /// empty.
    pub fn try_new(
        children: Vec<Box<dyn Behavior<C>>>,
        success: Mode,
        failure: Mode,
    ) -> Result<Self, BuildError> {
        check_children("Parallel", &children)?;
        let results = vec![None; children.len()];
        Ok(Self {
            children,
            success,
            failure,
            results,
            status: None,
        })
    }

    /// How many children must succeed for the node to succeed.
    pub fn success_mode(&self) -> Mode {
        self.success
    }

    /// How many children must fail for the node to fail.
    pub fn failure_mode(&self) -> Mode {
        self.failure
    }

    /// Child behaviors in build order.
    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn initialize(&mut self) {
        self.results.fill(None);
        self.status = None;
        initialize_all(&mut self.children);
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.status.is_some_and(Status::is_terminal) {
            self.results.fill(None);
        }

        for (child, result) in self.children.iter_mut().zip(self.results.iter_mut()) {
            if matches!(result, None | Some(Status::Running)) {
                *result = Some(tick_child(child.as_mut(), ctx));
            }
        }

        let status = aggregate(&self.results, self.success, self.failure);
        if status.is_terminal() {
            abort_running(&mut self.children, ctx);
        }
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        abort_running(&mut self.children, ctx);
        self.status = Some(Status::Abort);
    }

    fn dispose(&mut self) {
        dispose_all(&mut self.children);
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}
