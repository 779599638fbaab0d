//! Memory composites: [`Sequence`] and [`Selector`].

use super::{check_children, dispose_all, initialize_all};
use crate::behavior::tick_child;
use crate::{Behavior, BuildError, Status};

/// Ticks children in order from `start` while they report `proceed`.
///
/// Returns the index the scan stopped at and the status to propagate. A scan
/// that runs off the end stops at the last child with that child's status.
/// A child reporting `Abort` from its own tick broke the contract and is
/// treated as `Error`.
pub(crate) fn scan<C>(
    children: &mut [Box<dyn Behavior<C>>],
    start: usize,
    ctx: &mut C,
    proceed: Status,
) -> (usize, Status) {
    let last = children.len() - 1;
    let mut index = start;
    loop {
        let status = tick_child(children[index].as_mut(), ctx);
        if status != proceed || index == last {
            return (index, status);
        }
        index += 1;
    }
}

/// Executes child behaviors in sequence until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If a child returns `Failure` or `Error`, the sequence **stops immediately**
///   and returns it
/// - If a child returns `Running`, the sequence returns `Running` and
///   **resumes at that child** on the next tick, without re-checking earlier
///   children
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current: Option<usize>,
    status: Option<Status>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        match Self::try_new(children) {
            Ok(sequence) => sequence,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a new sequence, rejecting an empty child list.
    pub fn try_new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self, BuildError> {
        check_children("Sequence", &children)?;
        Ok(Self {
            children,
            current: None,
            status: None,
        })
    }

    /// Index of the child the last tick stopped at.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Child behaviors in build order.
    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn initialize(&mut self) {
        self.current = None;
        self.status = None;
        initialize_all(&mut self.children);
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = resume_index(self.status, self.current);
        let (index, status) = scan(&mut self.children, start, ctx, Status::Success);
        self.current = Some(index);
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        if let Some(index) = self.current {
            tracing::trace!("Sequence: aborting running child {}", index);
            self.children[index].abort(ctx);
        }
        self.status = Some(Status::Abort);
    }

    fn dispose(&mut self) {
        dispose_all(&mut self.children);
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

/// Executes child behaviors in sequence until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If a child returns `Success` or `Error`, the selector **stops immediately**
///   and returns it
/// - If a child returns `Running`, the selector returns `Running` and
///   **resumes at that child** on the next tick
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. For a
/// selector that re-checks higher-priority children every tick, see
/// [`ActiveSelector`](super::ActiveSelector).
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current: Option<usize>,
    status: Option<Status>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        match Self::try_new(children) {
            Ok(selector) => selector,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a new selector, rejecting an empty child list.
    pub fn try_new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self, BuildError> {
        check_children("Selector", &children)?;
        Ok(Self {
            children,
            current: None,
            status: None,
        })
    }

    /// Index of the child the last tick stopped at.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Child behaviors in build order.
    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn initialize(&mut self) {
        self.current = None;
        self.status = None;
        initialize_all(&mut self.children);
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = resume_index(self.status, self.current);
        let (index, status) = scan(&mut self.children, start, ctx, Status::Failure);
        self.current = Some(index);
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        if let Some(index) = self.current {
            tracing::trace!("Selector: aborting running child {}", index);
            self.children[index].abort(ctx);
        }
        self.status = Some(Status::Abort);
    }

    fn dispose(&mut self) {
        dispose_all(&mut self.children);
    }

    fn status(&self) -> Option<Status> {
        self.status
    }
}

/// Memory: resume at the running child, otherwise rescan from the start.
fn resume_index(status: Option<Status>, current: Option<usize>) -> usize {
    match (status, current) {
        (Some(Status::Running), Some(index)) => index,
        _ => 0,
    }
}
