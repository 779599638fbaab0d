//! Reactive priority selector.

use super::sequence::scan;
use super::{check_children, dispose_all, initialize_all};
use crate::{Behavior, BuildError, Status};

/// A selector that re-evaluates every child by priority on each tick.
///
/// # Semantics
///
/// Per-child rules match [`Selector`](super::Selector): `Failure` moves on
/// to the next child, anything else stops the scan and is returned. Unlike
/// `Selector`, the scan always restarts at the first child, so a
/// higher-priority child that becomes viable takes over immediately.
///
/// When the scan stops at a different child than the one left `Running` by
/// the previous tick, that previous child is aborted (together with its
/// running descendants) before the new result is returned.
pub struct ActiveSelector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current: Option<usize>,
    /// Child left `Running` by the previous tick.
    running: Option<usize>,
    status: Option<Status>,
}

impl<C> ActiveSelector<C> {
    /// Creates a new active selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        match Self::try_new(children) {
            Ok(selector) => selector,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a new active selector, rejecting an empty child list.
    pub fn try_new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self, BuildError> {
        check_children("ActiveSelector", &children)?;
        Ok(Self {
            children,
            current: None,
            running: None,
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

impl<C> Behavior<C> for ActiveSelector<C> {
    fn initialize(&mut self) {
        self.current = None;
        self.running = None;
        self.status = None;
        initialize_all(&mut self.children);
    }

    fn tick(&mut self, ctx: &mut C) -> Status {
        let previous = self.running.take();
        let (index, status) = scan(&mut self.children, 0, ctx, Status::Failure);

        if let Some(previous) = previous
            && previous != index
            && self.children[previous].is_running()
        {
            tracing::debug!(
                "ActiveSelector: child {} preempted by child {} ({}), aborting",
                previous,
                index,
                status
            );
            self.children[previous].abort(ctx);
        }

        self.current = Some(index);
        if status.is_running() {
            self.running = Some(index);
        }
        self.status = Some(status);
        status
    }

    fn abort(&mut self, ctx: &mut C) {
        if !self.is_running() {
            return;
        }
        if let Some(index) = self.running.take() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status::*;
    use crate::testing::{TestContext, scripted_leaves};

    #[test]
    fn rescans_from_first_child_every_tick() {
        let mut sel = ActiveSelector::new(scripted_leaves(5));
        sel.initialize();

        let mut ctx = TestContext::new(5);
        assert_eq!(sel.tick(&mut ctx), Success);
        assert_eq!(sel.current_index(), Some(0));

        ctx.script(0, Running);
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(sel.current_index(), Some(0));

        ctx.script(0, Failure);
        assert_eq!(sel.tick(&mut ctx), Success);
        assert_eq!(sel.current_index(), Some(1));
        assert_eq!(ctx.ticks, vec![3, 1, 0, 0, 0]);
    }

    #[test]
    fn higher_priority_success_aborts_running_child() {
        let mut sel = ActiveSelector::new(scripted_leaves(3));
        sel.initialize();

        let mut ctx = TestContext::with_outcomes(&[Failure, Failure, Running]);
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(sel.current_index(), Some(2));

        ctx.script(0, Success);
        assert_eq!(sel.tick(&mut ctx), Success);
        assert_eq!(sel.current_index(), Some(0));
        assert_eq!(sel.children()[2].status(), Some(Abort));
        assert_eq!(ctx.aborts, vec![0, 0, 1]);
    }

    #[test]
    fn higher_priority_running_child_takes_over() {
        let mut sel = ActiveSelector::new(scripted_leaves(2));
        sel.initialize();

        let mut ctx = TestContext::with_outcomes(&[Failure, Running]);
        sel.tick(&mut ctx);

        ctx.script(0, Running);
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(sel.current_index(), Some(0));
        assert_eq!(ctx.aborts, vec![0, 1]);

        // Staying on the same child never aborts it.
        assert_eq!(sel.tick(&mut ctx), Running);
        assert_eq!(ctx.aborts, vec![0, 1]);
    }

    #[test]
    fn error_preempts_running_child() {
        let mut sel = ActiveSelector::new(scripted_leaves(2));
        sel.initialize();

        let mut ctx = TestContext::with_outcomes(&[Failure, Running]);
        sel.tick(&mut ctx);

        ctx.script(0, Error);
        assert_eq!(sel.tick(&mut ctx), Error);
        assert_eq!(sel.children()[1].status(), Some(Abort));
    }

    #[test]
    fn running_child_that_finishes_is_not_aborted() {
        let mut sel = ActiveSelector::new(scripted_leaves(2));
        sel.initialize();

        let mut ctx = TestContext::with_outcomes(&[Running, Failure]);
        sel.tick(&mut ctx);

        // Child 0 now fails on its own; the scan moves on to child 1.
        ctx.script(0, Failure);
        assert_eq!(sel.tick(&mut ctx), Failure);
        assert_eq!(ctx.aborts, vec![0, 0]);
        assert_eq!(sel.current_index(), Some(1));
    }

    #[test]
    fn abort_cascades_into_running_child() {
        let mut sel = ActiveSelector::new(scripted_leaves(3));
        sel.initialize();

        let mut ctx = TestContext::with_outcomes(&[Failure, Running, Success]);
        sel.tick(&mut ctx);
        sel.abort(&mut ctx);

        assert_eq!(sel.status(), Some(Abort));
        assert_eq!(ctx.aborts, vec![0, 1, 0]);
    }
}
