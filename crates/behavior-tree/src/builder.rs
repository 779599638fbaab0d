//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.
//!
//! Helpers for composites panic on an empty child list, like the
//! constructors they wrap. Timing decorators have several constructors each
//! and are boxed directly.

use crate::{
    Action, ActiveSelector, Behavior, BlackboardError, Concurrent, Condition, Inverter, Mode,
    Parallel, Repeater, Selector, Sequence, Status, Until, While,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a reactive selector node.
#[inline]
pub fn active_selector<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(ActiveSelector::new(children))
}

/// Creates a concurrent node using `mode` for both success and failure.
#[inline]
pub fn concurrent<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
    mode: Mode,
) -> Box<dyn Behavior<C>> {
    Box::new(Concurrent::new(children, mode))
}

/// Creates a parallel node using `mode` for both success and failure.
#[inline]
pub fn parallel<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
    mode: Mode,
) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::new(children, mode))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates a repeater running `child` exactly `count` times.
#[inline]
pub fn repeater<C: 'static>(count: u32, child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::new(count, child))
}

#[inline]
pub fn until<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Until::new(child))
}

/// Creates a [`While`] node (`while` is a keyword).
#[inline]
pub fn repeat_while<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(While::new(child))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C: 'static>(
    run: impl FnMut(&mut C) -> Status + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(run))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static>(
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}

/// Creates a condition leaf whose predicate may fail to read its inputs.
#[inline]
pub fn fallible_condition<C: 'static>(
    predicate: impl Fn(&C) -> Result<bool, BlackboardError> + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::fallible(predicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_compose_a_tree() {
        let mut root = selector(vec![
            sequence(vec![
                condition(|hp: &u32| *hp < 20),
                action(|hp: &mut u32| {
                    *hp += 50;
                    Status::Success
                }),
            ]),
            inverter(condition(|hp: &u32| *hp == 0)),
        ]);
        root.initialize();

        let mut hp = 10;
        assert_eq!(root.tick(&mut hp), Status::Success);
        assert_eq!(hp, 60);

        assert_eq!(root.tick(&mut hp), Status::Success);
        assert_eq!(hp, 60);
    }

    #[test]
    fn looping_helpers_wrap_children() {
        let flip = action(|n: &mut u32| {
            *n += 1;
            if *n % 2 == 0 {
                Status::Success
            } else {
                Status::Failure
            }
        });
        let mut root = repeater(2, until(flip));
        root.initialize();

        let mut n = 0;
        assert_eq!(root.tick(&mut n), Status::Running);
        assert_eq!(root.tick(&mut n), Status::Running);
        assert_eq!(root.tick(&mut n), Status::Running);
        assert_eq!(root.tick(&mut n), Status::Success);
        assert_eq!(n, 4);
    }
}
