//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! Children are fixed at construction and always visited in their build
//! order.
//!
//! - Memory selection: [`Sequence`] (AND logic) and [`Selector`] (OR logic)
//!   resume at the running child instead of rescanning.
//! - Reactive selection: [`ActiveSelector`] rescans from the first child on
//!   every tick and aborts a lower-priority child that loses control.
//! - Aggregation: [`Concurrent`] and [`Parallel`] tick every child each tick
//!   and combine the results through success/failure [`Mode`]s.

mod active_selector;
mod aggregate;
mod sequence;

pub use active_selector::ActiveSelector;
pub use aggregate::{Concurrent, Mode, Parallel};
pub use sequence::{Selector, Sequence};

use crate::{Behavior, BuildError};

/// Rejects a composite without children.
pub(crate) fn check_children<C>(
    kind: &'static str,
    children: &[Box<dyn Behavior<C>>],
) -> Result<(), BuildError> {
    if children.is_empty() {
        return Err(BuildError::NoChildren { kind });
    }
    Ok(())
}

pub(crate) fn initialize_all<C>(children: &mut [Box<dyn Behavior<C>>]) {
    for child in children.iter_mut() {
        child.initialize();
    }
}

pub(crate) fn dispose_all<C>(children: &mut [Box<dyn Behavior<C>>]) {
    for child in children.iter_mut() {
        child.dispose();
    }
}
