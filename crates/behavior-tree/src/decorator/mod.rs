//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or gate its
//! execution.
//!
//! - Result mapping: [`Inverter`] (NOT logic)
//! - Looping: [`Repeater`], [`Until`], [`While`]
//! - Timing gates: [`Cooldown`], [`Limit`], measured in frames or seconds
//!   read from the context's [`Clock`](crate::Clock), with the duration
//!   fixed at build time, held in a [`Variable`](crate::Variable), or read
//!   from the [`Blackboard`](crate::Blackboard) on every tick
//!
//! `Error` from the child always passes through unchanged.

mod cooldown;
mod inverter;
mod limit;
mod looping;
mod repeater;
mod timing;

pub use cooldown::Cooldown;
pub use inverter::Inverter;
pub use limit::Limit;
pub use looping::{Until, While};
pub use repeater::Repeater;

pub(crate) use crate::behavior::tick_child;
