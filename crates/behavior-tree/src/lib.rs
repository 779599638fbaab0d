//! Real-time behavior tree engine.
//!
//! Trees are ticked once per simulation step by an external driver. Work
//! that spans several steps reports [`Status::Running`], composites remember
//! which child is active, and a parent can cancel a running subtree with an
//! explicit, strictly downward [`Behavior::abort`].
//!
//! - **Five-valued status**: Success, Failure, Running, Error, Abort
//! - **Lifecycle**: initialize, tick, abort, dispose
//! - **No global state**: time and shared data come from the context through
//!   the [`Clock`] and [`Blackboard`] traits
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Tick outcome
//! - Leaf nodes: [`Action`], [`Condition`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`ActiveSelector`],
//!   [`Concurrent`], [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`Repeater`], [`Until`], [`While`],
//!   [`Cooldown`], [`Limit`]
//! - Driver: [`Tree`]
//!
//! # Example
//!
//! ```
//! use behavior_tree::{Blackboard, Status, Tree, TickContext, action, condition, selector, sequence};
//!
//! let root = selector(vec![
//!     sequence(vec![
//!         condition(|ctx: &TickContext| ctx.has("enemy")),
//!         action(|_: &mut TickContext| Status::Running),
//!     ]),
//!     action(|_: &mut TickContext| Status::Success),
//! ]);
//!
//! let mut tree = Tree::new(root);
//! let mut ctx = TickContext::new();
//! tree.initialize().unwrap();
//!
//! assert_eq!(tree.tick(&mut ctx), Ok(Status::Success));
//! ctx.set("enemy", 1_u32);
//! assert_eq!(tree.tick(&mut ctx), Ok(Status::Running));
//! ```

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod status;
pub mod tree;
pub mod variable;

#[cfg(test)]
mod testing;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use blackboard::{Blackboard, MemoryBlackboard};
pub use builder::{
    action, active_selector, concurrent, condition, fallible_condition, inverter, parallel,
    repeat_while, repeater, selector, sequence, until,
};
pub use clock::{Clock, FrameClock};
pub use composite::{ActiveSelector, Concurrent, Mode, Parallel, Selector, Sequence};
pub use context::TickContext;
pub use decorator::{Cooldown, Inverter, Limit, Repeater, Until, While};
pub use error::{BlackboardError, BuildError, TreeError};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use tree::{Tree, TreeConfig, TreeState};
pub use variable::Variable;
