//! Shared fixtures for integration tests.
//!
//! Leaves are scripted through the blackboard: leaf `name` returns the
//! [`Status`] stored under `name` and counts its ticks and aborts under
//! `name.ticks` and `name.aborts`.

#![allow(dead_code)]

use behavior_tree::{Action, Behavior, Blackboard, Status, TickContext};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test output. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A leaf returning whatever status the blackboard holds under `name`.
///
/// Reports `Error` when no status has been scripted.
pub fn scripted(name: &'static str) -> Box<dyn Behavior<TickContext>> {
    let ticks = format!("{name}.ticks");
    let aborts = format!("{name}.aborts");
    let action = Action::new(move |ctx: &mut TickContext| {
        bump(ctx, &ticks);
        ctx.try_get::<Status>(name).copied().unwrap_or(Status::Error)
    })
    .with_abort(move |ctx: &mut TickContext| bump(ctx, &aborts));
    Box::new(action)
}

/// Context with the given leaf statuses already scripted.
pub fn context(script: &[(&str, Status)]) -> TickContext {
    let mut ctx = TickContext::new();
    for &(name, status) in script {
        ctx.set(name, status);
    }
    ctx
}

pub fn ticks(ctx: &TickContext, name: &str) -> u32 {
    count(ctx, &format!("{name}.ticks"))
}

pub fn aborts(ctx: &TickContext, name: &str) -> u32 {
    count(ctx, &format!("{name}.aborts"))
}

fn count(ctx: &TickContext, key: &str) -> u32 {
    ctx.try_get::<u32>(key).copied().unwrap_or(0)
}

fn bump(ctx: &mut TickContext, key: &str) {
    let next = count(ctx, key) + 1;
    ctx.set(key, next);
}
