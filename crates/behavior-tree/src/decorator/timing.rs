//! Durations and timestamps shared by the timing decorators.

use std::any::Any;
use std::fmt;

use crate::{Blackboard, BlackboardError, BuildError, Clock, Variable};

/// Where a duration comes from.
pub(crate) enum Param<T> {
    Const(T),
    Variable(Variable<T>),
    Blackboard(String),
}

impl<T: Copy + Any> Param<T> {
    fn resolve<C: Blackboard>(&self, ctx: &C) -> Result<T, BlackboardError> {
        match self {
            Param::Const(value) => Ok(*value),
            Param::Variable(variable) => Ok(variable.get()),
            Param::Blackboard(name) => ctx.try_get::<T>(name).copied(),
        }
    }
}

/// A duration in frames or seconds, not yet resolved.
pub(crate) enum Window {
    Frames(Param<u64>),
    Seconds(Param<f64>),
}

impl Window {
    /// Rejects a constant number of seconds that can never be measured.
    pub(crate) fn check(&self, kind: &'static str) -> Result<(), BuildError> {
        match self {
            Window::Seconds(Param::Const(seconds))
                if !seconds.is_finite() || *seconds < 0.0 =>
            {
                Err(BuildError::InvalidSeconds {
                    kind,
                    seconds: *seconds,
                })
            }
            _ => Ok(()),
        }
    }

    /// Read the current duration.
    pub(crate) fn resolve<C: Blackboard>(&self, ctx: &C) -> Result<Span, BlackboardError> {
        match self {
            Window::Frames(frames) => frames.resolve(ctx).map(Span::Frames),
            Window::Seconds(seconds) => seconds.resolve(ctx).map(Span::Seconds),
        }
    }
}

/// A resolved duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Span {
    Frames(u64),
    Seconds(f64),
}

impl Span {
    pub(crate) fn has_elapsed<C: Clock>(self, since: Stamp, ctx: &C) -> bool {
        match self {
            Span::Frames(frames) => ctx.frame().saturating_sub(since.frame) >= frames,
            Span::Seconds(seconds) => ctx.seconds() - since.seconds >= seconds,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Span::Frames(frames) => write!(f, "{} frames", frames),
            Span::Seconds(seconds) => write!(f, "{}s", seconds),
        }
    }
}

/// A point in time, captured in both units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Stamp {
    frame: u64,
    seconds: f64,
}

impl Stamp {
    pub(crate) fn now<C: Clock>(ctx: &C) -> Self {
        Self {
            frame: ctx.frame(),
            seconds: ctx.seconds(),
        }
    }
}
