//! Status returned by behavior nodes.

/// The result of ticking a behavior node.
///
/// # Real-time Semantics
///
/// A node is ticked once per simulation step. Work that spans several steps
/// reports `Running` until it finishes; every other variant is terminal for
/// the current activation.
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
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action reached its goal.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not reach its goal.
    Failure,

    /// The behavior has not finished and expects to be ticked again.
    Running,

    /// The behavior finished exceptionally: required external data was
    /// missing or wrong-typed, or a precondition was violated.
    ///
    /// Distinct from `Failure` and never downgraded to it by composites.
    Error,

    /// The behavior was cancelled by its parent while running.
    ///
    /// Never returned by a node's own tick; only assigned through
    /// [`Behavior::abort`](crate::Behavior::abort).
    Abort,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Error`.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Status::Error)
    }

    /// Returns `true` if this status is `Abort`.
    #[inline]
    pub fn is_aborted(self) -> bool {
        matches!(self, Status::Abort)
    }

    /// Returns `true` for every status except `Running`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps Success and Failure. Every other status is returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}
