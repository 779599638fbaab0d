//! Tree driver.
//!
//! [`Tree`] owns a root behavior and enforces the lifecycle around it:
//! built, initialized once, ticked any number of times, disposed once.
//! Out-of-order calls are reported as [`TreeError`] rather than reaching the
//! nodes.

use crate::{Behavior, Status, TreeError};

/// Lifecycle position of a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TreeState {
    Built,
    Initialized,
    Disposed,
}

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Name recorded on the tracing span around every tick.
    pub name: String,

    /// Restart the root after it returns a terminal status, so the next
    /// tick begins a fresh activation.
    pub reinitialize_on_completion: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            name: "tree".to_string(),
            reinitialize_on_completion: false,
        }
    }
}

/// Owns a root behavior and drives it tick by tick.
///
/// # Example
///
/// ```
/// use behavior_tree::{Status, Tree, TickContext, action};
///
/// let mut tree = Tree::new(action(|_: &mut TickContext| Status::Success));
/// let mut ctx = TickContext::new();
///
/// tree.initialize().unwrap();
/// assert_eq!(tree.tick(&mut ctx), Ok(Status::Success));
/// tree.dispose().unwrap();
/// ```
pub struct Tree<C> {
    root: Box<dyn Behavior<C>>,
    config: TreeConfig,
    state: TreeState,
    ticks: u64,
}

impl<C> Tree<C> {
    /// Creates a tree around `root` with the default [`TreeConfig`].
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self::with_config(root, TreeConfig::default())
    }

    /// Creates a tree around `root` with explicit settings.
    pub fn with_config(root: Box<dyn Behavior<C>>, config: TreeConfig) -> Self {
        Self {
            root,
            config,
            state: TreeState::Built,
            ticks: 0,
        }
    }

    /// Prepare the whole tree for its first tick.
    pub fn initialize(&mut self) -> Result<(), TreeError> {
        match self.state {
            TreeState::Built => {
                self.root.initialize();
                self.state = TreeState::Initialized;
                tracing::debug!("Tree {}: initialized", self.config.name);
                Ok(())
            }
            TreeState::Initialized => Err(TreeError::AlreadyInitialized),
            TreeState::Disposed => Err(TreeError::Disposed),
        }
    }

    /// Tick the root once and return its status unchanged.
    pub fn tick(&mut self, ctx: &mut C) -> Result<Status, TreeError> {
        self.ensure_initialized()?;

        let span = tracing::trace_span!("tree", name = %self.config.name, tick = self.ticks);
        let _guard = span.enter();

        let status = self.root.tick(ctx);
        self.ticks += 1;
        tracing::trace!("Tree: root returned {}", status);

        if self.config.reinitialize_on_completion && status.is_terminal() {
            tracing::debug!("Tree {}: completed with {}, restarting", self.config.name, status);
            self.root.initialize();
        }
        Ok(status)
    }

    /// Abort the root if it is running.
    pub fn abort(&mut self, ctx: &mut C) -> Result<(), TreeError> {
        self.ensure_initialized()?;
        if self.root.is_running() {
            tracing::debug!("Tree {}: aborting running root", self.config.name);
        }
        self.root.abort(ctx);
        Ok(())
    }

    /// Tear down the subtree. No further calls are accepted.
    pub fn dispose(&mut self) -> Result<(), TreeError> {
        if self.state == TreeState::Disposed {
            return Err(TreeError::Disposed);
        }
        self.root.dispose();
        self.state = TreeState::Disposed;
        tracing::debug!("Tree {}: disposed after {} ticks", self.config.name, self.ticks);
        Ok(())
    }

    /// Last status observed on the root.
    pub fn status(&self) -> Option<Status> {
        self.root.status()
    }

    pub fn root(&self) -> &dyn Behavior<C> {
        self.root.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    fn ensure_initialized(&self) -> Result<(), TreeError> {
        match self.state {
            TreeState::Initialized => Ok(()),
            TreeState::Disposed => Err(TreeError::Disposed),
            state => Err(TreeError::NotInitialized { state }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use crate::Status::*;
    use crate::testing::{TestContext, scripted, scripted_leaves};

    #[test]
    fn tick_returns_root_status_unchanged() {
        let mut tree = Tree::new(scripted(0));
        tree.initialize().unwrap();

        let mut ctx = TestContext::new(1);
        for status in [Running, Failure, Error, Success] {
            ctx.script(0, status);
            assert_eq!(tree.tick(&mut ctx), Ok(status));
        }
        assert_eq!(tree.ticks(), 4);
        assert_eq!(tree.status(), Some(Success));
    }

    #[test]
    fn tick_before_initialize_is_rejected() {
        let mut tree = Tree::new(scripted(0));
        let mut ctx = TestContext::new(1);

        assert_eq!(
            tree.tick(&mut ctx),
            Err(TreeError::NotInitialized {
                state: TreeState::Built
            })
        );
        assert_eq!(ctx.ticks, vec![0]);
    }

    #[test]
    fn lifecycle_calls_are_ordered() {
        let mut tree = Tree::new(scripted(0));
        let mut ctx = TestContext::new(1);

        tree.initialize().unwrap();
        assert_eq!(tree.initialize(), Err(TreeError::AlreadyInitialized));
        tree.dispose().unwrap();
        assert_eq!(tree.state(), TreeState::Disposed);

        assert_eq!(tree.tick(&mut ctx), Err(TreeError::Disposed));
        assert_eq!(tree.abort(&mut ctx), Err(TreeError::Disposed));
        assert_eq!(tree.initialize(), Err(TreeError::Disposed));
        assert_eq!(tree.dispose(), Err(TreeError::Disposed));
    }

    #[test]
    fn abort_cancels_running_root() {
        let mut tree: Tree<TestContext> = Tree::new(Box::new(Sequence::new(scripted_leaves(2))));
        tree.initialize().unwrap();

        let mut ctx = TestContext::with_outcomes(&[Success, Running]);
        assert_eq!(tree.tick(&mut ctx), Ok(Running));
        tree.abort(&mut ctx).unwrap();

        assert_eq!(tree.status(), Some(Abort));
        assert_eq!(ctx.aborts, vec![0, 1]);
    }

    #[test]
    fn reinitialize_on_completion_restarts_root() {
        let config = TreeConfig {
            name: "restart".into(),
            reinitialize_on_completion: true,
        };
        let mut tree: Tree<TestContext> =
            Tree::with_config(Box::new(Sequence::new(scripted_leaves(2))), config);
        tree.initialize().unwrap();

        let mut ctx = TestContext::with_outcomes(&[Success, Running]);
        assert_eq!(tree.tick(&mut ctx), Ok(Running));
        ctx.script(1, Success);
        assert_eq!(tree.tick(&mut ctx), Ok(Success));
        assert_eq!(tree.status(), None);

        assert_eq!(tree.tick(&mut ctx), Ok(Success));
        assert_eq!(ctx.ticks, vec![2, 3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_fills_missing_fields_from_default() {
        let config: TreeConfig = serde_json::from_str(r#"{"name":"guard"}"#).unwrap();
        assert_eq!(config.name, "guard");
        assert!(!config.reinitialize_on_completion);
    }

    #[test]
    fn state_displays_in_snake_case() {
        assert_eq!(TreeState::Initialized.to_string(), "initialized");
    }
}
