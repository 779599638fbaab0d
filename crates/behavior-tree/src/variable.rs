//! Externally-supplied values shared between the host and the tree.

use std::sync::{Arc, PoisonError, RwLock};

/// A shared, cloneable cell.
///
/// The host keeps one clone and updates it between ticks; nodes built with a
/// `Variable` read the current value whenever they need it.
///
/// ```rust
/// use behavior_tree::Variable;
///
/// let repeats = Variable::new(3_u32);
/// let handle = repeats.clone();
/// handle.set(5);
/// assert_eq!(repeats.get(), 5);
/// ```
#[derive(Debug, Default)]
pub struct Variable<T> {
    value: Arc<RwLock<T>>,
}

impl<T> Clone for Variable<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: Copy> Variable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    pub fn get(&self) -> T {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}
