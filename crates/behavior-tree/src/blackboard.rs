//! Named key-value store consulted by leaves and decorators.
//!
//! The store itself belongs to the host. Nodes only see it through the
//! [`Blackboard`] capability implemented by their context, which keeps every
//! node testable against a [`MemoryBlackboard`].

use std::any::{Any, type_name};
use std::collections::BTreeMap;

use crate::BlackboardError;

/// Typed access to a store keyed by name.
///
/// Writes are last-write-wins. No transactional or ordering guarantees are
/// required by the engine.
pub trait Blackboard {
    /// Borrow the value stored under `name` as a `T`.
    ///
    /// # Errors
    ///
    /// [`BlackboardError::Missing`] if nothing is stored under `name`,
    /// [`BlackboardError::TypeMismatch`] if the stored value is not a `T`.
    fn try_get<T: Any>(&self, name: &str) -> Result<&T, BlackboardError>;

    /// Store `value` under `name`, replacing any previous value.
    fn set<T: Any + Send + Sync>(&mut self, name: &str, value: T);

    /// Returns `true` if a value of any type is stored under `name`.
    fn has(&self, name: &str) -> bool;

    /// Remove the value stored under `name`. Returns `true` if one existed.
    fn remove(&mut self, name: &str) -> bool;
}

/// In-memory blackboard.
///
/// Entries are kept in a `BTreeMap` so iteration order (and therefore any
/// debug output) is deterministic.
#[derive(Default)]
pub struct MemoryBlackboard {
    values: BTreeMap<String, Box<dyn Any + Send + Sync>>,
}

impl MemoryBlackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Mutably borrow the value stored under `name` as a `T`.
    pub fn try_get_mut<T: Any>(&mut self, name: &str) -> Result<&mut T, BlackboardError> {
        let value = self
            .values
            .get_mut(name)
            .ok_or_else(|| BlackboardError::Missing {
                name: name.to_owned(),
            })?;
        value
            .downcast_mut::<T>()
            .ok_or_else(|| BlackboardError::TypeMismatch {
                name: name.to_owned(),
                expected: type_name::<T>(),
            })
    }

    /// Names of all stored entries, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl Blackboard for MemoryBlackboard {
    fn try_get<T: Any>(&self, name: &str) -> Result<&T, BlackboardError> {
        let value = self.values.get(name).ok_or_else(|| BlackboardError::Missing {
            name: name.to_owned(),
        })?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| BlackboardError::TypeMismatch {
                name: name.to_owned(),
                expected: type_name::<T>(),
            })
    }

    fn set<T: Any + Send + Sync>(&mut self, name: &str, value: T) {
        self.values.insert(name.to_owned(), Box::new(value));
    }

    fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn remove(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }
}

impl std::fmt::Debug for MemoryBlackboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBlackboard")
            .field("names", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_has_remove() {
        let mut bb = MemoryBlackboard::new();
        assert!(!bb.has("hp"));

        bb.set("hp", 10_u32);
        assert!(bb.has("hp"));
        assert_eq!(bb.try_get::<u32>("hp"), Ok(&10));

        bb.set("hp", 7_u32);
        assert_eq!(bb.try_get::<u32>("hp"), Ok(&7));

        assert!(bb.remove("hp"));
        assert!(!bb.remove("hp"));
        assert!(bb.is_empty());
    }

    #[test]
    fn missing_entry_is_reported_by_name() {
        let bb = MemoryBlackboard::new();
        assert_eq!(
            bb.try_get::<u64>("cooldown"),
            Err(BlackboardError::Missing {
                name: "cooldown".into()
            })
        );
    }

    #[test]
    fn wrong_type_is_a_mismatch() {
        let mut bb = MemoryBlackboard::new();
        bb.set("cooldown", 2.5_f32);

        let err = bb.try_get::<f64>("cooldown").unwrap_err();
        assert!(matches!(err, BlackboardError::TypeMismatch { ref name, .. } if name == "cooldown"));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut bb = MemoryBlackboard::new();
        bb.set("count", 1_u32);
        *bb.try_get_mut::<u32>("count").unwrap() += 1;
        assert_eq!(bb.try_get::<u32>("count"), Ok(&2));
    }
}
