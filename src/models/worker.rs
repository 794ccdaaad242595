//! Worker model.
//!
//! Workers are the entities that take tasks. Each worker has a name,
//! a single integer skill level, and an availability flag that flips
//! from available to unavailable the first time it is assigned a task.
//!
//! # Identity
//!
//! Two workers with the same name and skill compare equal, but the
//! registry keeps them as distinct entries. Each registered worker gets
//! a [`WorkerId`] (its registration index) which keys the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Registry-assigned worker handle (registration index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub usize);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// A worker that can be assigned at most one task per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Registry handle.
    pub id: WorkerId,
    /// Display name.
    pub name: String,
    /// Skill level. A worker is eligible for tasks whose difficulty
    /// does not exceed this value.
    pub skill: i32,
    /// Whether the worker can still take a task.
    pub available: bool,
}

impl Worker {
    /// Creates an available worker.
    pub fn new(id: WorkerId, name: impl Into<String>, skill: i32) -> Self {
        Self {
            id,
            name: name.into(),
            skill,
            available: true,
        }
    }

    /// Whether this worker can take a task of the given difficulty right now.
    #[inline]
    pub fn is_eligible_for(&self, difficulty: i32) -> bool {
        self.available && self.skill >= difficulty
    }

    /// Skill left unused if this worker takes a task of the given difficulty.
    #[inline]
    pub fn surplus_for(&self, difficulty: i32) -> i64 {
        i64::from(self.skill) - i64::from(difficulty)
    }

    /// Marks the worker as consumed.
    ///
    /// Returns `false` if the worker was already unavailable.
    pub fn mark_unavailable(&mut self) -> bool {
        std::mem::replace(&mut self.available, false)
    }
}

impl PartialEq for Worker {
    fn eq(&self, other: &Self) -> bool {
        self.skill == other.skill && self.name == other.name
    }
}

impl Eq for Worker {}

impl Hash for Worker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.skill.hash(state);
    }
}
