//! Scheduler configuration.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted ranges for worker and task inputs.
///
/// The defaults match the 1-10 scales an operator is asked for when
/// entering employees and tasks by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBounds {
    pub skill: RangeInclusive<i32>,
    pub difficulty: RangeInclusive<i32>,
    pub priority: RangeInclusive<i32>,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::uniform(1, 10)
    }
}

impl InputBounds {
    /// Same range for skill, difficulty and priority.
    pub fn uniform(min: i32, max: i32) -> Self {
        Self {
            skill: min..=max,
            difficulty: min..=max,
            priority: min..=max,
        }
    }

    /// Sets the skill range.
    pub fn with_skill(mut self, range: RangeInclusive<i32>) -> Self {
        self.skill = range;
        self
    }

    /// Sets the difficulty range.
    pub fn with_difficulty(mut self, range: RangeInclusive<i32>) -> Self {
        self.difficulty = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority = range;
        self
    }
}

/// Options for a [`SkillScheduler`](crate::scheduler::SkillScheduler).
///
/// The default accepts every input as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// When set, inputs outside these ranges are rejected as invalid.
    pub bounds: Option<InputBounds>,
}

impl SchedulerConfig {
    /// Creates the permissive default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables bounds validation.
    pub fn with_bounds(mut self, bounds: InputBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Enables bounds validation with the default 1-10 ranges.
    pub fn strict() -> Self {
        Self::new().with_bounds(InputBounds::default())
    }
}
