//! Task model.
//!
//! A task is a unit of work with a difficulty (minimum skill required)
//! and a priority. Lower priority values are served first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Submission sequence number of a task.
///
/// Breaks ties between tasks of equal priority: earlier submissions
/// are served first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A task waiting for (or holding) an assignment.
///
/// Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Submission sequence number.
    pub id: TaskId,
    /// Display label (not unique).
    pub title: String,
    /// Minimum skill a worker needs to take this task.
    pub difficulty: i32,
    /// Scheduling priority (lower = served first).
    pub priority: i32,
}

impl Task {
    /// Creates a new task.
    pub fn new(id: TaskId, title: impl Into<String>, difficulty: i32, priority: i32) -> Self {
        Self {
            id,
            title: title.into(),
            difficulty,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let t = Task::new(TaskId(4), "Deploy", 3, 1);
        assert_eq!(t.id, TaskId(4));
        assert_eq!(t.title, "Deploy");
        assert_eq!(t.difficulty, 3);
        assert_eq!(t.priority, 1);
        assert_eq!(t.id.to_string(), "T4");
    }

    #[test]
    fn test_titles_need_not_be_unique() {
        let a = Task::new(TaskId(0), "Review", 2, 2);
        let b = Task::new(TaskId(1), "Review", 2, 2);
        assert_ne!(a, b);
    }
}
