//! Structured input records supplied by an external driver.

use serde::{Deserialize, Serialize};

/// A worker to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSpec {
    /// Display name (duplicates allowed).
    pub name: String,
    /// Skill level.
    pub skill: i32,
}

impl WorkerSpec {
    /// Creates a worker record.
    pub fn new(name: impl Into<String>, skill: i32) -> Self {
        Self {
            name: name.into(),
            skill,
        }
    }
}

/// A task to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Display label (not unique).
    pub title: String,
    /// Minimum skill required.
    pub difficulty: i32,
    /// Scheduling priority (lower = served first).
    pub priority: i32,
}

impl TaskSpec {
    /// Creates a task record.
    pub fn new(title: impl Into<String>, difficulty: i32, priority: i32) -> Self {
        Self {
            title: title.into(),
            difficulty,
            priority,
        }
    }
}

/// Input container for one assignment run.
///
/// Workers are registered in order, then tasks are submitted in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInput {
    /// Workers, in registration order.
    #[serde(default)]
    pub workers: Vec<WorkerSpec>,
    /// Tasks, in submission order.
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl AssignmentInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker.
    pub fn with_worker(mut self, worker: WorkerSpec) -> Self {
        self.workers.push(worker);
        self
    }

    /// Adds a task.
    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }
}
