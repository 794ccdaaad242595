//! Best-fit greedy assignment.
//!
//! # Algorithm
//!
//! 1. Pop the pending task with the lowest priority value.
//! 2. Scan every registered worker; keep those that are available and
//!    whose skill is at least the task's difficulty.
//! 3. Pick the eligible worker with the smallest skill (least wasted
//!    skill). Equal skills go to the earliest-registered worker.
//! 4. Mark that worker unavailable and append the task to its ledger
//!    entry. With no eligible worker the task is dropped.
//!
//! Workers are never released back to the pool, so each worker takes
//! at most one task per run.
//!
//! # Complexity
//! O(n * (m + log n)) where n=tasks, m=workers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AssignmentInput, LedgerReport};
use crate::config::SchedulerConfig;
use crate::dispatching::TaskQueue;
use crate::error::{AssignError, Result};
use crate::models::{Ledger, Task, TaskId, Worker, WorkerId};
use crate::validation::validate_input;

/// Terminal state of a processed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssignmentOutcome {
    /// The task went to a worker.
    Assigned {
        task: Task,
        worker: WorkerId,
        worker_name: String,
    },
    /// No available worker had enough skill when the task was processed.
    Unassignable { task: Task },
}

impl AssignmentOutcome {
    /// The processed task.
    pub fn task(&self) -> &Task {
        match self {
            Self::Assigned { task, .. } | Self::Unassignable { task } => task,
        }
    }

    /// The assignee, if any.
    pub fn worker(&self) -> Option<WorkerId> {
        match self {
            Self::Assigned { worker, .. } => Some(*worker),
            Self::Unassignable { .. } => None,
        }
    }

    /// Whether the task was assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned { .. })
    }
}

impl fmt::Display for AssignmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned {
                task, worker_name, ..
            } => write!(f, "Task '{}' assigned to {}", task.title, worker_name),
            Self::Unassignable { task } => {
                write!(f, "No available employee for task: {}", task.title)
            }
        }
    }
}

/// Skill-based task scheduler.
///
/// Owns the worker registry, the pending task queue and the assignment
/// ledger for one run.
///
/// # Example
///
/// ```
/// use skill_assign::scheduler::SkillScheduler;
///
/// let mut scheduler = SkillScheduler::new();
/// let junior = scheduler.register_worker("Junior", 3);
/// let senior = scheduler.register_worker("Senior", 9);
/// scheduler.submit_task("Hotfix", 8, 1);
/// scheduler.submit_task("Docs", 2, 2);
///
/// let outcomes = scheduler.assign_all();
/// assert_eq!(outcomes[0].worker(), Some(senior));
/// assert_eq!(outcomes[1].worker(), Some(junior));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkillScheduler {
    workers: Vec<Worker>,
    queue: TaskQueue,
    ledger: Ledger,
}

impl SkillScheduler {
    /// Creates an empty scheduler that accepts every input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scheduler from structured input without validation.
    pub fn from_input(input: &AssignmentInput) -> Self {
        let mut scheduler = Self::new();
        scheduler.load(input);
        scheduler
    }

    /// Builds a scheduler from structured input, checking it against
    /// `config.bounds` first.
    ///
    /// This is the only validating entry point; `register_worker` and
    /// `submit_task` accept any value.
    ///
    /// # Errors
    /// [`AssignError::InvalidInput`] with every detected issue. Nothing is
    /// registered when validation fails.
    pub fn try_from_input(input: &AssignmentInput, config: SchedulerConfig) -> Result<Self> {
        if let Some(bounds) = &config.bounds {
            validate_input(input, bounds).map_err(AssignError::InvalidInput)?;
        }
        let mut scheduler = Self::new();
        scheduler.load(input);
        Ok(scheduler)
    }

    fn load(&mut self, input: &AssignmentInput) {
        for w in &input.workers {
            self.register_worker(w.name.clone(), w.skill);
        }
        for t in &input.tasks {
            self.submit_task(t.title.clone(), t.difficulty, t.priority);
        }
    }

    /// Registers an available worker and opens its ledger entry.
    ///
    /// Duplicate name/skill pairs become separate workers.
    pub fn register_worker(&mut self, name: impl Into<String>, skill: i32) -> WorkerId {
        let id = WorkerId(self.workers.len());
        let worker = Worker::new(id, name, skill);
        tracing::debug!(worker_id = %id, name = %worker.name, skill, "Worker registered");
        self.workers.push(worker);
        self.ledger.open(id);
        id
    }

    /// Queues a task for the next [`assign_all`](Self::assign_all).
    pub fn submit_task(
        &mut self,
        title: impl Into<String>,
        difficulty: i32,
        priority: i32,
    ) -> TaskId {
        let id = self.queue.submit(title, difficulty, priority);
        tracing::debug!(task_id = %id, difficulty, priority, "Task submitted");
        id
    }

    /// Registered workers in registration order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Looks up a worker.
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id.0)
    }

    /// Workers that can still take a task.
    pub fn available_workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(|w| w.available)
    }

    /// Tasks not yet processed.
    pub fn pending(&self) -> &TaskQueue {
        &self.queue
    }

    /// The worker that would take `task` right now, if any.
    ///
    /// Minimum skill among available workers with `skill >= difficulty`;
    /// the first registered wins among equals.
    pub fn best_fit(&self, task: &Task) -> Option<WorkerId> {
        self.workers
            .iter()
            .filter(|w| w.is_eligible_for(task.difficulty))
            .min_by_key(|w| w.skill)
            .map(|w| w.id)
    }

    /// Drains the queue, assigning each task to its best-fit worker.
    ///
    /// Returns one outcome per task in processing order. A second call
    /// only processes tasks submitted since the first; consumed workers
    /// stay unavailable.
    pub fn assign_all(&mut self) -> Vec<AssignmentOutcome> {
        let mut outcomes = Vec::with_capacity(self.queue.len());

        while let Some(task) = self.queue.pop_next() {
            let outcome = match self.best_fit(&task) {
                Some(id) => {
                    let worker = &mut self.workers[id.0];
                    worker.mark_unavailable();
                    let worker_name = worker.name.clone();
                    tracing::info!(
                        task = %task.title,
                        worker = %worker_name,
                        skill = worker.skill,
                        difficulty = task.difficulty,
                        "Task assigned"
                    );
                    let recorded = self.ledger.record(id, task.clone());
                    debug_assert!(recorded, "no ledger entry for {id}");
                    AssignmentOutcome::Assigned {
                        task,
                        worker: id,
                        worker_name,
                    }
                }
                None => {
                    tracing::warn!(
                        task = %task.title,
                        difficulty = task.difficulty,
                        priority = task.priority,
                        "No available worker for task"
                    );
                    AssignmentOutcome::Unassignable { task }
                }
            };
            outcomes.push(outcome);
        }

        let assigned = outcomes.iter().filter(|o| o.is_assigned()).count();
        tracing::debug!(
            assigned,
            unassignable = outcomes.len() - assigned,
            "Assignment pass complete"
        );
        outcomes
    }

    /// The ledger as it stands.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Read-only snapshot of the ledger for display.
    pub fn report(&self) -> LedgerReport {
        LedgerReport::new(&self.workers, &self.ledger)
    }
}
