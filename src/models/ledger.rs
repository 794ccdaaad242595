//! Assignment ledger.
//!
//! Maps every registered worker to the ordered list of tasks it received.
//! Entries are kept in registration order; tasks within an entry are in
//! assignment order.

use serde::{Deserialize, Serialize};

use super::{Task, TaskId, WorkerId};

/// Tasks assigned to one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Owning worker.
    pub worker: WorkerId,
    /// Assigned tasks, in assignment order.
    pub tasks: Vec<Task>,
}

/// The worker → tasks mapping produced by a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an empty entry for a newly registered worker.
    pub(crate) fn open(&mut self, worker: WorkerId) {
        debug_assert!(self.entry(worker).is_none());
        self.entries.push(LedgerEntry {
            worker,
            tasks: Vec::new(),
        });
    }

    /// Appends a task to a worker's entry.
    ///
    /// Returns `false` if the worker has no entry.
    pub(crate) fn record(&mut self, worker: WorkerId, task: Task) -> bool {
        match self.entries.iter_mut().find(|e| e.worker == worker) {
            Some(entry) => {
                entry.tasks.push(task);
                true
            }
            None => false,
        }
    }

    /// Entry of a worker, matched by id rather than position.
    pub fn entry(&self, worker: WorkerId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.worker == worker)
    }

    /// Tasks assigned to a worker (`None` if the worker is unknown).
    pub fn tasks_for(&self, worker: WorkerId) -> Option<&[Task]> {
        self.entry(worker).map(|e| e.tasks.as_slice())
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Finds the worker holding a task.
    pub fn assignee_of(&self, task_id: TaskId) -> Option<WorkerId> {
        self.entries
            .iter()
            .find(|e| e.tasks.iter().any(|t| t.id == task_id))
            .map(|e| e.worker)
    }

    /// Workers that received no task.
    pub fn idle_workers(&self) -> Vec<WorkerId> {
        self.entries
            .iter()
            .filter(|e| e.tasks.is_empty())
            .map(|e| e.worker)
            .collect()
    }

    /// Total number of assigned tasks.
    pub fn assigned_count(&self) -> usize {
        self.entries.iter().map(|e| e.tasks.len()).sum()
    }

    /// Number of entries (registered workers).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no worker is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut l = Ledger::new();
        l.open(WorkerId(0));
        l.open(WorkerId(1));
        l.open(WorkerId(2));
        l.record(WorkerId(0), Task::new(TaskId(0), "T1", 3, 1));
        l.record(WorkerId(2), Task::new(TaskId(1), "T2", 5, 2));
        l
    }

    #[test]
    fn test_every_worker_has_entry() {
        let l = sample_ledger();
        assert_eq!(l.len(), 3);
        assert_eq!(l.tasks_for(WorkerId(1)), Some(&[][..]));
        assert!(l.tasks_for(WorkerId(9)).is_none());
    }

    #[test]
    fn test_record_keeps_order() {
        let mut l = sample_ledger();
        l.record(WorkerId(0), Task::new(TaskId(2), "T3", 1, 9));
        let titles: Vec<&str> = l
            .tasks_for(WorkerId(0))
            .unwrap()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["T1", "T3"]);
    }

    #[test]
    fn test_record_unknown_worker() {
        let mut l = sample_ledger();
        assert!(!l.record(WorkerId(7), Task::new(TaskId(9), "X", 1, 1)));
        assert_eq!(l.assigned_count(), 2);
    }

    #[test]
    fn test_assignee_of() {
        let l = sample_ledger();
        assert_eq!(l.assignee_of(TaskId(1)), Some(WorkerId(2)));
        assert_eq!(l.assignee_of(TaskId(42)), None);
    }

    #[test]
    fn test_idle_workers() {
        let l = sample_ledger();
        assert_eq!(l.idle_workers(), vec![WorkerId(1)]);
    }

    #[test]
    fn test_lookup_by_id_after_deserialize() {
        let json = r#"{"entries":[{"worker":5,"tasks":[
            {"id":0,"title":"X","difficulty":1,"priority":1}
        ]}]}"#;
        let l: Ledger = serde_json::from_str(json).unwrap();
        assert!(l.tasks_for(WorkerId(0)).is_none());
        assert_eq!(l.tasks_for(WorkerId(5)).unwrap()[0].title, "X");
        assert_eq!(l.assignee_of(TaskId(0)), Some(WorkerId(5)));
    }

    #[test]
    fn test_empty_ledger() {
        let l = Ledger::new();
        assert!(l.is_empty());
        assert_eq!(l.assigned_count(), 0);
        assert!(l.idle_workers().is_empty());
    }
}
