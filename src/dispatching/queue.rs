//! Priority-ordered task queue.
//!
//! Tasks are extracted by ascending priority value, so a priority-1 task
//! is served before a priority-10 task. Equal priorities are served in
//! submission order.
//!
//! # Complexity
//! O(log n) submit and pop (binary heap).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::models::{Task, TaskId};

/// Heap entry ordered by `(priority, id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Queued(Task);

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .priority
            .cmp(&other.0.priority)
            .then_with(|| self.0.id.cmp(&other.0.id))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending tasks, lowest priority value first.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<Reverse<Queued>>,
    next_seq: u64,
}

impl TaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a task and returns its sequence id.
    pub fn submit(&mut self, title: impl Into<String>, difficulty: i32, priority: i32) -> TaskId {
        let id = TaskId(self.next_seq);
        self.next_seq += 1;
        self.heap
            .push(Reverse(Queued(Task::new(id, title, difficulty, priority))));
        id
    }

    /// Removes and returns the next task to process.
    pub fn pop_next(&mut self) -> Option<Task> {
        self.heap.pop().map(|Reverse(Queued(task))| task)
    }

    /// The next task to process, without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.heap.peek().map(|Reverse(Queued(task))| task)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no task is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pending tasks in processing order. Leaves the queue untouched.
    pub fn to_sorted_vec(&self) -> Vec<Task> {
        // `Reverse` flips the ordering, so descending here is processing order.
        let mut entries: Vec<&Reverse<Queued>> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries.into_iter().map(|Reverse(Queued(t))| t.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(mut queue: TaskQueue) -> Vec<String> {
        std::iter::from_fn(|| queue.pop_next())
            .map(|t| t.title)
            .collect()
    }

    #[test]
    fn test_lower_priority_value_first() {
        let mut q = TaskQueue::new();
        q.submit("ten", 1, 10);
        q.submit("one", 1, 1);
        q.submit("five", 1, 5);
        assert_eq!(titles(q), vec!["one", "five", "ten"]);
    }

    #[test]
    fn test_ties_by_submission_order() {
        let mut q = TaskQueue::new();
        q.submit("a", 1, 3);
        q.submit("b", 9, 3);
        q.submit("c", 5, 3);
        q.submit("first", 5, 0);
        assert_eq!(titles(q), vec!["first", "a", "b", "c"]);
    }

    #[test]
    fn test_negative_priority_accepted() {
        let mut q = TaskQueue::new();
        q.submit("zero", 1, 0);
        q.submit("neg", 1, -4);
        assert_eq!(q.pop_next().unwrap().title, "neg");
    }

    #[test]
    fn test_sequence_ids() {
        let mut q = TaskQueue::new();
        assert_eq!(q.submit("a", 1, 1), TaskId(0));
        assert_eq!(q.submit("b", 1, 1), TaskId(1));
    }

    #[test]
    fn test_peek_and_len() {
        let mut q = TaskQueue::new();
        assert!(q.is_empty());
        assert!(q.peek().is_none());
        assert!(q.pop_next().is_none());

        q.submit("later", 2, 7);
        q.submit("sooner", 2, 2);
        assert_eq!(q.len(), 2);
        assert_eq!(q.peek().unwrap().title, "sooner");
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_sorted_vec_matches_pop_order() {
        let mut q = TaskQueue::new();
        for (i, p) in [4, 1, 4, 2, 1].into_iter().enumerate() {
            q.submit(format!("t{i}"), 1, p);
        }
        let preview: Vec<String> = q.to_sorted_vec().into_iter().map(|t| t.title).collect();
        assert_eq!(q.len(), 5);
        assert_eq!(preview, titles(q));
    }
}
