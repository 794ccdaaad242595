//! Task dispatching order.
//!
//! Provides the priority queue that decides which pending task the
//! scheduler considers next.
//!
//! # Ordering
//!
//! **Lower priority value = served first.** Ties between equal priorities
//! go to the task submitted first, which keeps every run deterministic.
//!
//! ```
//! use skill_assign::dispatching::TaskQueue;
//!
//! let mut queue = TaskQueue::new();
//! queue.submit("Write report", 3, 5);
//! queue.submit("Fix outage", 7, 1);
//!
//! assert_eq!(queue.pop_next().unwrap().title, "Fix outage");
//! assert_eq!(queue.pop_next().unwrap().title, "Write report");
//! assert!(queue.pop_next().is_none());
//! ```

mod queue;

pub use queue::TaskQueue;
