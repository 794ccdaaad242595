//! Skill-based task assignment.
//!
//! Assigns tasks to workers with a greedy, priority-ordered, best-fit
//! policy: tasks are taken lowest priority value first, and each goes to
//! the available worker with the smallest skill that still meets the
//! task's difficulty. Each worker takes at most one task per run.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Worker`, `Task`, `Ledger`
//! - **`dispatching`**: `TaskQueue`, the priority-ordered pending set
//! - **`scheduler`**: `SkillScheduler`, outcomes, reports and KPIs
//! - **`validation`**: Opt-in input range checks
//! - **`config`**: `SchedulerConfig`, `InputBounds`
//!
//! # Example
//!
//! ```
//! use skill_assign::scheduler::SkillScheduler;
//!
//! let mut scheduler = SkillScheduler::new();
//! scheduler.register_worker("A", 5);
//! scheduler.register_worker("B", 8);
//! scheduler.submit_task("T1", 5, 1);
//! scheduler.assign_all();
//!
//! let report = scheduler.report();
//! assert_eq!(report.find("A").unwrap().tasks, vec!["T1"]);
//! assert!(report.find("B").unwrap().tasks.is_empty());
//! ```

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{AssignError, Result};
