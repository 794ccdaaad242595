//! Best-fit scheduler, ledger reporting and KPI evaluation.
//!
//! # Algorithm
//!
//! `SkillScheduler` drains its task queue lowest-priority-value first and
//! hands each task to the available worker with the smallest sufficient
//! skill. It is greedy and single-pass: no backtracking, no requeueing.
//!
//! # Reporting
//!
//! `LedgerReport` is the display snapshot of the final ledger;
//! `AssignmentKpi` summarizes a run (assignment rate, wasted skill).

mod best_fit;
mod kpi;
mod report;
mod request;

pub use best_fit::{AssignmentOutcome, SkillScheduler};
pub use kpi::AssignmentKpi;
pub use report::{LedgerReport, WorkerReport};
pub use request::{AssignmentInput, TaskSpec, WorkerSpec};
