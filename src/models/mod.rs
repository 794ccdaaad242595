//! Assignment domain models.
//!
//! Provides the data types for a skill-based assignment run: the workers
//! that take tasks, the tasks themselves, and the ledger recording who
//! got what.
//!
//! # Domain Mappings
//!
//! | skill-assign | Workforce | Support desk | Manufacturing |
//! |--------------|-----------|--------------|---------------|
//! | Worker | Employee | Agent | Operator |
//! | Task | Work item | Ticket | Job |
//! | Ledger | Roster | Queue ownership | Dispatch list |

mod ledger;
mod task;
mod worker;

pub use ledger::{Ledger, LedgerEntry};
pub use task::{Task, TaskId};
pub use worker::{Worker, WorkerId};
