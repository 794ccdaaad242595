//! Ledger snapshot for display.
//!
//! For every registered worker, in registration order: name, skill, and
//! the titles of the tasks it received (empty if none).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Ledger, Worker, WorkerId};

/// One worker's line in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    /// Registry handle.
    pub id: WorkerId,
    /// Worker name.
    pub name: String,
    /// Worker skill level.
    pub skill: i32,
    /// Assigned task titles, in assignment order.
    pub tasks: Vec<String>,
}

/// Read-only view of a ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// One line per registered worker, in registration order.
    pub workers: Vec<WorkerReport>,
}

impl LedgerReport {
    /// Builds a snapshot. Workers without a ledger entry get an empty list.
    pub fn new(workers: &[Worker], ledger: &Ledger) -> Self {
        let workers = workers
            .iter()
            .map(|w| WorkerReport {
                id: w.id,
                name: w.name.clone(),
                skill: w.skill,
                tasks: ledger
                    .tasks_for(w.id)
                    .unwrap_or_default()
                    .iter()
                    .map(|t| t.title.clone())
                    .collect(),
            })
            .collect();
        Self { workers }
    }

    /// Finds the first worker line with the given name.
    pub fn find(&self, name: &str) -> Option<&WorkerReport> {
        self.workers.iter().find(|w| w.name == name)
    }
}

impl fmt::Display for WorkerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Skill {}) - ", self.name, self.skill)?;
        if self.tasks.is_empty() {
            return write!(f, "No tasks assigned.");
        }
        for title in &self.tasks {
            write!(f, "[ {title} ] ")?;
        }
        Ok(())
    }
}

impl fmt::Display for LedgerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task Assignments:")?;
        for w in &self.workers {
            writeln!(f, "{w}")?;
        }
        Ok(())
    }
}
