//! Assignment quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assignment rate | assigned / processed tasks |
//! | Idle workers | Workers still available after the run |
//! | Wasted skill | Sum of (skill - difficulty) over assigned tasks |
//! | Avg wasted skill | Wasted skill / assigned tasks |
//!
//! Best-fit selection minimizes wasted skill per task, not globally.

use serde::{Deserialize, Serialize};

use super::AssignmentOutcome;
use crate::models::Worker;

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentKpi {
    /// Tasks processed.
    pub task_count: usize,
    /// Tasks that went to a worker.
    pub assigned: usize,
    /// Tasks dropped for lack of an eligible worker.
    pub unassignable: usize,
    /// Fraction of processed tasks that were assigned (0.0..1.0).
    pub assignment_rate: f64,
    /// Workers still available after the run.
    pub idle_workers: usize,
    /// Sum of skill surplus over assigned tasks.
    pub total_wasted_skill: i64,
    /// Mean skill surplus per assigned task.
    pub avg_wasted_skill: f64,
}

impl AssignmentKpi {
    /// Computes KPIs from a run's outcomes and the final worker states.
    pub fn calculate(outcomes: &[AssignmentOutcome], workers: &[Worker]) -> Self {
        let mut assigned = 0usize;
        let mut total_wasted: i64 = 0;

        for outcome in outcomes {
            if let AssignmentOutcome::Assigned { task, worker, .. } = outcome {
                assigned += 1;
                if let Some(w) = workers.get(worker.0) {
                    total_wasted += w.surplus_for(task.difficulty);
                }
            }
        }

        let task_count = outcomes.len();
        let assignment_rate = if task_count > 0 {
            assigned as f64 / task_count as f64
        } else {
            1.0
        };
        let avg_wasted_skill = if assigned > 0 {
            total_wasted as f64 / assigned as f64
        } else {
            0.0
        };

        Self {
            task_count,
            assigned,
            unassignable: task_count - assigned,
            assignment_rate,
            idle_workers: workers.iter().filter(|w| w.available).count(),
            total_wasted_skill: total_wasted,
            avg_wasted_skill,
        }
    }
}
