//! Input validation for assignment runs.
//!
//! The scheduler itself accepts any integer for skill, difficulty and
//! priority. This module is the opt-in hardening layer: it checks an
//! [`AssignmentInput`] against configured [`InputBounds`] before any
//! worker is registered. Detects:
//! - Values outside the configured ranges
//! - Blank worker names and task titles
//!
//! A rejected input is reported as invalid, which is distinct from a
//! task that is merely unassignable.

use thiserror::Error;

use crate::config::InputBounds;
use crate::scheduler::AssignmentInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A worker's skill is outside the accepted range.
    SkillOutOfRange,
    /// A task's difficulty is outside the accepted range.
    DifficultyOutOfRange,
    /// A task's priority is outside the accepted range.
    PriorityOutOfRange,
    /// A worker has a blank name.
    EmptyName,
    /// A task has a blank title.
    EmptyTitle,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates worker and task records against the given bounds.
///
/// Checks:
/// 1. Every worker has a non-blank name
/// 2. Every worker's skill lies in `bounds.skill`
/// 3. Every task has a non-blank title
/// 4. Every task's difficulty lies in `bounds.difficulty`
/// 5. Every task's priority lies in `bounds.priority`
///
/// Duplicate workers are not an error.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &AssignmentInput, bounds: &InputBounds) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, w) in input.workers.iter().enumerate() {
        if w.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Worker #{} has an empty name", i + 1),
            ));
        }
        if !bounds.skill.contains(&w.skill) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SkillOutOfRange,
                format!(
                    "Worker '{}' skill {} outside {}..={}",
                    w.name,
                    w.skill,
                    bounds.skill.start(),
                    bounds.skill.end()
                ),
            ));
        }
    }

    for (i, t) in input.tasks.iter().enumerate() {
        if t.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!("Task #{} has an empty title", i + 1),
            ));
        }
        if !bounds.difficulty.contains(&t.difficulty) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DifficultyOutOfRange,
                format!(
                    "Task '{}' difficulty {} outside {}..={}",
                    t.title,
                    t.difficulty,
                    bounds.difficulty.start(),
                    bounds.difficulty.end()
                ),
            ));
        }
        if !bounds.priority.contains(&t.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Task '{}' priority {} outside {}..={}",
                    t.title,
                    t.priority,
                    bounds.priority.start(),
                    bounds.priority.end()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
