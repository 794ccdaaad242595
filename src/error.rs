use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AssignError {
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, AssignError>;
