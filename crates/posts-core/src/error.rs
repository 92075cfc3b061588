//! Domain-level error types.

use thiserror::Error;

/// A single rejected field of a post payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct FieldViolation {
    /// Field name as it appears on the wire (`title`, `body`, `userId`).
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Payload rejected before any store access. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", joined(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// `Ok(())` when no field was rejected.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` is among the rejected fields.
    pub fn rejects(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn joined(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome categories of the post resource manager.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Post not found: id {id}")]
    NotFound { id: i32 },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Store failures, passed through uninterpreted.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
