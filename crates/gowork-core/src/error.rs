use thiserror::Error;

/// Failures a task can signal back through a worker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("{0}")]
    InvalidArgs(String),

    #[error("Argument type mismatch at [{index}]: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Integer overflow")]
    Overflow,

    #[error("Task failed: {0}")]
    Failed(String),
}

impl TaskError {
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        TaskError::InvalidArgs(msg.into())
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        TaskError::Failed(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
