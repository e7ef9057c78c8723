use thiserror::Error;

use super::{GraphError, TaskError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("task error: {0}")]
    Task(#[from] TaskError),
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code reported by the `orfpipe` binary.
    ///
    /// - 11: config error
    /// - 12: wrapped executable not found
    /// - 13: invalid input or broken task wiring
    /// - 20: IO / cleanup error
    /// - 50: internal/uncategorized
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 11,
            Self::Task(te) => match te {
                TaskError::ToolNotFound { .. } => 12,
                TaskError::EmptyInput | TaskError::EmptyPfam => 13,
                TaskError::Clean { .. } => 20,
            },
            Self::Graph(_) => 13,
            Self::Io(_) => 20,
            Self::Anyhow(_) => 50,
        }
    }
}
