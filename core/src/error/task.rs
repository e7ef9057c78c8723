use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while building or cleaning up a task descriptor.
///
/// Failures of the wrapped executables themselves never show up here; the
/// task engine that runs the command owns those.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("input filename must not be empty")]
    EmptyInput,

    #[error("pfam filename must not be empty")]
    EmptyPfam,

    #[error("executable '{tool}' not found: {reason}")]
    ToolNotFound { tool: String, reason: String },

    #[error("failed to clean '{}': {source}", path.display())]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TaskError {
    pub fn tool_not_found(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::ToolNotFound {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}
