use thiserror::Error;

/// Errors found while wiring descriptors into a dependency graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate task name: {0}")]
    DuplicateTaskName(String),

    #[error("Target '{target}' is produced by both '{first}' and '{second}'")]
    DuplicateTarget {
        target: String,
        first: String,
        second: String,
    },

    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),
}
