use serde::{Deserialize, Serialize};

/// Declarative unit of work handed to a dependency-driven task engine.
///
/// A descriptor is plain data: building one runs nothing. The engine decides
/// whether to run `actions` by comparing `file_dep` against `targets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// `<tool>:<input basename>`, unique within one pipeline run.
    pub name: String,
    /// Shell command lines, executed in order.
    pub actions: Vec<String>,
    /// Files that must exist and be up to date before the task runs.
    pub file_dep: Vec<String>,
    /// Files the actions produce.
    pub targets: Vec<String>,
    /// Cleanup operations, applied in order.
    pub clean: Vec<CleanAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CleanAction {
    /// Delete every declared target file.
    RemoveTargets,
    /// Recursively delete a working directory.
    RemoveDir { path: String },
}

impl TaskDescriptor {
    pub fn command(&self) -> Option<&str> {
        self.actions.first().map(String::as_str)
    }
}
