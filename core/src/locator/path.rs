use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::ExecutableLocator;
use crate::error::TaskError;

/// Looks tools up on `PATH`, or on an explicit PATH-style list.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    pub fn new() -> Self {
        Self { search_path: None }
    }

    pub fn with_search_path(paths: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(paths.into()),
        }
    }
}

impl ExecutableLocator for PathLocator {
    fn resolve(&self, tool: &str) -> Result<PathBuf, TaskError> {
        let tool_path = Path::new(tool);

        if tool_path.is_absolute() {
            if tool_path.exists() {
                tracing::debug!("Using absolute path: {}", tool);
                return Ok(tool_path.to_path_buf());
            }
            return Err(TaskError::tool_not_found(tool, "path does not exist"));
        }

        let found = match &self.search_path {
            Some(paths) => which::which_in(tool, Some(paths), Path::new(".")),
            None => which::which(tool),
        };

        match found {
            Ok(path) => {
                tracing::debug!("Resolved {} -> {}", tool, path.display());
                Ok(path)
            }
            Err(e) => {
                tracing::debug!("Not found in search path: {} ({})", tool, e);
                Err(TaskError::tool_not_found(tool, e))
            }
        }
    }
}
