use std::collections::HashMap;
use std::path::PathBuf;

use super::{ExecutableLocator, PathLocator};
use crate::config::ToolsConfig;
use crate::error::TaskError;
use crate::transdecoder::{LONG_ORFS_TOOL, PREDICT_TOOL};

/// Fixed name -> path table. Unknown names are not found.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    tools: HashMap<String, PathBuf>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tool: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.tools.insert(tool.into(), path.into());
        self
    }
}

impl ExecutableLocator for StaticLocator {
    fn resolve(&self, tool: &str) -> Result<PathBuf, TaskError> {
        self.tools
            .get(tool)
            .cloned()
            .ok_or_else(|| TaskError::tool_not_found(tool, "no entry registered"))
    }
}

/// Pinned paths from configuration first, then a [`PathLocator`] search.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocator {
    pinned: HashMap<String, PathBuf>,
    fallback: PathLocator,
}

impl ConfiguredLocator {
    pub fn new(fallback: PathLocator) -> Self {
        Self {
            pinned: HashMap::new(),
            fallback,
        }
    }

    pub fn pin(mut self, tool: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.pinned.insert(tool.into(), path.into());
        self
    }

    pub fn from_config(tools: &ToolsConfig) -> Self {
        let fallback = match tools.search_path.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => PathLocator::with_search_path(p),
            _ => PathLocator::new(),
        };

        let mut locator = Self::new(fallback);
        let pins = [
            (LONG_ORFS_TOOL, tools.long_orfs.as_deref()),
            (PREDICT_TOOL, tools.predict.as_deref()),
        ];
        for (tool, pinned) in pins {
            if let Some(path) = pinned.map(str::trim).filter(|p| !p.is_empty()) {
                locator = locator.pin(tool, path);
            }
        }
        locator
    }
}

impl ExecutableLocator for ConfiguredLocator {
    fn resolve(&self, tool: &str) -> Result<PathBuf, TaskError> {
        match self.pinned.get(tool) {
            Some(path) if path.exists() => {
                tracing::debug!("Using pinned path: {} -> {}", tool, path.display());
                Ok(path.clone())
            }
            Some(path) => Err(TaskError::tool_not_found(
                tool,
                format!("pinned path {} does not exist", path.display()),
            )),
            None => self.fallback.resolve(tool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_locator_resolves_registered_names_only() {
        let locator = StaticLocator::new().with("TransDecoder.LongOrfs", "/bin/longorfs");

        assert_eq!(
            locator.resolve("TransDecoder.LongOrfs").unwrap(),
            PathBuf::from("/bin/longorfs")
        );
        assert!(matches!(
            locator.resolve("TransDecoder.Predict"),
            Err(TaskError::ToolNotFound { .. })
        ));
    }

    #[test]
    fn pinned_path_wins_over_search() {
        let dir = tempfile::tempdir().unwrap();
        let pinned = dir.path().join("TransDecoder.Predict");
        std::fs::write(&pinned, "").unwrap();

        let empty = tempfile::tempdir().unwrap();
        let locator = ConfiguredLocator::new(PathLocator::with_search_path(
            empty.path().as_os_str(),
        ))
        .pin(PREDICT_TOOL, &pinned);

        assert_eq!(locator.resolve(PREDICT_TOOL).unwrap(), pinned);
        assert!(matches!(
            locator.resolve(LONG_ORFS_TOOL),
            Err(TaskError::ToolNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn unpinned_tool_is_found_on_search_path() {
        use crate::locator::fake_executable;

        let bin = tempfile::tempdir().unwrap();
        let exe = fake_executable(bin.path(), LONG_ORFS_TOOL);
        let tools = ToolsConfig {
            long_orfs: None,
            predict: None,
            search_path: Some(bin.path().to_string_lossy().into_owned()),
        };

        let resolved = ConfiguredLocator::from_config(&tools)
            .resolve(LONG_ORFS_TOOL)
            .unwrap();
        assert_eq!(resolved.file_name(), exe.file_name());
        assert!(resolved.exists());
    }

    #[test]
    fn missing_pinned_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let tools = ToolsConfig {
            long_orfs: Some(dir.path().join("gone").to_string_lossy().into_owned()),
            predict: None,
            search_path: Some(dir.path().to_string_lossy().into_owned()),
        };

        let err = ConfiguredLocator::from_config(&tools)
            .resolve(LONG_ORFS_TOOL)
            .unwrap_err();
        assert!(err.to_string().contains("pinned path"));
    }
}
