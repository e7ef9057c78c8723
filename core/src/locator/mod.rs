//! Executable lookup for wrapped command-line tools.
//!
//! Task builders never touch the process search path directly; they ask an
//! [`ExecutableLocator`]. Production code uses [`PathLocator`] or
//! [`ConfiguredLocator`], tests hand in a [`StaticLocator`].

mod path;
mod pinned;

use std::path::PathBuf;

use crate::error::TaskError;

pub use path::PathLocator;
pub use pinned::{ConfiguredLocator, StaticLocator};

/// Resolves a tool name to an invocable path.
pub trait ExecutableLocator: Send + Sync {
    /// Fails with [`TaskError::ToolNotFound`] when the tool cannot be located.
    fn resolve(&self, tool: &str) -> Result<PathBuf, TaskError>;
}

impl<L: ExecutableLocator + ?Sized> ExecutableLocator for &L {
    fn resolve(&self, tool: &str) -> Result<PathBuf, TaskError> {
        (**self).resolve(tool)
    }
}

#[cfg(all(test, unix))]
pub(crate) fn fake_executable(dir: &std::path::Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
