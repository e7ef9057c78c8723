use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CleanAction, TaskDescriptor};
use crate::error::TaskError;

/// Paths actually removed by a cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

impl CleanReport {
    fn merge(&mut self, other: CleanReport) {
        self.removed.extend(other.removed);
    }
}

impl CleanAction {
    /// Run this action. `targets` are the owning descriptor's targets.
    ///
    /// Paths that are already gone are skipped.
    pub fn apply(&self, targets: &[String]) -> Result<CleanReport, TaskError> {
        let mut report = CleanReport::default();
        match self {
            CleanAction::RemoveTargets => {
                for target in targets {
                    if remove_file(Path::new(target))? {
                        report.removed.push(PathBuf::from(target));
                    }
                }
            }
            CleanAction::RemoveDir { path } => {
                if remove_dir(Path::new(path))? {
                    report.removed.push(PathBuf::from(path));
                }
            }
        }
        Ok(report)
    }
}

impl TaskDescriptor {
    /// Apply every cleanup action in declaration order.
    pub fn clean_up(&self) -> Result<CleanReport, TaskError> {
        let mut report = CleanReport::default();
        for action in &self.clean {
            report.merge(action.apply(&self.targets)?);
        }
        tracing::info!(
            "Cleaned task {} ({} paths removed)",
            self.name,
            report.removed.len()
        );
        Ok(report)
    }
}

fn remove_file(path: &Path) -> Result<bool, TaskError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!("Removed file {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(TaskError::Clean {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A non-directory sitting at `path` is removed as well.
fn remove_dir(path: &Path) -> Result<bool, TaskError> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if !meta.is_dir() => return remove_file(path),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(TaskError::Clean {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::info!("Removed directory {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(TaskError::Clean {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_str(p: &Path) -> String {
        p.to_string_lossy().into_owned()
    }

    #[test]
    fn remove_dir_is_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().join("sample.fa.transdecoder_dir");
        std::fs::create_dir_all(work.join("nested")).unwrap();
        std::fs::write(work.join("nested").join("longest_orfs.pep"), ">p\nM\n").unwrap();

        let action = CleanAction::RemoveDir {
            path: path_str(&work),
        };
        let report = action.apply(&[]).unwrap();

        assert!(!work.exists());
        assert_eq!(report.removed, vec![work]);
    }

    #[test]
    fn missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let action = CleanAction::RemoveDir {
            path: path_str(&dir.path().join("never-created")),
        };

        let report = action.apply(&[]).unwrap();
        assert!(report.removed.is_empty());
    }

    #[test]
    fn file_in_place_of_work_dir_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().join("sample.fa.transdecoder_dir");
        std::fs::write(&work, "stale").unwrap();

        let action = CleanAction::RemoveDir {
            path: path_str(&work),
        };
        let report = action.apply(&[]).unwrap();

        assert!(!work.exists());
        assert_eq!(report.removed, vec![work]);
    }

    #[test]
    fn remove_targets_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("sample.fa.transdecoder.bed");
        let absent = dir.path().join("sample.fa.transdecoder.cds");
        std::fs::write(&present, "").unwrap();

        let report = CleanAction::RemoveTargets
            .apply(&[path_str(&present), path_str(&absent)])
            .unwrap();

        assert!(!present.exists());
        assert_eq!(report.removed, vec![present]);
    }

    #[test]
    fn clean_up_runs_actions_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().join("x.transdecoder_dir");
        let target = dir.path().join("x.transdecoder.pep");
        std::fs::create_dir_all(&work).unwrap();
        std::fs::write(&target, "").unwrap();

        let task = TaskDescriptor {
            name: "t".to_string(),
            actions: vec!["true".to_string()],
            file_dep: vec![],
            targets: vec![path_str(&target)],
            clean: vec![
                CleanAction::RemoveTargets,
                CleanAction::RemoveDir {
                    path: path_str(&work),
                },
            ],
        };

        let report = task.clean_up().unwrap();
        assert_eq!(report.removed, vec![target, work]);

        // second pass finds nothing left to remove
        assert!(task.clean_up().unwrap().removed.is_empty());
    }
}
