use super::{
    check_input, executable, longest_orfs_pep, predict_targets, task_name, work_dir, PREDICT_TOOL,
    RETAIN_PFAM_HITS_FLAG,
};
use crate::error::TaskError;
use crate::locator::ExecutableLocator;
use crate::task::{CleanAction, TaskDescriptor};

/// Builds the task that runs `TransDecoder.Predict`.
///
/// The task depends on `longest_orfs.pep`, so an engine always schedules it
/// after the matching [`LongOrfsTaskBuilder`](super::LongOrfsTaskBuilder)
/// task. With a Pfam result file the hits are retained and the file becomes
/// a dependency too.
#[derive(Debug, Clone)]
pub struct PredictTaskBuilder {
    input_filename: String,
    pfam_filename: Option<String>,
    params: Vec<String>,
}

impl PredictTaskBuilder {
    pub fn new(input_filename: impl Into<String>) -> Self {
        Self {
            input_filename: input_filename.into(),
            pfam_filename: None,
            params: Vec::new(),
        }
    }

    /// hmmscan/Pfam output passed through `--retain_pfam_hits`.
    pub fn pfam(mut self, pfam_filename: Option<impl Into<String>>) -> Self {
        self.pfam_filename = pfam_filename.map(Into::into);
        self
    }

    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn build(&self, locator: &dyn ExecutableLocator) -> Result<TaskDescriptor, TaskError> {
        let input = self.input_filename.as_str();
        check_input(input)?;
        if let Some(pfam) = &self.pfam_filename {
            if pfam.trim().is_empty() {
                return Err(TaskError::EmptyPfam);
            }
        }

        let exe = executable(locator, PREDICT_TOOL)?;
        let mut cmd = vec![exe, "-t".to_string(), input.to_string()];
        let mut file_dep = vec![input.to_string(), longest_orfs_pep(input)];

        if let Some(pfam) = &self.pfam_filename {
            cmd.push(RETAIN_PFAM_HITS_FLAG.to_string());
            cmd.push(pfam.clone());
            file_dep.push(pfam.clone());
        }
        cmd.extend(self.params.iter().cloned());

        let task = TaskDescriptor {
            name: task_name(PREDICT_TOOL, input),
            actions: vec![cmd.join(" ")],
            file_dep,
            targets: predict_targets(input),
            clean: vec![
                CleanAction::RemoveTargets,
                CleanAction::RemoveDir {
                    path: work_dir(input),
                },
            ],
        };
        tracing::debug!("Built task {}: {}", task.name, task.actions[0]);
        Ok(task)
    }
}
