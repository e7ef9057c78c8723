use super::{check_input, executable, longest_orfs_pep, task_name, work_dir, LONG_ORFS_TOOL};
use crate::error::TaskError;
use crate::locator::ExecutableLocator;
use crate::task::{CleanAction, TaskDescriptor};

/// Builds the task that runs `TransDecoder.LongOrfs -t <input> [params...]`.
#[derive(Debug, Clone)]
pub struct LongOrfsTaskBuilder {
    input_filename: String,
    params: Vec<String>,
}

impl LongOrfsTaskBuilder {
    /// `input_filename` is the FASTA file to analyze.
    pub fn new(input_filename: impl Into<String>) -> Self {
        Self {
            input_filename: input_filename.into(),
            params: Vec::new(),
        }
    }

    /// Extra tokens appended to the command line, in order.
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

        let exe = executable(locator, LONG_ORFS_TOOL)?;
        let mut cmd = vec![exe, "-t".to_string(), input.to_string()];
        cmd.extend(self.params.iter().cloned());

        let task = TaskDescriptor {
            name: task_name(LONG_ORFS_TOOL, input),
            actions: vec![cmd.join(" ")],
            file_dep: vec![input.to_string()],
            targets: vec![longest_orfs_pep(input)],
            clean: vec![CleanAction::RemoveDir {
                path: work_dir(input),
            }],
        };
        tracing::debug!("Built task {}: {}", task.name, task.actions[0]);
        Ok(task)
    }
}
