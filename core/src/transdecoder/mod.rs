//! Task builders for the two TransDecoder steps.
//!
//! `TransDecoder.LongOrfs` writes its candidates under `<input>.transdecoder_dir/`;
//! `TransDecoder.Predict` reads them back and writes `<input>.transdecoder.*`.
//! These names belong to TransDecoder and are mirrored here, not derived.

mod long_orfs;
mod predict;

use std::path::Path;

use crate::error::TaskError;
use crate::locator::ExecutableLocator;

pub use long_orfs::LongOrfsTaskBuilder;
pub use predict::PredictTaskBuilder;

pub const LONG_ORFS_TOOL: &str = "TransDecoder.LongOrfs";
pub const PREDICT_TOOL: &str = "TransDecoder.Predict";

pub const WORK_DIR_SUFFIX: &str = ".transdecoder_dir";
pub const LONGEST_ORFS_PEP: &str = "longest_orfs.pep";
pub const PREDICT_PREFIX: &str = ".transdecoder";
pub const PREDICT_EXTENSIONS: [&str; 5] = [".bed", ".cds", ".pep", ".gff3", ".mRNA"];
pub const RETAIN_PFAM_HITS_FLAG: &str = "--retain_pfam_hits";

/// `<input>.transdecoder_dir`
pub fn work_dir(input_filename: &str) -> String {
    format!("{input_filename}{WORK_DIR_SUFFIX}")
}

/// `<input>.transdecoder_dir/longest_orfs.pep`
pub fn longest_orfs_pep(input_filename: &str) -> String {
    format!("{}/{LONGEST_ORFS_PEP}", work_dir(input_filename))
}

/// The five `<input>.transdecoder.*` outputs of the prediction step.
pub fn predict_targets(input_filename: &str) -> Vec<String> {
    PREDICT_EXTENSIONS
        .iter()
        .map(|ext| format!("{input_filename}{PREDICT_PREFIX}{ext}"))
        .collect()
}

fn check_input(input_filename: &str) -> Result<(), TaskError> {
    if input_filename.trim().is_empty() {
        return Err(TaskError::EmptyInput);
    }
    Ok(())
}

fn task_name(tool: &str, input_filename: &str) -> String {
    let base = Path::new(input_filename)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_filename.to_string());
    format!("{tool}:{base}")
}

/// First command token: the resolved executable.
fn executable(locator: &dyn ExecutableLocator, tool: &str) -> Result<String, TaskError> {
    let path = locator.resolve(tool)?;
    Ok(path.to_string_lossy().into_owned())
}
