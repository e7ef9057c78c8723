pub mod clean;
pub mod cli;
pub mod plan;
pub mod tasks;

use orfpipe_core::api::{
    timed, AppConfig, ExecutableLocator, LongOrfsTaskBuilder, PredictTaskBuilder,
    TaskDescriptor, TaskError,
};

use cli::BuildArgs;

/// LongOrfs then Predict for one input. Command-line params replace the
/// configured defaults rather than extending them.
pub fn build_pair(
    locator: &dyn ExecutableLocator,
    cfg: &AppConfig,
    input: &str,
    build: &BuildArgs,
) -> Result<Vec<TaskDescriptor>, TaskError> {
    let long_orfs_params = pick(&build.long_orfs_params, &cfg.transdecoder.long_orfs_params);
    let predict_params = pick(&build.predict_params, &cfg.transdecoder.predict_params);

    let long_orfs = timed(&format!("long_orfs:{input}"), || {
        LongOrfsTaskBuilder::new(input)
            .params(long_orfs_params.iter().cloned())
            .build(locator)
    })?;
    let predict = timed(&format!("predict:{input}"), || {
        PredictTaskBuilder::new(input)
            .pfam(build.pfam.clone())
            .params(predict_params.iter().cloned())
            .build(locator)
    })?;

    Ok(vec![long_orfs, predict])
}

fn pick<'a>(cli: &'a [String], configured: &'a [String]) -> &'a [String] {
    if cli.is_empty() {
        configured
    } else {
        cli
    }
}
