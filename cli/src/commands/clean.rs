use std::io::Write;

use orfpipe_core::api::{AppConfig, CliError, ExecutableLocator};

use super::build_pair;
use super::cli::CleanArgs;

pub fn run(
    args: &CleanArgs,
    cfg: &AppConfig,
    locator: &dyn ExecutableLocator,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let tasks = build_pair(locator, cfg, &args.input, &args.build)?;

    // Predict first: its cleanup also covers the shared working directory.
    for task in tasks.iter().rev() {
        let report = task.clean_up()?;
        for path in &report.removed {
            writeln!(out, "removed {}", path.display())?;
        }
    }
    Ok(())
}
