use std::io::Write;

use orfpipe_core::api::{AppConfig, CliError, ExecutableLocator, TaskGraph};

use super::build_pair;
use super::cli::PlanArgs;

pub fn run(
    args: &PlanArgs,
    cfg: &AppConfig,
    locator: &dyn ExecutableLocator,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut tasks = Vec::new();
    for input in &args.inputs {
        tasks.extend(build_pair(locator, cfg, input, &args.build)?);
    }

    let graph = TaskGraph::from_tasks(&tasks)?;
    graph.validate()?;
    let stages = graph.stages()?;
    tracing::info!("Planned {} tasks in {} stages", tasks.len(), stages.len());

    for (i, stage) in stages.iter().enumerate() {
        writeln!(out, "stage {}:", i + 1)?;
        for name in stage {
            writeln!(out, "  {name}")?;
        }
    }
    writeln!(out, "external inputs:")?;
    for input in graph.external_inputs() {
        writeln!(out, "  {input}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli::BuildArgs;
    use orfpipe_core::api::StaticLocator;

    fn locator() -> StaticLocator {
        StaticLocator::new()
            .with("TransDecoder.LongOrfs", "LongOrfs")
            .with("TransDecoder.Predict", "Predict")
    }

    #[test]
    fn two_inputs_give_two_stages() {
        let args = PlanArgs {
            inputs: vec!["a.fa".to_string(), "b.fa".to_string()],
            build: BuildArgs::default(),
        };
        let mut out = Vec::new();
        run(&args, &AppConfig::default(), &locator(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "stage 1:\n  TransDecoder.LongOrfs:a.fa\n  TransDecoder.LongOrfs:b.fa\n\
             stage 2:\n  TransDecoder.Predict:a.fa\n  TransDecoder.Predict:b.fa\n\
             external inputs:\n  a.fa\n  b.fa\n"
        );
    }

    #[test]
    fn repeated_input_is_a_graph_error() {
        let args = PlanArgs {
            inputs: vec!["a.fa".to_string(), "a.fa".to_string()],
            build: BuildArgs::default(),
        };
        let err = run(&args, &AppConfig::default(), &locator(), &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::Graph(_)));
        assert_eq!(err.exit_code(), 13);
    }
}
