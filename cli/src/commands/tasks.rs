use std::io::Write;

use orfpipe_core::api::{AppConfig, CliError, ExecutableLocator, TaskDescriptor};

use super::build_pair;
use super::cli::{OutputFormat, TasksArgs};

pub fn run(
    args: &TasksArgs,
    cfg: &AppConfig,
    locator: &dyn ExecutableLocator,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let tasks = build_pair(locator, cfg, &args.input, &args.build)?;
    render(&tasks, args.format, out)
}

pub fn render(
    tasks: &[TaskDescriptor],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(tasks).map_err(anyhow::Error::from)?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Jsonl => {
            for task in tasks {
                let line = serde_json::to_string(task).map_err(anyhow::Error::from)?;
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Text => {
            for task in tasks {
                writeln!(out, "{}", task.name)?;
                for action in &task.actions {
                    writeln!(out, "  action:  {action}")?;
                }
                for dep in &task.file_dep {
                    writeln!(out, "  dep:     {dep}")?;
                }
                for target in &task.targets {
                    writeln!(out, "  target:  {target}")?;
                }
            }
        }
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

    fn args(format: OutputFormat) -> TasksArgs {
        TasksArgs {
            input: "sample.fa".to_string(),
            build: BuildArgs {
                pfam: Some("hits.pfam".to_string()),
                ..BuildArgs::default()
            },
            format,
        }
    }

    #[test]
    fn jsonl_prints_one_descriptor_per_line() {
        let mut out = Vec::new();
        run(&args(OutputFormat::Jsonl), &AppConfig::default(), &locator(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let tasks: Vec<TaskDescriptor> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "TransDecoder.LongOrfs:sample.fa");
        assert_eq!(
            tasks[1].actions,
            vec!["Predict -t sample.fa --retain_pfam_hits hits.pfam"]
        );
    }

    #[test]
    fn configured_params_apply_when_cli_has_none() {
        let mut cfg = AppConfig::default();
        cfg.transdecoder.long_orfs_params = vec!["-m".to_string(), "80".to_string()];

        let mut out = Vec::new();
        run(&args(OutputFormat::Text), &cfg, &locator(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("action:  LongOrfs -t sample.fa -m 80"));
        assert!(text.contains("target:  sample.fa.transdecoder.gff3"));
    }

    #[test]
    fn blank_pfam_maps_to_exit_code_13() {
        let mut blank = args(OutputFormat::Text);
        blank.build.pfam = Some(String::new());

        let mut out = Vec::new();
        let err = run(&blank, &AppConfig::default(), &locator(), &mut out).unwrap_err();
        assert_eq!(err.exit_code(), 13);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_tool_maps_to_exit_code_12() {
        let mut out = Vec::new();
        let err = run(
            &args(OutputFormat::Json),
            &AppConfig::default(),
            &StaticLocator::new(),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(out.is_empty());
    }
}
