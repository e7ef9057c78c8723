use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Jsonl,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "orfpipe", version, about = "TransDecoder task descriptors")]
pub struct Args {
    /// Config file; overrides ~/.orfpipe/config.toml and ./orfpipe.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the LongOrfs and Predict descriptors for one FASTA file.
    Tasks(TasksArgs),
    /// Check the task wiring for one or more FASTA files and print run stages.
    Plan(PlanArgs),
    /// Remove the outputs and working directory of a previous run.
    Clean(CleanArgs),
}

/// Options shared by every command that builds descriptors.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct BuildArgs {
    /// hmmscan/Pfam result passed to `--retain_pfam_hits`.
    #[arg(long)]
    pub pfam: Option<String>,

    /// Extra token for TransDecoder.LongOrfs. Can be specified multiple times.
    #[arg(long = "long-orfs-param", action = clap::ArgAction::Append, allow_hyphen_values = true)]
    pub long_orfs_params: Vec<String>,

    /// Extra token for TransDecoder.Predict. Can be specified multiple times.
    #[arg(long = "predict-param", action = clap::ArgAction::Append, allow_hyphen_values = true)]
    pub predict_params: Vec<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TasksArgs {
    pub input: String,

    #[command(flatten)]
    pub build: BuildArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PlanArgs {
    #[arg(required = true)]
    pub inputs: Vec<String>,

    #[command(flatten)]
    pub build: BuildArgs,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CleanArgs {
    pub input: String,

    #[command(flatten)]
    pub build: BuildArgs,
}
