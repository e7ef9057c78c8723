use std::path::PathBuf;

use clap::Parser;
mod commands;
use commands::cli;
use orfpipe_core::api::{AppConfig, CliError, ConfiguredLocator};
use orfpipe_core::config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg = load_config(&args).map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Config)?;

    let locator = ConfiguredLocator::from_config(&cfg.tools);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        cli::Commands::Tasks(a) => commands::tasks::run(a, &cfg, &locator, &mut out)?,
        cli::Commands::Plan(a) => commands::plan::run(a, &cfg, &locator, &mut out)?,
        cli::Commands::Clean(a) => commands::clean::run(a, &cfg, &locator, &mut out)?,
    }
    Ok(0)
}

fn load_config(args: &cli::Args) -> anyhow::Result<AppConfig> {
    match &args.config {
        Some(path) => {
            let mut cfg = config::load_from_path(path)?;
            config::apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
            if let Ok(data_dir) = config::get_orfpipe_data_dir() {
                config::fill_log_directory(&mut cfg, &data_dir);
            }
            Ok(cfg)
        }
        None => config::load_default(),
    }
}

fn init_tracing(logging: &config::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(&logging.level).map_err(|e| e.to_string())?,
    };

    let file_writer = if logging.file {
        Some(log_file_writer(logging.directory.as_deref())?)
    } else {
        None
    };

    if !logging.console && file_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = file_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// One log file per invocation, `orfpipe.<pid>.log`, under `directory`
/// (normally `~/.orfpipe/logs`; the temp dir when no home is known).
fn log_file_writer(
    directory: Option<&str>,
) -> Result<tracing_appender::non_blocking::NonBlocking, String> {
    let dir = directory
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("orfpipe"));

    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("create log dir {} failed: {e}", dir.display()))?;
    let appender =
        tracing_appender::rolling::never(&dir, format!("orfpipe.{}.log", std::process::id()));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Ok(non_blocking)
}
