use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub transdecoder: TransDecoderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory`.
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "orfpipe_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Directory for log files. The loader fills in `~/.orfpipe/logs` when unset.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Where the wrapped executables live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Pinned path for `TransDecoder.LongOrfs`.
    #[serde(default)]
    pub long_orfs: Option<String>,

    /// Pinned path for `TransDecoder.Predict`.
    #[serde(default)]
    pub predict: Option<String>,

    /// PATH-style list searched instead of the process `PATH`.
    #[serde(default)]
    pub search_path: Option<String>,
}

/// Default extra parameters, used when the command line passes none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransDecoderConfig {
    #[serde(default)]
    pub long_orfs_params: Vec<String>,

    #[serde(default)]
    pub predict_params: Vec<String>,
}
