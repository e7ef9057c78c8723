mod load;
mod types;

pub use load::{
    apply_env_overrides, fill_log_directory, get_orfpipe_data_dir, load_default, load_from_path,
    CONFIG_ENV, LOG_LEVEL_ENV, LONG_ORFS_BIN_ENV, PREDICT_BIN_ENV,
};
pub use types::{AppConfig, LoggingConfig, ToolsConfig, TransDecoderConfig};
