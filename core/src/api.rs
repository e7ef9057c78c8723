//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `orfpipe_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, load_from_path, AppConfig, LoggingConfig, ToolsConfig, TransDecoderConfig,
};
pub use crate::error::{CliError, GraphError, TaskError};
pub use crate::locator::{ConfiguredLocator, ExecutableLocator, PathLocator, StaticLocator};
pub use crate::profile::{measure, timed, Timed};
pub use crate::task::{CleanAction, CleanReport, TaskDescriptor, TaskGraph};
pub use crate::transdecoder::{
    LongOrfsTaskBuilder, PredictTaskBuilder, LONG_ORFS_TOOL, PREDICT_TOOL,
};
