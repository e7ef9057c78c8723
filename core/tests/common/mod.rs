#![allow(dead_code)]

use orfpipe_core::api::{StaticLocator, LONG_ORFS_TOOL, PREDICT_TOOL};

pub const LONG_ORFS_EXE: &str = "/usr/local/bin/TransDecoder.LongOrfs";
pub const PREDICT_EXE: &str = "/usr/local/bin/TransDecoder.Predict";

pub fn transdecoder_locator() -> StaticLocator {
    StaticLocator::new()
        .with(LONG_ORFS_TOOL, LONG_ORFS_EXE)
        .with(PREDICT_TOOL, PREDICT_EXE)
}

pub fn path_str(p: &std::path::Path) -> String {
    p.to_string_lossy().into_owned()
}
