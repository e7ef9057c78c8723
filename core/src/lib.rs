//! Task descriptors for running TransDecoder inside a dependency-driven
//! pipeline.

pub mod api;
pub mod config;
pub mod error;
pub mod locator;
pub mod profile;
pub mod task;
pub mod transdecoder;
