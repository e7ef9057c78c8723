#[allow(clippy::module_inception)]
pub mod error;
pub mod graph;
pub mod task;

pub use error::CliError;
pub use graph::GraphError;
pub use task::TaskError;
