//! Task descriptors and the operations an engine-agnostic caller needs on them.
//!
//! ```text
//! LongOrfsTaskBuilder / PredictTaskBuilder
//!   ↓
//! TaskDescriptor { name, actions, file_dep, targets, clean }
//!   ↓
//! TaskGraph::from_tasks() → validate() → stages()   (wiring check)
//!   ↓
//! external task engine (runs actions, skips up-to-date targets)
//! ```

mod clean;
mod graph;
mod types;

pub use clean::CleanReport;
pub use graph::TaskGraph;
pub use types::{CleanAction, TaskDescriptor};
