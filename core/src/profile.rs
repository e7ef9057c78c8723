//! Call-site timing for task construction and cleanup.
//!
//! Wrap the call instead of the builder:
//!
//! ```ignore
//! let task = profile::timed("long_orfs", || builder.build(&locator))?;
//! ```

use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

pub fn measure<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Run `f` and log `label` with the elapsed time at debug level.
pub fn timed<T, F>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let Timed { value, elapsed } = measure(f);
    tracing::debug!(
        label,
        elapsed_us = elapsed.as_micros() as u64,
        "profiled call finished"
    );
    value
}
