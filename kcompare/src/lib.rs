use std::sync::LazyLock;
use std::time::Instant;

pub mod batch;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod io;
pub mod report;

/// Start of the process, used as reference point in the log output
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
