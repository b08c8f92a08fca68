//! Step-by-step path replay.
//!
//! Turns a computed tour path into a paced stream of [`StepEvent`]s for
//! incremental rendering. The replay sleeps between steps and honors a
//! cooperative cancel flag checked at every step boundary; a cancelled
//! replay is not resumable and must be restarted from the beginning.

mod config;
mod runner;
mod types;

pub use config::ReplayConfig;
pub use runner::{ReplayReport, ReplayRunner};
pub use types::{ReplayStatus, StepEvent, StepSink, TrackPoint};
