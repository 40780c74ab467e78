//! Utility helpers: scoped logging timers and step profiling.

pub mod logging;
pub mod profiling;

pub use profiling::StepStats;
