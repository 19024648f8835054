//! WeatherFan - concurrent current-conditions report for US state capitals
//!
//! Fans out one request per capital against the Open-Meteo API, bounded by
//! a semaphore admission gate and a single shared deadline, then fans the
//! results back in and renders a fixed-width report.
//!
//! # Core Concepts
//!
//! - **One task per city**: every capital gets its own tokio task
//! - **Admission gate**: at most `concurrency` requests are in flight
//! - **Shared deadline**: a single instant bounds gate waits and round trips
//! - **Total report**: every city appears exactly once, success or failure
//!
//! # Modules
//!
//! - [`capitals`] - Static work item source
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration types and loading
//! - [`domain`] - Cities, conditions, and outcomes
//! - [`fetch`] - Fetcher trait and Open-Meteo client
//! - [`report`] - Ordering, compass mapping, table rendering
//! - [`runner`] - Bounded fan-out/fan-in runner

pub mod capitals;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use capitals::capitals;
pub use cli::Cli;
pub use config::{Config, FetchConfig, TemperatureUnit, UnitsConfig, WindSpeedUnit};
pub use domain::{City, CurrentConditions, Outcome, TaskError};
pub use fetch::{FetchError, Fetcher, OpenMeteoClient};
pub use report::{compass_point, render};
pub use runner::{Runner, RunnerConfig, RunnerError};
