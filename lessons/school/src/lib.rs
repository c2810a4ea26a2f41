//! School - runner for the OnlineSchool data-modeling lessons.
//!
//! Three independent lessons, run in program order:
//! - `classes`: reference types ([`school_classes`])
//! - `structs`: value types ([`school_structs`])
//! - `enums`: enumerations ([`school_enums`])

mod config;
mod error;
mod lesson;
mod runner;
mod tracing_setup;

pub use config::RunConfig;
pub use error::{CliError, CliResult};
pub use lesson::Lesson;
pub use runner::{run_lessons, RunSummary};
pub use tracing_setup::{init_tracing, LOG_ENV_VAR};
