//! Configuration module for reconflux
//!
//! - `root`: Main configuration and CLI overrides
//! - `pipeline`: Admission control and heartbeat tuning
//! - `scope`: Root domains, exclusions and run identifier
//! - `database`: SQLite graph sink
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod root;
pub mod scope;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pipeline::PipelineConfig;
pub use root::{CliOverrides, Config};
pub use scope::ScopeConfig;
