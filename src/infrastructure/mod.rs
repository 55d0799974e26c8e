//! Infrastructure layer
//!
//! Configuration loading and logging setup.

mod config;
mod logging;

pub use config::{CONFIG_ENV, Config, ConfigError, OutputFormat};
pub use logging::init_logging;
