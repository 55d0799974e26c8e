//! # Buildgate - release pipeline argument resolution
//!
//! Buildgate turns loosely-typed command-line flags into one validated
//! [`PipelineArgs`] value before any build work starts. Every later pipeline
//! stage (checkout, compilation, packaging) reads its configuration from that
//! value.
//!
//! ## Quick Start
//!
//! ```rust
//! use buildgate::prelude::*;
//!
//! let ctx = MapContext::new()
//!     .set("v", false)
//!     .set("version", "v1.0.0")
//!     .set("grafana", true)
//!     .set("grafana-dir", "/src/grafana")
//!     .set("grafana-ref", "main")
//!     .set("enterprise", false)
//!     .set("enterprise-dir", "")
//!     .set("enterprise-ref", "")
//!     .set("build-id", "")
//!     .set("github-token", "");
//!
//! let args = pipeline_args_from_context(&ctx).unwrap();
//! assert_eq!(args.build_id().len(), 12);
//! assert!(!args.build_enterprise());
//! ```
//!
//! ## Resolution rules
//!
//! - An empty `build-id` is replaced with a random 12-character
//!   alphanumeric ID.
//! - `enterprise-ref` implies `enterprise`.
//! - A given `enterprise-dir` must be an existing directory.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod pipeline;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{Config, ConfigError, OutputFormat, init_logging};
pub use pipeline::{
    ArgsError, ArgsResolver, ClapContext, CliContext, ContextError, ContextValue, DirProbe,
    GitHubToken, HostFs, KnownDirs, MapContext, PipelineArgs, PipelineArgsInput, Validate,
    pipeline_args_from_context,
};

/// Version of the buildgate crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
