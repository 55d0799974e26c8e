//! Pipeline argument extraction and resolution

pub mod args;
pub mod build_id;
pub mod context;
pub mod errors;
pub mod probe;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod types_tests;

pub use args::{GitHubToken, PipelineArgs, PipelineArgsInput};
pub use build_id::{BUILD_ID_LEN, generate_build_id};
pub use context::{ClapContext, CliContext, ContextValue, MapContext};
pub use errors::{ArgsError, ContextError};
pub use probe::{DirProbe, HostFs, KnownDirs};
pub use resolver::{ArgsResolver, pipeline_args_from_context};
pub use types::Validate;

/// Flag names read from the context
pub mod keys {
    /// Verbose output
    pub const VERBOSE: &str = "v";
    /// Version to build
    pub const VERSION: &str = "version";
    /// Build the primary tree
    pub const GRAFANA: &str = "grafana";
    /// Local checkout of the primary tree
    pub const GRAFANA_DIR: &str = "grafana-dir";
    /// Ref of the primary tree
    pub const GRAFANA_REF: &str = "grafana-ref";
    /// Build the enterprise tree
    pub const ENTERPRISE: &str = "enterprise";
    /// Local checkout of the enterprise tree
    pub const ENTERPRISE_DIR: &str = "enterprise-dir";
    /// Ref of the enterprise tree
    pub const ENTERPRISE_REF: &str = "enterprise-ref";
    /// Build identifier
    pub const BUILD_ID: &str = "build-id";
    /// GitHub API token
    pub const GITHUB_TOKEN: &str = "github-token";
}
