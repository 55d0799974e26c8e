//! Prelude module for common imports

pub use crate::pipeline::args::{GitHubToken, PipelineArgs, PipelineArgsInput};
pub use crate::pipeline::context::{ClapContext, CliContext, ContextValue, MapContext};
pub use crate::pipeline::errors::{ArgsError, ContextError};
pub use crate::pipeline::probe::{DirProbe, HostFs, KnownDirs};
pub use crate::pipeline::resolver::{ArgsResolver, pipeline_args_from_context};
pub use crate::pipeline::types::Validate;
