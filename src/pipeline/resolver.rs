//! Cross-field validation and inference
//!
//! [`ArgsResolver`] turns a [`PipelineArgsInput`] into [`PipelineArgs`]:
//!
//! 1. An empty build ID is replaced with a generated one.
//! 2. `build_enterprise` is set when `enterprise` is true or an
//!    `enterprise-ref` is given.
//! 3. An explicit `enterprise-dir` must name an existing directory.
//!
//! Everything else passes through unchanged. Resolution is all-or-nothing.

use super::args::{PipelineArgs, PipelineArgsInput};
use super::build_id::generate_build_id;
use super::context::CliContext;
use super::errors::ArgsError;
use super::keys;
use super::probe::{DirProbe, HostFs};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io;
use std::path::Path;

/// Resolves pipeline arguments using an injected directory probe and RNG
#[derive(Debug)]
pub struct ArgsResolver<P = HostFs, R = StdRng> {
    probe: P,
    rng: R,
}

impl ArgsResolver {
    /// Creates a resolver backed by the host filesystem and an
    /// entropy-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(HostFs, StdRng::from_entropy())
    }
}

impl Default for ArgsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DirProbe> ArgsResolver<P, StdRng> {
    /// Creates a resolver whose generated build IDs are reproducible
    #[must_use]
    pub fn seeded(probe: P, seed: u64) -> Self {
        Self::with_parts(probe, StdRng::seed_from_u64(seed))
    }
}

impl<P: DirProbe, R: RngCore> ArgsResolver<P, R> {
    /// Creates a resolver from an explicit probe and RNG
    #[must_use]
    pub fn with_parts(probe: P, rng: R) -> Self {
        Self { probe, rng }
    }

    /// Validates `input` and produces the final arguments
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::MissingResource`], [`ArgsError::NotADirectory`]
    /// or [`ArgsError::Io`] when `enterprise-dir` is given but does not name
    /// an accessible directory.
    pub fn resolve(&mut self, input: PipelineArgsInput) -> Result<PipelineArgs, ArgsError> {
        let build_id = if input.build_id.is_empty() {
            let id = generate_build_id(&mut self.rng);
            tracing::debug!(build_id = %id, "No build ID given, generated one");
            id
        } else {
            input.build_id
        };

        let build_enterprise = input.enterprise || !input.enterprise_ref.is_empty();

        if !input.enterprise_dir.as_os_str().is_empty() {
            self.require_dir(keys::ENTERPRISE_DIR, &input.enterprise_dir)?;
        }

        let args = PipelineArgs {
            verbose: input.verbose,
            version: input.version,
            build_grafana: input.grafana,
            grafana_dir: input.grafana_dir,
            grafana_ref: input.grafana_ref,
            build_enterprise,
            enterprise_dir: input.enterprise_dir,
            enterprise_ref: input.enterprise_ref,
            build_id,
            github_token: input.github_token,
        };

        tracing::info!(
            build_id = %args.build_id,
            version = %args.version,
            build_grafana = args.build_grafana,
            build_enterprise = args.build_enterprise,
            "Resolved pipeline arguments"
        );

        Ok(args)
    }

    /// Extracts the input from `ctx` and resolves it
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::Context`] for a broken context, otherwise the
    /// errors of [`resolve`](Self::resolve).
    pub fn resolve_from_context(
        &mut self,
        ctx: &impl CliContext,
    ) -> Result<PipelineArgs, ArgsError> {
        let input = PipelineArgsInput::from_context(ctx)?;
        self.resolve(input)
    }

    fn require_dir(&self, field: &'static str, path: &Path) -> Result<(), ArgsError> {
        let result = match self.probe.is_dir(path) {
            Ok(true) => return Ok(()),
            Ok(false) => ArgsError::MissingResource {
                field,
                path: path.to_path_buf(),
            },
            Err(err) if err.kind() == io::ErrorKind::NotADirectory => ArgsError::NotADirectory {
                field,
                path: path.to_path_buf(),
            },
            Err(err) => ArgsError::Io {
                field,
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        };

        tracing::warn!(field, path = %path.display(), "Directory check failed");
        Err(result)
    }
}

/// Resolves pipeline arguments from `ctx` with the default resolver
///
/// # Errors
///
/// See [`ArgsResolver::resolve_from_context`].
pub fn pipeline_args_from_context(ctx: &impl CliContext) -> Result<PipelineArgs, ArgsError> {
    ArgsResolver::new().resolve_from_context(ctx)
}
