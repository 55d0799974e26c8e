//! Extracted and resolved pipeline arguments

#![allow(clippy::must_use_candidate)]

use super::context::CliContext;
use super::errors::ArgsError;
use super::keys;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Typed values read from the calling layer before any inference
///
/// Every field mirrors one recognized flag. Callers that already hold typed
/// values can build this directly and skip [`from_context`](Self::from_context).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PipelineArgsInput {
    /// `v`
    pub verbose: bool,
    /// `version`
    pub version: String,
    /// `grafana`
    pub grafana: bool,
    /// `grafana-dir`
    pub grafana_dir: PathBuf,
    /// `grafana-ref`
    pub grafana_ref: String,
    /// `enterprise`
    pub enterprise: bool,
    /// `enterprise-dir`
    pub enterprise_dir: PathBuf,
    /// `enterprise-ref`
    pub enterprise_ref: String,
    /// `build-id`
    pub build_id: String,
    /// `github-token`, `None` when empty
    pub github_token: Option<GitHubToken>,
}

impl PipelineArgsInput {
    /// Reads every recognized key from the context
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::Context`] if a key is missing or holds a value of
    /// the wrong type.
    pub fn from_context(ctx: &impl CliContext) -> Result<Self, ArgsError> {
        let input = Self {
            verbose: ctx.bool(keys::VERBOSE)?,
            version: ctx.string(keys::VERSION)?,
            grafana: ctx.bool(keys::GRAFANA)?,
            grafana_dir: ctx.path(keys::GRAFANA_DIR)?,
            grafana_ref: ctx.string(keys::GRAFANA_REF)?,
            enterprise: ctx.bool(keys::ENTERPRISE)?,
            enterprise_dir: ctx.path(keys::ENTERPRISE_DIR)?,
            enterprise_ref: ctx.string(keys::ENTERPRISE_REF)?,
            build_id: ctx.string(keys::BUILD_ID)?,
            github_token: GitHubToken::new(ctx.string(keys::GITHUB_TOKEN)?),
        };

        tracing::debug!(
            version = %input.version,
            grafana_ref = %input.grafana_ref,
            enterprise_ref = %input.enterprise_ref,
            "Extracted pipeline arguments from context"
        );

        Ok(input)
    }
}

/// A GitHub access token that never appears in logs or serialized output
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    /// Wraps a token; empty strings yield `None`
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() { None } else { Some(Self(token)) }
    }

    /// Returns the raw token for handing to an API client
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken(***)")
    }
}

/// Validated build arguments shared by every pipeline stage
///
/// Built only by [`ArgsResolver`](super::ArgsResolver); read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(clippy::struct_excessive_bools)]
pub struct PipelineArgs {
    pub(crate) verbose: bool,
    pub(crate) version: String,
    pub(crate) build_grafana: bool,
    pub(crate) grafana_dir: PathBuf,
    pub(crate) grafana_ref: String,
    pub(crate) build_enterprise: bool,
    pub(crate) enterprise_dir: PathBuf,
    pub(crate) enterprise_ref: String,
    pub(crate) build_id: String,
    #[serde(skip)]
    pub(crate) github_token: Option<GitHubToken>,
}

impl PipelineArgs {
    /// Whether verbose output was requested
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Version being built; may be empty
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the primary tree is built
    pub fn build_grafana(&self) -> bool {
        self.build_grafana
    }

    /// Local checkout of the primary tree
    pub fn grafana_dir(&self) -> &Path {
        &self.grafana_dir
    }

    /// Ref of the primary tree
    pub fn grafana_ref(&self) -> &str {
        &self.grafana_ref
    }

    /// Whether the enterprise tree is built
    pub fn build_enterprise(&self) -> bool {
        self.build_enterprise
    }

    /// Local checkout of the enterprise tree; empty when not given
    pub fn enterprise_dir(&self) -> &Path {
        &self.enterprise_dir
    }

    /// Ref of the enterprise tree
    pub fn enterprise_ref(&self) -> &str {
        &self.enterprise_ref
    }

    /// Identifier tagging this pipeline run
    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    /// Token for GitHub API access, if one was supplied
    pub fn github_token(&self) -> Option<&GitHubToken> {
        self.github_token.as_ref()
    }
}

impl fmt::Display for PipelineArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "build-id:         {}", self.build_id)?;
        writeln!(f, "version:          {}", self.version)?;
        writeln!(f, "verbose:          {}", self.verbose)?;
        writeln!(f, "build-grafana:    {}", self.build_grafana)?;
        writeln!(f, "grafana-dir:      {}", self.grafana_dir.display())?;
        writeln!(f, "grafana-ref:      {}", self.grafana_ref)?;
        writeln!(f, "build-enterprise: {}", self.build_enterprise)?;
        writeln!(f, "enterprise-dir:   {}", self.enterprise_dir.display())?;
        writeln!(f, "enterprise-ref:   {}", self.enterprise_ref)?;
        write!(
            f,
            "github-token:     {}",
            if self.github_token.is_some() { "set" } else { "unset" }
        )
    }
}
