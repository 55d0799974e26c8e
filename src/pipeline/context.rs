//! Key-value context consumed by field extraction
//!
//! The calling layer hands the resolver an opaque store of already-parsed
//! flag values. [`CliContext`] is the accessor surface; [`MapContext`] is an
//! in-memory store and [`ClapContext`] reads the bundled CLI's parsed
//! matches.

use super::errors::ContextError;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Typed read access to flag values keyed by flag name
#[allow(clippy::missing_errors_doc)]
pub trait CliContext {
    /// Reads a boolean flag
    fn bool(&self, key: &str) -> Result<bool, ContextError>;

    /// Reads a string flag
    fn string(&self, key: &str) -> Result<String, ContextError>;

    /// Reads a repeatable string flag
    fn string_list(&self, key: &str) -> Result<Vec<String>, ContextError>;

    /// Reads a path flag
    fn path(&self, key: &str) -> Result<PathBuf, ContextError>;
}

/// A single value stored in a [`MapContext`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// Boolean flag
    Bool(bool),
    /// String flag
    String(String),
    /// Repeatable string flag
    StringList(Vec<String>),
    /// Path flag
    Path(PathBuf),
}

impl ContextValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::StringList(_) => "string list",
            Self::Path(_) => "path",
        }
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for ContextValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<PathBuf> for ContextValue {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

/// In-memory [`CliContext`] backed by a hash map
///
/// # Example
///
/// ```rust
/// use buildgate::{CliContext, MapContext};
///
/// let ctx = MapContext::new().set("v", true).set("version", "v1.0.0");
/// assert!(ctx.bool("v").unwrap());
/// assert_eq!(ctx.string("version").unwrap(), "v1.0.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapContext {
    values: HashMap<String, ContextValue>,
}

impl MapContext {
    /// Creates an empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous value for the key
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a key
    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        self.values.remove(key)
    }

    fn lookup(&self, key: &str) -> Result<&ContextValue, ContextError> {
        self.values
            .get(key)
            .ok_or_else(|| ContextError::MissingKey(key.to_string()))
    }
}

fn mismatch(key: &str, expected: &str, found: &ContextValue) -> ContextError {
    ContextError::TypeMismatch {
        key: key.to_string(),
        detail: format!("expected {expected}, found {}", found.type_name()),
    }
}

impl CliContext for MapContext {
    fn bool(&self, key: &str) -> Result<bool, ContextError> {
        match self.lookup(key)? {
            ContextValue::Bool(value) => Ok(*value),
            other => Err(mismatch(key, "bool", other)),
        }
    }

    fn string(&self, key: &str) -> Result<String, ContextError> {
        match self.lookup(key)? {
            ContextValue::String(value) => Ok(value.clone()),
            other => Err(mismatch(key, "string", other)),
        }
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>, ContextError> {
        match self.lookup(key)? {
            ContextValue::StringList(values) => Ok(values.clone()),
            other => Err(mismatch(key, "string list", other)),
        }
    }

    // Path keys are often supplied as plain strings.
    fn path(&self, key: &str) -> Result<PathBuf, ContextError> {
        match self.lookup(key)? {
            ContextValue::Path(value) => Ok(value.clone()),
            ContextValue::String(value) => Ok(PathBuf::from(value)),
            other => Err(mismatch(key, "path", other)),
        }
    }
}

fn from_matches_error(key: &str, err: &clap::parser::MatchesError) -> ContextError {
    match err {
        clap::parser::MatchesError::UnknownArgument { .. } => {
            ContextError::MissingKey(key.to_string())
        }
        _ => ContextError::TypeMismatch {
            key: key.to_string(),
            detail: err.to_string(),
        },
    }
}

/// [`CliContext`] over parsed [`clap::ArgMatches`]
///
/// Keys are checked against the arguments defined on the [`clap::Command`]
/// that produced the matches; `ArgMatches` alone cannot tell an unknown key
/// from an unset one outside debug builds. Defined flags that were neither
/// passed nor defaulted read as empty values.
#[derive(Debug, Clone)]
pub struct ClapContext<'a> {
    matches: &'a clap::ArgMatches,
    known: HashSet<String>,
}

impl<'a> ClapContext<'a> {
    /// Wraps `matches` parsed by `command`
    #[must_use]
    pub fn new(command: &clap::Command, matches: &'a clap::ArgMatches) -> Self {
        let known = command
            .get_arguments()
            .map(|arg| arg.get_id().as_str().to_string())
            .collect();
        Self { matches, known }
    }

    fn require(&self, key: &str) -> Result<(), ContextError> {
        if self.known.contains(key) {
            Ok(())
        } else {
            Err(ContextError::MissingKey(key.to_string()))
        }
    }
}

impl CliContext for ClapContext<'_> {
    fn bool(&self, key: &str) -> Result<bool, ContextError> {
        self.require(key)?;
        self.matches
            .try_get_one::<bool>(key)
            .map(|value| value.copied().unwrap_or_default())
            .map_err(|err| from_matches_error(key, &err))
    }

    fn string(&self, key: &str) -> Result<String, ContextError> {
        self.require(key)?;
        self.matches
            .try_get_one::<String>(key)
            .map(|value| value.cloned().unwrap_or_default())
            .map_err(|err| from_matches_error(key, &err))
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>, ContextError> {
        self.require(key)?;
        self.matches
            .try_get_many::<String>(key)
            .map(|values| values.map(|v| v.cloned().collect()).unwrap_or_default())
            .map_err(|err| from_matches_error(key, &err))
    }

    // Path flags may be defined as plain strings so that an empty value is
    // accepted and means "not given".
    fn path(&self, key: &str) -> Result<PathBuf, ContextError> {
        self.require(key)?;
        match self.matches.try_get_one::<PathBuf>(key) {
            Ok(value) => Ok(value.cloned().unwrap_or_default()),
            Err(clap::parser::MatchesError::Downcast { .. }) => self.string(key).map(PathBuf::from),
            Err(err) => Err(from_matches_error(key, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command, value_parser};

    #[test]
    fn test_map_context_typed_access() {
        let ctx = MapContext::new()
            .set("v", true)
            .set("version", "v1.0.0")
            .set("targets", vec!["linux/amd64".to_string(), "darwin/arm64".to_string()])
            .set("grafana-dir", PathBuf::from("/grafana"));

        assert!(ctx.bool("v").unwrap());
        assert_eq!(ctx.string("version").unwrap(), "v1.0.0");
        assert_eq!(ctx.string_list("targets").unwrap().len(), 2);
        assert_eq!(ctx.path("grafana-dir").unwrap(), PathBuf::from("/grafana"));
    }

    #[test]
    fn test_map_context_path_accepts_string() {
        let ctx = MapContext::new().set("enterprise-dir", "/src/enterprise");
        assert_eq!(
            ctx.path("enterprise-dir").unwrap(),
            PathBuf::from("/src/enterprise")
        );
    }

    #[test]
    fn test_map_context_missing_key() {
        let ctx = MapContext::new();
        assert_eq!(
            ctx.bool("enterprise"),
            Err(ContextError::MissingKey("enterprise".to_string()))
        );
    }

    #[test]
    fn test_map_context_type_mismatch() {
        let ctx = MapContext::new().set("grafana", "yes");
        let err = ctx.bool("grafana").unwrap_err();
        assert!(matches!(err, ContextError::TypeMismatch { ref key, .. } if key == "grafana"));
        assert!(err.to_string().contains("expected bool, found string"));
    }

    #[test]
    fn test_map_context_string_rejects_path() {
        let ctx = MapContext::new().set("version", PathBuf::from("/tmp"));
        assert!(ctx.string("version").is_err());
    }

    #[test]
    fn test_map_context_remove() {
        let mut ctx = MapContext::new().set("build-id", "abc");
        assert!(ctx.remove("build-id").is_some());
        assert!(ctx.string("build-id").is_err());
    }

    fn test_command() -> Command {
        Command::new("test")
            .arg(Arg::new("v").short('v').action(ArgAction::SetTrue))
            .arg(Arg::new("version").long("version"))
            .arg(
                Arg::new("dir")
                    .long("dir")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(Arg::new("tag").long("tag").action(ArgAction::Append))
            .disable_version_flag(true)
    }

    #[test]
    fn test_clap_context() {
        let cmd = test_command();
        let matches = cmd
            .clone()
            .try_get_matches_from(["test", "-v", "--version", "v2.0.0", "--dir", "/x", "--tag", "a", "--tag", "b"])
            .unwrap();
        let ctx = ClapContext::new(&cmd, &matches);

        assert!(ctx.bool("v").unwrap());
        assert_eq!(ctx.string("version").unwrap(), "v2.0.0");
        assert_eq!(ctx.path("dir").unwrap(), PathBuf::from("/x"));
        assert_eq!(ctx.string_list("tag").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_clap_context_unset_values_are_empty() {
        let cmd = test_command();
        let matches = cmd.clone().try_get_matches_from(["test"]).unwrap();
        let ctx = ClapContext::new(&cmd, &matches);

        assert!(!ctx.bool("v").unwrap());
        assert_eq!(ctx.string("version").unwrap(), "");
        assert_eq!(ctx.path("dir").unwrap(), PathBuf::new());
        assert!(ctx.string_list("tag").unwrap().is_empty());
    }

    #[test]
    fn test_clap_context_undefined_key_is_missing() {
        let cmd = test_command();
        let matches = cmd.clone().try_get_matches_from(["test"]).unwrap();
        let ctx = ClapContext::new(&cmd, &matches);

        for result in [
            ctx.string("enterprise-dir").map(drop),
            ctx.bool("enterprise").map(drop),
            ctx.path("enterprise-dir").map(drop),
            ctx.string_list("targets").map(drop),
        ] {
            assert!(matches!(result, Err(ContextError::MissingKey(_))));
        }
    }

    #[test]
    fn test_clap_context_path_from_string_arg() {
        let cmd = test_command();
        let matches = cmd
            .clone()
            .try_get_matches_from(["test", "--version", ""])
            .unwrap();
        let ctx = ClapContext::new(&cmd, &matches);

        assert_eq!(ctx.path("version").unwrap(), PathBuf::new());
    }

    #[test]
    fn test_clap_context_type_mismatch() {
        let cmd = test_command();
        let matches = cmd
            .clone()
            .try_get_matches_from(["test", "--dir", "/x"])
            .unwrap();
        let ctx = ClapContext::new(&cmd, &matches);

        assert!(matches!(
            ctx.string("dir"),
            Err(ContextError::TypeMismatch { .. })
        ));
    }
}
