//! `buildgate completions` - Generate shell completions
//!
//! Supports bash, zsh, fish, elvish and PowerShell.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, value_parser};
use clap_complete::Shell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Subcommand name
pub const NAME: &str = "completions";

/// Defines the `completions` subcommand
pub fn command() -> Command {
    Command::new(NAME)
        .about("Generate shell completions")
        .arg(
            Arg::new("shell")
                .required(true)
                .value_parser(value_parser!(Shell))
                .help("Shell type"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Output file (stdout if not specified)"),
        )
}

/// Renders the completion script for `shell`
pub fn generate_completions(shell: Shell) -> Result<String> {
    use clap_complete::generate;

    let mut cmd = super::build_cli();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "buildgate", &mut buf);

    String::from_utf8(buf).context("Failed to generate completions")
}

/// Writes a rendered completion script to `output_path`
pub fn save_completions(completions: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, completions)
        .with_context(|| format!("Failed to write completions to: {}", output_path.display()))?;
    Ok(())
}

/// Writes completions for the requested shell to `--output` or `out`
pub fn execute(matches: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let shell = matches
        .get_one::<Shell>("shell")
        .copied()
        .context("Missing shell argument")?;
    let completions = generate_completions(shell)?;

    if let Some(output_path) = matches.get_one::<PathBuf>("output") {
        save_completions(&completions, output_path)?;
        tracing::info!(path = %output_path.display(), "Wrote completions");
    } else {
        write!(out, "{completions}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_bash_completions() {
        let completions = generate_completions(Shell::Bash).unwrap();
        assert!(!completions.is_empty());
        assert!(completions.contains("buildgate"));
    }

    #[test]
    fn test_generate_zsh_completions() {
        let completions = generate_completions(Shell::Zsh).unwrap();
        assert!(completions.contains("enterprise-ref"));
    }

    #[test]
    fn test_execute_to_stdout() {
        let matches = command().try_get_matches_from([NAME, "fish"]).unwrap();
        let mut out = Vec::new();
        execute(&matches, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("buildgate"));
    }

    #[test]
    fn test_execute_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("buildgate.bash");
        let matches = command()
            .try_get_matches_from([NAME, "bash", "-o", path.to_str().unwrap()])
            .unwrap();
        let mut out = Vec::new();

        execute(&matches, &mut out).unwrap();
        assert!(out.is_empty());
        assert!(fs::read_to_string(&path).unwrap().contains("buildgate"));
    }
}
