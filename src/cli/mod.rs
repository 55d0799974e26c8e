//! CLI tools for buildgate
//!
//! - `resolve`: Resolve and validate pipeline arguments, then print them
//! - `completions`: Generate shell completions

pub mod completions;
pub mod resolve;

use anyhow::Result;
use buildgate::infrastructure::{CONFIG_ENV, Config, init_logging};
use clap::{Arg, ArgMatches, Command, value_parser};
use std::io::Write;
use std::path::PathBuf;

/// Build the CLI command
pub fn build_cli() -> Command {
    Command::new("buildgate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolves and validates release pipeline build arguments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .env(CONFIG_ENV)
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("YAML configuration file"),
        )
        .subcommand(resolve::command())
        .subcommand(completions::command())
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let matches = build_cli().get_matches();
    let stdout = std::io::stdout();
    execute(&matches, &mut stdout.lock())
}

/// Execute already-parsed arguments, writing command output to `out`
pub fn execute(matches: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    match matches.subcommand() {
        Some((resolve::NAME, sub)) => {
            let level = if resolve::verbose(sub) {
                "debug".to_string()
            } else {
                config.log_level.to_lowercase()
            };
            init_logging(&level);
            resolve::execute(sub, &config, out)
        }
        Some((completions::NAME, sub)) => {
            init_logging(&config.log_level.to_lowercase());
            completions::execute(sub, out)
        }
        Some((other, _)) => anyhow::bail!("Unknown command: {other}"),
        None => anyhow::bail!("No command given"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cli_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_missing_config_file_fails() {
        let matches = build_cli()
            .try_get_matches_from(["buildgate", "--config", "/nonexistent/buildgate.yaml", "resolve"])
            .unwrap();
        let mut out = Vec::new();

        let err = execute(&matches, &mut out).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/buildgate.yaml"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(build_cli().try_get_matches_from(["buildgate"]).is_err());
    }
}
