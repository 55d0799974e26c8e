//! `buildgate resolve` - Resolve pipeline arguments
//!
//! Reads the pipeline flags, applies the resolution rules and prints the
//! result. Nothing is printed to stdout when resolution fails.
//!
//! ## Usage
//!
//! ```bash
//! buildgate resolve --version v10.0.0 --enterprise-ref main --enterprise-dir ../enterprise
//! buildgate resolve --format json
//! ```

use anyhow::Result;
use buildgate::infrastructure::{Config, OutputFormat};
use buildgate::pipeline::{ArgsResolver, ClapContext, keys};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::io::Write;

/// Subcommand name
pub const NAME: &str = "resolve";

const FORMAT: &str = "format";

/// Defines the `resolve` subcommand and its pipeline flags
pub fn command() -> Command {
    Command::new(NAME)
        .about("Resolve and validate pipeline arguments")
        .disable_version_flag(true)
        .arg(
            Arg::new(keys::VERBOSE)
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Verbose output"),
        )
        .arg(
            Arg::new(keys::VERSION)
                .long("version")
                .value_name("VERSION")
                .help("Version to build"),
        )
        .arg(
            Arg::new(keys::GRAFANA)
                .long("grafana")
                .value_name("BOOL")
                .value_parser(value_parser!(bool))
                .num_args(0..=1)
                .default_value("true")
                .default_missing_value("true")
                .help("Build the primary tree"),
        )
        .arg(
            Arg::new(keys::GRAFANA_DIR)
                .long("grafana-dir")
                .value_name("PATH")
                .help("Local checkout of the primary tree"),
        )
        .arg(
            Arg::new(keys::GRAFANA_REF)
                .long("grafana-ref")
                .value_name("REF")
                .default_value("main")
                .help("Ref of the primary tree"),
        )
        .arg(
            Arg::new(keys::ENTERPRISE)
                .long("enterprise")
                .action(ArgAction::SetTrue)
                .help("Build the enterprise tree"),
        )
        .arg(
            Arg::new(keys::ENTERPRISE_DIR)
                .long("enterprise-dir")
                .value_name("PATH")
                .help("Local checkout of the enterprise tree; must exist if non-empty"),
        )
        .arg(
            Arg::new(keys::ENTERPRISE_REF)
                .long("enterprise-ref")
                .value_name("REF")
                .help("Ref of the enterprise tree; implies --enterprise"),
        )
        .arg(
            Arg::new(keys::BUILD_ID)
                .long("build-id")
                .value_name("ID")
                .help("Build identifier; generated when empty"),
        )
        .arg(
            Arg::new(keys::GITHUB_TOKEN)
                .long("github-token")
                .value_name("TOKEN")
                .env("GITHUB_TOKEN")
                .hide_env_values(true)
                .help("GitHub API token"),
        )
        .arg(
            Arg::new(FORMAT)
                .long("format")
                .value_parser(value_parser!(OutputFormat))
                .help("Output format [default: from config, else text]"),
        )
}

/// Whether `--verbose` was passed
pub fn verbose(matches: &ArgMatches) -> bool {
    matches.get_flag(keys::VERBOSE)
}

/// Resolves the arguments in `matches` and writes them to `out`
pub fn execute(matches: &ArgMatches, config: &Config, out: &mut impl Write) -> Result<()> {
    let format = matches
        .get_one::<OutputFormat>(FORMAT)
        .copied()
        .unwrap_or(config.format);

    let args = ArgsResolver::new().resolve_from_context(&ClapContext::new(&command(), matches))?;

    match format {
        OutputFormat::Text => writeln!(out, "{args}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&args)?)?,
    }

    Ok(())
}
