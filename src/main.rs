//! buildgate - resolve release pipeline build arguments
//!
//! ## Commands
//!
//! - `buildgate resolve` - Resolve, validate and print pipeline arguments
//! - `buildgate completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Resolve arguments for an enterprise build from a local checkout
//! buildgate resolve --version v10.0.0 --enterprise-ref main --enterprise-dir ../enterprise
//!
//! # Machine-readable output
//! buildgate resolve --build-id nightly-42 --format json
//!
//! # Generate shell completions
//! buildgate completions bash > /etc/bash_completion.d/buildgate
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if std::env::var("BUILDGATE_VERBOSE").is_ok() {
                eprintln!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}
