//! bindcov - Binding coverage for Dear ImGui's ReaScript API
//!
//! Usage:
//!   bindcov coverage --header imgui.h --sources src/     Report binding coverage
//!   bindcov header --sources src/ --helper api_helper.hpp Generate the C++ header
//!   bindcov rules dump                                   Print the builtin rule tables

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    handle_coverage_command, handle_header_command, handle_rules_command, CoverageArgs,
    HeaderArgs, RulesAction,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bindcov")]
#[command(about = "Binding coverage for Dear ImGui's ReaScript API", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logs of the scanners and the matcher
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the native header with the binding sources
    Coverage(CoverageArgs),
    /// Generate the C++ header exposing the binding to native extensions
    Header(HeaderArgs),
    /// Inspect or check rule tables
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

/// Logs go to stderr so reports on stdout stay byte-identical.
///
/// `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,bindcov=debug,bindcov_scan=debug,bindcov_coverage=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Coverage(args) => handle_coverage_command(&args),
        Commands::Header(args) => handle_header_command(&args),
        Commands::Rules { action } => handle_rules_command(action),
    }
}
