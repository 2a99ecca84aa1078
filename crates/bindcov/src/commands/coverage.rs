//! Coverage report command.

use super::{load_rules, ScanArgs};
use anyhow::{Context, Result};
use bindcov_coverage::check;
use bindcov_scan::NativeScanner;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub struct CoverageArgs {
    /// Native API header
    #[arg(long, default_value = "vendor/imgui/imgui.h")]
    pub header: PathBuf,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// JSON rule tables replacing the builtin ones
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Output the full report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Scan both sides, match them and print the report.
///
/// Diagnostics go to stderr, the summary to stdout. Coverage gaps never
/// make the command fail.
pub fn handle_coverage_command(args: &CoverageArgs) -> Result<()> {
    let config = args.scan.config();
    let rules = load_rules(args.rules.as_deref())?;

    let header = fs::read_to_string(&args.header)
        .with_context(|| format!("Failed to read header: {}", args.header.display()))?;
    let native = NativeScanner::new(&config).scan(&header);
    let binding = args.scan.scan_binding(&config)?;
    debug!(
        native = native.symbol_count(),
        binding = binding.symbol_count(),
        "scanned sources"
    );

    let report = check(&native, &binding, &rules);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.header());
    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }
    println!("{}", report);
    Ok(())
}
