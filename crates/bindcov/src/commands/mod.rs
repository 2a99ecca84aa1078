//! Command handlers for the bindcov CLI.
//!
//! Each submodule handles one subcommand. Scanner settings shared by the
//! subcommands live here.

pub mod coverage;
pub mod header;
pub mod rules;

pub use coverage::{handle_coverage_command, CoverageArgs};
pub use header::{handle_header_command, HeaderArgs};
pub use rules::{handle_rules_command, RulesAction};

use anyhow::{Context, Result};
use bindcov_coverage::RuleSet;
use bindcov_scan::{BindingApi, BindingScanner, ScanConfig};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Scanner settings; the defaults match Dear ImGui and ReaImGui.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory containing the binding sources
    #[arg(long, default_value = "src")]
    pub sources: PathBuf,

    /// Export macro of the native header
    #[arg(long)]
    pub api_macro: Option<String>,

    /// Macro defining a binding function
    #[arg(long)]
    pub define_api: Option<String>,

    /// Macro exporting a binding enum
    #[arg(long)]
    pub define_enum: Option<String>,

    /// Suffix of the #ifndef guard around obsolete declarations
    #[arg(long)]
    pub obsolete_guard: Option<String>,

    /// File name prefix of binding sources
    #[arg(long)]
    pub source_prefix: Option<String>,
}

impl ScanArgs {
    /// Scanner configuration with the overrides applied.
    pub fn config(&self) -> ScanConfig {
        let mut config = ScanConfig::default();
        let overrides = [
            (&self.api_macro, &mut config.api_macro),
            (&self.define_api, &mut config.define_api),
            (&self.define_enum, &mut config.define_enum),
            (&self.obsolete_guard, &mut config.obsolete_guard),
            (&self.source_prefix, &mut config.source_prefix),
        ];
        for (value, setting) in overrides {
            if let Some(value) = value {
                *setting = value.clone();
            }
        }
        config
    }

    /// Scan every binding source.
    pub fn scan_binding(&self, config: &ScanConfig) -> Result<BindingApi> {
        BindingScanner::new(config)
            .scan_dir(&self.sources)
            .with_context(|| format!("Failed to scan binding sources in {}", self.sources.display()))
    }
}

/// Rule tables from `path`, or the builtin ones.
pub fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => {
            let rules = RuleSet::load_json(path)
                .with_context(|| format!("Failed to load rules: {}", path.display()))?;
            info!(path = %path.display(), "loaded rules");
            Ok(rules)
        }
        None => Ok(RuleSet::builtin()),
    }
}

/// Write `text` to `output`, or to stdout.
pub fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}
