//! Rule table commands.

use super::{load_rules, write_output};
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Rule table actions.
#[derive(Subcommand)]
pub enum RulesAction {
    /// Print the builtin rule tables as JSON
    Dump {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load and check a JSON rule file
    Check {
        /// Path to the rule file
        path: PathBuf,
    },
}

/// Handle rule table commands.
pub fn handle_rules_command(action: RulesAction) -> Result<()> {
    match action {
        RulesAction::Dump { output } => {
            let mut json = load_rules(None)?.to_json()?;
            json.push('\n');
            write_output(output.as_deref(), &json)?;
        }

        RulesAction::Check { path } => {
            let rules = load_rules(Some(path.as_path()))?;

            println!("Rules: {}", path.display());
            println!("{}", "=".repeat(40));
            println!("Native-only functions:  {}", rules.native_only.len());
            println!("Native-only classes:    {}", rules.native_only_classes.len());
            println!("Native-only enum rules: {}", rules.native_only_enums.len());
            println!("Renames:                {}", rules.renames.len());
            println!("Argument renames:       {}", rules.arg_renames.len());
            println!("Overrides:              {}", rules.overrides.len());
            println!("Resources:              {}", rules.resources.len());
            println!("Handles:                {}", rules.handles.len());
            println!("Allowed types:          {}", rules.types.len());
        }
    }

    Ok(())
}
