//! Enum coverage.

use crate::report::{Diagnostic, EnumSummary};
use crate::rules::RuleSet;
use std::collections::HashSet;

/// Report exported enums that a native-only rule says should not exist.
pub fn check_exported(binding: &[String], rules: &RuleSet, diagnostics: &mut Vec<Diagnostic>) {
    for rule in &rules.native_only_enums {
        for name in binding.iter().filter(|name| rule.matches(name)) {
            diagnostics.push(Diagnostic::inconsistency(format!(
                "enum marked as native only but exported anyway: {}",
                name
            )));
        }
    }
}

/// Report native enums missing from the binding and summarize.
pub fn check_coverage(
    native: &[String],
    binding: &[String],
    rules: &RuleSet,
    diagnostics: &mut Vec<Diagnostic>,
) -> EnumSummary {
    let exported: HashSet<&str> = binding.iter().map(String::as_str).collect();
    let mut summary = EnumSummary {
        native: native.len(),
        exported: binding.len(),
        skipped: 0,
    };

    for name in native.iter().filter(|name| !exported.contains(name.as_str())) {
        if rules.native_only_enum(name).is_some() {
            summary.skipped += 1;
        } else {
            diagnostics.push(Diagnostic::coverage_gap(format!("missing enum: {}", name)));
        }
    }
    summary
}
