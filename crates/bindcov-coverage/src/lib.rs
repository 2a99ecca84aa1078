//! # bindcov-coverage
//!
//! Normalization of native declarations into the binding convention and
//! coverage matching against the scanned binding declarations.
//!
//! The pipeline is a single pass over both declaration lists:
//!
//! 1. Binding declarations are type checked and their leading resource
//!    argument (context, draw list, ...) is removed.
//! 2. The exclusion tables are checked against both sides.
//! 3. Every native function is normalized and classified
//!    ([`Classification`]); perfect matches link the binding function to
//!    the normalized native declaration.
//! 4. Binding argument names and documented defaults are checked, against
//!    the linked native declaration when there is one.
//! 5. Native enums are checked for coverage.
//!
//! Nothing in the pipeline fails: every problem becomes a [`Diagnostic`]
//! in the returned [`CoverageReport`].
//!
//! # Example
//!
//! ```
//! use bindcov_core::{Argument, Declaration};
//! use bindcov_coverage::{check, Classification, RuleSet};
//! use bindcov_scan::{BindingApi, NativeApi};
//!
//! let native = NativeApi {
//!     functions: vec![Declaration::new("bool", "Bar")
//!         .in_namespace("Foo")
//!         .with_arg(Argument::new("int*", "v"))
//!         .with_arg(Argument::new("float", "speed"))],
//!     enums: vec![],
//! };
//! let report = check(&native, &BindingApi::default(), &RuleSet::builtin());
//!
//! assert_eq!(report.functions[0].classification, Classification::NotImplemented);
//! assert_eq!(report.functions[0].expected.as_deref(), Some("bool Bar(int*, double)"));
//! ```

pub mod builtin;
pub mod enums;
pub mod expand;
pub mod matcher;
pub mod naming;
pub mod normalize;
pub mod report;
pub mod rules;
pub mod typemap;
pub mod validate;

pub use matcher::{Matcher, Matching};
pub use normalize::Normalizer;
pub use report::{
    Classification, CoverageReport, Diagnostic, DiagnosticKind, EnumSummary, FunctionCoverage,
    FunctionSummary, SymbolCount,
};
pub use rules::{EnumRule, RuleSet};
pub use validate::Validator;

use bindcov_scan::{BindingApi, NativeApi};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading rule tables.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid rules file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("inconsistent rules: {0}")]
    Invalid(String),
}

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RulesError>;

/// Run every coverage check.
pub fn check(native: &NativeApi, binding: &BindingApi, rules: &RuleSet) -> CoverageReport {
    let validator = Validator::new(rules);
    let matcher = Matcher::new(rules);

    let mut report = CoverageReport {
        native: SymbolCount {
            functions: native.functions.len(),
            enums: native.enums.len(),
        },
        binding: SymbolCount {
            functions: binding.functions.len(),
            enums: binding.enums.len(),
        },
        ..Default::default()
    };
    let diagnostics = &mut report.diagnostics;

    diagnostics.extend(
        binding
            .warnings
            .iter()
            .map(|w| Diagnostic::validation(&w.function, &w.message)),
    );

    let mut functions = binding.functions.clone();
    for func in &mut functions {
        validator.check_types(func, diagnostics);
        validator.strip_resource(func);
    }

    for signature in &rules.native_only {
        if !native.contains_signature(signature) {
            diagnostics.push(Diagnostic::inconsistency(format!(
                "function marked as native only not found in native header: {}",
                signature
            )));
        }
    }
    enums::check_exported(&binding.enums, rules, diagnostics);

    let matching = matcher.match_all(&native.functions, &functions);
    diagnostics.extend(matching.diagnostics.iter().cloned());
    debug!(
        linked = matching.links.iter().filter(|l| l.is_some()).count(),
        "matched native functions"
    );

    for (idx, func) in functions.iter().enumerate() {
        validator.check_arguments(func, matching.link(idx), diagnostics);
    }

    report.enum_summary =
        enums::check_coverage(&native.enums, &binding.enums, rules, &mut report.diagnostics);

    for coverage in &matching.functions {
        report.function_summary.count(coverage.classification);
    }
    report.functions = matching.functions;

    info!(
        diagnostics = report.diagnostics.len(),
        covered = report
            .functions
            .iter()
            .filter(|f| f.classification.is_covered())
            .count(),
        "coverage check complete"
    );
    report
}
