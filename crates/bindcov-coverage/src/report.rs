//! Coverage report: diagnostics, per-function classifications and summaries.

use serde::Serialize;
use std::fmt;

/// Taxonomy of reported problems. None of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Type, name or convention violation in a binding declaration.
    Validation,
    /// Missing or partial implementation of a native symbol.
    CoverageGap,
    /// Exclusion tables disagree with the scanned sources.
    Inconsistency,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Validation => "validation",
            DiagnosticKind::CoverageGap => "coverage-gap",
            DiagnosticKind::Inconsistency => "inconsistency",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labelled follow-up line of a diagnostic (`  expected:  ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Binding function the problem is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
}

impl Diagnostic {
    /// A validation problem in binding function `subject`.
    pub fn validation(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Validation,
            subject: Some(subject.into()),
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn coverage_gap(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::CoverageGap,
            subject: None,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn inconsistency(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Inconsistency,
            subject: None,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Append a labelled follow-up line.
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push(Detail {
            label: label.into(),
            value: value.into(),
        });
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "{}: {}", subject, self.message)?,
            None => f.write_str(&self.message)?,
        }
        for detail in &self.details {
            let label = format!("{}:", detail.label);
            write!(f, "\n  {:<11}{}", label, detail.value)?;
        }
        Ok(())
    }
}

/// Match state of one native function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    PerfectMatch,
    ManualMatch,
    MissingOverload,
    NotImplemented,
    Skipped,
}

impl Classification {
    /// Returns true if the native function is considered bound.
    pub fn is_covered(&self) -> bool {
        matches!(self, Classification::PerfectMatch | Classification::ManualMatch)
    }
}

/// Classification of one native function, with the signatures involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCoverage {
    /// Native signature.
    pub signature: String,
    pub classification: Classification,
    /// Expected binding signature (absent for skipped functions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Signature of the same-named binding function, if one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
}

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Function and enum counts of one side of the binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SymbolCount {
    pub functions: usize,
    pub enums: usize,
}

impl SymbolCount {
    pub fn total(&self) -> usize {
        self.functions + self.enums
    }
}

impl fmt::Display for SymbolCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found {} functions, {} enums (total: {} symbols)",
            self.functions,
            self.enums,
            self.total()
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FunctionSummary {
    pub perfect: usize,
    pub manual: usize,
    pub missing_overloads: usize,
    pub not_implemented: usize,
    pub skipped: usize,
}

impl FunctionSummary {
    pub fn count(&mut self, classification: Classification) {
        match classification {
            Classification::PerfectMatch => self.perfect += 1,
            Classification::ManualMatch => self.manual += 1,
            Classification::MissingOverload => self.missing_overloads += 1,
            Classification::NotImplemented => self.not_implemented += 1,
            Classification::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.perfect + self.manual + self.missing_overloads + self.not_implemented + self.skipped
    }

    /// Covered functions relative to non-skipped ones.
    pub fn completion(&self) -> f64 {
        percent(self.perfect + self.manual, self.total() - self.skipped)
    }

    /// Covered functions relative to all native functions.
    pub fn total_completion(&self) -> f64 {
        percent(self.perfect + self.manual, self.total())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnumSummary {
    /// Native enum constants.
    pub native: usize,
    /// Enums exported by the binding.
    pub exported: usize,
    /// Missing native enums excluded by a rule.
    pub skipped: usize,
}

impl EnumSummary {
    pub fn completion(&self) -> f64 {
        percent(self.exported, self.native.saturating_sub(self.skipped))
    }

    pub fn total_completion(&self) -> f64 {
        percent(self.exported, self.native)
    }
}

/// Everything a coverage run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageReport {
    pub native: SymbolCount,
    pub binding: SymbolCount,
    /// One entry per native function, in scan order.
    pub functions: Vec<FunctionCoverage>,
    /// Problems in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
    pub function_summary: FunctionSummary,
    pub enum_summary: EnumSummary,
}

impl CoverageReport {
    /// The two `found ...` lines printed before the diagnostics.
    pub fn header(&self) -> String {
        format!("native:  {}\nbinding: {}", self.native, self.binding)
    }

    /// Number of diagnostics of `kind`.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

/// The summary block, starting with an empty line.
impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let functions = &self.function_summary;
        let enums = &self.enum_summary;

        writeln!(f)?;
        writeln!(
            f,
            "functions: {} perfect matches, {} manual matches, {} missing overloads, {} not implemented, {} skipped",
            functions.perfect,
            functions.manual,
            functions.missing_overloads,
            functions.not_implemented,
            functions.skipped
        )?;
        writeln!(
            f,
            "functions: {:.2}% complete ({:.2}% total)",
            functions.completion(),
            functions.total_completion()
        )?;
        writeln!(f, "enums:     {} skipped", enums.skipped)?;
        write!(
            f,
            "enums:     {:.2}% complete ({:.2}% total)",
            enums.completion(),
            enums.total_completion()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Diagnostics ====================

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::validation("Begin", "invalid return type: float");
        assert_eq!(diag.to_string(), "Begin: invalid return type: float");

        let diag = Diagnostic::coverage_gap("not implemented: void ImGui::Foo()")
            .with_detail("expected", "void Foo()")
            .with_detail("candidate", "void Foo(int)");
        assert_eq!(
            diag.to_string(),
            "not implemented: void ImGui::Foo()\n  expected:  void Foo()\n  candidate: void Foo(int)"
        );
    }

    #[test]
    fn test_diagnostic_json() {
        let diag = Diagnostic::inconsistency("enum marked as native only but exported anyway: Key_Tab");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "inconsistency");
        assert!(json.get("subject").is_none());
        assert!(json.get("details").is_none());
    }

    // ==================== Summaries ====================

    #[test]
    fn test_percent_of_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }

    #[test]
    fn test_function_summary() {
        let mut summary = FunctionSummary::default();
        for classification in [
            Classification::PerfectMatch,
            Classification::PerfectMatch,
            Classification::ManualMatch,
            Classification::MissingOverload,
            Classification::NotImplemented,
            Classification::Skipped,
        ] {
            summary.count(classification);
        }
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.completion(), 60.0);
        assert_eq!(summary.total_completion(), 50.0);
    }

    #[test]
    fn test_covered_classifications() {
        assert!(Classification::PerfectMatch.is_covered());
        assert!(Classification::ManualMatch.is_covered());
        assert!(!Classification::MissingOverload.is_covered());
        assert!(!Classification::NotImplemented.is_covered());
        assert!(!Classification::Skipped.is_covered());
    }

    #[test]
    fn test_percentages_stay_in_range() {
        let summary = FunctionSummary {
            perfect: 3,
            skipped: 2,
            ..Default::default()
        };
        assert_eq!(summary.completion(), 100.0);
        assert!(summary.total_completion() <= 100.0);

        let empty = FunctionSummary::default();
        assert_eq!(empty.completion(), 0.0);
        assert_eq!(empty.total_completion(), 0.0);
    }

    #[test]
    fn test_report_summary_block() {
        let report = CoverageReport {
            native: SymbolCount { functions: 4, enums: 2 },
            binding: SymbolCount { functions: 2, enums: 1 },
            function_summary: FunctionSummary {
                perfect: 1,
                manual: 1,
                not_implemented: 1,
                skipped: 1,
                ..Default::default()
            },
            enum_summary: EnumSummary {
                native: 2,
                exported: 1,
                skipped: 1,
            },
            ..Default::default()
        };

        assert_eq!(
            report.header(),
            "native:  found 4 functions, 2 enums (total: 6 symbols)\n\
             binding: found 2 functions, 1 enums (total: 3 symbols)"
        );
        assert_eq!(
            report.to_string(),
            "\nfunctions: 1 perfect matches, 1 manual matches, 0 missing overloads, 1 not implemented, 1 skipped\n\
             functions: 66.67% complete (50.00% total)\n\
             enums:     1 skipped\n\
             enums:     100.00% complete (50.00% total)"
        );
    }
}
