//! Classification of native functions against binding functions.

use crate::normalize::Normalizer;
use crate::report::{Classification, Diagnostic, FunctionCoverage};
use crate::rules::RuleSet;
use bindcov_core::Declaration;
use tracing::trace;

/// Name prefix of functions internal to the native library.
const INTERNAL_PREFIX: char = '_';

/// Outcome of matching every native function.
#[derive(Debug, Clone, Default)]
pub struct Matching {
    /// One entry per native function, in scan order.
    pub functions: Vec<FunctionCoverage>,
    /// Per binding function (by index), the normalized native declaration
    /// it perfectly matches.
    pub links: Vec<Option<Declaration>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Matching {
    /// Normalized native declaration linked to binding function `idx`.
    pub fn link(&self, idx: usize) -> Option<&Declaration> {
        self.links.get(idx).and_then(Option::as_ref)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher<'r> {
    rules: &'r RuleSet,
    normalizer: Normalizer<'r>,
}

impl<'r> Matcher<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            normalizer: Normalizer::new(rules),
        }
    }

    /// Returns true if the native function is intentionally not bound.
    pub fn is_skipped(&self, native: &Declaration) -> bool {
        native.name.starts_with(INTERNAL_PREFIX)
            || self.rules.is_native_only(&native.signature())
            || native
                .namespace
                .as_deref()
                .map_or(false, |ns| self.rules.is_native_only_class(ns))
    }

    /// Binding signature expected for a native function.
    pub fn expected_signature(&self, native: &Declaration, normal: &Declaration) -> String {
        self.rules
            .overrides
            .get(&native.signature())
            .cloned()
            .unwrap_or_else(|| normal.signature())
    }

    /// Same-named binding function, preferring one with the expected
    /// signature over the first by name.
    pub fn find_candidate<'b>(
        &self,
        name: &str,
        expected: &str,
        binding: &'b [Declaration],
    ) -> Option<(usize, &'b Declaration)> {
        let mut by_name = binding
            .iter()
            .enumerate()
            .filter(|(_, func)| func.name == name);
        let first = by_name.next()?;
        if first.1.signature() == expected {
            return Some(first);
        }
        by_name
            .find(|(_, func)| func.signature() == expected)
            .or(Some(first))
    }

    /// Classify one native function.
    ///
    /// Returns the coverage entry, the index of a perfectly matching binding
    /// function with the normalized declaration, and the diagnostic for a
    /// coverage gap.
    pub fn classify(
        &self,
        native: &Declaration,
        binding: &[Declaration],
    ) -> (FunctionCoverage, Option<(usize, Declaration)>, Option<Diagnostic>) {
        let signature = native.signature();

        if self.is_skipped(native) {
            let coverage = FunctionCoverage {
                signature,
                classification: Classification::Skipped,
                expected: None,
                candidate: None,
            };
            return (coverage, None, None);
        }

        let normal = self.normalizer.normalize(native);
        let expected = self.expected_signature(native, &normal);
        let candidate = self.find_candidate(&normal.name, &expected, binding);
        let candidate_signature = candidate.map(|(_, func)| func.signature());

        let (classification, link) = match (candidate, &candidate_signature) {
            (None, _) => (Classification::NotImplemented, None),
            (Some((idx, _)), Some(found)) if *found == expected => {
                if self.rules.overrides.contains_key(&signature) {
                    (Classification::ManualMatch, None)
                } else {
                    (Classification::PerfectMatch, Some((idx, normal)))
                }
            }
            (Some(_), _) => (Classification::MissingOverload, None),
        };
        trace!(%signature, ?classification, "classified");

        let gap = match classification {
            Classification::NotImplemented | Classification::MissingOverload => {
                let mut diagnostic =
                    Diagnostic::coverage_gap(format!("not implemented: {}", signature))
                        .with_detail("expected", expected.clone());
                if let Some(found) = &candidate_signature {
                    diagnostic = diagnostic.with_detail("candidate", found.clone());
                }
                Some(diagnostic)
            }
            _ => None,
        };

        let coverage = FunctionCoverage {
            signature,
            classification,
            expected: Some(expected),
            candidate: candidate_signature,
        };
        (coverage, link, gap)
    }

    /// Classify every native function in order.
    ///
    /// A binding function perfectly matched by several native functions
    /// stays linked to the first one.
    pub fn match_all(&self, native: &[Declaration], binding: &[Declaration]) -> Matching {
        let mut matching = Matching {
            links: vec![None; binding.len()],
            ..Default::default()
        };

        for decl in native {
            let (coverage, link, gap) = self.classify(decl, binding);
            matching.functions.push(coverage);
            matching.diagnostics.extend(gap);

            if let Some((idx, normal)) = link {
                if let Some(slot) = matching.links.get_mut(idx) {
                    slot.get_or_insert(normal);
                }
            }
        }
        matching
    }
}
