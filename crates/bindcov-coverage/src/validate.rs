//! Checks on binding declarations.
//!
//! Types and resource arguments are checked before matching. Argument names
//! and documented defaults are checked afterwards, against the linked native
//! declaration when the function has one.

use crate::report::Diagnostic;
use crate::rules::RuleSet;
use bindcov_core::{Argument, Declaration};

/// Documented default meaning "no default".
pub const NIL_DEFAULT: &str = "nil";

const SIZE_DECORATION_SUFFIX: &str = "_SZ";

/// Documented default of a binding argument.
pub fn documented_default(arg: &Argument) -> Option<&str> {
    arg.default.as_deref().filter(|d| *d != NIL_DEFAULT)
}

/// Lowercase snake case: `[a-z0-9_]+`.
pub fn is_snake_case(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    rules: &'r RuleSet,
}

impl<'r> Validator<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Check the return type, argument types and resource arguments.
    pub fn check_types(&self, func: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        if func.ty != "void" && !self.rules.is_allowed_type(&func.ty) {
            diagnostics.push(Diagnostic::validation(
                &func.name,
                format!("invalid return type: {}", func.ty),
            ));
        }

        for (idx, arg) in func.args.iter().enumerate() {
            if !self.rules.is_allowed_type(&arg.ty) {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!("invalid argument type for '{}': {}", arg.name, arg.ty),
                ));
            }

            let Some(expected) = self.rules.resources.get(&arg.ty) else {
                continue;
            };
            if idx != 0 {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!("argument of type '{}' should come first", arg.ty),
                ));
            }
            if arg.name != *expected {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!(
                        "argument of type '{}' should be named '{}', got '{}'",
                        arg.ty, expected, arg.name
                    ),
                ));
            }
        }
    }

    /// Remove a leading resource argument. Returns true if one was removed.
    pub fn strip_resource(&self, func: &mut Declaration) -> bool {
        let leading = func
            .args
            .first()
            .map_or(false, |arg| self.rules.resources.contains_key(&arg.ty));
        if leading {
            func.args.remove(0);
        }
        leading
    }

    /// Check argument names and defaults.
    ///
    /// `native` is the normalized native declaration the function was
    /// linked to, if any.
    pub fn check_arguments(
        &self,
        func: &Declaration,
        native: Option<&Declaration>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (idx, arg) in func.args.iter().enumerate() {
            let n = idx + 1;

            if arg.raw || arg.name.is_empty() {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!("invalid argument #{} '{}'", n, arg.ty),
                ));
                continue;
            }

            if !is_snake_case(&arg.name) {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!("invalid argument #{} name '{}' (not snake case?)", n, arg.name),
                ));
                continue;
            }

            match native.and_then(|native| native.args.get(idx)) {
                Some(expected) => self.compare(func, n, arg, expected, diagnostics),
                None if native.is_none() => {
                    if arg.is_optional() && arg.default.is_none() {
                        diagnostics.push(Diagnostic::validation(
                            &func.name,
                            format!("argument #{} '{}' has no documented default value", n, arg.name),
                        ));
                    }
                }
                None => {}
            }
        }

        self.check_order(func, diagnostics);
    }

    /// Positional comparison with the linked native argument.
    fn compare(
        &self,
        func: &Declaration,
        n: usize,
        arg: &Argument,
        expected: &Argument,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let renamed = self.rules.renamed_arg(&func.name, &expected.name);
        if arg.name != expected.name && renamed != Some(arg.name.as_str()) {
            diagnostics.push(Diagnostic::validation(
                &func.name,
                format!(
                    "argument #{} of type '{}' ({}) is named '{}', expected '{}'",
                    n,
                    arg.ty,
                    arg.decoration.as_deref().unwrap_or_default(),
                    arg.name,
                    expected.name
                ),
            ));
        }

        let expected_default = expected.default.as_deref();
        match documented_default(arg) {
            actual if actual == expected_default => {}
            None => diagnostics.push(Diagnostic::validation(
                &func.name,
                format!(
                    "argument #{} '{}' has no documented default value, expected {}",
                    n,
                    arg.name,
                    expected_default.unwrap_or_default()
                ),
            )),
            Some(actual) => diagnostics.push(Diagnostic::validation(
                &func.name,
                format!(
                    "argument #{} '{}' has documented default value {}, expected {}",
                    n,
                    arg.name,
                    actual,
                    expected_default.unwrap_or(NIL_DEFAULT)
                ),
            )),
        }
    }

    /// Optional arguments come last; size arguments follow their buffer.
    fn check_order(&self, func: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen_optional = false;
        for (idx, arg) in func.args.iter().enumerate() {
            if arg.is_optional() {
                seen_optional = true;
            } else if seen_optional && !arg.raw {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!(
                        "required argument #{} '{}' follows an optional argument",
                        idx + 1,
                        arg.name
                    ),
                ));
            }

            let is_size = arg
                .decoration
                .as_deref()
                .map_or(false, |d| d.ends_with(SIZE_DECORATION_SUFFIX));
            if !is_size {
                continue;
            }
            let follows_buffer = idx
                .checked_sub(1)
                .and_then(|prev| func.args.get(prev))
                .map_or(false, |prev| prev.name == arg.name);
            if !follows_buffer {
                diagnostics.push(Diagnostic::validation(
                    &func.name,
                    format!(
                        "size argument #{} '{}' does not follow its buffer",
                        idx + 1,
                        arg.name
                    ),
                ));
            }
        }
    }
}
