//! Binding source scanner.
//!
//! Binding sources define one exported function per `DEFINE_API` invocation:
//!
//! ```text
//! DEFINE_API(bool, Checkbox, (ImGui_Context*,ctx)(const char*,label)(bool*,API_RW(v)),
//! R"(Default values: flags = ImGui_ComboFlags_None.)",
//! { ... });
//! ```
//!
//! and one exported enum per `DEFINE_ENUM` invocation. Each file is
//! tokenized as a whole so multi-line invocations, raw string help texts and
//! comments need no special handling. Preprocessor lines (including the
//! macro definitions themselves) are skipped.

use crate::config::ScanConfig;
use crate::lexer::{matching_close, slice_text, split_top_level, Lexer, Spanned, Token};
use crate::ScanResult;
use bindcov_core::types::{canonicalize, is_identifier};
use bindcov_core::{Argument, Declaration};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// A problem found in a binding source that does not stop the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanWarning {
    /// Function the warning is about.
    pub function: String,
    pub message: String,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.function, self.message)
    }
}

/// Functions and enums exported by the binding sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingApi {
    /// Exported functions in scan order.
    pub functions: Vec<Declaration>,
    /// Exported enum names (`Col_Text`).
    pub enums: Vec<String>,
    /// Malformed documented defaults.
    pub warnings: Vec<ScanWarning>,
}

impl BindingApi {
    /// Append another scan result, keeping order.
    pub fn extend(&mut self, other: BindingApi) {
        self.functions.extend(other.functions);
        self.enums.extend(other.enums);
        self.warnings.extend(other.warnings);
    }

    /// Total number of functions and enums.
    pub fn symbol_count(&self) -> usize {
        self.functions.len() + self.enums.len()
    }
}

/// Scanner for `DEFINE_API`/`DEFINE_ENUM` binding sources.
pub struct BindingScanner<'c> {
    config: &'c ScanConfig,
}

impl<'c> BindingScanner<'c> {
    pub fn new(config: &'c ScanConfig) -> Self {
        Self { config }
    }

    /// Binding source files in `dir`, sorted by file name.
    pub fn source_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_source = entry
                .file_name()
                .to_str()
                .map_or(false, |name| self.config.is_source_file(name));
            if is_source && entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Scan every binding source file in `dir`.
    pub fn scan_dir(&self, dir: &Path) -> ScanResult<BindingApi> {
        let mut api = BindingApi::default();
        for path in self.source_files(dir)? {
            let text = fs::read_to_string(&path)?;
            let scanned = self.scan(&text)?;
            debug!(
                file = %path.display(),
                functions = scanned.functions.len(),
                enums = scanned.enums.len(),
                "scanned binding source"
            );
            api.extend(scanned);
        }
        info!(
            functions = api.functions.len(),
            enums = api.enums.len(),
            "scanned binding sources"
        );
        Ok(api)
    }

    /// Scan one binding source.
    pub fn scan(&self, text: &str) -> ScanResult<BindingApi> {
        let tokens = Lexer::new(text).skip_directives(true).tokenize()?;
        let mut api = BindingApi::default();
        let mut idx = 0;

        while idx < tokens.len() {
            let invocation = match &tokens[idx].token {
                Token::Ident(word) if *word == self.config.define_api => Invocation::Function,
                Token::Ident(word) if *word == self.config.define_enum => Invocation::Enum,
                _ => {
                    idx += 1;
                    continue;
                }
            };

            let close = match matching_close(&tokens, idx + 1) {
                Some(close) => close,
                None => {
                    idx += 1;
                    continue;
                }
            };
            let parts = split_top_level(&tokens[idx + 2..close]);

            match invocation {
                Invocation::Function => match self.function(text, &parts, &mut api.warnings) {
                    Some(decl) => api.functions.push(decl),
                    None => trace!(offset = tokens[idx].start, "skipping malformed definition"),
                },
                Invocation::Enum => {
                    if let Some(name) = enum_name(&parts) {
                        api.enums.push(name.to_string());
                    }
                }
            }
            idx = close + 1;
        }

        Ok(api)
    }

    fn function(
        &self,
        text: &str,
        parts: &[&[Spanned]],
        warnings: &mut Vec<ScanWarning>,
    ) -> Option<Declaration> {
        let [ty, name, args, rest @ ..] = parts else {
            return None;
        };
        let ty = canonicalize(slice_text(text, ty)).ok()?;
        let name = match name {
            [single] => single.token.ident()?,
            _ => return None,
        };

        let mut decl = Declaration::new(ty, name);
        decl.args = argument_groups(text, args)?;

        if let Some(help) = rest.first() {
            let help = help_text(help);
            self.attach_defaults(&mut decl, &help, warnings);
        }
        Some(decl)
    }

    /// Apply a `Default values: a = 1, b = 2.` help line.
    fn attach_defaults(&self, decl: &mut Declaration, help: &str, warnings: &mut Vec<ScanWarning>) {
        let marker = self.config.defaults_marker.as_str();
        let Some(values) = help
            .lines()
            .find_map(|line| line.trim().strip_prefix(marker))
        else {
            return;
        };

        let values = values.trim();
        let values = values.strip_suffix('.').unwrap_or(values);

        for entry in values.split(", ") {
            let parsed = entry
                .split_once(" = ")
                .filter(|(name, value)| is_identifier(name) && !value.is_empty());
            let Some((name, value)) = parsed else {
                warnings.push(ScanWarning {
                    function: decl.name.clone(),
                    message: format!("invalid default value: {}", entry),
                });
                continue;
            };

            match decl
                .args
                .iter_mut()
                .find(|arg| arg.name == name && arg.is_optional())
            {
                Some(arg) => arg.default = Some(value.to_string()),
                None => warnings.push(ScanWarning {
                    function: decl.name.clone(),
                    message: format!("default for unknown optional argument: {}", entry),
                }),
            }
        }
    }
}

enum Invocation {
    Function,
    Enum,
}

/// `(type, name)(type, API_RO(name))` or `((type, name))((type, name))`.
fn argument_groups(text: &str, tokens: &[Spanned]) -> Option<Vec<Argument>> {
    let mut args = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        if !tokens[idx].token.is_punct('(') {
            return None;
        }
        let close = matching_close(tokens, idx)?;
        let mut group = &tokens[idx + 1..close];

        // Double-parenthesized form
        if group.first().map_or(false, |t| t.token.is_punct('('))
            && matching_close(group, 0) == Some(group.len() - 1)
        {
            group = &group[1..group.len() - 1];
        }

        if !group.is_empty() {
            args.push(argument(text, group));
        }
        idx = close + 1;
    }

    Some(args)
}

fn argument(text: &str, group: &[Spanned]) -> Argument {
    let raw = || Argument::raw(slice_text(text, group));

    let parts = split_top_level(group);
    let [ty, name] = parts[..] else {
        return raw();
    };
    let Ok(ty) = canonicalize(slice_text(text, ty)) else {
        return raw();
    };

    match name {
        [single] => match single.token.ident() {
            Some(name) => Argument::new(ty, name),
            None => raw(),
        },
        [decoration, open, inner, close]
            if open.token.is_punct('(') && close.token.is_punct(')') =>
        {
            match (decoration.token.ident(), inner.token.ident()) {
                (Some(decoration), Some(name)) => {
                    Argument::new(ty, name).with_decoration(decoration)
                }
                _ => raw(),
            }
        }
        _ => raw(),
    }
}

/// Concatenated string literals of the help argument, escapes resolved
/// for line breaks.
fn help_text(tokens: &[Spanned]) -> String {
    tokens
        .iter()
        .filter_map(|t| match &t.token {
            Token::Str(s) => Some(s.replace("\\n", "\n")),
            _ => None,
        })
        .collect()
}

/// `DEFINE_ENUM(name, doc)` or `DEFINE_ENUM(prefix, name, doc)`.
fn enum_name<'t>(parts: &[&'t [Spanned]]) -> Option<&'t str> {
    let name = match parts {
        [_, name, _, ..] => *name,
        [name, ..] => *name,
        [] => return None,
    };
    match name {
        [single] => single.token.ident(),
        _ => None,
    }
}
