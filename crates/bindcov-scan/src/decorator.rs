//! Argument decoration macros.
//!
//! The binding helper header defines one token-pasting macro per argument
//! role, e.g. `#define API_RO(var) var##InOptional`. A decorated binding
//! argument `API_RO(flags)` is named `flagsInOptional` at the C level.

use crate::lexer::{Lexer, Token};
use crate::ScanResult;
use bindcov_core::Argument;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const DECORATION_PREFIX: &str = "API_";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Decorator {
    placeholder: String,
    pattern: String,
}

/// Immutable lookup table of argument decorations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoratorTable {
    decorators: BTreeMap<String, Decorator>,
}

impl DecoratorTable {
    /// Parse `#define API_XX(placeholder) pattern` lines.
    pub fn parse(text: &str) -> Self {
        let mut decorators = BTreeMap::new();

        for line in text.lines() {
            if let Some((name, decorator)) = definition(line) {
                decorators.insert(name, decorator);
            }
        }

        debug!(count = decorators.len(), "parsed argument decorations");
        Self { decorators }
    }

    /// Read and parse the helper header at `path`.
    pub fn load(path: &Path) -> ScanResult<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    pub fn contains(&self, decoration: &str) -> bool {
        self.decorators.contains_key(decoration)
    }

    /// Expand `decoration(name)`, or `None` for an unknown decoration.
    pub fn expand(&self, decoration: &str, name: &str) -> Option<String> {
        self.decorators.get(decoration).map(|d| {
            d.pattern
                .replace(&format!("{}##", d.placeholder), name)
        })
    }

    /// C-level name of a binding argument.
    ///
    /// Undecorated arguments and unknown decorations keep the plain name.
    pub fn expanded_name(&self, arg: &Argument) -> String {
        arg.decoration
            .as_deref()
            .and_then(|decoration| self.expand(decoration, &arg.name))
            .unwrap_or_else(|| arg.name.clone())
    }
}

fn definition(line: &str) -> Option<(String, Decorator)> {
    let rest = line.trim_start().strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("define")?;

    let tokens = Lexer::new(rest).tokenize().ok()?;
    let (name, placeholder, close) = match tokens.as_slice() {
        [name, open, placeholder, close, ..]
            if open.token.is_punct('(') && close.token.is_punct(')') =>
        {
            (name.token.ident()?, placeholder.token.ident()?, close)
        }
        _ => return None,
    };
    if !name.starts_with(DECORATION_PREFIX) || is_object_like(rest, name) {
        return None;
    }

    let pattern = rest[close.end..].split_whitespace().next()?;
    Some((
        name.to_string(),
        Decorator {
            placeholder: placeholder.to_string(),
            pattern: pattern.to_string(),
        },
    ))
}

/// Object-like macros (`#define API_X (a)`) have a space before `(`.
fn is_object_like(rest: &str, name: &str) -> bool {
    rest.trim_start()
        .strip_prefix(name)
        .map_or(true, |after| !after.starts_with('('))
}
