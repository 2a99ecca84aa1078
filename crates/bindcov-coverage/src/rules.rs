//! Rule tables driving normalization and matching.
//!
//! A [`RuleSet`] is built once, either from the builtin tables or from a
//! JSON file, and is only read afterwards.

use crate::builtin;
use crate::{Result, RulesError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Pattern for enum constants that are never exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumRule {
    /// The whole name.
    Exact(String),
    /// Names starting with this text.
    Prefix(String),
    /// Names ending with this text.
    Suffix(String),
    /// Names with this prefix and suffix and something in between.
    Affix { prefix: String, suffix: String },
}

impl EnumRule {
    /// Returns true if `name` matches this rule.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            EnumRule::Exact(exact) => name == exact,
            EnumRule::Prefix(prefix) => name.starts_with(prefix.as_str()),
            EnumRule::Suffix(suffix) => name.ends_with(suffix.as_str()),
            EnumRule::Affix { prefix, suffix } => {
                name.len() > prefix.len() + suffix.len()
                    && name.starts_with(prefix.as_str())
                    && name.ends_with(suffix.as_str())
            }
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            EnumRule::Exact(text) | EnumRule::Prefix(text) | EnumRule::Suffix(text) => {
                text.is_empty()
            }
            EnumRule::Affix { prefix, suffix } => prefix.is_empty() && suffix.is_empty(),
        }
    }
}

/// All tables consulted by the normalizer and matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Native signatures that are never bound.
    pub native_only: Vec<String>,
    /// Native classes whose methods are never bound.
    pub native_only_classes: Vec<String>,
    /// Native enum constants that are never exported.
    pub native_only_enums: Vec<EnumRule>,
    /// Native signature to binding function name.
    pub renames: BTreeMap<String, String>,
    /// Binding function name to (native argument name, binding argument name).
    pub arg_renames: BTreeMap<String, BTreeMap<String, String>>,
    /// Native signature to the binding signature it was ported as.
    pub overrides: BTreeMap<String, String>,
    /// Resource handle type to its required argument name.
    pub resources: BTreeMap<String, String>,
    /// Native handle type to binding handle type.
    pub handles: BTreeMap<String, String>,
    /// Types allowed in binding signatures (besides a `void` return).
    pub types: Vec<String>,
    /// Rewritten default to the default the binding documents instead.
    pub default_aliases: BTreeMap<String, String>,
}

fn pairs(table: &[(&str, &str)]) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strings(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

impl RuleSet {
    /// Tables for Dear ImGui and its ReaScript binding.
    pub fn builtin() -> Self {
        let native_only_enums = builtin::NATIVE_ONLY_ENUM_PREFIXES
            .iter()
            .map(|p| EnumRule::Prefix(p.to_string()))
            .chain(
                builtin::NATIVE_ONLY_ENUMS
                    .iter()
                    .map(|e| EnumRule::Exact(e.to_string())),
            )
            .chain(
                builtin::NATIVE_ONLY_ENUM_SUFFIXES
                    .iter()
                    .map(|s| EnumRule::Suffix(s.to_string())),
            )
            .chain(
                builtin::NATIVE_ONLY_ENUM_AFFIXES
                    .iter()
                    .map(|(prefix, suffix)| EnumRule::Affix {
                        prefix: prefix.to_string(),
                        suffix: suffix.to_string(),
                    }),
            )
            .collect();

        let arg_renames = builtin::ARG_RENAMES
            .iter()
            .map(|(function, renames)| (function.to_string(), pairs(renames)))
            .collect();

        Self {
            native_only: strings(builtin::NATIVE_ONLY),
            native_only_classes: strings(builtin::NATIVE_ONLY_CLASSES),
            native_only_enums,
            renames: pairs(builtin::RENAMES),
            arg_renames,
            overrides: pairs(builtin::OVERRIDES),
            resources: pairs(builtin::RESOURCES),
            handles: pairs(builtin::HANDLES),
            types: strings(builtin::TYPES),
            default_aliases: pairs(builtin::DEFAULT_ALIASES),
        }
    }

    /// Returns true if the native signature is excluded.
    pub fn is_native_only(&self, signature: &str) -> bool {
        self.native_only.iter().any(|s| s == signature)
    }

    /// Returns true if methods of this class are excluded.
    pub fn is_native_only_class(&self, namespace: &str) -> bool {
        self.native_only_classes.iter().any(|c| c == namespace)
    }

    /// First native-only enum rule matching `name`.
    pub fn native_only_enum(&self, name: &str) -> Option<&EnumRule> {
        self.native_only_enums.iter().find(|rule| rule.matches(name))
    }

    /// Returns true if `ty` may appear in a binding signature.
    pub fn is_allowed_type(&self, ty: &str) -> bool {
        self.types.iter().any(|t| t == ty)
    }

    /// Binding argument name expected for a native argument of `function`.
    pub fn renamed_arg(&self, function: &str, native_name: &str) -> Option<&str> {
        self.arg_renames
            .get(function)
            .and_then(|renames| renames.get(native_name))
            .map(String::as_str)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if let Some(rule) = self.native_only_enums.iter().find(|r| r.is_empty()) {
            return Err(RulesError::Invalid(format!(
                "empty native-only enum rule: {:?}",
                rule
            )));
        }

        for (resource, name) in &self.resources {
            if !self.is_allowed_type(resource) {
                return Err(RulesError::Invalid(format!(
                    "resource type '{}' is not an allowed type",
                    resource
                )));
            }
            if name.is_empty() {
                return Err(RulesError::Invalid(format!(
                    "resource type '{}' has no argument name",
                    resource
                )));
            }
        }

        if let Some(sig) = self.renames.keys().find(|sig| self.is_native_only(sig)) {
            return Err(RulesError::Invalid(format!(
                "renamed signature is also native only: {}",
                sig
            )));
        }

        Ok(())
    }

    /// Parse and validate a rule set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a rule set from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the rule set to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
