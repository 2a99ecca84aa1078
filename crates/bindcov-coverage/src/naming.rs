//! Binding function names.

use crate::rules::RuleSet;
use bindcov_core::Declaration;

/// Namespace of free functions, which keep their bare name.
pub const DEFAULT_NAMESPACE: &str = "ImGui";

const CLASS_PREFIXES: &[&str] = &["ImGui", "Im"];

/// Short class name: `ImDrawList` to `DrawList`.
///
/// `None` for the default namespace and for classes outside the library.
pub fn class_short_name(namespace: &str) -> Option<&str> {
    if namespace == DEFAULT_NAMESPACE {
        return None;
    }
    CLASS_PREFIXES
        .iter()
        .find_map(|prefix| namespace.strip_prefix(prefix))
        .filter(|short| !short.is_empty())
}

/// Binding name of a native declaration.
pub fn target_name(decl: &Declaration, rules: &RuleSet) -> String {
    let name = match rules.renames.get(&decl.signature()) {
        Some(renamed) => renamed.clone(),
        None => match decl.namespace.as_deref().and_then(class_short_name) {
            Some(short) if decl.namespace.as_deref() == Some(decl.name.as_str()) => {
                format!("Create{}", short)
            }
            Some(short) => format!("{}_{}", short, decl.name),
            None => decl.name.clone(),
        },
    };
    float_to_double(&name)
}

/// Replace the word `Float` with `Double`.
///
/// `Float` counts as a word when followed by a digit, a non-word character
/// or the end of the name (`DragFloat2`, `InputFloat`, but not
/// `DragFloatRange2`).
pub fn float_to_double(name: &str) -> String {
    const WORD: &str = "Float";

    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(pos) = rest.find(WORD) {
        let after = &rest[pos + WORD.len()..];
        let is_word = after
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_digit() || !(c.is_alphanumeric() || c == '_'));

        out.push_str(&rest[..pos]);
        out.push_str(if is_word { "Double" } else { WORD });
        rest = after;
    }
    out.push_str(rest);
    out
}
