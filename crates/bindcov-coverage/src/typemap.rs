//! Native type to binding type mapping.
//!
//! Every rule matches on the structure of the canonical type text (base
//! word, prefix, suffix, indirection), never on substrings.

use crate::rules::RuleSet;
use bindcov_core::types::{is_const_reference, is_identifier, split_indirection, strip_const};

/// Prefixes of the native library's own enum and typedef names.
const ENUM_TYPE_PREFIXES: &[&str] = &["ImGui", "ImDraw"];

/// Binding spelling of handle types, which must be left alone.
const BINDING_TYPE_PREFIX: &str = "ImGui_";

/// Map a native type to its binding spelling.
///
/// Returns the input unchanged when no rule applies.
pub fn map_type(ty: &str, rules: &RuleSet) -> String {
    if let Some(handle) = rules.handles.get(ty) {
        return handle.clone();
    }
    if ty.starts_with(BINDING_TYPE_PREFIX) {
        return ty.to_string();
    }
    if ty == "const char* const" {
        return "const char*".to_string();
    }

    let (base, indirection) = split_indirection(ty);

    // Const references are passed by value
    if is_const_reference(ty) {
        return map_type(strip_const(base), rules);
    }

    let value = strip_const(base);
    // Mutable references become out pointers
    let pointer = match indirection {
        "&" => "*",
        other => other,
    };

    match value {
        "float" | "double" => format!("double{}", pointer),
        "unsigned int" | "size_t" => format!("int{}", pointer),
        "ImU32" if pointer.is_empty() => "int".to_string(),
        _ if pointer.is_empty() && is_enum_type(value) => "int".to_string(),
        _ if pointer == "*" && is_enum_type(value) && value.ends_with("Flags") => {
            "int*".to_string()
        }
        _ => ty.to_string(),
    }
}

/// `ImGuiCond`, `ImDrawFlags`: a single identifier with a library prefix.
pub fn is_enum_type(ty: &str) -> bool {
    is_identifier(ty)
        && !ty.starts_with(BINDING_TYPE_PREFIX)
        && ENUM_TYPE_PREFIXES.iter().any(|p| ty.starts_with(p))
}
