//! Argument expansion.
//!
//! The binding convention has no vector types, no fixed-size arrays, no
//! callbacks and expresses optional arguments as nullable pointers. One
//! native argument therefore becomes zero, one or several binding
//! arguments, in the position of the original.

use crate::rules::RuleSet;
use crate::typemap::{is_enum_type, map_type};
use bindcov_core::types::{is_identifier, is_pointer, split_indirection, strip_const};
use bindcov_core::Argument;

const NULL_LITERALS: &[&str] = &["NULL", "nullptr"];
const USER_DATA_NAME: &str = "user_data";
const USER_DATA_TYPE: &str = "void*";
const CALLBACK_SUFFIX: &str = "Callback";
const OUT_PREFIX: &str = "out_";
const COLOR_NAMES: &[&str] = &["col", "color"];
const RGBA_SUFFIX: &str = "_rgba";
const POPUP_FLAGS: &str = "ImGuiPopupFlags";
const POPUP_FLAGS_ONE: &str = "ImGui_PopupFlags_MouseButtonRight";
const POSITION_SUFFIXES: &[&str] = &["x", "y"];
const SIZE_SUFFIXES: &[&str] = &["w", "h"];
const RECT_SUFFIXES: &[&str] = &["x", "y", "w", "h"];

/// Rewrite a native default value into the binding's documented spelling.
///
/// `ty` is the native type of the argument. `None` means no default.
pub fn rewrite_default(default: &str, ty: &str, rules: &RuleSet) -> Option<String> {
    if NULL_LITERALS.contains(&default) {
        return None;
    }

    if default == "0" && is_enum_type(ty) && !ty.ends_with("ID") {
        let short = ty
            .strip_prefix("ImGui")
            .or_else(|| ty.strip_prefix("Im"))
            .unwrap_or(ty);
        let none = format!("ImGui_{}_None", short);
        return Some(rules.default_aliases.get(&none).cloned().unwrap_or(none));
    }

    if let Some(rest) = enum_constant(default) {
        return Some(format!("ImGui_{}", rest));
    }

    if default == "1" && ty == POPUP_FLAGS {
        return Some(POPUP_FLAGS_ONE.to_string());
    }

    if let Some(text) = default
        .strip_prefix('"')
        .and_then(|d| d.strip_suffix('"'))
        .filter(|text| !text.is_empty())
    {
        return Some(format!("'{}'", text));
    }

    if strip_const(ty) == "float" {
        return Some(strip_float_suffix(default).to_string());
    }

    Some(default.to_string())
}

/// `ImGuiCol_Text` or `ImDrawFlags_None` without the library prefix.
fn enum_constant(default: &str) -> Option<&str> {
    if !is_identifier(default) || default.starts_with("ImGui_") {
        return None;
    }
    default
        .strip_prefix("ImGui")
        .or_else(|| default.strip_prefix("Im"))
        .filter(|rest| rest.contains('_') && !rest.starts_with('_'))
}

/// `1.0f` to `1.0`. Non-numeric values are kept.
fn strip_float_suffix(value: &str) -> &str {
    match value.strip_suffix(['f', 'F']) {
        Some(number) if is_numeric(number) => number,
        _ => value,
    }
}

fn is_numeric(text: &str) -> bool {
    let digits = text.trim_start_matches(['-', '+']);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
}

/// Components of `ImVec2(a, b)` / `ImVec4(a, b, c, d)`.
fn tuple_components<'a>(default: &'a str, constructor: &str) -> Option<Vec<&'a str>> {
    let inner = default
        .strip_prefix(constructor)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn component_default(component: &str) -> String {
    match strip_float_suffix(component) {
        "0" => "0.0".to_string(),
        other => other.to_string(),
    }
}

/// Pack `ImVec4(r, g, b, a)` with components in 0..=1 as `0xRRGGBBAA`.
fn packed_color(default: &str) -> Option<String> {
    let components = tuple_components(default, "ImVec4")?;
    if components.len() != 4 {
        return None;
    }

    let mut packed = 0u32;
    for component in components {
        let value: f64 = strip_float_suffix(component).parse().ok()?;
        let byte = (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        packed = (packed << 8) | byte;
    }
    Some(format!("0x{:08X}", packed))
}

/// Expand one native argument into binding arguments.
pub fn expand_argument(arg: &Argument, rules: &RuleSet) -> Vec<Argument> {
    if arg.raw {
        return vec![arg.clone()];
    }
    if is_dropped(arg) {
        return Vec::new();
    }

    let default = arg
        .default
        .as_deref()
        .and_then(|d| rewrite_default(d, &arg.ty, rules));

    let mut name = arg.name.clone();
    if arg.ty == "ImU32" && COLOR_NAMES.contains(&name.as_str()) {
        name.push_str(RGBA_SUFFIX);
    }

    let ty = map_type(&arg.ty, rules);
    let (base, indirection) = split_indirection(&ty);
    let by_value = indirection.is_empty() || indirection == "&";

    let mut out = match strip_const(base) {
        "ImVec2" if by_value => {
            let suffixes = if name.contains("size") {
                SIZE_SUFFIXES
            } else {
                POSITION_SUFFIXES
            };
            vector("ImVec2", &name, default.as_deref(), suffixes)
        }
        "ImVec4" if by_value && name.contains("col") => {
            let default = default.map(|d| packed_color(&d).unwrap_or(d));
            vec![scalar("int", format!("{}{}", name, RGBA_SUFFIX), default)]
        }
        "ImVec4" if by_value => vector("ImVec4", &name, default.as_deref(), RECT_SUFFIXES),
        _ if arg.size > 1 => array(&ty, &name, arg.size, default),
        _ => {
            let mut single = scalar(&ty, name, default);
            single.size = arg.size;
            vec![single]
        }
    };

    for expanded in &mut out {
        if is_pointer(&expanded.ty) {
            if let Some(stripped) = expanded.name.strip_prefix(OUT_PREFIX) {
                expanded.name = stripped.to_string();
            }
        }
    }
    out
}

/// Callbacks and their `void*` context have no binding equivalent.
fn is_dropped(arg: &Argument) -> bool {
    let (base, _) = split_indirection(&arg.ty);
    (arg.name == USER_DATA_NAME && strip_const(&arg.ty) == USER_DATA_TYPE)
        || strip_const(base).ends_with(CALLBACK_SUFFIX)
}

/// A scalar argument; a default makes it a nullable pointer.
fn scalar(ty: &str, name: String, default: Option<String>) -> Argument {
    let mut ty = ty.to_string();
    if default.is_some() && !is_pointer(&ty) {
        ty.push('*');
    }
    Argument {
        default,
        ..Argument::new(ty, name)
    }
}

/// One double per component, defaults split positionally.
fn vector(constructor: &str, name: &str, default: Option<&str>, suffixes: &[&str]) -> Vec<Argument> {
    let components = default
        .and_then(|d| tuple_components(d, constructor))
        .filter(|c| c.len() == suffixes.len());

    suffixes
        .iter()
        .enumerate()
        .map(|(idx, suffix)| {
            let component = match (&components, default) {
                (Some(components), _) => Some(component_default(components[idx])),
                (None, Some(whole)) => Some(whole.to_string()),
                (None, None) => None,
            };
            scalar("double", format!("{}_{}", name, suffix), component)
        })
        .collect()
}

/// `size` pointer arguments named `name1..nameN`.
fn array(ty: &str, name: &str, size: usize, default: Option<String>) -> Vec<Argument> {
    let mut ty = ty.to_string();
    if !is_pointer(&ty) {
        ty.push('*');
    }
    (1..=size)
        .map(|n| Argument {
            default: default.clone(),
            ..Argument::new(ty.clone(), format!("{}{}", name, n))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::builtin()
    }

    fn expand(arg: Argument) -> Vec<Argument> {
        expand_argument(&arg, &rules())
    }

    fn shape(args: &[Argument]) -> Vec<(String, String, Option<String>)> {
        args.iter()
            .map(|a| (a.ty.clone(), a.name.clone(), a.default.clone()))
            .collect()
    }

    fn entry(ty: &str, name: &str, default: Option<&str>) -> (String, String, Option<String>) {
        (ty.to_string(), name.to_string(), default.map(str::to_string))
    }

    // ==================== Defaults ====================

    #[test]
    fn test_null_default_is_absent() {
        assert_eq!(rewrite_default("NULL", "bool*", &rules()), None);
        assert_eq!(rewrite_default("nullptr", "const char*", &rules()), None);
    }

    #[test]
    fn test_zero_enum_default_is_none_constant() {
        let rules = rules();
        assert_eq!(
            rewrite_default("0", "ImGuiWindowFlags", &rules).as_deref(),
            Some("ImGui_WindowFlags_None")
        );
        assert_eq!(
            rewrite_default("0", "ImDrawFlags", &rules).as_deref(),
            Some("ImGui_DrawFlags_None")
        );
        assert_eq!(
            rewrite_default("0", "ImGuiCond", &rules).as_deref(),
            Some("ImGui_Cond_Always")
        );
        assert_eq!(
            rewrite_default("0", "ImGuiMouseButton", &rules).as_deref(),
            Some("ImGui_MouseButton_Left")
        );
        assert_eq!(rewrite_default("0", "ImGuiID", &rules).as_deref(), Some("0"));
        assert_eq!(rewrite_default("0", "int", &rules).as_deref(), Some("0"));
    }

    #[test]
    fn test_enum_constant_defaults() {
        let rules = rules();
        assert_eq!(
            rewrite_default("ImGuiCond_Once", "ImGuiCond", &rules).as_deref(),
            Some("ImGui_Cond_Once")
        );
        assert_eq!(
            rewrite_default("ImDrawFlags_RoundCornersAll", "ImDrawFlags", &rules).as_deref(),
            Some("ImGui_DrawFlags_RoundCornersAll")
        );
        assert_eq!(
            rewrite_default("ImGui_Cond_Once", "int*", &rules).as_deref(),
            Some("ImGui_Cond_Once")
        );
        assert_eq!(
            rewrite_default("1", "ImGuiPopupFlags", &rules).as_deref(),
            Some("ImGui_PopupFlags_MouseButtonRight")
        );
    }

    #[test]
    fn test_float_and_string_defaults() {
        let rules = rules();
        assert_eq!(rewrite_default("1.0f", "float", &rules).as_deref(), Some("1.0"));
        assert_eq!(rewrite_default("-1.0F", "float", &rules).as_deref(), Some("-1.0"));
        assert_eq!(rewrite_default("FLT_MAX", "float", &rules).as_deref(), Some("FLT_MAX"));
        assert_eq!(rewrite_default("0", "float", &rules).as_deref(), Some("0"));
        assert_eq!(rewrite_default("\"%.3f\"", "const char*", &rules).as_deref(), Some("'%.3f'"));
        assert_eq!(rewrite_default("\"\"", "const char*", &rules).as_deref(), Some("\"\""));
    }

    // ==================== Vectors ====================

    #[test]
    fn test_vec2_size_with_default() {
        let args = expand(Argument::new("const ImVec2&", "size").with_default("ImVec2(0, 0)"));
        assert_eq!(
            shape(&args),
            vec![
                entry("double*", "size_w", Some("0.0")),
                entry("double*", "size_h", Some("0.0")),
            ]
        );
    }

    #[test]
    fn test_vec2_position_without_default() {
        let args = expand(Argument::new("const ImVec2&", "pos"));
        assert_eq!(
            shape(&args),
            vec![entry("double", "pos_x", None), entry("double", "pos_y", None)]
        );
    }

    #[test]
    fn test_vec2_default_components() {
        let args = expand(Argument::new("ImVec2", "graph_size").with_default("ImVec2(-FLT_MIN, 2.5f)"));
        assert_eq!(
            shape(&args),
            vec![
                entry("double*", "graph_size_w", Some("-FLT_MIN")),
                entry("double*", "graph_size_h", Some("2.5")),
            ]
        );
    }

    #[test]
    fn test_vec4_color() {
        let args = expand(Argument::new("const ImVec4&", "col"));
        assert_eq!(shape(&args), vec![entry("int", "col_rgba", None)]);

        let args = expand(Argument::new("const ImVec4&", "tint_col").with_default("ImVec4(1, 1, 1, 1)"));
        assert_eq!(shape(&args), vec![entry("int*", "tint_col_rgba", Some("0xFFFFFFFF"))]);

        let args = expand(Argument::new("const ImVec4&", "border_col").with_default("ImVec4(0, 0, 0, 0)"));
        assert_eq!(args[0].default.as_deref(), Some("0x00000000"));
    }

    #[test]
    fn test_vec4_non_color() {
        let args = expand(Argument::new("const ImVec4&", "rect"));
        let names: Vec<_> = args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["rect_x", "rect_y", "rect_w", "rect_h"]);
        assert!(args.iter().all(|a| a.ty == "double"));
    }

    // ==================== Arrays ====================

    #[test]
    fn test_array_col_three() {
        let args = expand(Argument::new("float", "col").with_size(3));
        assert_eq!(
            shape(&args),
            vec![
                entry("double*", "col1", None),
                entry("double*", "col2", None),
                entry("double*", "col3", None),
            ]
        );
        assert!(args.iter().all(|a| a.size == 0));
    }

    #[test]
    fn test_array_of_ints() {
        let args = expand(Argument::new("int", "v").with_size(2));
        let names: Vec<_> = args.iter().map(|a| (a.ty.as_str(), a.name.as_str())).collect();
        assert_eq!(names, vec![("int*", "v1"), ("int*", "v2")]);
    }

    // ==================== Scalars ====================

    #[test]
    fn test_defaulted_scalar_becomes_pointer() {
        let args = expand(Argument::new("ImGuiWindowFlags", "flags").with_default("0"));
        assert_eq!(
            shape(&args),
            vec![entry("int*", "flags", Some("ImGui_WindowFlags_None"))]
        );

        let args = expand(Argument::new("bool*", "p_open").with_default("NULL"));
        assert_eq!(shape(&args), vec![entry("bool*", "p_open", None)]);
    }

    #[test]
    fn test_color_names_get_rgba() {
        let args = expand(Argument::new("ImU32", "col"));
        assert_eq!(shape(&args), vec![entry("int", "col_rgba", None)]);

        let args = expand(Argument::new("ImU32", "col_upr_left"));
        assert_eq!(shape(&args), vec![entry("int", "col_upr_left", None)]);
    }

    #[test]
    fn test_out_prefix_stripped_on_pointers() {
        let args = expand(Argument::new("float&", "out_h"));
        assert_eq!(shape(&args), vec![entry("double*", "h", None)]);

        let args = expand(Argument::new("int", "out_count"));
        assert_eq!(args[0].name, "out_count");
    }

    #[test]
    fn test_callbacks_are_dropped() {
        assert!(expand(Argument::new("ImGuiInputTextCallback", "callback")).is_empty());
        assert!(expand(Argument::new("void*", "user_data").with_default("NULL")).is_empty());
        assert_eq!(expand(Argument::new("void*", "data")).len(), 1);
    }

    #[test]
    fn test_user_data_of_other_types_is_kept() {
        let args = expand(Argument::new("float", "user_data").with_default("0"));
        assert_eq!(shape(&args), vec![entry("double*", "user_data", Some("0"))]);

        // The expanded argument survives a second expansion unchanged
        assert_eq!(expand(args[0].clone()), args);
    }

    #[test]
    fn test_string_default_on_float_is_quoted_once() {
        let rules = rules();
        let first = rewrite_default("\"%d\"", "float", &rules);
        assert_eq!(first.as_deref(), Some("'%d'"));
        assert_eq!(rewrite_default("'%d'", "double*", &rules), first);
    }

    #[test]
    fn test_raw_argument_is_kept() {
        let raw = Argument::raw("bool(*getter)(void* data, int idx)");
        assert_eq!(expand(raw.clone()), vec![raw]);
    }
}
