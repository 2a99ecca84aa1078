//! Native declaration to expected binding declaration.

use crate::expand::expand_argument;
use crate::naming::target_name;
use crate::rules::RuleSet;
use crate::typemap::map_type;
use bindcov_core::{Argument, Declaration};

const VECTOR_RETURN: &str = "ImVec2";
const FORMAT_ARG: &str = "fmt";
const TEXT_ARG: &str = "text";

/// Pure mapping of native declarations into the binding convention.
///
/// The result has no namespace, binding types only, flattened arguments
/// and the binding function name. Normalizing an already normalized
/// declaration returns it unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'r> {
    rules: &'r RuleSet,
}

impl<'r> Normalizer<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Build the expected binding declaration for `decl`.
    pub fn normalize(&self, decl: &Declaration) -> Declaration {
        let name = target_name(decl, self.rules);
        let ty = map_type(&decl.ty, self.rules);

        // Position of the first native argument with a default, NULL included
        let mut first_defaulted = None;
        let mut args: Vec<Argument> = Vec::with_capacity(decl.args.len());
        for arg in &decl.args {
            if arg.default.is_some() && first_defaulted.is_none() {
                first_defaulted = Some(args.len());
            }
            args.extend(expand_argument(arg, self.rules));
        }

        if args.last().map_or(false, Argument::is_variadic) {
            args.pop();
            if let Some(fmt) = args.iter_mut().find(|arg| arg.name == FORMAT_ARG) {
                fmt.name = TEXT_ARG.to_string();
            }
        }

        let mut normal = Declaration::new(ty, name);
        normal.args = args;

        if normal.ty == VECTOR_RETURN {
            let pos = first_defaulted.map_or(normal.args.len(), |pos| pos.min(normal.args.len()));
            self.return_as_out_args(&mut normal, pos);
        }
        normal
    }

    /// `ImVec2 F(a, b = 1)` to `void F(a, double* x, double* y, b = 1)`.
    fn return_as_out_args(&self, decl: &mut Declaration, pos: usize) {
        let names = if decl.name.contains("Size") {
            ["w", "h"]
        } else {
            ["x", "y"]
        };

        decl.ty = "void".to_string();
        for (offset, name) in names.iter().enumerate() {
            decl.args.insert(pos + offset, Argument::new("double*", *name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(decl: &Declaration) -> Declaration {
        let rules = RuleSet::builtin();
        Normalizer::new(&rules).normalize(decl)
    }

    // ==================== Signatures ====================

    #[test]
    fn test_normalize_class_method() {
        let decl = Declaration::new("void", "AddLine")
            .in_namespace("ImDrawList")
            .with_arg(Argument::new("const ImVec2&", "p1"))
            .with_arg(Argument::new("const ImVec2&", "p2"))
            .with_arg(Argument::new("ImU32", "col"))
            .with_arg(Argument::new("float", "thickness").with_default("1.0f"));
        let normal = normalize(&decl);

        assert_eq!(
            normal.signature(),
            "void DrawList_AddLine(double, double, double, double, int, double*)"
        );
        let names: Vec<_> = normal.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["p1_x", "p1_y", "p2_x", "p2_y", "col_rgba", "thickness"]);
        assert_eq!(normal.args[5].default.as_deref(), Some("1.0"));
        // Input is untouched
        assert_eq!(decl.namespace.as_deref(), Some("ImDrawList"));
        assert_eq!(decl.name, "AddLine");
    }

    #[test]
    fn test_unknown_namespace_scenario() {
        let decl = Declaration::new("bool", "Bar")
            .in_namespace("Foo")
            .with_arg(Argument::new("int*", "v"))
            .with_arg(Argument::new("float", "speed"));
        assert_eq!(normalize(&decl).signature(), "bool Bar(int*, double)");
    }

    #[test]
    fn test_variadic_format_becomes_text() {
        let decl = Declaration::new("void", "Text")
            .in_namespace("ImGui")
            .with_arg(Argument::new("const char*", "fmt"))
            .with_arg(Argument::variadic());
        let normal = normalize(&decl);
        assert_eq!(normal.signature(), "void Text(const char*)");
        assert_eq!(normal.args[0].name, "text");
    }

    // ==================== Vector Returns ====================

    #[test]
    fn test_vec2_return_becomes_out_args() {
        let decl = Declaration::new("ImVec2", "GetCursorPos").in_namespace("ImGui");
        let normal = normalize(&decl);
        assert_eq!(normal.signature(), "void GetCursorPos(double*, double*)");
        assert_eq!(normal.args[0].name, "x");
        assert_eq!(normal.args[1].name, "y");
    }

    #[test]
    fn test_vec2_size_return_inserted_before_defaults() {
        let decl = Declaration::new("ImVec2", "GetItemRectSize")
            .in_namespace("ImGui")
            .with_arg(Argument::new("const char*", "label"))
            .with_arg(Argument::new("float", "wrap").with_default("-1.0f"));
        let normal = normalize(&decl);
        let names: Vec<_> = normal.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["label", "w", "h", "wrap"]);
        assert_eq!(normal.ty, "void");
    }

    #[test]
    fn test_vec2_return_inserted_before_null_default() {
        let decl = Declaration::new("ImVec2", "GetThing")
            .in_namespace("ImGui")
            .with_arg(Argument::new("const char*", "text"))
            .with_arg(Argument::new("const char*", "text_end").with_default("NULL"))
            .with_arg(Argument::new("float", "wrap").with_default("-1.0f"));
        let normal = normalize(&decl);
        let names: Vec<_> = normal.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["text", "x", "y", "text_end", "wrap"]);
        assert_eq!(normal.args[3].default, None);
    }

    // ==================== Idempotence ====================

    #[test]
    fn test_normalize_is_idempotent() {
        let decl = Declaration::new("bool", "Begin")
            .in_namespace("ImGui")
            .with_arg(Argument::new("const char*", "name"))
            .with_arg(Argument::new("bool*", "p_open").with_default("NULL"))
            .with_arg(Argument::new("ImGuiWindowFlags", "flags").with_default("0"))
            .with_arg(Argument::new("const ImVec2&", "size").with_default("ImVec2(0, 0)"))
            .with_arg(Argument::new("const ImVec4&", "col").with_default("ImVec4(1,1,1,1)"))
            .with_arg(Argument::new("float", "v").with_size(3));
        let once = normalize(&decl);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_defaulted_user_data_is_stable() {
        let decl = Declaration::new("void", "Begin")
            .in_namespace("ImGui")
            .with_arg(Argument::new("float", "user_data").with_default("0"));
        let once = normalize(&decl);
        assert_eq!(once.signature(), "void Begin(double*)");
        assert_eq!(normalize(&once), once);
    }
}
