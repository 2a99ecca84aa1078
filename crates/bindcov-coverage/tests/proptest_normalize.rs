//! Property-based tests for normalization and argument expansion.

use proptest::prelude::*;

use bindcov_core::{Argument, Declaration};
use bindcov_coverage::expand::expand_argument;
use bindcov_coverage::{Normalizer, RuleSet};

// =============================================================================
// Strategies
// =============================================================================

fn native_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "int",
        "int*",
        "float",
        "float*",
        "float&",
        "double",
        "bool*",
        "const char*",
        "unsigned int",
        "size_t",
        "ImU32",
        "ImVec2",
        "const ImVec2&",
        "const ImVec4&",
        "ImGuiWindowFlags",
        "ImGuiCond",
        "ImGuiID",
        "ImDrawList*",
        "void*",
    ])
}

fn argument_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "v", "size", "pos", "col", "flags", "out_x", "label", "user_data", "thickness",
    ])
}

fn default_value() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "0",
        "1",
        "NULL",
        "1.0f",
        "-FLT_MIN",
        "ImVec2(0, 0)",
        "ImVec4(1, 1, 1, 1)",
        "ImGuiCond_Once",
        "\"%d\"",
    ]))
}

fn native_argument() -> impl Strategy<Value = Argument> {
    (
        native_type(),
        argument_name(),
        default_value(),
        prop::sample::select(vec![0usize, 0, 2, 3, 4]),
    )
        .prop_map(|(ty, name, default, size)| {
            let mut arg = Argument::new(ty, name).with_size(size);
            arg.default = default.map(str::to_string);
            arg
        })
}

fn native_declaration() -> impl Strategy<Value = Declaration> {
    (
        prop::sample::select(vec!["void", "bool", "float", "ImVec2", "const char*", "ImGuiID"]),
        prop::sample::select(vec!["Begin", "DragFloat", "GetItemRectSize", "AddLine"]),
        prop::sample::select(vec!["ImGui", "ImDrawList", "ImGuiListClipper", "Foo"]),
        prop::collection::vec(native_argument(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(ty, name, namespace, args, variadic)| {
            let mut decl = Declaration::new(ty, name).in_namespace(namespace);
            decl.args = args;
            if variadic {
                decl.args.push(Argument::new("const char*", "fmt"));
                decl.args.push(Argument::variadic());
            }
            decl
        })
}

// =============================================================================
// Normalization Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn normalize_is_idempotent(decl in native_declaration()) {
        let rules = RuleSet::builtin();
        let normalizer = Normalizer::new(&rules);
        let once = normalizer.normalize(&decl);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    /// The input declaration keeps its identity.
    #[test]
    fn normalize_leaves_input_alone(decl in native_declaration()) {
        let rules = RuleSet::builtin();
        let before = decl.clone();
        let _ = Normalizer::new(&rules).normalize(&decl);
        prop_assert_eq!(decl, before);
    }

    /// Normalized declarations carry no namespace, vectors, arrays or
    /// variadic marker.
    #[test]
    fn normalized_shape(decl in native_declaration()) {
        let rules = RuleSet::builtin();
        let normal = Normalizer::new(&rules).normalize(&decl);

        prop_assert!(normal.namespace.is_none());
        prop_assert!(!normal.is_variadic());
        prop_assert!(!normal.name.contains("Float"));
        for arg in &normal.args {
            prop_assert!(!arg.ty.contains("ImVec"), "vector type left: {}", arg.ty);
            prop_assert!(!arg.ty.contains("float"), "float type left: {}", arg.ty);
            prop_assert!(arg.size == 0, "array left: {}", arg.name);
        }
    }
}

// =============================================================================
// Expansion Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Every defaulted expanded argument is a pointer.
    #[test]
    fn defaults_are_pointers(arg in native_argument()) {
        let rules = RuleSet::builtin();
        for expanded in expand_argument(&arg, &rules) {
            if expanded.default.is_some() {
                prop_assert!(expanded.is_pointer(), "{} {}", expanded.ty, expanded.name);
            }
        }
    }

    /// Arrays of scalars expand into one indexed pointer per element.
    #[test]
    fn arrays_expand_per_element(
        ty in prop::sample::select(vec!["int", "float", "double", "bool"]),
        size in 2usize..8,
    ) {
        let rules = RuleSet::builtin();
        let expanded = expand_argument(&Argument::new(ty, "col").with_size(size), &rules);

        prop_assert_eq!(expanded.len(), size);
        for (idx, arg) in expanded.iter().enumerate() {
            prop_assert_eq!(&arg.name, &format!("col{}", idx + 1));
            prop_assert!(arg.is_pointer());
            prop_assert_eq!(arg.size, 0);
        }
    }
}
