//! C++ header generator.
//!
//! Native extensions call the binding through function pointers resolved
//! at first use. The generated header declares one lazily-resolved wrapper
//! per binding function and one lazily-read constant per exported enum.

use super::{load_rules, write_output, ScanArgs};
use anyhow::{Context, Result};
use bindcov_core::Argument;
use bindcov_coverage::RuleSet;
use bindcov_scan::{BindingApi, DecoratorTable};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

const GUARD: &str = "REAPER_IMGUI_FUNCTIONS_H";
const SYMBOL_PREFIX: &str = "ImGui_";

const WRAPPERS: &str = r#"struct reaper_array {
  const unsigned int size, alloc;
  double data[1];
};

template<typename T>
class ReaImGuiFunc;

template<typename R, typename... Args>
class ReaImGuiFunc<R(Args...)>
{
public:
  ReaImGuiFunc(const char *name) : m_name { name }, m_proc { nullptr } {}

  operator bool() const { return m_proc != nullptr; }

  auto operator()(Args... args)
  {
    if(!m_proc)
      m_proc = reinterpret_cast<decltype(m_proc)>(plugin_getapi(m_name));

    return m_proc(std::forward<Args>(args)...);
  }

private:
  const char *m_name;
  R(*m_proc)(Args...);
};

class ReaImGuiEnum
{
public:
  ReaImGuiEnum(const char *name) : m_name { name }, m_init { false } {}

  operator int()
  {
    if(!m_init) {
      ReaImGuiFunc<int()> func { m_name };
      m_value = func();
      m_init  = true;
    }

    return m_value;
  }

private:
  const char *m_name;
  bool m_init;
  int m_value;
};

#ifdef REAIMGUIAPI_IMPLEMENT
#  define REAIMGUIAPI_EXTERN
#  define REAIMGUIAPI_INIT(n) { n }
#else
#  define REAIMGUIAPI_EXTERN extern
#  define REAIMGUIAPI_INIT(n)
#endif
"#;

#[derive(Args, Debug)]
pub struct HeaderArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Binding helper header defining the argument decorations
    #[arg(long, default_value = "api/helper.hpp")]
    pub helper: PathBuf,

    /// JSON rule tables replacing the builtin ones
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Generate the header from the binding sources.
pub fn handle_header_command(args: &HeaderArgs) -> Result<()> {
    let config = args.scan.config();
    let rules = load_rules(args.rules.as_deref())?;
    let decorators = DecoratorTable::load(&args.helper)
        .with_context(|| format!("Failed to read helper header: {}", args.helper.display()))?;
    let binding = args.scan.scan_binding(&config)?;

    info!(
        functions = binding.functions.len(),
        enums = binding.enums.len(),
        decorators = decorators.len(),
        "generating header"
    );
    write_output(args.output.as_deref(), &render_header(&binding, &decorators, &rules))
}

/// `type name` with the C-level name of decorated arguments.
fn parameter(arg: &Argument, decorators: &DecoratorTable) -> String {
    if arg.raw {
        arg.ty.clone()
    } else {
        format!("{} {}", arg.signature_type(), decorators.expanded_name(arg))
    }
}

/// Render the complete header. Functions and enums are sorted by name.
pub fn render_header(binding: &BindingApi, decorators: &DecoratorTable, rules: &RuleSet) -> String {
    let mut out = String::new();

    writeln!(out, "#ifndef {}", GUARD).unwrap();
    writeln!(out, "#define {}", GUARD).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "#include <reaper_plugin_functions.h>").unwrap();
    writeln!(out).unwrap();
    for resource in rules.resources.keys() {
        writeln!(out, "class {};", resource.trim_end_matches('*')).unwrap();
    }
    writeln!(out).unwrap();
    out.push_str(WRAPPERS);
    writeln!(out).unwrap();

    let mut functions: Vec<_> = binding.functions.iter().collect();
    functions.sort_by(|a, b| a.name.cmp(&b.name));
    for func in functions {
        let name = format!("{}{}", SYMBOL_PREFIX, func.name);
        let args: Vec<String> = func
            .args
            .iter()
            .map(|arg| parameter(arg, decorators))
            .collect();
        writeln!(
            out,
            "REAIMGUIAPI_EXTERN ReaImGuiFunc<{}({})> {} REAIMGUIAPI_INIT(\"{}\");",
            func.ty,
            args.join(", "),
            name,
            name
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    let mut enums: Vec<_> = binding.enums.iter().collect();
    enums.sort();
    for name in enums {
        let name = format!("{}{}", SYMBOL_PREFIX, name);
        writeln!(
            out,
            "REAIMGUIAPI_EXTERN ReaImGuiEnum {} REAIMGUIAPI_INIT(\"{}\");",
            name, name
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "#undef REAIMGUIAPI_EXTERN").unwrap();
    writeln!(out, "#undef REAIMGUIAPI_INIT").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "#endif").unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindcov_core::Declaration;

    const HELPER: &str = "#define API_RO(var) var##InOptional\n#define API_W(var) var##Out\n";

    fn binding() -> BindingApi {
        BindingApi {
            functions: vec![
                Declaration::new("void", "Text")
                    .with_arg(Argument::new("ImGui_Context*", "ctx"))
                    .with_arg(Argument::new("const char*", "text")),
                Declaration::new("bool", "Begin")
                    .with_arg(Argument::new("ImGui_Context*", "ctx"))
                    .with_arg(Argument::new("const char*", "name"))
                    .with_arg(Argument::new("int*", "flags").with_decoration("API_RO")),
                Declaration::new("double", "GetTime"),
            ],
            enums: vec!["WindowFlags_None".to_string(), "Col_Text".to_string()],
            warnings: Vec::new(),
        }
    }

    fn render() -> String {
        render_header(&binding(), &DecoratorTable::parse(HELPER), &RuleSet::builtin())
    }

    #[test]
    fn test_include_guard_and_preamble() {
        let header = render();
        assert!(header.starts_with("#ifndef REAPER_IMGUI_FUNCTIONS_H\n#define REAPER_IMGUI_FUNCTIONS_H\n"));
        assert!(header.ends_with("#undef REAIMGUIAPI_INIT\n\n#endif\n"));
        assert!(header.contains("class ImGui_Context;\nclass ImGui_DrawList;\nclass ImGui_ListClipper;\n"));
        assert!(header.contains("class ReaImGuiEnum"));
    }

    #[test]
    fn test_functions_sorted_with_expanded_names() {
        let header = render();
        let lines: Vec<&str> = header
            .lines()
            .filter(|line| line.contains("ReaImGuiFunc<") && line.starts_with("REAIMGUIAPI_EXTERN"))
            .collect();
        assert_eq!(
            lines,
            vec![
                "REAIMGUIAPI_EXTERN ReaImGuiFunc<bool(ImGui_Context* ctx, const char* name, int* flagsInOptional)> ImGui_Begin REAIMGUIAPI_INIT(\"ImGui_Begin\");",
                "REAIMGUIAPI_EXTERN ReaImGuiFunc<double()> ImGui_GetTime REAIMGUIAPI_INIT(\"ImGui_GetTime\");",
                "REAIMGUIAPI_EXTERN ReaImGuiFunc<void(ImGui_Context* ctx, const char* text)> ImGui_Text REAIMGUIAPI_INIT(\"ImGui_Text\");",
            ]
        );
    }

    #[test]
    fn test_enums_sorted() {
        let header = render();
        let lines: Vec<&str> = header
            .lines()
            .filter(|line| line.starts_with("REAIMGUIAPI_EXTERN ReaImGuiEnum"))
            .collect();
        assert_eq!(
            lines,
            vec![
                "REAIMGUIAPI_EXTERN ReaImGuiEnum ImGui_Col_Text REAIMGUIAPI_INIT(\"ImGui_Col_Text\");",
                "REAIMGUIAPI_EXTERN ReaImGuiEnum ImGui_WindowFlags_None REAIMGUIAPI_INIT(\"ImGui_WindowFlags_None\");",
            ]
        );
    }
}
