//! Native API header scanner.
//!
//! The header is read line by line. Each line is tokenized on its own:
//! - `namespace X` / `struct X` opening lines set the current namespace
//! - `<api macro> <type> <name>(<params>) [attribute(..)] [const];` lines
//!   become declarations
//! - `ImGuiX_Y,` / `ImGuiX_Y = ...` lines become enum constants
//!
//! Anything else is ignored. Lines that fail to tokenize or do not have the
//! expected shape are skipped, never reported as errors.

use crate::config::ScanConfig;
use crate::lexer::{matching_close, slice_text, split_top_level, Lexer, Spanned, Token};
use bindcov_core::types::canonicalize;
use bindcov_core::{Argument, Declaration};
use tracing::{debug, trace};

/// Functions and enum constants declared by the native header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeApi {
    /// Exported functions in header order.
    pub functions: Vec<Declaration>,
    /// Enum constants with the library prefix stripped (`Col_Text`).
    pub enums: Vec<String>,
}

impl NativeApi {
    /// Returns true if a function with this exact signature was scanned.
    pub fn contains_signature(&self, signature: &str) -> bool {
        self.functions.iter().any(|f| f.signature() == signature)
    }

    /// Total number of functions and enums.
    pub fn symbol_count(&self) -> usize {
        self.functions.len() + self.enums.len()
    }
}

/// Scanner for the native library header.
pub struct NativeScanner<'c> {
    config: &'c ScanConfig,
}

impl<'c> NativeScanner<'c> {
    pub fn new(config: &'c ScanConfig) -> Self {
        Self { config }
    }

    /// Scan header text.
    pub fn scan(&self, text: &str) -> NativeApi {
        let mut api = NativeApi::default();
        let mut namespace: Option<String> = None;
        let mut obsolete_depth = 0usize;

        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim_start();
            if let Some(directive) = trimmed.strip_prefix('#') {
                self.directive(directive, &mut obsolete_depth);
                continue;
            }
            if obsolete_depth > 0 {
                continue;
            }

            let tokens = match Lexer::new(line).tokenize() {
                Ok(tokens) => tokens,
                Err(err) => {
                    trace!(line = idx + 1, %err, "skipping line");
                    continue;
                }
            };

            let Some(first) = tokens.first() else {
                continue;
            };

            match &first.token {
                Token::Ident(word) if *word == self.config.api_macro => {
                    match self.function(line, &tokens[1..], namespace.as_deref()) {
                        Some(decl) => api.functions.push(decl),
                        None => trace!(line = idx + 1, "skipping declaration"),
                    }
                }
                Token::Ident(word) if word == "namespace" || word == "struct" => {
                    let opens_scope = !tokens.iter().any(|t| t.token.is_punct(';'));
                    if let Some(name) = tokens.get(1).and_then(|t| t.token.ident()) {
                        if opens_scope {
                            namespace = Some(name.to_string());
                        }
                    }
                }
                Token::Ident(word) => {
                    if let Some(name) = self.enum_constant(word, tokens.get(1)) {
                        api.enums.push(name);
                    }
                }
                _ => {}
            }
        }

        debug!(
            functions = api.functions.len(),
            enums = api.enums.len(),
            "scanned native header"
        );
        api
    }

    fn directive(&self, directive: &str, obsolete_depth: &mut usize) {
        let mut words = directive.split_whitespace();
        let keyword = words.next().unwrap_or_default();

        if *obsolete_depth > 0 {
            if keyword.starts_with("if") {
                *obsolete_depth += 1;
            } else if keyword == "endif" {
                *obsolete_depth -= 1;
            }
        } else if keyword == "ifndef"
            && words
                .next()
                .map_or(false, |guard| guard.ends_with(&self.config.obsolete_guard))
        {
            *obsolete_depth = 1;
        }
    }

    fn function(
        &self,
        line: &str,
        tokens: &[Spanned],
        namespace: Option<&str>,
    ) -> Option<Declaration> {
        let open = tokens.iter().position(|t| t.token.is_punct('('))?;
        let close = matching_close(tokens, open)?;
        let (name_token, return_tokens) = tokens[..open].split_last()?;
        let name = name_token.token.ident()?;

        let ty = if return_tokens.is_empty() {
            // Constructors have no return type
            match namespace {
                Some(ns) if ns == name => format!("{}*", ns),
                _ => return None,
            }
        } else {
            canonicalize(slice_text(line, return_tokens)).ok()?
        };

        if !self.is_terminated(&tokens[close + 1..]) {
            return None;
        }

        let mut decl = Declaration::new(ty, name);
        decl.namespace = namespace.map(str::to_string);
        decl.args = split_top_level(&tokens[open + 1..close])
            .into_iter()
            .filter_map(|param| parameter(line, param))
            .collect();
        Some(decl)
    }

    /// Accepts `[const] [IM_XXX(...)] ;` after the parameter list.
    fn is_terminated(&self, rest: &[Spanned]) -> bool {
        let mut idx = 0;
        while let Some(spanned) = rest.get(idx) {
            match &spanned.token {
                Token::Ident(word) if word == "const" => idx += 1,
                Token::Ident(word) if word.starts_with(&self.config.attribute_prefix) => {
                    match matching_close(rest, idx + 1) {
                        Some(close) => idx = close + 1,
                        None => return false,
                    }
                }
                Token::Punct(';') => return idx + 1 == rest.len(),
                _ => return false,
            }
        }
        false
    }

    fn enum_constant(&self, word: &str, next: Option<&Spanned>) -> Option<String> {
        let delimited = next.map_or(false, |t| t.token.is_punct(',') || t.token.is_punct('='));
        if !delimited {
            return None;
        }

        let name = self.config.strip_enum_prefix(word)?;
        if name.is_empty() || name.ends_with("_COUNT") || name.ends_with('_') {
            return None;
        }
        Some(name.to_string())
    }
}

/// Parse one parameter; unrecognized shapes are kept verbatim.
fn parameter(line: &str, tokens: &[Spanned]) -> Option<Argument> {
    if tokens.is_empty() {
        return None;
    }

    if let [single] = tokens {
        match &single.token {
            Token::Ellipsis => return Some(Argument::variadic()),
            Token::Ident(word) if word == "void" => return None,
            _ => {}
        }
    }

    let (decl, default) = match tokens.iter().position(|t| t.token.is_punct('=')) {
        Some(eq) => {
            let default = slice_text(line, &tokens[eq + 1..]).trim().to_string();
            (&tokens[..eq], Some(default).filter(|d| !d.is_empty()))
        }
        None => (tokens, None),
    };

    let arg = declarator(line, decl).map(|mut arg| {
        arg.default = default;
        arg
    });
    Some(arg.unwrap_or_else(|| Argument::raw(slice_text(line, tokens).trim())))
}

/// `type name` or `type name[size]`.
fn declarator(line: &str, mut tokens: &[Spanned]) -> Option<Argument> {
    let mut size = 0;

    if tokens.last()?.token.is_punct(']') {
        let open = tokens.iter().rposition(|t| t.token.is_punct('['))?;
        size = match &tokens[open + 1..tokens.len() - 1] {
            [] => 0,
            [Spanned {
                token: Token::Number(n),
                ..
            }] => n.parse().ok()?,
            _ => return None,
        };
        tokens = &tokens[..open];
    }

    let (name_token, type_tokens) = tokens.split_last()?;
    let name = name_token.token.ident()?;
    if type_tokens.is_empty() {
        return None;
    }

    let ty = canonicalize(slice_text(line, type_tokens)).ok()?;
    Some(Argument::new(ty, name).with_size(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
struct ImDrawList;

namespace ImGui
{
    // Context creation
    IMGUI_API ImGuiContext* CreateContext(ImFontAtlas* shared_font_atlas = NULL);
    IMGUI_API bool          Begin(const char* name, bool* p_open = NULL, ImGuiWindowFlags flags = 0);
    IMGUI_API void          Text(const char* fmt, ...)                                      IM_FMTARGS(1);
    IMGUI_API bool          ColorEdit3(const char* label, float col[3], ImGuiColorEditFlags flags = 0);
    IMGUI_API bool          ListBox(const char* label, int* current_item, bool (*items_getter)(void* data, int idx, const char** out_text), void* data, int items_count, int height_in_items = -1);
    IMGUI_API ImVec2        GetCursorPos();
    inline    void          NotExported() {}
    IMGUI_API void          InlineBody() { }
}

enum ImGuiWindowFlags_
{
    ImGuiWindowFlags_None                   = 0,
    ImGuiWindowFlags_NoTitleBar             = 1 << 0,
    ImGuiWindowFlags_NoResize,
};

enum ImGuiCol_
{
    ImGuiCol_Text,
    ImGuiCol_COUNT
};

struct ImDrawList
{
    IMGUI_API ImDrawList(const ImDrawListSharedData* shared_data);
    IMGUI_API ~ImDrawList();
    IMGUI_API void  AddLine(const ImVec2& p1, const ImVec2& p2, ImU32 col, float thickness = 1.0f);
    IMGUI_API bool  IsEmpty() const;
};

#ifndef IMGUI_DISABLE_OBSOLETE_FUNCTIONS
namespace ImGui
{
#if 0
    IMGUI_API void  Nested();
#endif
    IMGUI_API bool  Obsolete(const char* label);
}
#endif

IMGUI_API void AfterObsolete(unsigned int count);
"#;

    fn scan() -> NativeApi {
        let config = ScanConfig::default();
        NativeScanner::new(&config).scan(HEADER)
    }

    fn find<'a>(api: &'a NativeApi, name: &str) -> &'a Declaration {
        api.functions
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("{} not scanned", name))
    }

    // ==================== Functions ====================

    #[test]
    fn test_scan_signatures() {
        let api = scan();
        let sigs: Vec<_> = api.functions.iter().map(Declaration::signature).collect();
        assert_eq!(
            sigs,
            vec![
                "ImGuiContext* ImGui::CreateContext(ImFontAtlas*)",
                "bool ImGui::Begin(const char*, bool*, ImGuiWindowFlags)",
                "void ImGui::Text(const char*, ...)",
                "bool ImGui::ColorEdit3(const char*, float[3], ImGuiColorEditFlags)",
                "bool ImGui::ListBox(const char*, int*, bool (*items_getter)(void* data, int idx, const char** out_text), void*, int, int)",
                "ImVec2 ImGui::GetCursorPos()",
                "ImDrawList* ImDrawList::ImDrawList(const ImDrawListSharedData*)",
                "void ImDrawList::AddLine(const ImVec2&, const ImVec2&, ImU32, float)",
                "bool ImDrawList::IsEmpty()",
                "void ImDrawList::AfterObsolete(unsigned int)",
            ]
        );
    }

    #[test]
    fn test_scan_defaults_and_names() {
        let api = scan();
        let begin = find(&api, "Begin");
        assert_eq!(begin.args[1].name, "p_open");
        assert_eq!(begin.args[1].default.as_deref(), Some("NULL"));
        assert_eq!(begin.args[2].default.as_deref(), Some("0"));

        let add_line = find(&api, "AddLine");
        assert_eq!(add_line.args[3].ty, "float");
        assert_eq!(add_line.args[3].default.as_deref(), Some("1.0f"));
    }

    #[test]
    fn test_scan_array_and_raw_arguments() {
        let api = scan();
        let edit = find(&api, "ColorEdit3");
        assert_eq!(edit.args[1].size, 3);
        assert_eq!(edit.args[1].ty, "float");

        let list = find(&api, "ListBox");
        assert!(list.args[2].raw);
        assert!(list.args[2].name.is_empty());
        assert_eq!(list.args[5].default.as_deref(), Some("-1"));
    }

    #[test]
    fn test_scan_variadic() {
        let api = scan();
        assert!(find(&api, "Text").is_variadic());
    }

    #[test]
    fn test_obsolete_block_is_skipped() {
        let api = scan();
        assert!(api.functions.iter().all(|f| f.name != "Obsolete"));
        assert!(api.functions.iter().all(|f| f.name != "Nested"));
    }

    // ==================== Enums ====================

    #[test]
    fn test_scan_enums() {
        let api = scan();
        assert_eq!(
            api.enums,
            vec![
                "WindowFlags_None",
                "WindowFlags_NoTitleBar",
                "WindowFlags_NoResize",
                "Col_Text",
            ]
        );
        assert_eq!(api.symbol_count(), api.functions.len() + 4);
    }

    // ==================== Parameters ====================

    #[test]
    fn test_parameter_shapes() {
        let line = "const char* const items[], int count = 2, ImVec2 size = ImVec2(0, 0), void";
        let tokens = Lexer::new(line).tokenize().unwrap();
        let args: Vec<_> = split_top_level(&tokens)
            .into_iter()
            .filter_map(|p| parameter(line, p))
            .collect();

        assert_eq!(args.len(), 3);
        assert_eq!(args[0].ty, "const char* const");
        assert_eq!(args[0].size, 0);
        assert_eq!(args[1].default.as_deref(), Some("2"));
        assert_eq!(args[2].default.as_deref(), Some("ImVec2(0, 0)"));
    }

    #[test]
    fn test_unnamed_parameter_is_raw() {
        let line = "const char*";
        let tokens = Lexer::new(line).tokenize().unwrap();
        let arg = parameter(line, &tokens).unwrap();
        assert!(arg.raw);
        assert_eq!(arg.ty, "const char*");
    }
}
