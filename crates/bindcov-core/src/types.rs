//! Helpers for C++ type text.
//!
//! Types are carried around as canonical strings rather than a structured
//! type tree: words are separated by a single space and `*`/`&` attach to
//! the preceding word (`const char* const`, `const ImVec2&`). Both
//! scanners funnel their type text through [`canonicalize`] so that
//! signatures compare equal regardless of the whitespace used in the
//! scanned sources.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Word(&'a str),
    Indirection(char),
    Punct(char),
}

fn pieces(text: &str) -> Result<Vec<Piece<'_>>> {
    let mut out = Vec::new();
    let mut start = None;

    for (pos, ch) in text.char_indices() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if start.is_none() {
                start = Some(pos);
            }
            continue;
        }

        if let Some(s) = start.take() {
            out.push(Piece::Word(&text[s..pos]));
        }

        match ch {
            c if c.is_whitespace() => {}
            '*' | '&' => out.push(Piece::Indirection(ch)),
            '<' | '>' | ':' | ',' => out.push(Piece::Punct(ch)),
            _ => {
                return Err(Error::InvalidTypeChar {
                    text: text.to_string(),
                    ch,
                })
            }
        }
    }

    if let Some(s) = start {
        out.push(Piece::Word(&text[s..]));
    }

    Ok(out)
}

/// Canonicalize the spacing of a type string.
///
/// ```
/// use bindcov_core::types::canonicalize;
///
/// assert_eq!(canonicalize("IMGUI_Window *").unwrap(), "IMGUI_Window*");
/// assert_eq!(canonicalize("const  char *const").unwrap(), "const char* const");
/// ```
pub fn canonicalize(text: &str) -> Result<String> {
    let pieces = pieces(text)?;
    if pieces.is_empty() {
        return Err(Error::EmptyType);
    }

    let mut out = String::with_capacity(text.len());
    let mut prev: Option<Piece<'_>> = None;

    for piece in pieces {
        match piece {
            Piece::Word(word) => {
                if matches!(prev, Some(Piece::Word(_)) | Some(Piece::Indirection(_))) {
                    out.push(' ');
                }
                out.push_str(word);
            }
            Piece::Indirection(ch) => out.push(ch),
            Piece::Punct(',') => out.push_str(", "),
            Piece::Punct(ch) => out.push(ch),
        }
        prev = Some(piece);
    }

    Ok(out)
}

/// Returns true if the type is a pointer (`T*`).
pub fn is_pointer(ty: &str) -> bool {
    ty.ends_with('*')
}

/// Returns true if the type is a reference (`T&`).
pub fn is_reference(ty: &str) -> bool {
    ty.ends_with('&')
}

/// Returns true if the type is a const-qualified reference (`const T&`).
pub fn is_const_reference(ty: &str) -> bool {
    is_reference(ty) && ty.starts_with("const ")
}

/// Strip a leading `const ` qualifier.
pub fn strip_const(ty: &str) -> &str {
    ty.strip_prefix("const ").unwrap_or(ty)
}

/// Split a type into its base and trailing indirection suffix.
///
/// `"float*"` becomes `("float", "*")`, `"const ImVec2&"` becomes
/// `("const ImVec2", "&")`.
pub fn split_indirection(ty: &str) -> (&str, &str) {
    let base = ty.trim_end_matches(['*', '&']);
    (base, &ty[base.len()..])
}

/// Returns true if `name` is a plain C identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Canonicalization ====================

    #[test]
    fn test_canonicalize_attaches_pointer() {
        assert_eq!(canonicalize("char *").unwrap(), "char*");
        assert_eq!(canonicalize("char * *").unwrap(), "char**");
        assert_eq!(canonicalize("ImGui_Context*").unwrap(), "ImGui_Context*");
    }

    #[test]
    fn test_canonicalize_keeps_word_spacing() {
        assert_eq!(canonicalize("unsigned   int").unwrap(), "unsigned int");
        assert_eq!(canonicalize(" const char* const ").unwrap(), "const char* const");
        assert_eq!(canonicalize("const ImVec2 &").unwrap(), "const ImVec2&");
    }

    #[test]
    fn test_canonicalize_templates_and_scopes() {
        assert_eq!(canonicalize("ImVector< int >").unwrap(), "ImVector<int>");
        assert_eq!(canonicalize("std :: string").unwrap(), "std::string");
    }

    #[test]
    fn test_canonicalize_rejects_garbage() {
        assert_eq!(canonicalize("   "), Err(Error::EmptyType));
        assert!(matches!(
            canonicalize("int (*)(void)"),
            Err(Error::InvalidTypeChar { ch: '(', .. })
        ));
    }

    // ==================== Predicates ====================

    #[test]
    fn test_indirection_helpers() {
        assert!(is_pointer("double*"));
        assert!(!is_pointer("double"));
        assert!(is_reference("float&"));
        assert!(is_const_reference("const ImVec2&"));
        assert!(!is_const_reference("float&"));
        assert_eq!(strip_const("const char*"), "char*");
        assert_eq!(split_indirection("const ImVec2&"), ("const ImVec2", "&"));
        assert_eq!(split_indirection("int"), ("int", ""));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("p_open"));
        assert!(is_identifier("_internal"));
        assert!(!is_identifier("2d"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }
}
