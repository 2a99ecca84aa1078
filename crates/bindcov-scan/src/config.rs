//! Scanner settings.

/// Names and markers the scanners look for.
///
/// The defaults describe Dear ImGui's header and the ReaScript binding
/// sources built on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Export macro that starts every public function line of the header.
    pub api_macro: String,
    /// Prefix of attribute macros allowed between `)` and `;` (`IM_FMTARGS(2)`).
    pub attribute_prefix: String,
    /// Suffix of the `#ifndef` guard around obsolete declarations.
    pub obsolete_guard: String,
    /// Prefixes of enum constants in the header, longest first.
    pub enum_prefixes: Vec<String>,
    /// Macro defining one binding function.
    pub define_api: String,
    /// Macro exporting one enum constant.
    pub define_enum: String,
    /// Binding sources are the files named `<prefix>*<suffix>`.
    pub source_prefix: String,
    pub source_suffix: String,
    /// Help-text marker introducing documented default values.
    pub defaults_marker: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            api_macro: "IMGUI_API".to_string(),
            attribute_prefix: "IM_".to_string(),
            obsolete_guard: "DISABLE_OBSOLETE_FUNCTIONS".to_string(),
            enum_prefixes: vec!["ImGui".to_string(), "Im".to_string()],
            define_api: "DEFINE_API".to_string(),
            define_enum: "DEFINE_ENUM".to_string(),
            source_prefix: "api_".to_string(),
            source_suffix: ".cpp".to_string(),
            defaults_marker: "Default values:".to_string(),
        }
    }
}

impl ScanConfig {
    /// Returns true if `file_name` is a binding source file.
    pub fn is_source_file(&self, file_name: &str) -> bool {
        file_name.len() > self.source_prefix.len() + self.source_suffix.len()
            && file_name.starts_with(&self.source_prefix)
            && file_name.ends_with(&self.source_suffix)
    }

    /// Strip the first matching enum prefix from a header constant.
    pub fn strip_enum_prefix<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.enum_prefixes
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix.as_str()))
    }
}
