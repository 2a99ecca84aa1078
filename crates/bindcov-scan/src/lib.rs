//! # bindcov-scan
//!
//! Extraction of [`Declaration`](bindcov_core::Declaration) records from
//! source text. Two scanners share one tokenizer:
//!
//! - [`NativeScanner`] reads the wrapped library's public header line by
//!   line and extracts exported functions (with their namespace) and enum
//!   constants.
//! - [`BindingScanner`] reads the generated binding sources and extracts
//!   `DEFINE_API`/`DEFINE_ENUM` definitions together with the default
//!   values documented in their help text.
//!
//! [`DecoratorTable`] parses the argument-decoration macros of the binding
//! helper header so callers can expand decorated argument names.
//!
//! # Example
//!
//! ```
//! use bindcov_scan::{NativeScanner, ScanConfig};
//!
//! let config = ScanConfig::default();
//! let header = "namespace ImGui\n{\n    IMGUI_API bool Button(const char* label, const ImVec2& size = ImVec2(0, 0));\n}\n";
//! let api = NativeScanner::new(&config).scan(header);
//!
//! assert_eq!(api.functions[0].signature(), "bool ImGui::Button(const char*, const ImVec2&)");
//! ```

pub mod binding;
pub mod config;
pub mod decorator;
pub mod lexer;
pub mod native;

pub use binding::{BindingApi, BindingScanner, ScanWarning};
pub use config::ScanConfig;
pub use decorator::DecoratorTable;
pub use lexer::{Lexer, Spanned, Token};
pub use native::{NativeApi, NativeScanner};

use thiserror::Error;

/// Errors that can occur while scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scanning operations.
pub type ScanResult<T> = Result<T, ScanError>;
