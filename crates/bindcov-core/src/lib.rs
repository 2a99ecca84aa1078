//! # bindcov-core
//!
//! Core data model for bindcov. Both the native API scanner and the
//! binding source scanner produce [`Declaration`]s made of [`Argument`]
//! records; the coverage checker only ever consumes these types.
//!
//! # Example
//!
//! ```
//! use bindcov_core::{Argument, Declaration};
//!
//! let decl = Declaration::new("bool", "Checkbox")
//!     .in_namespace("ImGui")
//!     .with_arg(Argument::new("const char*", "label"))
//!     .with_arg(Argument::new("bool*", "v"));
//!
//! assert_eq!(decl.signature(), "bool ImGui::Checkbox(const char*, bool*)");
//! ```

pub mod declaration;
pub mod error;
pub mod types;

pub use declaration::{Argument, Declaration};
pub use error::{Error, Result};
