//! Function declarations and their arguments.
//!
//! A [`Declaration`] is produced once per scan pass and never mutated by
//! the coverage checker: normalization builds a new declaration instead.

use std::fmt;

/// Type text used for the variadic marker argument.
pub const VARIADIC: &str = "...";

/// One argument of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    /// Canonical type text. For raw arguments this is the verbatim declarator.
    pub ty: String,
    /// Argument name (empty when the scanner could not find one).
    pub name: String,
    /// Default value as written in the source.
    pub default: Option<String>,
    /// Fixed array size, 0 for scalars.
    pub size: usize,
    /// Role decoration on binding-side arguments (e.g. `API_RO`).
    pub decoration: Option<String>,
    /// True when the declarator could not be split into type and name.
    pub raw: bool,
}

impl Argument {
    /// Create a scalar argument.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            default: None,
            size: 0,
            decoration: None,
            raw: false,
        }
    }

    /// Keep a declarator verbatim (function pointers, unnamed parameters).
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            raw: true,
            ..Self::new(text, String::new())
        }
    }

    /// The trailing `...` of a variadic function.
    pub fn variadic() -> Self {
        Self::raw(VARIADIC)
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the array size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the role decoration.
    pub fn with_decoration(mut self, decoration: impl Into<String>) -> Self {
        self.decoration = Some(decoration.into());
        self
    }

    /// Returns true for the variadic marker.
    pub fn is_variadic(&self) -> bool {
        self.raw && self.ty == VARIADIC
    }

    /// Returns true if the argument is passed by pointer.
    pub fn is_pointer(&self) -> bool {
        crate::types::is_pointer(&self.ty)
    }

    /// Returns true if the decoration marks the argument as optional.
    pub fn is_optional(&self) -> bool {
        self.decoration
            .as_deref()
            .map_or(false, |decoration| decoration.ends_with('O'))
    }

    /// Type as it appears in a signature: `type[size]` for arrays.
    pub fn signature_type(&self) -> String {
        if self.size > 0 {
            format!("{}[{}]", self.ty, self.size)
        } else {
            self.ty.clone()
        }
    }
}

/// A function declaration from either side of the binding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    /// Return type.
    pub ty: String,
    /// Function name.
    pub name: String,
    /// Enclosing namespace or class, if any.
    pub namespace: Option<String>,
    /// Ordered arguments.
    pub args: Vec<Argument>,
}

impl Declaration {
    /// Create a declaration without arguments.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            namespace: None,
            args: Vec::new(),
        }
    }

    /// Place the declaration in a namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append an argument.
    pub fn with_arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    /// Name qualified with the namespace (`ImGui::Begin`).
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}::{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    /// Argument types in signature form.
    pub fn arg_types(&self) -> Vec<String> {
        self.args.iter().map(Argument::signature_type).collect()
    }

    /// Canonical signature: `type [ns::]name(arg, arg, ...)`.
    pub fn signature(&self) -> String {
        format!(
            "{} {}({})",
            self.ty,
            self.qualified_name(),
            self.arg_types().join(", ")
        )
    }

    /// Returns true if the last argument is the variadic marker.
    pub fn is_variadic(&self) -> bool {
        self.args.last().map_or(false, Argument::is_variadic)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}
