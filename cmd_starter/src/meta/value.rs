//! Value types and default values understood by the synthesiser.

use std::fmt;

use serde::Serialize;

/// Declared type of a property or parameter.
///
/// The set is closed: the clap bridge knows a value parser for every variant
/// except [`ValueType::Custom`] and nested lists, which are rejected during
/// synthesis.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum ValueType {
    /// `true`/`false`; options of this type are switches.
    Bool,
    /// UTF-8 text.
    String,
    /// Fixed-width integer.
    Integer {
        /// Width in bits.
        bits: u8,
        /// Whether negative values are accepted.
        signed: bool,
    },
    /// Floating point number.
    Float {
        /// Width in bits.
        bits: u8,
    },
    /// Filesystem path.
    Path,
    /// Ordered list; options of this type accept multiple values.
    List {
        /// Element type.
        of: Box<ValueType>,
    },
    /// Any type outside the supported set.
    Custom {
        /// Type name as written at the declaration site.
        name: String,
    },
}

impl ValueType {
    /// Builds a list of `of`.
    #[must_use]
    pub fn list(of: Self) -> Self {
        Self::List { of: Box::new(of) }
    }

    /// Whether the type implements the ordered-list capability.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Element type for lists, `self` otherwise.
    #[must_use]
    pub fn element(&self) -> &Self {
        match self {
            Self::List { of } => of.as_ref(),
            other => other,
        }
    }

    /// Whether the clap bridge can parse values of this type.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Custom { .. } => false,
            Self::List { of } => !of.is_list() && of.is_supported(),
            _ => true,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::Integer { bits, signed: true } => write!(f, "i{bits}"),
            Self::Integer { bits, signed: false } => write!(f, "u{bits}"),
            Self::Float { bits } => write!(f, "f{bits}"),
            Self::Path => f.write_str("path"),
            Self::List { of } => write!(f, "list<{of}>"),
            Self::Custom { name } => f.write_str(name),
        }
    }
}

/// Default value declared for a parameter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Boolean literal.
    Bool(bool),
    /// Signed integer literal.
    Int(i64),
    /// Unsigned integer literal.
    UInt(u64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    Str(String),
    /// List literal.
    List(Vec<Value>),
}

impl Value {
    /// Renders each element for parsers that take one string per value.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
