//! Metadata describing option containers and command handlers.
//!
//! Rust has no runtime reflection, so the shapes the synthesiser walks are
//! explicit values. They are usually produced by `#[derive(Reflect)]`, but
//! hosts can also assemble them by hand, for instance when exposing types
//! loaded from a plugin.

mod markers;
mod value;

use std::fmt;
use std::sync::Arc;

pub use markers::{CompletionSource, Marker, MarkerKind, MarkerProvider, Markers};
pub use value::{Value, ValueType};

/// Shared handle to a type's metadata.
pub type TypeRef = Arc<TypeInfo>;

/// Nominal capabilities a type can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Capability {
    /// Properties of the type become options shared by every command.
    GlobalOptionsContainer,
}

/// Implemented by types that can describe their own properties.
pub trait Reflect {
    /// Returns the metadata for `Self`.
    fn type_info() -> TypeInfo;

    /// Returns the metadata behind a shared handle.
    #[must_use]
    fn type_ref() -> TypeRef
    where
        Self: Sized,
    {
        Arc::new(Self::type_info())
    }
}

/// Marker trait for containers whose properties are global options.
///
/// The trait carries no members. Its runtime counterpart is
/// [`Capability::GlobalOptionsContainer`], which `#[derive(Reflect)]` records
/// alongside the `impl` when the struct is annotated with
/// `#[starter(global)]`.
pub trait GlobalOptionsContainer: Reflect {}

/// Metadata for a single type.
///
/// Two `TypeInfo` values are equal when they share a namespace and name; the
/// property list does not take part in identity.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    namespace: String,
    name: String,
    capabilities: Vec<Capability>,
    properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    /// Creates metadata for `name` declared in `namespace`.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            capabilities: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Records a capability; duplicates are ignored.
    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    /// Shorthand for declaring the global options container capability.
    #[must_use]
    pub fn global(self) -> Self {
        self.with_capability(Capability::GlobalOptionsContainer)
    }

    /// Appends a public property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(property);
        self
    }

    /// Simple type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaring namespace, empty for types declared at the root.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully-qualified name, `namespace::name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }

    /// Capabilities declared by the type.
    #[must_use]
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Whether the type declares `capability`.
    #[must_use]
    pub fn implements(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Whether the type is a global options container.
    #[must_use]
    pub fn is_global_options_container(&self) -> bool {
        self.implements(Capability::GlobalOptionsContainer)
    }

    /// Public properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.name == other.name
    }
}

impl Eq for TypeInfo {}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Metadata for a public property of an option container.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    name: String,
    value_type: ValueType,
    markers: Markers,
}

impl PropertyInfo {
    /// Creates a property without markers.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            markers: Markers::default(),
        }
    }

    /// Replaces the property's markers.
    #[must_use]
    pub fn with_markers(mut self, markers: impl Into<Markers>) -> Self {
        self.markers = markers.into();
        self
    }

    /// Property identifier, usually `PascalCase`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value type.
    #[must_use]
    pub const fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Markers attached to the property.
    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }
}

/// Metadata for one parameter of a command handler.
#[derive(Debug, Clone)]
pub struct ParameterInfo {
    name: Option<String>,
    value_type: ValueType,
    default: Option<Value>,
    markers: Markers,
}

impl ParameterInfo {
    /// Creates a named parameter without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: Some(name.into()),
            value_type,
            default: None,
            markers: Markers::default(),
        }
    }

    /// Creates a parameter whose name could not be resolved.
    #[must_use]
    pub fn unnamed(value_type: ValueType) -> Self {
        Self {
            name: None,
            value_type,
            default: None,
            markers: Markers::default(),
        }
    }

    /// Declares a default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Replaces the parameter's markers.
    #[must_use]
    pub fn with_markers(mut self, markers: impl Into<Markers>) -> Self {
        self.markers = markers.into();
        self
    }

    /// Parameter identifier, when resolvable.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared value type.
    #[must_use]
    pub const fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Declared default; `None` means the parameter has no default.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Markers attached to the parameter.
    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }
}

/// Metadata for a command handler.
#[derive(Debug, Clone)]
pub struct MethodInfo {
    name: String,
    parameters: Vec<ParameterInfo>,
}

impl MethodInfo {
    /// Creates a handler without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterInfo) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Handler name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }
}

#[cfg(test)]
mod tests;
