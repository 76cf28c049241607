//! The name model.
//!
//! Every name is immutable and cheap to clone. Composite names share their components, so
//! deriving a new name (`with_*`, `make_*`) copies only what changes.
//!
//! # Key Components
//!
//! - [`types`] - Type names and their specifications
//! - [`generic`] - Generic parameters and their declarations
//! - [`method`], [`property`], [`field`], [`event`] - Member names
//! - [`assembly`], [`namespace`] - Scopes
//! - [`binding`] - Resolution of positional generic parameter references
//! - [`matching`] - Wildcard tolerant structural comparison

pub(crate) mod array;
pub(crate) mod assembly;
pub(crate) mod binding;
pub(crate) mod blob;
pub(crate) mod event;
pub(crate) mod field;
pub(crate) mod generic;
pub(crate) mod list;
pub(crate) mod matching;
pub(crate) mod method;
pub(crate) mod namespace;
pub(crate) mod parameter;
pub(crate) mod property;
pub(crate) mod symbol;
pub(crate) mod types;

use std::fmt;

use crate::{
    format::{self, MetadataNameFormat},
    members::{EventName, FieldName, ParameterName, PropertyName},
    syntax::{self, ParseOptions},
    AssemblyName, Error, MethodName, ModuleName, NamespaceName, Result, SymbolType, TypeName,
};

/// Characters that separate names in signatures and therefore cannot appear in one.
const SEPARATORS: &[char] = &[
    '.', '+', '/', ',', '[', ']', '<', '>', '*', '&', '(', ')', ':', '`', '!', '=', '"', '\'',
];

/// Validates a type or member name given to a model constructor.
///
/// `allow_dot` admits `.` for method names such as `.ctor` or explicit interface
/// implementations. Apart from the constructor names, dots must separate non-empty
/// segments.
pub(crate) fn validate_simple_name(name: &str, argument: &str, allow_dot: bool) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Empty);
    }
    if allow_dot
        && !matches!(name, method::CONSTRUCTOR_NAME | method::TYPE_INITIALIZER_NAME)
        && name.split('.').any(str::is_empty)
    {
        return Err(malformed_error!("Empty segment in {} '{}'", argument, name));
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || (SEPARATORS.contains(c) && !(allow_dot && *c == '.')))
    {
        return Err(malformed_error!(
            "Invalid character '{}' in {} '{}'",
            c,
            argument,
            name
        ));
    }
    Ok(())
}

/// Members can be declared by named types, generic instances and arrays.
pub(crate) fn check_declaring_type(declaring_type: Option<&TypeName>) -> Result<()> {
    match declaring_type {
        Some(declaring_type)
            if !(declaring_type.as_named().is_some()
                || declaring_type.is_generic_instance()
                || declaring_type.is_array()) =>
        {
            Err(invalid_argument!(
                "declaring_type",
                "'{}' cannot declare members",
                declaring_type
            ))
        }
        _ => Ok(()),
    }
}

/// A type or a member of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberName {
    /// A type, possibly nested
    Type(TypeName),
    /// A method
    Method(MethodName),
    /// A field
    Field(FieldName),
    /// A property
    Property(PropertyName),
    /// An event
    Event(EventName),
}

impl MemberName {
    /// Parses a member signature.
    ///
    /// A parameter list makes the text a method, an index list a property; anything else
    /// is read as a method with unspecified parameters.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] for
    /// text that is not a valid member signature.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnames::members::MemberName;
    ///
    /// assert!(matches!(MemberName::parse("System.String.Chars[System.Int32]")?, MemberName::Property(_)));
    /// assert!(matches!(MemberName::parse("System.String.Trim()")?, MemberName::Method(_)));
    /// # Ok::<(), dotnames::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<MemberName> {
        syntax::parse_member(text, ParseOptions::empty())
    }

    /// Parses a member signature, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<MemberName> {
        syntax::log_failure(text, "member", Self::parse(text))
    }

    /// The member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MemberName::Type(name) => name.name(),
            MemberName::Method(name) => name.name(),
            MemberName::Field(name) => name.name(),
            MemberName::Property(name) => name.name(),
            MemberName::Event(name) => name.name(),
        }
    }

    /// The fully qualified name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self {
            MemberName::Type(name) => name.full_name(),
            MemberName::Method(name) => name.full_name(),
            MemberName::Field(name) => name.full_name(),
            MemberName::Property(name) => name.full_name(),
            MemberName::Event(name) => name.full_name(),
        }
    }

    /// The declaring type, if known.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeName> {
        match self {
            MemberName::Type(name) => name.declaring_type(),
            MemberName::Method(name) => name.declaring_type(),
            MemberName::Field(name) => name.declaring_type(),
            MemberName::Property(name) => name.declaring_type(),
            MemberName::Event(name) => name.declaring_type(),
        }
    }

    /// The kind of symbol.
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        match self {
            MemberName::Type(name) => name.symbol_type(),
            MemberName::Method(_) => SymbolType::Method,
            MemberName::Field(_) => SymbolType::Field,
            MemberName::Property(_) => SymbolType::Property,
            MemberName::Event(_) => SymbolType::Event,
        }
    }

    /// Structural match between members of the same kind.
    #[must_use]
    pub fn matches(&self, other: &MemberName) -> bool {
        match (self, other) {
            (MemberName::Type(left), MemberName::Type(right)) => left.matches(right),
            (MemberName::Method(left), MemberName::Method(right)) => left.matches(right),
            (MemberName::Field(left), MemberName::Field(right)) => left.matches(right),
            (MemberName::Property(left), MemberName::Property(right)) => left.matches(right),
            (MemberName::Event(left), MemberName::Event(right)) => left.matches(right),
            _ => false,
        }
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Any name of the model.
///
/// This is the input of the formatter; every concrete name converts into it with `From`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetadataName {
    /// An assembly
    Assembly(AssemblyName),
    /// A module
    Module(ModuleName),
    /// A namespace
    Namespace(NamespaceName),
    /// A type
    Type(TypeName),
    /// A method
    Method(MethodName),
    /// A field
    Field(FieldName),
    /// A property
    Property(PropertyName),
    /// An event
    Event(EventName),
    /// A parameter or return parameter
    Parameter(ParameterName),
}

impl MetadataName {
    /// The short name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MetadataName::Assembly(name) => name.name(),
            MetadataName::Module(name) => name.name(),
            MetadataName::Namespace(name) => name.name(),
            MetadataName::Type(name) => name.name(),
            MetadataName::Method(name) => name.name(),
            MetadataName::Field(name) => name.name(),
            MetadataName::Property(name) => name.name(),
            MetadataName::Event(name) => name.name(),
            MetadataName::Parameter(name) => name.name(),
        }
    }

    /// The fully qualified name, which defines equality.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self {
            MetadataName::Assembly(name) => name.full_name(),
            MetadataName::Module(name) => name.name(),
            MetadataName::Namespace(name) => name.full_name(),
            MetadataName::Type(name) => name.full_name(),
            MetadataName::Method(name) => name.full_name(),
            MetadataName::Field(name) => name.full_name(),
            MetadataName::Property(name) => name.full_name(),
            MetadataName::Event(name) => name.full_name(),
            MetadataName::Parameter(name) => name.full_name(),
        }
    }

    /// The kind of symbol.
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        match self {
            MetadataName::Assembly(_) => SymbolType::Assembly,
            MetadataName::Module(_) => SymbolType::Module,
            MetadataName::Namespace(_) => SymbolType::Namespace,
            MetadataName::Type(name) => name.symbol_type(),
            MetadataName::Method(_) => SymbolType::Method,
            MetadataName::Field(_) => SymbolType::Field,
            MetadataName::Property(_) => SymbolType::Property,
            MetadataName::Event(_) => SymbolType::Event,
            MetadataName::Parameter(name) => name.symbol_type(),
        }
    }

    /// Structural match between names of the same kind.
    #[must_use]
    pub fn matches(&self, other: &MetadataName) -> bool {
        match (self, other) {
            (MetadataName::Assembly(left), MetadataName::Assembly(right)) => left.matches(right),
            (MetadataName::Module(left), MetadataName::Module(right)) => left.matches(right),
            (MetadataName::Namespace(left), MetadataName::Namespace(right)) => {
                left.matches(right)
            }
            (MetadataName::Type(left), MetadataName::Type(right)) => left.matches(right),
            (MetadataName::Method(left), MetadataName::Method(right)) => left.matches(right),
            (MetadataName::Field(left), MetadataName::Field(right)) => left.matches(right),
            (MetadataName::Property(left), MetadataName::Property(right)) => {
                left.matches(right)
            }
            (MetadataName::Event(left), MetadataName::Event(right)) => left.matches(right),
            (MetadataName::Parameter(left), MetadataName::Parameter(right)) => {
                left.matches(right)
            }
            _ => false,
        }
    }

    /// Renders this name with a format specifier (`C`, `N`, `M`, `F`, `G`, `U` or empty).
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownFormat`] for any other specifier.
    pub fn to_string_with(&self, specifier: &str) -> Result<String> {
        format::format(self, specifier)
    }

    /// Renders this name with an explicit format.
    #[must_use]
    pub fn to_string_with_format(&self, format: &MetadataNameFormat) -> String {
        format::format_with(self, format)
    }
}

impl fmt::Display for MetadataName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl From<MemberName> for MetadataName {
    fn from(member: MemberName) -> Self {
        match member {
            MemberName::Type(name) => MetadataName::Type(name),
            MemberName::Method(name) => MetadataName::Method(name),
            MemberName::Field(name) => MetadataName::Field(name),
            MemberName::Property(name) => MetadataName::Property(name),
            MemberName::Event(name) => MetadataName::Event(name),
        }
    }
}

macro_rules! metadata_name_from {
    ($($variant:ident($name:ty)),* $(,)?) => {
        $(
            impl From<$name> for MetadataName {
                fn from(name: $name) -> Self {
                    MetadataName::$variant(name)
                }
            }

            impl From<&$name> for MetadataName {
                fn from(name: &$name) -> Self {
                    MetadataName::$variant(name.clone())
                }
            }

            impl $name {
                /// Renders this name with a format specifier (`C`, `N`, `M`, `F`, `G`, `U`
                /// or empty).
                ///
                /// # Errors
                /// Returns [`crate::Error::UnknownFormat`] for any other specifier.
                pub fn to_string_with(&self, specifier: &str) -> Result<String> {
                    format::format(&MetadataName::from(self), specifier)
                }

                /// Renders this name with an explicit format.
                #[must_use]
                pub fn to_string_with_format(&self, format: &MetadataNameFormat) -> String {
                    format::format_with(&MetadataName::from(self), format)
                }
            }
        )*
    };
}

metadata_name_from!(
    Assembly(AssemblyName),
    Module(ModuleName),
    Namespace(NamespaceName),
    Type(TypeName),
    Method(MethodName),
    Field(FieldName),
    Property(PropertyName),
    Event(EventName),
    Parameter(ParameterName),
);

impl From<&MemberName> for MetadataName {
    fn from(member: &MemberName) -> Self {
        member.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_name() {
        assert!(validate_simple_name("List", "name", false).is_ok());
        assert_eq!(validate_simple_name("", "name", false), Err(Error::Empty));
        assert!(validate_simple_name("A.B", "name", false).is_err());
        assert!(validate_simple_name(".ctor", "name", true).is_ok());
        assert!(validate_simple_name("a b", "name", true).is_err());
        assert!(validate_simple_name("System.IDisposable.Dispose", "name", true).is_ok());
        assert!(validate_simple_name(".Dispose", "name", true).is_err());
        assert!(validate_simple_name("A..B", "name", true).is_err());
        assert!(validate_simple_name("A`1", "name", false).is_err());
    }

    #[test]
    fn test_metadata_name_dispatch() {
        let int32 = TypeName::create("System", "Int32").unwrap();
        let name = MetadataName::from(&int32);
        assert_eq!(name.full_name(), "System.Int32");
        assert_eq!(name.name(), "Int32");
        assert_eq!(name.symbol_type(), SymbolType::Type);
        assert!(name.matches(&MetadataName::Type(int32.clone())));
        assert!(!name.matches(&MetadataName::Namespace(
            NamespaceName::parse("System").unwrap()
        )));
        assert_eq!(name.to_string(), "System.Int32");
    }

    #[test]
    fn test_member_name_dispatch() {
        let string = TypeName::create("System", "String").unwrap();
        let field = MemberName::Field(FieldName::new(Some(string.clone()), "Empty", None).unwrap());
        assert_eq!(field.declaring_type(), Some(&string));
        assert_eq!(field.symbol_type(), SymbolType::Field);
        assert_eq!(MetadataName::from(field).symbol_type(), SymbolType::Field);
    }
}
