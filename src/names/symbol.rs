//! Symbol kind tags for metadata names.

use bitflags::bitflags;
use strum::{AsRefStr, Display, EnumCount, EnumIter};

/// The kind of symbol a [`crate::MetadataName`] refers to.
///
/// # Examples
///
/// ```rust
/// use dotnames::SymbolType;
/// use strum::IntoEnumIterator;
///
/// assert!(SymbolType::iter().any(|kind| kind == SymbolType::Event));
/// assert_eq!(SymbolType::ReturnParameter.to_string(), "ReturnParameter");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, Display, AsRefStr,
)]
pub enum SymbolType {
    /// A named type or type specification
    Type,
    /// A method or generic method instance
    Method,
    /// A field
    Field,
    /// A property, possibly indexed
    Property,
    /// An event
    Event,
    /// A module of an assembly
    Module,
    /// A namespace
    Namespace,
    /// An assembly
    Assembly,
    /// A method or property parameter
    Parameter,
    /// The return parameter of a method
    ReturnParameter,
    /// A generic parameter of a type or method
    GenericParameter,
}

impl SymbolType {
    /// Returns the [`SymbolTypes`] flag corresponding to this kind.
    #[must_use]
    pub fn flag(self) -> SymbolTypes {
        match self {
            SymbolType::Type => SymbolTypes::TYPE,
            SymbolType::Method => SymbolTypes::METHOD,
            SymbolType::Field => SymbolTypes::FIELD,
            SymbolType::Property => SymbolTypes::PROPERTY,
            SymbolType::Event => SymbolTypes::EVENT,
            SymbolType::Module => SymbolTypes::MODULE,
            SymbolType::Namespace => SymbolTypes::NAMESPACE,
            SymbolType::Assembly => SymbolTypes::ASSEMBLY,
            SymbolType::Parameter => SymbolTypes::PARAMETER,
            SymbolType::ReturnParameter => SymbolTypes::RETURN_PARAMETER,
            SymbolType::GenericParameter => SymbolTypes::GENERIC_PARAMETER,
        }
    }

    /// Returns `true` for the member kinds: methods, fields, properties and events.
    #[must_use]
    pub fn is_member(self) -> bool {
        matches!(
            self,
            SymbolType::Method | SymbolType::Field | SymbolType::Property | SymbolType::Event
        )
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// A set of [`SymbolType`] kinds, used by formatting options that apply per kind
    pub struct SymbolTypes: u16 {
        /// Types
        const TYPE = 0x0001;
        /// Methods
        const METHOD = 0x0002;
        /// Fields
        const FIELD = 0x0004;
        /// Properties
        const PROPERTY = 0x0008;
        /// Events
        const EVENT = 0x0010;
        /// Modules
        const MODULE = 0x0020;
        /// Namespaces
        const NAMESPACE = 0x0040;
        /// Assemblies
        const ASSEMBLY = 0x0080;
        /// Parameters
        const PARAMETER = 0x0100;
        /// Return parameters
        const RETURN_PARAMETER = 0x0200;
        /// Generic parameters
        const GENERIC_PARAMETER = 0x0400;
        /// All member kinds
        const MEMBERS = Self::METHOD.bits() | Self::FIELD.bits() | Self::PROPERTY.bits() | Self::EVENT.bits();
    }
}

impl SymbolTypes {
    /// Returns `true` if `kind` is part of this set.
    #[must_use]
    pub fn includes(self, kind: SymbolType) -> bool {
        self.contains(kind.flag())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_kind_has_distinct_flag() {
        let mut seen = SymbolTypes::empty();
        for kind in SymbolType::iter() {
            assert!(!seen.intersects(kind.flag()), "{} overlaps", kind);
            seen |= kind.flag();
        }
        assert_eq!(SymbolType::COUNT, 11);
    }

    #[test]
    fn test_members() {
        assert!(SymbolTypes::MEMBERS.includes(SymbolType::Property));
        assert!(!SymbolTypes::MEMBERS.includes(SymbolType::Type));
        assert!(SymbolType::Event.is_member());
        assert!(!SymbolType::Namespace.is_member());
    }
}
