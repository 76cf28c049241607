//! Field names.

use std::{fmt, hash, str::FromStr};

use crate::{
    names::{binding::BindContext, check_declaring_type, symbol::SymbolType, validate_simple_name},
    syntax::{self, ParseOptions},
    Error, Result, TypeName,
};

/// A field, `Declaring.Name` with an optional field type.
#[derive(Clone)]
pub struct FieldName {
    name: String,
    declaring_type: Option<TypeName>,
    field_type: Option<TypeName>,
    full_name: String,
}

impl FieldName {
    /// Creates a field. The field type is bound against the declaring type.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] or [`crate::Error::Malformed`] for an invalid name,
    /// [`crate::Error::InvalidArgument`] for a declaring type that cannot declare members
    /// and [`crate::Error::CannotBind`] for placeholders outside the declaring type.
    pub fn new(
        declaring_type: Option<TypeName>,
        name: &str,
        field_type: Option<TypeName>,
    ) -> Result<Self> {
        validate_simple_name(name, "name", false)?;
        check_declaring_type(declaring_type.as_ref())?;

        let field_type = match field_type {
            Some(field_type) => {
                Some(field_type.bind_with(&BindContext::new(declaring_type.as_ref(), None))?)
            }
            None => None,
        };
        let full_name = match &declaring_type {
            Some(declaring_type) => format!("{}.{}", declaring_type, name),
            None => name.to_string(),
        };

        Ok(FieldName {
            name: name.to_string(),
            declaring_type,
            field_type,
            full_name,
        })
    }

    /// Parses a field signature such as `System.String.Empty:System.String`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] for
    /// text that is not a valid field signature.
    pub fn parse(text: &str) -> Result<FieldName> {
        Self::parse_with(text, ParseOptions::empty())
    }

    /// Parses a field signature with explicit options.
    ///
    /// # Errors
    /// See [`FieldName::parse`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<FieldName> {
        syntax::parse_field(text, options)
    }

    /// Parses a field signature, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<FieldName> {
        syntax::log_failure(text, "field", Self::parse(text))
    }

    /// Returns a copy with a different name.
    ///
    /// # Errors
    /// See [`FieldName::new`].
    pub fn with_name(&self, name: &str) -> Result<FieldName> {
        Self::new(self.declaring_type.clone(), name, self.field_type.clone())
    }

    /// Returns a copy declared by a different type; the field type is rebound.
    ///
    /// # Errors
    /// See [`FieldName::new`].
    pub fn with_declaring_type(&self, declaring_type: Option<TypeName>) -> Result<FieldName> {
        Self::new(
            declaring_type,
            &self.name,
            self.field_type.as_ref().map(TypeName::unbind),
        )
    }

    /// Returns a copy with a different field type.
    ///
    /// # Errors
    /// See [`FieldName::new`].
    pub fn with_field_type(&self, field_type: Option<TypeName>) -> Result<FieldName> {
        Self::new(self.declaring_type.clone(), &self.name, field_type)
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully qualified name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The declaring type, if known.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeName> {
        self.declaring_type.as_ref()
    }

    /// The field type, if specified.
    #[must_use]
    pub fn field_type(&self) -> Option<&TypeName> {
        self.field_type.as_ref()
    }

    /// Always [`SymbolType::Field`].
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::Field
    }
}

impl PartialEq for FieldName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for FieldName {}

impl hash::Hash for FieldName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl fmt::Debug for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldName").field(&self.full_name).finish()
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field() {
        let string = TypeName::create("System", "String").unwrap();
        let empty = FieldName::new(Some(string.clone()), "Empty", Some(string.clone())).unwrap();
        assert_eq!(empty.full_name(), "System.String.Empty");
        assert_eq!(empty.field_type(), Some(&string));
        assert_eq!(empty.symbol_type(), SymbolType::Field);

        let renamed = empty.with_name("Other").unwrap();
        assert_eq!(renamed.full_name(), "System.String.Other");
        assert!(empty.with_name("a.b").is_err());
        assert_eq!(FieldName::new(None, "", None), Err(Error::Empty));
    }
}
