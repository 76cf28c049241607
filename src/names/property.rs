//! Property names.

use std::{fmt, hash, str::FromStr};

use crate::{
    names::{
        binding::BindContext,
        check_declaring_type,
        list::NameList,
        method::MethodNameBuilder,
        parameter::{push_parameter_list, ParameterName},
        symbol::SymbolType,
        validate_simple_name,
    },
    syntax::{self, ParseOptions},
    Error, MethodName, Result, TypeName,
};

/// A property, optionally with index parameters.
///
/// The full name is `Declaring.Name`, followed by the index parameter types in brackets
/// when an index list is given: `System.Collections.Generic.List`1.Item[System.Int32]`.
/// The property type is not part of the full name.
///
/// # Examples
///
/// ```rust
/// use dotnames::members::PropertyName;
///
/// let item = PropertyName::parse("System.Collections.Generic.List`1.Item[System.Int32]:`0")?;
/// assert!(item.is_indexer());
/// assert!(item.property_type().unwrap().is_same(&item.declaring_type().unwrap().generic_parameters()[0]));
/// assert_eq!(item.get_method()?.full_name(), "System.Collections.Generic.List`1.get_Item(System.Int32)");
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone)]
pub struct PropertyName {
    name: String,
    declaring_type: Option<TypeName>,
    property_type: Option<TypeName>,
    parameters: Option<NameList<ParameterName>>,
    full_name: String,
}

impl PropertyName {
    /// Creates a property.
    ///
    /// The property type and index parameter types are bound against the declaring
    /// type's generic parameters.
    ///
    /// # Arguments
    ///
    /// * `declaring_type` - Type declaring the property, if known
    /// * `name` - Property name
    /// * `property_type` - Property type, if specified
    /// * `parameters` - Index parameters, `None` if unspecified
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] or [`crate::Error::Malformed`] for an invalid name,
    /// [`crate::Error::InvalidArgument`] for a declaring type that cannot declare members
    /// and [`crate::Error::CannotBind`] for placeholders outside the declaring type.
    pub fn new(
        declaring_type: Option<TypeName>,
        name: &str,
        property_type: Option<TypeName>,
        parameters: Option<Vec<ParameterName>>,
    ) -> Result<Self> {
        validate_simple_name(name, "name", false)?;
        check_declaring_type(declaring_type.as_ref())?;

        let context = BindContext::new(declaring_type.as_ref(), None);
        let property_type = match property_type {
            Some(property_type) => Some(property_type.bind_with(&context)?),
            None => None,
        };
        let parameters = match parameters {
            Some(parameters) => Some(
                parameters
                    .iter()
                    .enumerate()
                    .map(|(position, parameter)| {
                        parameter
                            .bind_with(&context)
                            .map(|parameter| parameter.with_position(position as i32))
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        let mut full_name = String::new();
        if let Some(declaring_type) = &declaring_type {
            full_name.push_str(declaring_type.full_name());
            full_name.push('.');
        }
        full_name.push_str(name);
        if let Some(parameters) = &parameters {
            push_parameter_list(&mut full_name, parameters, '[', ']');
        }

        Ok(PropertyName {
            name: name.to_string(),
            declaring_type,
            property_type,
            parameters: parameters.map(NameList::from),
            full_name,
        })
    }

    /// Parses a property signature such as `System.String.Chars[System.Int32]:System.Char`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] for
    /// text that is not a valid property signature.
    pub fn parse(text: &str) -> Result<PropertyName> {
        Self::parse_with(text, ParseOptions::empty())
    }

    /// Parses a property signature with explicit options.
    ///
    /// # Errors
    /// See [`PropertyName::parse`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<PropertyName> {
        syntax::parse_property(text, options)
    }

    /// Parses a property signature, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<PropertyName> {
        syntax::log_failure(text, "property", Self::parse(text))
    }

    fn unbound_parameters(&self) -> Option<Vec<ParameterName>> {
        self.parameters
            .as_ref()
            .map(|parameters| parameters.iter().map(ParameterName::unbind).collect())
    }

    /// Returns a copy with a different name.
    ///
    /// # Errors
    /// See [`PropertyName::new`].
    pub fn with_name(&self, name: &str) -> Result<PropertyName> {
        Self::new(
            self.declaring_type.clone(),
            name,
            self.property_type.clone(),
            self.parameters.as_ref().map(|parameters| parameters.to_vec()),
        )
    }

    /// Returns a copy declared by a different type; the signature is rebound.
    ///
    /// # Errors
    /// See [`PropertyName::new`].
    pub fn with_declaring_type(&self, declaring_type: Option<TypeName>) -> Result<PropertyName> {
        Self::new(
            declaring_type,
            &self.name,
            self.property_type.as_ref().map(TypeName::unbind),
            self.unbound_parameters(),
        )
    }

    /// Returns a copy with a different property type.
    ///
    /// # Errors
    /// See [`PropertyName::new`].
    pub fn with_property_type(&self, property_type: Option<TypeName>) -> Result<PropertyName> {
        Self::new(
            self.declaring_type.clone(),
            &self.name,
            property_type,
            self.parameters.as_ref().map(|parameters| parameters.to_vec()),
        )
    }

    /// Returns a copy with different index parameters.
    ///
    /// # Errors
    /// See [`PropertyName::new`].
    pub fn with_parameters(&self, parameters: Option<Vec<ParameterName>>) -> Result<PropertyName> {
        Self::new(
            self.declaring_type.clone(),
            &self.name,
            self.property_type.clone(),
            parameters,
        )
    }

    /// The property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully qualified name, which also defines equality.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The declaring type, if known.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeName> {
        self.declaring_type.as_ref()
    }

    /// The property type, if specified.
    #[must_use]
    pub fn property_type(&self) -> Option<&TypeName> {
        self.property_type.as_ref()
    }

    /// The index parameters, `None` if unspecified.
    #[must_use]
    pub fn parameters(&self) -> Option<&[ParameterName]> {
        self.parameters.as_deref()
    }

    /// Returns `true` if the property has at least one index parameter.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.parameters
            .as_ref()
            .is_some_and(|parameters| !parameters.is_empty())
    }

    /// Always [`SymbolType::Property`].
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::Property
    }

    fn accessor(&self, prefix: &str) -> MethodNameBuilder {
        let builder = MethodNameBuilder::new(&format!("{}{}", prefix, self.name));
        match &self.declaring_type {
            Some(declaring_type) => builder.declaring_type(declaring_type.clone()),
            None => builder,
        }
    }

    /// The getter, `get_Name(index...)`, returning the property type.
    ///
    /// # Errors
    /// Propagates failures of building the method name.
    pub fn get_method(&self) -> Result<MethodName> {
        let mut builder = self
            .accessor("get_")
            .parameters(self.parameters.as_ref().map_or_else(Vec::new, |p| p.to_vec()));
        if let Some(property_type) = &self.property_type {
            builder = builder.return_type(property_type.clone());
        }
        builder.build()
    }

    /// The setter, `set_Name(index..., value)`, returning `System.Void`.
    ///
    /// # Errors
    /// Propagates failures of building the method name.
    pub fn set_method(&self) -> Result<MethodName> {
        let mut parameters = self.parameters.as_ref().map_or_else(Vec::new, |p| p.to_vec());
        parameters.push(ParameterName::new("value", self.property_type.clone())?);

        self.accessor("set_")
            .parameters(parameters)
            .return_type(TypeName::system("Void")?)
            .build()
    }
}

impl PartialEq for PropertyName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for PropertyName {}

impl hash::Hash for PropertyName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl fmt::Debug for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyName").field(&self.full_name).finish()
    }
}

impl FromStr for PropertyName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenericParameterKind;

    fn list() -> TypeName {
        TypeName::create("System.Collections.Generic", "List`1").unwrap()
    }

    fn int32() -> TypeName {
        TypeName::create("System", "Int32").unwrap()
    }

    #[test]
    fn test_full_name() {
        let count = PropertyName::new(Some(list()), "Count", Some(int32()), None).unwrap();
        assert_eq!(count.full_name(), "System.Collections.Generic.List`1.Count");
        assert!(!count.is_indexer());

        let item = PropertyName::new(
            Some(list()),
            "Item",
            Some(TypeName::unbound_generic_parameter(GenericParameterKind::Type, 0)),
            Some(vec![ParameterName::new("index", Some(int32())).unwrap()]),
        )
        .unwrap();
        assert_eq!(
            item.full_name(),
            "System.Collections.Generic.List`1.Item[System.Int32]"
        );
        assert!(item.is_indexer());
        assert!(item
            .property_type()
            .unwrap()
            .as_generic_parameter()
            .unwrap()
            .is_bound());
    }

    #[test]
    fn test_lone_untyped_parameter_counts() {
        let one = PropertyName::new(
            Some(list()),
            "Item",
            None,
            Some(vec![ParameterName::new("x", None).unwrap()]),
        )
        .unwrap();
        let zero = PropertyName::new(Some(list()), "Item", None, Some(Vec::new())).unwrap();
        assert_eq!(one.full_name(), "System.Collections.Generic.List`1.Item[?]");
        assert_ne!(one, zero);
    }

    #[test]
    fn test_accessors() {
        let item = PropertyName::new(
            Some(list()),
            "Item",
            Some(int32()),
            Some(vec![ParameterName::from_type(int32())]),
        )
        .unwrap();

        let getter = item.get_method().unwrap();
        assert_eq!(
            getter.full_name(),
            "System.Collections.Generic.List`1.get_Item(System.Int32)"
        );
        assert_eq!(getter.return_type(), Some(&int32()));

        let setter = item.set_method().unwrap();
        assert_eq!(
            setter.full_name(),
            "System.Collections.Generic.List`1.set_Item(System.Int32,System.Int32)"
        );
        assert_eq!(setter.parameters().unwrap()[1].name(), "value");
        assert_eq!(setter.return_type().unwrap().full_name(), "System.Void");
    }

    #[test]
    fn test_with_declaring_type_rebinds() {
        let item = PropertyName::new(
            Some(list()),
            "Item",
            Some(TypeName::unbound_generic_parameter(GenericParameterKind::Type, 0)),
            None,
        )
        .unwrap();
        let stack = TypeName::create("System.Collections.Generic", "Stack`1").unwrap();
        let moved = item.with_declaring_type(Some(stack.clone())).unwrap();
        assert!(moved
            .property_type()
            .unwrap()
            .is_same(&stack.generic_parameters()[0]));
        assert!(item
            .with_declaring_type(Some(int32()))
            .is_err());
    }
}
