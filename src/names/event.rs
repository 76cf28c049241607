//! Event names.

use std::{fmt, hash, str::FromStr};

use crate::{
    names::{
        binding::BindContext, check_declaring_type, method::MethodNameBuilder,
        parameter::ParameterName, symbol::SymbolType, validate_simple_name,
    },
    syntax::{self, ParseOptions},
    Error, MethodName, Result, TypeName,
};

/// An event, `Declaring.Name` with an optional handler type.
///
/// The accessor methods follow the `add_`, `remove_` and `raise_` naming convention.
///
/// # Examples
///
/// ```rust
/// use dotnames::members::EventName;
///
/// let clicked = EventName::parse("Forms.Button.Click:System.EventHandler")?;
/// assert_eq!(clicked.full_name(), "Forms.Button.Click");
/// assert_eq!(
///     clicked.add_method()?.full_name(),
///     "Forms.Button.add_Click(System.EventHandler)"
/// );
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone)]
pub struct EventName {
    name: String,
    declaring_type: Option<TypeName>,
    event_type: Option<TypeName>,
    full_name: String,
}

impl EventName {
    /// Creates an event. The handler type is bound against the declaring type.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] or [`crate::Error::Malformed`] for an invalid name,
    /// [`crate::Error::InvalidArgument`] for a declaring type that cannot declare members
    /// and [`crate::Error::CannotBind`] for placeholders outside the declaring type.
    pub fn new(
        declaring_type: Option<TypeName>,
        name: &str,
        event_type: Option<TypeName>,
    ) -> Result<Self> {
        validate_simple_name(name, "name", false)?;
        check_declaring_type(declaring_type.as_ref())?;

        let event_type = match event_type {
            Some(event_type) => {
                Some(event_type.bind_with(&BindContext::new(declaring_type.as_ref(), None))?)
            }
            None => None,
        };
        let full_name = match &declaring_type {
            Some(declaring_type) => format!("{}.{}", declaring_type, name),
            None => name.to_string(),
        };

        Ok(EventName {
            name: name.to_string(),
            declaring_type,
            event_type,
            full_name,
        })
    }

    /// Parses an event signature such as `Forms.Button.Click:System.EventHandler`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] for
    /// text that is not a valid event signature.
    pub fn parse(text: &str) -> Result<EventName> {
        Self::parse_with(text, ParseOptions::empty())
    }

    /// Parses an event signature with explicit options.
    ///
    /// # Errors
    /// See [`EventName::parse`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<EventName> {
        syntax::parse_event(text, options)
    }

    /// Parses an event signature, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<EventName> {
        syntax::log_failure(text, "event", Self::parse(text))
    }

    /// Returns a copy with a different name.
    ///
    /// # Errors
    /// See [`EventName::new`].
    pub fn with_name(&self, name: &str) -> Result<EventName> {
        Self::new(self.declaring_type.clone(), name, self.event_type.clone())
    }

    /// Returns a copy declared by a different type; the handler type is rebound.
    ///
    /// # Errors
    /// See [`EventName::new`].
    pub fn with_declaring_type(&self, declaring_type: Option<TypeName>) -> Result<EventName> {
        Self::new(
            declaring_type,
            &self.name,
            self.event_type.as_ref().map(TypeName::unbind),
        )
    }

    /// Returns a copy with a different handler type.
    ///
    /// # Errors
    /// See [`EventName::new`].
    pub fn with_event_type(&self, event_type: Option<TypeName>) -> Result<EventName> {
        Self::new(self.declaring_type.clone(), &self.name, event_type)
    }

    /// The event name.
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

    /// The handler type, if specified.
    #[must_use]
    pub fn event_type(&self) -> Option<&TypeName> {
        self.event_type.as_ref()
    }

    /// Always [`SymbolType::Event`].
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::Event
    }

    fn accessor(&self, prefix: &str) -> MethodNameBuilder {
        let builder = MethodNameBuilder::new(&format!("{}{}", prefix, self.name));
        match &self.declaring_type {
            Some(declaring_type) => builder.declaring_type(declaring_type.clone()),
            None => builder,
        }
    }

    fn subscription(&self, prefix: &str) -> Result<MethodName> {
        self.accessor(prefix)
            .parameter(ParameterName::new("value", self.event_type.clone())?)
            .return_type(TypeName::system("Void")?)
            .build()
    }

    /// `add_Name(handler)` returning `System.Void`.
    ///
    /// # Errors
    /// Propagates failures of building the method name.
    pub fn add_method(&self) -> Result<MethodName> {
        self.subscription("add_")
    }

    /// `remove_Name(handler)` returning `System.Void`.
    ///
    /// # Errors
    /// Propagates failures of building the method name.
    pub fn remove_method(&self) -> Result<MethodName> {
        self.subscription("remove_")
    }

    /// `raise_Name` with unspecified parameters.
    ///
    /// # Errors
    /// Propagates failures of building the method name.
    pub fn raise_method(&self) -> Result<MethodName> {
        self.accessor("raise_").build()
    }
}

impl PartialEq for EventName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for EventName {}

impl hash::Hash for EventName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl fmt::Debug for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventName").field(&self.full_name).finish()
    }
}

impl FromStr for EventName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let button = TypeName::create("Forms", "Button").unwrap();
        let handler = TypeName::create("System", "EventHandler").unwrap();
        let click = EventName::new(Some(button), "Click", Some(handler.clone())).unwrap();

        let add = click.add_method().unwrap();
        assert_eq!(add.full_name(), "Forms.Button.add_Click(System.EventHandler)");
        assert_eq!(add.return_type().unwrap().full_name(), "System.Void");

        let remove = click.remove_method().unwrap();
        assert_eq!(remove.parameters().unwrap()[0].parameter_type(), Some(&handler));

        let raise = click.raise_method().unwrap();
        assert_eq!(raise.full_name(), "Forms.Button.raise_Click");
        assert_eq!(raise.parameter_count(), None);
    }
}
