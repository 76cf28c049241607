//! Parameter names.

use std::{fmt, hash};

use crate::{
    names::{binding::BindContext, list::NameList, symbol::SymbolType},
    syntax::identifier::is_identifier,
    Result, TypeName,
};

/// Position of a return parameter.
pub const RETURN_PARAMETER_POSITION: i32 = -1;

/// A custom modifier attached to a parameter type, `modreq(T)` or `modopt(T)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterModifier {
    required: bool,
    modifier_type: TypeName,
}

impl ParameterModifier {
    /// A required modifier, `modreq(T)`.
    #[must_use]
    pub fn required(modifier_type: TypeName) -> Self {
        ParameterModifier {
            required: true,
            modifier_type,
        }
    }

    /// An optional modifier, `modopt(T)`.
    #[must_use]
    pub fn optional(modifier_type: TypeName) -> Self {
        ParameterModifier {
            required: false,
            modifier_type,
        }
    }

    /// Returns `true` for `modreq`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The modifier type.
    #[must_use]
    pub fn modifier_type(&self) -> &TypeName {
        &self.modifier_type
    }

    /// The keyword introducing this modifier.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        if self.required {
            "modreq"
        } else {
            "modopt"
        }
    }
}

impl fmt::Display for ParameterModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.keyword(), self.modifier_type)
    }
}

/// A method, property or return parameter.
///
/// Both the name and the type are optional: `CompareTo(,)` declares two parameters of
/// unspecified type. The position is assigned by the owning member, return parameters
/// sit at [`RETURN_PARAMETER_POSITION`].
///
/// The full name is the parameter type followed by its modifiers; parameter names take no
/// part in equality.
///
/// # Examples
///
/// ```rust
/// use dotnames::{members::ParameterName, TypeName};
///
/// let parameter = ParameterName::new("count", Some(TypeName::parse("System.Int32")?))?;
/// assert_eq!(parameter.full_name(), "System.Int32");
/// assert_eq!(parameter.name(), "count");
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ParameterName {
    name: String,
    parameter_type: Option<TypeName>,
    position: i32,
    modifiers: NameList<ParameterModifier>,
    full_name: String,
}

impl ParameterName {
    /// Creates a parameter with a name and an optional type.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a non-empty `name` is not an identifier.
    pub fn new(name: &str, parameter_type: Option<TypeName>) -> Result<Self> {
        if !name.is_empty() && !is_identifier(name) {
            return Err(malformed_error!("Invalid parameter name '{}'", name));
        }
        Ok(Self::assemble(
            name.to_string(),
            parameter_type,
            0,
            NameList::new(),
        ))
    }

    /// Creates an unnamed parameter of the given type.
    #[must_use]
    pub fn from_type(parameter_type: TypeName) -> Self {
        Self::assemble(String::new(), Some(parameter_type), 0, NameList::new())
    }

    /// Creates an unnamed parameter of unspecified type.
    #[must_use]
    pub fn unspecified() -> Self {
        Self::assemble(String::new(), None, 0, NameList::new())
    }

    fn assemble(
        name: String,
        parameter_type: Option<TypeName>,
        position: i32,
        modifiers: NameList<ParameterModifier>,
    ) -> Self {
        let mut full_name = parameter_type
            .as_ref()
            .map(|parameter_type| parameter_type.full_name().to_string())
            .unwrap_or_default();
        for modifier in modifiers.iter() {
            full_name.push(' ');
            full_name.push_str(&modifier.to_string());
        }

        ParameterName {
            name,
            parameter_type,
            position,
            modifiers,
            full_name,
        }
    }

    /// Returns a copy with a different name.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a non-empty `name` is not an identifier.
    pub fn with_name(&self, name: &str) -> Result<Self> {
        let renamed = Self::new(name, None)?;
        Ok(Self::assemble(
            renamed.name,
            self.parameter_type.clone(),
            self.position,
            self.modifiers.clone(),
        ))
    }

    /// Returns a copy with a different type.
    #[must_use]
    pub fn with_parameter_type(&self, parameter_type: Option<TypeName>) -> Self {
        Self::assemble(
            self.name.clone(),
            parameter_type,
            self.position,
            self.modifiers.clone(),
        )
    }

    /// Returns a copy with the given custom modifiers.
    #[must_use]
    pub fn with_modifiers(&self, modifiers: Vec<ParameterModifier>) -> Self {
        Self::assemble(
            self.name.clone(),
            self.parameter_type.clone(),
            self.position,
            modifiers.into(),
        )
    }

    pub(crate) fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub(crate) fn bind_with(&self, context: &BindContext<'_>) -> Result<Self> {
        let parameter_type = match &self.parameter_type {
            Some(parameter_type) => Some(parameter_type.bind_with(context)?),
            None => None,
        };
        let modifiers = self
            .modifiers
            .iter()
            .map(|modifier| {
                Ok(ParameterModifier {
                    required: modifier.required,
                    modifier_type: modifier.modifier_type.bind_with(context)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::assemble(
            self.name.clone(),
            parameter_type,
            self.position,
            modifiers.into(),
        ))
    }

    pub(crate) fn unbind(&self) -> Self {
        Self::assemble(
            self.name.clone(),
            self.parameter_type.as_ref().map(TypeName::unbind),
            self.position,
            self.modifiers
                .iter()
                .map(|modifier| ParameterModifier {
                    required: modifier.required,
                    modifier_type: modifier.modifier_type.unbind(),
                })
                .collect(),
        )
    }

    /// The parameter name; empty if unnamed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter type, if specified.
    #[must_use]
    pub fn parameter_type(&self) -> Option<&TypeName> {
        self.parameter_type.as_ref()
    }

    /// Zero based position, [`RETURN_PARAMETER_POSITION`] for return parameters.
    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// The custom modifiers in declaration order.
    #[must_use]
    pub fn modifiers(&self) -> &[ParameterModifier] {
        &self.modifiers
    }

    /// Returns `true` for the return parameter of a method.
    #[must_use]
    pub fn is_return_parameter(&self) -> bool {
        self.position == RETURN_PARAMETER_POSITION
    }

    /// The type text followed by the modifiers.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// [`SymbolType::ReturnParameter`] or [`SymbolType::Parameter`].
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        if self.is_return_parameter() {
            SymbolType::ReturnParameter
        } else {
            SymbolType::Parameter
        }
    }
}

impl PartialEq for ParameterName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for ParameterName {}

impl hash::Hash for ParameterName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// Stands in for a lone parameter of unspecified type, which would otherwise render like
/// an empty list.
pub(crate) const UNSPECIFIED_PARAMETER: &str = "?";

/// Appends `open`, the full names of `parameters` and `close` to `output`.
pub(crate) fn push_parameter_list(
    output: &mut String,
    parameters: &[ParameterName],
    open: char,
    close: char,
) {
    output.push(open);
    match parameters {
        [single] if single.full_name().is_empty() => output.push_str(UNSPECIFIED_PARAMETER),
        _ => {
            for (index, parameter) in parameters.iter().enumerate() {
                if index > 0 {
                    output.push(',');
                }
                output.push_str(parameter.full_name());
            }
        }
    }
    output.push(close);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int32() -> TypeName {
        TypeName::create("System", "Int32").unwrap()
    }

    #[test]
    fn test_full_name_ignores_name() {
        let named = ParameterName::new("x", Some(int32())).unwrap();
        let unnamed = ParameterName::from_type(int32());
        assert_eq!(named, unnamed);
        assert_eq!(named.full_name(), "System.Int32");
        assert_eq!(ParameterName::unspecified().full_name(), "");
    }

    #[test]
    fn test_modifiers() {
        let is_long = TypeName::create("System.Runtime.CompilerServices", "IsLong").unwrap();
        let parameter = ParameterName::from_type(int32())
            .with_modifiers(vec![ParameterModifier::optional(is_long)]);
        assert_eq!(
            parameter.full_name(),
            "System.Int32 modopt(System.Runtime.CompilerServices.IsLong)"
        );
        assert!(!parameter.modifiers()[0].is_required());
    }

    #[test]
    fn test_parameter_list_counts() {
        let mut none = String::new();
        push_parameter_list(&mut none, &[], '(', ')');
        assert_eq!(none, "()");

        let mut lone = String::new();
        push_parameter_list(&mut lone, &[ParameterName::unspecified()], '(', ')');
        assert_eq!(lone, "(?)");

        let mut pair = String::new();
        let parameters = [ParameterName::unspecified(), ParameterName::from_type(int32())];
        push_parameter_list(&mut pair, &parameters, '[', ']');
        assert_eq!(pair, "[,System.Int32]");
    }

    #[test]
    fn test_invalid_name() {
        assert!(ParameterName::new("a b", None).is_err());
        assert!(ParameterName::new("", None).is_ok());
    }

    #[test]
    fn test_symbol_type() {
        let parameter = ParameterName::from_type(int32());
        assert_eq!(parameter.symbol_type(), SymbolType::Parameter);
        let returned = parameter.with_position(RETURN_PARAMETER_POSITION);
        assert!(returned.is_return_parameter());
        assert_eq!(returned.symbol_type(), SymbolType::ReturnParameter);
    }
}
