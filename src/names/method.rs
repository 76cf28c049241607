//! Method names.
//!
//! A [`MethodName`] is either a method definition ([`DefaultMethodName`]) or a generic
//! method definition closed over type arguments ([`GenericInstanceMethodName`]).
//!
//! # Parameters and Binding
//!
//! The parameter list of a definition is optional: `ToString` names a method without
//! saying anything about its parameters, `ToString()` names the overload without any. On
//! construction every parameter and the return parameter are bound against the declaring
//! type's and the method's own generic parameters (see [`TypeName::clone_bind`]), so a
//! parameter typed ``` ``0 ``` refers to the very generic parameter object of the method.
//!
//! `with_*` operations unbind the signature first and bind it again on the new method,
//! which keeps positional references pointing at the rebuilt owner.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::{members::MethodNameBuilder, TypeName};
//!
//! let enumerable = TypeName::parse("System.Linq.Enumerable")?;
//! let method = MethodNameBuilder::new("Repeat``1")
//!     .declaring_type(enumerable)
//!     .parameter_types(vec![TypeName::parse("``0")?, TypeName::parse("System.Int32")?])
//!     .build()?;
//!
//! assert_eq!(method.full_name(), "System.Linq.Enumerable.Repeat``1(``0,System.Int32)");
//! let first = method.parameters().unwrap()[0].parameter_type().unwrap();
//! assert!(first.is_same(&method.generic_parameters()[0]));
//! # Ok::<(), dotnames::Error>(())
//! ```

use std::{
    fmt, hash,
    str::FromStr,
    sync::{Arc, Weak},
};

use crate::{
    names::{
        binding::BindContext,
        generic::{GenericOwner, GenericParameterDeclaration, GenericParameterName},
        list::NameList,
        parameter::{push_parameter_list, ParameterName, RETURN_PARAMETER_POSITION},
        symbol::SymbolType,
        types::TypeNameKind,
        validate_simple_name,
    },
    syntax::{self, identifier::split_mangle, ParseOptions},
    Error, Result, TypeName,
};

/// Name of instance constructors.
pub const CONSTRUCTOR_NAME: &str = ".ctor";
/// Name of type initializers.
pub const TYPE_INITIALIZER_NAME: &str = ".cctor";

/// Shared storage behind a [`MethodName`].
#[derive(Debug)]
pub(crate) struct MethodNameData {
    pub(crate) kind: MethodNameKind,
    full_name: String,
}

/// The variants a method name can take.
#[derive(Debug)]
pub enum MethodNameKind {
    /// A method definition
    Default(DefaultMethodName),
    /// A generic method closed over type arguments
    GenericInstance(GenericInstanceMethodName),
}

/// A method definition.
#[derive(Debug)]
pub struct DefaultMethodName {
    name: String,
    declaring_type: Option<TypeName>,
    generic_parameters: NameList<TypeName>,
    parameters: Option<NameList<ParameterName>>,
    return_parameter: Option<ParameterName>,
}

impl DefaultMethodName {
    /// The method name, without arity mangle.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The generic parameters the method declares.
    #[must_use]
    pub fn generic_parameters(&self) -> &[TypeName] {
        &self.generic_parameters
    }

    /// The parameters, or `None` if unspecified.
    #[must_use]
    pub fn parameters(&self) -> Option<&[ParameterName]> {
        self.parameters.as_deref()
    }
}

/// A generic method closed over type arguments.
#[derive(Debug)]
pub struct GenericInstanceMethodName {
    element: MethodName,
    arguments: NameList<TypeName>,
}

impl GenericInstanceMethodName {
    /// The generic method definition.
    #[must_use]
    pub fn element_method(&self) -> &MethodName {
        &self.element
    }

    /// The type arguments, one per generic parameter of the definition.
    #[must_use]
    pub fn arguments(&self) -> &[TypeName] {
        &self.arguments
    }
}

/// The components of a method definition, used to build and rebuild it.
#[derive(Clone, Default)]
pub(crate) struct MethodParts {
    pub(crate) name: String,
    pub(crate) declaring_type: Option<TypeName>,
    pub(crate) generic_parameters: Vec<GenericParameterDeclaration>,
    pub(crate) parameters: Option<Vec<ParameterName>>,
    pub(crate) return_parameter: Option<ParameterName>,
}

/// An immutable method name.
///
/// See the [module documentation](self) for details.
#[derive(Clone)]
pub struct MethodName(Arc<MethodNameData>);

impl MethodName {
    pub(crate) fn from_data(data: Arc<MethodNameData>) -> Self {
        MethodName(data)
    }

    pub(crate) fn new_default(parts: MethodParts) -> Result<MethodName> {
        validate_simple_name(&parts.name, "name", true)?;
        if let Some(declaring_type) = &parts.declaring_type {
            if !matches!(
                declaring_type.kind(),
                TypeNameKind::Named(_) | TypeNameKind::GenericInstance(_) | TypeNameKind::Array(_)
            ) {
                return Err(invalid_argument!(
                    "declaring_type",
                    "'{}' cannot declare methods",
                    declaring_type
                ));
            }
        }

        let mut failure = None;
        let data = Arc::new_cyclic(|owner: &Weak<MethodNameData>| {
            let generic_parameters: Vec<TypeName> = parts
                .generic_parameters
                .into_iter()
                .enumerate()
                .map(|(position, declaration)| {
                    TypeName::bound_generic_parameter(
                        GenericOwner::Method(owner.clone()),
                        position,
                        declaration,
                    )
                })
                .collect();

            let context = BindContext {
                type_parameters: parts.declaring_type.as_ref().map(TypeName::generic_parameters),
                method_parameters: Some(&generic_parameters),
            };

            let parameters = match parts.parameters {
                Some(parameters) => parameters
                    .iter()
                    .enumerate()
                    .map(|(position, parameter)| {
                        parameter
                            .bind_with(&context)
                            .map(|parameter| parameter.with_position(position as i32))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map_err(|error| failure = Some(error))
                    .ok()
                    .map(NameList::from),
                None => None,
            };
            let return_parameter = match parts.return_parameter {
                Some(parameter) => parameter
                    .bind_with(&context)
                    .map(|parameter| parameter.with_position(RETURN_PARAMETER_POSITION))
                    .map_err(|error| failure = Some(error))
                    .ok(),
                None => None,
            };

            let full_name = method_full_name(
                parts.declaring_type.as_ref(),
                &parts.name,
                &generic_suffix(generic_parameters.len()),
                parameters.as_deref(),
            );

            MethodNameData {
                kind: MethodNameKind::Default(DefaultMethodName {
                    name: parts.name,
                    declaring_type: parts.declaring_type,
                    generic_parameters: generic_parameters.into(),
                    parameters,
                    return_parameter,
                }),
                full_name,
            }
        });

        match failure {
            Some(error) => Err(error),
            None => Ok(MethodName(data)),
        }
    }

    /// The definition's components with its signature detached from this method.
    pub(crate) fn parts(&self) -> MethodParts {
        let definition = self.definition();
        MethodParts {
            name: definition.name.clone(),
            declaring_type: definition.declaring_type.clone(),
            generic_parameters: definition
                .generic_parameters
                .iter()
                .map(|parameter| {
                    parameter
                        .as_generic_parameter()
                        .and_then(GenericParameterName::declaration)
                        .cloned()
                        .unwrap_or_default()
                })
                .collect(),
            parameters: definition
                .parameters
                .as_ref()
                .map(|parameters| parameters.iter().map(ParameterName::unbind).collect()),
            return_parameter: definition.return_parameter.as_ref().map(ParameterName::unbind),
        }
    }

    fn definition(&self) -> &DefaultMethodName {
        match &self.0.kind {
            MethodNameKind::Default(definition) => definition,
            MethodNameKind::GenericInstance(instance) => instance.element.definition(),
        }
    }

    /// Starts building a method definition named `name`.
    #[must_use]
    pub fn builder(name: &str) -> MethodNameBuilder {
        MethodNameBuilder::new(name)
    }

    /// Parses a method signature such as `System.String.Concat(System.String,System.String)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] or
    /// [`crate::Error::InvalidArgument`] for text that is not a valid method signature.
    pub fn parse(text: &str) -> Result<MethodName> {
        Self::parse_with(text, ParseOptions::empty())
    }

    /// Parses a method signature with explicit options.
    ///
    /// # Errors
    /// See [`MethodName::parse`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<MethodName> {
        syntax::parse_method(text, options)
    }

    /// Parses a method signature, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<MethodName> {
        syntax::log_failure(text, "method", Self::parse(text))
    }

    /// Closes this generic method definition over `arguments`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if this is not a generic method
    /// definition, the argument count differs from the parameter count, or an argument is
    /// a by-reference type.
    pub fn make_generic_method(&self, arguments: Vec<TypeName>) -> Result<MethodName> {
        let count = match &self.0.kind {
            MethodNameKind::Default(definition) => definition.generic_parameters.len(),
            MethodNameKind::GenericInstance(_) => 0,
        };
        if count == 0 {
            return Err(invalid_argument!(
                "self",
                "'{}' is not a generic method definition",
                self
            ));
        }
        if arguments.len() != count {
            return Err(invalid_argument!(
                "arguments",
                "'{}' declares {} generic parameters, got {} arguments",
                self,
                count,
                arguments.len()
            ));
        }
        if let Some(argument) = arguments.iter().find(|argument| argument.is_by_reference()) {
            return Err(invalid_argument!(
                "arguments",
                "By-reference type '{}' cannot be a generic argument",
                argument
            ));
        }

        let definition = self.definition();
        let arguments: NameList<TypeName> = arguments.into();
        let full_name = method_full_name(
            definition.declaring_type.as_ref(),
            &definition.name,
            &format!(
                "<{}>",
                arguments
                    .iter()
                    .map(TypeName::full_name)
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            definition.parameters.as_deref(),
        );

        Ok(MethodName(Arc::new(MethodNameData {
            kind: MethodNameKind::GenericInstance(GenericInstanceMethodName {
                element: self.clone(),
                arguments,
            }),
            full_name,
        })))
    }

    /// Rebuilds the definition with `change` applied, re-instantiating a generic instance
    /// over the same arguments.
    fn rebuild<F>(&self, change: F) -> Result<MethodName>
    where
        F: FnOnce(&mut MethodParts),
    {
        let mut parts = self.parts();
        change(&mut parts);
        let definition = MethodName::new_default(parts)?;

        match &self.0.kind {
            MethodNameKind::Default(_) => Ok(definition),
            MethodNameKind::GenericInstance(instance) => {
                definition.make_generic_method(instance.arguments.to_vec())
            }
        }
    }

    fn instance_error(&self, operation: &str) -> Error {
        Error::NotSupported(format!(
            "cannot {} of generic method instance '{}'",
            operation, self
        ))
    }

    /// Returns a copy with a different name.
    ///
    /// A method mangle (```` Name``2 ````) that disagrees with the current arity replaces
    /// the generic parameters with that many anonymous ones.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSupported`] for generic method instances and
    /// [`crate::Error::Malformed`] for an invalid name.
    pub fn with_name(&self, name: &str) -> Result<MethodName> {
        if self.is_generic_instance() {
            return Err(self.instance_error("change the name"));
        }

        let (base, arity) = split_mangle(name.trim());
        self.rebuild(|parts| {
            if let Some(arity) = arity.filter(|arity| *arity != parts.generic_parameters.len()) {
                parts.generic_parameters = vec![GenericParameterDeclaration::anonymous(); arity];
            }
            parts.name = base.to_string();
        })
    }

    /// Returns a copy declared by a different type, or by none.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if the type cannot declare methods and
    /// [`crate::Error::CannotBind`] if the signature refers to type parameters the new
    /// declaring type does not have.
    pub fn with_declaring_type(&self, declaring_type: Option<TypeName>) -> Result<MethodName> {
        self.rebuild(|parts| parts.declaring_type = declaring_type)
    }

    /// Returns a copy with the given parameters, `None` leaving them unspecified.
    ///
    /// # Errors
    /// Returns [`crate::Error::CannotBind`] if a parameter refers to a generic parameter
    /// the method or its declaring type does not declare.
    pub fn with_parameters(&self, parameters: Option<Vec<ParameterName>>) -> Result<MethodName> {
        self.rebuild(|parts| parts.parameters = parameters)
    }

    /// Returns a copy whose parameters have the given types, keeping existing parameter
    /// names by position.
    ///
    /// # Errors
    /// See [`MethodName::with_parameters`].
    pub fn with_parameter_types(&self, parameter_types: Vec<TypeName>) -> Result<MethodName> {
        self.rebuild(|parts| {
            let existing = parts.parameters.take().unwrap_or_default();
            parts.parameters = Some(
                parameter_types
                    .into_iter()
                    .enumerate()
                    .map(|(index, parameter_type)| match existing.get(index) {
                        Some(parameter) => parameter.with_parameter_type(Some(parameter_type)),
                        None => ParameterName::from_type(parameter_type),
                    })
                    .collect(),
            );
        })
    }

    /// Returns a copy with a different return type, `None` leaving it unspecified.
    ///
    /// # Errors
    /// See [`MethodName::with_parameters`].
    pub fn with_return_type(&self, return_type: Option<TypeName>) -> Result<MethodName> {
        self.rebuild(|parts| {
            parts.return_parameter = match (return_type, parts.return_parameter.take()) {
                (Some(return_type), Some(existing)) => {
                    Some(existing.with_parameter_type(Some(return_type)))
                }
                (Some(return_type), None) => Some(ParameterName::from_type(return_type)),
                (None, _) => None,
            };
        })
    }

    /// Returns a copy declaring the given generic parameters.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSupported`] for generic method instances and
    /// [`crate::Error::CannotBind`] if the signature refers to a method parameter position
    /// the new declarations do not cover.
    pub fn with_generic_parameters(
        &self,
        generic_parameters: Vec<GenericParameterDeclaration>,
    ) -> Result<MethodName> {
        if self.is_generic_instance() {
            return Err(self.instance_error("change the generic parameters"));
        }
        self.rebuild(|parts| parts.generic_parameters = generic_parameters)
    }

    /// The variant of this method name.
    #[must_use]
    pub fn kind(&self) -> &MethodNameKind {
        &self.0.kind
    }

    /// The method name without arity mangle or arguments.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition().name
    }

    /// The fully qualified name, which also defines equality. Return types are not part
    /// of it.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.0.full_name
    }

    /// The type declaring this method.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeName> {
        self.definition().declaring_type.as_ref()
    }

    /// The generic parameters of the definition.
    #[must_use]
    pub fn generic_parameters(&self) -> &[TypeName] {
        &self.definition().generic_parameters
    }

    /// Number of generic parameters of the definition.
    #[must_use]
    pub fn generic_parameter_count(&self) -> usize {
        self.generic_parameters().len()
    }

    /// The type arguments of a generic method instance.
    #[must_use]
    pub fn generic_arguments(&self) -> &[TypeName] {
        match &self.0.kind {
            MethodNameKind::GenericInstance(instance) => &instance.arguments,
            MethodNameKind::Default(_) => &[],
        }
    }

    /// The parameters, or `None` if unspecified.
    #[must_use]
    pub fn parameters(&self) -> Option<&[ParameterName]> {
        self.definition().parameters.as_deref()
    }

    /// Number of parameters, or `None` if unspecified.
    #[must_use]
    pub fn parameter_count(&self) -> Option<usize> {
        self.parameters().map(<[ParameterName]>::len)
    }

    /// The return parameter, if the return type is specified.
    #[must_use]
    pub fn return_parameter(&self) -> Option<&ParameterName> {
        self.definition().return_parameter.as_ref()
    }

    /// The return type, if specified.
    #[must_use]
    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_parameter()
            .and_then(ParameterName::parameter_type)
    }

    /// The generic method definition of an instance.
    #[must_use]
    pub fn element_method(&self) -> Option<&MethodName> {
        match &self.0.kind {
            MethodNameKind::GenericInstance(instance) => Some(&instance.element),
            MethodNameKind::Default(_) => None,
        }
    }

    /// The definition itself, or the definition of an instance.
    #[must_use]
    pub fn as_definition(&self) -> &DefaultMethodName {
        self.definition()
    }

    /// Returns `true` for a definition declaring at least one generic parameter.
    #[must_use]
    pub fn is_generic_method_definition(&self) -> bool {
        matches!(&self.0.kind, MethodNameKind::Default(definition) if !definition.generic_parameters.is_empty())
    }

    /// Returns `true` for generic method instances.
    #[must_use]
    pub fn is_generic_instance(&self) -> bool {
        matches!(self.0.kind, MethodNameKind::GenericInstance(_))
    }

    /// Returns `true` for `.ctor` and `.cctor`.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        matches!(self.name(), CONSTRUCTOR_NAME | TYPE_INITIALIZER_NAME)
    }

    /// Always [`SymbolType::Method`].
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::Method
    }

    /// Returns `true` if both handles refer to the same object.
    #[must_use]
    pub fn is_same(&self, other: &MethodName) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn generic_suffix(count: usize) -> String {
    if count > 0 {
        format!("``{}", count)
    } else {
        String::new()
    }
}

fn method_full_name(
    declaring_type: Option<&TypeName>,
    name: &str,
    generic_suffix: &str,
    parameters: Option<&[ParameterName]>,
) -> String {
    let mut result = String::new();
    if let Some(declaring_type) = declaring_type {
        result.push_str(declaring_type.full_name());
        result.push('.');
    }
    result.push_str(name);
    result.push_str(generic_suffix);
    if let Some(parameters) = parameters {
        push_parameter_list(&mut result, parameters, '(', ')');
    }
    result
}

impl PartialEq for MethodName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for MethodName {}

impl hash::Hash for MethodName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name().hash(state);
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl fmt::Debug for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MethodName").field(&self.full_name()).finish()
    }
}

impl FromStr for MethodName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Fluent construction of method definitions.
///
/// # Examples
///
/// ```rust
/// use dotnames::{members::MethodNameBuilder, TypeName};
///
/// let method = MethodNameBuilder::new("ToString")
///     .declaring_type(TypeName::parse("System.Object")?)
///     .no_parameters()
///     .return_type(TypeName::parse("System.String")?)
///     .build()?;
///
/// assert_eq!(method.full_name(), "System.Object.ToString()");
/// assert_eq!(method.return_type().unwrap().name(), "String");
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone)]
pub struct MethodNameBuilder {
    parts: MethodParts,
}

impl MethodNameBuilder {
    /// Starts a method named `name`. A method mangle (```` Select``2 ````) declares that
    /// many anonymous generic parameters.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let (base, arity) = split_mangle(name.trim());
        MethodNameBuilder {
            parts: MethodParts {
                name: base.to_string(),
                generic_parameters: vec![
                    GenericParameterDeclaration::anonymous();
                    arity.unwrap_or(0)
                ],
                ..Default::default()
            },
        }
    }

    /// Sets the declaring type.
    #[must_use]
    pub fn declaring_type(mut self, declaring_type: TypeName) -> Self {
        self.parts.declaring_type = Some(declaring_type);
        self
    }

    /// Sets the generic parameter declarations, replacing those implied by a mangle.
    #[must_use]
    pub fn generic_parameters(mut self, generic_parameters: Vec<GenericParameterDeclaration>) -> Self {
        self.parts.generic_parameters = generic_parameters;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterName) -> Self {
        self.parts
            .parameters
            .get_or_insert_with(Vec::new)
            .push(parameter);
        self
    }

    /// Sets the parameters.
    #[must_use]
    pub fn parameters(mut self, parameters: Vec<ParameterName>) -> Self {
        self.parts.parameters = Some(parameters);
        self
    }

    /// Sets unnamed parameters of the given types.
    #[must_use]
    pub fn parameter_types(self, parameter_types: Vec<TypeName>) -> Self {
        self.parameters(
            parameter_types
                .into_iter()
                .map(ParameterName::from_type)
                .collect(),
        )
    }

    /// Declares an empty parameter list.
    #[must_use]
    pub fn no_parameters(self) -> Self {
        self.parameters(Vec::new())
    }

    /// Sets the return type.
    #[must_use]
    pub fn return_type(mut self, return_type: TypeName) -> Self {
        self.parts.return_parameter = Some(ParameterName::from_type(return_type));
        self
    }

    /// Sets the return parameter, including its modifiers.
    #[must_use]
    pub fn return_parameter(mut self, return_parameter: ParameterName) -> Self {
        self.parts.return_parameter = Some(return_parameter);
        self
    }

    /// Builds the method, binding its signature.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] or [`crate::Error::Malformed`] for an invalid name,
    /// [`crate::Error::InvalidArgument`] for a declaring type that cannot declare methods
    /// and [`crate::Error::CannotBind`] for placeholders outside the generic context.
    pub fn build(self) -> Result<MethodName> {
        MethodName::new_default(self.parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenericParameterKind;

    fn object() -> TypeName {
        TypeName::create("System", "Object").unwrap()
    }

    fn int32() -> TypeName {
        TypeName::create("System", "Int32").unwrap()
    }

    #[test]
    fn test_full_name() {
        let unspecified = MethodNameBuilder::new("ToString")
            .declaring_type(object())
            .build()
            .unwrap();
        assert_eq!(unspecified.full_name(), "System.Object.ToString");
        assert_eq!(unspecified.parameter_count(), None);

        let empty = MethodNameBuilder::new("ToString")
            .declaring_type(object())
            .no_parameters()
            .return_type(TypeName::create("System", "String").unwrap())
            .build()
            .unwrap();
        assert_eq!(empty.full_name(), "System.Object.ToString()");
        assert_eq!(empty.parameter_count(), Some(0));
        assert_ne!(empty, unspecified);
        assert_eq!(empty.return_parameter().unwrap().position(), -1);
    }

    #[test]
    fn test_lone_untyped_parameter_counts() {
        let one = MethodNameBuilder::new("M")
            .declaring_type(object())
            .parameter(ParameterName::new("x", None).unwrap())
            .build()
            .unwrap();
        let zero = MethodNameBuilder::new("M")
            .declaring_type(object())
            .no_parameters()
            .build()
            .unwrap();
        assert_eq!(one.full_name(), "System.Object.M(?)");
        assert_ne!(one, zero);
    }

    #[test]
    fn test_parameter_positions() {
        let method = MethodNameBuilder::new("Add")
            .parameter_types(vec![int32(), int32()])
            .build()
            .unwrap();
        let positions: Vec<i32> = method
            .parameters()
            .unwrap()
            .iter()
            .map(ParameterName::position)
            .collect();
        assert_eq!(positions, vec![0, 1]);
        assert_eq!(method.full_name(), "Add(System.Int32,System.Int32)");
    }

    #[test]
    fn test_generic_binding() {
        let method = MethodNameBuilder::new("Select``2")
            .parameter_types(vec![
                TypeName::unbound_generic_parameter(GenericParameterKind::Method, 1),
            ])
            .build()
            .unwrap();
        assert!(method.is_generic_method_definition());
        let parameter_type = method.parameters().unwrap()[0].parameter_type().unwrap();
        assert!(parameter_type.is_same(&method.generic_parameters()[1]));
        assert!(parameter_type
            .as_generic_parameter()
            .unwrap()
            .declaring_method()
            .unwrap()
            .is_same(&method));
        assert_eq!(method.full_name(), "Select``2(``1)");
    }

    #[test]
    fn test_generic_binding_out_of_range() {
        let result = MethodNameBuilder::new("M``1")
            .parameter_types(vec![TypeName::unbound_generic_parameter(
                GenericParameterKind::Method,
                2,
            )])
            .build();
        assert_eq!(
            result,
            Err(Error::CannotBind {
                position: 2,
                count: 1
            })
        );
    }

    #[test]
    fn test_make_generic_method() {
        let method = MethodNameBuilder::new("Cast``1")
            .declaring_type(TypeName::create("System.Linq", "Enumerable").unwrap())
            .parameter_types(vec![TypeName::create("System.Collections", "IEnumerable").unwrap()])
            .build()
            .unwrap();
        let instance = method.make_generic_method(vec![int32()]).unwrap();
        assert_eq!(
            instance.full_name(),
            "System.Linq.Enumerable.Cast<System.Int32>(System.Collections.IEnumerable)"
        );
        assert!(instance.element_method().unwrap().is_same(&method));
        assert_eq!(instance.name(), "Cast");
        assert!(instance.make_generic_method(vec![int32()]).is_err());
        assert!(method.make_generic_method(vec![]).is_err());
        assert!(matches!(
            instance.with_name("Other"),
            Err(Error::NotSupported(_))
        ));
    }

    #[test]
    fn test_with_operations_rebind() {
        let method = MethodNameBuilder::new("M``1")
            .parameter_types(vec![TypeName::unbound_generic_parameter(
                GenericParameterKind::Method,
                0,
            )])
            .build()
            .unwrap();

        let renamed = method.with_name("N").unwrap();
        assert_eq!(renamed.full_name(), "N``1(``0)");
        let parameter_type = renamed.parameters().unwrap()[0].parameter_type().unwrap();
        assert!(parameter_type.is_same(&renamed.generic_parameters()[0]));

        let moved = method.with_declaring_type(Some(object())).unwrap();
        assert_eq!(moved.full_name(), "System.Object.M``1(``0)");

        let retyped = method.with_parameter_types(vec![int32()]).unwrap();
        assert_eq!(retyped.full_name(), "M``1(System.Int32)");

        let returning = method.with_return_type(Some(int32())).unwrap();
        assert_eq!(returning.return_type(), Some(&int32()));
        assert_eq!(returning, method);

        assert!(method.with_generic_parameters(vec![]).is_err());
    }

    #[test]
    fn test_instance_with_declaring_type() {
        let method = MethodNameBuilder::new("M``1").build().unwrap();
        let instance = method.make_generic_method(vec![int32()]).unwrap();
        let moved = instance.with_declaring_type(Some(object())).unwrap();
        assert!(moved.is_generic_instance());
        assert_eq!(moved.full_name(), "System.Object.M<System.Int32>");
    }

    #[test]
    fn test_invalid_declaring_type() {
        let pointer = object().make_pointer_type().unwrap();
        assert!(MethodNameBuilder::new("M")
            .declaring_type(pointer)
            .build()
            .is_err());
        assert_eq!(MethodNameBuilder::new("").build(), Err(Error::Empty));
    }

    #[test]
    fn test_constructor() {
        let ctor = MethodNameBuilder::new(".ctor")
            .declaring_type(object())
            .no_parameters()
            .build()
            .unwrap();
        assert!(ctor.is_constructor());
        assert_eq!(ctor.full_name(), "System.Object..ctor()");
    }
}
