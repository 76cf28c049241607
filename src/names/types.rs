//! Type names.
//!
//! [`TypeName`] is a cheaply clonable handle on an immutable [`TypeNameKind`]:
//!
//! - [`DefaultTypeName`] - a named type, optionally nested and optionally generic
//! - [`ArrayTypeName`], pointers and by-reference types - specifications over an element type
//! - [`GenericInstanceTypeName`] - a generic type definition closed over arguments
//! - [`FunctionPointerTypeName`] - an unmanaged method signature used as a type
//! - [`GenericParameterName`] - a generic parameter, bound or positional
//!
//! # Generic Parameters of Nested Types
//!
//! A nested type sees every parameter of its enclosing types. Its parameter collection
//! starts with one redirected parameter per inherited parameter, followed by the parameters
//! it declares itself. The arity mangle in its name counts only its own parameters, so
//! `Dictionary`2+KeyCollection` has two parameters in total and no mangle on the nested
//! segment.
//!
//! # Identity and Equality
//!
//! Two type names are equal when their [`full_name`](TypeName::full_name) strings are
//! equal. [`TypeName::is_same`] tests reference identity, which is what binding preserves:
//! a parameter type bound to a method's generic parameter is that very parameter object.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::TypeName;
//!
//! let list = TypeName::create("System.Collections.Generic", "List`1")?;
//! let int32 = TypeName::create("System", "Int32")?;
//! let closed = list.make_generic_type(vec![int32])?.make_array_type(1)?;
//!
//! assert_eq!(closed.full_name(), "System.Collections.Generic.List<System.Int32>[]");
//! assert_eq!(closed.root_element_type().name(), "List`1");
//! # Ok::<(), dotnames::Error>(())
//! ```

use std::{
    fmt, hash,
    str::FromStr,
    sync::{Arc, Weak},
};

use crate::{
    names::{
        array::ArrayDimension,
        assembly::AssemblyName,
        generic::{
            BoundGenericParameterName, GenericOwner, GenericParameterDeclaration,
            GenericParameterKind, GenericParameterName, RedirectedGenericParameterName,
            UnboundGenericParameterName,
        },
        list::NameList,
        namespace::{NamespaceName, GLOBAL_NAMESPACE},
        symbol::SymbolType,
        validate_simple_name,
    },
    syntax::{self, identifier::split_mangle, ParseOptions},
    Error, Result,
};

/// Maximum number of dimensions of an array type.
pub const MAX_ARRAY_RANK: usize = 32;

/// Shared storage behind a [`TypeName`].
#[derive(Debug)]
pub(crate) struct TypeNameData {
    pub(crate) kind: TypeNameKind,
    name: String,
    full_name: String,
}

/// The variants a type name can take.
#[derive(Debug)]
pub enum TypeNameKind {
    /// A named type
    Named(DefaultTypeName),
    /// An array of an element type
    Array(ArrayTypeName),
    /// An unmanaged pointer to an element type
    Pointer(TypeName),
    /// A managed reference to an element type
    ByReference(TypeName),
    /// A generic type definition closed over arguments
    GenericInstance(GenericInstanceTypeName),
    /// A method signature used as a type
    FunctionPointer(FunctionPointerTypeName),
    /// A generic parameter
    GenericParameter(GenericParameterName),
}

/// A named type: namespace, declaring type, assembly and generic parameters.
#[derive(Debug)]
pub struct DefaultTypeName {
    simple_name: String,
    namespace: NamespaceName,
    declaring_type: Option<TypeName>,
    assembly: Option<AssemblyName>,
    generic_parameters: NameList<TypeName>,
    inherited_count: usize,
}

impl DefaultTypeName {
    /// The name without arity mangle.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The enclosing type of a nested type.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeName> {
        self.declaring_type.as_ref()
    }

    /// All generic parameters in scope: inherited ones first, then the type's own.
    #[must_use]
    pub fn generic_parameters(&self) -> &[TypeName] {
        &self.generic_parameters
    }

    /// The generic parameters this type declares itself.
    #[must_use]
    pub fn own_generic_parameters(&self) -> &[TypeName] {
        &self.generic_parameters[self.inherited_count..]
    }

    /// Number of generic parameters this type declares itself.
    #[must_use]
    pub fn own_generic_parameter_count(&self) -> usize {
        self.generic_parameters.len() - self.inherited_count
    }

    /// Returns `true` if this type could be a reference to a generic parameter by name:
    /// no namespace, no declaring type, no assembly and no generic parameters.
    #[must_use]
    pub fn is_simple_reference(&self) -> bool {
        self.namespace.is_global()
            && self.declaring_type.is_none()
            && self.assembly.is_none()
            && self.generic_parameters.is_empty()
    }

    pub(crate) fn own_declarations(&self) -> Vec<GenericParameterDeclaration> {
        self.own_generic_parameters()
            .iter()
            .map(|parameter| {
                parameter
                    .as_generic_parameter()
                    .and_then(GenericParameterName::declaration)
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// An array type.
#[derive(Debug)]
pub struct ArrayTypeName {
    element: TypeName,
    dimensions: NameList<ArrayDimension>,
}

impl ArrayTypeName {
    /// The element type.
    #[must_use]
    pub fn element_type(&self) -> &TypeName {
        &self.element
    }

    /// The dimensions, one per rank.
    #[must_use]
    pub fn dimensions(&self) -> &[ArrayDimension] {
        &self.dimensions
    }

    /// Number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }
}

/// A generic type definition closed over type arguments.
#[derive(Debug)]
pub struct GenericInstanceTypeName {
    element: TypeName,
    arguments: NameList<TypeName>,
}

impl GenericInstanceTypeName {
    /// The generic type definition.
    #[must_use]
    pub fn element_type(&self) -> &TypeName {
        &self.element
    }

    /// The type arguments, one per generic parameter of the definition.
    #[must_use]
    pub fn arguments(&self) -> &[TypeName] {
        &self.arguments
    }
}

/// A function pointer type.
#[derive(Debug)]
pub struct FunctionPointerTypeName {
    return_type: TypeName,
    parameter_types: NameList<TypeName>,
}

impl FunctionPointerTypeName {
    /// The return type.
    #[must_use]
    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    /// The parameter types.
    #[must_use]
    pub fn parameter_types(&self) -> &[TypeName] {
        &self.parameter_types
    }
}

/// The components of a named type, used to rebuild it with changes.
struct NamedParts {
    simple_name: String,
    namespace: NamespaceName,
    declaring_type: Option<TypeName>,
    assembly: Option<AssemblyName>,
    own: Vec<GenericParameterDeclaration>,
}

/// An immutable type name.
///
/// See the [module documentation](self) for the variants and their conventions.
#[derive(Clone)]
pub struct TypeName(Arc<TypeNameData>);

impl TypeName {
    pub(crate) fn from_data(data: Arc<TypeNameData>) -> Self {
        TypeName(data)
    }

    fn from_kind(kind: TypeNameKind) -> Self {
        let (name, full_name) = match &kind {
            TypeNameKind::Named(_) => unreachable!("named types are built by new_named"),
            TypeNameKind::Array(array) => {
                let suffix = array_suffix(&array.dimensions);
                (
                    format!("{}{}", array.element.name(), suffix),
                    format!("{}{}", array.element.full_name(), suffix),
                )
            }
            TypeNameKind::Pointer(element) => (
                format!("{}*", element.name()),
                format!("{}*", element.full_name()),
            ),
            TypeNameKind::ByReference(element) => (
                format!("{}&", element.name()),
                format!("{}&", element.full_name()),
            ),
            TypeNameKind::GenericInstance(instance) => (
                instance.element.name().to_string(),
                generic_instance_full_name(&instance.element, &instance.arguments),
            ),
            TypeNameKind::FunctionPointer(pointer) => {
                let full_name = format!(
                    "method {} *({})",
                    pointer.return_type.full_name(),
                    join_full_names(&pointer.parameter_types)
                );
                (full_name.clone(), full_name)
            }
            TypeNameKind::GenericParameter(parameter) => (
                parameter
                    .declared_name()
                    .map_or_else(|| parameter.positional_name(), str::to_string),
                parameter.positional_name(),
            ),
        };

        TypeName(Arc::new(TypeNameData {
            kind,
            name,
            full_name,
        }))
    }

    fn new_named(parts: NamedParts) -> Result<TypeName> {
        validate_simple_name(&parts.simple_name, "name", false)?;

        let inherited: Vec<TypeName> = match &parts.declaring_type {
            Some(declaring_type) if declaring_type.as_named().is_none() => {
                return Err(invalid_argument!(
                    "declaring_type",
                    "'{}' cannot declare nested types",
                    declaring_type
                ))
            }
            Some(declaring_type) => declaring_type.generic_parameters().to_vec(),
            None => Vec::new(),
        };

        let own_count = parts.own.len();
        let name = if own_count > 0 {
            format!("{}`{}", parts.simple_name, own_count)
        } else {
            parts.simple_name.clone()
        };
        let full_name = match &parts.declaring_type {
            Some(declaring_type) => format!("{}+{}", declaring_type.full_name(), name),
            None if parts.namespace.is_global() => name.clone(),
            None => format!("{}.{}", parts.namespace, name),
        };

        let (namespace, assembly) = if parts.declaring_type.is_some() {
            (NamespaceName::global(), None)
        } else {
            (parts.namespace, parts.assembly)
        };

        let data = Arc::new_cyclic(|owner: &Weak<TypeNameData>| {
            let mut generic_parameters = Vec::with_capacity(inherited.len() + own_count);
            for (position, parameter) in inherited.iter().enumerate() {
                let declaring_parameter = parameter
                    .as_generic_parameter()
                    .and_then(GenericParameterName::declaring_generic_parameter)
                    .unwrap_or(parameter)
                    .clone();
                generic_parameters.push(TypeName::from_kind(TypeNameKind::GenericParameter(
                    GenericParameterName::Redirected(RedirectedGenericParameterName {
                        owner: owner.clone(),
                        position,
                        declaring_parameter,
                    }),
                )));
            }
            for (index, declaration) in parts.own.into_iter().enumerate() {
                generic_parameters.push(TypeName::bound_generic_parameter(
                    GenericOwner::Type(owner.clone()),
                    inherited.len() + index,
                    declaration,
                ));
            }

            TypeNameData {
                kind: TypeNameKind::Named(DefaultTypeName {
                    simple_name: parts.simple_name,
                    namespace,
                    declaring_type: parts.declaring_type,
                    assembly,
                    generic_parameters: generic_parameters.into(),
                    inherited_count: inherited.len(),
                }),
                name,
                full_name,
            }
        });

        Ok(TypeName(data))
    }

    fn named_parts(&self) -> Option<NamedParts> {
        let named = self.as_named()?;
        Some(NamedParts {
            simple_name: named.simple_name.clone(),
            namespace: named.namespace.clone(),
            declaring_type: named.declaring_type.clone(),
            assembly: named.assembly.clone(),
            own: named.own_declarations(),
        })
    }

    fn specification_error(&self, operation: &str) -> Error {
        Error::NotSupported(format!(
            "cannot {} of type specification '{}'",
            operation, self
        ))
    }

    /// Creates a top-level named type.
    ///
    /// The name may carry an arity mangle (`` List`1 ``), which declares that many
    /// anonymous generic parameters.
    ///
    /// # Arguments
    ///
    /// * `namespace` - Dotted namespace, empty for the global namespace
    /// * `name` - Type name, optionally with arity mangle
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for an invalid namespace or name and
    /// [`crate::Error::Empty`] for an empty name.
    pub fn create(namespace: &str, name: &str) -> Result<TypeName> {
        let (simple_name, arity) = split_mangle(name.trim());
        Self::new_named(NamedParts {
            simple_name: simple_name.to_string(),
            namespace: NamespaceName::parse(namespace)?,
            declaring_type: None,
            assembly: None,
            own: vec![GenericParameterDeclaration::anonymous(); arity.unwrap_or(0)],
        })
    }

    /// Creates a top-level generic type definition with the given parameter declarations.
    ///
    /// An arity mangle in `name` is ignored in favour of `parameters`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for an invalid namespace or name and
    /// [`crate::Error::Empty`] for an empty name.
    pub fn create_generic(
        namespace: &str,
        name: &str,
        parameters: Vec<GenericParameterDeclaration>,
    ) -> Result<TypeName> {
        let (simple_name, arity) = split_mangle(name.trim());
        if arity.is_some_and(|arity| arity != parameters.len()) {
            log::trace!(
                "'{}' declares {} parameters, mangle ignored",
                name,
                parameters.len()
            );
        }
        Self::new_named(NamedParts {
            simple_name: simple_name.to_string(),
            namespace: NamespaceName::parse(namespace)?,
            declaring_type: None,
            assembly: None,
            own: parameters,
        })
    }

    /// Creates a positional generic parameter placeholder.
    #[must_use]
    pub fn unbound_generic_parameter(kind: GenericParameterKind, position: usize) -> TypeName {
        TypeName::from_kind(TypeNameKind::GenericParameter(
            GenericParameterName::Unbound(UnboundGenericParameterName { kind, position }),
        ))
    }

    /// Creates a function pointer type.
    #[must_use]
    pub fn function_pointer(return_type: TypeName, parameter_types: Vec<TypeName>) -> TypeName {
        TypeName::from_kind(TypeNameKind::FunctionPointer(FunctionPointerTypeName {
            return_type,
            parameter_types: parameter_types.into(),
        }))
    }

    pub(crate) fn bound_generic_parameter(
        owner: GenericOwner,
        position: usize,
        declaration: GenericParameterDeclaration,
    ) -> TypeName {
        TypeName::from_kind(TypeNameKind::GenericParameter(GenericParameterName::Bound(
            BoundGenericParameterName {
                owner,
                position,
                declaration,
            },
        )))
    }

    pub(crate) fn system(name: &str) -> Result<TypeName> {
        TypeName::create("System", name)
    }

    /// A top-level named type with its namespace and assembly already resolved.
    pub(crate) fn new_top_level(
        simple_name: &str,
        namespace: NamespaceName,
        assembly: Option<AssemblyName>,
        parameters: Vec<GenericParameterDeclaration>,
    ) -> Result<TypeName> {
        Self::new_named(NamedParts {
            simple_name: simple_name.to_string(),
            namespace,
            declaring_type: None,
            assembly,
            own: parameters,
        })
    }

    /// Creates a type nested in this one. The name may carry an arity mangle.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if this is not a named type and
    /// [`crate::Error::Malformed`] for an invalid name.
    pub fn nested_type(&self, name: &str) -> Result<TypeName> {
        let (simple_name, arity) = split_mangle(name.trim());
        self.nested_generic_type(
            simple_name,
            vec![GenericParameterDeclaration::anonymous(); arity.unwrap_or(0)],
        )
    }

    /// Creates a generic type nested in this one with the given own parameter declarations.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if this is not a named type and
    /// [`crate::Error::Malformed`] for an invalid name.
    pub fn nested_generic_type(
        &self,
        name: &str,
        parameters: Vec<GenericParameterDeclaration>,
    ) -> Result<TypeName> {
        Self::new_named(NamedParts {
            simple_name: split_mangle(name.trim()).0.to_string(),
            namespace: NamespaceName::global(),
            declaring_type: Some(self.clone()),
            assembly: None,
            own: parameters,
        })
    }

    /// Creates a single dimensional or multi dimensional array of this type with unsized
    /// dimensions.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `rank` is zero or above
    /// [`MAX_ARRAY_RANK`], or this type is a by-reference type.
    pub fn make_array_type(&self, rank: usize) -> Result<TypeName> {
        self.make_array_type_with(vec![ArrayDimension::UNSIZED; rank])
    }

    /// Creates an array of this type with the given dimensions.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if there are no dimensions or more than
    /// [`MAX_ARRAY_RANK`], or this type is a by-reference type.
    pub fn make_array_type_with(&self, dimensions: Vec<ArrayDimension>) -> Result<TypeName> {
        if dimensions.is_empty() || dimensions.len() > MAX_ARRAY_RANK {
            return Err(invalid_argument!(
                "rank",
                "Array rank must be between 1 and {}, got {}",
                MAX_ARRAY_RANK,
                dimensions.len()
            ));
        }
        if self.is_by_reference() {
            return Err(invalid_argument!(
                "element",
                "Cannot create an array of by-reference type '{}'",
                self
            ));
        }

        Ok(TypeName::from_kind(TypeNameKind::Array(ArrayTypeName {
            element: self.clone(),
            dimensions: dimensions.into(),
        })))
    }

    /// Creates a pointer to this type.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if this is a by-reference type.
    pub fn make_pointer_type(&self) -> Result<TypeName> {
        if self.is_by_reference() {
            return Err(invalid_argument!(
                "element",
                "Cannot create a pointer to by-reference type '{}'",
                self
            ));
        }
        Ok(TypeName::from_kind(TypeNameKind::Pointer(self.clone())))
    }

    /// Creates a by-reference type of this type.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if this already is a by-reference type.
    pub fn make_by_reference_type(&self) -> Result<TypeName> {
        if self.is_by_reference() {
            return Err(invalid_argument!(
                "element",
                "'{}' already is a by-reference type",
                self
            ));
        }
        Ok(TypeName::from_kind(TypeNameKind::ByReference(self.clone())))
    }

    /// Closes this generic type definition over `arguments`.
    ///
    /// One argument is needed per generic parameter in scope, including the parameters
    /// inherited from enclosing types.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if this is not a generic type definition,
    /// the argument count does not match, or an argument is a by-reference type.
    pub fn make_generic_type(&self, arguments: Vec<TypeName>) -> Result<TypeName> {
        let count = self.as_named().map_or(0, |named| named.generic_parameters.len());
        if count == 0 {
            return Err(invalid_argument!(
                "self",
                "'{}' is not a generic type definition",
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

        Ok(TypeName::from_kind(TypeNameKind::GenericInstance(
            GenericInstanceTypeName {
                element: self.clone(),
                arguments: arguments.into(),
            },
        )))
    }

    /// Returns a copy with a different name.
    ///
    /// A mangle in `name` that disagrees with the current arity replaces the type's own
    /// generic parameters with that many anonymous ones.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSupported`] for anything but a named type and
    /// [`crate::Error::Malformed`] for an invalid name.
    pub fn with_name(&self, name: &str) -> Result<TypeName> {
        let Some(mut parts) = self.named_parts() else {
            return Err(self.specification_error("change the name"));
        };

        let (simple_name, arity) = split_mangle(name.trim());
        if let Some(arity) = arity.filter(|arity| *arity != parts.own.len()) {
            parts.own = vec![GenericParameterDeclaration::anonymous(); arity];
        }
        parts.simple_name = simple_name.to_string();
        Self::new_named(parts)
    }

    /// Returns a copy in a different namespace. For nested types the namespace of the
    /// outermost declaring type changes.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSupported`] for anything but a named type.
    pub fn with_namespace(&self, namespace: &NamespaceName) -> Result<TypeName> {
        let Some(mut parts) = self.named_parts() else {
            return Err(self.specification_error("change the namespace"));
        };

        match parts.declaring_type.take() {
            Some(declaring_type) => {
                parts.declaring_type = Some(declaring_type.with_namespace(namespace)?);
            }
            None => parts.namespace = namespace.clone(),
        }
        Self::new_named(parts)
    }

    /// Returns a copy nested in `declaring_type`, or a top-level copy for `None`.
    ///
    /// Moving a nested type to the top level keeps its effective namespace and assembly.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSupported`] for anything but a named type and
    /// [`crate::Error::InvalidArgument`] if `declaring_type` is not a named type.
    pub fn with_declaring_type(&self, declaring_type: Option<&TypeName>) -> Result<TypeName> {
        let Some(mut parts) = self.named_parts() else {
            return Err(self.specification_error("change the declaring type"));
        };

        match declaring_type {
            Some(declaring_type) => parts.declaring_type = Some(declaring_type.clone()),
            None => {
                parts.namespace = self.namespace().clone();
                parts.assembly = self.assembly().cloned();
                parts.declaring_type = None;
            }
        }
        Self::new_named(parts)
    }

    /// Returns a copy whose root type belongs to `assembly`.
    ///
    /// The assembly is stored on the outermost named type; specifications are rebuilt
    /// around an element carrying the new assembly.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSupported`] for generic parameters and function pointers.
    pub fn with_assembly(&self, assembly: Option<AssemblyName>) -> Result<TypeName> {
        match &self.0.kind {
            TypeNameKind::Named(named) => {
                let Some(mut parts) = self.named_parts() else {
                    return Err(self.specification_error("change the assembly"));
                };
                match &named.declaring_type {
                    Some(declaring_type) => {
                        parts.declaring_type = Some(declaring_type.with_assembly(assembly)?);
                    }
                    None => parts.assembly = assembly,
                }
                Self::new_named(parts)
            }
            TypeNameKind::Array(array) => Ok(TypeName::from_kind(TypeNameKind::Array(
                ArrayTypeName {
                    element: array.element.with_assembly(assembly)?,
                    dimensions: array.dimensions.clone(),
                },
            ))),
            TypeNameKind::Pointer(element) => Ok(TypeName::from_kind(TypeNameKind::Pointer(
                element.with_assembly(assembly)?,
            ))),
            TypeNameKind::ByReference(element) => Ok(TypeName::from_kind(
                TypeNameKind::ByReference(element.with_assembly(assembly)?),
            )),
            TypeNameKind::GenericInstance(instance) => Ok(TypeName::from_kind(
                TypeNameKind::GenericInstance(GenericInstanceTypeName {
                    element: instance.element.with_assembly(assembly)?,
                    arguments: instance.arguments.clone(),
                }),
            )),
            TypeNameKind::FunctionPointer(_) | TypeNameKind::GenericParameter(_) => {
                Err(Error::NotSupported(format!(
                    "'{}' cannot be qualified by an assembly",
                    self
                )))
            }
        }
    }

    pub(crate) fn rebuild_array(&self, element: TypeName) -> TypeName {
        match &self.0.kind {
            TypeNameKind::Array(array) => TypeName::from_kind(TypeNameKind::Array(ArrayTypeName {
                element,
                dimensions: array.dimensions.clone(),
            })),
            _ => self.clone(),
        }
    }

    pub(crate) fn rebuild_pointer(element: TypeName) -> TypeName {
        TypeName::from_kind(TypeNameKind::Pointer(element))
    }

    pub(crate) fn rebuild_by_reference(element: TypeName) -> TypeName {
        TypeName::from_kind(TypeNameKind::ByReference(element))
    }

    pub(crate) fn rebuild_generic_instance(element: TypeName, arguments: NameList<TypeName>) -> TypeName {
        TypeName::from_kind(TypeNameKind::GenericInstance(GenericInstanceTypeName {
            element,
            arguments,
        }))
    }

    pub(crate) fn rebuild_function_pointer(
        return_type: TypeName,
        parameter_types: NameList<TypeName>,
    ) -> TypeName {
        TypeName::from_kind(TypeNameKind::FunctionPointer(FunctionPointerTypeName {
            return_type,
            parameter_types,
        }))
    }

    /// Parses a type signature.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text, [`crate::Error::Malformed`] for text
    /// that is not a valid type signature and [`crate::Error::RecursionLimit`] for nesting
    /// deeper than the parser accepts.
    pub fn parse(text: &str) -> Result<TypeName> {
        Self::parse_with(text, ParseOptions::empty())
    }

    /// Parses a type signature with explicit options.
    ///
    /// # Errors
    /// See [`TypeName::parse`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<TypeName> {
        syntax::parse_type(text, options)
    }

    /// Parses a type signature, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<TypeName> {
        syntax::log_failure(text, "type", Self::parse(text))
    }

    /// The variant of this type name.
    #[must_use]
    pub fn kind(&self) -> &TypeNameKind {
        &self.0.kind
    }

    /// The short name: `List`1`, `Int32[]`, `T`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The fully qualified name, which also defines equality.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.0.full_name
    }

    /// The namespace of the outermost named type; the global namespace for generic
    /// parameters and function pointers.
    #[must_use]
    pub fn namespace(&self) -> &NamespaceName {
        match &self.0.kind {
            TypeNameKind::Named(named) => match &named.declaring_type {
                Some(declaring_type) => declaring_type.namespace(),
                None => &named.namespace,
            },
            TypeNameKind::Array(ArrayTypeName { element, .. })
            | TypeNameKind::Pointer(element)
            | TypeNameKind::ByReference(element)
            | TypeNameKind::GenericInstance(GenericInstanceTypeName { element, .. }) => {
                element.namespace()
            }
            TypeNameKind::FunctionPointer(_) | TypeNameKind::GenericParameter(_) => {
                &GLOBAL_NAMESPACE
            }
        }
    }

    /// The enclosing type of a nested type, looking through specifications.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&TypeName> {
        match &self.0.kind {
            TypeNameKind::Named(named) => named.declaring_type.as_ref(),
            TypeNameKind::Array(ArrayTypeName { element, .. })
            | TypeNameKind::Pointer(element)
            | TypeNameKind::ByReference(element)
            | TypeNameKind::GenericInstance(GenericInstanceTypeName { element, .. }) => {
                element.declaring_type()
            }
            TypeNameKind::FunctionPointer(_) | TypeNameKind::GenericParameter(_) => None,
        }
    }

    /// The assembly of the outermost named type, looking through specifications.
    #[must_use]
    pub fn assembly(&self) -> Option<&AssemblyName> {
        match &self.0.kind {
            TypeNameKind::Named(named) => match &named.declaring_type {
                Some(declaring_type) => declaring_type.assembly(),
                None => named.assembly.as_ref(),
            },
            TypeNameKind::Array(ArrayTypeName { element, .. })
            | TypeNameKind::Pointer(element)
            | TypeNameKind::ByReference(element)
            | TypeNameKind::GenericInstance(GenericInstanceTypeName { element, .. }) => {
                element.assembly()
            }
            TypeNameKind::FunctionPointer(_) | TypeNameKind::GenericParameter(_) => None,
        }
    }

    /// The generic parameters in scope of a named type or of a generic instance's definition.
    #[must_use]
    pub fn generic_parameters(&self) -> &[TypeName] {
        match &self.0.kind {
            TypeNameKind::Named(named) => &named.generic_parameters,
            TypeNameKind::GenericInstance(instance) => instance.element.generic_parameters(),
            _ => &[],
        }
    }

    /// Number of generic parameters in scope, including inherited ones.
    #[must_use]
    pub fn generic_parameter_count(&self) -> usize {
        self.generic_parameters().len()
    }

    /// The type arguments of a generic instance.
    #[must_use]
    pub fn generic_arguments(&self) -> &[TypeName] {
        match &self.0.kind {
            TypeNameKind::GenericInstance(instance) => &instance.arguments,
            _ => &[],
        }
    }

    /// The element of a specification.
    #[must_use]
    pub fn element_type(&self) -> Option<&TypeName> {
        match &self.0.kind {
            TypeNameKind::Array(ArrayTypeName { element, .. })
            | TypeNameKind::Pointer(element)
            | TypeNameKind::ByReference(element)
            | TypeNameKind::GenericInstance(GenericInstanceTypeName { element, .. }) => {
                Some(element)
            }
            _ => None,
        }
    }

    /// The innermost element, following specifications until a type that is none.
    #[must_use]
    pub fn root_element_type(&self) -> &TypeName {
        let mut current = self;
        while let Some(element) = current.element_type() {
            current = element;
        }
        current
    }

    /// The dimensions of an array type; empty otherwise.
    #[must_use]
    pub fn array_dimensions(&self) -> &[ArrayDimension] {
        match &self.0.kind {
            TypeNameKind::Array(array) => &array.dimensions,
            _ => &[],
        }
    }

    /// The rank of an array type; zero otherwise.
    #[must_use]
    pub fn array_rank(&self) -> usize {
        self.array_dimensions().len()
    }

    /// The named type, if this is one.
    #[must_use]
    pub fn as_named(&self) -> Option<&DefaultTypeName> {
        match &self.0.kind {
            TypeNameKind::Named(named) => Some(named),
            _ => None,
        }
    }

    /// The generic parameter, if this is one.
    #[must_use]
    pub fn as_generic_parameter(&self) -> Option<&GenericParameterName> {
        match &self.0.kind {
            TypeNameKind::GenericParameter(parameter) => Some(parameter),
            _ => None,
        }
    }

    /// The function pointer, if this is one.
    #[must_use]
    pub fn as_function_pointer(&self) -> Option<&FunctionPointerTypeName> {
        match &self.0.kind {
            TypeNameKind::FunctionPointer(pointer) => Some(pointer),
            _ => None,
        }
    }

    /// The generic parameters a named type declares itself.
    #[must_use]
    pub fn own_generic_parameter_count(&self) -> usize {
        self.as_named()
            .map_or(0, DefaultTypeName::own_generic_parameter_count)
    }

    /// Returns `true` for a named type inside another type.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.as_named()
            .is_some_and(|named| named.declaring_type.is_some())
    }

    /// Returns `true` for array types.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.0.kind, TypeNameKind::Array(_))
    }

    /// Returns `true` for pointer types.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(self.0.kind, TypeNameKind::Pointer(_))
    }

    /// Returns `true` for by-reference types.
    #[must_use]
    pub fn is_by_reference(&self) -> bool {
        matches!(self.0.kind, TypeNameKind::ByReference(_))
    }

    /// Returns `true` for generic instances.
    #[must_use]
    pub fn is_generic_instance(&self) -> bool {
        matches!(self.0.kind, TypeNameKind::GenericInstance(_))
    }

    /// Returns `true` for named types with at least one generic parameter in scope.
    #[must_use]
    pub fn is_generic_type_definition(&self) -> bool {
        self.as_named()
            .is_some_and(|named| !named.generic_parameters.is_empty())
    }

    /// Returns `true` for generic parameters.
    #[must_use]
    pub fn is_generic_parameter(&self) -> bool {
        matches!(self.0.kind, TypeNameKind::GenericParameter(_))
    }

    /// Returns `true` for function pointers.
    #[must_use]
    pub fn is_function_pointer(&self) -> bool {
        matches!(self.0.kind, TypeNameKind::FunctionPointer(_))
    }

    /// Returns `true` for types derived from an element type.
    #[must_use]
    pub fn is_type_specification(&self) -> bool {
        self.element_type().is_some() || self.is_function_pointer()
    }

    /// Returns `true` if both handles refer to the same object.
    #[must_use]
    pub fn is_same(&self, other: &TypeName) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// [`SymbolType::GenericParameter`] for generic parameters, [`SymbolType::Type`] otherwise.
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        if self.is_generic_parameter() {
            SymbolType::GenericParameter
        } else {
            SymbolType::Type
        }
    }

    /// The named types from the outermost declaring type down to this one.
    pub(crate) fn definition_chain(&self) -> Vec<&TypeName> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(declaring_type) = current
            .as_named()
            .and_then(|named| named.declaring_type.as_ref())
        {
            chain.push(declaring_type);
            current = declaring_type;
        }
        chain.reverse();
        chain
    }
}

fn array_suffix(dimensions: &[ArrayDimension]) -> String {
    let dimensions: Vec<String> = dimensions.iter().map(ToString::to_string).collect();
    format!("[{}]", dimensions.join(","))
}

fn join_full_names(types: &[TypeName]) -> String {
    types
        .iter()
        .map(TypeName::full_name)
        .collect::<Vec<_>>()
        .join(",")
}

/// Full name of a generic instance: each segment of the definition chain followed by its
/// own arguments, without arity mangles.
fn generic_instance_full_name(element: &TypeName, arguments: &[TypeName]) -> String {
    let mut result = String::new();
    let mut consumed = 0;

    for (index, segment) in element.definition_chain().into_iter().enumerate() {
        let Some(named) = segment.as_named() else {
            continue;
        };

        if index == 0 {
            if !named.namespace.is_global() {
                result.push_str(named.namespace.full_name());
                result.push('.');
            }
        } else {
            result.push('+');
        }
        result.push_str(&named.simple_name);

        let own = named.own_generic_parameter_count();
        if own > 0 {
            let end = (consumed + own).min(arguments.len());
            result.push('<');
            result.push_str(&join_full_names(&arguments[consumed.min(end)..end]));
            result.push('>');
            consumed = end;
        }
    }

    result
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for TypeName {}

impl hash::Hash for TypeName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name().hash(state);
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeName").field(&self.full_name()).finish()
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
