//! Structural matching.
//!
//! Matching is a looser comparison than equality. Components one side leaves unspecified
//! act as wildcards:
//!
//! - a missing declaring type or assembly matches any declaring type or assembly
//! - a namespace matches every namespace it is a dotted suffix of, the global namespace
//!   matches all of them
//! - a missing parameter list matches any parameter list, including an empty one; a
//!   present list only matches lists of the same length
//! - a parameter without type matches a parameter of any type
//! - a method receiver without generic parameters matches any arity
//! - a bare type name matches a generic parameter declared under that name
//!
//! Parameter names never take part.

use crate::{
    names::{
        generic::GenericParameterName,
        method::MethodNameKind,
        parameter::ParameterName,
        types::{DefaultTypeName, TypeNameKind},
    },
    members::{EventName, FieldName, PropertyName},
    AssemblyName, MethodName, TypeName,
};

fn optional_matches<T, F>(left: Option<&T>, right: Option<&T>, matches: F) -> bool
where
    T: ?Sized,
    F: FnOnce(&T, &T) -> bool,
{
    match (left, right) {
        (Some(left), Some(right)) => matches(left, right),
        _ => true,
    }
}

fn list_matches<T, F>(left: &[T], right: &[T], matches: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| matches(left, right))
}

/// Parameter lists match when either is unspecified, or both have the same length and
/// match pairwise.
pub(crate) fn parameter_lists_match(
    left: Option<&[ParameterName]>,
    right: Option<&[ParameterName]>,
) -> bool {
    optional_matches(left, right, |left, right| {
        list_matches(left, right, ParameterName::matches)
    })
}

fn named_matches(
    left: &DefaultTypeName,
    right: &DefaultTypeName,
    left_type: &TypeName,
    right_type: &TypeName,
) -> bool {
    if left.simple_name() != right.simple_name()
        || left.own_generic_parameter_count() != right.own_generic_parameter_count()
    {
        return false;
    }

    match (left.declaring_type(), right.declaring_type()) {
        (Some(left), Some(right)) => {
            if !left.matches(right) {
                return false;
            }
        }
        // A nested pattern never matches a top-level type.
        (Some(_), None) => return false,
        (None, _) => {
            if !left_type.namespace().matches(right_type.namespace()) {
                return false;
            }
        }
    }

    optional_matches(left_type.assembly(), right_type.assembly(), AssemblyName::matches)
}

fn simple_reference_matches_parameter(
    named: &DefaultTypeName,
    parameter: &GenericParameterName,
) -> bool {
    named.is_simple_reference() && parameter.declared_name() == Some(named.simple_name())
}

impl TypeName {
    /// Returns `true` if `other` is structurally compatible with this name.
    ///
    /// A missing declaring type on this side and missing assemblies on either side act as
    /// wildcards. Namespaces match as dotted suffixes and a bare name matches a generic
    /// parameter declared under that name.
    /// Equal names always match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnames::TypeName;
    ///
    /// let pattern = TypeName::parse("Generic.List`1")?;
    /// let full = TypeName::parse("System.Collections.Generic.List`1, mscorlib")?;
    /// assert!(pattern.matches(&full));
    /// assert!(!full.matches(&pattern));
    /// # Ok::<(), dotnames::Error>(())
    /// ```
    #[must_use]
    pub fn matches(&self, other: &TypeName) -> bool {
        if self.is_same(other) {
            return true;
        }

        match (self.kind(), other.kind()) {
            (TypeNameKind::Named(left), TypeNameKind::Named(right)) => {
                named_matches(left, right, self, other)
            }
            (TypeNameKind::Named(named), TypeNameKind::GenericParameter(parameter))
            | (TypeNameKind::GenericParameter(parameter), TypeNameKind::Named(named)) => {
                simple_reference_matches_parameter(named, parameter)
            }
            (TypeNameKind::GenericParameter(left), TypeNameKind::GenericParameter(right)) => {
                left.kind() == right.kind() && left.position() == right.position()
            }
            (TypeNameKind::Array(left), TypeNameKind::Array(right)) => {
                left.rank() == right.rank() && left.element_type().matches(right.element_type())
            }
            (TypeNameKind::Pointer(left), TypeNameKind::Pointer(right))
            | (TypeNameKind::ByReference(left), TypeNameKind::ByReference(right)) => {
                left.matches(right)
            }
            (TypeNameKind::GenericInstance(left), TypeNameKind::GenericInstance(right)) => {
                left.element_type().matches(right.element_type())
                    && list_matches(left.arguments(), right.arguments(), TypeName::matches)
            }
            (TypeNameKind::FunctionPointer(left), TypeNameKind::FunctionPointer(right)) => {
                left.return_type().matches(right.return_type())
                    && list_matches(
                        left.parameter_types(),
                        right.parameter_types(),
                        TypeName::matches,
                    )
            }
            _ => false,
        }
    }
}

impl ParameterName {
    /// Returns `true` if the parameter types match; a missing type matches any type.
    #[must_use]
    pub fn matches(&self, other: &ParameterName) -> bool {
        optional_matches(
            self.parameter_type(),
            other.parameter_type(),
            TypeName::matches,
        )
    }
}

impl MethodName {
    /// Returns `true` if `other` is structurally compatible with this method.
    ///
    /// A definition matches an instance of a matching definition; an instance only matches
    /// instances with matching arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnames::MethodName;
    ///
    /// let pattern = MethodName::parse("CompareTo(System.Object, System.Int32)")?;
    /// let target = MethodName::parse("CompareTo(System.Object x, System.Int32 y)")?;
    /// assert!(pattern.matches(&target));
    /// assert!(MethodName::parse("CompareTo")?.matches(&target));
    /// # Ok::<(), dotnames::Error>(())
    /// ```
    #[must_use]
    pub fn matches(&self, other: &MethodName) -> bool {
        if self.is_same(other) {
            return true;
        }

        match (self.kind(), other.kind()) {
            (MethodNameKind::Default(_), MethodNameKind::GenericInstance(instance)) => {
                self.matches(instance.element_method())
            }
            (MethodNameKind::GenericInstance(_), MethodNameKind::Default(_)) => false,
            (MethodNameKind::GenericInstance(left), MethodNameKind::GenericInstance(right)) => {
                left.element_method().matches(right.element_method())
                    && list_matches(left.arguments(), right.arguments(), TypeName::matches)
            }
            (MethodNameKind::Default(left), MethodNameKind::Default(right)) => {
                left.name() == right.name()
                    && optional_matches(
                        self.declaring_type(),
                        other.declaring_type(),
                        TypeName::matches,
                    )
                    && (left.generic_parameters().is_empty()
                        || left.generic_parameters().len() == right.generic_parameters().len())
                    && parameter_lists_match(left.parameters(), right.parameters())
                    && optional_matches(self.return_type(), other.return_type(), TypeName::matches)
            }
        }
    }
}

impl PropertyName {
    /// Returns `true` if `other` is structurally compatible with this property.
    #[must_use]
    pub fn matches(&self, other: &PropertyName) -> bool {
        self.name() == other.name()
            && optional_matches(
                self.declaring_type(),
                other.declaring_type(),
                TypeName::matches,
            )
            && parameter_lists_match(self.parameters(), other.parameters())
            && optional_matches(
                self.property_type(),
                other.property_type(),
                TypeName::matches,
            )
    }
}

impl FieldName {
    /// Returns `true` if `other` is structurally compatible with this field.
    #[must_use]
    pub fn matches(&self, other: &FieldName) -> bool {
        self.name() == other.name()
            && optional_matches(
                self.declaring_type(),
                other.declaring_type(),
                TypeName::matches,
            )
            && optional_matches(self.field_type(), other.field_type(), TypeName::matches)
    }
}

impl EventName {
    /// Returns `true` if `other` is structurally compatible with this event.
    #[must_use]
    pub fn matches(&self, other: &EventName) -> bool {
        self.name() == other.name()
            && optional_matches(
                self.declaring_type(),
                other.declaring_type(),
                TypeName::matches,
            )
            && optional_matches(self.event_type(), other.event_type(), TypeName::matches)
    }
}
