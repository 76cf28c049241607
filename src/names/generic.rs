//! Generic parameter names.
//!
//! A generic parameter appears in three shapes:
//!
//! - **Bound**: declared by a concrete type or method, carrying its declaration (name,
//!   variance, constraints) and a weak back-reference to its owner.
//! - **Unbound**: a bare positional placeholder such as `` `0 `` or ``` ``1 ``` read from
//!   text before the declaring context is known. Binding replaces it with the bound
//!   parameter at the same position.
//! - **Redirected**: the view a nested type has on a parameter declared by an enclosing
//!   type. `Outer<T>.Inner<U>` exposes `T` at position 0 and its own `U` at position 1;
//!   the redirected parameter keeps its position in the nested type's numbering and
//!   delegates its name to the enclosing declaration.
//!
//! # Ownership
//!
//! Owners hold their parameters strongly and parameters refer back to their owner through
//! a [`Weak`] reference, so a parameter obtained from a name outlives its owner only as a
//! positional reference: [`GenericParameterName::declaring_type`] then yields `None`.

use std::sync::Weak;

use crate::names::{list::NameList, method::MethodNameData, types::TypeNameData};
use crate::{MethodName, TypeName};

/// Variance of a generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variance {
    /// No variance annotation
    #[default]
    Invariant,
    /// `out T` or `+T`
    Covariant,
    /// `in T` or `-T`
    Contravariant,
}

/// Whether a generic parameter is declared by a type or by a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericParameterKind {
    /// Declared by a type, written `` `N `` or `!N`
    Type,
    /// Declared by a method, written ``` ``N ``` or `!!N`
    Method,
}

impl GenericParameterKind {
    /// The positional text of a parameter of this kind at `position`.
    #[must_use]
    pub fn positional_name(self, position: usize) -> String {
        match self {
            GenericParameterKind::Type => format!("`{}", position),
            GenericParameterKind::Method => format!("``{}", position),
        }
    }
}

/// The declared properties of a generic parameter.
///
/// # Examples
///
/// ```rust
/// use dotnames::{GenericParameterDeclaration, Variance};
///
/// let declaration = GenericParameterDeclaration::named("TResult").with_variance(Variance::Covariant);
/// assert_eq!(declaration.name(), Some("TResult"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericParameterDeclaration {
    name: Option<String>,
    variance: Variance,
    constraints: NameList<TypeName>,
}

impl GenericParameterDeclaration {
    /// A declaration without name, variance or constraints.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A declaration with the given name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        GenericParameterDeclaration {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Returns a copy with the given variance.
    #[must_use]
    pub fn with_variance(mut self, variance: Variance) -> Self {
        self.variance = variance;
        self
    }

    /// Returns a copy with the given constraint types.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Vec<TypeName>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// The declared name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The declared variance.
    #[must_use]
    pub fn variance(&self) -> Variance {
        self.variance
    }

    /// The constraint types.
    #[must_use]
    pub fn constraints(&self) -> &[TypeName] {
        &self.constraints
    }
}

/// Weak back-reference from a bound parameter to its owner.
#[derive(Clone, Debug)]
pub(crate) enum GenericOwner {
    Type(Weak<TypeNameData>),
    Method(Weak<MethodNameData>),
}

/// A generic parameter declared by a type or method.
#[derive(Clone, Debug)]
pub struct BoundGenericParameterName {
    pub(crate) owner: GenericOwner,
    pub(crate) position: usize,
    pub(crate) declaration: GenericParameterDeclaration,
}

/// A positional generic parameter reference that has not been bound yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnboundGenericParameterName {
    pub(crate) kind: GenericParameterKind,
    pub(crate) position: usize,
}

/// A nested type's view on a generic parameter declared by an enclosing type.
#[derive(Clone, Debug)]
pub struct RedirectedGenericParameterName {
    pub(crate) owner: Weak<TypeNameData>,
    pub(crate) position: usize,
    pub(crate) declaring_parameter: TypeName,
}

/// A generic parameter in one of its three shapes.
///
/// Generic parameters are type names; they are reached through
/// [`TypeName::as_generic_parameter`].
///
/// # Examples
///
/// ```rust
/// use dotnames::TypeName;
///
/// let nested = TypeName::parse("C`1+D`1")?;
/// let outer = nested.declaring_type().unwrap();
/// let inherited = nested.generic_parameters()[0].as_generic_parameter().unwrap();
///
/// assert!(inherited.is_redirected());
/// assert!(inherited.declaring_generic_parameter().unwrap().is_same(&outer.generic_parameters()[0]));
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone, Debug)]
pub enum GenericParameterName {
    /// Declared by a concrete type or method
    Bound(BoundGenericParameterName),
    /// Positional placeholder awaiting binding
    Unbound(UnboundGenericParameterName),
    /// Enclosing type's parameter seen from a nested type
    Redirected(RedirectedGenericParameterName),
}

impl GenericParameterName {
    /// Type or method parameter.
    #[must_use]
    pub fn kind(&self) -> GenericParameterKind {
        match self {
            GenericParameterName::Bound(bound) => match bound.owner {
                GenericOwner::Type(_) => GenericParameterKind::Type,
                GenericOwner::Method(_) => GenericParameterKind::Method,
            },
            GenericParameterName::Unbound(unbound) => unbound.kind,
            GenericParameterName::Redirected(_) => GenericParameterKind::Type,
        }
    }

    /// Position in the owner's generic parameter list.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            GenericParameterName::Bound(bound) => bound.position,
            GenericParameterName::Unbound(unbound) => unbound.position,
            GenericParameterName::Redirected(redirected) => redirected.position,
        }
    }

    /// The positional text, `` `N `` or ``` ``N ```.
    #[must_use]
    pub fn positional_name(&self) -> String {
        self.kind().positional_name(self.position())
    }

    /// The declaration of this parameter; redirected parameters report the enclosing
    /// type's declaration and unbound ones have none.
    #[must_use]
    pub fn declaration(&self) -> Option<&GenericParameterDeclaration> {
        match self {
            GenericParameterName::Bound(bound) => Some(&bound.declaration),
            GenericParameterName::Unbound(_) => None,
            GenericParameterName::Redirected(redirected) => redirected
                .declaring_parameter
                .as_generic_parameter()
                .and_then(GenericParameterName::declaration),
        }
    }

    /// The declared name, if any.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        self.declaration().and_then(GenericParameterDeclaration::name)
    }

    /// The declared variance.
    #[must_use]
    pub fn variance(&self) -> Variance {
        self.declaration()
            .map_or(Variance::Invariant, GenericParameterDeclaration::variance)
    }

    /// The type owning this parameter, if it is a type parameter and the owner is alive.
    #[must_use]
    pub fn declaring_type(&self) -> Option<TypeName> {
        match self {
            GenericParameterName::Bound(BoundGenericParameterName {
                owner: GenericOwner::Type(owner),
                ..
            })
            | GenericParameterName::Redirected(RedirectedGenericParameterName { owner, .. }) => {
                owner.upgrade().map(TypeName::from_data)
            }
            _ => None,
        }
    }

    /// The method owning this parameter, if it is a method parameter and the owner is alive.
    #[must_use]
    pub fn declaring_method(&self) -> Option<MethodName> {
        match self {
            GenericParameterName::Bound(BoundGenericParameterName {
                owner: GenericOwner::Method(owner),
                ..
            }) => owner.upgrade().map(MethodName::from_data),
            _ => None,
        }
    }

    /// For a redirected parameter, the parameter of the enclosing type that truly declares it.
    #[must_use]
    pub fn declaring_generic_parameter(&self) -> Option<&TypeName> {
        match self {
            GenericParameterName::Redirected(redirected) => Some(&redirected.declaring_parameter),
            _ => None,
        }
    }

    /// Returns `true` for parameters declared by a concrete owner.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        matches!(self, GenericParameterName::Bound(_))
    }

    /// Returns `true` for positional placeholders.
    #[must_use]
    pub fn is_unbound(&self) -> bool {
        matches!(self, GenericParameterName::Unbound(_))
    }

    /// Returns `true` for an enclosing type's parameter seen from a nested type.
    #[must_use]
    pub fn is_redirected(&self) -> bool {
        matches!(self, GenericParameterName::Redirected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_names() {
        assert_eq!(GenericParameterKind::Type.positional_name(2), "`2");
        assert_eq!(GenericParameterKind::Method.positional_name(0), "``0");
    }

    #[test]
    fn test_declaration_builders() {
        let declaration = GenericParameterDeclaration::named("T")
            .with_variance(Variance::Contravariant)
            .with_constraints(vec![TypeName::parse("System.IComparable").unwrap()]);

        assert_eq!(declaration.name(), Some("T"));
        assert_eq!(declaration.variance(), Variance::Contravariant);
        assert_eq!(declaration.constraints().len(), 1);
        assert_eq!(GenericParameterDeclaration::anonymous().name(), None);
    }

    #[test]
    fn test_bound_parameter_owner() {
        let list = TypeName::create_generic(
            "System.Collections.Generic",
            "List",
            vec![GenericParameterDeclaration::named("T")],
        )
        .unwrap();
        let parameter = list.generic_parameters()[0].as_generic_parameter().unwrap();

        assert!(parameter.is_bound());
        assert_eq!(parameter.kind(), GenericParameterKind::Type);
        assert_eq!(parameter.declared_name(), Some("T"));
        assert!(parameter.declaring_type().unwrap().is_same(&list));
        assert!(parameter.declaring_method().is_none());
        assert!(parameter.declaring_generic_parameter().is_none());
    }

    #[test]
    fn test_owner_dropped() {
        let parameter = {
            let list = TypeName::create("", "List`1").unwrap();
            list.generic_parameters()[0].clone()
        };
        let parameter = parameter.as_generic_parameter().unwrap();
        assert!(parameter.declaring_type().is_none());
        assert_eq!(parameter.position(), 0);
    }

    #[test]
    fn test_unbound() {
        let placeholder = TypeName::unbound_generic_parameter(GenericParameterKind::Method, 1);
        let parameter = placeholder.as_generic_parameter().unwrap();
        assert!(parameter.is_unbound());
        assert_eq!(parameter.positional_name(), "``1");
        assert!(parameter.declaration().is_none());
        assert_eq!(parameter.variance(), Variance::Invariant);
    }
}
