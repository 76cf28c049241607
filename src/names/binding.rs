//! Generic parameter binding.
//!
//! Parsed signatures refer to generic parameters positionally (`` `0 ``, ``` ``1 ```) or
//! by bare name (`T`) before the declaring context is known. Binding walks a type name
//! and replaces each such reference with the parameter object declared by the context:
//!
//! - an unbound `` `N `` becomes the context type's parameter at position `N`
//! - an unbound ``` ``N ``` becomes the context method's parameter at position `N`
//! - a bare named type `T` becomes the in-scope parameter declared as `T`, method
//!   parameters taking precedence over type parameters
//!
//! Rebuilding stops at the first level that needs no change: when nothing below a node is
//! rewritten, the node itself is returned, so binding an already bound name yields the
//! very same object.
//!
//! [`TypeName::unbind`] is the inverse: every bound or redirected parameter becomes its
//! positional placeholder again, which is how signatures are detached from one owner
//! before being attached to another.

use crate::{
    names::{generic::GenericParameterName, list::NameList, types::TypeNameKind},
    Error, MethodName, Result, TypeName,
};

/// The generic parameter collections placeholders are resolved against.
///
/// A missing collection leaves placeholders of that kind untouched, whereas an existing
/// but too short collection is a binding failure.
#[derive(Clone, Copy, Default)]
pub(crate) struct BindContext<'a> {
    pub(crate) type_parameters: Option<&'a [TypeName]>,
    pub(crate) method_parameters: Option<&'a [TypeName]>,
}

impl<'a> BindContext<'a> {
    pub(crate) fn new(
        declaring_type: Option<&'a TypeName>,
        declaring_method: Option<&'a MethodName>,
    ) -> Self {
        BindContext {
            type_parameters: declaring_type.map(TypeName::generic_parameters),
            method_parameters: declaring_method.map(MethodName::generic_parameters),
        }
    }

    fn resolve(&self, name: &TypeName) -> Result<Option<TypeName>> {
        if let Some(parameter) = name.as_generic_parameter() {
            let GenericParameterName::Unbound(unbound) = parameter else {
                return Ok(None);
            };
            let parameters = match unbound.kind {
                crate::GenericParameterKind::Type => self.type_parameters,
                crate::GenericParameterKind::Method => self.method_parameters,
            };
            let Some(parameters) = parameters else {
                return Ok(None);
            };

            return match parameters.get(unbound.position) {
                Some(bound) => Ok(Some(bound.clone())),
                None => Err(Error::CannotBind {
                    position: unbound.position,
                    count: parameters.len(),
                }),
            };
        }

        let Some(named) = name.as_named().filter(|named| named.is_simple_reference()) else {
            return Ok(None);
        };
        let candidate = [self.method_parameters, self.type_parameters]
            .into_iter()
            .flatten()
            .flat_map(|parameters| parameters.iter())
            .find(|parameter| {
                parameter
                    .as_generic_parameter()
                    .and_then(GenericParameterName::declared_name)
                    == Some(named.simple_name())
            });

        Ok(candidate.cloned())
    }
}

impl TypeName {
    /// Rebuilds this name with every node `replace` returns a substitute for replaced.
    ///
    /// Returns `None` if nothing changed. Named types and generic parameters are leaves;
    /// generic instances rewrite their arguments, never their definition.
    pub(crate) fn substitute<F>(&self, replace: &mut F) -> Result<Option<TypeName>>
    where
        F: FnMut(&TypeName) -> Result<Option<TypeName>>,
    {
        if let Some(replacement) = replace(self)? {
            return Ok(Some(replacement));
        }

        let rebuilt = match self.kind() {
            TypeNameKind::Named(_) | TypeNameKind::GenericParameter(_) => None,
            TypeNameKind::Array(array) => array
                .element_type()
                .substitute(replace)?
                .map(|element| self.rebuild_array(element)),
            TypeNameKind::Pointer(element) => {
                element.substitute(replace)?.map(TypeName::rebuild_pointer)
            }
            TypeNameKind::ByReference(element) => element
                .substitute(replace)?
                .map(TypeName::rebuild_by_reference),
            TypeNameKind::GenericInstance(instance) => {
                let element = instance.element_type();
                substitute_list(instance.arguments(), replace)?.map(|arguments| {
                    TypeName::rebuild_generic_instance(element.clone(), arguments)
                })
            }
            TypeNameKind::FunctionPointer(pointer) => {
                let return_type = pointer.return_type().substitute(replace)?;
                let parameter_types = substitute_list(pointer.parameter_types(), replace)?;
                if return_type.is_none() && parameter_types.is_none() {
                    None
                } else {
                    Some(TypeName::rebuild_function_pointer(
                        return_type.unwrap_or_else(|| pointer.return_type().clone()),
                        parameter_types
                            .unwrap_or_else(|| pointer.parameter_types().to_vec().into()),
                    ))
                }
            }
        };

        Ok(rebuilt)
    }

    pub(crate) fn bind_with(&self, context: &BindContext<'_>) -> Result<TypeName> {
        Ok(self
            .substitute(&mut |name| context.resolve(name))?
            .unwrap_or_else(|| self.clone()))
    }

    /// Replaces generic parameter placeholders with the parameters declared by the given
    /// type and method.
    ///
    /// Returns `self` (the same object) if no placeholder needed binding. A missing context
    /// leaves placeholders of its kind unbound.
    ///
    /// # Arguments
    ///
    /// * `declaring_type` - Type whose generic parameters resolve `` `N `` references
    /// * `declaring_method` - Method whose generic parameters resolve ``` ``N ``` references
    ///
    /// # Errors
    /// Returns [`crate::Error::CannotBind`] if a placeholder refers to a position the
    /// context does not declare.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnames::TypeName;
    ///
    /// let list = TypeName::parse("System.Collections.Generic.List`1")?;
    /// let array = TypeName::parse("`0[]")?;
    ///
    /// let bound = array.clone_bind(Some(&list), None)?;
    /// let element = bound.element_type().unwrap();
    /// assert!(element.is_same(&list.generic_parameters()[0]));
    /// assert!(bound.clone_bind(Some(&list), None)?.is_same(&bound));
    /// # Ok::<(), dotnames::Error>(())
    /// ```
    pub fn clone_bind(
        &self,
        declaring_type: Option<&TypeName>,
        declaring_method: Option<&MethodName>,
    ) -> Result<TypeName> {
        self.bind_with(&BindContext::new(declaring_type, declaring_method))
    }

    /// Replaces every bound or redirected generic parameter with its positional placeholder.
    #[must_use]
    pub fn unbind(&self) -> TypeName {
        let mut replace = |name: &TypeName| -> Result<Option<TypeName>> {
            Ok(name
                .as_generic_parameter()
                .filter(|parameter| !parameter.is_unbound())
                .map(|parameter| {
                    TypeName::unbound_generic_parameter(parameter.kind(), parameter.position())
                }))
        };

        match self.substitute(&mut replace) {
            Ok(Some(unbound)) => unbound,
            _ => self.clone(),
        }
    }

    /// Returns `true` if any generic parameter placeholder remains in this name.
    #[must_use]
    pub fn contains_unbound_parameters(&self) -> bool {
        let mut found = false;
        let _ = self.substitute(&mut |name: &TypeName| {
            if name
                .as_generic_parameter()
                .is_some_and(GenericParameterName::is_unbound)
            {
                found = true;
            }
            Ok(None)
        });
        found
    }
}

/// Applies [`TypeName::substitute`] to each item, returning `None` if nothing changed.
pub(crate) fn substitute_list<F>(
    items: &[TypeName],
    replace: &mut F,
) -> Result<Option<NameList<TypeName>>>
where
    F: FnMut(&TypeName) -> Result<Option<TypeName>>,
{
    let mut rebuilt: Option<Vec<TypeName>> = None;

    for (index, item) in items.iter().enumerate() {
        if let Some(replacement) = item.substitute(replace)? {
            rebuilt
                .get_or_insert_with(|| items[..index].to_vec())
                .push(replacement);
        } else if let Some(rebuilt) = rebuilt.as_mut() {
            rebuilt.push(item.clone());
        }
    }

    Ok(rebuilt.map(NameList::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenericParameterDeclaration, GenericParameterKind};

    fn list_of_t() -> TypeName {
        TypeName::create_generic(
            "System.Collections.Generic",
            "List",
            vec![GenericParameterDeclaration::named("T")],
        )
        .unwrap()
    }

    #[test]
    fn test_bind_positional() {
        let list = list_of_t();
        let placeholder = TypeName::unbound_generic_parameter(GenericParameterKind::Type, 0)
            .make_pointer_type()
            .unwrap();

        let bound = placeholder.clone_bind(Some(&list), None).unwrap();
        assert!(bound
            .element_type()
            .unwrap()
            .is_same(&list.generic_parameters()[0]));
        assert!(!bound.contains_unbound_parameters());
        assert!(placeholder.contains_unbound_parameters());
    }

    #[test]
    fn test_bind_out_of_range() {
        let list = list_of_t();
        let placeholder = TypeName::unbound_generic_parameter(GenericParameterKind::Type, 3);
        assert_eq!(
            placeholder.clone_bind(Some(&list), None),
            Err(Error::CannotBind {
                position: 3,
                count: 1
            })
        );
    }

    #[test]
    fn test_bind_without_context_keeps_placeholder() {
        let placeholder = TypeName::unbound_generic_parameter(GenericParameterKind::Method, 0);
        let list = list_of_t();
        let result = placeholder.clone_bind(Some(&list), None).unwrap();
        assert!(result.is_same(&placeholder));
    }

    #[test]
    fn test_bind_is_idempotent() {
        let list = list_of_t();
        let int32 = TypeName::create("System", "Int32").unwrap();
        let dictionary = TypeName::create("System.Collections.Generic", "Dictionary`2")
            .unwrap()
            .make_generic_type(vec![
                int32.clone(),
                TypeName::unbound_generic_parameter(GenericParameterKind::Type, 0),
            ])
            .unwrap();

        let once = dictionary.clone_bind(Some(&list), None).unwrap();
        let twice = once.clone_bind(Some(&list), None).unwrap();
        assert!(twice.is_same(&once));
        assert!(once.generic_arguments()[0].is_same(&dictionary.generic_arguments()[0]));
        assert_eq!(once.full_name(), dictionary.full_name());
    }

    #[test]
    fn test_bind_by_name() {
        let list = list_of_t();
        let reference = TypeName::create("", "T").unwrap().make_array_type(1).unwrap();
        let bound = reference.clone_bind(Some(&list), None).unwrap();
        assert!(bound
            .element_type()
            .unwrap()
            .is_same(&list.generic_parameters()[0]));
        assert_eq!(bound.full_name(), "`0[]");

        let qualified = TypeName::create("N", "T").unwrap();
        assert!(qualified.clone_bind(Some(&list), None).unwrap().is_same(&qualified));
    }

    #[test]
    fn test_unbind() {
        let list = list_of_t();
        let parameter = list.generic_parameters()[0].make_array_type(1).unwrap();
        let unbound = parameter.unbind();
        assert!(unbound.contains_unbound_parameters());
        assert_eq!(unbound, parameter);

        let rebound = unbound.clone_bind(Some(&list), None).unwrap();
        assert!(rebound
            .element_type()
            .unwrap()
            .is_same(&list.generic_parameters()[0]));
    }

    #[test]
    fn test_function_pointer_substitution() {
        let list = list_of_t();
        let int32 = TypeName::create("System", "Int32").unwrap();
        let pointer = TypeName::function_pointer(
            int32.clone(),
            vec![int32, TypeName::unbound_generic_parameter(GenericParameterKind::Type, 0)],
        );
        let bound = pointer.clone_bind(Some(&list), None).unwrap();
        let parameters = bound.as_function_pointer().unwrap().parameter_types();
        assert!(parameters[1].is_same(&list.generic_parameters()[0]));
    }
}
