//! Integration tests for the behavioral guarantees of the public API.
//!
//! Each test exercises one property end to end through the `parse` entry points, the model
//! and the formatter.

use dotnames::prelude::*;
use test_log::test;

#[test]
fn test_generic_ambiguity_resolution() -> Result<()> {
    let instance = TypeName::parse("Converter<TInput,TOutput>")?;
    assert!(matches!(instance.kind(), TypeNameKind::GenericInstance(_)));
    assert_eq!(instance.generic_arguments()[0].name(), "TInput");

    let preferred = TypeName::parse_with(
        "Converter<TInput,TOutput>",
        ParseOptions::PREFER_GENERIC_PARAMETERS,
    )?;
    assert!(preferred.is_generic_type_definition());
    assert_eq!(preferred.generic_parameters()[0].name(), "TInput");

    let mangled = TypeName::parse("Converter`2<TInput,TOutput>")?;
    assert!(mangled.is_generic_type_definition());
    assert_eq!(mangled.generic_parameters()[0].name(), "TInput");
    Ok(())
}

#[test]
fn test_nested_type_from_mangle() -> Result<()> {
    let name = TypeName::parse("System.Collections.Generic.Dictionary`2.ValueCollection")?;
    assert_eq!(
        name.full_name(),
        "System.Collections.Generic.Dictionary`2+ValueCollection"
    );
    assert!(name.is_nested());
    assert_eq!(name.declaring_type().unwrap().name(), "Dictionary`2");
    Ok(())
}

#[test]
fn test_specifier_order_preserved() -> Result<()> {
    let method = MethodName::parse("C(S+T[][])")?;
    assert_eq!(method.to_string(), "C(S+T[][])");

    let parameter_type = method.parameters().unwrap()[0].parameter_type().unwrap();
    let inner = parameter_type.element_type().unwrap();
    assert!(parameter_type.is_array());
    assert!(inner.is_array());
    assert_eq!(inner.element_type().unwrap().full_name(), "S+T");

    let mixed = TypeName::parse("System.Int32*[]&")?;
    assert!(mixed.is_by_reference());
    assert!(mixed.element_type().unwrap().is_array());
    assert_eq!(mixed.root_element_type().full_name(), "System.Int32");
    Ok(())
}

#[test]
fn test_positional_redirection() -> Result<()> {
    let nested = TypeName::parse("C`1+D`1")?;
    let outer = nested.declaring_type().unwrap();
    assert_eq!(nested.generic_parameter_count(), 2);

    let inherited = nested.generic_parameters()[0]
        .as_generic_parameter()
        .unwrap();
    assert!(inherited.is_redirected());
    assert_eq!(inherited.position(), 0);
    assert!(inherited
        .declaring_generic_parameter()
        .unwrap()
        .is_same(&outer.generic_parameters()[0]));

    let own = nested.generic_parameters()[1]
        .as_generic_parameter()
        .unwrap();
    assert!(own.is_bound());
    assert!(own.declaring_generic_parameter().is_none());
    Ok(())
}

#[test]
fn test_idempotent_binding() -> Result<()> {
    let list = TypeName::parse("System.Collections.Generic.List`1")?;
    let placeholder = TypeName::parse("System.Collections.Generic.IEnumerable<`0>")?;
    assert!(placeholder.contains_unbound_parameters());

    let once = placeholder.clone_bind(Some(&list), None)?;
    let twice = once.clone_bind(Some(&list), None)?;
    assert!(!once.contains_unbound_parameters());
    assert_eq!(once, twice);
    assert!(once.is_same(&twice));

    assert_eq!(once.unbind(), placeholder);
    assert!(matches!(
        TypeName::parse("`3")?.clone_bind(Some(&list), None),
        Err(Error::CannotBind { .. })
    ));
    Ok(())
}

#[test]
fn test_matches_reflexive_and_wildcards() -> Result<()> {
    let names = [
        "System.Collections.Generic.Dictionary<System.String,System.Int32>",
        "System.Int32[0...3,]",
        "method System.Void *(System.Int32)",
        "Outer`1+Inner",
    ];
    for text in names {
        let name = TypeName::parse(text)?;
        assert!(name.matches(&name), "{} should match itself", text);
    }

    let unspecified = MethodName::parse("System.Object.ToString")?;
    let empty = MethodName::parse("System.Object.ToString()")?;
    let overload = MethodName::parse("System.Object.ToString(System.String)")?;
    assert!(unspecified.matches(&unspecified));
    assert!(unspecified.matches(&empty));
    assert!(unspecified.matches(&overload));
    assert!(!empty.matches(&overload));
    Ok(())
}

#[test]
fn test_overloads_distinct_by_parameter_count() -> Result<()> {
    let one = MethodName::parse("N.C.M(x:)")?;
    let zero = MethodName::parse("N.C.M()")?;
    assert_eq!(one.parameter_count(), Some(1));
    assert_ne!(one, zero);
    assert_ne!(one.full_name(), zero.full_name());

    let indexed = PropertyName::parse("N.C.Item[x:]")?;
    let empty = PropertyName::parse("N.C.Item[]")?;
    assert_ne!(indexed, empty);
    Ok(())
}

#[test]
fn test_nested_pattern_requires_nesting() -> Result<()> {
    let nested = TypeName::parse("N.Outer+Inner")?;
    let top = TypeName::parse("N.Inner")?;
    assert!(top.matches(&nested));
    assert!(!nested.matches(&top));
    Ok(())
}

#[test]
fn test_parameters_match_ignoring_names() -> Result<()> {
    let pattern = MethodName::parse("CompareTo(System.Object, System.Int32)")?;
    let target = MethodName::parse("CompareTo(System.Object x, System.Int32 y)")?;
    assert!(pattern.matches(&target));
    assert_eq!(target.parameters().unwrap()[1].name(), "y");

    let indexer = PropertyName::parse("Item[System.Int32]")?;
    assert!(indexer.matches(&PropertyName::parse("Item[System.Int32 index]")?));
    Ok(())
}

#[test]
fn test_invalid_inputs_rejected() {
    assert_eq!(TypeName::parse(""), Err(Error::Empty));
    assert_eq!(MethodName::parse("   "), Err(Error::Empty));
    assert!(matches!(TypeName::parse("[]A"), Err(Error::Malformed { .. })));
    assert!(matches!(MethodName::parse("[ ]A.M()"), Err(Error::Malformed { .. })));
    assert!(TypeName::try_parse("").is_none());

    assert!(matches!(
        MethodName::parse("TryParse(Byte&&)"),
        Err(Error::Malformed { .. })
    ));
    assert!(MethodName::try_parse("TryParse(Byte&&)").is_none());

    for text in ["List<", "Func`x", "A[", "Outer+", "M(", "[mscorlib"] {
        assert!(TypeName::try_parse(text).is_none(), "{} parsed", text);
    }
}

#[test]
fn test_member_kind_from_shape() -> Result<()> {
    assert!(matches!(
        MemberName::parse("System.String.Chars[System.Int32]:System.Char")?,
        MemberName::Property(_)
    ));
    assert!(matches!(
        MemberName::parse("[mscorlib]System.Object::ToString():System.String")?,
        MemberName::Method(_)
    ));
    Ok(())
}

#[test]
fn test_constructed_names_render() -> Result<()> {
    let string = TypeName::create("System", "String")?;
    let lookup = TypeName::create_generic(
        "System.Collections.Generic",
        "Dictionary",
        vec![
            GenericParameterDeclaration::named("TKey"),
            GenericParameterDeclaration::named("TValue"),
        ],
    )?;
    let keys = lookup.nested_type("KeyCollection")?;
    assert_eq!(
        keys.full_name(),
        "System.Collections.Generic.Dictionary`2+KeyCollection"
    );

    let closed = keys.make_generic_type(vec![string.clone(), string.clone()])?;
    assert_eq!(
        closed.to_string_with("C")?,
        "Dictionary<String,String>+KeyCollection"
    );

    let contains = MethodNameBuilder::new("Contains")
        .declaring_type(closed)
        .parameter_types(vec![string])
        .build()?;
    assert_eq!(
        contains.to_string_with("M")?,
        "Contains(System.String)"
    );
    Ok(())
}

#[test]
fn test_names_are_shareable() -> Result<()> {
    let name = TypeName::parse("System.Collections.Generic.List<System.Int32>")?;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let name = name.clone();
            std::thread::spawn(move || name.to_string_with("U"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap()?, name.full_name());
    }
    Ok(())
}
