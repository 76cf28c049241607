//! Roundtrip tests: every name rendered with the `U` format parses back into an equal name.

use dotnames::{members::EventName, prelude::*};
use test_log::test;

fn roundtrip_type(name: &TypeName) -> Result<()> {
    let text = name.to_string_with("U")?;
    let parsed = TypeName::parse(&text)?;
    assert_eq!(&parsed, name, "'{}' did not roundtrip", text);
    assert_eq!(parsed.assembly(), name.assembly());
    Ok(())
}

fn roundtrip_method(name: &MethodName) -> Result<()> {
    let text = name.to_string_with("U")?;
    let parsed = MethodName::parse(&text)?;
    assert_eq!(&parsed, name, "'{}' did not roundtrip", text);
    assert_eq!(parsed.return_type(), name.return_type());
    Ok(())
}

#[test]
fn test_parsed_types() -> Result<()> {
    for text in [
        "System.Int32",
        "System.Collections.Generic.Dictionary`2+KeyCollection",
        "System.Collections.Generic.Dictionary<System.String,System.Int32>+KeyCollection",
        "System.Collections.Generic.List<[mscorlib]System.Int32>, System.Collections",
        "System.Int32[0...3,]*&",
        "method System.Void *(System.Int32,System.String)",
        "Outer<System.Int32>+Inner<System.String>",
        "System.Func`2<in T,out TResult>",
        "System.Action<,>",
    ] {
        roundtrip_type(&TypeName::parse(text)?)?;
    }
    Ok(())
}

#[test]
fn test_constructed_types() -> Result<()> {
    let int32 = TypeName::create("System", "Int32")?;
    let corlib = AssemblyNameBuilder::new("mscorlib")
        .version(AssemblyVersion::new(4, 0, 0, 0))
        .culture("neutral")
        .build()?;

    roundtrip_type(&int32.make_array_type(3)?)?;
    roundtrip_type(&int32.make_pointer_type()?.make_by_reference_type()?)?;
    roundtrip_type(&int32.with_assembly(Some(corlib.clone()))?)?;

    let list = TypeName::create_generic(
        "System.Collections.Generic",
        "List",
        vec![GenericParameterDeclaration::named("T")],
    )?
    .with_assembly(Some(corlib))?;
    roundtrip_type(&list)?;
    roundtrip_type(&list.make_generic_type(vec![int32])?)?;
    Ok(())
}

#[test]
fn test_methods() -> Result<()> {
    for text in [
        "System.Object.ToString():System.String",
        "System.Object..ctor()",
        "System.String.Concat(System.String a, System.String b):System.String",
        "System.Collections.Generic.List`1.Add(`0 item):System.Void",
        "System.Linq.Enumerable.Empty``1():System.Collections.Generic.IEnumerable<``0>",
        "Widgets.Parser.TryParse(System.String text, System.Int32& value):System.Boolean",
    ] {
        roundtrip_method(&MethodName::parse(text)?)?;
    }
    Ok(())
}

#[test]
fn test_explicit_implementation() -> Result<()> {
    let dispose = MethodNameBuilder::new("System.IDisposable.Dispose")
        .declaring_type(TypeName::create("N", "C")?)
        .no_parameters()
        .return_type(TypeName::create("System", "Void")?)
        .build()?;
    let text = dispose.to_string_with("U")?;
    let parsed = MethodName::parse(&text)?;
    assert_eq!(parsed, dispose);
    assert_eq!(parsed.name(), "System.IDisposable.Dispose");
    assert_eq!(parsed.declaring_type(), dispose.declaring_type());
    roundtrip_method(&dispose)
}

#[test]
fn test_untyped_parameters() -> Result<()> {
    for text in ["N.C.M(x:)", "N.C.M(,)", "N.C.M()"] {
        let method = MethodName::parse(text)?;
        let parsed = MethodName::parse(&method.to_string_with("U")?)?;
        assert_eq!(parsed, method);
        assert_eq!(parsed.parameter_count(), method.parameter_count());
    }
    Ok(())
}

#[test]
fn test_generic_instance_methods() -> Result<()> {
    let empty = MethodName::parse(
        "System.Linq.Enumerable.Empty``1():System.Collections.Generic.IEnumerable<``0>",
    )?;
    let closed = empty.make_generic_method(vec![TypeName::create("System", "String")?])?;
    assert!(closed.is_generic_instance());
    roundtrip_method(&closed)?;
    Ok(())
}

#[test]
fn test_members() -> Result<()> {
    let indexer = PropertyName::parse(
        "System.Collections.Generic.List`1.Item[System.Int32 index]:`0, System.Private.CoreLib",
    )?;
    let text = indexer.to_string_with("U")?;
    assert_eq!(PropertyName::parse(&text)?, indexer);

    let field = FieldName::parse("System.String.Empty:System.String")?;
    assert_eq!(FieldName::parse(&field.to_string_with("U")?)?, field);

    let event = EventName::parse("Widgets.Button.Click:System.EventHandler")?;
    let parsed = EventName::parse(&event.to_string_with("U")?)?;
    assert_eq!(parsed, event);
    assert_eq!(parsed.event_type(), event.event_type());
    Ok(())
}

#[test]
fn test_scopes() -> Result<()> {
    let assembly = AssemblyName::parse(
        "System.Runtime, Version=8.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a",
    )?;
    assert_eq!(AssemblyName::parse(&assembly.to_string_with("U")?)?, assembly);

    let namespace = NamespaceName::parse("System.Collections.Generic")?;
    assert_eq!(
        NamespaceName::parse(&namespace.to_string_with("U")?)?,
        namespace
    );
    Ok(())
}
