//! Benchmarks for name parsing and formatting.
//!
//! Tests performance of the signature parser and the formatter for:
//! - Simple and nested type names
//! - Generic instances and type specifications
//! - Method signatures with parameters and return types
//! - Assembly display names
//! - Roundtrip rendering

extern crate dotnames;

use criterion::{criterion_group, criterion_main, Criterion};
use dotnames::{AssemblyName, MethodName, ParseOptions, TypeName};
use std::hint::black_box;

/// Benchmark parsing a namespace qualified type.
fn bench_type_simple(c: &mut Criterion) {
    c.bench_function("type_simple", |b| {
        b.iter(|| {
            let name = TypeName::parse(black_box("System.Collections.Generic.List`1")).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing a nested type whose declaring type is inferred from its mangle.
fn bench_type_nested(c: &mut Criterion) {
    c.bench_function("type_nested", |b| {
        b.iter(|| {
            let name = TypeName::parse(black_box(
                "System.Collections.Generic.Dictionary`2.ValueCollection.Enumerator",
            ))
            .unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing nested generic instances with an assembly qualifier.
fn bench_type_generic_instance(c: &mut Criterion) {
    let text = "System.Collections.Generic.Dictionary<System.String,System.Collections.Generic.List<[mscorlib]System.Int32>>, System.Collections";

    c.bench_function("type_generic_instance", |b| {
        b.iter(|| {
            let name = TypeName::parse(black_box(text)).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing stacked type specifications.
fn bench_type_specifications(c: &mut Criterion) {
    c.bench_function("type_specifications", |b| {
        b.iter(|| {
            let name = TypeName::parse(black_box("System.Int32[0...3,][]*&")).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing a generic method definition with named parameters.
fn bench_method_generic_definition(c: &mut Criterion) {
    let text = "System.Linq.Enumerable.Select<TSource,TResult>(System.Collections.Generic.IEnumerable<``0> source, System.Func<``0,``1> selector):System.Collections.Generic.IEnumerable<``1>";

    c.bench_function("method_generic_definition", |b| {
        b.iter(|| {
            let name =
                MethodName::parse_with(black_box(text), ParseOptions::PREFER_GENERIC_PARAMETERS)
                    .unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing an ILAsm style member reference.
fn bench_method_ilasm(c: &mut Criterion) {
    c.bench_function("method_ilasm", |b| {
        b.iter(|| {
            let name = MethodName::parse(black_box(
                "[mscorlib]System.Object::Equals(System.Object obj):System.Boolean",
            ))
            .unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing a strong assembly display name.
fn bench_assembly(c: &mut Criterion) {
    c.bench_function("assembly_strong_name", |b| {
        b.iter(|| {
            let name = AssemblyName::parse(black_box(
                "System.Runtime, Version=8.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a",
            ))
            .unwrap();
            black_box(name)
        });
    });
}

/// Benchmark a failing parse, which must not be slower than a successful one.
fn bench_malformed(c: &mut Criterion) {
    c.bench_function("malformed", |b| {
        b.iter(|| black_box(MethodName::try_parse(black_box("TryParse(System.Byte&&)"))));
    });
}

/// Benchmark rendering and reparsing a method with the roundtrip format.
fn bench_roundtrip(c: &mut Criterion) {
    let method = MethodName::parse(
        "System.Collections.Generic.Dictionary`2.TryGetValue(`0 key, `1& value):System.Boolean, System.Collections",
    )
    .unwrap();

    c.bench_function("roundtrip_method", |b| {
        b.iter(|| {
            let text = black_box(&method).to_string_with("U").unwrap();
            black_box(MethodName::parse(&text).unwrap())
        });
    });
}

/// Benchmark the compact rendering.
fn bench_format_compact(c: &mut Criterion) {
    let name = TypeName::parse(
        "System.Collections.Generic.Dictionary<System.String,System.Int32>+KeyCollection",
    )
    .unwrap();

    c.bench_function("format_compact", |b| {
        b.iter(|| black_box(black_box(&name).to_string_with("C").unwrap()));
    });
}

criterion_group!(
    benches,
    // Types
    bench_type_simple,
    bench_type_nested,
    bench_type_generic_instance,
    bench_type_specifications,
    // Methods
    bench_method_generic_definition,
    bench_method_ilasm,
    // Assemblies
    bench_assembly,
    // Failures
    bench_malformed,
    // Formatting
    bench_roundtrip,
    bench_format_compact,
);
criterion_main!(benches);
