//! Benchmarks for template matching and dispatch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wikifact_patact::{PatternTable, Template};

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

fn build_table() -> PatternTable {
    PatternTable::builder()
        .entry("when was % born", |args| Ok(vec![args[0].clone()]))
        .entry("what is the polar radius of %", |args| Ok(vec![args[0].clone()]))
        .entry("what is the decision date of case %", |args| Ok(vec![args[0].clone()]))
        .entry("what is the hex triplet of %", |args| Ok(vec![args[0].clone()]))
        .entry("what is the rgb value of %", |args| Ok(vec![args[0].clone()]))
        .entry("bye", |_| Ok(vec![]))
        .build()
}

fn bench_captures(c: &mut Criterion) {
    let mut group = c.benchmark_group("captures");

    let literal = Template::parse("bye");
    group.bench_function("literal", |b| {
        b.iter(|| black_box(literal.captures(&["bye"])));
    });

    let span = Template::parse("when was % born");
    let span_query = words("when was marie salomea sklodowska curie born");
    group.bench_function("span", |b| {
        b.iter(|| black_box(span.captures(&span_query)));
    });

    let miss = Template::parse("what is the polar radius of %");
    let miss_query = words("when was marie curie born");
    group.bench_function("miss", |b| {
        b.iter(|| black_box(miss.captures(&miss_query)));
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let table = build_table();
    let query = words("what is the hex triplet of international orange");

    c.bench_function("dispatch_full_table", |b| {
        b.iter(|| black_box(table.dispatch(&query)));
    });
}

criterion_group!(benches, bench_captures, bench_dispatch);
criterion_main!(benches);
