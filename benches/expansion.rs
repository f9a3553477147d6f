//! Expansion Benchmarks
//!
//! Measures the rules on declarations of growing size, printing, and the
//! JSON boundary.
//!
//! Run with: cargo bench --bench expansion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prismatic::engine::host::{expand_json, ExpansionRequest};
use prismatic::engine::{expand, expand_batch, AttachmentKind};
use prismatic::syntax::builder::{labeled, positional, ty, EnumBuilder, PropertyBuilder, StructBuilder};
use prismatic::syntax::{Attribute, Binding, Decl, Expr, MarkerName, SourcePrinter};

fn wide_enum(cases: usize) -> Decl {
    (0..cases)
        .fold(EnumBuilder::new("Wide"), |builder, i| match i % 3 {
            0 => builder.case(&format!("plain{}", i)),
            1 => builder.case_with(&format!("single{}", i), vec![labeled("value", ty("Int"))]),
            _ => builder.case_with(
                &format!("mixed{}", i),
                vec![positional(ty("Int")), labeled("other", ty("String"))],
            ),
        })
        .into_decl()
}

fn wide_struct(properties: usize) -> Decl {
    (0..properties)
        .fold(StructBuilder::new("Wide"), |builder, i| match i % 3 {
            0 => builder.constant(&format!("id{}", i), ty("String")),
            1 => builder.property(
                PropertyBuilder::variable()
                    .bind(Binding::named(&format!("count{}", i)).initialized(Expr::int(0))),
            ),
            _ => builder.property(
                PropertyBuilder::constant()
                    .bind(Binding::named(&format!("a{}", i)))
                    .bind(Binding::named(&format!("b{}", i)).typed(ty("Double"))),
            ),
        })
        .into_decl()
}

fn bench_prism(c: &mut Criterion) {
    let mut group = c.benchmark_group("prism");
    let attribute = Attribute::marker(MarkerName::Prism);
    for size in [1, 10, 100] {
        let decl = wide_enum(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &decl, |b, decl| {
            b.iter(|| expand(black_box(&attribute), AttachmentKind::Member, black_box(decl)))
        });
    }
    group.finish();
}

fn bench_memberwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("memberwise");
    let attribute = Attribute::marker(MarkerName::MemberwiseInit);
    for size in [1, 10, 100] {
        let decl = wide_struct(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &decl, |b, decl| {
            b.iter(|| expand(black_box(&attribute), AttachmentKind::Member, black_box(decl)))
        });
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let generated = expand(
        &Attribute::marker(MarkerName::Prism),
        AttachmentKind::Extension,
        &wide_enum(100),
    )
    .unwrap_or_default();
    let printer = SourcePrinter::new();
    c.bench_function("print_100_cases", |b| b.iter(|| printer.print(black_box(&generated))));
}

fn bench_batch(c: &mut Criterion) {
    let requests: Vec<ExpansionRequest> = (0..64)
        .map(|_| {
            ExpansionRequest::new(
                Attribute::marker(MarkerName::Prism),
                AttachmentKind::Member,
                wide_enum(20),
            )
        })
        .collect();
    c.bench_function("batch_64x20", |b| b.iter(|| expand_batch(black_box(&requests))));
}

fn bench_json(c: &mut Criterion) {
    let request = ExpansionRequest::new(
        Attribute::marker(MarkerName::Prism),
        AttachmentKind::Member,
        wide_enum(20),
    );
    let input = serde_json::to_string(&request).unwrap_or_default();
    c.bench_function("json_20_cases", |b| b.iter(|| expand_json(black_box(&input))));
}

criterion_group!(
    benches,
    bench_prism,
    bench_memberwise,
    bench_print,
    bench_batch,
    bench_json
);
criterion_main!(benches);
