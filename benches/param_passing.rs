// Parameter Passing Benchmarks - criterion
//
// Run with: cargo bench --bench param_passing
//
// One call per iteration for every call path / receiver variant pair.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use idiom_bench::dispatch::{direct, ParamSink, Sink};

fn benchmark_virtual(c: &mut Criterion) {
    let sink: &dyn ParamSink = &Sink;
    let mut group = c.benchmark_group("virtual");
    group.bench_function(BenchmarkId::from_parameter("mx"), |b| {
        b.iter(|| sink.reassign(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxn"), |b| {
        b.iter(|| sink.copy_local(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxf"), |b| {
        b.iter(|| sink.sealed_reassign(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mx_f"), |b| {
        b.iter(|| sink.frozen_copy(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxf_f"), |b| {
        b.iter(|| sink.sealed_frozen_copy(black_box(7)))
    });
    group.finish();
}

fn benchmark_fn_pointer(c: &mut Criterion) {
    let table: [(&str, fn(i64) -> i64); 5] = [
        ("mx", direct::reassign),
        ("mxn", direct::copy_local),
        ("mxf", direct::sealed_reassign),
        ("mx_f", direct::frozen_copy),
        ("mxf_f", direct::sealed_frozen_copy),
    ];
    let mut group = c.benchmark_group("fn_pointer");
    for (column, f) in table {
        let f = black_box(f);
        group.bench_function(BenchmarkId::from_parameter(column), |b| {
            b.iter(|| f(black_box(7)))
        });
    }
    group.finish();
}

fn benchmark_generic<S: ParamSink>(c: &mut Criterion, sink: S) {
    let mut group = c.benchmark_group("generic");
    group.bench_function(BenchmarkId::from_parameter("mx"), |b| {
        b.iter(|| sink.reassign(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxn"), |b| {
        b.iter(|| sink.copy_local(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxf"), |b| {
        b.iter(|| sink.sealed_reassign(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mx_f"), |b| {
        b.iter(|| sink.frozen_copy(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxf_f"), |b| {
        b.iter(|| sink.sealed_frozen_copy(black_box(7)))
    });
    group.finish();
}

fn benchmark_static(c: &mut Criterion) {
    benchmark_generic(c, Sink);

    let mut group = c.benchmark_group("direct");
    group.bench_function(BenchmarkId::from_parameter("mx"), |b| {
        b.iter(|| direct::reassign(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxn"), |b| {
        b.iter(|| direct::copy_local(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxf"), |b| {
        b.iter(|| direct::sealed_reassign(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mx_f"), |b| {
        b.iter(|| direct::frozen_copy(black_box(7)))
    });
    group.bench_function(BenchmarkId::from_parameter("mxf_f"), |b| {
        b.iter(|| direct::sealed_frozen_copy(black_box(7)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_virtual,
    benchmark_fn_pointer,
    benchmark_static
);
criterion_main!(benches);
