//! Builder and DAG creation benchmarks

use criterion::Criterion;
use idag::{Builder, Dag};
use std::hint::black_box;

pub fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("create_empty_dag", |b| {
        b.iter(|| black_box(Dag::<String>::empty()));
    });

    c.bench_function("add_100_instructions", |b| {
        b.iter(|| {
            let mut builder = Builder::new();
            for i in 0..100 {
                builder = builder.add_node(i.to_string(), &[]);
            }
            black_box(builder)
        });
    });

    c.bench_function("build_100_roots", |b| {
        b.iter(|| {
            let mut builder = Builder::new();
            for i in 0..100 {
                builder = builder.add_node(i.to_string(), &[]);
            }
            black_box(builder.build().unwrap())
        });
    });
}
