//! Benchmarks for the vector and matrix hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathlib::prelude::*;

fn bench_vector_ops(c: &mut Criterion) {
    let a = vector3(1.0f32, 2.0, 3.0);
    let b = vector3(-4.0f32, 0.5, 2.0);

    c.bench_function("vector3_cross_product", |bencher| {
        bencher.iter(|| Vector3::cross_product(black_box(&a), black_box(&b)))
    });

    c.bench_function("vector3_normalized_copy", |bencher| {
        bencher.iter(|| black_box(a).normalized_copy())
    });
}

fn bench_matrix_mul(c: &mut Criterion) {
    let mut m = Matrix4::<f32>::identity();
    m[(0, 3)] = 2.0;
    m[(2, 1)] = -1.5;

    c.bench_function("matrix4_mul", |bencher| {
        bencher.iter(|| black_box(m) * black_box(m))
    });

    c.bench_function("matrix4_mul_vector", |bencher| {
        bencher.iter(|| black_box(m) * black_box(Vector4::WAXIS))
    });
}

criterion_group!(benches, bench_vector_ops, bench_matrix_mul);
criterion_main!(benches);
