use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stripe_icon::{render, render_params, RawParams};

fn bench_render(c: &mut Criterion) {
    c.bench_function("render_default_256", |b| {
        let raw = RawParams::default();
        b.iter(|| render_params(black_box(&raw)))
    });

    c.bench_function("render_512_thin_stripes", |b| {
        b.iter(|| render(black_box(512), 8, 70, 2, 1))
    });

    c.bench_function("render_512_full_round", |b| {
        b.iter(|| render(black_box(512), 0, 99, 12, 18))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
