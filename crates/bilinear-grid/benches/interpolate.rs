use std::hint::black_box;

use bilinear_grid::{
    interpolate_bilinear, interpolate_bilinear_in, interpolate_weighted, Cell, FieldView,
    GridSampler, SamplerParams,
};
use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point2;

const NI: usize = 256;
const NJ: usize = 256;

fn make_field() -> Vec<f32> {
    (0..NI * NJ)
        .map(|k| ((k % NI) as f32 * 0.05).sin() + ((k / NI) as f32 * 0.03).cos())
        .collect()
}

fn make_positions(n: usize) -> Vec<Point2<f32>> {
    (0..n)
        .map(|k| {
            let t = k as f32 / n as f32;
            Point2::new(
                1.0 + t * (NI as f32 - 2.0),
                1.0 + (t * 7.0).fract() * (NJ as f32 - 2.0),
            )
        })
        .collect()
}

fn bench_interpolate(c: &mut Criterion) {
    let data = make_field();
    let field = FieldView::new(NI, NJ, &data).expect("field");
    let positions = make_positions(4096);

    let mut group = c.benchmark_group("interpolate_4096");
    group.bench_function("nested_lerp", |b| {
        b.iter(|| {
            for &p in &positions {
                black_box(interpolate_bilinear(&field, black_box(p)).expect("inside"));
            }
        })
    });
    group.bench_function("weighted_sum", |b| {
        b.iter(|| {
            for &p in &positions {
                let cell = Cell::containing(p).expect("finite");
                black_box(interpolate_weighted(&field, black_box(p), &cell).expect("inside"));
            }
        })
    });
    group.bench_function("reused_cell", |b| {
        let cells: Vec<Cell> = positions
            .iter()
            .map(|&p| Cell::containing(p).expect("finite"))
            .collect();
        b.iter(|| {
            for (&p, cell) in positions.iter().zip(&cells) {
                black_box(interpolate_bilinear_in(&field, black_box(p), cell).expect("inside"));
            }
        })
    });
    group.finish();

    let sampler = GridSampler::<_, f32>::new(&field, SamplerParams::default());
    c.bench_function("sampler_value_and_gradient_4096", |b| {
        b.iter(|| {
            for &p in &positions {
                black_box(sampler.sample_with_gradient(black_box(p)).expect("inside"));
            }
        })
    });
}

criterion_group!(benches, bench_interpolate);
criterion_main!(benches);
