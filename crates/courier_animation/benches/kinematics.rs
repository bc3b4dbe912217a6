use criterion::{black_box, criterion_group, criterion_main, Criterion};

use courier_animation::{BringInParams, MotionPlan};

fn bench_bring_in_solve(c: &mut Criterion) {
    let params = BringInParams::default();

    c.bench_function("bring_in_from_rest", |b| {
        b.iter(|| {
            MotionPlan::bring_in(
                black_box(0.0),
                black_box(840.0),
                black_box(0.0),
                black_box(0.0),
                params,
            )
        })
    });

    c.bench_function("bring_in_phase_swap", |b| {
        b.iter(|| {
            MotionPlan::bring_in(
                black_box(0.0),
                black_box(100.0),
                black_box(2000.0),
                black_box(200.0),
                params,
            )
        })
    });
}

fn bench_fling_frames(c: &mut Criterion) {
    c.bench_function("fling_120_frames", |b| {
        b.iter(|| {
            let mut plan = MotionPlan::fling(black_box(0.0), black_box(3200.0), 5000.0)
                .expect("fling with velocity");
            let mut last = 0;
            for frame in 0..=120 {
                last = plan.sample(frame as f32 / 120.0);
            }
            last
        })
    });
}

criterion_group!(benches, bench_bring_in_solve, bench_fling_frames);
criterion_main!(benches);
