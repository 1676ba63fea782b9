use criterion::{Criterion, criterion_group, criterion_main};
use glam::Vec3;
use std::hint::black_box;

use viewer3d::animation::{Animator, BasisKind, SamplingSettings, Trajectory};

fn control_points(segments: usize) -> Vec<Vec3> {
    (0..=segments * 3)
        .map(|i| {
            let f = i as f32;
            Vec3::new(f, (f * 0.7).sin() * 2.0, (f * 0.3).cos())
        })
        .collect()
}

fn bench_sampling(c: &mut Criterion) {
    let points = control_points(32);
    let settings = SamplingSettings::default();

    let mut group = c.benchmark_group("trajectory_sample");
    for basis in BasisKind::ALL {
        group.bench_function(format!("{basis:?}"), |b| {
            b.iter(|| Trajectory::sample(basis, black_box(&points), &settings).unwrap());
        });
    }
    group.finish();
}

fn bench_playback(c: &mut Criterion) {
    let mut animator = Animator::new(true, BasisKind::CatmullRom, control_points(32));

    c.bench_function("animator_advance_ping_pong", |b| {
        b.iter(|| black_box(animator.advance()));
    });
}

criterion_group!(benches, bench_sampling, bench_playback);
criterion_main!(benches);
