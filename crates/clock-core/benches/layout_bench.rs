use clock_core::{BoxMetrics, ClockLayout, Frame, TextShaper, TimeSample, Viewport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skia_safe::Color;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_compute");
    let shaper = TextShaper::new();
    for &side in &[200u32, 1080u32] {
        let vp = Viewport::square(side);
        group.bench_function(format!("box_{side}"), |b| {
            b.iter(|| black_box(ClockLayout::compute(vp, Color::BLACK, &BoxMetrics)));
        });
        group.bench_function(format!("skia_{side}"), |b| {
            b.iter(|| black_box(ClockLayout::compute(vp, Color::BLACK, &shaper)));
        });
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let layout = ClockLayout::compute(Viewport::square(400), Color::BLACK, &BoxMetrics);
    let time = TimeSample::new(10, 8, 30).expect("valid time");
    c.bench_function("frame_build_400", |b| {
        b.iter(|| black_box(Frame::build(&layout, time)));
    });
}

criterion_group!(benches, bench_layout, bench_frame);
criterion_main!(benches);
