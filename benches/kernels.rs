use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kernel_bench::{
    FractalFieldRenderer, NoDelayPacer, NullSink, PlaneRegion, RenderOptions,
    WavefrontPathPlanner, WavefrontScenario,
};

fn bench_fractal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractal_field");
    let cases = [
        ("full", 100u32, (-2.5, 1.0, -1.25, 1.25)),
        ("zoom2", 200, (-0.75, -0.25, -0.25, 0.25)),
        ("deep", 500, (-0.7463, -0.7453, 0.1102, 0.1112)),
    ];

    for (name, max_iterations, (x_min, x_max, y_min, y_max)) in cases {
        let renderer = FractalFieldRenderer::new(200, 200, max_iterations)
            .expect("valid renderer parameters");
        let region = PlaneRegion::new(x_min, x_max, y_min, y_max).expect("valid region");

        group.bench_with_input(BenchmarkId::new("render", name), &region, |b, region| {
            b.iter(|| {
                let report = renderer.run(
                    black_box(*region),
                    RenderOptions::HEADLESS,
                    &mut NullSink,
                    &mut NoDelayPacer,
                );
                black_box(report.in_set_pixels)
            })
        });
    }

    group.finish();
}

fn bench_wavefront(c: &mut Criterion) {
    let mut group = c.benchmark_group("wavefront");

    for size in [50usize, 100, 200, 400] {
        let mut planner = WavefrontPathPlanner::new(size, size).expect("valid grid size");
        let scenario = WavefrontScenario { size };
        let (start, goal) = (scenario.start(), scenario.goal());

        group.bench_function(BenchmarkId::new("plan", size), |b| {
            b.iter(|| {
                let report = planner
                    .plan_path(black_box(start), goal, false, &mut NullSink, &mut NoDelayPacer)
                    .expect("cells inside the grid");
                black_box(report.path_length)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fractal, bench_wavefront);
criterion_main!(benches);
