use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use figure_lab::figure::{FigureSpec, FigureRuntimeState, RotationAxis};
use figure_lab::geometry::shape_mesh;
use figure_lab::scene::Scene;
use figure_lab::scenes::SceneBuilder;
use figure_lab::ShapeKind;

/// Benchmark: one animation frame for every figure in the lab scene
fn bench_lab_frame(c: &mut Criterion) {
    let mut scene = Scene::new();
    let mut figures = SceneBuilder::new().build(&mut scene);

    c.bench_function("lab_frame_step", |b| {
        b.iter(|| {
            figures.step(black_box(&mut scene));
        })
    });
}

/// Benchmark: frame step plus world matrices, as the renderer consumes them
fn bench_lab_frame_with_matrices(c: &mut Criterion) {
    let mut scene = Scene::new();
    let mut figures = SceneBuilder::new().build(&mut scene);

    c.bench_function("lab_frame_world_matrices", |b| {
        b.iter(|| {
            figures.step(&mut scene);
            for id in scene.node_ids() {
                black_box(scene.world_matrix(id));
            }
        })
    });
}

/// Benchmark: a single bouncing, spinning figure state
fn bench_single_figure(c: &mut Criterion) {
    let spec = FigureSpec::DEFAULT
        .rotating(0.1, RotationAxis::All)
        .moving(0.02);
    let mut state = FigureRuntimeState::default();

    c.bench_function("figure_advance", |b| {
        b.iter(|| state.advance(black_box(&spec)))
    });
}

/// Benchmark: procedural mesh generation per shape
fn bench_shape_meshes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_mesh");
    for shape in ShapeKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(shape), &shape, |b, &shape| {
            b.iter(|| black_box(shape_mesh(shape)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_lab_frame,
    bench_lab_frame_with_matrices,
    bench_single_figure,
    bench_shape_meshes
);
criterion_main!(benches);
