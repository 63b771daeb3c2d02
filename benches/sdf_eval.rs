//! Benchmarks for distance evaluation and rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::DVec3;
use sphere_sdf::batch::{BoxBatch, ConeBatch, OctahedronBatch, SphereBatch, TorusBatch};
use sphere_sdf::prelude::*;
use sphere_sdf::primitives::{sdf_box3d, sdf_cone, sdf_octahedron, sdf_sphere, sdf_torus, ConeForm};

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    let point = DVec3::new(0.5, 0.5, 0.5);

    group.bench_function("sphere", |b| {
        b.iter(|| sdf_sphere(black_box(point), black_box(1.0)))
    });

    group.bench_function("box3d", |b| {
        b.iter(|| sdf_box3d(black_box(point), black_box(DVec3::ONE)))
    });

    group.bench_function("torus", |b| {
        b.iter(|| sdf_torus(black_box(point), black_box(1.0), black_box(0.3)))
    });

    group.bench_function("octahedron", |b| {
        b.iter(|| sdf_octahedron(black_box(point), black_box(1.0)))
    });

    group.bench_function("cone", |b| {
        let form = ConeForm::new(1.0, 0.5, 1.0);
        b.iter(|| sdf_cone(black_box(point), black_box(&form)))
    });

    group.finish();
}

fn rotated_pose(i: usize) -> Pose {
    Pose::new(
        DVec3::new(i as f64, 1.0, 10.0),
        DVec3::new(0.0, 0.0, 15.0 * i as f64),
    )
    .unwrap()
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_x4");
    group.throughput(Throughput::Elements(4));

    let point = DVec3::new(0.5, -0.25, 2.0);

    let mut spheres = SphereBatch::new();
    let mut boxes = BoxBatch::new();
    let mut tori = TorusBatch::new();
    let mut octahedra = OctahedronBatch::new();
    let mut cones = ConeBatch::new();
    for i in 0..4 {
        let id = ShapeId::from_index(i);
        let pose = rotated_pose(i);
        spheres.push(id, &pose, &Sphere::new(1.0).unwrap()).unwrap();
        boxes.push(id, &pose, &Box3d::new(DVec3::new(0.25, 0.5, 1.0)).unwrap()).unwrap();
        tori.push(id, &pose, &Torus::new(1.0, 0.5).unwrap()).unwrap();
        octahedra.push(id, &pose, &Octahedron::new(1.0).unwrap()).unwrap();
        cones.push(id, &pose, &Cone::new(1.0, 0.5, 1.0).unwrap()).unwrap();
    }

    group.bench_function("sphere", |b| {
        b.iter(|| spheres.distance_x4(0, black_box(point)))
    });
    group.bench_function("box3d", |b| b.iter(|| boxes.distance_x4(0, black_box(point))));
    group.bench_function("torus", |b| b.iter(|| tori.distance_x4(0, black_box(point))));
    group.bench_function("octahedron", |b| {
        b.iter(|| octahedra.distance_x4(0, black_box(point)))
    });
    group.bench_function("cone", |b| b.iter(|| cones.distance_x4(0, black_box(point))));

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_shapes");

    for per_kind in [1usize, 4, 16] {
        let counts = ShapeCounts::from_array([1, per_kind, per_kind, per_kind, per_kind, per_kind]);
        let scene = Scene::from_description(&generate(&counts)).unwrap();
        let mut buffer = DistanceBuffer::new();
        let point = DVec3::new(0.1, 0.2, 5.0);

        group.throughput(Throughput::Elements(counts.total() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(counts.total()), &scene, |b, scene| {
            b.iter(|| nearest_shapes(scene, black_box(point), &mut buffer))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let scene = Scene::from_description(&generate(&ShapeCounts::from_array([1, 5, 5, 5, 5, 5])))
        .unwrap();
    let serial = RenderConfig {
        parallel: false,
        ..Default::default()
    };
    let parallel = RenderConfig::default();

    for (w, h) in [(100, 60), (200, 120)] {
        group.throughput(Throughput::Elements((w * h) as u64));
        group.bench_with_input(BenchmarkId::new("serial", w), &(w, h), |b, &(w, h)| {
            b.iter(|| render(&scene, &serial, w, h))
        });
        group.bench_with_input(BenchmarkId::new("parallel", w), &(w, h), |b, &(w, h)| {
            b.iter(|| render(&scene, &parallel, w, h))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_batches, bench_resolver, bench_render);
criterion_main!(benches);
