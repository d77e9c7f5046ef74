use criterion::{Criterion, black_box, criterion_group, criterion_main};
use octafruit_mesh::{CurveProfile, ShapeParams, generate_mesh};

fn bench_generate_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_mesh");

    for inter_lod in [1u32, 4, 16, 28] {
        let params = ShapeParams {
            inter_lod,
            profile: CurveProfile::default(),
        };
        group.bench_function(format!("shells_{inter_lod}"), |b| {
            b.iter(|| generate_mesh(black_box(&params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_mesh);
criterion_main!(benches);
