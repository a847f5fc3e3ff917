use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pigmix::palette::NamedColorTable;
use pigmix::{rgb, AdditiveColor, PigmentColor, PigmentColorK};

const TARGETS: [AdditiveColor; 4] = [
    rgb!(0xb0, 0x40, 0x30),
    rgb!(0x3d, 0x9c, 0x50),
    rgb!(0x60, 0x50, 0x90),
    rgb!(0x3d, 0x9c, 0xa8),
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pigment-solver");

    group.bench_function("3-channel", |b| {
        b.iter(|| {
            for target in &TARGETS {
                black_box(PigmentColor::from_rgb(black_box(target)));
            }
        })
    });

    group.bench_function("4-channel", |b| {
        b.iter(|| {
            for target in &TARGETS {
                black_box(PigmentColorK::from_rgb(black_box(target)));
            }
        })
    });

    group.finish();

    let table = NamedColorTable::standard();
    let color = PigmentColorK::new(0.2, 0.25, 0.45, 0.25);
    c.bench_function("classify", |b| b.iter(|| table.classify(black_box(&color))));
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
