use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sortviz_core::{Algorithm, Config, Dataset, DrawList, Driver, StepGenerator};

fn drain_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");
    for &len in &[50usize, 500] {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        let base = Dataset::load(&mut rng, len, 2, 200).expect("valid range");
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.display_name(), len),
                &base,
                |b, base| {
                    b.iter(|| {
                        let mut data = base.clone();
                        let steps = algorithm.generator(&data).drain(&mut data);
                        black_box(steps)
                    })
                },
            );
        }
    }
    group.finish();
}

fn driver_frames(c: &mut Criterion) {
    c.bench_function("driver_tick_with_draw_list", |b| {
        b.iter(|| {
            let cfg = Config {
                initial_algorithm: Algorithm::Quick,
                ..Config::default()
            };
            let mut driver = Driver::new(cfg).expect("default config is valid");
            let mut surface = DrawList::default();
            driver.start();
            while driver.is_sorting() {
                driver.tick(&mut surface);
                surface.clear();
            }
            black_box(driver.dataset().len())
        })
    });
}

criterion_group!(benches, drain_generators, driver_frames);
criterion_main!(benches);
