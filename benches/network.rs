use criterion::{black_box, criterion_group, criterion_main, Criterion};

use curvefit::{Network, Point, Topology};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn predict_bench(c: &mut Criterion) {
    let net = Network::new_with_seed(Topology::default(), 0).unwrap();

    c.bench_function("predict_2_60_1", |b| {
        b.iter(|| {
            let y = net.predict(black_box(0.37)).unwrap();
            black_box(y);
        })
    });
}

fn sweep_bench(c: &mut Criterion) {
    let mut net = Network::new_with_seed(Topology::default(), 0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let points: Vec<Point> = (0..100)
        .map(|i| {
            let x = (i as f64 - 50.0) * 5.0;
            Point::new(x, x / 2.0)
        })
        .collect();

    c.bench_function("sweep_100_points_2_60_1", |b| {
        b.iter(|| {
            let mean = net.train_sweep(black_box(&points), 1e-6, &mut rng).unwrap();
            black_box(mean);
        })
    });
}

criterion_group!(benches, predict_bench, sweep_bench);
criterion_main!(benches);
