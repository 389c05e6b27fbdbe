use na::{Isometry3, Vector3};
use narrowphase3d::query::{EpaConfig, NarrowPhase};
use narrowphase3d::shape::{Ball, Capsule, Cuboid, Positioned, SupportMap};
use oorandom::Rand32;
use test::Bencher;

const NUM_PAIRS: usize = 1024;

fn rand_isometry(rng: &mut Rand32) -> Isometry3<f32> {
    let mut rand = || rng.rand_float() * 2.0 - 1.0;
    Isometry3::new(
        Vector3::new(rand(), rand(), rand()),
        Vector3::new(rand(), rand(), rand()) * 3.0,
    )
}

fn generate_pairs<S: Copy>(
    seed: u64,
    mut shape: impl FnMut(&mut Rand32) -> S,
) -> Vec<(Positioned<S>, Positioned<S>)> {
    let mut rng = Rand32::new(seed);
    (0..NUM_PAIRS)
        .map(|_| {
            let a = Positioned::new(rand_isometry(&mut rng), shape(&mut rng));
            let b = Positioned::new(rand_isometry(&mut rng), shape(&mut rng));
            (a, b)
        })
        .collect()
}

fn bench_pairs<S: SupportMap>(bh: &mut Bencher, pairs: &[(Positioned<S>, Positioned<S>)]) {
    let config = EpaConfig::default();
    let mut solver = NarrowPhase::new();
    let mut i = 0;

    bh.iter(|| {
        let (a, b) = &pairs[i];
        i = (i + 1) % pairs.len();
        test::black_box(solver.solve(a, b, &config))
    })
}

#[bench]
fn bench_ball_against_ball(bh: &mut Bencher) {
    let pairs = generate_pairs(0, |rng| Ball::new(0.5 + rng.rand_float()));
    bench_pairs(bh, &pairs);
}

#[bench]
fn bench_cuboid_against_cuboid(bh: &mut Bencher) {
    let pairs = generate_pairs(1, |rng| {
        Cuboid::new(Vector3::new(0.5, 0.5, 0.5) + Vector3::repeat(rng.rand_float()))
    });
    bench_pairs(bh, &pairs);
}

#[bench]
fn bench_capsule_against_capsule(bh: &mut Bencher) {
    let pairs = generate_pairs(2, |rng| {
        Capsule::new_y(0.5 + rng.rand_float(), 0.2 + rng.rand_float() * 0.5)
    });
    bench_pairs(bh, &pairs);
}
