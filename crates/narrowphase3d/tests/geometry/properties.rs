use approx::assert_relative_eq;
use na::{Isometry3, Unit, Vector3};
use narrowphase3d::query::gjk::SupportPoint;
use narrowphase3d::query::{self, CollisionResult, EpaConfig, NarrowPhase};
use narrowphase3d::shape::{Ball, Capsule, Collider, Cuboid, Positioned, RoundCuboid};
use oorandom::Rand32;

fn rand_range(rng: &mut Rand32, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.rand_float()
}

fn rand_vector(rng: &mut Rand32, min: f32, max: f32) -> Vector3<f32> {
    Vector3::new(
        rand_range(rng, min, max),
        rand_range(rng, min, max),
        rand_range(rng, min, max),
    )
}

fn rand_position(rng: &mut Rand32) -> Isometry3<f32> {
    Isometry3::new(rand_vector(rng, -1.5, 1.5), rand_vector(rng, -3.0, 3.0))
}

fn rand_collider(rng: &mut Rand32) -> Box<dyn Collider> {
    let pos = rand_position(rng);

    match rng.rand_range(0..4) {
        0 => Box::new(Positioned::new(pos, Ball::new(rand_range(rng, 0.2, 1.5)))),
        1 => Box::new(Positioned::new(
            pos,
            Cuboid::new(rand_vector(rng, 0.2, 1.5)),
        )),
        2 => Box::new(Positioned::new(
            pos,
            Capsule::new_y(rand_range(rng, 0.2, 1.0), rand_range(rng, 0.1, 0.8)),
        )),
        _ => Box::new(Positioned::new(
            pos,
            RoundCuboid::new(
                Cuboid::new(rand_vector(rng, 0.2, 1.0)),
                rand_range(rng, 0.05, 0.3),
            ),
        )),
    }
}

#[test]
fn repeated_queries_are_bit_identical() {
    let mut rng = Rand32::new(42);
    let config = EpaConfig::default();
    let mut solver = NarrowPhase::new();

    for _ in 0..200 {
        let a = rand_collider(&mut rng);
        let b = rand_collider(&mut rng);

        let first = query::solve(&*a, &*b, &config);
        let second = query::solve(&*a, &*b, &config);
        let reused = solver.solve(&*a, &*b, &config);

        assert_eq!(first, second);
        assert_eq!(first, reused);
    }
}

#[test]
fn swapping_balls_flips_the_normal() {
    let mut rng = Rand32::new(7);
    let config = EpaConfig::default();
    let mut num_penetrating = 0;

    for _ in 0..100 {
        let r1 = rand_range(&mut rng, 0.2, 1.5);
        let r2 = rand_range(&mut rng, 0.2, 1.5);
        let a = Positioned::new(rand_position(&mut rng), Ball::new(r1));
        let b = Positioned::new(rand_position(&mut rng), Ball::new(r2));

        let dist = (b.position.translation.vector - a.position.translation.vector).norm();
        if r1 + r2 - dist < 0.05 {
            continue;
        }

        let ab = query::solve(&a, &b, &config);
        let ba = query::solve(&b, &a, &config);

        match (ab, ba) {
            (CollisionResult::Penetrating(ab), CollisionResult::Penetrating(ba)) => {
                assert_relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-3);
                assert_relative_eq!(ab.depth, r1 + r2 - dist, epsilon = 1.0e-3);
                assert!(ab.normal.dot(&ba.normal) < -0.999);

                let flipped = ab.flipped();
                assert_eq!(flipped.depth, ab.depth);
                assert_eq!(*flipped.normal, -*ab.normal);
                num_penetrating += 1;
            }
            other => panic!("Unexpected results: {:?}", other),
        }
    }

    assert!(num_penetrating > 0);
}

// The support distance of the Minkowski difference `a - b` along `dir`, i.e., the distance
// `b` would have to move along `dir` to stop overlapping `a`.
fn depth_along(a: &dyn Collider, b: &dyn Collider, dir: &Unit<Vector3<f32>>) -> f32 {
    SupportPoint::from_colliders_toward(a, b, dir)
        .point
        .coords
        .dot(dir)
}

#[test]
fn swapping_colliders_flips_the_penetration() {
    let mut rng = Rand32::new(1234);
    let config = EpaConfig::default();
    let (mut num_penetrating, mut num_separated) = (0, 0);

    for _ in 0..200 {
        let a = rand_collider(&mut rng);
        let b = rand_collider(&mut rng);

        let ab = query::solve(&*a, &*b, &config);
        let ba = query::solve(&*b, &*a, &config);

        match (ab, ba) {
            (CollisionResult::Separated, CollisionResult::Separated) => num_separated += 1,
            (CollisionResult::Penetrating(ab), CollisionResult::Penetrating(ba)) => {
                assert_relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-3);

                // Normals may only disagree if both are directions of minimal depth.
                if ab.normal.dot(&ba.normal) >= -0.99 {
                    let flipped = -ba.normal;
                    assert_relative_eq!(depth_along(&*a, &*b, &flipped), ab.depth, epsilon = 1.0e-3);
                }

                num_penetrating += 1;
            }
            other => panic!("Unexpected results: {:?}", other),
        }
    }

    assert!(num_penetrating > 0);
    assert!(num_separated > 0);
}

#[test]
fn batch_solving_matches_individual_queries() {
    let mut rng = Rand32::new(99);
    let config = EpaConfig::default();

    let pairs: Vec<_> = (0..50)
        .map(|_| {
            let a = Positioned::new(rand_position(&mut rng), Ball::new(rand_range(&mut rng, 0.2, 1.5)));
            let b = Positioned::new(
                rand_position(&mut rng),
                Cuboid::new(rand_vector(&mut rng, 0.2, 1.5)),
            );
            (a, b)
        })
        .collect();

    let mut solver = NarrowPhase::new();
    let results = solver.solve_pairs(&pairs, &config);
    assert_eq!(results.len(), pairs.len());

    for ((a, b), result) in pairs.iter().zip(results.iter()) {
        assert_eq!(query::solve(a, b, &config), *result);
    }

    #[cfg(feature = "parallel")]
    assert_eq!(solver.solve_pairs_par(&pairs, &config), results);
}
