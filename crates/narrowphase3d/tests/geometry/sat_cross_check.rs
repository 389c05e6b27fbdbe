use approx::assert_relative_eq;
use na::{Isometry3, Vector3};
use narrowphase3d::query::{self, CollisionResult, EpaConfig};
use narrowphase3d::shape::{Cuboid, Positioned};
use oorandom::Rand32;

// Overlap of two axis-aligned boxes along each coordinate axis.
fn sat_overlaps(
    center1: &Vector3<f32>,
    half1: &Vector3<f32>,
    center2: &Vector3<f32>,
    half2: &Vector3<f32>,
) -> Vector3<f32> {
    half1 + half2 - (center2 - center1).abs()
}

#[test]
fn aabb_penetration_matches_sat() {
    let mut rng = Rand32::new(0);
    let mut rand = |min: f32, max: f32| min + (max - min) * rng.rand_float();
    let config = EpaConfig::default();
    let (mut num_penetrating, mut num_separated) = (0, 0);

    for _ in 0..500 {
        let half1 = Vector3::new(rand(0.2, 2.0), rand(0.2, 2.0), rand(0.2, 2.0));
        let half2 = Vector3::new(rand(0.2, 2.0), rand(0.2, 2.0), rand(0.2, 2.0));
        let center1 = Vector3::new(rand(-2.0, 2.0), rand(-2.0, 2.0), rand(-2.0, 2.0));
        let center2 = Vector3::new(rand(-2.0, 2.0), rand(-2.0, 2.0), rand(-2.0, 2.0));

        let a = Positioned::new(Isometry3::new(center1, Vector3::zeros()), Cuboid::new(half1));
        let b = Positioned::new(Isometry3::new(center2, Vector3::zeros()), Cuboid::new(half2));
        let overlaps = sat_overlaps(&center1, &half1, &center2, &half2);
        let result = query::solve(&a, &b, &config);

        if overlaps.min() < -1.0e-2 {
            assert_eq!(result, CollisionResult::Separated);
            num_separated += 1;
            continue;
        }

        let mut axes = [0, 1, 2];
        axes.sort_by(|i, j| overlaps[*i].total_cmp(&overlaps[*j]));
        let best = axes[0];

        if overlaps[best] < 1.0e-2 || overlaps[axes[1]] - overlaps[best] < 1.0e-2 {
            // Too close to touching, or no unique axis of minimum overlap.
            continue;
        }

        let pen = match result {
            CollisionResult::Penetrating(pen) => pen,
            other => panic!("Unexpected result: {:?}", other),
        };

        let mut expected_normal = Vector3::zeros();
        expected_normal[best] = (center2[best] - center1[best]).signum();

        assert_relative_eq!(pen.depth, overlaps[best], epsilon = 1.0e-3);
        assert_relative_eq!(*pen.normal, expected_normal, epsilon = 1.0e-3);
        num_penetrating += 1;
    }

    assert!(num_penetrating > 0);
    assert!(num_separated > 0);
}
