use approx::assert_relative_eq;
use na::{Isometry3, Point3, Vector3};
use narrowphase3d::query::{self, CollisionResult, EpaConfig};
use narrowphase3d::shape::{Ball, Capsule, ConvexHull, Cuboid, Dilated, Positioned};
use core::f32::consts::FRAC_PI_2;

#[test]
fn capsule_ball_penetration() {
    let capsule = Positioned::new(Isometry3::identity(), Capsule::new_y(1.0, 0.5));
    let ball = Positioned::new(Isometry3::translation(0.8, 0.3, 0.0), Ball::new(0.5));

    let pen = query::solve(&capsule, &ball, &EpaConfig::default())
        .into_penetration()
        .expect("Degenerate penetration.")
        .expect("Penetration not found.");
    assert_relative_eq!(pen.depth, 0.2, epsilon = 1.0e-3);
    assert!(pen.normal.x > 0.99);
}

#[test]
fn rotated_capsule_is_separated_from_ball() {
    // Once rotated, the capsule lies along the x axis, away from the ball.
    let capsule = Positioned::new(
        Isometry3::rotation(Vector3::z() * FRAC_PI_2),
        Capsule::new_y(1.0, 0.5),
    );
    let ball = Positioned::new(Isometry3::translation(0.0, 1.2, 0.0), Ball::new(0.5));

    assert_eq!(
        query::solve(&capsule, &ball, &EpaConfig::default()),
        CollisionResult::Separated
    );
}

#[test]
fn round_cuboid_cuboid_penetration() {
    let round = Positioned::new(
        Isometry3::identity(),
        Dilated::new(Cuboid::new(Vector3::repeat(1.0)), 0.25),
    );
    let cuboid = Positioned::new(
        Isometry3::translation(2.1, 0.0, 0.0),
        Cuboid::new(Vector3::repeat(1.0)),
    );

    let pen = query::solve(&round, &cuboid, &EpaConfig::default())
        .into_penetration()
        .expect("Degenerate penetration.")
        .expect("Penetration not found.");
    assert_relative_eq!(pen.depth, 0.15, epsilon = 1.0e-3);
    assert_relative_eq!(*pen.normal, Vector3::x(), epsilon = 1.0e-3);
}

#[test]
fn convex_hull_ignores_interior_points() {
    let tetrahedron = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let mut with_interior = tetrahedron.clone();
    with_interior.push(Point3::new(0.1, 0.1, 0.1));
    with_interior.push(Point3::new(0.2, 0.2, 0.05));

    let ball = Positioned::new(Isometry3::translation(-0.3, 0.3, 0.3), Ball::new(0.5));
    let hull1 = Positioned::new(Isometry3::identity(), ConvexHull::from_points(tetrahedron).unwrap());
    let hull2 = Positioned::new(Isometry3::identity(), ConvexHull::from_points(with_interior).unwrap());

    let pen1 = query::solve(&hull1, &ball, &EpaConfig::default())
        .into_penetration()
        .expect("Degenerate penetration.")
        .expect("Penetration not found.");
    let pen2 = query::solve(&hull2, &ball, &EpaConfig::default())
        .into_penetration()
        .expect("Degenerate penetration.")
        .expect("Penetration not found.");

    // The ball overlaps the x = 0 face of the tetrahedron.
    assert_relative_eq!(pen1.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(pen2.depth, pen1.depth, epsilon = 1.0e-3);
    assert_relative_eq!(*pen1.normal, -Vector3::x(), epsilon = 1.0e-2);
}
