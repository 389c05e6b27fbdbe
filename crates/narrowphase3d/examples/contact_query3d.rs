extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use narrowphase3d::query::{self, CollisionResult, EpaConfig};
use narrowphase3d::shape::{Ball, Cuboid, Positioned};

fn main() {
    let cuboid = Positioned::new(Isometry3::identity(), Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let config = EpaConfig::default();

    let ball_penetrating = Positioned::new(Isometry3::translation(1.0, 1.0, 1.0), Ball::new(1.0));
    let ball_too_far = Positioned::new(Isometry3::translation(3.0, 3.0, 3.0), Ball::new(1.0));

    let ctct_penetrating = query::solve(&ball_penetrating, &cuboid, &config);
    let ctct_too_far = query::solve(&ball_too_far, &cuboid, &config);

    match ctct_penetrating {
        CollisionResult::Penetrating(pen) => {
            let (pt1, pt2) = pen.contact_points();
            println!(
                "Penetration depth: {}, normal: {}, contact points: {} {}",
                pen.depth, *pen.normal, pt1, pt2
            );
        }
        other => panic!("Unexpected result: {:?}", other),
    }

    assert_eq!(ctct_too_far, CollisionResult::Separated);
}
