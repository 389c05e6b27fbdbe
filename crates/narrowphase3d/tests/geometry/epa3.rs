use approx::assert_relative_eq;
use na::{Isometry3, Vector3};
use narrowphase3d::query::{self, CollisionResult, EpaConfig, NarrowPhase};
use narrowphase3d::shape::{Cuboid, Positioned};

#[test]
#[allow(non_snake_case)]
fn cuboid_cuboid_EPA() {
    let c = Cuboid::new(Vector3::new(2.0, 1.0, 1.0));
    let a = Positioned::new(Isometry3::translation(3.5, 0.0, 0.0), c);
    let b = Positioned::new(Isometry3::identity(), c);

    let res = query::solve(&a, &b, &EpaConfig::default())
        .into_penetration()
        .expect("Degenerate penetration.")
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(*res.normal, -Vector3::x(), epsilon = 1.0e-4);

    let a = Positioned::new(Isometry3::translation(0.0, 0.2, 0.0), c);
    let res = query::solve(&a, &b, &EpaConfig::default())
        .into_penetration()
        .expect("Degenerate penetration.")
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 1.8, epsilon = 1.0e-4);
    assert_relative_eq!(*res.normal, -Vector3::y(), epsilon = 1.0e-4);
}

#[test]
fn cuboid_cuboid_contact_points_lie_on_the_overlap() {
    let c = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let a = Positioned::new(Isometry3::identity(), c);
    let b = Positioned::new(Isometry3::translation(1.75, 0.0, 0.0), c);

    let res = query::solve(&a, &b, &EpaConfig::default());
    let pen = res.penetration().expect("Penetration not found.");
    let (pa, pb) = pen.contact_points();

    // The deepest point of `a` lies on its +x face, the one of `b` on its -x face.
    assert_relative_eq!(pa.x, 1.0, epsilon = 1.0e-4);
    assert_relative_eq!(pb.x, 0.75, epsilon = 1.0e-4);
    assert_relative_eq!(pa - pb, *pen.normal * pen.depth, epsilon = 1.0e-4);
}

#[test]
fn polytope_faces_point_outward() {
    let c = Cuboid::new(Vector3::new(1.0, 0.5, 0.75));
    let a = Positioned::new(Isometry3::identity(), c);
    let b = Positioned::new(Isometry3::new(Vector3::new(0.5, 0.25, 0.1), Vector3::new(0.3, 0.2, 0.1)), c);

    let mut solver = NarrowPhase::new();
    let res = solver.solve(&a, &b, &EpaConfig::default());
    assert!(matches!(res, CollisionResult::Penetrating(_)));

    for face in solver.polytope() {
        let recomputed = (face.b.point - face.a.point).cross(&(face.c.point - face.a.point));
        assert!(recomputed.dot(&face.normal) > 0.0);
        assert!(face.distance() > -1.0e-4);
    }
}
