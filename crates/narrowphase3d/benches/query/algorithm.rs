use na::Point3;
use narrowphase3d::query::gjk::{Simplex, SupportPoint};
use test::Bencher;

fn single_point(x: f32, y: f32, z: f32) -> SupportPoint {
    SupportPoint::new(Point3::new(x, y, z), Point3::origin())
}

#[bench]
fn bench_voronoi_simplex(bh: &mut Bencher) {
    let a = single_point(-0.5, -0.5, -0.5);
    let b = single_point(0.0, 0.5, 0.0);
    let c = single_point(0.5, -0.5, -0.5);
    let d = single_point(0.0, -0.5, -0.5);

    bh.iter(|| {
        let mut spl = Simplex::new();

        spl.reset(a);

        let _ = spl.add_point(b);
        let _ = spl.add_point(c);
        let _ = spl.add_point(d);

        test::black_box(spl.project_origin_and_reduce(1.0e-5));
    })
}
