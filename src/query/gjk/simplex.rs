use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::SupportPoint;
use arrayvec::ArrayVec;

/// The number of vertices of the simplex: the vertex, edge, triangle or tetrahedron it currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SimplexKind {
    /// A single vertex.
    Point,
    /// A segment.
    Line,
    /// A triangle.
    Triangle,
    /// A tetrahedron, the only kind of simplex accepted by EPA.
    Tetrahedron,
}

/// Outcome of [`Simplex::project_origin_and_reduce`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SimplexProjection {
    /// The origin lies inside of the tetrahedron (or closer than the tolerance to it).
    Enclosed,
    /// The origin is closer than the tolerance to a lower-dimensional simplex.
    ///
    /// The simplex is left unreduced: the search must continue along a direction orthogonal
    /// to it.
    Touching,
    /// The simplex has been reduced to the feature closest to the origin, and this is the
    /// closest point of that feature.
    Closest(Point<Real>),
}

/// A simplex of dimension up to 3 using Voronoï regions for computing point projections.
///
/// The vertices are kept in insertion order. Reductions retain the relative order of
/// the vertices they keep, which makes the tie-breaking of the whole GJK deterministic.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Simplex {
    vertices: ArrayVec<SupportPoint, 4>,
    proj: [Real; 4],
}

// Result of the projection of the origin on a (sub-)simplex: the projected point,
// its barycentric coordinates, and the bitmask of the vertices supporting it.
#[derive(Copy, Clone, Debug)]
struct Projection {
    point: Point<Real>,
    bcoords: [Real; 4],
    mask: u8,
}

impl Projection {
    fn vertex(pt: &Point<Real>, i: usize) -> Self {
        let mut bcoords = [0.0; 4];
        bcoords[i] = 1.0;
        Projection {
            point: *pt,
            bcoords,
            mask: 1 << i,
        }
    }

    // Re-index a projection computed on a sub-simplex.
    fn remap(self, ids: &[usize]) -> Self {
        let mut bcoords = [0.0; 4];
        let mut mask = 0;

        for (k, id) in ids.iter().enumerate() {
            if self.mask & (1 << k) != 0 {
                bcoords[*id] = self.bcoords[k];
                mask |= 1 << id;
            }
        }

        Projection {
            point: self.point,
            bcoords,
            mask,
        }
    }
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex::default()
    }

    /// Removes every vertex from this simplex.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: SupportPoint) {
        self.vertices.clear();
        self.vertices.push(pt);
        self.proj = [1.0, 0.0, 0.0, 0.0];
    }

    /// Add a point to this simplex.
    ///
    /// Returns `false` (and leaves the simplex unchanged) if the simplex is already a
    /// tetrahedron or if `pt` nearly coincides with one of its vertices.
    pub fn add_point(&mut self, pt: SupportPoint) -> bool {
        if self.vertices.is_full() {
            return false;
        }

        let eps = DEFAULT_EPSILON * DEFAULT_EPSILON;
        if self
            .vertices
            .iter()
            .any(|vtx| (vtx.point - pt.point).norm_squared() <= eps)
        {
            return false;
        }

        self.vertices.push(pt);
        true
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this simplex have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The kind of this simplex, or `None` if it is empty.
    pub fn kind(&self) -> Option<SimplexKind> {
        match self.vertices.len() {
            1 => Some(SimplexKind::Point),
            2 => Some(SimplexKind::Line),
            3 => Some(SimplexKind::Triangle),
            4 => Some(SimplexKind::Tetrahedron),
            _ => None,
        }
    }

    /// The vertices of this simplex.
    #[inline]
    pub fn points(&self) -> &[SupportPoint] {
        &self.vertices
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> &SupportPoint {
        assert!(i < self.vertices.len(), "Index out of bounds.");
        &self.vertices[i]
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th vertex by the last call to
    /// `project_origin_and_reduce`.
    pub fn proj_coord(&self, i: usize) -> Real {
        assert!(i < self.vertices.len(), "Index out of bounds.");
        self.proj[i]
    }

    /// The points of both colliders matching the last projection of the origin on this simplex.
    ///
    /// Only meaningful after `project_origin_and_reduce` returned `SimplexProjection::Closest`.
    pub fn closest_points(&self) -> (Point<Real>, Point<Real>) {
        let mut res = (Point::origin(), Point::origin());

        for (vtx, coord) in self.vertices.iter().zip(self.proj.iter()) {
            res.0 += vtx.witness_a.coords * *coord;
            res.1 += vtx.witness_b.coords * *coord;
        }

        res
    }

    /// Projects the origin on this simplex and reduces `self` to the smallest sub-simplex
    /// supporting the projection.
    ///
    /// If the origin is closer than `tolerance` to the simplex, it is not reduced at all.
    pub fn project_origin_and_reduce(&mut self, tolerance: Real) -> SimplexProjection {
        let mut flat = false;
        let proj = match self.vertices.len() {
            0 => return SimplexProjection::Touching,
            1 => Projection::vertex(&self.vertices[0].point, 0),
            2 => project_origin_on_segment(&self.vertices[0].point, &self.vertices[1].point),
            3 => project_origin_on_triangle(
                &self.vertices[0].point,
                &self.vertices[1].point,
                &self.vertices[2].point,
            ),
            _ => {
                let (a, b, c, d) = (
                    &self.vertices[0].point,
                    &self.vertices[1].point,
                    &self.vertices[2].point,
                    &self.vertices[3].point,
                );
                flat = is_flat_tetrahedron(a, b, c, d, tolerance);

                match project_origin_on_tetrahedron(a, b, c, d, flat) {
                    Some(proj) => proj,
                    None => return SimplexProjection::Enclosed,
                }
            }
        };

        if proj.point.coords.norm_squared() <= tolerance * tolerance {
            if !self.vertices.is_full() {
                return SimplexProjection::Touching;
            } else if !flat {
                return SimplexProjection::Enclosed;
            }

            // A flat tetrahedron can't be expanded by EPA: fall back to the
            // feature touching the origin and keep searching from there.
            log::trace!("GJK: flat tetrahedron touching the origin.");
            self.reduce(&proj);
            return SimplexProjection::Touching;
        }

        self.reduce(&proj);
        SimplexProjection::Closest(proj.point)
    }

    fn reduce(&mut self, proj: &Projection) {
        let mut reduced = ArrayVec::new();
        let mut proj_coords = [0.0; 4];

        for (i, vtx) in self.vertices.iter().enumerate() {
            if proj.mask & (1 << i) != 0 {
                proj_coords[reduced.len()] = proj.bcoords[i];
                reduced.push(*vtx);
            }
        }

        self.vertices = reduced;
        self.proj = proj_coords;
    }

    /// Unit directions orthogonal to the affine hull of this simplex, in the order they
    /// should be tried.
    ///
    /// Used to grow the simplex when the origin lies on it. Every direction comes with its
    /// opposite right after it. Empty for a tetrahedron, or if the simplex is degenerate.
    pub fn orthogonal_directions(&self) -> ArrayVec<Vector<Real>, 6> {
        use crate::utils::WBasis;

        let mut dirs = ArrayVec::new();
        let mut push_both = |dir: Vector<Real>| {
            dirs.push(dir);
            dirs.push(-dir);
        };

        match self.vertices.len() {
            1 => {
                push_both(Vector::x());
                push_both(Vector::y());
                push_both(Vector::z());
            }
            2 => {
                if let Some(dir) = (self.vertices[1] - self.vertices[0]).try_normalize(DEFAULT_EPSILON) {
                    let basis = dir.orthonormal_basis();
                    push_both(basis[0]);
                    push_both(basis[1]);
                }
            }
            3 => {
                let ab = self.vertices[1] - self.vertices[0];
                let ac = self.vertices[2] - self.vertices[0];

                if let Some(n) = ab.cross(&ac).try_normalize(DEFAULT_EPSILON) {
                    push_both(n);
                } else {
                    // Collinear vertices: directions orthogonal to the longest edge.
                    let edge = if ab.norm_squared() >= ac.norm_squared() {
                        ab
                    } else {
                        ac
                    };

                    if let Some(edge) = edge.try_normalize(DEFAULT_EPSILON) {
                        let basis = edge.orthonormal_basis();
                        push_both(basis[0]);
                        push_both(basis[1]);
                    }
                }
            }
            _ => {}
        }

        dirs
    }
}

fn project_origin_on_segment(a: &Point<Real>, b: &Point<Real>) -> Projection {
    let ab = b - a;
    let sqnab = ab.norm_squared();
    let t = -a.coords.dot(&ab);

    if t <= 0.0 || sqnab <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        Projection::vertex(a, 0)
    } else if t >= sqnab {
        Projection::vertex(b, 1)
    } else {
        let u = t / sqnab;
        Projection {
            point: a + ab * u,
            bcoords: [1.0 - u, u, 0.0, 0.0],
            mask: 0b11,
        }
    }
}

/// Computes the point of the triangle `abc` closest to the origin, using the Voronoï regions
/// of its vertices and edges.
///
/// Returns the closest point and its barycentric coordinates wrt. `a`, `b`, `c`.
pub(crate) fn closest_origin_on_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> (Point<Real>, [Real; 3]) {
    let proj = project_origin_on_triangle(a, b, c);
    (proj.point, [proj.bcoords[0], proj.bcoords[1], proj.bcoords[2]])
}

fn project_origin_on_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Projection {
    let ab = b - a;
    let ac = c - a;
    let ap = -a.coords;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);

    if d1 <= 0.0 && d2 <= 0.0 {
        return Projection::vertex(a, 0);
    }

    let bp = -b.coords;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);

    if d3 >= 0.0 && d4 <= d3 {
        return Projection::vertex(b, 1);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return project_origin_on_segment(a, b);
    }

    let cp = -c.coords;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);

    if d6 >= 0.0 && d5 <= d6 {
        return Projection::vertex(c, 2);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return project_origin_on_segment(a, c).remap(&[0, 2]);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        return project_origin_on_segment(b, c).remap(&[1, 2]);
    }

    let denom = va + vb + vc;
    if denom <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        // Flat triangle: the closest point lies on one of its edges.
        return closest_of(&[
            project_origin_on_segment(a, b),
            project_origin_on_segment(a, c).remap(&[0, 2]),
            project_origin_on_segment(b, c).remap(&[1, 2]),
        ]);
    }

    let v = vb / denom;
    let w = vc / denom;
    Projection {
        point: a + ab * v + ac * w,
        bcoords: [1.0 - v - w, v, w, 0.0],
        mask: 0b111,
    }
}

// Returns `None` if the origin lies inside of the tetrahedron `abcd`.
fn project_origin_on_tetrahedron(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    flat: bool,
) -> Option<Projection> {
    // Faces and their opposite vertex. The order fixes the tie-breaking.
    const FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [0, 2, 3, 1], [0, 3, 1, 2], [1, 3, 2, 0]];
    let pts = [a, b, c, d];

    let mut best: Option<(Real, Projection)> = None;

    for [i, j, k, l] in FACES {
        if !flat && !origin_outside_of_plane(pts[i], pts[j], pts[k], pts[l]) {
            continue;
        }

        let proj = project_origin_on_triangle(pts[i], pts[j], pts[k]).remap(&[i, j, k]);
        let sqdist = proj.point.coords.norm_squared();

        if best.map(|(best_sqdist, _)| sqdist < best_sqdist).unwrap_or(true) {
            best = Some((sqdist, proj));
        }
    }

    best.map(|(_, proj)| proj)
}

// Is the smallest height of the tetrahedron `abcd` below `tolerance`?
fn is_flat_tetrahedron(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    tolerance: Real,
) -> bool {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let bc = c - b;
    let bd = d - b;

    let abc = ab.cross(&ac);
    let volume6 = abc.dot(&ad).abs();
    let max_area2 = abc
        .norm()
        .max(ab.cross(&ad).norm())
        .max(ac.cross(&ad).norm())
        .max(bc.cross(&bd).norm());

    volume6 <= tolerance * max_area2
}

// Is the origin strictly on the opposite side of the plane `abc` than `d`?
fn origin_outside_of_plane(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> bool {
    let n = (b - a).cross(&(c - a));
    let sign_p = -a.coords.dot(&n);
    let sign_d = (d - a).dot(&n);
    sign_p * sign_d < 0.0
}

fn closest_of(projs: &[Projection]) -> Projection {
    let mut best = projs[0];
    let mut best_sqdist = best.point.coords.norm_squared();

    for proj in &projs[1..] {
        let sqdist = proj.point.coords.norm_squared();
        if sqdist < best_sqdist {
            best = *proj;
            best_sqdist = sqdist;
        }
    }

    best
}
