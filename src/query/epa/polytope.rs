use crate::math::{Point, Real, Vector};
use crate::query::gjk::{closest_origin_on_triangle, SupportPoint};
use crate::utils;
use na::Unit;

/// A triangular face of the polytope expanded by EPA.
///
/// The vertices are wound counter-clockwise when seen from outside of the polytope, so that
/// `normal = normalize((b - a) × (c - a))` points outward.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Face {
    /// The first vertex of this face.
    pub a: SupportPoint,
    /// The second vertex of this face.
    pub b: SupportPoint,
    /// The third vertex of this face.
    pub c: SupportPoint,
    /// The outward unit normal of this face.
    pub normal: Unit<Vector<Real>>,
}

impl Face {
    /// Builds the face `abc` with its normal computed from the winding of its vertices.
    ///
    /// Returns `None` if the vertices are collinear or coincide.
    pub fn new(a: SupportPoint, b: SupportPoint, c: SupportPoint) -> Option<Self> {
        let normal = utils::ccw_face_normal([&a.point, &b.point, &c.point])?;
        Some(Face { a, b, c, normal })
    }

    /// The signed distance from the origin to the plane of this face.
    #[inline]
    pub fn distance(&self) -> Real {
        self.normal.dot(&self.a.point.coords)
    }

    /// Is `pt` strictly in front of the plane of this face?
    #[inline]
    pub fn is_visible_from(&self, pt: &Point<Real>) -> bool {
        self.normal.dot(&(pt - self.a.point)) > 0.0
    }

    /// The same face with the opposite winding and normal.
    pub fn reversed(&self) -> Self {
        Face {
            a: self.b,
            b: self.a,
            c: self.c,
            normal: -self.normal,
        }
    }

    /// The same face seen as a face of the Minkowski difference `b - a` instead of `a - b`.
    ///
    /// Every point is negated and the witnesses are swapped. The winding is reversed to keep
    /// the normal (now negated) pointing outward.
    pub fn flipped(&self) -> Self {
        Face {
            a: self.b.flipped(),
            b: self.a.flipped(),
            c: self.c.flipped(),
            normal: -self.normal,
        }
    }

    /// The three edges of this face, following its winding.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// The vertices of this face.
    #[inline]
    pub fn vertices(&self) -> [&SupportPoint; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// Barycentric coordinates, wrt. `a`, `b` and `c`, of the point of this face closest to
    /// the origin.
    pub fn closest_point_barycentric(&self) -> [Real; 3] {
        closest_origin_on_triangle(&self.a.point, &self.b.point, &self.c.point).1
    }

    /// Interpolates the witness points of this face with the barycentric coordinates of its
    /// point closest to the origin.
    ///
    /// Returns the contact points on the first and the second collider.
    pub fn witness_points(&self) -> (Point<Real>, Point<Real>) {
        let [u, v, w] = self.closest_point_barycentric();
        let pa = self.a.witness_a.coords * u
            + self.b.witness_a.coords * v
            + self.c.witness_a.coords * w;
        let pb = self.a.witness_b.coords * u
            + self.b.witness_b.coords * v
            + self.c.witness_b.coords * w;
        (Point::from(pa), Point::from(pb))
    }
}

/// An edge of the boundary left by the faces removed during one EPA expansion step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// The first endpoint.
    pub a: SupportPoint,
    /// The second endpoint.
    pub b: SupportPoint,
}

impl Edge {
    /// Creates the edge from `a` to `b`.
    #[inline]
    pub fn new(a: SupportPoint, b: SupportPoint) -> Self {
        Edge { a, b }
    }

    /// Do `self` and `other` join the same two points, in any direction?
    #[inline]
    pub fn joins_same_points(&self, other: &Edge) -> bool {
        (self.a.point == other.a.point && self.b.point == other.b.point)
            || (self.a.point == other.b.point && self.b.point == other.a.point)
    }
}
