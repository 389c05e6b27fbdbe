use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;
use alloc::vec::Vec;

/// The convex hull of a cloud of points.
///
/// The hull itself is never computed: the support point of a point cloud along any
/// direction is always one of the vertices of its convex hull, so interior points
/// are harmless.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    center: Point<Real>,
}

impl ConvexHull {
    /// Creates the convex hull of the given points.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points(points: Vec<Point<Real>>) -> Option<Self> {
        let center = utils::center(&points)?;
        Some(ConvexHull { points, center })
    }

    /// The points this hull was built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Index of the point with the greatest dot product with `dir`.
    ///
    /// Ties are resolved in favor of the point with the smallest index.
    #[inline]
    pub fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best_pt = 0;
        let mut best_dot = self.points[0].coords.dot(dir);

        for (i, p) in self.points.iter().enumerate().skip(1) {
            let dot = p.coords.dot(dir);

            if dot > best_dot {
                best_dot = dot;
                best_pt = i;
            }
        }

        best_pt
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.points[self.support_point_id(dir)]
    }

    #[inline]
    fn local_center(&self) -> Point<Real> {
        self.center
    }
}
