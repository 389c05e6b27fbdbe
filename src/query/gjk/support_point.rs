use crate::math::{Point, Real, Vector};
use crate::shape::Collider;
use core::ops::Sub;
use na::Unit;

/// A point of the Minkowski difference of two colliders.
///
/// Each support point remembers the two points it originates from (its witnesses), one on each
/// collider, so that contact points can be reconstructed once the algorithms terminate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SupportPoint {
    /// The point on the Minkowski difference. This is equal to `self.witness_a - self.witness_b`.
    pub point: Point<Real>,
    /// The original point on the first collider used to compute `self.point`.
    pub witness_a: Point<Real>,
    /// The original point on the second collider used to compute `self.point`.
    pub witness_b: Point<Real>,
}

impl SupportPoint {
    /// Initializes a support point with `witness_a - witness_b`.
    pub fn new(witness_a: Point<Real>, witness_b: Point<Real>) -> Self {
        let point = Point::from(witness_a - witness_b);
        Self::new_with_point(point, witness_a, witness_b)
    }

    /// Initializes a support point with all information provided.
    ///
    /// It is assumed, but not checked, that `point == witness_a - witness_b`.
    pub fn new_with_point(
        point: Point<Real>,
        witness_a: Point<Real>,
        witness_b: Point<Real>,
    ) -> Self {
        SupportPoint {
            point,
            witness_a,
            witness_b,
        }
    }

    /// Support point where all components are set to zero.
    pub fn origin() -> Self {
        SupportPoint::new(Point::origin(), Point::origin())
    }

    /// Computes the support point of the Minkowski difference `a - b` toward the unit direction `dir`.
    pub fn from_colliders_toward<A, B>(a: &A, b: &B, dir: &Unit<Vector<Real>>) -> Self
    where
        A: ?Sized + Collider,
        B: ?Sized + Collider,
    {
        let sp1 = a.support_point_toward(dir);
        let sp2 = b.support_point_toward(&-*dir);

        SupportPoint::new(sp1, sp2)
    }

    /// Computes the support point of the Minkowski difference `a - b` toward the direction `dir`.
    pub fn from_colliders<A, B>(a: &A, b: &B, dir: &Vector<Real>) -> Self
    where
        A: ?Sized + Collider,
        B: ?Sized + Collider,
    {
        let sp1 = a.support_point(dir);
        let sp2 = b.support_point(&-*dir);

        SupportPoint::new(sp1, sp2)
    }

    /// The same point seen as a point of the Minkowski difference `b - a`.
    pub fn flipped(&self) -> Self {
        SupportPoint::new_with_point(-self.point, self.witness_b, self.witness_a)
    }
}

impl Sub<SupportPoint> for SupportPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: SupportPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
