use crate::math::{Point, Real, Vector};
use crate::shape::ball::unit_or_y;
use crate::shape::SupportMap;
use na::Unit;

/// The Minkowski sum of a shape and a ball.
///
/// This is how rounded shapes (round cuboids, swept spheres, etc.) are represented.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Dilated<S> {
    /// The shape involved in the Minkowski sum.
    pub shape: S,
    /// The radius of the ball involved in the Minkoski sum.
    pub radius: Real,
}

impl<S> Dilated<S> {
    /// Rounds `shape` by `radius`.
    #[inline]
    pub fn new(shape: S, radius: Real) -> Self {
        Dilated { shape, radius }
    }
}

impl<S: SupportMap> SupportMap for Dilated<S> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point_toward(&unit_or_y(dir))
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.local_support_point_toward(dir) + **dir * self.radius
    }

    #[inline]
    fn local_center(&self) -> Point<Real> {
        self.shape.local_center()
    }
}
