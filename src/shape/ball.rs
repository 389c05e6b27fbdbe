//! Support mapping based Ball shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use na::Unit;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn support_point(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        self.support_point_toward(m, &unit_or_y(dir))
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<Real>, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(m.translation.vector) + **dir * self.radius
    }

    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point_toward(&unit_or_y(dir))
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}

// A null direction has no meaningful support point; any point of the surface will do
// as long as it is always the same one.
#[inline]
pub(crate) fn unit_or_y(dir: &Vector<Real>) -> Unit<Vector<Real>> {
    Unit::try_new(*dir, 0.0).unwrap_or_else(Vector::y_axis)
}
