//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// Everything is expressed in the local-space of the shape. Use [`Positioned`]
/// to place a shape in a shared frame and obtain a [`Collider`].
pub trait SupportMap {
    // Evaluates the support function of this shape.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// A point deep inside of this shape, used to seed the GJK search direction.
    ///
    /// Defaults to the local origin.
    fn local_center(&self) -> Point<Real> {
        Point::origin()
    }

    // Evaluates the support function of this shape transformed by `transform`.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}

/// A convex collider able to compute its support points in a frame shared with other colliders.
///
/// This is the only thing the narrow-phase needs to know about a shape. Implementations
/// must not mutate any state and must return the same point for the same direction.
pub trait Collider {
    /// The point of this collider maximizing its dot product with `dir`.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }

    /// A point inside of this collider, used to seed the GJK search direction.
    fn center(&self) -> Point<Real>;
}

impl<C: ?Sized + Collider> Collider for &C {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).support_point(dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        (**self).support_point_toward(dir)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        (**self).center()
    }
}

/// A support-mapped shape placed in the world by an isometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Positioned<S> {
    /// The position of the shape.
    pub position: Isometry<Real>,
    /// The shape, expressed in its local-space.
    pub shape: S,
}

impl<S> Positioned<S> {
    /// Places `shape` at `position`.
    #[inline]
    pub fn new(position: Isometry<Real>, shape: S) -> Self {
        Positioned { position, shape }
    }
}

impl<S: SupportMap> Collider for Positioned<S> {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.shape.support_point(&self.position, dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.support_point_toward(&self.position, dir)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.position * self.shape.local_center()
    }
}
