//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK operates on the **Minkowski difference** `A - B` of two convex colliders: they overlap
//! if, and only if, this difference contains the origin. Instead of building the difference
//! explicitly, GJK grows and shrinks a simplex of [`SupportPoint`]s inside of it, moving
//! toward the origin at each iteration, until either:
//!
//! - the simplex becomes a tetrahedron enclosing the origin (the colliders intersect), or
//! - a support point fails to pass the origin (a separating axis has been found).
//!
//! The final tetrahedron is the seed of the Expanding Polytope Algorithm, see [`crate::query::epa`].

use arrayvec::ArrayVec;
use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{Simplex, SimplexProjection, SupportPoint};
use crate::query::ConfigError;
use crate::shape::Collider;

/// Parameters of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkConfig {
    /// Distance below which the origin is considered to lie on the Minkowski difference
    /// boundary. Contacts with a penetration depth smaller than this are reported as separated.
    pub tolerance: Real,
    /// The maximum number of support points evaluated before giving up.
    pub max_iterations: usize,
}

impl Default for GjkConfig {
    fn default() -> Self {
        GjkConfig {
            tolerance: 1.0e-5,
            max_iterations: 64,
        }
    }
}

impl GjkConfig {
    /// Sets the tolerance of the intersection test.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of iterations of the intersection test.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that these parameters can be used by [`intersect`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }

        Ok(())
    }
}

/// Results of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GjkResult {
    /// The colliders are intersecting.
    ///
    /// The simplex passed to [`intersect`] is a tetrahedron enclosing the origin.
    Intersection,
    /// The colliders are disjoint, or touching within the tolerance.
    ///
    /// The unit vector is a separating axis, pointing from the first collider toward the second.
    Separated(Unit<Vector<Real>>),
    /// The iteration limit was hit, or the simplex could not be grown any further, before any
    /// conclusion was reached.
    NonConvergence,
}

impl GjkResult {
    /// Is this an [`GjkResult::Intersection`]?
    pub fn is_intersection(&self) -> bool {
        matches!(self, GjkResult::Intersection)
    }
}

/// Tests whether the colliders `a` and `b` intersect.
///
/// `simplex` is used as a workspace. On `GjkResult::Intersection`, it contains a tetrahedron
/// of the Minkowski difference `a - b` enclosing the origin.
///
/// The computation is fully deterministic: the same inputs always lead to the same sequence of
/// support queries and the same result.
pub fn intersect<A, B>(a: &A, b: &B, config: &GjkConfig, simplex: &mut Simplex) -> GjkResult
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    simplex.clear();

    let mut dir = Unit::try_new(b.center() - a.center(), crate::math::DEFAULT_EPSILON)
        .unwrap_or_else(Vector::x_axis);
    // Distance from the origin to the simplex at the last projection.
    let mut max_bound = Real::MAX;
    // The feature touching the origin, and how many of its orthogonal directions were tried.
    let mut touching: Option<(ArrayVec<Point<Real>, 4>, usize)> = None;

    for niter in 0..config.max_iterations {
        let support = SupportPoint::from_colliders_toward(a, b, &dir);

        if support.point.coords.dot(&dir) <= config.tolerance {
            // The support plane orthogonal to `dir` doesn't pass the origin.
            return GjkResult::Separated(dir);
        }

        if !simplex.add_point(support) {
            // No progress: the support point is already part of the simplex.
            if touching.is_some() {
                if let Some(next) = next_touching_direction(simplex, &mut touching) {
                    dir = next;
                    continue;
                }
            } else if max_bound < Real::MAX && max_bound > config.tolerance {
                return GjkResult::Separated(dir);
            }

            log::debug!(
                "GJK: failed to grow the simplex at iteration {} (simplex: {:?}).",
                niter,
                simplex.kind()
            );
            return GjkResult::NonConvergence;
        }

        match simplex.project_origin_and_reduce(config.tolerance) {
            SimplexProjection::Enclosed => return GjkResult::Intersection,
            SimplexProjection::Closest(proj) => {
                let dist = proj.coords.norm();

                if dist >= max_bound {
                    // The upper bound didn't decrease: the simplex can't get any closer to
                    // the origin, which lies out of the Minkowski difference.
                    log::trace!("GJK: no progress at iteration {} (distance: {}).", niter, dist);
                    return GjkResult::Separated(dir);
                }

                max_bound = dist;
                touching = None;
                dir = match Unit::try_new(-proj.coords, 0.0) {
                    Some(dir) => dir,
                    None => return GjkResult::NonConvergence,
                };
            }
            SimplexProjection::Touching => {
                max_bound = Real::MAX;
                dir = match next_touching_direction(simplex, &mut touching) {
                    Some(dir) => dir,
                    None => {
                        log::debug!("GJK: degenerate simplex touching the origin.");
                        return GjkResult::NonConvergence;
                    }
                };
            }
        }
    }

    log::debug!(
        "GJK: no conclusion reached after {} iterations.",
        config.max_iterations
    );
    GjkResult::NonConvergence
}

// The next direction, orthogonal to the simplex, along which to search for a support point.
//
// The count of tried directions restarts whenever the simplex differs from the last
// touching feature. Returns `None` once all of them have been tried.
fn next_touching_direction(
    simplex: &Simplex,
    touching: &mut Option<(ArrayVec<Point<Real>, 4>, usize)>,
) -> Option<Unit<Vector<Real>>> {
    let is_same_feature = matches!(
        touching,
        Some((feature, _)) if feature.len() == simplex.len()
            && feature.iter().zip(simplex.points()).all(|(pt, vtx)| *pt == vtx.point)
    );

    if !is_same_feature {
        *touching = Some((simplex.points().iter().map(|vtx| vtx.point).collect(), 0));
    }

    let tried = &mut touching.as_mut()?.1;
    let dir = *simplex.orthogonal_directions().get(*tried)?;
    *tried += 1;
    Some(Unit::new_unchecked(dir))
}
