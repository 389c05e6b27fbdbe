use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns `None` if `pts` is empty.
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let (first, rest) = pts.split_first()?;
    let denom = 1.0 / pts.len() as Real;
    let mut res = *first * denom;

    for pt in rest {
        res += pt.coords * denom;
    }

    Some(res)
}
