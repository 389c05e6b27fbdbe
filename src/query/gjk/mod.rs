//! The GJK algorithm for intersection testing.

pub use self::gjk::{intersect, GjkConfig, GjkResult};
pub use self::simplex::{Simplex, SimplexKind, SimplexProjection};
pub use self::support_point::SupportPoint;

pub(crate) use self::simplex::closest_origin_on_triangle;

mod gjk;
mod simplex;
mod support_point;
