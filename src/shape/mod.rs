//! Shapes supported by the narrow-phase.
//!
//! Every shape here is convex and only needs to provide a support mapping.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::convex_hull::ConvexHull;
pub use self::cuboid::Cuboid;
pub use self::dilated::Dilated;
#[doc(inline)]
pub use self::support_map::{Collider, Positioned, SupportMap};

/// A cuboid dilated by a sphere (so it has round corners).
pub type RoundCuboid = Dilated<Cuboid>;

mod ball;
mod capsule;
mod convex_hull;
mod cuboid;
mod dilated;
mod support_map;
