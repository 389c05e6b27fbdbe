//! Narrow-phase geometric queries between convex colliders.
//!
//! The main entry points are:
//!
//! * [`query::solve()`](solve) to compute the penetration of two colliders once.
//! * [`NarrowPhase`] to solve many pairs while reusing the solver buffers, and inspect the
//!   final GJK simplex and EPA polytope.
//!
//! The two stages of the solver are also available on their own in the [`gjk`] and [`epa`]
//! modules.

pub use self::epa::EpaConfig;
pub use self::error::{ConfigError, DegenerateReason};
pub use self::gjk::GjkConfig;
pub use self::narrow_phase::{solve, CollisionResult, NarrowPhase, Penetration};

pub mod epa;
mod error;
pub mod gjk;
mod narrow_phase;
