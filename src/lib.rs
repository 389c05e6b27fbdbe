/*!
narrowphase3d
=============

**narrowphase3d** is a convex narrow-phase collision solver written with
the rust programming language.

Given two convex colliders exposing a support mapping, it decides whether they
overlap using the Gilbert-Johnson-Keerthi algorithm and, if they do, computes a
contact normal, a penetration depth and the contact face with the Expanding
Polytope Algorithm.

```
use narrowphase3d::math::Isometry;
use narrowphase3d::query::{solve, CollisionResult, EpaConfig};
use narrowphase3d::shape::{Ball, Positioned};

let a = Positioned::new(Isometry::identity(), Ball::new(1.0));
let b = Positioned::new(Isometry::translation(1.5, 0.0, 0.0), Ball::new(1.0));

match solve(&a, &b, &EpaConfig::default()) {
    CollisionResult::Penetrating(pen) => assert!((pen.depth - 0.5).abs() < 1.0e-3),
    other => panic!("unexpected result: {:?}", other),
}
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}
