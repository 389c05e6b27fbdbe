//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::wops::{WBasis, WSign};

mod ccw_face_normal;
mod center;
mod wops;
