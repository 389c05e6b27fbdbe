//! The EPA algorithm for penetration depth computation.

pub use self::config::EpaConfig;
pub use self::epa::{Epa, EpaContact, EpaResult};
pub use self::polytope::{Edge, Face};

mod config;
mod epa;
mod polytope;
