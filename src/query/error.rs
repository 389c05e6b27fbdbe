use crate::math::Real;

/// Why the narrow-phase could not produce a reliable result for a pair of colliders.
///
/// This is not a failure of the caller: degenerate outcomes are returned as data, often
/// together with a best-effort contact that can still be used (or skipped for one step).
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum DegenerateReason {
    /// GJK or EPA exhausted its iteration budget before meeting its termination condition.
    #[error("non-convergence")]
    NonConvergence,
    /// The EPA polytope reached its configured face or loose-edge capacity mid-expansion.
    #[error("capacity-exhausted")]
    CapacityExhausted,
    /// Collinear or duplicate support points produced a face without a normal.
    #[error("zero-normal")]
    ZeroNormal,
    /// EPA was given a simplex that isn't a tetrahedron.
    #[error("invalid-simplex")]
    InvalidSimplex,
}

/// Error returned when validating a solver configuration.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    /// Tolerances must be finite and strictly positive.
    #[error("the tolerance must be finite and strictly positive, got {0}")]
    InvalidTolerance(Real),
    /// The face orientation bias must be finite and non-negative.
    #[error("the bias must be finite and non-negative, got {0}")]
    InvalidBias(Real),
    /// The polytope must at least be able to hold the initial tetrahedron.
    #[error("at least 4 faces are required, got {0}")]
    TooFewFaces(usize),
    /// Expanding a polytope creates at least 3 loose edges.
    #[error("at least 3 loose edges are required, got {0}")]
    TooFewLooseEdges(usize),
    /// An iteration budget is zero.
    #[error("the iteration budget must not be zero")]
    NoIterations,
}
