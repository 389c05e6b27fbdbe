use crate::math::Real;
use crate::query::ConfigError;

/// Parameters of the Expanding Polytope Algorithm.
///
/// All the tuning constants of the penetration solver live here so that they can be chosen,
/// and tested, by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaConfig {
    /// The expansion stops once the upper and lower bounds of the penetration depth are
    /// closer than this. Scaled by the depth when it is larger than one.
    pub tolerance: Real,
    /// New faces whose plane passes behind the origin by more than this are reversed.
    pub bias: Real,
    /// The maximum number of faces of the polytope.
    pub max_faces: usize,
    /// The maximum number of loose edges collected during one expansion step.
    pub max_loose_edges: usize,
    /// The maximum number of expansion steps.
    pub max_iterations: usize,
    /// The number of consecutive expansion steps that don't improve the upper bound of the
    /// penetration depth by more than the tolerance, after which the best contact found is
    /// accepted. Zero disables this criterion.
    ///
    /// Needed when the Minkowski difference is curved all around the origin, e.g., for nearly
    /// concentric balls, where the polytope would need a huge number of faces to converge.
    pub max_stalled_iterations: usize,
}

impl Default for EpaConfig {
    fn default() -> Self {
        EpaConfig {
            tolerance: 1.0e-4,
            bias: 1.0e-6,
            max_faces: 2048,
            max_loose_edges: 256,
            max_iterations: 1024,
            max_stalled_iterations: 256,
        }
    }
}

impl EpaConfig {
    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the face orientation bias.
    pub fn with_bias(mut self, bias: Real) -> Self {
        self.bias = bias;
        self
    }

    /// Sets the polytope face capacity.
    pub fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Sets the loose edge capacity.
    pub fn with_max_loose_edges(mut self, max_loose_edges: usize) -> Self {
        self.max_loose_edges = max_loose_edges;
        self
    }

    /// Sets the maximum number of expansion steps.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of expansion steps without progress after which the best contact is
    /// accepted.
    pub fn with_max_stalled_iterations(mut self, max_stalled_iterations: usize) -> Self {
        self.max_stalled_iterations = max_stalled_iterations;
        self
    }

    /// Checks that these parameters can be used by EPA.
    ///
    /// The solver never panics on invalid parameters, but too small capacities or budgets
    /// make every penetration query degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }

        if !(self.bias >= 0.0 && self.bias.is_finite()) {
            return Err(ConfigError::InvalidBias(self.bias));
        }

        if self.max_faces < 4 {
            return Err(ConfigError::TooFewFaces(self.max_faces));
        }

        if self.max_loose_edges < 3 {
            return Err(ConfigError::TooFewLooseEdges(self.max_loose_edges));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }

        Ok(())
    }
}
