//! The narrow-phase: GJK followed, on intersection, by EPA.

use crate::math::{Point, Real, Vector};
use crate::query::epa::{Epa, EpaConfig, EpaContact, EpaResult, Face};
use crate::query::gjk::{self, GjkConfig, GjkResult, Simplex};
use crate::query::DegenerateReason;
use crate::shape::Collider;
use alloc::vec::Vec;
use na::Unit;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The penetration of two colliders.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Penetration {
    /// The contact normal, pointing from the first collider toward the second.
    ///
    /// Translating the second collider by `normal * depth` separates both colliders.
    pub normal: Unit<Vector<Real>>,
    /// The penetration depth.
    pub depth: Real,
    /// The face of the Minkowski difference closest to the origin.
    ///
    /// Its support points carry the witnesses needed to recover contact points.
    pub contact_face: Face,
}

impl Penetration {
    /// The contact points on the first and the second collider.
    ///
    /// They are obtained by interpolating the witnesses of `self.contact_face` with the
    /// barycentric coordinates of its point closest to the origin.
    pub fn contact_points(&self) -> (Point<Real>, Point<Real>) {
        self.contact_face.witness_points()
    }

    /// The same penetration with the roles of both colliders exchanged.
    pub fn flipped(&self) -> Self {
        Penetration {
            normal: -self.normal,
            depth: self.depth,
            contact_face: self.contact_face.flipped(),
        }
    }
}

impl From<EpaContact> for Penetration {
    fn from(contact: EpaContact) -> Self {
        Penetration {
            normal: contact.face.normal,
            depth: contact.depth,
            contact_face: contact.face,
        }
    }
}

/// The outcome of a narrow-phase query on a pair of colliders.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CollisionResult {
    /// The colliders are disjoint or touching.
    Separated,
    /// The colliders are penetrating.
    Penetrating(Penetration),
    /// The solver could not reach a reliable conclusion.
    ///
    /// This is never reported as `Separated` so that solver failures are not silently
    /// mistaken for an absence of contact.
    Degenerate {
        /// Why the solver stopped.
        reason: DegenerateReason,
        /// An approximate penetration, if one was available when the solver stopped.
        best_effort: Option<Penetration>,
    },
}

impl CollisionResult {
    /// Is this `CollisionResult::Penetrating`?
    pub fn is_penetrating(&self) -> bool {
        matches!(self, CollisionResult::Penetrating(_))
    }

    /// Is this `CollisionResult::Separated`?
    pub fn is_separated(&self) -> bool {
        matches!(self, CollisionResult::Separated)
    }

    /// The penetration, if the colliders are known to be penetrating.
    pub fn penetration(&self) -> Option<&Penetration> {
        match self {
            CollisionResult::Penetrating(pen) => Some(pen),
            _ => None,
        }
    }

    /// Converts this result into a `Result`, turning degenerate outcomes into errors.
    pub fn into_penetration(self) -> Result<Option<Penetration>, DegenerateReason> {
        match self {
            CollisionResult::Separated => Ok(None),
            CollisionResult::Penetrating(pen) => Ok(Some(pen)),
            CollisionResult::Degenerate { reason, .. } => Err(reason),
        }
    }
}

/// A reusable narrow-phase solver.
///
/// It owns the GJK simplex and the EPA polytope so that solving many pairs in a row does not
/// allocate once the polytope buffers have grown. After a call to [`NarrowPhase::solve`], the
/// final simplex and polytope can be inspected, e.g., for debug rendering.
#[derive(Clone, Debug, Default)]
pub struct NarrowPhase {
    gjk: GjkConfig,
    simplex: Simplex,
    epa: Epa,
}

impl NarrowPhase {
    /// Creates a narrow-phase solver with the default GJK parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a narrow-phase solver with the given GJK parameters.
    pub fn with_gjk_config(gjk: GjkConfig) -> Self {
        NarrowPhase {
            gjk,
            ..Self::default()
        }
    }

    /// The GJK parameters of this solver.
    pub fn gjk_config(&self) -> &GjkConfig {
        &self.gjk
    }

    /// The GJK simplex left by the last call to `self.solve`.
    pub fn simplex(&self) -> &Simplex {
        &self.simplex
    }

    /// The EPA polytope left by the last call to `self.solve`.
    ///
    /// Empty if the last pair wasn't intersecting.
    pub fn polytope(&self) -> &[Face] {
        self.epa.polytope()
    }

    /// Computes the penetration of the colliders `a` and `b`.
    ///
    /// Penetrations not deeper than the GJK tolerance are reported as `Separated`.
    pub fn solve<A, B>(&mut self, a: &A, b: &B, config: &EpaConfig) -> CollisionResult
    where
        A: ?Sized + Collider,
        B: ?Sized + Collider,
    {
        self.epa.reset();

        match gjk::intersect(a, b, &self.gjk, &mut self.simplex) {
            GjkResult::Separated(_) => CollisionResult::Separated,
            GjkResult::NonConvergence => CollisionResult::Degenerate {
                reason: DegenerateReason::NonConvergence,
                best_effort: None,
            },
            GjkResult::Intersection => match self.epa.penetration(a, b, &self.simplex, config) {
                EpaResult::Converged(contact) if contact.depth <= self.gjk.tolerance => {
                    CollisionResult::Separated
                }
                EpaResult::Converged(contact) => CollisionResult::Penetrating(contact.into()),
                EpaResult::Degraded {
                    reason,
                    best_effort,
                } => CollisionResult::Degenerate {
                    reason,
                    best_effort: best_effort.map(Penetration::from),
                },
            },
        }
    }

    /// Solves every pair of `pairs`, in order.
    pub fn solve_pairs<A, B>(&mut self, pairs: &[(A, B)], config: &EpaConfig) -> Vec<CollisionResult>
    where
        A: Collider,
        B: Collider,
    {
        pairs
            .iter()
            .map(|(a, b)| self.solve(a, b, config))
            .collect()
    }

    /// Solves every pair of `pairs` in parallel.
    ///
    /// Each worker thread gets its own solver using the GJK parameters of `self`. The results
    /// are in the same order as `pairs`, and identical to those of `self.solve_pairs`.
    #[cfg(feature = "parallel")]
    pub fn solve_pairs_par<A, B>(&self, pairs: &[(A, B)], config: &EpaConfig) -> Vec<CollisionResult>
    where
        A: Collider + Sync,
        B: Collider + Sync,
    {
        let gjk = self.gjk;
        pairs
            .par_iter()
            .map_init(
                || NarrowPhase::with_gjk_config(gjk),
                |solver, (a, b)| solver.solve(a, b, config),
            )
            .collect()
    }
}

/// Computes the penetration of the colliders `a` and `b` with the default GJK parameters.
///
/// This allocates a new polytope at each call. Use a [`NarrowPhase`] to reuse it.
pub fn solve<A, B>(a: &A, b: &B, config: &EpaConfig) -> CollisionResult
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    NarrowPhase::new().solve(a, b, config)
}
