//! Penetration depth computation using the Expanding Polytope Algorithm.

use crate::math::Real;
use crate::query::epa::{Edge, EpaConfig, Face};
use crate::query::gjk::{Simplex, SimplexKind, SupportPoint};
use crate::query::DegenerateReason;
use crate::shape::Collider;
use alloc::vec::Vec;

/// The face of the Minkowski difference closest to the origin, and its distance to the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaContact {
    /// The closest face of the polytope.
    pub face: Face,
    /// The penetration depth along the normal of `face`.
    pub depth: Real,
}

/// Results of the Expanding Polytope Algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EpaResult {
    /// The polytope converged toward the boundary of the Minkowski difference.
    Converged(EpaContact),
    /// The expansion stopped early.
    Degraded {
        /// Why the expansion stopped.
        reason: DegenerateReason,
        /// The closest face of the polytope when the expansion stopped, if there was one.
        best_effort: Option<EpaContact>,
    },
}

impl EpaResult {
    fn degraded(reason: DegenerateReason, best_effort: Option<EpaContact>) -> Self {
        log::debug!("EPA: expansion stopped early ({}).", reason);
        EpaResult::Degraded {
            reason,
            best_effort,
        }
    }
}

/// The Expanding Polytope Algorithm in 3D.
///
/// Starting from a GJK tetrahedron enclosing the origin, the polytope is grown toward the
/// boundary of the Minkowski difference of two colliders, one support point at a time:
///
/// 1. The face closest to the origin is selected.
/// 2. A support point is sampled along its normal. If it doesn't move the boundary away by
///    more than the tolerance, that face gives the penetration normal and depth.
/// 3. Otherwise, every face seeing the new point is removed. Their edges shared by two removed
///    faces cancel out, the others form the loose edges.
/// 4. Each loose edge is joined to the new point to close the polytope again.
///
/// The face and loose edge buffers are kept between calls so that an `Epa` reused across
/// queries does not allocate once it has warmed up.
#[derive(Clone, Debug, Default)]
pub struct Epa {
    faces: Vec<Face>,
    loose_edges: Vec<Edge>,
    new_faces: Vec<Face>,
}

impl Epa {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every face from the polytope.
    pub fn reset(&mut self) {
        self.faces.clear();
        self.loose_edges.clear();
        self.new_faces.clear();
    }

    /// The faces of the polytope left by the last call to [`Epa::penetration`].
    ///
    /// The polytope is closed even when the expansion stopped early: a step that can't be
    /// completed leaves it untouched.
    pub fn polytope(&self) -> &[Face] {
        &self.faces
    }

    /// Computes the penetration normal and depth of the colliders `a` and `b`.
    ///
    /// `simplex` must be the tetrahedron enclosing the origin found by
    /// [`crate::query::gjk::intersect`] for the same pair of colliders.
    ///
    /// The support distance along the normal of the closest face is an upper bound of the
    /// penetration depth, and the distance of that face a lower bound. The expansion stops
    /// once they are closer than `config.tolerance` (scaled by the depth when it exceeds one),
    /// or once the upper bound stopped improving for `config.max_stalled_iterations` steps.
    /// The contact reported is the one with the smallest upper bound seen.
    pub fn penetration<A, B>(
        &mut self,
        a: &A,
        b: &B,
        simplex: &Simplex,
        config: &EpaConfig,
    ) -> EpaResult
    where
        A: ?Sized + Collider,
        B: ?Sized + Collider,
    {
        self.reset();

        if simplex.kind() != Some(SimplexKind::Tetrahedron) {
            return EpaResult::degraded(DegenerateReason::InvalidSimplex, None);
        }

        if config.max_faces < 4 {
            return EpaResult::degraded(DegenerateReason::CapacityExhausted, None);
        }

        /*
         * Initialization.
         */
        // Faces of the tetrahedron and their opposite vertex.
        const FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [0, 2, 3, 1], [0, 3, 1, 2], [1, 3, 2, 0]];
        let pts = simplex.points();

        for [i, j, k, l] in FACES {
            let face = match Face::new(pts[i], pts[j], pts[k]) {
                Some(face) => face,
                None => return EpaResult::degraded(DegenerateReason::ZeroNormal, None),
            };

            let side = face.normal.dot(&(pts[l] - pts[i]));

            if side.abs() <= config.bias {
                // Flat tetrahedron: no face normal can point outward.
                return EpaResult::degraded(DegenerateReason::ZeroNormal, None);
            } else if side > 0.0 {
                self.faces.push(face.reversed());
            } else {
                self.faces.push(face);
            }
        }

        /*
         * Run the expansion.
         */
        let mut best: Option<EpaContact> = None;
        let mut stalled = 0;

        for niter in 0..config.max_iterations {
            let closest = self.closest_face();
            let min_dist = closest.distance();
            let tolerance = config.tolerance * min_dist.max(1.0);

            let support = SupportPoint::from_colliders_toward(a, b, &closest.normal);
            let sdist = support.point.coords.dot(&closest.normal);

            let improved = best.map_or(true, |best| sdist < best.depth - tolerance);
            let contact = match best {
                Some(best) if best.depth <= sdist => best,
                _ => EpaContact {
                    face: closest,
                    depth: sdist,
                },
            };
            best = Some(contact);
            stalled = if improved { 0 } else { stalled + 1 };

            if contact.depth - min_dist < tolerance {
                log::trace!("EPA: converged after {} iterations.", niter);
                return EpaResult::Converged(contact);
            }

            if config.max_stalled_iterations > 0 && stalled >= config.max_stalled_iterations {
                log::trace!(
                    "EPA: depth upper bound stalled after {} iterations (gap: {}).",
                    niter,
                    contact.depth - min_dist
                );
                return EpaResult::Converged(contact);
            }

            if let Err(reason) = self.expand(&support, config) {
                return EpaResult::degraded(reason, Some(contact));
            }
        }

        let best_effort = best.unwrap_or_else(|| {
            let closest = self.closest_face();
            EpaContact {
                face: closest,
                depth: closest.distance(),
            }
        });
        EpaResult::degraded(DegenerateReason::NonConvergence, Some(best_effort))
    }

    // Ties are resolved in favor of the first face.
    fn closest_face(&self) -> Face {
        let mut best = self.faces[0];
        let mut best_dist = best.distance();

        for face in &self.faces[1..] {
            let dist = face.distance();

            if dist < best_dist {
                best = *face;
                best_dist = dist;
            }
        }

        best
    }

    // Removes every face visible from `support` and patches the hole with faces
    // joining `support` to the loose edges.
    //
    // Nothing is modified if the step fails.
    fn expand(&mut self, support: &SupportPoint, config: &EpaConfig) -> Result<(), DegenerateReason> {
        self.loose_edges.clear();
        self.new_faces.clear();

        let mut num_visible = 0;

        for i in 0..self.faces.len() {
            let face = self.faces[i];

            if face.is_visible_from(&support.point) {
                num_visible += 1;

                for edge in face.edges() {
                    self.add_loose_edge(edge, config)?;
                }
            }
        }

        if self.faces.len() - num_visible + self.loose_edges.len() > config.max_faces {
            return Err(DegenerateReason::CapacityExhausted);
        }

        for edge in &self.loose_edges {
            let face = Face::new(edge.a, edge.b, *support).ok_or(DegenerateReason::ZeroNormal)?;

            if face.distance() < -config.bias {
                self.new_faces.push(face.reversed());
            } else {
                self.new_faces.push(face);
            }
        }

        self.faces.retain(|face| !face.is_visible_from(&support.point));
        self.faces.extend_from_slice(&self.new_faces);
        Ok(())
    }

    // An edge shared by two removed faces is interior to the hole: the second
    // occurrence cancels the first one.
    fn add_loose_edge(&mut self, edge: Edge, config: &EpaConfig) -> Result<(), DegenerateReason> {
        if let Some(pos) = self
            .loose_edges
            .iter()
            .position(|loose| loose.joins_same_points(&edge))
        {
            let _ = self.loose_edges.remove(pos);
            return Ok(());
        }

        if self.loose_edges.len() >= config.max_loose_edges {
            return Err(DegenerateReason::CapacityExhausted);
        }

        self.loose_edges.push(edge);
        Ok(())
    }
}
