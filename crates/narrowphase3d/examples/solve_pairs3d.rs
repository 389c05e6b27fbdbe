extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use narrowphase3d::query::{CollisionResult, EpaConfig, NarrowPhase};
use narrowphase3d::shape::{Capsule, Positioned};

fn main() {
    // A row of capsules, each one overlapping its right neighbor.
    let capsules: Vec<_> = (0..8)
        .map(|i| {
            let pos = Isometry3::new(Vector3::new(i as f32 * 0.9, 0.0, 0.0), Vector3::zeros());
            Positioned::new(pos, Capsule::new_y(1.0, 0.5))
        })
        .collect();
    let pairs: Vec<_> = capsules.windows(2).map(|w| (w[0], w[1])).collect();

    let mut solver = NarrowPhase::new();
    let config = EpaConfig::default();

    for (i, result) in solver.solve_pairs(&pairs, &config).iter().enumerate() {
        match result {
            CollisionResult::Separated => println!("Pair {}: separated.", i),
            CollisionResult::Penetrating(pen) => {
                println!("Pair {}: depth {:.4} along {}", i, pen.depth, *pen.normal)
            }
            CollisionResult::Degenerate { reason, .. } => println!("Pair {}: {}", i, reason),
        }
    }
}
