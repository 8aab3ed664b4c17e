//! Grid placement of the active bodies with bounded overlap correction.
//!
//! Bodies land in a square-ish grid centered on the origin (z = 0), spaced by
//! the largest active radius. Any candidate that would overlap an
//! already-placed body is pushed directly away from the offender and the scan
//! restarts, up to [`MAX_NUDGE_ATTEMPTS`] times; after that the position is
//! accepted as-is. Dense selections may therefore retain residual overlap —
//! callers must treat clearance as best-effort, and `Placement::nudges`
//! records how much correction each body needed.

use crate::constants::{MAX_NUDGE_ATTEMPTS, MIN_CLEARANCE, NUDGE_EXTRA, SPACING_FACTOR};
use glam::Vec3;
use smallvec::SmallVec;

use crate::catalog::Body;

/// Final position assigned to one active body, plus the radius it was placed
/// with and the number of overlap corrections applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub radius: f32,
    pub nudges: u32,
}

/// Place `bodies` in input order. Output length and order match the input;
/// an empty input yields an empty output. Pure function of its argument.
pub fn compute_layout(bodies: &[&Body]) -> Vec<Placement> {
    if bodies.is_empty() {
        return Vec::new();
    }

    let max_radius = bodies.iter().map(|b| b.radius()).fold(0.0_f32, f32::max);
    let spacing = max_radius * SPACING_FACTOR;

    let n = bodies.len();
    let cols = (n as f32).sqrt().ceil() as usize;
    let rows = n as f32 / cols as f32;

    let mut placed: SmallVec<[Placement; 16]> = SmallVec::with_capacity(n);
    for (i, body) in bodies.iter().enumerate() {
        let row = (i / cols) as f32;
        let col = (i % cols) as f32;
        let mut position = Vec3::new(
            (col - (cols as f32 - 1.0) / 2.0) * spacing,
            -(row - (rows - 1.0) / 2.0) * spacing,
            0.0,
        );
        let radius = body.radius();

        let mut nudges = 0;
        'rescan: while nudges < MAX_NUDGE_ATTEMPTS {
            for other in placed.iter() {
                let clearance = radius + other.radius + MIN_CLEARANCE;
                let dist = position.distance(other.position);
                if dist < clearance {
                    // Push away from the first offender and re-check everyone.
                    let dir = if dist > f32::EPSILON {
                        (position - other.position) / dist
                    } else {
                        Vec3::X
                    };
                    position += dir * (clearance - dist + NUDGE_EXTRA);
                    nudges += 1;
                    continue 'rescan;
                }
            }
            break;
        }
        if nudges >= MAX_NUDGE_ATTEMPTS {
            log::debug!(
                "[layout] nudge budget exhausted for {} ({} bodies active)",
                body.name,
                n
            );
        }

        // Placed bodies are never revisited.
        placed.push(Placement {
            position,
            radius,
            nudges,
        });
    }

    placed.into_vec()
}
