//! Corner-containment test with contact point and normal estimate.

use super::{CollisionResult, CornerOwner};
use crate::body::{edge_side, RigidQuad};
use crate::vec2::Vector2;

/// Test the corners of each body against the other.
///
/// Corners of `a` are scanned against `b` first, then corners of `b` against
/// `a`. The first corner found inside the other body ends the search: it
/// becomes the contact point, and the offset from its projection on the
/// nearest edge of the penetrated body, normalized and negated, becomes the
/// normal.
#[must_use]
pub fn collision(a: &RigidQuad, b: &RigidQuad) -> CollisionResult {
    let found = a
        .corners()
        .iter()
        .find_map(|&p| penetration(p, b).map(|n| (p, n, CornerOwner::First)))
        .or_else(|| {
            b.corners()
                .iter()
                .find_map(|&p| penetration(p, a).map(|n| (p, n, CornerOwner::Second)))
        });

    match found {
        Some((point, inward, owner)) => {
            let normal = -inward.normalized();
            tracing::trace!(?point, ?normal, ?owner, "corner contact");
            CollisionResult::Contact {
                point,
                normal,
                owner,
            }
        }
        None => CollisionResult::Separated,
    }
}

/// If `p` lies inside `body`, the un-normalized vector from its projection on
/// the closest edge line to `p`.
fn penetration(p: Vector2, body: &RigidQuad) -> Option<Vector2> {
    let mut best: Option<(f32, Vector2)> = None;

    for (start, end) in body.edges() {
        if edge_side(start, end, p) < 0.0 {
            return None;
        }

        let offset = p - closest_on_line(start, end, p);
        let dist = offset.length_squared();
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, offset));
        }
    }

    best.map(|(_, offset)| offset)
}

fn closest_on_line(start: Vector2, end: Vector2, p: Vector2) -> Vector2 {
    match (p - start).project_onto(end - start) {
        Ok(along) => start + along,
        // zero-length edge collapses to its start point
        Err(_) => start,
    }
}
