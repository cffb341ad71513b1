//! Separating-axis overlap test for two oriented boxes.

use super::CollisionResult;
use crate::body::{RigidQuad, CORNER_COUNT};
use crate::vec2::Vector2;

/// A rectangle's parallel edges share an axis, so two per body suffice.
const AXES_PER_BODY: usize = 2;

/// Test two bodies for overlap with the separating-axis theorem.
///
/// Projects both bodies onto the edge normals of `a` and `b` and exits on the
/// first axis whose intervals are disjoint. When every axis overlaps, the axis
/// with the smallest overlap becomes the normal (oriented from `a` toward `b`)
/// and that overlap becomes the depth. No contact point is produced.
#[must_use]
pub fn overlap(a: &RigidQuad, b: &RigidQuad) -> CollisionResult {
    let mut min_overlap = f32::INFINITY;
    let mut min_axis = Vector2::ZERO;

    for axis in edge_normals(a).into_iter().chain(edge_normals(b)) {
        if axis == Vector2::ZERO {
            continue;
        }

        let (min_a, max_a) = project(a.corners(), axis);
        let (min_b, max_b) = project(b.corners(), axis);

        if max_a < min_b || min_a > max_b {
            return CollisionResult::Separated;
        }

        let overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap < min_overlap {
            min_overlap = overlap;
            min_axis = axis;
        }
    }

    if (b.center() - a.center()).dot(min_axis) < 0.0 {
        min_axis.negate();
    }

    tracing::trace!(normal = ?min_axis, depth = min_overlap, "separating-axis overlap");
    CollisionResult::Overlap {
        normal: min_axis,
        depth: min_overlap,
    }
}

/// Unit normals of the first two edges, i.e. the perpendiculars of the
/// bottom and right edges in winding order.
fn edge_normals(body: &RigidQuad) -> [Vector2; AXES_PER_BODY] {
    let c = body.corners();
    std::array::from_fn(|i| (c[i + 1] - c[i]).perpendicular().normalized())
}

fn project(corners: &[Vector2; CORNER_COUNT], axis: Vector2) -> (f32, f32) {
    corners.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), c| {
        let d = c.dot(axis);
        (lo.min(d), hi.max(d))
    })
}
