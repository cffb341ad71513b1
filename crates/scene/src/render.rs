//! Line-list extraction for whatever draws the scene.
//!
//! Nothing here touches a graphics API. A frame becomes a flat list of
//! vertex pairs, each pair one line segment.

use quad_physics::{Vector2, CORNER_COUNT};

use crate::scene::{FrameReport, Scene};

/// Half-length of the cross drawn on a contact point.
pub const CONTACT_MARKER_SIZE: f32 = 0.1;
/// Length of the segment drawn along a contact normal.
pub const NORMAL_MARKER_LENGTH: f32 = 0.15;

impl Scene {
    /// Segments for the current frame: every body outline, every tether, and
    /// for each contact with a point, a cross and the normal.
    #[must_use]
    pub fn line_vertices(&self, report: &FrameReport) -> Vec<Vector2> {
        let capacity = self.bodies.len() * CORNER_COUNT * 2 + self.tethers.len() * 2;
        let mut out = Vec::with_capacity(capacity);

        for body in &self.bodies {
            for (start, end) in body.edges() {
                out.push(start);
                out.push(end);
            }
        }

        for tether in &self.tethers {
            let (a, b) = tether.endpoints(&self.bodies);
            out.push(a);
            out.push(b);
        }

        for contact in &report.contacts {
            let Some(p) = contact.result.point() else {
                continue;
            };
            let dx = Vector2::new(CONTACT_MARKER_SIZE, 0.0);
            let dy = Vector2::new(0.0, CONTACT_MARKER_SIZE);
            out.extend([p - dx, p + dx, p - dy, p + dy]);

            if let Some(n) = contact.result.normal() {
                out.extend([p, p + n * NORMAL_MARKER_LENGTH]);
            }
        }

        out
    }
}

/// View a vertex list as raw native-endian `f32` pairs.
#[must_use]
pub fn encode_vertices(vertices: &[Vector2]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
