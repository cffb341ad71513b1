//! # Collision Detection
//!
//! Pairwise tests between two [`RigidQuad`](crate::RigidQuad) bodies.
//!
//! - [`overlap`] is the separating-axis test: cheap, answers yes/no and
//!   estimates the minimum-translation normal and depth.
//! - [`collision`] is the corner-containment test: more expensive, but it
//!   yields an actual contact point.
//!
//! Both always return a well-formed [`CollisionResult`]; "no contact" is
//! [`CollisionResult::Separated`], never an error.

mod containment;
mod sat;
pub mod response;

pub use containment::collision;
pub use sat::overlap;

use crate::vec2::Vector2;

/// Which body of the tested pair owned the penetrating corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerOwner {
    /// A corner of the first argument lies inside the second.
    First,
    /// A corner of the second argument lies inside the first.
    Second,
}

/// Outcome of a single pairwise test.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CollisionResult {
    #[default]
    Separated,
    /// Separating-axis overlap. `normal` is the unit axis of least overlap,
    /// oriented from the first body toward the second; `depth` is that
    /// overlap.
    Overlap { normal: Vector2, depth: f32 },
    /// A corner found inside the other body. `normal` is unit length (or zero
    /// when the corner sits exactly on an edge) and points out of the
    /// penetrated body, toward the corner's owner.
    Contact {
        point: Vector2,
        normal: Vector2,
        owner: CornerOwner,
    },
}

impl CollisionResult {
    #[must_use]
    pub fn collided(&self) -> bool {
        !matches!(self, Self::Separated)
    }

    #[must_use]
    pub fn point(&self) -> Option<Vector2> {
        match *self {
            Self::Contact { point, .. } => Some(point),
            _ => None,
        }
    }

    #[must_use]
    pub fn normal(&self) -> Option<Vector2> {
        match *self {
            Self::Separated => None,
            Self::Overlap { normal, .. } | Self::Contact { normal, .. } => Some(normal),
        }
    }

    /// The contact normal re-oriented to point from the first body toward
    /// the second, whichever test produced it.
    #[must_use]
    pub fn normal_first_to_second(&self) -> Option<Vector2> {
        match *self {
            Self::Separated => None,
            Self::Overlap { normal, .. }
            | Self::Contact {
                normal,
                owner: CornerOwner::Second,
                ..
            } => Some(normal),
            Self::Contact {
                normal,
                owner: CornerOwner::First,
                ..
            } => Some(-normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_has_no_geometry() {
        let r = CollisionResult::default();
        assert!(!r.collided());
        assert_eq!(r.point(), None);
        assert_eq!(r.normal(), None);
    }

    #[test]
    fn contact_normal_orientation() {
        let r = CollisionResult::Contact {
            point: Vector2::ZERO,
            normal: Vector2::X,
            owner: CornerOwner::First,
        };
        assert_eq!(r.normal_first_to_second(), Some(-Vector2::X));
        assert_eq!(r.point(), Some(Vector2::ZERO));
    }
}
