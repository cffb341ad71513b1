use quad_physics::{RigidQuad, Vector2};
use serde::Deserialize;

/// Steering directions, mapped to unit forces in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn force(self) -> Vector2 {
        match self {
            Self::Left => Vector2::new(-1.0, 0.0),
            Self::Right => Vector2::new(1.0, 0.0),
            Self::Forward => Vector2::new(0.0, 1.0),
            Self::Backward => Vector2::new(0.0, -1.0),
        }
    }
}

/// A direction held on one body for the frames `start..end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub body: usize,
    pub direction: Direction,
    pub start: u64,
    pub end: u64,
    pub magnitude: f32,
}

impl Control {
    #[must_use]
    pub fn is_active(&self, frame: u64) -> bool {
        (self.start..self.end).contains(&frame)
    }
}

/// Sum the controls active this frame per body and push each body through
/// its center.
pub(crate) fn apply_controls(controls: &[Control], bodies: &mut [RigidQuad], frame: u64) {
    let mut thrust = vec![Vector2::ZERO; bodies.len()];
    for c in controls.iter().filter(|c| c.is_active(frame)) {
        thrust[c.body] += c.direction.force() * c.magnitude;
    }
    for (body, force) in bodies.iter_mut().zip(thrust) {
        if force != Vector2::ZERO {
            body.apply_force(force);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(direction: Direction, start: u64, end: u64, magnitude: f32) -> Control {
        Control {
            body: 0,
            direction,
            start,
            end,
            magnitude,
        }
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut bodies = vec![RigidQuad::new(Vector2::ZERO, 1.0, 1.0, 1.0, 0.0).unwrap()];
        let controls = [
            held(Direction::Left, 0, 10, 1.0),
            held(Direction::Right, 0, 10, 1.0),
            held(Direction::Forward, 0, 10, 2.0),
        ];
        apply_controls(&controls, &mut bodies, 3);
        assert_eq!(bodies[0].total_force(), Vector2::new(0.0, 2.0));
    }

    #[test]
    fn window_is_half_open() {
        let c = held(Direction::Backward, 2, 4, 1.0);
        assert!(!c.is_active(1));
        assert!(c.is_active(2));
        assert!(c.is_active(3));
        assert!(!c.is_active(4));
    }
}
