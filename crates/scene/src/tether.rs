use quad_physics::{RigidQuad, Vector2};

/// An elastic rope between a corner of one body and a corner of another.
///
/// While the corners are within `max_length` nothing happens. Beyond it the
/// rope vector, shortened by `slack`, pulls both corners toward each other,
/// producing torque through each body's lever arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tether {
    pub body_a: usize,
    pub corner_a: usize,
    pub body_b: usize,
    pub corner_b: usize,
    pub max_length: f32,
    pub slack: f32,
}

impl Tether {
    /// The two endpoints, in world space.
    #[must_use]
    pub fn endpoints(&self, bodies: &[RigidQuad]) -> (Vector2, Vector2) {
        (
            bodies[self.body_a].corner(self.corner_a),
            bodies[self.body_b].corner(self.corner_b),
        )
    }

    /// Accumulate the rope forces on both bodies. Returns whether the rope
    /// was taut.
    pub fn apply(&self, bodies: &mut [RigidQuad]) -> bool {
        let (end_a, end_b) = self.endpoints(bodies);
        let mut rope = end_a - end_b;
        if rope.magnitude() <= self.max_length {
            return false;
        }

        rope -= rope.normalized() * self.slack;

        let (a, b) = pair_mut(bodies, self.body_a, self.body_b);
        b.apply_force_at(rope, end_b);
        a.apply_force_at(-rope, end_a);
        true
    }
}

/// Two distinct mutable bodies out of one slice.
///
/// # Panics
///
/// Panics if `i == j` or either index is out of bounds.
pub(crate) fn pair_mut(
    bodies: &mut [RigidQuad],
    i: usize,
    j: usize,
) -> (&mut RigidQuad, &mut RigidQuad) {
    assert_ne!(i, j, "a pair needs two distinct bodies");
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(gap: f32) -> Vec<RigidQuad> {
        vec![
            RigidQuad::new(Vector2::ZERO, 0.2, 0.2, 1.0, 0.0).unwrap(),
            RigidQuad::new(Vector2::new(gap, 0.0), 0.2, 0.2, 1.0, 0.0).unwrap(),
        ]
    }

    fn tether() -> Tether {
        Tether {
            body_a: 0,
            corner_a: 0,
            body_b: 1,
            corner_b: 0,
            max_length: 0.15,
            slack: 0.1,
        }
    }

    #[test]
    fn slack_rope_does_nothing() {
        let mut b = bodies(0.1);
        assert!(!tether().apply(&mut b));
        assert_eq!(b[0].total_force(), Vector2::ZERO);
        assert_eq!(b[1].total_force(), Vector2::ZERO);
    }

    #[test]
    fn taut_rope_pulls_bodies_together() {
        let mut b = bodies(1.0);
        assert!(tether().apply(&mut b));
        // corners 1.0 apart, shortened by 0.1
        assert!((b[0].total_force().x - 0.9).abs() < 1e-5);
        assert!((b[1].total_force().x + 0.9).abs() < 1e-5);
        // bottom-left corners pulled sideways: torque on both
        assert!(b[0].total_torque() != 0.0);
        assert!(b[1].total_torque() != 0.0);
    }

    #[test]
    fn barely_taut_rope_still_pulls_inward() {
        // corners 0.16 apart, just past max_length
        let mut b = bodies(0.16);
        assert!(tether().apply(&mut b));
        assert!(b[0].total_force().x > 0.0);
        assert!(b[1].total_force().x < 0.0);
        assert!((b[0].total_force().x - 0.06).abs() < 1e-5);
    }

    #[test]
    fn pair_mut_either_order() {
        let mut b = bodies(1.0);
        let (x, y) = pair_mut(&mut b, 1, 0);
        assert_eq!(x.center().x, 1.0);
        assert_eq!(y.center().x, 0.0);
    }
}
