//! # Rigid Quad
//!
//! An oriented rectangular rigid body. The body owns its pose, velocity,
//! force/torque accumulators and a cache of its four world-space corners.
//!
//! Every write to `center` or `rotation` goes through [`RigidQuad::update_corners`],
//! so the cache always equals the body-local rectangle
//! `(±half_width, ±half_height)` rotated by `rotation` and translated by
//! `center`. Corners are kept in counter-clockwise winding order
//! (bottom-left, bottom-right, top-right, top-left), which the containment
//! test relies on.

use crate::error::PhysicsError;
use crate::vec2::Vector2;

/// Number of corners on a quad.
pub const CORNER_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct RigidQuad {
    width: f32,
    height: f32,
    half_width: f32,
    half_height: f32,

    mass: f32,
    inv_mass: f32,
    inertia: f32,
    inv_inertia: f32,

    center: Vector2,
    rotation: f32,

    velocity: Vector2,
    angular_velocity: f32,

    total_force: Vector2,
    total_torque: f32,

    corners: [Vector2; CORNER_COUNT],
}

impl RigidQuad {
    /// Create a body at rest.
    ///
    /// The moment of inertia is that of a solid rectangle about its center,
    /// `mass / 12 * (width² + height²)`.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidMass`] if `mass` is not positive and finite, or
    /// so small that its inverse or the inverse inertia overflows;
    /// [`PhysicsError::InvalidDimensions`] if either extent is not positive
    /// and finite.
    pub fn new(
        center: Vector2,
        width: f32,
        height: f32,
        mass: f32,
        rotation: f32,
    ) -> Result<Self, PhysicsError> {
        if !(mass > 0.0 && mass.is_finite()) {
            tracing::debug!(mass, "rejecting quad with invalid mass");
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            tracing::debug!(width, height, "rejecting quad with invalid dimensions");
            return Err(PhysicsError::InvalidDimensions { width, height });
        }

        let inertia = mass / 12.0 * (width * width + height * height);
        let (inv_mass, inv_inertia) = (1.0 / mass, 1.0 / inertia);
        if !(inertia > 0.0
            && inertia.is_finite()
            && inv_mass.is_finite()
            && inv_inertia.is_finite())
        {
            tracing::debug!(mass, inertia, "rejecting quad whose inverse mass overflows");
            return Err(PhysicsError::InvalidMass(mass));
        }

        let mut quad = Self {
            width,
            height,
            half_width: width * 0.5,
            half_height: height * 0.5,
            mass,
            inv_mass,
            inertia,
            inv_inertia,
            center,
            rotation,
            velocity: Vector2::ZERO,
            angular_velocity: 0.0,
            total_force: Vector2::ZERO,
            total_torque: 0.0,
            corners: [Vector2::ZERO; CORNER_COUNT],
        };
        quad.update_corners();

        tracing::debug!(?center, width, height, mass, rotation, "created quad");
        Ok(quad)
    }

    /// Apply a force through the center of mass. Contributes no torque.
    pub fn apply_force(&mut self, force: Vector2) {
        self.total_force += force;
    }

    /// Apply a force at a world-space point.
    ///
    /// The torque contribution uses the lever arm from the center to `point`,
    /// so a force whose line of action passes through the center adds none.
    pub fn apply_force_at(&mut self, force: Vector2, point: Vector2) {
        let lever = point - self.center;
        self.total_force += force;
        self.total_torque += lever.perp_dot(force);
    }

    /// Apply a pure torque (counter-clockwise positive).
    pub fn apply_torque(&mut self, torque: f32) {
        self.total_torque += torque;
    }

    /// Zero both accumulators immediately.
    pub fn clear_forces(&mut self) {
        self.total_force = Vector2::ZERO;
        self.total_torque = 0.0;
    }

    /// Advance the body by `dt` seconds with semi-implicit Euler, then decay
    /// the accumulators by `friction`.
    ///
    /// `friction` is a per-step decay factor in `[0, 1]`: `1` clears the
    /// accumulators after this step, `0` leaves them untouched.
    pub fn update(&mut self, dt: f32, friction: f32) {
        self.velocity += self.total_force * self.inv_mass * dt;
        self.center += self.velocity * dt;

        self.angular_velocity += self.total_torque * self.inv_inertia * dt;
        self.rotation += self.angular_velocity * dt;

        self.update_corners();

        // accumulators are consumed above, decay only afterwards
        self.total_force -= self.total_force * friction;
        self.total_torque -= self.total_torque * friction;
    }

    /// Change velocity instantly by `normal * (magnitude / mass)`.
    ///
    /// Position and accumulators are left alone; the new velocity takes effect
    /// on the next [`update`](Self::update).
    pub fn impulse(&mut self, magnitude: f32, normal: Vector2) {
        self.velocity += normal * (magnitude * self.inv_mass);
    }

    /// Teleport the body. Velocities and accumulators are kept.
    pub fn set_pose(&mut self, center: Vector2, rotation: f32) {
        self.center = center;
        self.rotation = rotation;
        self.update_corners();
    }

    pub fn set_velocity(&mut self, velocity: Vector2, angular_velocity: f32) {
        self.velocity = velocity;
        self.angular_velocity = angular_velocity;
    }

    /// Half-plane test against this body's edges in winding order.
    ///
    /// Points on an edge count as inside.
    #[must_use]
    pub fn contains_point(&self, p: Vector2) -> bool {
        self.edges().iter().all(|&(a, b)| edge_side(a, b, p) >= 0.0)
    }

    /// Edges as `(start, end)` corner pairs in winding order.
    #[must_use]
    pub fn edges(&self) -> [(Vector2, Vector2); CORNER_COUNT] {
        std::array::from_fn(|i| (self.corners[i], self.corners[(i + 1) % CORNER_COUNT]))
    }

    fn update_corners(&mut self) {
        let (hw, hh) = (self.half_width, self.half_height);
        let local = [
            Vector2::new(-hw, -hh),
            Vector2::new(hw, -hh),
            Vector2::new(hw, hh),
            Vector2::new(-hw, hh),
        ];

        let (sin, cos) = self.rotation.sin_cos();
        for (corner, l) in self.corners.iter_mut().zip(local) {
            corner.set(
                l.x * cos - l.y * sin + self.center.x,
                l.y * cos + l.x * sin + self.center.y,
            );
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn half_extents(&self) -> Vector2 {
        Vector2::new(self.half_width, self.half_height)
    }

    #[must_use]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[must_use]
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    #[must_use]
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    #[must_use]
    pub fn inv_inertia(&self) -> f32 {
        self.inv_inertia
    }

    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[must_use]
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    #[must_use]
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    #[must_use]
    pub fn total_force(&self) -> Vector2 {
        self.total_force
    }

    #[must_use]
    pub fn total_torque(&self) -> f32 {
        self.total_torque
    }

    /// # Panics
    ///
    /// Panics if `index >= CORNER_COUNT`.
    #[must_use]
    pub fn corner(&self, index: usize) -> Vector2 {
        self.corners[index]
    }

    #[must_use]
    pub fn corners(&self) -> &[Vector2; CORNER_COUNT] {
        &self.corners
    }
}

/// Signed half-plane value of `p` against the directed line `a -> b`.
///
/// Built from the implicit line equation `A x + B y + C = 0` with
/// `A = -(b.y - a.y)`, `B = b.x - a.x`, `C = -(A a.x + B a.y)`. Positive on the
/// left of the edge, which is the interior for counter-clockwise winding.
pub(crate) fn edge_side(a: Vector2, b: Vector2, p: Vector2) -> f32 {
    let coef_a = -(b.y - a.y);
    let coef_b = b.x - a.x;
    let coef_c = -(coef_a * a.x + coef_b * a.y);
    coef_a * p.x + coef_b * p.y + coef_c
}
