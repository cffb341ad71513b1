//! # Batch Integration
//!
//! Steps a slice of bodies by one frame. Each body is independent; this is a
//! convenience for drivers that hold several bodies.

use crate::body::RigidQuad;

/// Call [`RigidQuad::update`] on every body with the same step and decay.
pub fn update_all(bodies: &mut [RigidQuad], dt: f32, friction: f32) {
    for body in bodies.iter_mut() {
        body.update(dt, friction);
    }
}
