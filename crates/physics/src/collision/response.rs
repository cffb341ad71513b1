//! Linear impulse response built on [`RigidQuad::impulse`].

use super::CollisionResult;
use crate::body::RigidQuad;

/// Push two colliding bodies apart along the contact normal.
///
/// `restitution` is the bounce coefficient in `[0, 1]`. Only linear velocity
/// changes; contacts that are already separating are left untouched.
/// Returns the impulse magnitude applied, or `None` if nothing was applied.
pub fn resolve_contact(
    a: &mut RigidQuad,
    b: &mut RigidQuad,
    result: &CollisionResult,
    restitution: f32,
) -> Option<f32> {
    let n = result.normal_first_to_second()?;
    if n.length_squared() == 0.0 {
        return None;
    }

    let rel_vel = b.velocity() - a.velocity();
    let vel_along_normal = rel_vel.dot(n);
    if vel_along_normal >= 0.0 {
        return None;
    }

    let inv_mass_sum = (a.inv_mass() + b.inv_mass()) * n.length_squared();
    let j = -(1.0 + restitution) * vel_along_normal / inv_mass_sum;

    a.impulse(j, -n);
    b.impulse(j, n);
    Some(j)
}
