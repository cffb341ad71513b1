#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Quad Physics
//!
//! A small 2D rigid-body core built around oriented rectangles.
//!
//! The crate models one body type, [`RigidQuad`], with mass and inertia,
//! pose, linear and angular velocity, and force/torque accumulators. Two
//! pairwise collision tests operate on it:
//!
//! -   **[`overlap`]:** separating-axis test. A cheap yes/no answer with an
//!     estimated minimum-translation normal and depth.
//! -   **[`collision`]:** corner-containment test. Finds a corner of one body
//!     inside the other and reports it as the contact point together with a
//!     normal estimate.
//!
//! The core does not own a loop or a clock. A driver runs each frame in this
//! order: accumulate forces, call [`RigidQuad::update`], run collision tests
//! on the pairs it cares about, and optionally respond with
//! [`RigidQuad::impulse`] (see [`collision::response`]).
//!
//! ```rust
//! use quad_physics::{overlap, RigidQuad, Vector2};
//!
//! let mut a = RigidQuad::new(Vector2::new(0.0, 0.0), 0.2, 0.2, 1.0, 0.0)?;
//! let b = RigidQuad::new(Vector2::new(0.05, 0.0), 0.2, 0.2, 1.0, 0.0)?;
//!
//! a.apply_force(Vector2::new(1.0, 0.0));
//! a.update(0.016, 0.1);
//! assert!(overlap(&a, &b).collided());
//! # Ok::<(), quad_physics::PhysicsError>(())
//! ```

pub mod body;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod vec2;

pub use body::{RigidQuad, CORNER_COUNT};
pub use collision::{collision, overlap, CollisionResult, CornerOwner};
pub use error::PhysicsError;
pub use vec2::{Vector2, NORMALIZE_EPSILON};
