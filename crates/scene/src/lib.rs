#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Quad Scene
//!
//! JSON scene descriptions for [`quad_physics`] bodies and the driver that
//! runs one frame of them.
//!
//! A scene names its bodies, the tethers between them, scripted steering
//! controls, and the body pairs to test for collision each frame.
//! [`Scene::step`] performs the frame in the order the physics core requires:
//! forces first, then integration, then collision tests, then the optional
//! impulse response.

mod control;
mod def;
mod render;
mod scene;
mod tether;

pub use control::{Control, Direction};
pub use def::{BodyDef, ControlDef, SceneDef, TetherDef};
pub use render::{encode_vertices, CONTACT_MARKER_SIZE, NORMAL_MARKER_LENGTH};
pub use scene::{Detector, FrameReport, PairContact, Scene};
pub use tether::Tether;
