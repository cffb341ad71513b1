use std::collections::HashMap;

use anyhow::{bail, ensure, Context, Result};
use quad_physics::{RigidQuad, Vector2, CORNER_COUNT};
use serde::Deserialize;

use crate::control::{Control, Direction};
use crate::scene::Scene;
use crate::tether::Tether;

#[derive(Debug, Clone, Deserialize)]
pub struct SceneDef {
    /// Per-step decay of accumulated force and torque, in `[0, 1]`.
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default = "default_restitution")]
    pub restitution: f32,
    /// Apply an impulse response after each detected contact.
    #[serde(default)]
    pub resolve: bool,
    pub bodies: Vec<BodyDef>,
    #[serde(default)]
    pub tethers: Vec<TetherDef>,
    #[serde(default)]
    pub controls: Vec<ControlDef>,
    /// Body id pairs tested for collision every frame.
    #[serde(default)]
    pub pairs: Vec<[String; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyDef {
    pub id: String,
    pub center: [f32; 2],
    pub width: f32,
    pub height: f32,
    pub mass: f32,
    #[serde(default)]
    pub rotation: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TetherDef {
    pub body_a: String,
    pub body_b: String,
    #[serde(default)]
    pub corner_a: usize,
    #[serde(default)]
    pub corner_b: usize,
    #[serde(default = "default_max_length")]
    pub max_length: f32,
    #[serde(default = "default_slack")]
    pub slack: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlDef {
    pub body: String,
    pub direction: Direction,
    #[serde(default)]
    pub start: u64,
    #[serde(default = "default_end")]
    pub end: u64,
    #[serde(default = "default_magnitude")]
    pub magnitude: f32,
}

/// Gentler than the default magnitude: there is no velocity damping, so a
/// full unit of thrust sends the demo player far off screen.
const DEMO_THRUST: f32 = 0.1;

fn default_friction() -> f32 {
    0.1
}

fn default_restitution() -> f32 {
    0.5
}

fn default_max_length() -> f32 {
    0.15
}

fn default_slack() -> f32 {
    0.1
}

fn default_end() -> u64 {
    u64::MAX
}

fn default_magnitude() -> f32 {
    1.0
}

impl SceneDef {
    /// Parse a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid scene description.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene description")
    }

    /// The player, tethered attachment and free obstacle of the demo app.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            friction: default_friction(),
            restitution: default_restitution(),
            resolve: false,
            bodies: vec![
                BodyDef {
                    id: "player".into(),
                    center: [0.0, 0.0],
                    width: 0.15,
                    height: 0.2,
                    mass: 0.2,
                    rotation: 0.0,
                },
                BodyDef {
                    id: "attach".into(),
                    center: [0.15, 0.2],
                    width: 0.05,
                    height: 0.1,
                    mass: 0.07,
                    rotation: 0.0,
                },
                BodyDef {
                    id: "obstacle".into(),
                    center: [-0.3, -0.3],
                    width: 0.2,
                    height: 0.3,
                    mass: 0.3,
                    rotation: 0.0,
                },
            ],
            tethers: vec![TetherDef {
                body_a: "player".into(),
                body_b: "attach".into(),
                corner_a: 0,
                corner_b: 0,
                max_length: default_max_length(),
                slack: default_slack(),
            }],
            controls: vec![
                ControlDef {
                    body: "player".into(),
                    direction: Direction::Right,
                    start: 0,
                    end: 120,
                    magnitude: DEMO_THRUST,
                },
                ControlDef {
                    body: "player".into(),
                    direction: Direction::Backward,
                    start: 90,
                    end: 240,
                    magnitude: DEMO_THRUST,
                },
            ],
            pairs: vec![["player".into(), "attach".into()]],
        }
    }

    /// Validate the description and build the bodies.
    ///
    /// # Errors
    ///
    /// Fails on duplicate or unknown body ids, invalid body parameters,
    /// out-of-range corners, self-referencing tethers or pairs, and a
    /// friction or restitution outside `[0, 1]`.
    pub fn into_scene(self) -> Result<Scene> {
        ensure_unit_interval("friction", self.friction)?;
        ensure_unit_interval("restitution", self.restitution)?;

        let mut names = Vec::with_capacity(self.bodies.len());
        let mut bodies = Vec::with_capacity(self.bodies.len());
        let mut map: HashMap<String, usize> = HashMap::new();
        for def in self.bodies {
            if map.contains_key(&def.id) {
                bail!("duplicate body id {}", def.id);
            }
            let body = RigidQuad::new(
                Vector2::from(def.center),
                def.width,
                def.height,
                def.mass,
                def.rotation,
            )
            .with_context(|| format!("body {}", def.id))?;
            map.insert(def.id.clone(), bodies.len());
            bodies.push(body);
            names.push(def.id);
        }

        let lookup = |id: &str| -> Result<usize> {
            map.get(id)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("unknown body {id}"))
        };

        let mut tethers = Vec::with_capacity(self.tethers.len());
        for t in self.tethers {
            let body_a = lookup(&t.body_a)?;
            let body_b = lookup(&t.body_b)?;
            ensure!(body_a != body_b, "tether on {} connects a body to itself", t.body_a);
            ensure!(
                t.corner_a < CORNER_COUNT && t.corner_b < CORNER_COUNT,
                "tether {}-{} corner out of range",
                t.body_a,
                t.body_b
            );
            ensure!(
                t.max_length > 0.0 && t.max_length.is_finite() && t.slack >= 0.0,
                "tether {}-{} needs a positive max_length and non-negative slack",
                t.body_a,
                t.body_b
            );
            ensure!(
                t.slack < t.max_length,
                "tether {}-{} slack {} must be shorter than max_length {}",
                t.body_a,
                t.body_b,
                t.slack,
                t.max_length
            );
            tethers.push(Tether {
                body_a,
                corner_a: t.corner_a,
                body_b,
                corner_b: t.corner_b,
                max_length: t.max_length,
                slack: t.slack,
            });
        }

        let mut controls = Vec::with_capacity(self.controls.len());
        for c in self.controls {
            controls.push(Control {
                body: lookup(&c.body)?,
                direction: c.direction,
                start: c.start,
                end: c.end,
                magnitude: c.magnitude,
            });
        }

        let mut pairs = Vec::with_capacity(self.pairs.len());
        for [a, b] in self.pairs {
            let (ia, ib) = (lookup(&a)?, lookup(&b)?);
            ensure!(ia != ib, "pair {a}-{b} tests a body against itself");
            pairs.push((ia, ib));
        }

        tracing::info!(
            bodies = bodies.len(),
            tethers = tethers.len(),
            controls = controls.len(),
            pairs = pairs.len(),
            "scene loaded"
        );

        Ok(Scene {
            names,
            bodies,
            tethers,
            controls,
            pairs,
            friction: self.friction,
            restitution: self.restitution,
            resolve: self.resolve,
            frame: 0,
        })
    }
}

pub(crate) fn ensure_unit_interval(what: &str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        bail!("{what} must be within [0, 1], got {value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scene_builds() {
        let scene = SceneDef::demo().into_scene().unwrap();
        assert_eq!(scene.names(), ["player", "attach", "obstacle"]);
        assert_eq!(scene.pairs(), [(0, 1)]);
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let def = SceneDef::from_json(
            r#"{ "bodies": [ { "id": "a", "center": [0, 0], "width": 1, "height": 1, "mass": 1 } ] }"#,
        )
        .unwrap();
        assert!((def.friction - 0.1).abs() < f32::EPSILON);
        assert!(!def.resolve);
        assert_eq!(def.bodies[0].rotation, 0.0);
        assert!(def.tethers.is_empty());
    }

    #[test]
    fn rejects_friction_out_of_range() {
        let mut def = SceneDef::demo();
        def.friction = 1.5;
        assert!(def.into_scene().is_err());
    }

    #[test]
    fn rejects_slack_not_shorter_than_max_length() {
        let mut def = SceneDef::demo();
        def.tethers[0].slack = 0.5;
        let err = def.into_scene().unwrap_err();
        assert!(format!("{err:#}").contains("shorter than max_length"));

        let mut def = SceneDef::demo();
        def.tethers[0].slack = def.tethers[0].max_length;
        assert!(def.into_scene().is_err());
    }

    #[test]
    fn rejects_zero_mass_body() {
        let mut def = SceneDef::demo();
        def.bodies[1].mass = 0.0;
        let err = def.into_scene().unwrap_err();
        assert!(format!("{err:#}").contains("invalid mass"));
    }
}
