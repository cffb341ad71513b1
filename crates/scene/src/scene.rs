use std::str::FromStr;

use anyhow::{ensure, Result};
use quad_physics::collision::response::resolve_contact;
use quad_physics::{collision, integrator, overlap, CollisionResult, RigidQuad};

use crate::control::{apply_controls, Control};
use crate::def::ensure_unit_interval;
use crate::tether::{pair_mut, Tether};

/// Which collision test a frame reports for its pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detector {
    /// Separating-axis overlap: normal and depth, no contact point.
    Sat,
    /// Corner containment: contact point and normal.
    #[default]
    Containment,
}

impl Detector {
    #[must_use]
    pub fn detect(self, a: &RigidQuad, b: &RigidQuad) -> CollisionResult {
        match self {
            Self::Sat => overlap(a, b),
            Self::Containment => collision(a, b),
        }
    }
}

impl FromStr for Detector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sat" => Ok(Self::Sat),
            "containment" => Ok(Self::Containment),
            other => anyhow::bail!("unknown detector {other:?}, expected sat or containment"),
        }
    }
}

/// Collision outcome for one tested pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    pub a: usize,
    pub b: usize,
    pub result: CollisionResult,
    /// Impulse magnitude applied in response, when response is enabled.
    pub impulse: Option<f32>,
}

/// Everything a frame produced besides the body poses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub contacts: Vec<PairContact>,
}

impl FrameReport {
    #[must_use]
    pub fn any_collision(&self) -> bool {
        self.contacts.iter().any(|c| c.result.collided())
    }
}

/// A set of named bodies plus the forces and collision pairs that drive them.
#[derive(Debug, Clone)]
pub struct Scene {
    pub(crate) names: Vec<String>,
    pub(crate) bodies: Vec<RigidQuad>,
    pub(crate) tethers: Vec<Tether>,
    pub(crate) controls: Vec<Control>,
    pub(crate) pairs: Vec<(usize, usize)>,
    pub(crate) friction: f32,
    pub(crate) restitution: f32,
    pub(crate) resolve: bool,
    pub(crate) frame: u64,
}

impl Scene {
    /// Run one frame of `dt` seconds.
    ///
    /// Order: scripted controls, tethers, integration of every body,
    /// collision tests on the configured pairs with `detector`, then the
    /// impulse response if enabled.
    ///
    /// # Errors
    ///
    /// Fails if `dt` is not positive and finite.
    pub fn step(&mut self, dt: f32, detector: Detector) -> Result<FrameReport> {
        ensure!(dt > 0.0 && dt.is_finite(), "time step must be positive, got {dt}");

        apply_controls(&self.controls, &mut self.bodies, self.frame);
        for tether in &self.tethers {
            tether.apply(&mut self.bodies);
        }

        integrator::update_all(&mut self.bodies, dt, self.friction);

        let mut contacts = Vec::with_capacity(self.pairs.len());
        for &(ia, ib) in &self.pairs {
            let (a, b) = pair_mut(&mut self.bodies, ia, ib);
            let result = detector.detect(a, b);
            let impulse = if self.resolve {
                resolve_contact(a, b, &result, self.restitution)
            } else {
                None
            };
            if result.collided() {
                tracing::debug!(
                    frame = self.frame,
                    a = %self.names[ia],
                    b = %self.names[ib],
                    ?result,
                    ?impulse,
                    "collision"
                );
            }
            contacts.push(PairContact {
                a: ia,
                b: ib,
                result,
                impulse,
            });
        }

        let report = FrameReport {
            frame: self.frame,
            contacts,
        };
        self.frame += 1;
        Ok(report)
    }

    /// Override the per-step force decay.
    ///
    /// # Errors
    ///
    /// Fails if `friction` is outside `[0, 1]`.
    pub fn set_friction(&mut self, friction: f32) -> Result<()> {
        ensure_unit_interval("friction", friction)?;
        self.friction = friction;
        Ok(())
    }

    #[must_use]
    pub fn body(&self, name: &str) -> Option<&RigidQuad> {
        self.index_of(name).map(|i| &self.bodies[i])
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    #[must_use]
    pub fn bodies(&self) -> &[RigidQuad] {
        &self.bodies
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn tethers(&self) -> &[Tether] {
        &self.tethers
    }

    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    #[must_use]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Number of frames stepped so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneDef;

    #[test]
    fn rejects_non_positive_dt() {
        let mut scene = SceneDef::demo().into_scene().unwrap();
        assert!(scene.step(0.0, Detector::Sat).is_err());
        assert!(scene.step(f32::NAN, Detector::Sat).is_err());
        assert_eq!(scene.frame(), 0);
    }

    #[test]
    fn step_reports_every_pair() {
        let mut scene = SceneDef::demo().into_scene().unwrap();
        let report = scene.step(1.0 / 60.0, Detector::Containment).unwrap();
        assert_eq!(report.frame, 0);
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(scene.frame(), 1);
    }

    #[test]
    fn detector_parses() {
        assert_eq!("sat".parse::<Detector>().unwrap(), Detector::Sat);
        assert_eq!("containment".parse::<Detector>().unwrap(), Detector::Containment);
        assert!("gjk".parse::<Detector>().is_err());
    }

    #[test]
    fn friction_override_is_validated() {
        let mut scene = SceneDef::demo().into_scene().unwrap();
        assert!(scene.set_friction(-0.1).is_err());
        scene.set_friction(1.0).unwrap();
        assert_eq!(scene.friction(), 1.0);
    }
}
