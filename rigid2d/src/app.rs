//! # rigid2d Application Logic
//!
//! Drives a [`quad_scene::Scene`] frame by frame. Each frame the scene
//! applies its forces, integrates, and runs the configured collision test;
//! this module only decides the time step, reports progress, and optionally
//! dumps the frame's line segments to a file for an external viewer.
//!
//! Two timing modes are available. The default uses a fixed `--dt`. With
//! `--realtime` the step is the measured wall-clock time between frames and
//! the loop sleeps to hold one frame per `--dt`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use quad_scene::{encode_vertices, Detector, FrameReport, Scene, SceneDef};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// JSON scene description; the built-in demo scene when omitted
    #[clap(short, long)]
    pub scene: Option<PathBuf>,

    /// Number of frames to run
    #[clap(short, long, default_value_t = 600)]
    pub frames: u64,

    /// Fixed time step in seconds (target frame time with --realtime)
    #[clap(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Override the scene's per-step force decay
    #[clap(long)]
    pub friction: Option<f32>,

    /// Collision test reported for each pair: sat or containment
    #[clap(short, long, default_value = "containment")]
    pub detector: Detector,

    /// Measure the step from a wall clock and pace frames in real time
    #[clap(long)]
    pub realtime: bool,

    /// Log a progress line every N frames
    #[clap(long, default_value_t = 60)]
    pub log_every: u64,

    /// Write each frame's line segments: a little-endian u32 vertex count
    /// followed by that many native-endian f32 (x, y) pairs
    #[clap(long)]
    pub dump: Option<PathBuf>,
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load the scene named by `args`, or the demo.
///
/// # Errors
///
/// Fails if the file cannot be read or does not describe a valid scene.
pub fn load_scene(args: &Args) -> Result<Scene> {
    let def = match &args.scene {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading scene {}", path.display()))?;
            SceneDef::from_json(&json)?
        }
        None => {
            tracing::info!("No scene given, using the built-in demo.");
            SceneDef::demo()
        }
    };

    let mut scene = def.into_scene()?;
    if let Some(friction) = args.friction {
        scene.set_friction(friction)?;
    }
    Ok(scene)
}

/// Run the frame loop.
///
/// # Errors
///
/// Returns any scene loading, stepping, or dump-file error.
pub fn run(args: &Args) -> Result<()> {
    anyhow::ensure!(args.dt > 0.0 && args.dt.is_finite(), "--dt must be positive");

    let mut scene = load_scene(args)?;
    let mut dump = args
        .dump
        .as_ref()
        .map(|path| {
            File::create(path)
                .map(BufWriter::new)
                .with_context(|| format!("creating dump file {}", path.display()))
        })
        .transpose()?;

    tracing::info!(
        "Starting {} frames with dt = {} using the {:?} detector...",
        args.frames,
        args.dt,
        args.detector
    );

    let mut clock = FrameClock::new(args.dt, args.realtime);
    let mut collided_frames = 0u64;
    for i in 0..args.frames {
        let dt = clock.tick();
        let report = scene
            .step(dt, args.detector)
            .with_context(|| format!("frame {i}"))?;

        if report.any_collision() {
            collided_frames += 1;
        }

        if let Some(out) = dump.as_mut() {
            write_frame(out, &scene, &report)?;
        }

        if args.log_every > 0 && (i + 1) % args.log_every == 0 {
            log_progress(&scene, &report);
        }
    }

    if let Some(mut out) = dump {
        out.flush().context("flushing dump file")?;
    }

    tracing::info!(
        "Finished {} frames, {} with a collision.",
        scene.frame(),
        collided_frames
    );
    for (name, body) in scene.names().iter().zip(scene.bodies()) {
        tracing::info!(
            "Final {name}: center = ({:.4}, {:.4}), rotation = {:.4}",
            body.center().x,
            body.center().y,
            body.rotation()
        );
    }

    Ok(())
}

fn log_progress(scene: &Scene, report: &FrameReport) {
    let Some(first) = scene.bodies().first() else {
        tracing::info!("Frame {} complete. Scene has no bodies.", report.frame + 1);
        return;
    };
    tracing::info!(
        "Frame {} complete. {}: center = ({:.4}, {:.4}), rotation = {:.4}, collided = {}",
        report.frame + 1,
        scene.names()[0],
        first.center().x,
        first.center().y,
        first.rotation(),
        report.any_collision()
    );
    for contact in report.contacts.iter().filter(|c| c.result.collided()) {
        tracing::info!(
            "  {} / {}: point = {:?}, normal = {:?}",
            scene.names()[contact.a],
            scene.names()[contact.b],
            contact.result.point(),
            contact.result.normal()
        );
    }
}

fn write_frame(out: &mut impl Write, scene: &Scene, report: &FrameReport) -> Result<()> {
    let vertices = scene.line_vertices(report);
    let count = u32::try_from(vertices.len()).context("too many vertices in one frame")?;
    out.write_all(&count.to_le_bytes())?;
    out.write_all(encode_vertices(&vertices))?;
    Ok(())
}

/// Supplies the per-frame time step.
struct FrameClock {
    fixed: f32,
    realtime: bool,
    frame_duration: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    fn new(fixed: f32, realtime: bool) -> Self {
        Self {
            fixed,
            realtime,
            frame_duration: Duration::from_secs_f32(fixed),
            last: None,
        }
    }

    /// The step for the frame about to run. In real-time mode this first
    /// sleeps off whatever is left of the previous frame's budget.
    fn tick(&mut self) -> f32 {
        if !self.realtime {
            return self.fixed;
        }

        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return self.fixed;
        };

        let spent = last.elapsed();
        if spent < self.frame_duration {
            std::thread::sleep(self.frame_duration - spent);
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        self.last = Some(now);
        if dt > 0.0 {
            dt
        } else {
            self.fixed
        }
    }
}
