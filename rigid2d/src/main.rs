//! # rigid2d
//!
//! Entry point for the headless scene runner.
//!
//! Loads a JSON scene (or the built-in demo), steps it for a number of
//! frames, and logs body poses and collisions through `tracing`. Set
//! `RUST_LOG=debug` to see every detected contact.

mod app;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = app::Args::parse();
    app::init_logging();
    app::run(&args)
}
