// src/sketch/mod.rs
//! Zone-triggered sketches
//!
//! A sketch is a small stateful controller the render loop ticks once
//! per frame. Each one watches the viewer's pose against a trigger zone
//! and drives a visual-effect handle; state lives in explicit struct
//! fields, never in captured closures.

pub mod cube_field;
pub mod hue_walk;
pub mod manager;
pub mod palette;

pub use cube_field::{CubeField, CubeInstance, Installation, TriggerState, YawWindow};
pub use hue_walk::HueWalk;
pub use manager::SketchManager;

use crate::spatial::Pose;

/// Per-tick snapshot handed to every sketch.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Viewer pose sampled once at the top of the frame.
    pub pose: Pose,
    /// Seconds since the installation started.
    pub elapsed_seconds: f32,
}

/// A controller updated once per render-loop tick.
///
/// Sketches never reach into engine internals, only the capability
/// handles they were given at install time.
pub trait Sketch {
    /// Advances the sketch by one frame.
    fn update(&mut self, ctx: &TickContext);

    /// Name for logs and diagnostics.
    fn name(&self) -> &str;
}
