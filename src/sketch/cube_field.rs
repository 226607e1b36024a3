//! Edge-triggered regenerating cube installation.
//!
//! Entering the zone while facing the installation throws the current
//! layout away and draws a fresh one — once per visit. Re-arming
//! requires a full exit, so lingering inside can never retrigger it.
//! The cubes bob on their own phases whether or not anyone is watching.

use cgmath::{Point3, Vector3};
use log::info;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::palette::{color_from_hex, PALETTES};
use super::{Sketch, TickContext};
use crate::effects::ReflectionTarget;
use crate::spatial::{normalize_yaw, TriggerZone};

pub const INSTANCE_COUNT: usize = 20;
const SCALE_FACTOR: f32 = 0.5;
const BOB_AMPLITUDE: f32 = 0.75;
const BASE_BOB_SPEED: f32 = 0.1;

/// Whether the trigger is ready to fire.
///
/// Exiting the zone is the only path back to `Armed`; yaw is irrelevant
/// on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Armed,
    Fired,
}

/// Half-open yaw interval `[lo, hi)` over yaw normalized into `[0, 2π)`.
///
/// Windows may wrap across zero; `lo == hi` is the empty window.
#[derive(Debug, Clone, Copy)]
pub struct YawWindow {
    pub lo: f32,
    pub hi: f32,
}

impl YawWindow {
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, yaw: f32) -> bool {
        let yaw = normalize_yaw(yaw);
        if self.lo <= self.hi {
            yaw >= self.lo && yaw < self.hi
        } else {
            yaw >= self.lo || yaw < self.hi
        }
    }
}

/// One decorative cube.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeInstance {
    pub id: String,
    pub position: Point3<f32>,
    pub scaling: Vector3<f32>,
    pub color: [f32; 3],
    pub phase: f32,
    pub y_offset: f32,
}

/// The regenerable instance set, parented under one anchor node.
///
/// The first entry is the template: its mesh identity is reused across
/// regenerations while every other instance is disposed and recreated.
#[derive(Debug)]
pub struct Installation {
    anchor: String,
    instances: Vec<CubeInstance>,
    generation: u64,
}

impl Installation {
    pub fn new(anchor: &str) -> Self {
        Self {
            anchor: anchor.to_string(),
            instances: Vec::new(),
            generation: 0,
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn instances(&self) -> &[CubeInstance] {
        &self.instances
    }

    /// How many layouts have been drawn so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ids of the current instances, template first.
    pub fn instance_ids(&self) -> Vec<String> {
        self.instances.iter().map(|inst| inst.id.clone()).collect()
    }

    /// Throws the layout away and draws a fresh one.
    ///
    /// Picks one palette for the whole set, then gives every instance a
    /// new uniformly-random position in [-1, 1]^3, a new non-uniform
    /// scale (sign included, so some cubes mirror), a new bob phase, and
    /// a color drawn from the palette.
    pub fn regenerate(&mut self, rng: &mut ChaCha8Rng) {
        let palette = PALETTES.choose(rng).copied().unwrap_or(PALETTES[0]);
        let template_id = self
            .instances
            .first()
            .map(|inst| inst.id.clone())
            .unwrap_or_else(|| format!("{}_box", self.anchor));

        self.instances.clear();
        for i in 0..INSTANCE_COUNT {
            let id = if i == 0 {
                template_id.clone()
            } else {
                format!("{}_box{}", self.anchor, i - 1)
            };
            let color = color_from_hex(palette.choose(rng).copied().unwrap_or("#ffffff"));
            self.instances.push(CubeInstance {
                id,
                position: Point3::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                ),
                scaling: Vector3::new(
                    rng.random_range(-1.0..1.0) * SCALE_FACTOR,
                    rng.random_range(-1.0..1.0) * SCALE_FACTOR,
                    rng.random_range(-1.0..1.0) * SCALE_FACTOR,
                ),
                color,
                phase: rng.random_range(-1.0..1.0),
                y_offset: 0.0,
            });
        }
        self.generation += 1;
    }

    /// Bobs every instance on its own phase.
    ///
    /// Speed cycles through three tiers by index so groups visibly
    /// desynchronize.
    pub fn animate(&mut self, elapsed_seconds: f32) {
        for (i, inst) in self.instances.iter_mut().enumerate() {
            let speed = BASE_BOB_SPEED * ((i % 3) + 1) as f32;
            inst.y_offset = (inst.phase + elapsed_seconds * speed).sin() * BOB_AMPLITUDE;
        }
    }
}

/// Edge-triggered sketch around an [`Installation`].
pub struct CubeField {
    zone: TriggerZone,
    window: YawWindow,
    state: TriggerState,
    installation: Installation,
    rng: ChaCha8Rng,
    reflection: Box<dyn ReflectionTarget>,
}

impl CubeField {
    /// Builds the sketch and draws the opening layout, so the gallery
    /// never shows an empty plinth. Pass a seed to make every layout
    /// reproducible.
    pub fn new(
        zone: TriggerZone,
        window: YawWindow,
        reflection: Box<dyn ReflectionTarget>,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        let mut installation = Installation::new("S2Anchor");
        installation.regenerate(&mut rng);

        let mut field = Self {
            zone,
            window,
            state: TriggerState::Armed,
            installation,
            rng,
            reflection,
        };
        field.push_render_list();
        field
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn installation(&self) -> &Installation {
        &self.installation
    }

    fn push_render_list(&mut self) {
        self.reflection
            .set_render_list(self.installation.instance_ids());
    }

    fn fire(&mut self) {
        self.installation.regenerate(&mut self.rng);
        self.push_render_list();
        info!(
            "cube field regenerated (generation {})",
            self.installation.generation()
        );
    }
}

impl Sketch for CubeField {
    fn update(&mut self, ctx: &TickContext) {
        // Containment is recomputed from scratch each frame, never
        // carried over.
        let inside = self.zone.contains(ctx.pose.position);
        match self.state {
            TriggerState::Armed if inside && self.window.contains(ctx.pose.yaw) => {
                self.state = TriggerState::Fired;
                self.fire();
            }
            TriggerState::Fired if !inside => {
                self.state = TriggerState::Armed;
            }
            _ => {}
        }
        self.installation.animate(ctx.elapsed_seconds);
    }

    fn name(&self) -> &str {
        "cube field"
    }
}
