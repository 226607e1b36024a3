//! Hue color-grade with fade smoothing.

use std::cell::RefCell;
use std::rc::Rc;

const SAMPLE_WINDOW: usize = 50;
const ENABLED_WEIGHT: f32 = 85.0;

/// The hue-shift entry point a gradient controller drives once per tick.
pub trait HueControl {
    /// Feeds one per-frame sample: whether the effect is active, and the
    /// hue (degrees, 0–359) it should show. Callers pass the last
    /// computed hue while disabled so the effect can ease out on it.
    fn set_hue(&mut self, enabled: bool, hue: f32);
}

// The scene and a controller share one grade handle; the model is
// single-threaded and frame-driven, so borrows never nest.
impl<T: HueControl> HueControl for Rc<RefCell<T>> {
    fn set_hue(&mut self, enabled: bool, hue: f32) {
        self.borrow_mut().set_hue(enabled, hue);
    }
}

/// Hue grade that averages the last 50 samples.
///
/// Each enabled sample contributes a fixed weight, a disabled one
/// contributes zero, and the effect intensity is the running average of
/// the window — gradual fade-in and fade-out instead of a step change.
pub struct SmoothedHueGrade {
    samples: [f32; SAMPLE_WINDOW],
    cursor: usize,
    hue: f32,
}

impl SmoothedHueGrade {
    pub fn new() -> Self {
        Self {
            samples: [0.0; SAMPLE_WINDOW],
            cursor: 0,
            hue: 0.0,
        }
    }

    /// Current effect intensity, 0 when idle up to the full enabled
    /// weight after a whole window inside a zone.
    pub fn intensity(&self) -> f32 {
        self.samples.iter().sum::<f32>() / SAMPLE_WINDOW as f32
    }

    /// Latest hue fed in, retained across disabled ticks.
    pub fn hue(&self) -> f32 {
        self.hue
    }
}

impl HueControl for SmoothedHueGrade {
    fn set_hue(&mut self, enabled: bool, hue: f32) {
        self.hue = hue;
        self.samples[self.cursor] = if enabled { ENABLED_WEIGHT } else { 0.0 };
        self.cursor = (self.cursor + 1) % SAMPLE_WINDOW;
    }
}

impl Default for SmoothedHueGrade {
    fn default() -> Self {
        Self::new()
    }
}
