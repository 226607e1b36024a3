//! Sketch orchestration.
//!
//! Owns the attached sketches and the elapsed-time accumulator, and fans
//! one external render-loop tick out to every sketch.

use super::{Sketch, TickContext};
use crate::spatial::Pose;

pub struct SketchManager {
    sketches: Vec<Box<dyn Sketch>>,
    elapsed_seconds: f32,
}

impl SketchManager {
    pub fn new() -> Self {
        Self {
            sketches: Vec::new(),
            elapsed_seconds: 0.0,
        }
    }

    /// Attaches a sketch; it is updated on every tick from now on.
    pub fn attach(&mut self, sketch: Box<dyn Sketch>) {
        self.sketches.push(sketch);
    }

    pub fn sketch_count(&self) -> usize {
        self.sketches.len()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    /// Advances elapsed time, then updates every sketch in attach order.
    ///
    /// Order between sketches is not significant (they own disjoint
    /// state) but all of them run before the frame is handed back.
    pub fn update(&mut self, delta_seconds: f32, pose: Pose) {
        self.elapsed_seconds += delta_seconds;
        let ctx = TickContext {
            pose,
            elapsed_seconds: self.elapsed_seconds,
        };
        for sketch in &mut self.sketches {
            sketch.update(&ctx);
        }
    }
}

impl Default for SketchManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingSketch {
        ticks: Rc<RefCell<Vec<f32>>>,
    }

    impl Sketch for CountingSketch {
        fn update(&mut self, ctx: &TickContext) {
            self.ticks.borrow_mut().push(ctx.elapsed_seconds);
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_elapsed_time_accumulates_across_sketches() {
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SketchManager::new();
        manager.attach(Box::new(CountingSketch {
            ticks: ticks.clone(),
        }));
        manager.attach(Box::new(CountingSketch {
            ticks: ticks.clone(),
        }));

        let pose = Pose::new(Point3::new(0.0, 0.0, 0.0), 0.0);
        manager.update(0.25, pose);
        manager.update(0.25, pose);

        assert_eq!(manager.elapsed_seconds(), 0.5);
        // Both sketches see the same elapsed time each tick.
        assert_eq!(*ticks.borrow(), vec![0.25, 0.25, 0.5, 0.5]);
    }
}
