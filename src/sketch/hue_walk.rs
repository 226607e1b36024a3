//! Proximity-gradient sketch.
//!
//! Maps how far the viewer has walked into a zone onto a hue parameter
//! and drives the color-grade handle every frame. Outside the zone the
//! last computed hue rides along with `enabled = false` so the effect
//! eases out instead of snapping to zero.

use cgmath::{MetricSpace, Point3};
use log::debug;

use super::{Sketch, TickContext};
use crate::effects::HueControl;
use crate::scene::{Material, Scene};
use crate::spatial::{range_map, TriggerZone};

const HUE_MAX: f32 = 359.0;
const CAPTION: &str = "WHAT COLOUR IS YOUR WORLD?";
const ARROW_GLYPH: &str = "➔";

pub struct HueWalk {
    zone: TriggerZone,
    start: Point3<f32>,
    total_distance: f32,
    hue: f32,
    effect: Box<dyn HueControl>,
}

impl HueWalk {
    /// Creates the sketch over `zone`, with the gradient axis running
    /// from `start` to `end` in zone-local space.
    pub fn new(
        zone: TriggerZone,
        start: Point3<f32>,
        end: Point3<f32>,
        effect: Box<dyn HueControl>,
    ) -> Self {
        Self {
            zone,
            start,
            total_distance: start.distance(end),
            hue: 0.0,
            effect,
        }
    }

    /// Default gradient axis: the zone's entry edge at z = 1 to its far
    /// edge at z = -3.5.
    pub fn with_default_axis(zone: TriggerZone, effect: Box<dyn HueControl>) -> Self {
        Self::new(
            zone,
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -3.5),
            effect,
        )
    }

    /// Dresses the zone with its optional signage meshes: a caption and
    /// an arrow pointing down the gradient. A missing mesh just leaves
    /// that piece out for the session.
    pub fn install_signage(scene: &mut Scene) {
        label_mesh(scene, "S1Text", CAPTION);
        label_mesh(scene, "S1Arrow", ARROW_GLYPH);
    }

    /// Last computed hue (degrees, 0–359).
    pub fn hue(&self) -> f32 {
        self.hue
    }
}

fn label_mesh(scene: &mut Scene, name: &str, text: &str) {
    if scene.find_object(name).is_none() {
        debug!("signage mesh {:?} not in this scene, skipping", name);
        return;
    }
    let material_id = format!("{}_label", name);
    scene.add_material(Material::new(&material_id, [0.0, 0.0, 0.0, 1.0], 0.0, 1.0).unlit());
    if let Some(object) = scene.find_object_mut(name) {
        object.set_material(&material_id);
        object.set_caption(text);
    }
}

impl Sketch for HueWalk {
    fn update(&mut self, ctx: &TickContext) {
        let Some(local) = self.zone.to_local(ctx.pose.position) else {
            self.effect.set_hue(false, self.hue);
            return;
        };
        if self.zone.bounds().contains_footprint(local) {
            let distance = (self.start.z - local.z).abs();
            self.hue = range_map(distance, 0.0, self.total_distance, 0.0, HUE_MAX);
            self.effect.set_hue(true, self.hue);
        } else {
            self.effect.set_hue(false, self.hue);
        }
    }

    fn name(&self) -> &str {
        "hue walk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{Aabb, Pose};
    use cgmath::Matrix4;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingGrade {
        calls: Vec<(bool, f32)>,
    }

    impl HueControl for RecordingGrade {
        fn set_hue(&mut self, enabled: bool, hue: f32) {
            self.calls.push((enabled, hue));
        }
    }

    fn corridor_zone() -> TriggerZone {
        TriggerZone::new(
            Aabb::new(Point3::new(-1.0, 0.0, -3.5), Point3::new(1.0, 0.0, 1.0)),
            Matrix4::from_scale(1.0),
        )
    }

    fn tick(sketch: &mut HueWalk, position: Point3<f32>) {
        sketch.update(&TickContext {
            pose: Pose::new(position, 0.0),
            elapsed_seconds: 0.0,
        });
    }

    #[test]
    fn test_hue_preserved_after_exit() {
        let grade = Rc::new(RefCell::new(RecordingGrade::default()));
        let mut sketch = HueWalk::new(
            corridor_zone(),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -3.5),
            Box::new(grade.clone()),
        );

        // Walk halfway in, then step outside.
        tick(&mut sketch, Point3::new(0.0, 1.0, -1.25));
        let inside_hue = sketch.hue();
        assert!((inside_hue - 180.0).abs() < 1.0);
        tick(&mut sketch, Point3::new(5.0, 1.0, 0.0));

        let calls = &grade.borrow().calls;
        assert_eq!(calls[0], (true, inside_hue));
        assert_eq!(calls[1], (false, inside_hue));
    }

    #[test]
    fn test_gradient_walk_checkpoints() {
        let grade = Rc::new(RefCell::new(RecordingGrade::default()));
        let mut sketch = HueWalk::new(
            corridor_zone(),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -3.5),
            Box::new(grade.clone()),
        );

        // Constant-velocity walk sampled at quarter-distance checkpoints;
        // the last sits just shy of the far edge (the edge itself is
        // outside the zone).
        let checkpoints = [0.0, -0.875, -1.75, -2.625, -3.499];
        let expected = [0.0, 90.0, 180.0, 270.0, 359.0];
        for (z, want) in checkpoints.iter().zip(expected) {
            tick(&mut sketch, Point3::new(0.0, 1.0, *z));
            assert!(
                (sketch.hue() - want).abs() < 1.5,
                "hue at z={} was {}, expected about {}",
                z,
                sketch.hue(),
                want
            );
        }
        assert!(grade.borrow().calls.iter().all(|(enabled, _)| *enabled));
    }

    #[test]
    fn test_signage_is_optional() {
        let mut scene = Scene::new();
        HueWalk::install_signage(&mut scene);
        assert!(scene.materials().is_empty());

        scene.add_object(crate::scene::SceneObject::new(
            "S1Text",
            Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
        ));
        HueWalk::install_signage(&mut scene);
        let text = scene.find_object("S1Text").unwrap();
        assert_eq!(text.caption(), Some(CAPTION));
        assert_eq!(text.material_id(), Some("S1Text_label"));
        assert!(scene.material("S1Text_label").unwrap().unlit);
    }
}
