//! Installation wiring.
//!
//! `GalleryApp` loads the gallery model, wires each sketch to the zone
//! mesh it triggers on, and exposes the single per-frame tick the
//! external render loop calls. A sketch whose zone mesh is missing from
//! the model is simply never constructed for that session.

use std::cell::{Ref, RefCell};
use std::f32::consts::PI;
use std::rc::Rc;

use log::warn;

use crate::effects::{PostProcessSettings, ReflectionProbe, SmoothedHueGrade};
use crate::scene::{gallery_rig, installation_rig, AssetContainer, Scene, SceneError, WalkCamera};
use crate::sketch::{CubeField, HueWalk, SketchManager, YawWindow};
use crate::spatial::{PoseSource, TriggerZone};

/// Mesh names the wiring looks up in the loaded model.
const HUE_ZONE_MESH: &str = "S1Bounds";
const CUBE_ZONE_MESH: &str = "S2Bounds";

/// Yaw window that counts as "facing the cube installation": roughly
/// toward the back wall, a quarter turn wide.
const CUBE_YAW_LO: f32 = 0.75 * PI;
const CUBE_YAW_HI: f32 = 1.25 * PI;

pub struct GalleryApp {
    pub scene: Scene,
    pub camera: WalkCamera,
    pub post_process: PostProcessSettings,
    sketches: SketchManager,
    hue_grade: Rc<RefCell<SmoothedHueGrade>>,
    reflection: Rc<RefCell<ReflectionProbe>>,
    seed: Option<u64>,
}

impl GalleryApp {
    /// Creates an empty gallery with the default camera and the night
    /// post-process settings. Pass a seed for reproducible cube layouts.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            scene: Scene::new(),
            camera: WalkCamera::new(),
            post_process: PostProcessSettings::default(),
            sketches: SketchManager::new(),
            hue_grade: Rc::new(RefCell::new(SmoothedHueGrade::new())),
            reflection: Rc::new(RefCell::new(ReflectionProbe::new())),
            seed,
        }
    }

    /// Loads the gallery model and wires every sketch whose zone mesh is
    /// present. Must complete before the first tick; load failure is a
    /// failed scene start.
    pub async fn load(dir: &str, file: &str, seed: Option<u64>) -> Result<Self, SceneError> {
        let container = AssetContainer::load(dir, file).await?;
        let mut app = Self::new(seed);
        container.add_all_to_scene(&mut app.scene);
        app.wire_sketches();
        Ok(app)
    }

    /// Wires lights and sketches against the current scene contents.
    ///
    /// Called once by [`load`](Self::load); exposed so procedurally
    /// built scenes can wire themselves the same way.
    pub fn wire_sketches(&mut self) {
        for light in gallery_rig() {
            self.scene.add_light(light);
        }

        match self.zone_from_mesh(HUE_ZONE_MESH) {
            Some(zone) => {
                HueWalk::install_signage(&mut self.scene);
                let sketch = HueWalk::with_default_axis(zone, Box::new(self.hue_grade.clone()));
                self.sketches.attach(Box::new(sketch));
            }
            None => warn!(
                "mesh {:?} not found, hue walk disabled for this session",
                HUE_ZONE_MESH
            ),
        }

        match self.zone_from_mesh(CUBE_ZONE_MESH) {
            Some(zone) => {
                let field = CubeField::new(
                    zone,
                    YawWindow::new(CUBE_YAW_LO, CUBE_YAW_HI),
                    Box::new(self.reflection.clone()),
                    self.seed,
                );
                for light in installation_rig(
                    field.installation().anchor(),
                    &field.installation().instance_ids(),
                ) {
                    self.scene.add_light(light);
                }
                self.sketches.attach(Box::new(field));
            }
            None => warn!(
                "mesh {:?} not found, cube field disabled for this session",
                CUBE_ZONE_MESH
            ),
        }
    }

    fn zone_from_mesh(&self, name: &str) -> Option<TriggerZone> {
        self.scene
            .find_object(name)
            .map(|obj| TriggerZone::new(obj.local_bounds, obj.transform))
    }

    /// Per-frame entry point: samples the camera pose once, advances
    /// elapsed time, and updates every sketch.
    pub fn tick(&mut self, delta_seconds: f32) {
        let pose = self.camera.pose();
        self.sketches.update(delta_seconds, pose);
    }

    /// Viewport change from the host.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    pub fn active_sketches(&self) -> usize {
        self.sketches.sketch_count()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.sketches.elapsed_seconds()
    }

    /// Read side of the hue grade the hue walk drives.
    pub fn hue_grade(&self) -> Ref<'_, SmoothedHueGrade> {
        self.hue_grade.borrow()
    }

    /// Read side of the reflection probe the cube field feeds.
    pub fn reflection(&self) -> Ref<'_, ReflectionProbe> {
        self.reflection.borrow()
    }
}
