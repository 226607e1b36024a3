//! First-person walk camera.
//!
//! The single pose authority for the installation. Input wiring lives
//! with the host: it forwards mouse-look and movement here, and toggles
//! control on pointer-lock changes so an unlocked cursor never steers
//! the view.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::spatial::{Pose, PoseSource};

const MAX_PITCH: f32 = 1.5;

pub struct WalkCamera {
    pub position: Point3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub look_speed: f32,
    pub aspect: f32,
    control_attached: bool,
}

impl WalkCamera {
    /// Places the camera at the gallery entrance, looking down the hall.
    pub fn new() -> Self {
        let mut camera = Self {
            position: Point3::new(0.0, 1.0, 1.5),
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 2.0,
            look_speed: 0.005,
            aspect: 1.5,
            control_attached: false,
        };
        camera.look_at(Point3::new(0.0, 1.0, 0.0));
        camera
    }

    /// Points the camera at a world target.
    pub fn look_at(&mut self, target: Point3<f32>) {
        let dir = target - self.position;
        self.yaw = dir.x.atan2(-dir.z);
        let planar = Vector3::new(dir.x, 0.0, dir.z).magnitude();
        self.pitch = dir.y.atan2(planar).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Unit forward direction projected onto the walking plane.
    pub fn forward(&self) -> Vector3<f32> {
        Vector3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    pub fn right(&self) -> Vector3<f32> {
        Vector3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Mouse-look input; ignored while control is detached.
    pub fn process_look(&mut self, delta_x: f32, delta_y: f32) {
        if !self.control_attached {
            return;
        }
        self.yaw += delta_x * self.look_speed;
        self.pitch = (self.pitch - delta_y * self.look_speed).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Movement input (forward/backward and strafe, each in -1..1);
    /// ignored while control is detached.
    pub fn walk(&mut self, forward_input: f32, strafe_input: f32, delta_seconds: f32) {
        if !self.control_attached {
            return;
        }
        let step = (self.forward() * forward_input + self.right() * strafe_input)
            * self.move_speed
            * delta_seconds;
        self.position += step;
    }

    /// Pointer lock acquired: start consuming look/move input.
    pub fn attach_control(&mut self) {
        self.control_attached = true;
    }

    /// Pointer lock released: ignore input until re-attached.
    pub fn detach_control(&mut self) {
        self.control_attached = false;
    }

    pub fn control_attached(&self) -> bool {
        self.control_attached
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl PoseSource for WalkCamera {
    fn pose(&self) -> Pose {
        Pose::new(self.position, self.yaw)
    }
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_faces_down_the_hall() {
        let camera = WalkCamera::new();
        assert!(camera.yaw.abs() < 1e-6);
        let forward = camera.forward();
        assert!((forward.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_gated_on_control() {
        let mut camera = WalkCamera::new();
        let start = camera.position;
        camera.walk(1.0, 0.0, 0.5);
        camera.process_look(10.0, 0.0);
        assert_eq!(camera.position, start);
        assert!(camera.yaw.abs() < 1e-6);

        camera.attach_control();
        camera.walk(1.0, 0.0, 0.5);
        assert!((camera.position.z - (start.z - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = WalkCamera::new();
        camera.attach_control();
        camera.process_look(0.0, -10_000.0);
        assert!(camera.pitch <= 1.5);
    }

    #[test]
    fn test_pose_reflects_camera() {
        let mut camera = WalkCamera::new();
        camera.position = Point3::new(2.0, 1.0, -3.0);
        camera.yaw = 0.7;
        let pose = camera.pose();
        assert_eq!(pose.position, Point3::new(2.0, 1.0, -3.0));
        assert_eq!(pose.yaw, 0.7);
    }
}
