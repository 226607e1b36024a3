//! Viewer pose sampling.

use cgmath::Point3;
use std::f32::consts::TAU;

/// A viewer's world position and yaw orientation.
///
/// Produced once per frame from the camera; read-only to the sketch
/// controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point3<f32>,
    pub yaw: f32,
}

impl Pose {
    pub fn new(position: Point3<f32>, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Yaw folded into `[0, 2π)`.
    pub fn normalized_yaw(&self) -> f32 {
        normalize_yaw(self.yaw)
    }
}

/// Folds a raw yaw angle into `[0, 2π)`.
///
/// Taken modulo 2π; negative results wrap upward, so `-0.5` becomes
/// `2π - 0.5`.
pub fn normalize_yaw(yaw: f32) -> f32 {
    let folded = yaw % TAU;
    if folded < 0.0 {
        folded + TAU
    } else {
        folded
    }
}

/// Source of the current viewer pose.
///
/// Implemented by whichever camera object the host engine exposes; the
/// controllers only ever read from it.
pub trait PoseSource {
    fn pose(&self) -> Pose;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_yaw_identity_in_range() {
        assert_eq!(normalize_yaw(0.0), 0.0);
        assert_eq!(normalize_yaw(1.0), 1.0);
    }

    #[test]
    fn test_normalize_yaw_negative_wraps_up() {
        assert!((normalize_yaw(-0.5) - (TAU - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_yaw_over_full_turn() {
        assert!((normalize_yaw(7.0) - (7.0 - TAU)).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_yaw_multiple_turns() {
        assert!((normalize_yaw(2.0 * TAU + 0.25) - 0.25).abs() < 1e-6);
        assert!((normalize_yaw(-TAU - 0.5) - (TAU - 0.5)).abs() < 1e-5);
    }
}
