//! Spatial trigger zones.

use cgmath::{Matrix4, Point3, SquareMatrix, Transform};
use log::debug;

use super::bounds::Aabb;

/// A trigger region: local-space bounds anchored by a world transform.
///
/// The world-to-local inverse is recomputed on every query, never cached,
/// because the anchor mesh may move or animate between frames.
#[derive(Debug, Clone)]
pub struct TriggerZone {
    bounds: Aabb,
    world_matrix: Matrix4<f32>,
}

impl TriggerZone {
    pub fn new(bounds: Aabb, world_matrix: Matrix4<f32>) -> Self {
        Self {
            bounds,
            world_matrix,
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Re-reads the anchor's current world transform.
    pub fn set_world_matrix(&mut self, world_matrix: Matrix4<f32>) {
        self.world_matrix = world_matrix;
    }

    /// Maps a world-space point into the zone's local frame.
    ///
    /// Returns `None` when the anchor matrix is singular; such a zone
    /// admits no points.
    pub fn to_local(&self, world_point: Point3<f32>) -> Option<Point3<f32>> {
        let Some(inverse) = self.world_matrix.invert() else {
            debug!("trigger zone anchor matrix is singular, point treated as outside");
            return None;
        };
        Some(inverse.transform_point(world_point))
    }

    /// Tests whether a world-space point lies inside the zone footprint.
    pub fn contains(&self, world_point: Point3<f32>) -> bool {
        self.to_local(world_point)
            .map(|local| self.bounds.contains_footprint(local))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn unit_zone_at(translation: Vector3<f32>) -> TriggerZone {
        TriggerZone::new(
            Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 0.0, 1.0)),
            Matrix4::from_translation(translation),
        )
    }

    #[test]
    fn test_identity_anchor() {
        let zone = unit_zone_at(Vector3::new(0.0, 0.0, 0.0));
        assert!(zone.contains(Point3::new(0.0, 1.0, 0.0)));
        assert!(!zone.contains(Point3::new(1.0, 1.0, 0.0)));
        assert!(!zone.contains(Point3::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn test_translated_anchor() {
        let zone = unit_zone_at(Vector3::new(10.0, 0.0, -5.0));
        assert!(zone.contains(Point3::new(10.0, 1.0, -5.0)));
        assert!(!zone.contains(Point3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_moving_anchor_retests_from_scratch() {
        let mut zone = unit_zone_at(Vector3::new(0.0, 0.0, 0.0));
        let point = Point3::new(0.5, 1.0, 0.5);
        assert!(zone.contains(point));
        zone.set_world_matrix(Matrix4::from_translation(Vector3::new(5.0, 0.0, 0.0)));
        assert!(!zone.contains(point));
    }

    #[test]
    fn test_singular_anchor_admits_nothing() {
        let zone = TriggerZone::new(
            Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 0.0, 1.0)),
            Matrix4::from_scale(0.0),
        );
        assert!(!zone.contains(Point3::new(0.0, 0.0, 0.0)));
    }
}
