//! Axis-aligned bounds with footprint containment.

use cgmath::Point3;

/// Local-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Builds bounds from a flat position buffer (x, y, z triples).
    ///
    /// Returns `None` for an empty buffer.
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        let mut triples = positions.chunks_exact(3);
        let first = triples.next()?;
        let mut min = Point3::new(first[0], first[1], first[2]);
        let mut max = min;
        for p in triples {
            min.x = min.x.min(p[0]);
            min.y = min.y.min(p[1]);
            min.z = min.z.min(p[2]);
            max.x = max.x.max(p[0]);
            max.y = max.y.max(p[1]);
            max.z = max.z.max(p[2]);
        }
        Some(Self { min, max })
    }

    /// Tests whether a local-space point falls inside the X–Z footprint.
    ///
    /// The vertical axis is ignored: zones are curtains, not volumes, so
    /// a point at any height inside the footprint counts. The boundary
    /// itself is outside (strict inequality), and a box with zero extent
    /// on an axis admits no points on that axis.
    pub fn contains_footprint(&self, point: Point3<f32>) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.z > self.min.z && point.z < self.max.z
    }
}
