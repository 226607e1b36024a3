//! Named scene objects.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

use crate::spatial::Aabb;

/// A named object in the scene.
///
/// Carries the data the controllers and the external engine share: a
/// world transform, local-space bounds, and optional material/caption
/// dressing. Geometry itself stays with the engine.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
    pub local_bounds: Aabb,
    pub visible: bool,
    material_id: Option<String>,
    caption: Option<String>,
}

impl SceneObject {
    /// Create a new object with identity transformation
    pub fn new(name: &str, local_bounds: Aabb) -> Self {
        Self {
            name: name.to_string(),
            transform: Matrix4::identity(),
            local_bounds,
            visible: true,
            material_id: None,
            caption: None,
        }
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform = Matrix4::from_translation(translation);
    }

    /// Apply translation (multiplies with existing transform)
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.transform = self.transform * Matrix4::from_translation(translation);
    }

    /// Set rotation around the vertical axis
    pub fn set_rotation_y(&mut self, angle: Deg<f32>) {
        self.transform = Matrix4::from_angle_y(angle);
    }

    /// Create a complete transform from translation, rotation, and scale
    pub fn set_transform_trs(
        &mut self,
        translation: Vector3<f32>,
        rotation_y: Deg<f32>,
        scale: f32,
    ) {
        let t = Matrix4::from_translation(translation);
        let r = Matrix4::from_angle_y(rotation_y);
        let s = Matrix4::from_scale(scale);
        self.transform = t * r * s; // Order matters: T * R * S
    }

    pub fn set_material(&mut self, material_id: &str) {
        self.material_id = Some(material_id.to_string());
    }

    pub fn material_id(&self) -> Option<&str> {
        self.material_id.as_deref()
    }

    pub fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_string());
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    #[test]
    fn test_translation_moves_bounds_anchor() {
        let mut object = SceneObject::new(
            "zone",
            Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 0.0, 1.0)),
        );
        object.set_translation(Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(object.transform.w.x, 3.0);
    }

    #[test]
    fn test_dressing_defaults_empty() {
        let object = SceneObject::new(
            "wall",
            Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)),
        );
        assert!(object.material_id().is_none());
        assert!(object.caption().is_none());
    }
}
