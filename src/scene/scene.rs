//! Scene container: objects, materials, lights.

use super::lighting::Light;
use super::material::Material;
use super::object::SceneObject;

/// Main scene containing the loaded gallery objects, their materials,
/// and the light rigs.
///
/// Lookup by exact name is the seam every optional feature hangs off:
/// a missing name disables the feature, it never raises an error.
pub struct Scene {
    pub objects: Vec<SceneObject>,
    materials: Vec<Material>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            materials: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Finds an object by exact name.
    pub fn find_object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    pub fn find_object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|obj| obj.name == name)
    }

    /// Adds a material unless one with the same name already exists.
    pub fn add_material(&mut self, material: Material) {
        if self.material(&material.name).is_none() {
            self.materials.push(material);
        }
    }

    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|mat| mat.name == name)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Gets all object names for diagnostics
    pub fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Aabb;
    use cgmath::Point3;

    fn unit_bounds() -> Aabb {
        Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 0.0, 1.0))
    }

    #[test]
    fn test_find_object_by_name() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new("S1Bounds", unit_bounds()));
        assert!(scene.find_object("S1Bounds").is_some());
        assert!(scene.find_object("S9Bounds").is_none());
    }

    #[test]
    fn test_duplicate_material_names_keep_first() {
        let mut scene = Scene::new();
        scene.add_material(Material::new("wall", [0.5, 0.5, 0.5, 1.0], 0.0, 1.0));
        scene.add_material(Material::new("wall", [1.0, 0.0, 0.0, 1.0], 0.0, 1.0));
        assert_eq!(scene.materials().len(), 1);
        assert_eq!(scene.material("wall").unwrap().base_color[0], 0.5);
    }
}
