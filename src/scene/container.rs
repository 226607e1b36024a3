//! Asynchronous asset containers.

use std::path::Path;

use log::{info, warn};

use super::material::Material;
use super::object::SceneObject;
use super::scene::Scene;
use super::SceneError;
use crate::spatial::Aabb;

/// A loaded model: named objects and materials, not yet in any scene.
pub struct AssetContainer {
    pub objects: Vec<SceneObject>,
    pub materials: Vec<Material>,
}

impl AssetContainer {
    /// Loads an OBJ/MTL model into a container of named objects and
    /// materials.
    ///
    /// This is the one asynchronous boundary in the crate: scene wiring
    /// awaits it before any controller is constructed.
    pub async fn load(dir: &str, file: &str) -> Result<Self, SceneError> {
        let path = Path::new(dir).join(file);
        let (models, materials) = tobj::load_obj(
            &path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| SceneError::ModelLoad {
            path: path.display().to_string(),
            source,
        })?;

        let materials = materials.unwrap_or_else(|_| {
            warn!("no MTL companion for {}, using default materials", path.display());
            Vec::new()
        });

        let mut container = Self {
            objects: Vec::new(),
            materials: Vec::new(),
        };

        for (i, mtl) in materials.iter().enumerate() {
            let material_name = if mtl.name.is_empty() {
                format!("material_{}", i)
            } else {
                mtl.name.clone()
            };

            let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
            container.materials.push(Material::new(
                &material_name,
                [
                    diffuse[0],
                    diffuse[1],
                    diffuse[2],
                    mtl.dissolve.unwrap_or(1.0), // Alpha from dissolve
                ],
                0.0, // MTL has no direct metallic value
                1.0 - (mtl.shininess.unwrap_or(32.0) / 128.0).clamp(0.0, 1.0),
            ));
        }

        for (i, model) in models.iter().enumerate() {
            let name = if model.name.is_empty() {
                format!("object_{}", i)
            } else {
                model.name.clone()
            };

            // An empty mesh keeps its slot with point bounds at the origin.
            let origin = cgmath::Point3::new(0.0, 0.0, 0.0);
            let bounds =
                Aabb::from_positions(&model.mesh.positions).unwrap_or(Aabb::new(origin, origin));

            let mut object = SceneObject::new(&name, bounds);
            if let Some(material_id) = model.mesh.material_id {
                if material_id < materials.len() {
                    let material_name = if materials[material_id].name.is_empty() {
                        format!("material_{}", material_id)
                    } else {
                        materials[material_id].name.clone()
                    };
                    object.set_material(&material_name);
                }
            }
            container.objects.push(object);
        }

        info!(
            "loaded {}: {} objects, {} materials",
            path.display(),
            container.objects.len(),
            container.materials.len()
        );
        Ok(container)
    }

    /// Finds a loaded object by exact name.
    pub fn find_object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    /// Moves every loaded object and material into the scene.
    pub fn add_all_to_scene(self, scene: &mut Scene) {
        for material in self.materials {
            scene.add_material(material);
        }
        for object in self.objects {
            scene.add_object(object);
        }
    }
}
