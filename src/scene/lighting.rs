//! Light rig descriptors.
//!
//! Plain records the external engine turns into actual lights. The
//! gallery has a base rig; the cube installation carries its own rig
//! restricted to its instance meshes.

use cgmath::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
    Hemispheric,
}

#[derive(Debug, Clone)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
    /// Direction for directional/hemispheric lights, position for point
    /// lights.
    pub vector: Vector3<f32>,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub ground: [f32; 3],
    pub intensity: f32,
    /// Restrict the light to these meshes; empty means everything.
    pub included_only: Vec<String>,
    /// Anchor object this light follows, if any.
    pub parent: Option<String>,
}

impl Light {
    pub fn directional(name: &str, direction: Vector3<f32>, diffuse: [f32; 3]) -> Self {
        Self::with_kind(name, LightKind::Directional, direction, diffuse)
    }

    pub fn point(name: &str, position: Vector3<f32>, diffuse: [f32; 3]) -> Self {
        Self::with_kind(name, LightKind::Point, position, diffuse)
    }

    pub fn hemispheric(name: &str, up: Vector3<f32>, diffuse: [f32; 3]) -> Self {
        Self::with_kind(name, LightKind::Hemispheric, up, diffuse)
    }

    fn with_kind(name: &str, kind: LightKind, vector: Vector3<f32>, diffuse: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            kind,
            vector,
            diffuse,
            specular: diffuse,
            ground: [0.0, 0.0, 0.0],
            intensity: 1.0,
            included_only: Vec::new(),
            parent: None,
        }
    }

    pub fn restricted_to(mut self, ids: &[String]) -> Self {
        self.included_only = ids.to_vec();
        self
    }

    pub fn parented_to(mut self, anchor: &str) -> Self {
        self.parent = Some(anchor.to_string());
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}

/// The gallery's base lights: a hemispheric fill and a point light near
/// the entrance.
pub fn gallery_rig() -> Vec<Light> {
    vec![
        Light::hemispheric("light1", Vector3::new(1.0, 1.0, 0.0), [1.0, 1.0, 1.0]),
        Light::point("light2", Vector3::new(0.0, 1.0, -1.0), [1.0, 1.0, 1.0]),
    ]
}

/// The cube installation's dedicated rig, parented to its anchor.
///
/// The blue directional and the hemispheric light only touch the
/// instance meshes so the rest of the gallery keeps its night tone.
pub fn installation_rig(anchor: &str, instance_ids: &[String]) -> Vec<Light> {
    vec![
        Light::directional("white", Vector3::new(0.0, 4.0, 0.0), [1.0, 1.0, 1.0])
            .parented_to(anchor),
        Light::directional("blue", Vector3::new(4.0, 4.0, 0.0), [0.0, 0.0, 1.0])
            .restricted_to(instance_ids)
            .parented_to(anchor),
        Light::hemispheric("HemiLight", Vector3::new(0.0, 1.0, 0.0), [1.0, 1.0, 1.0])
            .with_intensity(100.0)
            .restricted_to(instance_ids)
            .parented_to(anchor),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_rig_restrictions() {
        let ids = vec!["box".to_string(), "box0".to_string()];
        let rig = installation_rig("S2Anchor", &ids);
        assert_eq!(rig.len(), 3);
        assert!(rig[0].included_only.is_empty());
        assert_eq!(rig[1].included_only, ids);
        assert_eq!(rig[2].included_only, ids);
        assert!(rig.iter().all(|l| l.parent.as_deref() == Some("S2Anchor")));
    }
}
