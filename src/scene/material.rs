//! Flat material records handed to the external engine.

#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    /// Skip lighting entirely (signage decals).
    pub unlit: bool,
}

impl Material {
    pub fn new(name: &str, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metallic,
            roughness,
            unlit: false,
        }
    }

    pub fn unlit(mut self) -> Self {
        self.unlit = true;
        self
    }
}
