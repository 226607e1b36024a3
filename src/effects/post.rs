//! Static post-process configuration.

/// Image-processing settings applied once at scene setup.
#[derive(Debug, Clone, Copy)]
pub struct PostProcessSettings {
    pub exposure: f32,
    pub contrast: f32,
    pub vignette_weight: f32,
    pub glow_intensity: f32,
}

impl Default for PostProcessSettings {
    /// The gallery's night-lit defaults.
    fn default() -> Self {
        Self {
            exposure: 0.1,
            contrast: 1.0,
            vignette_weight: 0.0,
            glow_intensity: 0.0,
        }
    }
}
