// src/lib.rs
//! Vernissage
//!
//! A walkable 3D gallery installation: zone-triggered sketches driven by
//! viewer pose, built as glue around an external rendering engine.

pub mod app;
pub mod effects;
pub mod scene;
pub mod sketch;
pub mod spatial;

// Re-export main types for convenience
pub use app::GalleryApp;

/// Loads the gallery installation, blocking on the asset container load.
pub fn install(dir: &str, file: &str, seed: Option<u64>) -> Result<GalleryApp, scene::SceneError> {
    pollster::block_on(GalleryApp::load(dir, file, seed))
}
