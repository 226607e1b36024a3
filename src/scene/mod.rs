// src/scene/mod.rs
//! Scene model
//!
//! Named objects with transforms and bounds, flat material and light
//! records for the external engine, the walk camera, and the
//! asynchronous asset container.

pub mod camera;
pub mod container;
pub mod lighting;
pub mod material;
pub mod object;
pub mod scene;

pub use camera::WalkCamera;
pub use container::AssetContainer;
pub use lighting::{gallery_rig, installation_rig, Light, LightKind};
pub use material::Material;
pub use object::SceneObject;
pub use scene::Scene;

use thiserror::Error;

/// Errors from scene setup.
///
/// A load failure is terminal for the session: it propagates out of
/// scene startup with no retry and no partial-scene fallback.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load model {path}: {source}")]
    ModelLoad {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
}
