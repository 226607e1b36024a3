// src/spatial/mod.rs
//! Spatial queries for the installation
//!
//! Viewer pose sampling, zone footprints, and the remapping helpers the
//! sketch controllers share.

pub mod bounds;
pub mod pose;
pub mod remap;
pub mod zone;

pub use bounds::Aabb;
pub use pose::{normalize_yaw, Pose, PoseSource};
pub use remap::range_map;
pub use zone::TriggerZone;
