//! Host scene boundary for poseport
//!
//! The authoring tool's scene graph is an external, read-only data source.
//! This crate narrows it to the handful of queries the exporter actually
//! issues ([`SceneSource`]) and provides [`MemoryScene`], an in-memory
//! implementation deserializable from a JSON scene snapshot. The same type
//! substitutes for the host environment in unit tests.

pub mod clip;
pub mod model;
pub mod source;

pub use clip::{Channel, Clip, Keyframe};
pub use model::{MemoryScene, ObjectKind, PoseBone, SceneObject};
pub use source::{ObjectId, SceneSource};
