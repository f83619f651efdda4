//! Animation export pipeline
//!
//! Converts keyframed skeletal poses queried through
//! [`poseport_scene::SceneSource`] into a flat per-frame, per-bone transform
//! table and serializes it as a JSON document.

pub mod convert;
pub mod exporter;
pub mod sampler;

pub use convert::{convert_bone_animation, format_frame_key, BoneTrack, FrameMap, LERP_MODE};
pub use exporter::{AnimationExporter, ExportOptions};
pub use sampler::sample_translation;
