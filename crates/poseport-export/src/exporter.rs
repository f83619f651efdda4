//! Scene aggregation and JSON export
//!
//! Walks the selected objects, converts every posed bone of each animated
//! armature and writes the nested animation document to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use poseport_core::error::ResultExt;
use poseport_core::Result;
use poseport_scene::{ObjectKind, SceneSource};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::convert::convert_bone_animation;

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Use pretty-print formatting
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Animation document exporter
pub struct AnimationExporter {
    options: ExportOptions,
}

impl AnimationExporter {
    /// Create new exporter with default options
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Create exporter with custom options
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Build the animation document from the scene's selected objects
    ///
    /// Non-armature objects are skipped, as are armatures without an active
    /// clip. Armatures sharing a clip name overwrite earlier entries
    /// (last write wins, insertion order kept).
    pub fn collect_animations<S: SceneSource>(&self, scene: &S) -> Result<Map<String, Value>> {
        let mut document = Map::new();

        for id in scene.selected_objects() {
            if scene.object_kind(id) != Some(ObjectKind::Armature) {
                continue;
            }

            let Some(clip) = scene.active_clip(id) else {
                debug!(
                    object = scene.object_name(id).unwrap_or("<unnamed>"),
                    "Skipping armature without an active clip"
                );
                continue;
            };
            let clip_name = clip.name.clone();

            let mut bones = Map::new();
            for bone in scene.armature_bones(id) {
                if !scene.has_pose_bone(id, bone) {
                    continue;
                }

                if let Some(track) = convert_bone_animation(scene, id, bone) {
                    bones.insert(bone.clone(), serde_json::to_value(track)?);
                }
            }

            debug!(
                animation = clip_name.as_str(),
                bones = bones.len(),
                "Collected armature animation"
            );
            document.insert(clip_name, json!({ "bones": bones }));
        }

        Ok(document)
    }

    /// Export the selected objects' animation data to `output_path`
    ///
    /// Writes `{}` when no selected armature carries a clip. I/O and
    /// serialization failures propagate; nothing is retried or cleaned up.
    pub fn export<S: SceneSource>(&self, scene: &S, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path = output_path.as_ref();

        let document = self.collect_animations(scene)?;
        self.write_json(&Value::Object(document), output_path)
            .with_context(|| format!("writing animation data to {}", output_path.display()))?;

        info!(path = %output_path.display(), "Animation data saved");
        Ok(())
    }

    /// Write JSON to file
    fn write_json(&self, value: &Value, output_path: &Path) -> Result<()> {
        let file = File::create(output_path)?;
        let writer = BufWriter::new(file);

        if self.options.pretty {
            serde_json::to_writer_pretty(writer, value)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }

        Ok(())
    }
}

impl Default for AnimationExporter {
    fn default() -> Self {
        Self::new()
    }
}
