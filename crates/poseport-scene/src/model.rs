//! In-memory scene model
//!
//! A deserializable snapshot of the host scene: objects with their type tag,
//! selection state, armature bone hierarchy, evaluated pose samples and
//! active clip. [`MemoryScene`] implements [`SceneSource`] over it, and is
//! what unit tests build in place of a live host environment.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use poseport_core::{Error, Result, Vec3};
use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::source::{ObjectId, SceneSource};

/// Scene object type discriminator
///
/// Only `Armature` is processed by the exporter; the rest exist so that
/// selection filtering is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Armature,
    Mesh,
    Camera,
    Light,
    Empty,
}

/// Runtime pose entry for a single bone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseBone {
    /// Translation when no animated sample exists for a frame
    #[serde(default)]
    pub rest: Vec3,
    /// Evaluated pose-space translation per frame
    #[serde(default)]
    pub samples: HashMap<i64, Vec3>,
}

impl PoseBone {
    pub fn new(rest: Vec3) -> Self {
        Self {
            rest,
            samples: HashMap::new(),
        }
    }

    /// Record the evaluated translation for a frame
    pub fn sample(mut self, frame: i64, translation: Vec3) -> Self {
        self.samples.insert(frame, translation);
        self
    }

    /// Translation at the given frame, falling back to the rest value
    pub fn translation_at(&self, frame: i64) -> Vec3 {
        self.samples.get(&frame).copied().unwrap_or(self.rest)
    }
}

impl Default for PoseBone {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// A scene object as captured in the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    /// Whether the object is part of the current selection
    #[serde(default = "default_selected")]
    pub selected: bool,
    /// Armature bone hierarchy in definition order (empty for non-armatures)
    #[serde(default)]
    pub bones: Vec<String>,
    /// Pose table keyed by bone name
    #[serde(default)]
    pub pose: HashMap<String, PoseBone>,
    /// Active animation clip, if one is assigned
    #[serde(default)]
    pub clip: Option<Clip>,
}

fn default_selected() -> bool {
    true
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            selected: true,
            bones: Vec::new(),
            pose: HashMap::new(),
            clip: None,
        }
    }

    /// Shorthand for a selected armature object
    pub fn armature(name: impl Into<String>) -> Self {
        Self::new(name, ObjectKind::Armature)
    }

    /// Add a bone to the hierarchy along with its pose entry
    pub fn with_bone(mut self, name: impl Into<String>, pose: PoseBone) -> Self {
        let name = name.into();
        self.bones.push(name.clone());
        self.pose.insert(name, pose);
        self
    }

    /// Add a bone to the hierarchy without a pose entry
    pub fn with_unposed_bone(mut self, name: impl Into<String>) -> Self {
        self.bones.push(name.into());
        self
    }

    /// Assign the active clip
    pub fn with_clip(mut self, clip: Clip) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Mark the object as deselected
    pub fn deselected(mut self) -> Self {
        self.selected = false;
        self
    }
}

/// In-memory scene implementing the exporter's query boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryScene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl MemoryScene {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Load a scene snapshot from a JSON file
    ///
    /// A missing file maps to [`Error::FileNotFound`]; other read failures
    /// and malformed JSON propagate as their own variants.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.index())
    }
}

const NO_BONES: &[String] = &[];

impl SceneSource for MemoryScene {
    fn selected_objects(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| obj.selected)
            .map(|(idx, _)| ObjectId::new(idx))
            .collect()
    }

    fn object_name(&self, id: ObjectId) -> Option<&str> {
        self.object(id).map(|obj| obj.name.as_str())
    }

    fn object_kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.object(id).map(|obj| obj.kind)
    }

    fn armature_bones(&self, id: ObjectId) -> &[String] {
        self.object(id).map_or(NO_BONES, |obj| obj.bones.as_slice())
    }

    fn has_pose_bone(&self, id: ObjectId, bone: &str) -> bool {
        self.object(id).is_some_and(|obj| obj.pose.contains_key(bone))
    }

    fn pose_translation(&self, id: ObjectId, bone: &str, frame: i64) -> Option<Vec3> {
        self.object(id)?
            .pose
            .get(bone)
            .map(|pb| pb.translation_at(frame))
    }

    fn active_clip(&self, id: ObjectId) -> Option<&Clip> {
        self.object(id)?.clip.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scene() -> MemoryScene {
        let armature = SceneObject::armature("Rig")
            .with_bone(
                "Spine",
                PoseBone::new(Vec3::new(0.0, 1.0, 0.0)).sample(5, Vec3::new(0.5, 1.5, 0.0)),
            )
            .with_unposed_bone("Detached")
            .with_clip(Clip::new("Walk"));

        let mesh = SceneObject::new("Body", ObjectKind::Mesh);
        let hidden = SceneObject::armature("Unused").deselected();

        MemoryScene::new(vec![armature, mesh, hidden])
    }

    #[test]
    fn test_selected_objects_skips_deselected() {
        let scene = make_scene();
        let selected = scene.selected_objects();
        assert_eq!(selected, vec![ObjectId::new(0), ObjectId::new(1)]);
    }

    #[test]
    fn test_object_queries() {
        let scene = make_scene();
        let rig = ObjectId::new(0);

        assert_eq!(scene.object_name(rig), Some("Rig"));
        assert_eq!(scene.object_kind(rig), Some(ObjectKind::Armature));
        assert_eq!(scene.armature_bones(rig), ["Spine", "Detached"]);
        assert!(scene.has_pose_bone(rig, "Spine"));
        assert!(!scene.has_pose_bone(rig, "Detached"));
        assert!(scene.active_clip(rig).is_some());
    }

    #[test]
    fn test_pose_translation_falls_back_to_rest() {
        let scene = make_scene();
        let rig = ObjectId::new(0);

        assert_eq!(
            scene.pose_translation(rig, "Spine", 5),
            Some(Vec3::new(0.5, 1.5, 0.0))
        );
        assert_eq!(
            scene.pose_translation(rig, "Spine", 99),
            Some(Vec3::new(0.0, 1.0, 0.0))
        );
        assert_eq!(scene.pose_translation(rig, "Nope", 0), None);
    }

    #[test]
    fn test_invalid_handle_yields_defaults() {
        let scene = make_scene();
        let bogus = ObjectId::new(42);

        assert_eq!(scene.object_name(bogus), None);
        assert_eq!(scene.object_kind(bogus), None);
        assert!(scene.armature_bones(bogus).is_empty());
        assert!(!scene.has_pose_bone(bogus, "Spine"));
        assert_eq!(scene.pose_translation(bogus, "Spine", 0), None);
        assert!(scene.active_clip(bogus).is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let scene = make_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let back: MemoryScene = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn test_load_snapshot_file() {
        let scene = make_scene();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, serde_json::to_string(&scene).unwrap()).unwrap();

        let loaded = MemoryScene::load(&path).unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_load_missing_snapshot_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemoryScene::load(dir.path().join("absent.json")).unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_load_malformed_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = MemoryScene::load(&path).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_snapshot_defaults() {
        let json = r#"{"objects": [{"name": "Rig", "kind": "armature"}]}"#;
        let scene: MemoryScene = serde_json::from_str(json).unwrap();
        let obj = &scene.objects[0];

        assert!(obj.selected);
        assert!(obj.bones.is_empty());
        assert!(obj.pose.is_empty());
        assert!(obj.clip.is_none());
    }
}
