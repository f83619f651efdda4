//! The read-only query interface the exporter issues against a scene
//!
//! This is the narrow capability set the export path needs; anything else the
//! host scene graph holds stays behind this boundary. Pose evaluation takes
//! the frame as an explicit parameter, so a query never mutates shared scene
//! state and repeated sampling is safe mid-iteration.

use poseport_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::model::ObjectKind;

/// Opaque handle for a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

impl ObjectId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only scene queries used by the export path
///
/// Missing data is reported through `Option`/empty returns, never errors:
/// the degraded-output paths of the exporter depend on that.
pub trait SceneSource {
    /// Handles of the currently selected objects, in selection order
    fn selected_objects(&self) -> Vec<ObjectId>;

    /// Object name, if the handle is valid
    fn object_name(&self, id: ObjectId) -> Option<&str>;

    /// Object type discriminator, if the handle is valid
    fn object_kind(&self, id: ObjectId) -> Option<ObjectKind>;

    /// Bone names of the object's armature, in definition order
    ///
    /// Empty for non-armature objects and invalid handles.
    fn armature_bones(&self, id: ObjectId) -> &[String];

    /// Whether the object's pose has an entry for the named bone
    fn has_pose_bone(&self, id: ObjectId, bone: &str) -> bool;

    /// Pose-space translation of the named bone evaluated at `frame`
    ///
    /// `None` when the object or pose bone does not exist. Every call
    /// re-evaluates; implementations must not cache across frames.
    fn pose_translation(&self, id: ObjectId, bone: &str, frame: i64) -> Option<Vec3>;

    /// The object's active animation clip, if any
    fn active_clip(&self, id: ObjectId) -> Option<&Clip>;
}
