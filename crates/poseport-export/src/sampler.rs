//! Frame sampling
//!
//! Resolves a bone's pose-space translation at a given frame by querying the
//! scene. The frame is passed explicitly into the evaluation, so sampling
//! never touches shared scene state and is safe to repeat mid-iteration.

use poseport_scene::{ObjectId, SceneSource};

/// Sample the named bone's translation at `frame`
///
/// Fractional frames are truncated, not interpolated. A missing pose bone
/// yields `(0.0, 0.0, 0.0)` silently; components are independently rounded
/// to 2 decimal places.
pub fn sample_translation<S: SceneSource>(
    scene: &S,
    object: ObjectId,
    frame: f64,
    bone: &str,
) -> (f64, f64, f64) {
    let frame = frame as i64;

    match scene.pose_translation(object, bone, frame) {
        Some(loc) => {
            let loc = loc.rounded2();
            (loc.x, loc.y, loc.z)
        }
        None => (0.0, 0.0, 0.0),
    }
}
