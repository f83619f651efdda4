//! Animation clip, channel and keyframe structures

use serde::{Deserialize, Serialize};

/// A discrete authored sample on a channel
///
/// `co` is the (frame, value) control point; the handles are the left/right
/// tangent control points used for interpolation curve shaping. All three are
/// raw 2-component vectors in the host convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Control point: (frame, value)
    pub co: [f64; 2],
    /// Left tangent handle: (frame, value)
    pub handle_left: [f64; 2],
    /// Right tangent handle: (frame, value)
    pub handle_right: [f64; 2],
}

impl Keyframe {
    /// Frame coordinate of the control point
    pub fn frame(&self) -> f64 {
        self.co[0]
    }

    /// Stored value of the control point
    pub fn value(&self) -> f64 {
        self.co[1]
    }
}

/// One animated scalar property over time (fcurve)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Property path in the host convention, e.g.
    /// `pose.bones["Spine"].location`
    pub data_path: String,
    /// Ordered keyframe sequence
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Channel {
    /// Whether this channel animates the named bone's location
    pub fn targets_location(&self, bone: &str) -> bool {
        self.data_path == format!("pose.bones[\"{bone}\"].location")
    }

    /// Whether this channel animates the named bone's rotation quaternion
    pub fn targets_rotation(&self, bone: &str) -> bool {
        self.data_path == format!("pose.bones[\"{bone}\"].rotation_quaternion")
    }
}

/// A named bundle of keyframe channels applied to an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Animation name, used as the top-level key in the exported document
    pub name: String,
    /// Ordered channel list
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Clip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(path: &str) -> Channel {
        Channel {
            data_path: path.to_string(),
            keyframes: Vec::new(),
        }
    }

    #[test]
    fn test_targets_location() {
        let ch = channel("pose.bones[\"Spine\"].location");
        assert!(ch.targets_location("Spine"));
        assert!(!ch.targets_location("Head"));
        assert!(!ch.targets_rotation("Spine"));
    }

    #[test]
    fn test_targets_rotation() {
        let ch = channel("pose.bones[\"Head\"].rotation_quaternion");
        assert!(ch.targets_rotation("Head"));
        assert!(!ch.targets_location("Head"));
    }

    #[test]
    fn test_unrelated_path_matches_nothing() {
        let ch = channel("pose.bones[\"Spine\"].scale");
        assert!(!ch.targets_location("Spine"));
        assert!(!ch.targets_rotation("Spine"));
    }

    #[test]
    fn test_keyframe_accessors() {
        let kp = Keyframe {
            co: [12.0, 0.75],
            handle_left: [11.0, 0.5],
            handle_right: [13.0, 1.0],
        };
        assert_eq!(kp.frame(), 12.0);
        assert_eq!(kp.value(), 0.75);
    }
}
