//! Shared math types for pose sampling and rotation conversion
//!
//! Components are `f64` end to end: the exported document carries plain JSON
//! numbers and double precision keeps the 2-decimal rounding exact.

use serde::{Deserialize, Serialize};

/// 3D vector (bone translation, Euler angles, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Round each component to 2 decimal places
    pub fn rounded2(self) -> Self {
        Self {
            x: round2(self.x),
            y: round2(self.y),
            z: round2(self.z),
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Round a value to 2 decimal places
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Quaternion in XYZW order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Return the unit quaternion, or identity for a zero quaternion
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
                w: self.w / len,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Convert to a 3x3 rotation matrix (row-major, column-vector convention)
    ///
    /// The quaternion is normalized first, matching the authoring tool's
    /// quaternion-to-matrix behavior for non-unit inputs.
    pub fn to_rotation_matrix(&self) -> [[f64; 3]; 3] {
        let q = self.normalized();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);

        let xx = x * x;
        let xy = x * y;
        let xz = x * z;
        let xw = x * w;
        let yy = y * y;
        let yz = y * z;
        let yw = y * w;
        let zz = z * z;
        let zw = z * w;

        [
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - zw), 2.0 * (xz + yw)],
            [2.0 * (xy + zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - xw)],
            [2.0 * (xz - yw), 2.0 * (yz + xw), 1.0 - 2.0 * (xx + yy)],
        ]
    }

    /// Convert to XYZ Euler angles in radians
    ///
    /// Decomposes the rotation as Rz * Ry * Rx (rotations applied X, then Y,
    /// then Z), with a gimbal-lock fallback where Z is forced to zero.
    pub fn to_euler_xyz(&self) -> [f64; 3] {
        let m = self.to_rotation_matrix();
        let cy = m[0][0].hypot(m[1][0]);

        if cy > 1e-8 {
            [
                m[2][1].atan2(m[2][2]),
                (-m[2][0]).atan2(cy),
                m[1][0].atan2(m[0][0]),
            ]
        } else {
            [(-m[1][2]).atan2(m[1][1]), (-m[2][0]).atan2(cy), 0.0]
        }
    }

    /// Convert to XYZ Euler angles in degrees
    pub fn to_euler_degrees(&self) -> [f64; 3] {
        let [x, y, z] = self.to_euler_xyz();
        [x.to_degrees(), y.to_degrees(), z.to_degrees()]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}
