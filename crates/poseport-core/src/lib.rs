//! Poseport Core Library
//!
//! This crate provides the shared math types and error handling
//! used across all poseport components.

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{Quat, Vec3};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result, ResultExt};
    pub use crate::math::{Quat, Vec3};
}
