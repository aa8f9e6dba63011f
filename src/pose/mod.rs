// src/pose/mod.rs
//! Procedural humanoid posing driven by a periodic gait phase

pub mod gait;
pub mod skeleton;

pub use gait::GaitPoseEngine;
pub use skeleton::{JointId, ALL_JOINTS, JOINT_COUNT, PARENT, REST_OFFSET};
