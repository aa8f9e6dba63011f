// src/pose/gait.rs
//! Gait-phase-driven pose generation
//!
//! The engine keeps a monotonically advancing clock and derives everything
//! else from the normalized gait phase `frac(clock * cycle_rate)`. All joint
//! drives are trig functions of `2*pi*phase`, so a phase wrap from 0.999 to
//! 0.001 cannot jump any joint angle.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::config::GaitConfig;
use crate::pose::skeleton::{JointId, ALL_JOINTS, JOINT_COUNT};

/// Procedural walking-pose generator for the fixed humanoid skeleton.
///
/// Each joint drives exactly one rotation axis: pitch everywhere except the
/// chest, which sways in yaw. Hips and shoulders counter-swing so the arms
/// move opposite to the same-side leg, knees and elbows flex on rectified
/// half-cycles, and the pelvis bobs twice per cycle.
pub struct GaitPoseEngine {
    config: GaitConfig,
    clock: f64,
    phase: f32,
    /// Driven-axis angle per joint, radians. Undriven joints stay at zero.
    angles: [f32; JOINT_COUNT],
    root_height: f32,
}

impl GaitPoseEngine {
    /// Create an engine at rest pose (phase zero, clock zero).
    pub fn new(config: GaitConfig) -> Self {
        Self {
            root_height: config.base_height_m,
            config,
            clock: 0.0,
            phase: 0.0,
            angles: [0.0; JOINT_COUNT],
        }
    }

    /// Advance the internal clock by `dt * speed` seconds and recompute the
    /// pose. `dt = 0` leaves the pose unchanged.
    pub fn update(&mut self, dt: f32, speed: f32) {
        debug_assert!(dt >= 0.0, "dt must be non-negative");
        debug_assert!(speed >= 0.0, "speed must be non-negative");

        self.clock += f64::from(dt) * f64::from(speed);
        self.phase = (self.clock * f64::from(self.config.cycle_rate_hz)).fract() as f32;
        self.apply_phase();
    }

    fn apply_phase(&mut self) {
        let c = &self.config;
        let swing = (self.phase * TAU).sin();
        let lift = swing.max(0.0);

        let left_knee = (-swing).max(0.0) * c.knee_flex_rad;
        let right_knee = swing.max(0.0) * c.knee_flex_rad;

        let a = &mut self.angles;
        a[JointId::LeftHip.index()] = swing * c.hip_swing_rad;
        a[JointId::RightHip.index()] = -swing * c.hip_swing_rad;
        a[JointId::LeftKnee.index()] = left_knee;
        a[JointId::RightKnee.index()] = right_knee;
        a[JointId::LeftAnkle.index()] = -left_knee * c.ankle_coupling;
        a[JointId::RightAnkle.index()] = -right_knee * c.ankle_coupling;

        // Arms counter-rotate against the same-side leg.
        a[JointId::LeftShoulder.index()] = -swing * c.shoulder_swing_rad;
        a[JointId::RightShoulder.index()] = swing * c.shoulder_swing_rad;
        a[JointId::LeftElbow.index()] = swing.max(0.0) * c.elbow_flex_rad;
        a[JointId::RightElbow.index()] = (-swing).max(0.0) * c.elbow_flex_rad;

        a[JointId::Spine.index()] = swing * c.spine_sway_rad;
        a[JointId::Chest.index()] = swing * c.chest_sway_rad;
        a[JointId::Neck.index()] = -swing * c.neck_sway_rad;

        // Rectified sine, so the pelvis bobs twice per gait cycle.
        self.root_height = c.base_height_m + lift * c.root_bob_m;
    }

    /// Current normalized gait phase in `[0, 1)`.
    #[inline]
    pub fn gait_phase(&self) -> f32 {
        self.phase
    }

    /// Driven-axis angle of a joint in radians.
    #[inline]
    pub fn angle(&self, joint: JointId) -> f32 {
        self.angles[joint.index()]
    }

    /// Current pelvis height above the ground plane.
    #[inline]
    pub fn root_height(&self) -> f32 {
        self.root_height
    }

    /// Local rotation of a joint as a quaternion.
    pub fn local_rotation(&self, joint: JointId) -> Quat {
        let angle = self.angles[joint.index()];
        match joint {
            JointId::Chest => Quat::from_rotation_y(angle),
            _ => Quat::from_rotation_x(angle),
        }
    }

    /// Local translation of a joint relative to its parent. Constant rest
    /// offsets everywhere except the root, whose height animates.
    pub fn local_translation(&self, joint: JointId) -> Vec3 {
        match joint {
            JointId::Root => Vec3::new(0.0, self.root_height, 0.0),
            _ => joint.rest_offset(),
        }
    }

    /// World-space joint positions, resolved in one parents-first pass.
    ///
    /// This is what a renderer binds skeleton meshes to; it receives a copy,
    /// never a reference into engine state.
    pub fn world_positions(&self) -> [Vec3; JOINT_COUNT] {
        let mut rotations = [Quat::IDENTITY; JOINT_COUNT];
        let mut positions = [Vec3::ZERO; JOINT_COUNT];

        for joint in ALL_JOINTS {
            let i = joint.index();
            match joint.parent() {
                None => {
                    rotations[i] = self.local_rotation(joint);
                    positions[i] = self.local_translation(joint);
                }
                Some(parent) => {
                    let p = parent.index();
                    rotations[i] = rotations[p] * self.local_rotation(joint);
                    positions[i] = positions[p] + rotations[p] * self.local_translation(joint);
                }
            }
        }

        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GaitPoseEngine {
        GaitPoseEngine::new(GaitConfig::default())
    }

    #[test]
    fn test_initial_pose_is_rest() {
        let engine = engine();
        assert_eq!(engine.gait_phase(), 0.0);
        assert_eq!(engine.angle(JointId::LeftHip), 0.0);
        assert!((engine.root_height() - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut engine = engine();
        engine.update(0.4, 1.0);
        let phase = engine.gait_phase();
        let hip = engine.angle(JointId::LeftHip);
        engine.update(0.0, 1.0);
        assert_eq!(engine.gait_phase(), phase);
        assert_eq!(engine.angle(JointId::LeftHip), hip);
    }

    #[test]
    fn test_knees_never_hyperextend() {
        let mut engine = engine();
        for _ in 0..500 {
            engine.update(0.013, 1.7);
            assert!(engine.angle(JointId::LeftKnee) >= 0.0);
            assert!(engine.angle(JointId::RightKnee) >= 0.0);
        }
    }

    #[test]
    fn test_ankle_couples_to_knee() {
        let mut engine = engine();
        engine.update(0.3, 1.0);
        let knee = engine.angle(JointId::LeftKnee);
        let ankle = engine.angle(JointId::LeftAnkle);
        assert!((ankle + knee * 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_full_cycle_returns_to_base_height() {
        let mut engine = engine();
        // 1.25 s at cycle rate 0.8 is exactly one cycle.
        engine.update(1.25, 1.0);
        assert!(engine.gait_phase().abs() < 1e-6);
        assert!((engine.root_height() - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_world_positions_head_above_root() {
        let mut engine = engine();
        engine.update(0.1, 1.0);
        let positions = engine.world_positions();
        let root = positions[JointId::Root.index()];
        let head = positions[JointId::Head.index()];
        assert!(head.y > root.y);
    }

    #[test]
    fn test_speed_scales_clock() {
        let mut slow = engine();
        let mut fast = engine();
        slow.update(0.5, 1.0);
        fast.update(0.25, 2.0);
        assert!((slow.gait_phase() - fast.gait_phase()).abs() < 1e-6);
    }
}
