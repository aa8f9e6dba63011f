// src/pose/skeleton.rs
//! Fixed humanoid skeleton topology
//!
//! The skeleton is a static tree described by parallel index tables: a parent
//! table and a rest-pose offset table. Nothing here is re-parented or
//! reallocated at runtime; only the per-frame local rotations (owned by the
//! pose engine) animate. Joints are declared parents-first so a single forward
//! pass resolves world transforms.

use glam::Vec3;

/// Named joints of the fixed humanoid rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum JointId {
    /// Pelvis; the only joint with an animated translation (vertical bob).
    Root = 0,
    /// Lower spine.
    Spine,
    /// Upper torso.
    Chest,
    /// Neck.
    Neck,
    /// Head.
    Head,
    /// Left shoulder.
    LeftShoulder,
    /// Left elbow.
    LeftElbow,
    /// Left wrist.
    LeftWrist,
    /// Right shoulder.
    RightShoulder,
    /// Right elbow.
    RightElbow,
    /// Right wrist.
    RightWrist,
    /// Left hip.
    LeftHip,
    /// Left knee.
    LeftKnee,
    /// Left ankle.
    LeftAnkle,
    /// Left toe.
    LeftToe,
    /// Right hip.
    RightHip,
    /// Right knee.
    RightKnee,
    /// Right ankle.
    RightAnkle,
    /// Right toe.
    RightToe,
}

/// Total number of joints in the rig.
pub const JOINT_COUNT: usize = 19;

/// All joints in parents-first order; indexing matches `JointId as usize`.
pub const ALL_JOINTS: [JointId; JOINT_COUNT] = [
    JointId::Root,
    JointId::Spine,
    JointId::Chest,
    JointId::Neck,
    JointId::Head,
    JointId::LeftShoulder,
    JointId::LeftElbow,
    JointId::LeftWrist,
    JointId::RightShoulder,
    JointId::RightElbow,
    JointId::RightWrist,
    JointId::LeftHip,
    JointId::LeftKnee,
    JointId::LeftAnkle,
    JointId::LeftToe,
    JointId::RightHip,
    JointId::RightKnee,
    JointId::RightAnkle,
    JointId::RightToe,
];

/// Parent of each joint; `None` only for the root.
pub const PARENT: [Option<JointId>; JOINT_COUNT] = [
    None,                         // Root
    Some(JointId::Root),          // Spine
    Some(JointId::Spine),         // Chest
    Some(JointId::Chest),         // Neck
    Some(JointId::Neck),          // Head
    Some(JointId::Chest),         // LeftShoulder
    Some(JointId::LeftShoulder),  // LeftElbow
    Some(JointId::LeftElbow),     // LeftWrist
    Some(JointId::Chest),         // RightShoulder
    Some(JointId::RightShoulder), // RightElbow
    Some(JointId::RightElbow),    // RightWrist
    Some(JointId::Root),          // LeftHip
    Some(JointId::LeftHip),       // LeftKnee
    Some(JointId::LeftKnee),      // LeftAnkle
    Some(JointId::LeftAnkle),     // LeftToe
    Some(JointId::Root),          // RightHip
    Some(JointId::RightHip),      // RightKnee
    Some(JointId::RightKnee),     // RightAnkle
    Some(JointId::RightAnkle),    // RightToe
];

/// Rest-pose translation of each joint relative to its parent, in meters.
/// Set once; never mutated.
pub const REST_OFFSET: [Vec3; JOINT_COUNT] = [
    Vec3::new(0.0, 1.05, 0.0),     // Root
    Vec3::new(0.0, 0.18, 0.0),     // Spine
    Vec3::new(0.0, 0.25, 0.0),     // Chest
    Vec3::new(0.0, 0.18, 0.0),     // Neck
    Vec3::new(0.0, 0.14, 0.0),     // Head
    Vec3::new(-0.18, 0.14, 0.0),   // LeftShoulder
    Vec3::new(-0.22, -0.22, 0.02), // LeftElbow
    Vec3::new(-0.18, -0.22, -0.04), // LeftWrist
    Vec3::new(0.18, 0.14, 0.0),    // RightShoulder
    Vec3::new(0.22, -0.22, 0.02),  // RightElbow
    Vec3::new(0.18, -0.22, -0.04), // RightWrist
    Vec3::new(-0.12, -0.05, 0.0),  // LeftHip
    Vec3::new(0.0, -0.45, 0.08),   // LeftKnee
    Vec3::new(0.0, -0.42, -0.05),  // LeftAnkle
    Vec3::new(0.0, -0.08, 0.18),   // LeftToe
    Vec3::new(0.12, -0.05, 0.0),   // RightHip
    Vec3::new(0.0, -0.45, -0.08),  // RightKnee
    Vec3::new(0.0, -0.42, 0.05),   // RightAnkle
    Vec3::new(0.0, -0.08, 0.18),   // RightToe
];

impl JointId {
    /// Arena index of this joint.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parent joint, or `None` for the root.
    #[inline]
    pub const fn parent(self) -> Option<JointId> {
        PARENT[self as usize]
    }

    /// Rest-pose translation relative to the parent.
    #[inline]
    pub const fn rest_offset(self) -> Vec3 {
        REST_OFFSET[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(ALL_JOINTS.len(), JOINT_COUNT);
        for (i, joint) in ALL_JOINTS.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }

    #[test]
    fn test_parents_precede_children() {
        for joint in ALL_JOINTS {
            if let Some(parent) = joint.parent() {
                assert!(parent.index() < joint.index());
            }
        }
    }

    #[test]
    fn test_only_root_is_parentless() {
        let orphans: Vec<_> = ALL_JOINTS.iter().filter(|j| j.parent().is_none()).collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(*orphans[0], JointId::Root);
    }

    #[test]
    fn test_rest_pose_is_bilaterally_symmetric() {
        let pairs = [
            (JointId::LeftShoulder, JointId::RightShoulder),
            (JointId::LeftElbow, JointId::RightElbow),
            (JointId::LeftWrist, JointId::RightWrist),
            (JointId::LeftHip, JointId::RightHip),
        ];
        for (left, right) in pairs {
            let l = left.rest_offset();
            let r = right.rest_offset();
            assert!((l.x + r.x).abs() < 1e-6);
            assert!((l.y - r.y).abs() < 1e-6);
        }
    }
}
