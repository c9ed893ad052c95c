use glam::{Vec2, Vec3};

use crate::topology::SKELETON;

/// A single named anatomical landmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Keypoint {
    pub part: String,
    pub position: Vec2,
    /// Model-reported confidence in [0, 1].
    pub score: f32,
    /// Depth coordinate, zero until assigned by the estimator.
    pub z: f32,
}

impl Keypoint {
    pub fn new(part: impl Into<String>, position: Vec2, score: f32) -> Keypoint {
        Keypoint {
            part: part.into(),
            position,
            score,
            z: 0.0,
        }
    }

    pub fn position_3d(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y, self.z)
    }
}

/// A skeletal segment between two keypoints, stored as indices into the
/// owning pose's keypoint vec. Identified by the `"{part1}-{part2}"` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bone {
    pub a: usize,
    pub b: usize,
    pub key: String,
}

/// One frame's detection result: keypoints plus the bones derived from them.
#[derive(Debug, Clone)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
    pub bones: Vec<Bone>,
}

impl Pose {
    /// Builds a pose from detected keypoints.
    ///
    /// Bones come from the fixed topology table; a pair whose parts are not
    /// both present in the keypoint set is dropped without error.
    pub fn from_keypoints(keypoints: Vec<Keypoint>) -> Pose {
        let bones = SKELETON
            .iter()
            .filter_map(|&(p1, p2)| {
                let a = keypoints.iter().position(|k| k.part == p1)?;
                let b = keypoints.iter().position(|k| k.part == p2)?;
                Some(Bone {
                    a,
                    b,
                    key: format!("{}-{}", p1, p2),
                })
            })
            .collect();
        Pose { keypoints, bones }
    }

    pub fn bone_length_2d(&self, bone: &Bone) -> f32 {
        self.keypoints[bone.a]
            .position
            .distance(self.keypoints[bone.b].position)
    }

    pub fn bone_length_3d(&self, bone: &Bone) -> f32 {
        self.keypoints[bone.a]
            .position_3d()
            .distance(self.keypoints[bone.b].position_3d())
    }
}
