use std::collections::HashMap;

use log::{debug, trace};

use crate::config::EstimatorConfig;
use crate::pose::{Bone, Pose};
use crate::topology::base_depth_offset;

/// Estimates a depth coordinate for 2D pose keypoints.
///
/// Works from the taut-rope assumption: a bone's true length equals the
/// largest 2D projection ever observed for it, since the projection is
/// longest when the bone lies parallel to the image plane. Per frame the
/// estimator records new 2D maxima, seeds every keypoint's Z from a static
/// anatomical prior, then pushes foreshortened bones' endpoints apart along
/// the depth axis toward the historical length.
pub struct DepthEstimator {
    min_score: f32,
    depth_scale: f32,
    max_bone_lengths: HashMap<String, f32>,
}

impl DepthEstimator {
    pub fn new() -> DepthEstimator {
        Self::from_config(&EstimatorConfig::default())
    }

    pub fn from_config(config: &EstimatorConfig) -> DepthEstimator {
        DepthEstimator {
            min_score: config.min_score,
            depth_scale: config.depth_scale,
            max_bone_lengths: HashMap::new(),
        }
    }

    /// Runs the full per-frame pipeline: record, assign, adjust.
    pub fn estimate(&mut self, pose: &mut Pose) {
        self.record_bone_lengths(pose);
        self.assign_base_depth(pose);
        self.adjust_bone_depth(pose);
    }

    /// Updates the historical 2D maximum for every confident bone.
    ///
    /// A bone below the confidence threshold is skipped on its own; it never
    /// stops the remaining bones from being recorded.
    pub fn record_bone_lengths(&mut self, pose: &Pose) {
        for bone in &pose.bones {
            if !self.confident(pose, bone) {
                continue;
            }
            let length = pose.bone_length_2d(bone);
            let last = self.max_bone_lengths.get(&bone.key).copied().unwrap_or(0.0);
            if length > last {
                debug!("new max length {}: {:.2}", bone.key, length);
                self.max_bone_lengths.insert(bone.key.clone(), length);
            }
        }
    }

    /// Seeds every keypoint's Z from the static per-part offset table,
    /// scaled by `depth_scale`. Not derived from the length history.
    pub fn assign_base_depth(&self, pose: &mut Pose) {
        for kp in &mut pose.keypoints {
            kp.z = base_depth_offset(&kp.part) * self.depth_scale;
        }
    }

    /// Pushes each foreshortened bone's endpoints apart along the depth axis.
    ///
    /// For a confident bone whose 3D length is below its historical maximum,
    /// half the shortfall is subtracted from the lower endpoint's Z and added
    /// to the higher one's (a tie moves the first endpoint down). Bones are
    /// visited in list order, so a keypoint shared by several bones
    /// accumulates every bone's nudge; the heuristic is order-dependent by
    /// construction and deterministic for a fixed topology.
    pub fn adjust_bone_depth(&self, pose: &mut Pose) {
        for bone in &pose.bones {
            if !self.confident(pose, bone) {
                continue;
            }
            let current = pose.bone_length_3d(bone);
            let max = self.max_bone_lengths.get(&bone.key).copied().unwrap_or(0.0);
            if current >= max {
                continue;
            }
            let delta = (max - current) / 2.0;
            let (low, high) = if pose.keypoints[bone.a].z <= pose.keypoints[bone.b].z {
                (bone.a, bone.b)
            } else {
                (bone.b, bone.a)
            };
            trace!("adjust {}: {:.2} -> {:.2}", bone.key, current, max);
            pose.keypoints[low].z -= delta;
            pose.keypoints[high].z += delta;
        }
    }

    /// Historical maximum 2D length for a bone key, if one has been observed.
    pub fn max_length(&self, key: &str) -> Option<f32> {
        self.max_bone_lengths.get(key).copied()
    }

    pub fn max_lengths(&self) -> &HashMap<String, f32> {
        &self.max_bone_lengths
    }

    fn confident(&self, pose: &Pose, bone: &Bone) -> bool {
        pose.keypoints[bone.a].score >= self.min_score
            && pose.keypoints[bone.b].score >= self.min_score
    }
}

impl Default for DepthEstimator {
    fn default() -> Self {
        Self::new()
    }
}
