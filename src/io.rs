use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::pose::{Keypoint, Pose};

#[derive(Debug, Serialize, Deserialize)]
struct RawPosition {
    x: f32,
    y: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawKeypoint {
    part: String,
    position: RawPosition,
    score: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawFrame {
    keypoints: Vec<RawKeypoint>,
}

/// Loads a recorded pose sequence from a JSON file.
///
/// The file holds an array of frames, each
/// `{"keypoints": [{"part", "position": {"x", "y"}, "score"}]}`. A frame's
/// `skeleton` field, if present, is ignored; bones always come from the
/// topology table.
pub fn load_recorded_frames<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Pose>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let frames: Vec<RawFrame> = serde_json::from_str(&contents)?;
    Ok(frames.into_iter().map(frame_to_pose).collect())
}

/// Serializes poses back to the recorded-frame JSON shape.
pub fn save_recorded_frames<P: AsRef<Path>>(
    path: P,
    poses: &[Pose],
) -> Result<(), Box<dyn std::error::Error>> {
    let frames: Vec<RawFrame> = poses.iter().map(pose_to_frame).collect();
    let j = serde_json::to_string_pretty(&frames)?;
    std::fs::write(path, j)?;
    Ok(())
}

fn frame_to_pose(frame: RawFrame) -> Pose {
    let keypoints = frame
        .keypoints
        .into_iter()
        .map(|k| {
            Keypoint::new(
                k.part,
                Vec2::new(k.position.x, k.position.y),
                k.score,
            )
        })
        .collect();
    Pose::from_keypoints(keypoints)
}

fn pose_to_frame(pose: &Pose) -> RawFrame {
    let keypoints = pose
        .keypoints
        .iter()
        .map(|k| RawKeypoint {
            part: k.part.clone(),
            position: RawPosition {
                x: k.position.x,
                y: k.position.y,
            },
            score: k.score,
        })
        .collect();
    RawFrame { keypoints }
}
