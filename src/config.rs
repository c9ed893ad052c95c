use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Minimum keypoint confidence for a bone to be recorded or adjusted.
    pub min_score: f32,
    /// Multiplier applied to the base depth offset table.
    pub depth_scale: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_score: 0.2,
            depth_scale: 30.0,
        }
    }
}
