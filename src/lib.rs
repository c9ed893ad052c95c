pub mod config;
pub mod depth;
pub mod io;
pub mod pose;
pub mod topology;

pub use config::EstimatorConfig;
pub use depth::DepthEstimator;
pub use pose::{Bone, Keypoint, Pose};
