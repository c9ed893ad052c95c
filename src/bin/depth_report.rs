use clap::Parser;
use pose_depth_estimation::config::EstimatorConfig;
use pose_depth_estimation::depth::DepthEstimator;
use pose_depth_estimation::io::load_recorded_frames;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct PDESCli {
    /// path to a recorded pose sequence (JSON array of frames)
    path: String,

    /// minimum keypoint confidence
    #[arg(long, default_value_t = 0.2)]
    min_score: f32,

    /// multiplier for the base depth offset table
    #[arg(long, default_value_t = 30.0)]
    depth_scale: f32,
}

fn main() {
    env_logger::init();
    let cli = PDESCli::parse();
    let config = EstimatorConfig {
        min_score: cli.min_score,
        depth_scale: cli.depth_scale,
    };
    let mut estimator = DepthEstimator::from_config(&config);
    let mut frames = load_recorded_frames(&cli.path).expect("failed to load recording");

    let now = Instant::now();
    let mut lifted = 0usize;
    for pose in &mut frames {
        estimator.estimate(pose);
        lifted += pose
            .bones
            .iter()
            .filter(|b| pose.bone_length_3d(b) > pose.bone_length_2d(b) + 1e-3)
            .count();
    }
    let duration_sec = now.elapsed().as_secs_f64();
    println!("processed {} frames in {:.6} sec", frames.len(), duration_sec);
    if !frames.is_empty() {
        println!("avg: {} sec", duration_sec / frames.len() as f64);
    }
    println!("bones lifted off the image plane: {}", lifted);

    let mut entries: Vec<_> = estimator.max_lengths().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    println!("historical max 2D bone lengths:");
    for (key, len) in entries {
        println!("    {:24} {:8.2}", key, len);
    }
}
