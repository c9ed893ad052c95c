/// Skeletal adjacency for the 17-part PoseNet model. Limbs chain
/// wrist-elbow-shoulder-hip-knee-ankle on each side, closed by the
/// shoulder and hip crossbars.
pub const SKELETON: [(&str, &str); 12] = [
    ("leftWrist", "leftElbow"),
    ("leftElbow", "leftShoulder"),
    ("leftShoulder", "leftHip"),
    ("leftHip", "leftKnee"),
    ("leftKnee", "leftAnkle"),
    ("rightWrist", "rightElbow"),
    ("rightElbow", "rightShoulder"),
    ("rightShoulder", "rightHip"),
    ("rightHip", "rightKnee"),
    ("rightKnee", "rightAnkle"),
    ("leftShoulder", "rightShoulder"),
    ("leftHip", "rightHip"),
];

/// Base depth offsets keyed by unprefixed part name, in model units before
/// scaling. Positive is toward the camera: the nose leads, the ears sit
/// behind the head plane, and the arm steps forward from shoulder to wrist.
pub const BASE_DEPTH_OFFSETS: [(&str, f32); 9] = [
    ("nose", 2.0),
    ("eye", 1.2),
    ("ear", -0.5),
    ("shoulder", 0.0),
    ("elbow", 0.4),
    ("wrist", 0.8),
    ("hip", 0.0),
    ("knee", 0.3),
    ("ankle", 0.1),
];

/// Resolves a part name to its base depth offset.
///
/// Ordered lookup chain: exact table match, then the name with a leading
/// "left"/"right" stripped (case-insensitive, sign mirrored for the right
/// side), then zero.
pub fn base_depth_offset(part: &str) -> f32 {
    if let Some(v) = lookup(part) {
        return v;
    }
    for (prefix, sign) in [("left", 1.0f32), ("right", -1.0f32)] {
        let Some(head) = part.get(..prefix.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(prefix) && part.len() > prefix.len() {
            let stem = part[prefix.len()..].to_ascii_lowercase();
            if let Some(v) = lookup(&stem) {
                return sign * v;
            }
        }
    }
    0.0
}

fn lookup(name: &str) -> Option<f32> {
    BASE_DEPTH_OFFSETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
}
