// THEORY:
// The `finger_state` module holds the two "dumb" data containers that carry the
// result of geometric analysis to the rest of the engine. A `FingerStateVector`
// is the five-boolean-plus-curve summary of one hand pose; a `DistanceJudgment`
// is the framing verdict that gates whether a pose is worth summarizing at all.
// Both are per-frame snapshot values with no identity beyond the frame they
// were computed from, much like a single detected region is a snapshot with no
// memory of previous frames.

use serde::Serialize;

/// The discrete extension state of one hand pose.
///
/// Produced fresh each frame and immutable once produced. `is_curved` exists so
/// letter patterns that care about curvature can be matched; the geometric
/// analyzer does not currently measure curvature and always reports `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FingerStateVector {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
    pub is_curved: bool,
}

/// Verdict on whether the hand is framed close enough for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceJudgment {
    /// The hand's bounding box is too small; move closer to the camera.
    TooFar,
    /// The hand's bounding box fills too much of the frame; move back.
    TooClose,
    /// The hand is framed well enough to classify.
    Good,
}

impl DistanceJudgment {
    /// String representation for display layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooFar => "too-far",
            Self::TooClose => "too-close",
            Self::Good => "good",
        }
    }
}
