// THEORY:
// The `hand_analyzer` is the engine of the geometric path. It is a stateless,
// per-frame analyzer: given one hand's 21 keypoints it produces a framing
// verdict and, when the framing is workable, a discrete extension state for
// each finger. It has no memory of previous frames; temporal behavior belongs
// to the debouncing layer above it.
//
// Key architectural principles & algorithm steps:
// 1.  **Distance Gating**: The axis-aligned bounding box over all 21 points is
//     computed first. `size = max(width, height)` in normalized frame units.
//     Below the minimum span the hand is too far to read; above the maximum it
//     overflows the frame. In both cases analysis aborts and only the verdict
//     is reported, so the display layer can coach the signer into frame.
// 2.  **Lateral Thumb Test**: The thumb folds across the palm rather than
//     curling toward the wrist, so its extension is judged by horizontal
//     displacement of the tip from the MCP joint, independent of y.
// 3.  **Vertical Finger Test**: The four fingers are judged extended when the
//     tip sits strictly above both reference joints (MCP and PIP) by a margin,
//     in image coordinates where smaller y is higher.
// 4.  **Stateless Utility**: Both the verdict and the finger state are returned
//     to the caller every frame, whether or not a letter match is attempted
//     afterwards.

use crate::core_modules::finger_state::{DistanceJudgment, FingerStateVector};
use crate::core_modules::landmark::{
    Hand, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP,
    PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_MCP, THUMB_TIP,
};
use tracing::debug;

/// Minimum bounding-box span (normalized) for a readable hand.
const MIN_HAND_SPAN: f32 = 0.1;
/// Maximum bounding-box span before the hand overflows the frame.
const MAX_HAND_SPAN: f32 = 0.8;
/// Horizontal tip-to-MCP displacement that counts as an extended thumb.
const THUMB_SPREAD_THRESHOLD: f32 = 0.1;
/// Margin by which a fingertip must sit above both reference joints.
const EXTENSION_MARGIN: f32 = 0.1;

/// The per-frame output of geometric analysis.
///
/// The judgment is always present; the finger state only when the judgment is
/// `Good`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAnalysis {
    pub judgment: DistanceJudgment,
    pub finger_state: Option<FingerStateVector>,
}

/// Analyzes one hand's keypoints into a framing verdict and finger state.
pub fn analyze(hand: &Hand) -> HandAnalysis {
    let judgment = judge_distance(hand);
    if judgment != DistanceJudgment::Good {
        debug!(judgment = judgment.as_str(), "hand out of framing range");
        return HandAnalysis {
            judgment,
            finger_state: None,
        };
    }

    let finger_state = FingerStateVector {
        thumb: thumb_extended(hand),
        index: finger_extended(hand, INDEX_TIP, INDEX_MCP, INDEX_PIP),
        middle: finger_extended(hand, MIDDLE_TIP, MIDDLE_MCP, MIDDLE_PIP),
        ring: finger_extended(hand, RING_TIP, RING_MCP, RING_PIP),
        pinky: finger_extended(hand, PINKY_TIP, PINKY_MCP, PINKY_PIP),
        // Curvature is not measured geometrically; patterns that require it
        // match only through their wildcard entries.
        is_curved: false,
    };

    HandAnalysis {
        judgment,
        finger_state: Some(finger_state),
    }
}

/// Judges framing distance from the bounding box over all 21 keypoints.
fn judge_distance(hand: &Hand) -> DistanceJudgment {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;

    for landmark in hand.landmarks() {
        min_x = min_x.min(landmark.x);
        min_y = min_y.min(landmark.y);
        max_x = max_x.max(landmark.x);
        max_y = max_y.max(landmark.y);
    }

    let size = (max_x - min_x).max(max_y - min_y);
    if size < MIN_HAND_SPAN {
        DistanceJudgment::TooFar
    } else if size > MAX_HAND_SPAN {
        DistanceJudgment::TooClose
    } else {
        DistanceJudgment::Good
    }
}

/// The thumb is extended when its tip is laterally displaced from the MCP.
/// Orientation-relative: works for either hand, pointing either way.
fn thumb_extended(hand: &Hand) -> bool {
    let tip = hand.point(THUMB_TIP);
    let mcp = hand.point(THUMB_MCP);
    (tip.x - mcp.x).abs() > THUMB_SPREAD_THRESHOLD
}

/// A finger is extended when its tip sits strictly above both the MCP and PIP
/// joints by the margin. Smaller y is higher in image coordinates.
fn finger_extended(hand: &Hand, tip: usize, mcp: usize, pip: usize) -> bool {
    let tip_y = hand.point(tip).y;
    tip_y < hand.point(mcp).y - EXTENSION_MARGIN && tip_y < hand.point(pip).y - EXTENSION_MARGIN
}
