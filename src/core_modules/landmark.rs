// THEORY:
// The `landmark` module is the most fundamental unit of the geometric path. It is
// a "dumb" data container for the 21 tracked keypoints of a single hand, plus the
// fixed index table that gives each keypoint its anatomical meaning. Every module
// downstream of this one depends on that indexing, so the container's job is to
// make the invariant unbreakable: a `Hand` can only be constructed from exactly
// 21 points, and a malformed provider payload is rejected at this boundary with
// an explicit error instead of being read out of range later.
//
// Key architectural principles:
// 1.  **Fixed Semantic Indexing**: Index 0 is the wrist, 1-4 the thumb chain,
//     5-8 index, 9-12 middle, 13-16 ring, 17-20 pinky. The named constants below
//     are the only way downstream code addresses a joint.
// 2.  **Fail-Fast Ingestion**: Length is validated exactly once, here. Analyzers
//     index the internal array freely because the type guarantees 21 entries.
// 3.  **Wire-Ready**: `Landmark` and `Hand` serialize, so the same container is
//     the payload for the supplementary external classifier contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of tracked keypoints in one hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Errors raised at the landmark ingestion boundary.
#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error("invalid landmark set: expected {LANDMARK_COUNT} points, got {0}")]
    InvalidLandmarkCount(usize),
    #[error("invalid landmark payload: expected {expected} floats, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },
}

/// A single tracked 2D/3D keypoint on a hand.
///
/// `x` and `y` are normalized to [0, 1] relative to frame width/height, with
/// (0, 0) at the top-left of the frame. `z` is a relative depth. `visibility`
/// is an optional tracking confidence in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }
}

/// An ordered set of exactly 21 landmarks for one hand.
///
/// The array is private so the fixed indexing cannot be violated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Hand {
    /// Builds a hand from a slice of points, rejecting any length other than 21.
    pub fn from_landmarks(points: &[Landmark]) -> Result<Self, LandmarkError> {
        let landmarks: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::InvalidLandmarkCount(points.len()))?;
        Ok(Self { landmarks })
    }

    /// Parses the flat `[x0, y0, z0, x1, y1, z1, ...]` payload that tracking
    /// providers deliver per frame (63 floats for one hand).
    pub fn from_flat(flat: &[f32]) -> Result<Self, LandmarkError> {
        let expected = LANDMARK_COUNT * 3;
        if flat.len() != expected {
            return Err(LandmarkError::InvalidPayloadLength {
                expected,
                actual: flat.len(),
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (i, landmark) in landmarks.iter_mut().enumerate() {
            let base = i * 3;
            *landmark = Landmark::new(flat[base], flat[base + 1], flat[base + 2]);
        }
        Ok(Self { landmarks })
    }

    /// The keypoint at a fixed anatomical index. Callers address joints through
    /// the named constants in this module.
    pub fn point(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }
}
