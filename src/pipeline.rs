// THEORY:
// The `pipeline` module is the final, top-level API for the entire recognition
// engine. It encapsulates the full architectural stack into a single interface:
// feed it one hand's landmarks per frame and it carries them through geometric
// analysis, letter matching, and temporal debouncing into the session text.
// The landmark-independent pixel path (skin segmentation) is exposed beside it
// and shares no state with it.
//
// Processing is frame-synchronous and single-threaded: each frame is carried
// to completion before the next is admitted. The one asynchronous element is
// the debounce timer; `flush_pending` sleeps until the open window's deadline
// so a stable pose commits even when no further frame arrives to observe it.

use crate::core_modules::contour::contour_extractor;
use crate::core_modules::debouncer::{Debouncer, DEFAULT_DEBOUNCE_WINDOW_MS};
use crate::core_modules::hand_analyzer;
use crate::core_modules::letter_matcher;
use crate::core_modules::session::RecognitionSession;
use crate::core_modules::skin_mask::SkinMask;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

// Re-export key data structures for the public API.
pub use crate::core_modules::contour::contour_extractor::{BoundingBox, Contour};
pub use crate::core_modules::external::{ClassifierError, ExternalClassifier, Verdict};
pub use crate::core_modules::finger_state::{DistanceJudgment, FingerStateVector};
pub use crate::core_modules::landmark::{Hand, Landmark, LandmarkError};

/// Configuration for the RecognitionPipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Quiet window a candidate letter must survive before it is accepted.
    pub debounce_window_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_width: 640,
            image_height: 480,
            debounce_window_ms: DEFAULT_DEBOUNCE_WINDOW_MS,
        }
    }
}

/// The primary output of the recognition pipeline for a single frame.
///
/// Judgment and finger state are surfaced every frame for display, whether or
/// not a letter was matched or recording is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub judgment: DistanceJudgment,
    pub finger_state: Option<FingerStateVector>,
    /// The raw letter the matcher proposed this frame, before debouncing.
    pub candidate: Option<char>,
    /// A letter committed to the session text while processing this frame.
    pub committed: Option<char>,
}

/// The main, top-level struct for the recognition engine.
pub struct RecognitionPipeline {
    config: PipelineConfig,
    session: RecognitionSession,
    debouncer: Debouncer,
}

impl RecognitionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let debouncer = Debouncer::new(Duration::from_millis(config.debounce_window_ms));
        Self {
            config,
            session: RecognitionSession::new(),
            debouncer,
        }
    }

    /// Begins a recording run: fresh session text, no pending debounce window.
    pub fn start_recording(&mut self) {
        self.session.start();
        self.debouncer.reset();
        debug!("recording started");
    }

    /// Ends the run. An in-flight debounce window is abandoned, not flushed.
    pub fn stop_recording(&mut self) {
        self.session.stop();
        self.debouncer.reset();
        debug!("recording stopped");
    }

    /// User-driven clear of the accumulated text.
    pub fn clear_text(&mut self) {
        self.session.clear();
    }

    pub fn text(&self) -> &str {
        self.session.text()
    }

    pub fn session(&self) -> &RecognitionSession {
        &self.session
    }

    /// Processes one frame's hand landmarks at the current wall-clock time.
    pub fn process_frame(&mut self, hand: &Hand) -> Report {
        self.process_frame_at(hand, Instant::now())
    }

    /// Clock-explicit variant of `process_frame`, the form tests drive.
    pub fn process_frame_at(&mut self, hand: &Hand, now: Instant) -> Report {
        // Stage 0: Commit any window whose deadline elapsed between frames.
        let mut committed = None;
        if self.session.is_recording() {
            committed = self.debouncer.poll(now, &mut self.session);
        }

        // Stage 1: Geometric analysis.
        let analysis = hand_analyzer::analyze(hand);

        // Stage 2: Letter matching, only on a well-framed hand.
        let candidate = analysis
            .finger_state
            .as_ref()
            .and_then(letter_matcher::match_letter);

        // Stage 3: Temporal debouncing.
        if self.session.is_recording() {
            if let Some(letter) = candidate {
                self.debouncer.on_candidate(letter, now);
            }
        }

        Report {
            judgment: analysis.judgment,
            finger_state: analysis.finger_state,
            candidate,
            committed,
        }
    }

    /// Sleeps until the open debounce window's deadline and commits it. The
    /// single asynchronous element of the engine; resolves immediately to
    /// `None` when no window is pending.
    pub async fn flush_pending(&mut self) -> Option<char> {
        let deadline = self.debouncer.pending_deadline()?;
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        self.debouncer.poll(Instant::now(), &mut self.session)
    }

    /// Consults the external classifier for one hand and applies its verdict.
    pub fn consult_external<C: ExternalClassifier>(
        &mut self,
        classifier: &mut C,
        hand: &Hand,
    ) -> Option<char> {
        let verdict = classifier.classify(hand);
        self.apply_external_verdict(verdict)
    }

    /// Applies an external verdict: letters append directly to the session
    /// text with no debounce window; unknowns and failures are skipped.
    pub fn apply_external_verdict(
        &mut self,
        verdict: Result<Verdict, ClassifierError>,
    ) -> Option<char> {
        if !self.session.is_recording() {
            return None;
        }
        match verdict {
            Ok(Verdict::Letter(letter)) => {
                self.session.accept(letter);
                debug!(letter = %letter, "external verdict appended");
                Some(letter)
            }
            Ok(Verdict::Unknown) => None,
            Err(error) => {
                warn!(%error, "external classification skipped");
                None
            }
        }
    }

    /// The landmark-independent pixel path: segments a raw RGBA frame into the
    /// largest skin-colored region and returns its bounding box.
    pub fn extract_largest_region(&self, frame_buffer: &[u8]) -> Option<BoundingBox> {
        let mask = SkinMask::from_rgba(frame_buffer, self.config.image_width, self.config.image_height);
        contour_extractor::extract_largest_region(&mask)
    }
}
