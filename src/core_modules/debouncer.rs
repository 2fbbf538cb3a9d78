// THEORY:
// The `debouncer` is the heart of the temporal layer. Raw per-frame matches
// flicker: a signer transitioning between poses produces a burst of spurious
// candidates, and a held pose produces the same candidate thirty times a
// second. This module turns that stream into a stable once-per-gesture
// emission.
//
// Key architectural principles:
// 1.  **Explicit State Machine**: The debouncer is exactly two states, `Idle`
//     and `Pending { letter, deadline }`. Transitions happen on three inputs:
//     a new candidate, the deadline passing, and a session reset. There are no
//     nested callbacks and never more than one window pending.
// 2.  **Cancel-and-Restart**: Every candidate frame replaces the pending
//     window with a fresh one for that candidate. The last candidate wins, and
//     a letter commits only after a full quiet window with no further
//     candidates.
// 3.  **Edge-Triggered on Change**: A fired letter is accepted only when it
//     differs from the session's last accepted letter. Holding one pose emits
//     once; returning to it after a different letter emits again.
// 4.  **Clock-Agnostic Core**: Deadlines are plain `Instant`s supplied by the
//     caller, so the machine is deterministic under test. The pipeline layer
//     owns the one asynchronous element, a timer that sleeps until the
//     deadline.

use crate::core_modules::session::RecognitionSession;
use std::time::{Duration, Instant};
use tracing::debug;

/// Quiet window a candidate must survive before it is accepted.
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 500;

/// The two states of the debounce machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending { letter: char, deadline: Instant },
}

/// Turns raw per-frame letter candidates into once-per-gesture emissions.
pub struct Debouncer {
    state: DebounceState,
    window: Duration,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            state: DebounceState::Idle,
            window,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// The deadline of the pending window, if one is open.
    pub fn pending_deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::Pending { deadline, .. } => Some(deadline),
            DebounceState::Idle => None,
        }
    }

    /// Records a raw candidate, canceling any pending window and opening a
    /// fresh one for this letter.
    pub fn on_candidate(&mut self, letter: char, now: Instant) {
        self.state = DebounceState::Pending {
            letter,
            deadline: now + self.window,
        };
    }

    /// Fires the pending window if its deadline has passed. Returns the letter
    /// when it was accepted into the session; a letter equal to the session's
    /// last accepted one is dropped.
    pub fn poll(&mut self, now: Instant, session: &mut RecognitionSession) -> Option<char> {
        let DebounceState::Pending { letter, deadline } = self.state else {
            return None;
        };
        if now < deadline {
            return None;
        }

        self.state = DebounceState::Idle;
        if session.last_recognized() == Some(letter) {
            debug!(letter = %letter, "repeat of held letter suppressed");
            return None;
        }

        session.accept(letter);
        debug!(letter = %letter, "letter accepted");
        Some(letter)
    }

    /// Abandons any pending window. Called when recording starts or stops.
    pub fn reset(&mut self) {
        self.state = DebounceState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_WINDOW_MS);

    fn recording_session() -> RecognitionSession {
        let mut session = RecognitionSession::new();
        session.start();
        session
    }

    #[test]
    fn held_letter_commits_exactly_once() {
        let mut debouncer = Debouncer::new(WINDOW);
        let mut session = recording_session();
        let t0 = Instant::now();

        // Two seconds of 'A' candidates at ~30fps: every frame restarts the
        // window, so nothing fires mid-hold.
        let mut accepted = 0;
        for frame in 0..60u64 {
            let now = t0 + Duration::from_millis(frame * 33);
            if debouncer.poll(now, &mut session).is_some() {
                accepted += 1;
            }
            debouncer.on_candidate('A', now);
        }
        assert_eq!(accepted, 0);

        // A quiet window after the hold commits it once.
        let after = t0 + Duration::from_millis(60 * 33) + WINDOW;
        assert_eq!(debouncer.poll(after, &mut session), Some('A'));
        assert_eq!(session.text(), "A");

        // Resuming the same letter afterwards stays suppressed.
        debouncer.on_candidate('A', after);
        assert_eq!(debouncer.poll(after + WINDOW, &mut session), None);
        assert_eq!(session.text(), "A");
    }

    #[test]
    fn returning_to_a_letter_after_another_reemits() {
        let mut debouncer = Debouncer::new(WINDOW);
        let mut session = recording_session();
        let mut now = Instant::now();

        for letter in ['A', 'B', 'A'] {
            debouncer.on_candidate(letter, now);
            now += WINDOW;
            assert_eq!(debouncer.poll(now, &mut session), Some(letter));
        }
        assert_eq!(session.text(), "ABA");
    }

    #[test]
    fn later_candidate_replaces_pending_window() {
        let mut debouncer = Debouncer::new(WINDOW);
        let mut session = recording_session();
        let t0 = Instant::now();

        debouncer.on_candidate('A', t0);
        // 'B' arrives before 'A' fires; last candidate wins.
        debouncer.on_candidate('B', t0 + Duration::from_millis(200));
        assert_eq!(debouncer.poll(t0 + WINDOW, &mut session), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(200) + WINDOW, &mut session),
            Some('B')
        );
        assert_eq!(session.text(), "B");
    }

    #[test]
    fn window_does_not_fire_early() {
        let mut debouncer = Debouncer::new(WINDOW);
        let mut session = recording_session();
        let t0 = Instant::now();

        debouncer.on_candidate('C', t0);
        assert_eq!(
            debouncer.poll(t0 + WINDOW - Duration::from_millis(1), &mut session),
            None
        );
        assert_eq!(debouncer.poll(t0 + WINDOW, &mut session), Some('C'));
    }

    #[test]
    fn reset_abandons_pending_window() {
        let mut debouncer = Debouncer::new(WINDOW);
        let mut session = recording_session();
        let t0 = Instant::now();

        debouncer.on_candidate('A', t0);
        debouncer.reset();
        assert_eq!(debouncer.poll(t0 + WINDOW * 2, &mut session), None);
        assert_eq!(session.text(), "");
        assert_eq!(debouncer.state(), DebounceState::Idle);
    }
}
