// THEORY:
// The `external` module defines the contract for a supplementary classifier
// that lives outside this process, typically a generative model handed the
// raw 21-landmark payload. Only the data contract is owned here; transport is
// the integrator's concern behind the `ExternalClassifier` trait.
//
// The contract is deliberately narrow: the service receives one serialized
// hand and answers with a single uppercase letter or the literal token
// "unknown". Anything else is a malformed response. Verdict letters are
// appended to the session text directly, without the debounce window the
// geometric path goes through; that asymmetry is part of the contract, since
// the service is expected to be called on demand rather than per frame.
// Failures are recovered locally: logged and skipped, never surfaced into the
// output text.

use crate::core_modules::landmark::Hand;
use thiserror::Error;

/// The literal no-answer token the service may return.
pub const UNKNOWN_TOKEN: &str = "unknown";

/// A well-formed response from the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Letter(char),
    Unknown,
}

impl Verdict {
    /// Parses a raw response body. Anything other than a single uppercase
    /// ASCII letter or the unknown token is malformed.
    pub fn parse(raw: &str) -> Result<Self, ClassifierError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(UNKNOWN_TOKEN) {
            return Ok(Verdict::Unknown);
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_uppercase() => Ok(Verdict::Letter(letter)),
            _ => Err(ClassifierError::MalformedResponse(trimmed.to_string())),
        }
    }
}

/// Failures of the external classification path. All of them are recoverable:
/// the frame's recognition is skipped and the session text is untouched.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classification request failed: {0}")]
    Transport(String),
    #[error("classification request timed out")]
    Timeout,
    #[error("malformed classifier response: {0:?}")]
    MalformedResponse(String),
}

/// A classifier living outside the engine. Implementations own transport and
/// authentication; the engine owns what happens to the verdict.
pub trait ExternalClassifier {
    fn classify(&mut self, hand: &Hand) -> Result<Verdict, ClassifierError>;
}

/// The wire payload for one classification request: the hand's landmarks as
/// JSON, in fixed index order.
pub fn serialize_request(hand: &Hand) -> serde_json::Result<String> {
    serde_json::to_string(hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::landmark::{Landmark, LANDMARK_COUNT};

    #[test]
    fn parses_single_uppercase_letter() {
        assert_eq!(Verdict::parse("A").unwrap(), Verdict::Letter('A'));
        assert_eq!(Verdict::parse(" Q \n").unwrap(), Verdict::Letter('Q'));
    }

    #[test]
    fn parses_unknown_token_case_insensitively() {
        assert_eq!(Verdict::parse("unknown").unwrap(), Verdict::Unknown);
        assert_eq!(Verdict::parse("UNKNOWN").unwrap(), Verdict::Unknown);
    }

    #[test]
    fn rejects_garbage_responses() {
        assert!(Verdict::parse("").is_err());
        assert!(Verdict::parse("ab").is_err());
        assert!(Verdict::parse("a").is_err());
        assert!(Verdict::parse("The letter is A").is_err());
    }

    #[test]
    fn request_payload_carries_all_landmarks() {
        let points = vec![Landmark::new(0.1, 0.2, 0.3); LANDMARK_COUNT];
        let hand = Hand::from_landmarks(&points).unwrap();
        let payload = serialize_request(&hand).unwrap();
        assert_eq!(payload.matches("\"x\":").count(), LANDMARK_COUNT);
    }
}
