// THEORY:
// The `letter_matcher` is a stateless utility over the static letter table. It
// scans the table in its fixed insertion order and returns the first pattern
// the finger-state vector satisfies, or nothing when no pose matches. First
// match wins by design: where several letters share a finger state, the
// earliest entry is the canonical reading and the later ones wait on a
// curvature-aware analyzer. No match is a normal per-frame outcome, not an
// error.

use crate::core_modules::finger_state::FingerStateVector;
use crate::core_modules::letter_table::LETTER_PATTERNS;

/// Returns the first letter in table order whose pattern the state satisfies.
pub fn match_letter(state: &FingerStateVector) -> Option<char> {
    LETTER_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(state))
        .map(|pattern| pattern.letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> FingerStateVector {
        FingerStateVector {
            thumb,
            index,
            middle,
            ring,
            pinky,
            is_curved: false,
        }
    }

    #[test]
    fn flat_palm_matches_b() {
        assert_eq!(match_letter(&vector(false, true, true, true, true)), Some('B'));
    }

    #[test]
    fn unmatched_state_returns_none() {
        // All five extended with no curvature satisfies no static pose.
        assert_eq!(match_letter(&vector(true, true, true, true, true)), None);
    }

    #[test]
    fn fist_group_resolves_to_first_entry() {
        // M, N, and S share the all-closed state; M is first in table order.
        assert_eq!(match_letter(&vector(false, false, false, false, false)), Some('M'));
    }

    #[test]
    fn index_middle_group_resolves_to_h() {
        assert_eq!(match_letter(&vector(false, true, true, false, false)), Some('H'));
    }

    #[test]
    fn thumb_alone_is_a_not_t() {
        // T requires curvature, which is never reported, so A wins.
        assert_eq!(match_letter(&vector(true, false, false, false, false)), Some('A'));
    }

    #[test]
    fn matching_is_deterministic() {
        let state = vector(false, true, true, false, false);
        let first = match_letter(&state);
        for _ in 0..100 {
            assert_eq!(match_letter(&state), first);
        }
    }

    #[test]
    fn remaining_singletons_resolve() {
        assert_eq!(match_letter(&vector(false, true, false, false, false)), Some('D'));
        assert_eq!(match_letter(&vector(false, false, true, true, true)), Some('F'));
        assert_eq!(match_letter(&vector(true, true, false, false, false)), Some('G'));
        assert_eq!(match_letter(&vector(false, false, false, false, true)), Some('I'));
        assert_eq!(match_letter(&vector(true, true, true, false, false)), Some('K'));
        assert_eq!(match_letter(&vector(false, true, true, true, false)), Some('W'));
        assert_eq!(match_letter(&vector(true, false, false, false, true)), Some('Y'));
    }
}
