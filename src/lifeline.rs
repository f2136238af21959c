//! Lifeline simulations for the Millionaire mode
//!
//! The three lifelines are pure probabilistic simulations with no real
//! external oracle; their "accuracy" is calibrated per difficulty band so
//! harder questions feel harder. All randomness flows through an
//! injectable [`fastrand::Rng`] so tests can seed it and verify the
//! distribution invariants deterministically.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::question::ANSWER_COUNT;

/// The three one-time-use aids available in a Millionaire playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifelineKind {
    /// Eliminate two of the three wrong answers
    FiftyFifty,
    /// Ask a simulated friend for a suggestion
    PhoneFriend,
    /// Poll a simulated studio audience
    AskAudience,
}

/// Availability flags for each lifeline
///
/// All three start available and each flips to unavailable permanently
/// once consumed; nothing re-arms a lifeline within a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifelines {
    /// Whether 50:50 is still available
    pub fifty_fifty: bool,
    /// Whether phone-a-friend is still available
    pub phone_friend: bool,
    /// Whether ask-the-audience is still available
    pub ask_audience: bool,
}

impl Default for Lifelines {
    /// A fresh playthrough starts with all three lifelines available
    fn default() -> Self {
        Self {
            fifty_fifty: true,
            phone_friend: true,
            ask_audience: true,
        }
    }
}

impl Lifelines {
    /// Whether the given lifeline is still available
    pub fn is_available(&self, kind: LifelineKind) -> bool {
        match kind {
            LifelineKind::FiftyFifty => self.fifty_fifty,
            LifelineKind::PhoneFriend => self.phone_friend,
            LifelineKind::AskAudience => self.ask_audience,
        }
    }

    /// Consumes the given lifeline
    ///
    /// Returns `true` if it was available; once consumed the flag stays
    /// false for the rest of the playthrough.
    pub fn consume(&mut self, kind: LifelineKind) -> bool {
        let flag = match kind {
            LifelineKind::FiftyFifty => &mut self.fifty_fifty,
            LifelineKind::PhoneFriend => &mut self.phone_friend,
            LifelineKind::AskAudience => &mut self.ask_audience,
        };
        std::mem::replace(flag, false)
    }
}

/// The three answer indices that are not the correct one
fn wrong_indices(correct_index: usize) -> Vec<usize> {
    (0..ANSWER_COUNT)
        .filter(|&index| index != correct_index)
        .collect_vec()
}

/// Probability that the simulated friend suggests the correct answer
///
/// Banded by question index: early questions are near-certain, the last
/// third is closer to a guess.
fn friend_confidence(question_index: usize) -> f64 {
    match question_index {
        0..=4 => 0.9,
        5..=9 => 0.7,
        _ => 0.4,
    }
}

/// Picks the two answer indices hidden by the 50:50 lifeline
///
/// The two are drawn uniformly from the three wrong answers via a random
/// shuffle; the correct index is never touched.
pub fn fifty_fifty(correct_index: usize, rng: &mut fastrand::Rng) -> [usize; 2] {
    let mut wrongs = wrong_indices(correct_index);
    rng.shuffle(&mut wrongs);
    [wrongs[0], wrongs[1]]
}

/// Simulates the phone-a-friend suggestion, returning an answer index
///
/// Draws one decision against the per-band confidence: the correct index
/// on the confident branch, otherwise a uniform pick among the three
/// wrong answers.
pub fn phone_friend(question_index: usize, correct_index: usize, rng: &mut fastrand::Rng) -> usize {
    if rng.f64() < friend_confidence(question_index) {
        correct_index
    } else {
        let wrongs = wrong_indices(correct_index);
        wrongs[rng.usize(..wrongs.len())]
    }
}

/// Simulates the audience poll, returning one percentage per answer
///
/// The correct option's share is drawn from a band by question index
/// (60-89, 40-69, 20-49); the remainder is split across the other three
/// options by random weights normalized with floor, and any rounding
/// deficit is assigned to the first of them so the four shares always sum
/// to exactly 100.
pub fn ask_audience(question_index: usize, correct_index: usize, rng: &mut fastrand::Rng) -> [u8; 4] {
    let correct_share = match question_index {
        0..=4 => rng.u8(60..90),
        5..=9 => rng.u8(40..70),
        _ => rng.u8(20..50),
    };
    let remainder = 100 - correct_share;

    let weights = [rng.f64(), rng.f64(), rng.f64()];
    let total: f64 = weights.iter().sum();
    let total = total.max(f64::EPSILON);
    let mut others = weights.map(|weight| ((weight / total) * f64::from(remainder)).floor() as u8);

    let allotted = correct_share + others.iter().sum::<u8>();
    if allotted < 100 {
        others[0] += 100 - allotted;
    }

    let mut shares = [0u8; ANSWER_COUNT];
    shares[correct_index] = correct_share;
    for (index, share) in wrong_indices(correct_index).into_iter().zip(others) {
        shares[index] = share;
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifelines_start_available() {
        let lifelines = Lifelines::default();
        assert!(lifelines.is_available(LifelineKind::FiftyFifty));
        assert!(lifelines.is_available(LifelineKind::PhoneFriend));
        assert!(lifelines.is_available(LifelineKind::AskAudience));
    }

    #[test]
    fn test_lifeline_single_use() {
        let mut lifelines = Lifelines::default();
        assert!(lifelines.consume(LifelineKind::PhoneFriend));
        assert!(!lifelines.is_available(LifelineKind::PhoneFriend));
        assert!(!lifelines.consume(LifelineKind::PhoneFriend));
        // consuming one leaves the others untouched
        assert!(lifelines.is_available(LifelineKind::FiftyFifty));
        assert!(lifelines.is_available(LifelineKind::AskAudience));
    }

    #[test]
    fn test_fifty_fifty_never_hides_the_correct_answer() {
        for seed in 0..200 {
            let mut rng = fastrand::Rng::with_seed(seed);
            for correct_index in 0..ANSWER_COUNT {
                let hidden = fifty_fifty(correct_index, &mut rng);
                assert_ne!(hidden[0], hidden[1]);
                assert!(!hidden.contains(&correct_index));
                assert!(hidden.iter().all(|&index| index < ANSWER_COUNT));
            }
        }
    }

    #[test]
    fn test_phone_friend_suggests_a_valid_answer() {
        let mut rng = fastrand::Rng::with_seed(3);
        for question_index in 0..15 {
            for correct_index in 0..ANSWER_COUNT {
                let suggested = phone_friend(question_index, correct_index, &mut rng);
                assert!(suggested < ANSWER_COUNT);
            }
        }
    }

    #[test]
    fn test_phone_friend_tracks_confidence_bands() {
        let mut rng = fastrand::Rng::with_seed(9);
        let trials = 2000;

        let early_hits = (0..trials)
            .filter(|_| phone_friend(0, 2, &mut rng) == 2)
            .count();
        assert!(early_hits > trials * 8 / 10);

        let late_hits = (0..trials)
            .filter(|_| phone_friend(12, 2, &mut rng) == 2)
            .count();
        assert!(late_hits < trials * 6 / 10);
    }

    #[test]
    fn test_audience_poll_sums_to_exactly_one_hundred() {
        for seed in 0..200 {
            let mut rng = fastrand::Rng::with_seed(seed);
            for question_index in [0, 4, 5, 9, 10, 14] {
                for correct_index in 0..ANSWER_COUNT {
                    let shares = ask_audience(question_index, correct_index, &mut rng);
                    let total: u32 = shares.iter().map(|&share| u32::from(share)).sum();
                    assert_eq!(total, 100, "seed {seed} question {question_index}");
                }
            }
        }
    }

    #[test]
    fn test_audience_poll_correct_share_stays_in_band() {
        for seed in 0..100 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let early = ask_audience(2, 1, &mut rng)[1];
            assert!((60..90).contains(&early));
            let middle = ask_audience(7, 1, &mut rng)[1];
            assert!((40..70).contains(&middle));
            let late = ask_audience(13, 1, &mut rng)[1];
            assert!((20..50).contains(&late));
        }
    }
}
