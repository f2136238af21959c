//! Prize and score accounting
//!
//! The Millionaire money tree is a fixed ladder of fifteen prize tiers
//! with guaranteed-prize milestones at levels 5, 10 and 15. The prize a
//! player walks away with is always derived from the question index and
//! the terminal screen, never accumulated. Warm-up round scoring is the
//! opposite: a running total of points, ten per correct answer.

use serde::Serialize;

use crate::constants::{millionaire, olympia};

/// One rung of the money tree
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tier {
    /// 1-based ladder level
    pub level: usize,
    /// Formatted prize amount for this level
    pub amount: &'static str,
    /// Whether this level locks in a guaranteed prize
    pub milestone: bool,
}

const fn tier(level: usize, amount: &'static str, milestone: bool) -> Tier {
    Tier {
        level,
        amount,
        milestone,
    }
}

/// The full money tree, lowest level first
pub const TIERS: [Tier; millionaire::QUESTION_COUNT] = [
    tier(1, "200.000", false),
    tier(2, "400.000", false),
    tier(3, "600.000", false),
    tier(4, "1.000.000", false),
    tier(5, "2.000.000", true),
    tier(6, "3.000.000", false),
    tier(7, "6.000.000", false),
    tier(8, "10.000.000", false),
    tier(9, "14.000.000", false),
    tier(10, "22.000.000", true),
    tier(11, "30.000.000", false),
    tier(12, "40.000.000", false),
    tier(13, "60.000.000", false),
    tier(14, "85.000.000", false),
    tier(15, "150.000.000", true),
];

/// Prize amount at stake for the question at the given index
pub fn amount(question_index: usize) -> &'static str {
    TIERS[question_index.min(TIERS.len() - 1)].amount
}

/// Guaranteed prize carried out of a lost game at the given question index
///
/// Milestones already passed keep their amount; below the first milestone
/// the player leaves with nothing.
pub fn guaranteed(question_index: usize) -> &'static str {
    if question_index >= millionaire::SECOND_MILESTONE_INDEX {
        TIERS[millionaire::SECOND_MILESTONE_INDEX - 1].amount
    } else if question_index >= millionaire::FIRST_MILESTONE_INDEX {
        TIERS[millionaire::FIRST_MILESTONE_INDEX - 1].amount
    } else {
        "0"
    }
}

/// The top prize, paid out on victory
pub fn top() -> &'static str {
    TIERS[TIERS.len() - 1].amount
}

/// Number of correct answers implied by a warm-up round score
pub fn correct_answers(score: u32) -> u32 {
    score / olympia::POINTS_PER_CORRECT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_shape() {
        assert_eq!(TIERS.len(), 15);
        assert_eq!(TIERS[0].amount, "200.000");
        assert_eq!(TIERS[0].level, 1);
        assert_eq!(top(), "150.000.000");
        let milestones: Vec<usize> = TIERS
            .iter()
            .filter(|tier| tier.milestone)
            .map(|tier| tier.level)
            .collect();
        assert_eq!(milestones, vec![5, 10, 15]);
    }

    #[test]
    fn test_amount_follows_the_ladder() {
        assert_eq!(amount(0), "200.000");
        assert_eq!(amount(7), "10.000.000");
        assert_eq!(amount(14), "150.000.000");
    }

    #[test]
    fn test_guaranteed_prize_by_milestone_band() {
        for index in 0..5 {
            assert_eq!(guaranteed(index), "0");
        }
        for index in 5..10 {
            assert_eq!(guaranteed(index), "2.000.000");
        }
        for index in 10..15 {
            assert_eq!(guaranteed(index), "22.000.000");
        }
    }

    #[test]
    fn test_correct_answers_from_score() {
        assert_eq!(correct_answers(0), 0);
        assert_eq!(correct_answers(10), 1);
        assert_eq!(correct_answers(130), 13);
    }
}
