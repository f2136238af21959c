//! Question data model and game modes
//!
//! This module defines the immutable question shape produced by the
//! question provider and consumed by the game controller, along with the
//! two round formats the controller can run. Questions are validated on
//! arrival so the rest of the crate can index answers without re-checking
//! bounds.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::question::{ANSWER_COUNT, MAX_ANSWER_LENGTH, MAX_TEXT_LENGTH};

/// The two round formats a playthrough can run
///
/// The mode is selected before questions are fetched and stays fixed for
/// the lifetime of one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Fifteen-question prize ladder with lifelines and per-question timing
    Millionaire,
    /// Single 60-second warm-up round scored per correct answer
    Olympia,
}

impl GameMode {
    /// Number of questions requested from the provider for this mode
    pub fn question_count(self) -> usize {
        match self {
            Self::Millionaire => crate::constants::millionaire::QUESTION_COUNT,
            Self::Olympia => crate::constants::olympia::QUESTION_COUNT,
        }
    }

    /// Seconds the clock is armed with when the round begins
    ///
    /// Millionaire re-arms this value for every question; the warm-up
    /// round spends it once across all questions.
    pub fn round_seconds(self) -> u32 {
        match self {
            Self::Millionaire => crate::constants::millionaire::QUESTION_SECONDS,
            Self::Olympia => crate::constants::olympia::ROUND_SECONDS,
        }
    }
}

/// Validates that a correct-answer index points at one of the four answers
fn validate_answer_index(value: &usize, _context: &()) -> garde::Result {
    if *value < ANSWER_COUNT {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "correct_index {value} is outside of the answer range [0,{}]",
            ANSWER_COUNT - 1
        )))
    }
}

/// A single trivia question with four answer choices
///
/// Immutable once received from the provider. The full question list is
/// fetched once per game start and indexed sequentially by the game
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// The question text shown to the player
    #[garde(length(min = 1, max = MAX_TEXT_LENGTH))]
    pub text: String,
    /// Exactly four answer choices, in display order
    #[garde(length(min = ANSWER_COUNT, max = ANSWER_COUNT), inner(length(min = 1, max = MAX_ANSWER_LENGTH)))]
    pub answers: Vec<String>,
    /// Index of the correct answer within `answers`
    #[garde(custom(validate_answer_index))]
    pub correct_index: usize,
    /// Optional explanation shown on terminal screens
    #[garde(skip)]
    pub explanation: Option<String>,
}

impl Question {
    /// Whether the given answer index is the correct one
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_index
    }

    /// Text of the correct answer
    pub fn correct_answer(&self) -> &str {
        self.answers.get(self.correct_index).map_or("", String::as_str)
    }
}

/// Display letter for an answer position (`A` through `D`)
pub fn answer_letter(index: usize) -> char {
    char::from(b'A' + (index % ANSWER_COUNT) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_question() -> Question {
        Question {
            text: "Which particle carries a negative charge?".to_string(),
            answers: vec![
                "Electron".to_string(),
                "Proton".to_string(),
                "Neutron".to_string(),
                "Photon".to_string(),
            ],
            correct_index: 0,
            explanation: Some("Electrons carry a charge of -1.".to_string()),
        }
    }

    #[test]
    fn test_question_validation() {
        let question = create_test_question();
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_question_text_too_long() {
        let mut question = create_test_question();
        question.text = "a".repeat(MAX_TEXT_LENGTH + 1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_wrong_answer_count() {
        let mut question = create_test_question();
        question.answers.pop();
        assert!(question.validate().is_err());

        let mut question = create_test_question();
        question.answers.push("Quark".to_string());
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_correct_index_out_of_range() {
        let mut question = create_test_question();
        question.correct_index = ANSWER_COUNT;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_empty_answer() {
        let mut question = create_test_question();
        question.answers[2] = String::new();
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_is_correct_and_correct_answer() {
        let question = create_test_question();
        assert!(question.is_correct(0));
        assert!(!question.is_correct(1));
        assert_eq!(question.correct_answer(), "Electron");
    }

    #[test]
    fn test_mode_parameters() {
        assert_eq!(GameMode::Millionaire.question_count(), 15);
        assert_eq!(GameMode::Olympia.question_count(), 20);
        assert_eq!(GameMode::Millionaire.round_seconds(), 30);
        assert_eq!(GameMode::Olympia.round_seconds(), 60);
    }

    #[test]
    fn test_answer_letter() {
        assert_eq!(answer_letter(0), 'A');
        assert_eq!(answer_letter(1), 'B');
        assert_eq!(answer_letter(2), 'C');
        assert_eq!(answer_letter(3), 'D');
    }
}
