//! Tuning constants for the quiz game core
//!
//! This module gathers every pacing, scoring and validation constant used
//! by the game controller and its collaborators, so the broadcast-style
//! rhythm of the game can be audited (and tuned) in one place.

/// Millionaire-mode structure and pacing
pub mod millionaire {
    use std::time::Duration;

    /// Number of questions in a full ladder run
    pub const QUESTION_COUNT: usize = 15;
    /// Seconds on the clock for each question
    pub const QUESTION_SECONDS: u32 = 30;
    /// Remaining-seconds threshold at or below which every tick cues a tick sound
    pub const URGENT_TICK_THRESHOLD: u32 = 10;
    /// Dramatic pause between locking an answer and revealing the result
    pub const SUSPENSE_DELAY: Duration = Duration::from_millis(2000);
    /// Time a correct reveal stays on screen before deciding what follows
    pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);
    /// Pause between a correct reveal and moving to the next question
    pub const ADVANCE_DELAY: Duration = Duration::from_millis(1000);
    /// Time a wrong reveal stays on screen before the game ends
    pub const WRONG_ANSWER_DELAY: Duration = Duration::from_millis(2000);
    /// Question index of the first guaranteed-prize boundary
    pub const FIRST_MILESTONE_INDEX: usize = 5;
    /// Question index of the second guaranteed-prize boundary
    pub const SECOND_MILESTONE_INDEX: usize = 10;
}

/// Warm-up round structure and scoring
pub mod olympia {
    use std::time::Duration;

    /// Number of questions fetched for a warm-up round
    pub const QUESTION_COUNT: usize = 20;
    /// Global time budget for the entire round, in seconds
    pub const ROUND_SECONDS: u32 = 60;
    /// Pause between a reveal and the next question
    pub const ADVANCE_DELAY: Duration = Duration::from_millis(800);
    /// Points awarded per correct answer
    pub const POINTS_PER_CORRECT: u32 = 10;
}

/// Question-fetch retry policy defaults
pub mod provider {
    use std::time::Duration;

    /// Maximum number of fetch attempts before giving up
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Delay before the first retry; doubles on each subsequent retry
    pub const BASE_DELAY: Duration = Duration::from_secs(2);
    /// Factor applied to the delay between consecutive retries
    pub const BACKOFF_MULTIPLIER: u32 = 2;
}

/// Question shape and validation bounds
pub mod question {
    /// Number of answer choices every question carries
    pub const ANSWER_COUNT: usize = 4;
    /// Maximum length of question text in characters
    pub const MAX_TEXT_LENGTH: usize = 500;
    /// Maximum length of a single answer choice in characters
    pub const MAX_ANSWER_LENGTH: usize = 200;
}
