//! Question provider contract and retrying fetch pipeline
//!
//! Questions are produced by an external generative-AI text service from
//! a user-supplied topic. This module owns the contract for that service
//! and the bounded-retry policy wrapped around it: transient failures
//! (rate limiting, temporary unavailability) are retried with exponential
//! backoff, anything else propagates immediately. The provider itself is
//! an external collaborator; this crate ships no network implementation.

use std::time::Duration;

use garde::Validate;
use thiserror::Error;

use crate::{
    constants,
    question::{GameMode, Question},
};

/// A failure reported by the question provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The service rejected the request due to quota or rate limiting
    #[error("provider rate limit exceeded")]
    RateLimited,
    /// The service is temporarily unreachable
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// The provider responded with something that is not a usable question list
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    /// Any other provider-side failure
    #[error("provider error: {0}")]
    Api(String),
}

impl ProviderError {
    /// Whether retrying the request may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Unavailable(_))
    }
}

/// Terminal failure of a question fetch, after retries were exhausted or
/// a non-transient error occurred
#[derive(Debug, Clone, Error)]
#[error("question fetch failed after {attempts} attempt(s): {source}")]
pub struct FetchError {
    /// How many attempts were made before giving up
    pub attempts: u32,
    /// The error that ended the fetch
    #[source]
    pub source: ProviderError,
}

/// Contract for the external question-generation service
///
/// Given a non-empty topic and a game mode, the provider returns an
/// ordered question list sized for the mode (15 for Millionaire, 20 for
/// the warm-up round), each question carrying exactly four answers and
/// one correct index.
pub trait QuestionProvider {
    /// Generates an ordered question list for the topic and mode
    async fn generate(&self, topic: &str, mode: GameMode) -> Result<Vec<Question>, ProviderError>;
}

/// Bounded-retry policy for question fetches
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Factor applied to the delay between consecutive retries
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    /// Three attempts with delays doubling from two seconds
    fn default() -> Self {
        Self {
            max_attempts: constants::provider::MAX_ATTEMPTS,
            base_delay: constants::provider::BASE_DELAY,
            multiplier: constants::provider::BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait before the retry following the given attempt (1-based)
    fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * self.multiplier.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Checks that a provider response is a usable question list
fn validate_response(questions: Vec<Question>) -> Result<Vec<Question>, ProviderError> {
    if questions.is_empty() {
        return Err(ProviderError::InvalidResponse(
            "empty question list".to_owned(),
        ));
    }
    for (index, question) in questions.iter().enumerate() {
        if let Err(report) = question.validate() {
            return Err(ProviderError::InvalidResponse(format!(
                "question {index}: {report}"
            )));
        }
    }
    Ok(questions)
}

/// Fetches a question list, retrying transient failures with backoff
///
/// Performs up to `policy.max_attempts` attempts. Transient errors are
/// retried after an exponentially growing delay; non-transient errors,
/// including malformed responses, end the fetch immediately. The returned
/// [`FetchError`] records the terminal cause and how many attempts were
/// made.
///
/// # Errors
///
/// Returns a [`FetchError`] when the topic cannot be turned into a valid
/// question list within the attempt budget.
pub async fn fetch_questions<P: QuestionProvider>(
    provider: &P,
    topic: &str,
    mode: GameMode,
    policy: &RetryPolicy,
) -> Result<Vec<Question>, FetchError> {
    let mut attempt = 1;
    loop {
        let error = match provider.generate(topic, mode).await {
            Ok(questions) => match validate_response(questions) {
                Ok(list) => return Ok(list),
                Err(error) => error,
            },
            Err(error) => error,
        };

        if !error.is_transient() || attempt >= policy.max_attempts {
            return Err(FetchError {
                attempts: attempt,
                source: error,
            });
        }

        let delay = policy.delay_after(attempt);
        tracing::warn!(
            attempt,
            max_attempts = policy.max_attempts,
            delay_ms = delay.as_millis() as u64,
            error = %error,
            "transient provider failure, backing off"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
