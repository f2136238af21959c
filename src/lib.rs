//! # Quizshow Game Core
//!
//! This library provides the core game logic for a generative-AI trivia
//! quiz with two round formats: a fifteen-question prize ladder with
//! lifelines and per-question timing, and a single 60-second warm-up
//! round scored per correct answer. It owns the screen state machine,
//! countdown discipline, answer-reveal sequencing, lifeline simulations,
//! prize accounting and the retrying question-fetch pipeline, while
//! delegating rendering, audio and wall-clock scheduling to the
//! embedding host.
//!
//! The host drives the controller with discrete events (user intents,
//! one-second ticks, fetch completions and delivered alarms) and renders
//! the snapshots it emits:
//!
//! ```
//! use quizshow::{Cue, Game, GameMode, Intent, Sink, Snapshot};
//!
//! struct NullSink;
//!
//! impl Sink for NullSink {
//!     fn render(&self, _snapshot: &Snapshot) {}
//!     fn cue(&self, _cue: Cue) {}
//! }
//!
//! let mut game = Game::new();
//! game.receive_intent(Intent::ChooseMode(GameMode::Millionaire), |_alarm, _delay| {}, &NullSink);
//! assert!(game.loading_request().is_none());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(async_fn_in_trait)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod constants;

pub mod game;
pub mod ladder;
pub mod lifeline;
pub mod provider;
pub mod question;
pub mod sink;
pub mod timer;

pub use game::{AlarmMessage, Game, Intent, Modal, Screen, Snapshot, Standing};
pub use lifeline::{LifelineKind, Lifelines};
pub use provider::{FetchError, ProviderError, QuestionProvider, RetryPolicy, fetch_questions};
pub use question::{GameMode, Question};
pub use sink::{Cue, Sink};
