//! Core game controller and screen state machine
//!
//! This module contains the main game struct and logic for driving one
//! quiz playthrough: the screen state machine, per-round session state,
//! countdown gating, answer-reveal sequencing and lifeline mediation.
//! The controller owns all mutable state and changes it only in response
//! to discrete external events (user intents, one-second ticks, fetch
//! completions and delivered alarms), so a host that serializes those
//! events through it preserves every invariant without locking.
//!
//! Deferred transitions (the suspense pause, reveal and advance delays)
//! are never slept on. The controller hands an [`AlarmMessage`] and a
//! duration to a host-supplied `schedule` callback and checks the
//! message's epoch on delivery: the epoch is bumped on every screen
//! transition and every question advance, so a timeout, restart or
//! menu-return atomically invalidates everything still pending.

use std::{fmt::Debug, time::Duration};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    constants, ladder,
    lifeline::{self, Lifelines},
    provider::FetchError,
    question::{self, GameMode, Question},
    sink::{Cue, Sink},
    timer::{Countdown, TickOutcome},
};

pub use crate::lifeline::LifelineKind;

/// The screens a playthrough moves through
///
/// Exactly one screen is active at a time; this is the top-level state
/// machine of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Mode selection
    Menu,
    /// Topic entry for the chosen mode
    Setup,
    /// Waiting for the question provider
    Loading,
    /// A round is in progress
    Playing,
    /// All fifteen ladder questions answered correctly
    Victory,
    /// A wrong answer or timeout ended the ladder run
    GameOver,
    /// The warm-up round finished (time or questions ran out)
    OlympiaSummary,
}

/// A transient dialog shown over the playing screen
///
/// While a modal is open the countdown is frozen and answer selection
/// and lifelines are blocked; dismissing it resumes play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modal {
    /// Dialog heading
    pub title: String,
    /// Dialog body text
    pub content: String,
}

/// Discrete user intents emitted by the presentation sink
///
/// Intents that are not allowed in the current state are ignored rather
/// than surfaced as errors; the state-machine guards are the contract.
#[derive(Debug, Clone, Deserialize)]
pub enum Intent {
    /// Pick a game mode on the menu screen
    ChooseMode(GameMode),
    /// Submit a topic and start fetching questions
    StartGame {
        /// The knowledge topic questions should be generated from
        topic: String,
    },
    /// Lock in an answer by index
    SelectAnswer(usize),
    /// Use one of the Millionaire lifelines
    UseLifeline(LifelineKind),
    /// Move past the current question without answering (warm-up only)
    SkipQuestion,
    /// Close the open modal dialog
    DismissModal,
    /// Return to topic entry from a terminal screen, keeping the mode
    PlayAgain,
    /// Abandon everything and return to the menu
    ReturnToMenu,
}

/// Deferred-transition messages scheduled by the controller
///
/// The host delivers each message back through [`Game::receive_alarm`]
/// after the requested delay. Every message carries the epoch it was
/// scheduled under; a message whose epoch no longer matches is stale and
/// is discarded without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Check the locked-in answer once the suspense pause ends
    RevealAnswer {
        /// Epoch the alarm was scheduled under
        epoch: u64,
        /// The answer index to check
        answer_index: usize,
    },
    /// Decide victory-or-advance after a correct reveal has been shown
    ConcludeReveal {
        /// Epoch the alarm was scheduled under
        epoch: u64,
    },
    /// Move on to the next question (or the warm-up summary)
    AdvanceQuestion {
        /// Epoch the alarm was scheduled under
        epoch: u64,
    },
    /// End the ladder run after a wrong reveal has been shown
    EndGame {
        /// Epoch the alarm was scheduled under
        epoch: u64,
    },
}

impl AlarmMessage {
    /// The epoch this message was scheduled under
    fn epoch(self) -> u64 {
        match self {
            Self::RevealAnswer { epoch, .. }
            | Self::ConcludeReveal { epoch }
            | Self::AdvanceQuestion { epoch }
            | Self::EndGame { epoch } => epoch,
        }
    }
}

/// Mode-specific standing shown alongside the question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Standing {
    /// Millionaire: formatted prize for the current moment of play
    ///
    /// While playing this is the amount at stake on the current rung;
    /// on game over it is the guaranteed milestone amount; on victory
    /// the top prize.
    Prize(String),
    /// Warm-up round: accumulated points and derived correct-answer count
    Points {
        /// Accumulated score, ten per correct answer
        score: u32,
        /// `score / 10`
        correct_answers: u32,
    },
}

/// Read-only view of the game emitted to the sink on every state change
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// The active screen
    pub screen: Screen,
    /// Mode of the current playthrough, if one has been chosen
    pub mode: Option<GameMode>,
    /// Last submitted topic
    pub topic: String,
    /// Error message shown on the setup screen after a failed fetch
    pub error: Option<String>,
    /// 1-based number of the current question
    pub question_number: Option<usize>,
    /// Total questions in the fetched list
    pub question_count: Option<usize>,
    /// The current question
    pub question: Option<Question>,
    /// The locked-in answer index, if any
    pub selected_answer: Option<usize>,
    /// Whether the locked-in answer has been checked and is being shown
    pub answer_checked: bool,
    /// Whether the checked answer was correct; meaningful only while
    /// `answer_checked` is true
    pub is_correct: bool,
    /// Answer indices eliminated by 50:50
    pub hidden_answers: Vec<usize>,
    /// Lifeline availability (Millionaire only)
    pub lifelines: Option<Lifelines>,
    /// Seconds left on the clock
    pub time_left: Option<u32>,
    /// Open modal dialog, if any
    pub modal: Option<Modal>,
    /// Prize or score standing for the current mode
    pub standing: Option<Standing>,
}

impl Snapshot {
    /// Converts the snapshot to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never
    /// happen with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Mutable state of one round, created at game start and discarded on
/// return to the menu
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Round {
    /// The fetched question list, indexed sequentially
    questions: Vec<Question>,
    /// 0-based index of the current question; never decreases
    current_index: usize,
    /// The locked-in answer, cleared every question
    selected_answer: Option<usize>,
    /// True once the selected answer's correctness is being displayed
    answer_checked: bool,
    /// Valid only while `answer_checked`
    is_correct: bool,
    /// Indices eliminated by 50:50 on the current question
    hidden_answers: Vec<usize>,
    /// Lifeline availability for the whole playthrough
    lifelines: Lifelines,
    /// Warm-up round score; unused in Millionaire
    olympia_score: u32,
    /// The countdown, per-question or global depending on the mode
    timer: Countdown,
    /// Open modal dialog, if any
    modal: Option<Modal>,
}

impl Round {
    fn new(mode: GameMode, questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            selected_answer: None,
            answer_checked: false,
            is_correct: false,
            hidden_answers: Vec::new(),
            lifelines: Lifelines::default(),
            olympia_score: 0,
            timer: Countdown::new(mode.round_seconds()),
            modal: None,
        }
    }

    fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Clears per-question interaction state for the next question
    ///
    /// Millionaire re-arms the per-question clock; the warm-up round's
    /// global budget keeps running.
    fn reset_for_next_question(&mut self, mode: GameMode) {
        self.selected_answer = None;
        self.answer_checked = false;
        self.is_correct = false;
        self.hidden_answers.clear();
        self.modal = None;
        if mode == GameMode::Millionaire {
            self.timer.reset(constants::millionaire::QUESTION_SECONDS);
        }
    }
}

/// The game controller
///
/// Owns the screen state machine, the current round and the epoch
/// counter guarding deferred transitions. All mutation happens through
/// [`receive_intent`](Game::receive_intent),
/// [`receive_questions`](Game::receive_questions),
/// [`tick`](Game::tick) and [`receive_alarm`](Game::receive_alarm);
/// after each of these the sink is handed a fresh [`Snapshot`].
#[derive(Serialize, Deserialize)]
pub struct Game {
    /// The active screen
    screen: Screen,
    /// Mode of the current playthrough; cleared on menu return
    mode: Option<GameMode>,
    /// Last submitted topic, kept so "play again" can prefill it and the
    /// host can read the pending fetch request
    topic: String,
    /// State of the round in progress, if any
    round: Option<Round>,
    /// Error message surfaced on the setup screen
    setup_error: Option<String>,
    /// Generation counter for scheduled alarms; bumped on every screen
    /// transition and question advance
    epoch: u64,
    /// Random source for the lifeline simulations
    #[serde(skip)]
    rng: fastrand::Rng,
}

impl Debug for Game {
    /// Custom debug implementation that avoids printing the question list
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("screen", &self.screen)
            .field("mode", &self.mode)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Default for Game {
    /// Creates a controller on the menu screen (same as [`Game::new`])
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a controller on the menu screen with a random seed
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Creates a controller with a seeded random source
    ///
    /// Seeding makes the lifeline simulations deterministic, which tests
    /// rely on.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            screen: Screen::Menu,
            mode: None,
            topic: String::new(),
            round: None,
            setup_error: None,
            epoch: 0,
            rng,
        }
    }

    /// The active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Mode of the current playthrough, if one has been chosen
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Topic and mode awaiting a question fetch
    ///
    /// Present exactly while the loading screen is up; the host is
    /// expected to run the fetch and feed the outcome back through
    /// [`receive_questions`](Game::receive_questions).
    pub fn loading_request(&self) -> Option<(&str, GameMode)> {
        if self.screen == Screen::Loading {
            Some((self.topic.as_str(), self.mode?))
        } else {
            None
        }
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Moves to a new screen, invalidating everything still scheduled
    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "screen transition");
        }
        self.screen = screen;
        self.bump_epoch();
    }

    /// Handles a user intent from the presentation sink
    ///
    /// Disallowed intents are ignored. A fresh snapshot is rendered to
    /// the sink after handling, whether or not anything changed.
    ///
    /// # Arguments
    ///
    /// * `intent` - The intent to process
    /// * `schedule` - Callback the controller hands deferred transitions to
    /// * `sink` - The presentation sink receiving snapshots and cues
    pub fn receive_intent<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        intent: Intent,
        mut schedule: S,
        sink: &K,
    ) {
        match intent {
            Intent::ChooseMode(mode) => self.choose_mode(mode),
            Intent::StartGame { topic } => self.start_game(&topic, sink),
            Intent::SelectAnswer(index) => self.select_answer(index, &mut schedule, sink),
            Intent::UseLifeline(kind) => self.use_lifeline(kind, sink),
            Intent::SkipQuestion => self.skip_question(sink),
            Intent::DismissModal => self.dismiss_modal(),
            Intent::PlayAgain => self.play_again(),
            Intent::ReturnToMenu => self.return_to_menu(),
        }
        sink.render(&self.snapshot());
    }

    /// Handles the completion of the question fetch
    ///
    /// Success initializes the round for the chosen mode and enters the
    /// playing screen; failure returns to setup with a user-visible
    /// message and no partial session. Ignored unless the loading screen
    /// is up, so a fetch that resolves after the player left for the
    /// menu has no effect.
    pub fn receive_questions<K: Sink>(
        &mut self,
        outcome: Result<Vec<Question>, FetchError>,
        sink: &K,
    ) {
        if self.screen != Screen::Loading {
            return;
        }
        let Some(mode) = self.mode else { return };
        match outcome {
            Ok(questions) => {
                tracing::debug!(count = questions.len(), ?mode, "question list ready");
                self.round = Some(Round::new(mode, questions));
                self.set_screen(Screen::Playing);
            }
            Err(error) => {
                tracing::warn!(error = %error, "question fetch failed");
                self.setup_error =
                    Some("Could not generate questions. Please try again.".to_owned());
                self.round = None;
                self.set_screen(Screen::Setup);
            }
        }
        sink.render(&self.snapshot());
    }

    /// Advances the countdown by one second
    ///
    /// The host calls this once per second, unconditionally; the
    /// controller decides whether the tick counts. Ticks are ignored
    /// outside the playing screen, while a modal is open, and while a
    /// Millionaire reveal is on screen. The tick that consumes the final
    /// second fires the timeout transition exactly once.
    pub fn tick<K: Sink>(&mut self, sink: &K) {
        if self.screen != Screen::Playing {
            return;
        }
        let Some(mode) = self.mode else { return };
        let outcome = {
            let Some(round) = self.round.as_mut() else { return };
            if round.modal.is_some() {
                return;
            }
            if mode == GameMode::Millionaire && round.answer_checked {
                return;
            }
            round.timer.tick()
        };
        match outcome {
            TickOutcome::Running(remaining) => match mode {
                GameMode::Millionaire
                    if remaining <= constants::millionaire::URGENT_TICK_THRESHOLD =>
                {
                    sink.cue(Cue::Tick);
                }
                GameMode::Olympia if remaining % 2 == 0 => sink.cue(Cue::Tick),
                _ => {}
            },
            TickOutcome::Expired => {
                sink.cue(Cue::Timeout);
                match mode {
                    GameMode::Millionaire => self.set_screen(Screen::GameOver),
                    GameMode::Olympia => {
                        sink.cue(Cue::Win);
                        self.set_screen(Screen::OlympiaSummary);
                    }
                }
            }
            TickOutcome::Spent => return,
        }
        sink.render(&self.snapshot());
    }

    /// Handles a scheduled alarm delivered by the host
    ///
    /// Messages whose epoch no longer matches the controller's are stale
    /// remnants of a superseded sequence (a timeout won the race, the
    /// player restarted or left for the menu) and are discarded.
    pub fn receive_alarm<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        message: AlarmMessage,
        mut schedule: S,
        sink: &K,
    ) {
        if message.epoch() != self.epoch {
            tracing::debug!(?message, current = self.epoch, "discarding stale alarm");
            return;
        }
        match message {
            AlarmMessage::RevealAnswer { answer_index, .. } => {
                self.check_answer(answer_index, &mut schedule, sink);
            }
            AlarmMessage::ConcludeReveal { .. } => self.conclude_reveal(&mut schedule, sink),
            AlarmMessage::AdvanceQuestion { .. } => self.advance_question(sink),
            AlarmMessage::EndGame { .. } => self.end_game(),
        }
        sink.render(&self.snapshot());
    }

    fn choose_mode(&mut self, mode: GameMode) {
        if self.screen != Screen::Menu {
            return;
        }
        self.mode = Some(mode);
        self.setup_error = None;
        self.set_screen(Screen::Setup);
    }

    fn start_game<K: Sink>(&mut self, topic: &str, sink: &K) {
        if self.screen != Screen::Setup || self.mode.is_none() {
            return;
        }
        // empty topic blocks the start locally, with no transition
        if topic.trim().is_empty() {
            return;
        }
        sink.cue(Cue::Select);
        self.topic = topic.to_owned();
        self.setup_error = None;
        self.set_screen(Screen::Loading);
    }

    fn select_answer<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        index: usize,
        schedule: &mut S,
        sink: &K,
    ) {
        if self.screen != Screen::Playing {
            return;
        }
        let Some(mode) = self.mode else { return };
        {
            let Some(round) = self.round.as_mut() else { return };
            if round.answer_checked || round.selected_answer.is_some() || round.modal.is_some() {
                return;
            }
            let Some(current) = round.current_question() else {
                return;
            };
            if index >= current.answers.len() {
                return;
            }
            if mode == GameMode::Millionaire && round.hidden_answers.contains(&index) {
                return;
            }
            round.selected_answer = Some(index);
        }
        sink.cue(Cue::Select);
        match mode {
            GameMode::Millionaire => schedule(
                AlarmMessage::RevealAnswer {
                    epoch: self.epoch,
                    answer_index: index,
                },
                constants::millionaire::SUSPENSE_DELAY,
            ),
            GameMode::Olympia => self.check_answer(index, schedule, sink),
        }
    }

    /// Computes and displays the correctness of a locked-in answer, then
    /// schedules whatever follows the reveal
    fn check_answer<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        index: usize,
        schedule: &mut S,
        sink: &K,
    ) {
        let epoch = self.epoch;
        let Some(mode) = self.mode else { return };
        let Some(round) = self.round.as_mut() else { return };
        let Some(current) = round.current_question() else {
            return;
        };
        let correct = current.is_correct(index);
        round.answer_checked = true;
        round.is_correct = correct;

        if correct {
            sink.cue(Cue::Correct);
            match mode {
                GameMode::Millionaire => schedule(
                    AlarmMessage::ConcludeReveal { epoch },
                    constants::millionaire::REVEAL_DELAY,
                ),
                GameMode::Olympia => {
                    round.olympia_score += constants::olympia::POINTS_PER_CORRECT;
                    schedule(
                        AlarmMessage::AdvanceQuestion { epoch },
                        constants::olympia::ADVANCE_DELAY,
                    );
                }
            }
        } else {
            sink.cue(Cue::Wrong);
            match mode {
                GameMode::Millionaire => schedule(
                    AlarmMessage::EndGame { epoch },
                    constants::millionaire::WRONG_ANSWER_DELAY,
                ),
                GameMode::Olympia => schedule(
                    AlarmMessage::AdvanceQuestion { epoch },
                    constants::olympia::ADVANCE_DELAY,
                ),
            }
        }
    }

    /// After a correct Millionaire reveal: victory on the last rung,
    /// otherwise schedule the advance
    fn conclude_reveal<K: Sink, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        schedule: &mut S,
        sink: &K,
    ) {
        let epoch = self.epoch;
        let Some(round) = self.round.as_ref() else { return };
        if round.is_last_question() {
            sink.cue(Cue::Win);
            self.set_screen(Screen::Victory);
        } else {
            schedule(
                AlarmMessage::AdvanceQuestion { epoch },
                constants::millionaire::ADVANCE_DELAY,
            );
        }
    }

    /// Moves to the next question, or ends the warm-up round when the
    /// question list is exhausted
    fn advance_question<K: Sink>(&mut self, sink: &K) {
        let Some(mode) = self.mode else { return };
        let Some(round) = self.round.as_mut() else { return };
        if round.is_last_question() {
            // Millionaire never schedules an advance past the last rung
            if mode == GameMode::Olympia {
                sink.cue(Cue::Win);
                self.set_screen(Screen::OlympiaSummary);
            }
            return;
        }
        round.current_index += 1;
        round.reset_for_next_question(mode);
        // pending alarms for the previous question die here
        self.bump_epoch();
    }

    fn end_game(&mut self) {
        if self.screen == Screen::Playing {
            self.set_screen(Screen::GameOver);
        }
    }

    fn use_lifeline<K: Sink>(&mut self, kind: LifelineKind, sink: &K) {
        if self.screen != Screen::Playing || self.mode != Some(GameMode::Millionaire) {
            return;
        }
        let Some(round) = self.round.as_mut() else { return };
        if round.answer_checked || round.modal.is_some() {
            return;
        }
        let question_index = round.current_index;
        let Some(correct_index) = round.current_question().map(|q| q.correct_index) else {
            return;
        };
        if !round.lifelines.consume(kind) {
            return;
        }
        sink.cue(Cue::Select);
        match kind {
            LifelineKind::FiftyFifty => {
                round.hidden_answers =
                    lifeline::fifty_fifty(correct_index, &mut self.rng).to_vec();
            }
            LifelineKind::PhoneFriend => {
                let suggested = lifeline::phone_friend(question_index, correct_index, &mut self.rng);
                let answer = round
                    .current_question()
                    .and_then(|q| q.answers.get(suggested))
                    .cloned()
                    .unwrap_or_default();
                round.modal = Some(Modal {
                    title: "Phone a Friend".to_owned(),
                    content: format!(
                        "I think the answer is {}. {answer}. I'm sure of it!",
                        question::answer_letter(suggested)
                    ),
                });
            }
            LifelineKind::AskAudience => {
                let shares = lifeline::ask_audience(question_index, correct_index, &mut self.rng);
                let listing = shares
                    .iter()
                    .enumerate()
                    .map(|(index, share)| format!("{}: {share}%", question::answer_letter(index)))
                    .join("\n");
                round.modal = Some(Modal {
                    title: "Ask the Audience".to_owned(),
                    content: format!("Poll results:\n{listing}"),
                });
            }
        }
    }

    fn skip_question<K: Sink>(&mut self, sink: &K) {
        if self.screen != Screen::Playing || self.mode != Some(GameMode::Olympia) {
            return;
        }
        if self.round.as_ref().is_none_or(|round| round.answer_checked) {
            return;
        }
        sink.cue(Cue::Select);
        self.advance_question(sink);
    }

    fn dismiss_modal(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.modal = None;
        }
    }

    fn play_again(&mut self) {
        if matches!(
            self.screen,
            Screen::Victory | Screen::GameOver | Screen::OlympiaSummary
        ) {
            self.round = None;
            self.setup_error = None;
            self.set_screen(Screen::Setup);
        }
    }

    fn return_to_menu(&mut self) {
        self.round = None;
        self.mode = None;
        self.setup_error = None;
        self.set_screen(Screen::Menu);
    }

    /// Mode-specific prize or score standing for display
    fn standing(&self) -> Option<Standing> {
        let round = self.round.as_ref()?;
        match self.mode? {
            GameMode::Millionaire => {
                let prize = match self.screen {
                    Screen::Victory => ladder::top(),
                    Screen::GameOver => ladder::guaranteed(round.current_index),
                    _ => ladder::amount(round.current_index),
                };
                Some(Standing::Prize(prize.to_owned()))
            }
            GameMode::Olympia => Some(Standing::Points {
                score: round.olympia_score,
                correct_answers: ladder::correct_answers(round.olympia_score),
            }),
        }
    }

    /// Builds a read-only snapshot of the current state
    pub fn snapshot(&self) -> Snapshot {
        let round = self.round.as_ref();
        Snapshot {
            screen: self.screen,
            mode: self.mode,
            topic: self.topic.clone(),
            error: self.setup_error.clone(),
            question_number: round.map(|r| r.current_index + 1),
            question_count: round.map(|r| r.questions.len()),
            question: round.and_then(Round::current_question).cloned(),
            selected_answer: round.and_then(|r| r.selected_answer),
            answer_checked: round.is_some_and(|r| r.answer_checked),
            is_correct: round.is_some_and(|r| r.is_correct),
            hidden_answers: round.map(|r| r.hidden_answers.clone()).unwrap_or_default(),
            lifelines: match (self.mode, round) {
                (Some(GameMode::Millionaire), Some(r)) => Some(r.lifelines),
                _ => None,
            },
            time_left: round.map(|r| r.timer.remaining()),
            modal: round.and_then(|r| r.modal.clone()),
            standing: self.standing(),
        }
    }
}
