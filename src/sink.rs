//! Presentation sink seam
//!
//! This module defines the trait through which the game controller talks
//! to whatever renders it. The sink abstraction keeps the core free of
//! any rendering or audio concern: the controller pushes read-only state
//! snapshots and fire-and-forget audio cues, and never consults a return
//! value.

use serde::Serialize;

use crate::game::Snapshot;

/// Named audio cues fired at well-defined transition points
///
/// Cues are advisory: the embedding host may synthesize, sample or drop
/// them, and nothing the host does with a cue affects control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cue {
    /// Clock tick, cadence depends on the mode
    Tick,
    /// An answer, lifeline or menu action was picked
    Select,
    /// The reveal showed a correct answer
    Correct,
    /// The reveal showed a wrong answer
    Wrong,
    /// The countdown ran out
    Timeout,
    /// Victory fanfare, also played when a warm-up round finishes
    Win,
}

/// Outbound channel from the game controller to the presentation layer
///
/// Implementations might render to a terminal, a web view, or a test
/// buffer; the controller only ever writes through this trait.
pub trait Sink {
    /// Presents a fresh snapshot of the game state
    fn render(&self, snapshot: &Snapshot);

    /// Fires an audio cue
    fn cue(&self, cue: Cue);
}
