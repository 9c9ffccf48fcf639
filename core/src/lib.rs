#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cascade::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use matcher::*;
pub use notify::*;
pub use scoring::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

mod board;
mod cascade;
mod engine;
mod error;
mod generator;
mod matcher;
mod notify;
mod scoring;
mod snapshot;
mod state;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Moves granted at the start of every level.
    pub moves: u32,
    /// Score target of the first level.
    pub target: u32,
    /// Added to the target for each level after the first.
    pub target_step: u32,
    /// Idle time after which the combo counter drops back to zero.
    pub combo_window_ms: u64,
}

impl GameConfig {
    pub const fn new_unchecked(
        moves: u32,
        target: u32,
        target_step: u32,
        combo_window_ms: u64,
    ) -> Self {
        Self {
            moves,
            target,
            target_step,
            combo_window_ms,
        }
    }

    pub fn new(moves: u32, target: u32, target_step: u32, combo_window_ms: u64) -> Self {
        Self::new_unchecked(moves.max(1), target.max(1), target_step, combo_window_ms)
    }

    pub const fn target_for_level(&self, level: u32) -> u32 {
        let steps = level.saturating_sub(1);
        self.target.saturating_add(self.target_step.saturating_mul(steps))
    }

    pub const fn combo_window(&self) -> Duration {
        Duration::from_millis(self.combo_window_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(30, 1000, 500, 2000)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Input is closed: level over or a cascade still resolving.
    Ignored,
    Selected,
    Deselected,
    /// A non-adjacent cell replaced the previous selection.
    Reselected,
    /// Adjacent swap without a match, board restored and selection dropped.
    Reverted,
    /// Swap committed, the first batch is scored and a cascade is waiting.
    Matched(CascadeTicket),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            Selected => true,
            Deselected => true,
            Reselected => true,
            Reverted => true,
            Matched(_) => true,
        }
    }

    pub const fn ticket(self) -> Option<CascadeTicket> {
        match self {
            Self::Matched(ticket) => Some(ticket),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CascadeProgress {
    /// Marked gems were cleared, columns collapsed and refilled.
    Refilled { spawned: u32 },
    /// The refilled board matched again and the new batch was scored.
    Marked(ScoreDelta),
    /// No matches left, input is open again.
    Settled,
}

impl CascadeProgress {
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Settled)
    }
}
