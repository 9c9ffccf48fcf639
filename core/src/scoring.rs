use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Points for every gem in a batch.
pub const POINTS_PER_GEM: u32 = 10;

/// Extra points per combo step already reached before the batch.
pub const POINTS_PER_COMBO: u32 = 5;

/// Score change produced by one resolved batch of matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub matched: u32,
    pub base: u32,
    pub combo_bonus: u32,
    pub total: u32,
    /// Combo counter after this batch.
    pub combo: u32,
}

/// Scores a batch. The bonus uses the combo reached *before* this batch, so the first
/// batch of a chain earns none.
pub const fn score_batch(matched: u32, combo_before: u32) -> ScoreDelta {
    let base = matched.saturating_mul(POINTS_PER_GEM);
    let combo_bonus = combo_before.saturating_mul(POINTS_PER_COMBO);
    ScoreDelta {
        matched,
        base,
        combo_bonus,
        total: base.saturating_add(combo_bonus),
        combo: combo_before.saturating_add(1),
    }
}

/// Counts batches and forgets them after an idle window.
///
/// Every batch re-arms the window. The host either calls [`ComboTracker::expire`] when the
/// window is over or lets the next [`ComboTracker::record`] notice it.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboTracker {
    combo: u32,
    window: Duration,
    expires_at: Option<Instant>,
}

impl ComboTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            combo: 0,
            window,
            expires_at: None,
        }
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// When the combo will drop back to zero if no batch arrives before.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    pub fn record(&mut self, matched: u32, now: Instant) -> ScoreDelta {
        self.expire(now);
        let delta = score_batch(matched, self.combo);
        self.combo = delta.combo;
        self.expires_at = Some(now + self.window);
        delta
    }

    /// Resets the combo once the window has run out. Returns whether it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                log::trace!("combo {} expired", self.combo);
                self.reset();
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.combo = 0;
        self.expires_at = None;
    }
}
