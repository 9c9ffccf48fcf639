use serde::{Deserialize, Serialize};

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Anything else only happens by starting a new game or level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
    /// Part of the state set for hosts, never entered by the engine itself.
    Paused,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the level has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Score,
}

/// Progress counter compared against `value` to decide a level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(rename = "type")]
    pub kind: TargetKind,
    pub value: u32,
    pub current: u32,
}

impl Target {
    pub const fn score(value: u32) -> Self {
        Self {
            kind: TargetKind::Score,
            value,
            current: 0,
        }
    }

    pub const fn is_reached(&self) -> bool {
        self.current >= self.value
    }

    pub fn add(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
    }
}

/// 3 stars at 150 % of the target or more, 2 at 120 %, 1 otherwise.
pub const fn star_rating(current: u32, value: u32) -> u8 {
    // compare current / value against 1.5 and 1.2 without leaving integers
    let current = current as u64 * 10;
    let value = value as u64;
    if current >= value * 15 {
        3
    } else if current >= value * 12 {
        2
    } else {
        1
    }
}

/// What the level should become after a scoring update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Won { stars: u8 },
    Lost,
}

/// Reaching the target wins even when the last move was just spent.
pub const fn judge(target: &Target, moves: u32) -> Verdict {
    if target.is_reached() {
        Verdict::Won {
            stars: star_rating(target.current, target.value),
        }
    } else if moves == 0 {
        Verdict::Lost
    } else {
        Verdict::Continue
    }
}
