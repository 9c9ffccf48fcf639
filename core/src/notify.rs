use serde::{Deserialize, Serialize};

/// Side effects the engine produces for the audio and UI collaborators, in the order they
/// happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GameEvent {
    GemSelected,
    InvalidMove,
    GemsCrushed { count: u32 },
    /// Only emitted once the combo is above one.
    Combo { value: u32 },
    LevelComplete { stars: u8 },
    GameOver,
}

/// Receiver of the engine cues. Every method defaults to doing nothing.
pub trait Notifier {
    fn play_gem_select(&mut self) {}

    fn play_invalid_move(&mut self) {}

    fn play_gem_crush(&mut self, _match_count: u32) {}

    fn play_combo(&mut self, _combo: u32) {}

    fn play_level_complete(&mut self) {}

    fn play_game_over(&mut self) {}

    fn notify(&mut self, event: GameEvent) {
        use GameEvent::*;
        match event {
            GemSelected => self.play_gem_select(),
            InvalidMove => self.play_invalid_move(),
            GemsCrushed { count } => self.play_gem_crush(count),
            Combo { value } => self.play_combo(value),
            LevelComplete { .. } => self.play_level_complete(),
            GameOver => self.play_game_over(),
        }
    }
}

impl Notifier for () {}

/// Mute switch in front of a notifier. Muting drops cues, the engine is not affected.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundSwitch<N> {
    inner: N,
    enabled: bool,
}

impl<N: Notifier> SoundSwitch<N> {
    pub fn new(inner: N) -> Self {
        Self {
            inner,
            enabled: true,
        }
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the switch, returning the new setting.
    pub fn toggle_sound(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::debug!("sound {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut N {
        &mut self.inner
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Notifier> Notifier for SoundSwitch<N> {
    fn play_gem_select(&mut self) {
        if self.enabled {
            self.inner.play_gem_select();
        }
    }

    fn play_invalid_move(&mut self) {
        if self.enabled {
            self.inner.play_invalid_move();
        }
    }

    fn play_gem_crush(&mut self, match_count: u32) {
        if self.enabled {
            self.inner.play_gem_crush(match_count);
        }
    }

    fn play_combo(&mut self, combo: u32) {
        if self.enabled {
            self.inner.play_combo(combo);
        }
    }

    fn play_level_complete(&mut self) {
        if self.enabled {
            self.inner.play_level_complete();
        }
    }

    fn play_game_over(&mut self) {
        if self.enabled {
            self.inner.play_game_over();
        }
    }
}
