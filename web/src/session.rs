use gemcrush_core::*;
use web_time::Instant;

/// Presentation delays between cascade steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pacing {
    pub clear_delay_ms: u32,
    pub settle_delay_ms: u32,
}

impl Pacing {
    /// How long to wait before the next step, `None` once the cascade settled.
    pub(crate) fn delay_after(&self, progress: CascadeProgress) -> Option<u32> {
        match progress {
            CascadeProgress::Marked(_) => Some(self.clear_delay_ms),
            CascadeProgress::Refilled { .. } => Some(self.settle_delay_ms),
            CascadeProgress::Settled => None,
        }
    }
}

/// Engine plus the sound switch its events are routed through.
pub(crate) struct Session<N> {
    engine: MatchEngine,
    audio: SoundSwitch<N>,
}

impl<N: Notifier> Session<N> {
    pub(crate) fn new(engine: MatchEngine, notifier: N) -> Self {
        Self {
            engine,
            audio: SoundSwitch::new(notifier),
        }
    }

    pub(crate) fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub(crate) fn audio(&self) -> &SoundSwitch<N> {
        &self.audio
    }

    pub(crate) fn audio_mut(&mut self) -> &mut SoundSwitch<N> {
        &mut self.audio
    }

    /// Click with the page's coordinates, anything past `u8` is out of range as well.
    pub(crate) fn click_at(&mut self, row: u32, col: u32, now: Instant) -> Result<ClickOutcome> {
        let (Ok(row), Ok(col)) = (Coord::try_from(row), Coord::try_from(col)) else {
            return Err(GameError::InvalidCoords);
        };
        self.click((row, col), now)
    }

    pub(crate) fn click(&mut self, pos: Coord2, now: Instant) -> Result<ClickOutcome> {
        let outcome = self.engine.handle_click(pos, now);
        self.flush_events();
        outcome
    }

    pub(crate) fn step(&mut self, ticket: CascadeTicket, now: Instant) -> Result<CascadeProgress> {
        let progress = self.engine.advance_cascade(ticket, now);
        self.flush_events();
        progress
    }

    pub(crate) fn expire_combo(&mut self, now: Instant) -> bool {
        self.engine.expire_combo(now)
    }

    pub(crate) fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    pub(crate) fn next_level(&mut self) {
        self.engine.next_level();
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    fn flush_events(&mut self) {
        for event in self.engine.drain_events() {
            log::trace!("event {event:?}");
            self.audio.notify(event);
        }
    }
}
