use alloc::vec::Vec;
use core::mem;
use web_time::Instant;

use crate::*;

/// Batches a single player action may chain before the cascade is cut short.
pub const MAX_CASCADE_BATCHES: u32 = 1024;

/// Hands a cascade continuation its game and level. Starting a new game or level
/// invalidates every ticket issued before.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CascadeTicket {
    generation: u64,
}

/// What a cascade added on top of the batch that started it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub chain_batches: u32,
    pub chain_points: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    /// Batch scored, gems waiting to be cleared.
    Clearing(MatchSet),
    /// Board refilled, waiting for the next detection pass.
    Refilled,
}

/// The match-3 engine: board, selection, cascade, score, combo and level state.
///
/// Every mutation goes through [`MatchEngine::handle_click`], the cascade steps and the
/// level resets. Side effects are queued as [`GameEvent`]s for the host to drain.
#[derive(Clone, Debug)]
pub struct MatchEngine<S = RandomGemSource> {
    config: GameConfig,
    source: S,
    board: Board,
    score: u32,
    moves: u32,
    level: u32,
    stars: u8,
    target: Target,
    state: GameState,
    selected: Option<Coord2>,
    phase: Phase,
    combo: ComboTracker,
    batches: u32,
    generation: u64,
    events: Vec<GameEvent>,
}

impl MatchEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut source = RandomGemSource::new(seed);
        let board = Board::generate(&mut source);
        Self::assemble(config, board, source)
    }

    /// Starts level 1 on a caller-supplied board, refills are still drawn from `seed`.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self> {
        let first_id = board.iter().map(|gem| gem.id.0 + 1).max().unwrap_or(0);
        Self::with_source(config, board, RandomGemSource::starting_at(seed, first_id))
    }
}

impl<S: GemSource> MatchEngine<S> {
    /// Starts level 1 on a caller-supplied board with refills and later boards drawn from
    /// `source`. Its ids must not collide with the ones already on the board.
    pub fn with_source(config: GameConfig, board: Board, source: S) -> Result<Self> {
        board.validate()?;
        Ok(Self::assemble(config, board, source))
    }

    fn assemble(config: GameConfig, board: Board, source: S) -> Self {
        let target = Target::score(config.target_for_level(1));
        log::info!("level 1 started, target {}", target.value);
        Self {
            config,
            source,
            board,
            score: 0,
            moves: config.moves,
            level: 1,
            stars: 0,
            target,
            state: GameState::Playing,
            selected: None,
            phase: Phase::Idle,
            combo: ComboTracker::new(config.combo_window()),
            batches: 0,
            generation: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Star rating of the current level, 0 until it is won.
    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn combo(&self) -> u32 {
        self.combo.combo()
    }

    pub fn combo_expires_at(&self) -> Option<Instant> {
        self.combo.expires_at()
    }

    /// Ids of the gems marked for removal and not cleared yet.
    pub fn animating_gems(&self) -> impl Iterator<Item = GemId> + '_ {
        let marked = match &self.phase {
            Phase::Clearing(matches) => Some(matches),
            _ => None,
        };
        marked.into_iter().flat_map(|matches| matches.ids())
    }

    pub fn is_resolving(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Clicks are only taken while playing and with no cascade in flight.
    pub fn accepts_input(&self) -> bool {
        self.state.is_playing() && !self.is_resolving()
    }

    /// One swap that would produce a match, if the board has any.
    pub fn hint(&self) -> Option<(Coord2, Coord2)> {
        possible_swaps(&self.board).into_iter().next()
    }

    /// Events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn handle_click(&mut self, pos: Coord2, now: Instant) -> Result<ClickOutcome> {
        use ClickOutcome::*;

        let pos = self.board.validate_coords(pos)?;
        if !self.accepts_input() {
            log::trace!("click at {:?} ignored, {:?}", pos, self.state);
            return Ok(Ignored);
        }

        Ok(match self.selected {
            None => {
                self.select(pos);
                Selected
            }
            Some(selected) if selected == pos => {
                self.selected = None;
                Deselected
            }
            Some(selected) if is_adjacent(selected, pos) => {
                self.selected = None;
                self.try_swap(selected, pos, now)
            }
            Some(_) => {
                self.select(pos);
                Reselected
            }
        })
    }

    /// Clicks and, when the swap commits, resolves the whole cascade with no pauses.
    pub fn click_and_settle(&mut self, pos: Coord2, now: Instant) -> Result<ClickOutcome> {
        let outcome = self.handle_click(pos, now)?;
        if let Some(ticket) = outcome.ticket() {
            self.resolve_cascade(ticket, now)?;
        }
        Ok(outcome)
    }

    /// Runs one cascade step. Hosts that animate call this after each presentation delay.
    pub fn advance_cascade(&mut self, ticket: CascadeTicket, now: Instant) -> Result<CascadeProgress> {
        self.check_ticket(ticket)?;

        Ok(match mem::take(&mut self.phase) {
            Phase::Idle => CascadeProgress::Settled,
            Phase::Clearing(matches) => {
                let spawned = resolve_step(&mut self.board, &matches, &mut self.source);
                self.phase = Phase::Refilled;
                CascadeProgress::Refilled {
                    spawned: spawned.len() as u32,
                }
            }
            Phase::Refilled => {
                let matches = find_matches(&self.board);
                if matches.is_empty() {
                    log::debug!("cascade settled after {} batches", self.batches);
                    self.update_state(true);
                    CascadeProgress::Settled
                } else if self.batches >= MAX_CASCADE_BATCHES {
                    log::warn!(
                        "cascade cut short after {} batches, {} gems still matched",
                        self.batches,
                        matches.len()
                    );
                    self.update_state(true);
                    CascadeProgress::Settled
                } else {
                    CascadeProgress::Marked(self.mark(matches, now))
                }
            }
        })
    }

    /// Runs the cascade to its fixed point without pausing.
    pub fn resolve_cascade(&mut self, ticket: CascadeTicket, now: Instant) -> Result<CascadeSummary> {
        let mut summary = CascadeSummary::default();
        loop {
            match self.advance_cascade(ticket, now)? {
                CascadeProgress::Settled => return Ok(summary),
                CascadeProgress::Marked(delta) => {
                    summary.chain_batches += 1;
                    summary.chain_points = summary.chain_points.saturating_add(delta.total);
                }
                CascadeProgress::Refilled { .. } => {}
            }
        }
    }

    /// Drops the combo if its idle window is over. Returns whether it did.
    pub fn expire_combo(&mut self, now: Instant) -> bool {
        self.combo.expire(now)
    }

    /// Back to level 1 with a fresh board and zero score.
    pub fn reset_game(&mut self) {
        self.level = 1;
        self.score = 0;
        self.start_level();
    }

    /// Next level: fresh board, higher target, full moves. The score carries over.
    pub fn next_level(&mut self) {
        self.level = self.level.saturating_add(1);
        self.start_level();
    }

    fn start_level(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.board = Board::generate(&mut self.source);
        self.moves = self.config.moves;
        self.stars = 0;
        self.target = Target::score(self.config.target_for_level(self.level));
        self.state = GameState::Playing;
        self.selected = None;
        self.phase = Phase::Idle;
        self.combo.reset();
        self.batches = 0;
        self.events.clear();
        log::info!("level {} started, target {}", self.level, self.target.value);
    }

    fn select(&mut self, pos: Coord2) {
        self.selected = Some(pos);
        self.events.push(GameEvent::GemSelected);
    }

    fn try_swap(&mut self, a: Coord2, b: Coord2, now: Instant) -> ClickOutcome {
        self.board.swap(a, b);
        let matches = find_matches(&self.board);
        if matches.is_empty() {
            self.board.swap(a, b);
            self.events.push(GameEvent::InvalidMove);
            log::debug!("swap {:?} <-> {:?} reverted", a, b);
            return ClickOutcome::Reverted;
        }

        self.moves = self.moves.saturating_sub(1);
        self.batches = 0;
        log::debug!("swap {:?} <-> {:?} committed, {} moves left", a, b, self.moves);
        self.mark(matches, now);
        ClickOutcome::Matched(self.ticket())
    }

    /// Scores a batch and leaves its gems marked for the clearing step.
    fn mark(&mut self, matches: MatchSet, now: Instant) -> ScoreDelta {
        let matched = u32::try_from(matches.len()).unwrap_or(u32::MAX);
        let delta = self.combo.record(matched, now);
        self.score = self.score.saturating_add(delta.total);
        self.target.add(delta.total);
        self.batches += 1;

        self.events.push(GameEvent::GemsCrushed { count: matched });
        if delta.combo > 1 {
            self.events.push(GameEvent::Combo { value: delta.combo });
        }
        log::debug!(
            "batch of {} scored {} (combo {}), score {}",
            matched,
            delta.total,
            delta.combo,
            self.score
        );

        self.phase = Phase::Clearing(matches);
        self.update_state(false);
        delta
    }

    /// A win is taken after any batch. A loss waits for the cascade to settle, later
    /// batches of the last move may still reach the target.
    fn update_state(&mut self, settled: bool) {
        if !self.state.is_playing() {
            return;
        }

        match judge(&self.target, self.moves) {
            Verdict::Continue => {}
            Verdict::Won { stars } => {
                self.state = GameState::Won;
                self.stars = stars;
                self.events.push(GameEvent::LevelComplete { stars });
                log::info!("level {} won with {} stars", self.level, stars);
            }
            Verdict::Lost if !settled => {}
            Verdict::Lost => {
                self.state = GameState::Lost;
                self.events.push(GameEvent::GameOver);
                log::info!(
                    "level {} lost at {}/{}",
                    self.level,
                    self.target.current,
                    self.target.value
                );
            }
        }
    }

    fn ticket(&self) -> CascadeTicket {
        CascadeTicket {
            generation: self.generation,
        }
    }

    fn check_ticket(&self, ticket: CascadeTicket) -> Result<()> {
        if ticket.generation == self.generation {
            Ok(())
        } else {
            log::debug!("dropping cascade step of an earlier level");
            Err(GameError::StaleCascade)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    /// Match-free board where swapping (0, 1) with (1, 1) lines up three reds in row 0.
    const QUIET: [&str; 8] = [
        "RYRYRYRY", "BRBPBPBP", "GOGOGOGO", "YRYRYRYR", "PBPBPBPB", "OGOGOGOG", "RYRYRYRY",
        "BPBPBPBP",
    ];

    /// Swapping (7, 2) with (7, 3) clears three blues, the greens from row 6 then drop
    /// next to the greens of row 7 for a second batch.
    const CHAIN: [&str; 8] = [
        "RYRYRYRY", "BRBPBPBP", "GOGOGOGO", "YRYRYRYR", "PBPBPBPB", "OGOGOGOG", "RYGYRYRY",
        "BBGBGPBP",
    ];

    fn engine_on(rows: &[&str]) -> MatchEngine {
        let board = Board::from_rows(rows, 0).unwrap();
        MatchEngine::with_board(GameConfig::default(), board, 9).unwrap()
    }

    fn click(engine: &mut MatchEngine, pos: Coord2) -> ClickOutcome {
        engine.handle_click(pos, Instant::now()).unwrap()
    }

    fn swap(engine: &mut MatchEngine, a: Coord2, b: Coord2) -> ClickOutcome {
        assert_eq!(click(engine, a), ClickOutcome::Selected);
        click(engine, b)
    }

    fn events(engine: &mut MatchEngine) -> Vec<GameEvent> {
        engine.drain_events().collect()
    }

    #[test]
    fn first_click_selects() {
        let mut engine = engine_on(&QUIET);

        assert_eq!(click(&mut engine, (4, 4)), ClickOutcome::Selected);
        assert_eq!(engine.selected(), Some((4, 4)));
        assert_eq!(events(&mut engine), [GameEvent::GemSelected]);
    }

    #[test]
    fn clicking_selection_again_clears_it() {
        let mut engine = engine_on(&QUIET);
        let before = engine.board().clone();

        click(&mut engine, (4, 4));
        assert_eq!(click(&mut engine, (4, 4)), ClickOutcome::Deselected);

        assert_eq!(engine.selected(), None);
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.moves(), 30);
    }

    #[test]
    fn far_click_replaces_selection() {
        let mut engine = engine_on(&QUIET);
        let before = engine.board().clone();

        click(&mut engine, (0, 0));
        assert_eq!(click(&mut engine, (3, 3)), ClickOutcome::Reselected);
        assert_eq!(engine.selected(), Some((3, 3)));

        // diagonal neighbours are not adjacent either
        assert_eq!(click(&mut engine, (4, 4)), ClickOutcome::Reselected);
        assert_eq!(engine.selected(), Some((4, 4)));

        assert_eq!(engine.board(), &before);
        assert_eq!(engine.moves(), 30);
    }

    #[test]
    fn unproductive_swap_is_reverted() {
        let mut engine = engine_on(&QUIET);
        let before = engine.board().clone();

        let outcome = swap(&mut engine, (0, 3), (0, 4));
        assert_eq!(outcome, ClickOutcome::Reverted);
        // the selection was dropped, so there is something to redraw
        assert!(outcome.has_update());

        assert_eq!(engine.board(), &before);
        assert_eq!(engine.selected(), None);
        assert_eq!(engine.moves(), 30);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.target().current, 0);
        assert_eq!(
            events(&mut engine),
            [GameEvent::GemSelected, GameEvent::InvalidMove]
        );
    }

    #[test]
    fn productive_swap_scores_and_settles() {
        let mut engine = engine_on(&QUIET);
        let matched_ids = [
            engine.board().get((0, 0)).unwrap().id,
            engine.board().get((0, 2)).unwrap().id,
            engine.board().get((1, 1)).unwrap().id,
        ];

        let outcome = swap(&mut engine, (0, 1), (1, 1));
        let ticket = outcome.ticket().expect("swap should commit");

        // first batch is scored before anything is cleared
        assert_eq!(engine.score(), 30);
        assert_eq!(engine.target().current, 30);
        assert_eq!(engine.moves(), 29);
        assert_eq!(engine.combo(), 1);
        assert_eq!(engine.state(), GameState::Playing);
        let mut animating: Vec<_> = engine.animating_gems().collect();
        animating.sort();
        let mut expected = matched_ids.to_vec();
        expected.sort();
        assert_eq!(animating, expected);

        // input stays closed until the cascade is over
        assert!(!engine.accepts_input());
        assert_eq!(click(&mut engine, (5, 5)), ClickOutcome::Ignored);

        engine.resolve_cascade(ticket, Instant::now()).unwrap();

        assert!(engine.accepts_input());
        assert_eq!(engine.animating_gems().count(), 0);
        engine.board().validate().unwrap();
        assert!(find_matches(engine.board()).is_empty());
        assert!(engine.score() >= 30);
        for col in 0..3 {
            let gem = engine.board().get((0, col)).unwrap();
            assert!(!matched_ids.contains(&gem.id));
        }
        assert_eq!(
            &events(&mut engine)[..2],
            [GameEvent::GemSelected, GameEvent::GemsCrushed { count: 3 }]
        );
    }

    #[test]
    fn chain_reaction_earns_combo_bonus() {
        let mut engine = engine_on(&CHAIN);
        assert!(find_matches(engine.board()).is_empty());
        let now = Instant::now();

        engine.handle_click((7, 2), now).unwrap();
        let ticket = engine.handle_click((7, 3), now).unwrap().ticket().unwrap();
        assert_eq!(engine.score(), 30);

        assert_eq!(
            engine.advance_cascade(ticket, now).unwrap(),
            CascadeProgress::Refilled { spawned: 3 }
        );
        assert_eq!(engine.animating_gems().count(), 0);

        let CascadeProgress::Marked(delta) = engine.advance_cascade(ticket, now).unwrap() else {
            panic!("greens should line up after the drop");
        };
        assert_eq!(delta.combo_bonus, 5);
        assert_eq!(delta.combo, 2);
        assert!(delta.matched >= 3);

        let summary = engine.resolve_cascade(ticket, now).unwrap();
        assert!(engine.combo() >= 2);
        assert!(engine.score() >= 30 + 35 + summary.chain_points);
        assert!(events(&mut engine).contains(&GameEvent::Combo { value: 2 }));
        assert!(find_matches(engine.board()).is_empty());
    }

    #[test]
    fn stale_cascade_is_rejected_after_reset() {
        let mut engine = engine_on(&QUIET);
        let ticket = swap(&mut engine, (0, 1), (1, 1)).ticket().unwrap();

        engine.reset_game();
        let fresh = engine.board().clone();

        assert_eq!(
            engine.advance_cascade(ticket, Instant::now()),
            Err(GameError::StaleCascade)
        );
        assert_eq!(engine.board(), &fresh);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.moves(), 30);
        assert_eq!(engine.combo(), 0);
        assert!(engine.accepts_input());
    }

    #[test]
    fn stale_cascade_is_rejected_after_next_level() {
        let mut engine = engine_on(&QUIET);
        let ticket = swap(&mut engine, (0, 1), (1, 1)).ticket().unwrap();

        engine.next_level();

        assert_eq!(
            engine.resolve_cascade(ticket, Instant::now()),
            Err(GameError::StaleCascade)
        );
    }

    #[test]
    fn next_level_raises_target_and_keeps_score() {
        let mut engine = engine_on(&QUIET);
        engine.click_and_settle((0, 1), Instant::now()).unwrap();
        engine.click_and_settle((1, 1), Instant::now()).unwrap();
        let score = engine.score();

        engine.next_level();

        assert_eq!(engine.level(), 2);
        assert_eq!(engine.score(), score);
        assert_eq!(engine.target(), Target::score(1500));
        assert_eq!(engine.moves(), 30);
        assert_eq!(engine.combo(), 0);
        assert_eq!(engine.stars(), 0);
        engine.board().validate().unwrap();
    }

    #[test]
    fn reset_game_starts_over() {
        let mut engine = engine_on(&QUIET);
        engine.next_level();
        engine.next_level();

        engine.reset_game();

        assert_eq!(engine.level(), 1);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.target(), Target::score(1000));
        assert_eq!(engine.state(), GameState::Playing);
    }

    fn win_with(current: u32) -> MatchEngine {
        let mut engine = engine_on(&QUIET);
        engine.target.current = current;

        swap(&mut engine, (0, 1), (1, 1));
        engine
    }

    #[test]
    fn reaching_target_exactly_wins_one_star() {
        let mut engine = win_with(970);

        assert_eq!(engine.target().current, 1000);
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.stars(), 1);
        assert!(events(&mut engine).contains(&GameEvent::LevelComplete { stars: 1 }));
    }

    #[test]
    fn star_rating_follows_overshoot() {
        assert_eq!(win_with(1170).stars(), 2);
        assert_eq!(win_with(1470).stars(), 3);
    }

    #[test]
    fn finished_level_ignores_clicks() {
        let mut engine = win_with(970);
        let ticket = CascadeTicket {
            generation: engine.generation,
        };
        engine.resolve_cascade(ticket, Instant::now()).unwrap();

        assert_eq!(click(&mut engine, (3, 3)), ClickOutcome::Ignored);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn last_move_without_target_loses() {
        let mut engine = engine_on(&QUIET);
        engine.moves = 1;

        let ticket = swap(&mut engine, (0, 1), (1, 1)).ticket().unwrap();

        assert_eq!(engine.moves(), 0);
        assert_eq!(engine.state(), GameState::Playing);
        assert!(!engine.accepts_input());

        engine.resolve_cascade(ticket, Instant::now()).unwrap();

        assert!(engine.target().current < 1000);
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.stars(), 0);
        assert!(events(&mut engine).contains(&GameEvent::GameOver));
    }

    #[test]
    fn chain_on_last_move_can_still_win() {
        let mut engine = engine_on(&CHAIN);
        engine.moves = 1;
        engine.target.current = 969;
        let now = Instant::now();

        engine.handle_click((7, 2), now).unwrap();
        let ticket = engine.handle_click((7, 3), now).unwrap().ticket().unwrap();
        assert_eq!(engine.target().current, 999);
        assert_eq!(engine.state(), GameState::Playing);

        engine.resolve_cascade(ticket, now).unwrap();

        assert_eq!(engine.moves(), 0);
        assert!(engine.target().current >= 1034);
        assert_eq!(engine.state(), GameState::Won);
        assert!(engine.stars() >= 1);
        let events = events(&mut engine);
        assert!(events.iter().any(|event| matches!(event, GameEvent::LevelComplete { .. })));
        assert!(!events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn endless_chain_is_cut_short() {
        let board = Board::from_rows(&QUIET, 0).unwrap();
        let reds = SequenceGemSource::new([GemType::Red], 64);
        let mut engine = MatchEngine::with_source(GameConfig::default(), board, reds).unwrap();
        let now = Instant::now();

        engine.handle_click((0, 1), now).unwrap();
        let ticket = engine.handle_click((1, 1), now).unwrap().ticket().unwrap();
        let summary = engine.resolve_cascade(ticket, now).unwrap();

        assert_eq!(summary.chain_batches, MAX_CASCADE_BATCHES - 1);
        assert_eq!(engine.combo(), MAX_CASCADE_BATCHES);
        assert!(!find_matches(engine.board()).is_empty());
        assert!(!engine.is_resolving());
        engine.board().validate().unwrap();
    }

    #[test]
    fn winning_on_last_move_beats_losing() {
        let mut engine = engine_on(&QUIET);
        engine.moves = 1;
        engine.target.current = 990;

        swap(&mut engine, (0, 1), (1, 1));

        assert_eq!(engine.state(), GameState::Won);
    }

    #[test]
    fn out_of_range_click_fails_loudly() {
        let mut engine = engine_on(&QUIET);
        click(&mut engine, (2, 2));

        assert_eq!(
            engine.handle_click((8, 2), Instant::now()),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(engine.selected(), Some((2, 2)));
    }

    #[test]
    fn combo_expires_after_idle_window() {
        let mut engine = engine_on(&QUIET);
        let now = Instant::now();
        engine.handle_click((0, 1), now).unwrap();
        let ticket = engine.handle_click((1, 1), now).unwrap().ticket().unwrap();
        engine.resolve_cascade(ticket, now).unwrap();
        assert!(engine.combo() >= 1);

        assert!(!engine.expire_combo(now + Duration::from_millis(1999)));
        assert!(engine.expire_combo(now + Duration::from_millis(2000)));
        assert_eq!(engine.combo(), 0);
    }

    #[test]
    fn with_board_rejects_holes() {
        let mut board = Board::from_rows(&QUIET, 0).unwrap();
        board.take((3, 3));

        assert_eq!(
            MatchEngine::with_board(GameConfig::default(), board, 1).err(),
            Some(GameError::InvalidBoard)
        );
    }

    #[test]
    fn refills_do_not_reuse_board_ids() {
        let mut engine = engine_on(&QUIET);
        let ticket = swap(&mut engine, (0, 1), (1, 1)).ticket().unwrap();
        engine.resolve_cascade(ticket, Instant::now()).unwrap();

        let mut ids: Vec<_> = engine.board().iter().map(|gem| gem.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn hint_points_at_a_productive_swap() {
        let engine = engine_on(&QUIET);

        assert_eq!(engine.hint(), Some(((0, 1), (1, 1))));
    }

    #[test]
    fn seeded_engines_are_reproducible() {
        let a = MatchEngine::new(GameConfig::default(), 1234);
        let b = MatchEngine::new(GameConfig::default(), 1234);

        assert_eq!(a.board(), b.board());
        assert_eq!(a.target(), Target::score(1000));
    }
}
