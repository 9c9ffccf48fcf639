use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Redraws allowed per cell before generation falls back to the first colour that fits.
const MAX_REDRAWS: usize = 64;

/// The 8×8 grid. Every slot holds a gem except transiently in the middle of a cascade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Option<Gem>>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    /// Fills the board in row-major order, redrawing any colour that would make a run of
    /// three with the two cells before it in the same row or the same column.
    ///
    /// This only looks back two cells, so it rules out the obvious runs but is not a full
    /// match scan.
    pub fn generate(source: &mut impl GemSource) -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = (row, col);
                let kind = board.draw_kind(source, pos);
                let id = source.next_id();
                board.place(Gem::new(id, kind, pos));
            }
        }
        board
    }

    fn draw_kind(&self, source: &mut impl GemSource, pos: Coord2) -> GemType {
        for _ in 0..MAX_REDRAWS {
            let kind = source.next_kind();
            if !self.extends_run(kind, pos) {
                return kind;
            }
        }

        // at most two colours are excluded, so one of the six always fits
        let fallback = GemType::ALL
            .into_iter()
            .find(|&kind| !self.extends_run(kind, pos))
            .unwrap_or(GemType::Red);
        log::warn!(
            "Gem source kept repeating runs at {:?}, placed {} instead",
            pos,
            fallback
        );
        fallback
    }

    /// Whether `kind` at `pos` would equal both preceding cells of its row or of its column.
    pub fn extends_run(&self, kind: GemType, (row, col): Coord2) -> bool {
        let in_row = col >= 2
            && self.kind_at((row, col - 1)) == Some(kind)
            && self.kind_at((row, col - 2)) == Some(kind);
        let in_col = row >= 2
            && self.kind_at((row - 1, col)) == Some(kind)
            && self.kind_at((row - 2, col)) == Some(kind);
        in_row || in_col
    }

    /// Builds a board from its text form: one string per row, one colour letter per cell.
    /// Ids are handed out in row-major order starting at `first_id`.
    pub fn from_rows(rows: &[&str], first_id: u64) -> Result<Self> {
        if rows.len() != usize::from(BOARD_SIZE) {
            return Err(GameError::InvalidBoard);
        }

        let mut board = Self::empty();
        let mut next_id = first_id;
        for (row, line) in (0..BOARD_SIZE).zip(rows) {
            let letters: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if letters.len() != usize::from(BOARD_SIZE) {
                return Err(GameError::InvalidBoard);
            }
            for (col, &letter) in (0..BOARD_SIZE).zip(&letters) {
                let kind = GemType::from_letter(letter).ok_or(GameError::InvalidBoard)?;
                board.place(Gem::new(GemId(next_id), kind, (row, col)));
                next_id += 1;
            }
        }
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < BOARD_SIZE && coords.1 < BOARD_SIZE {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Checks shape, that no slot is empty and that every gem knows where it is.
    pub fn validate(&self) -> Result<()> {
        let side = usize::from(BOARD_SIZE);
        if self.cells.dim() != (side, side) {
            return Err(GameError::InvalidBoard);
        }

        for ((row, col), cell) in self.cells.indexed_iter() {
            match cell {
                Some(gem) if usize::from(gem.row) == row && usize::from(gem.col) == col => {}
                _ => return Err(GameError::InvalidBoard),
            }
        }
        Ok(())
    }

    pub fn get(&self, coords: Coord2) -> Option<&Gem> {
        self.cells.get(coords.to_nd_index())?.as_ref()
    }

    pub fn kind_at(&self, coords: Coord2) -> Option<GemType> {
        self.get(coords).map(|gem| gem.kind)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Filled cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Gem> {
        self.cells.iter().flatten()
    }

    /// Row-major copy of the grid, `None` marking an empty slot.
    pub fn rows(&self) -> Vec<Vec<Option<Gem>>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Exchanges two cells and updates the coordinates stored in both gems.
    pub fn swap(&mut self, a: Coord2, b: Coord2) {
        if a == b {
            return;
        }
        self.cells.swap(a.to_nd_index(), b.to_nd_index());
        for pos in [a, b] {
            if let Some(gem) = self.cells[pos.to_nd_index()].as_mut() {
                gem.move_to(pos);
            }
        }
    }

    /// Puts `gem` in the slot its own coordinates name.
    pub(crate) fn place(&mut self, gem: Gem) {
        self.cells[gem.pos().to_nd_index()] = Some(gem);
    }

    pub(crate) fn take(&mut self, coords: Coord2) -> Option<Gem> {
        self.cells[coords.to_nd_index()].take()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                let letter = cell.map_or('.', |gem| gem.kind.letter());
                write!(f, "{}", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const STRIPES: [&str; 8] = [
        "RYRYRYRY", "BPBPBPBP", "GOGOGOGO", "YRYRYRYR", "PBPBPBPB", "OGOGOGOG", "RYRYRYRY",
        "BPBPBPBP",
    ];

    /// The two-cell look-back must hold at every position of a freshly generated board.
    fn assert_no_lookback_runs(board: &Board) {
        for gem in board.iter() {
            let (row, col) = gem.pos();
            if col >= 2 {
                let left = (board.kind_at((row, col - 1)), board.kind_at((row, col - 2)));
                assert_ne!(left, (Some(gem.kind), Some(gem.kind)), "row run at {:?}", (row, col));
            }
            if row >= 2 {
                let up = (board.kind_at((row - 1, col)), board.kind_at((row - 2, col)));
                assert_ne!(up, (Some(gem.kind), Some(gem.kind)), "column run at {:?}", (row, col));
            }
        }
    }

    #[test]
    fn generated_boards_keep_lookback_invariant() {
        for seed in 0..500 {
            let board = Board::generate(&mut RandomGemSource::new(seed));
            assert!(board.is_full());
            board.validate().unwrap();
            assert_no_lookback_runs(&board);
        }
    }

    #[test]
    fn generation_survives_a_monotonous_source() {
        let mut source = SequenceGemSource::new([GemType::Red], 0);
        let board = Board::generate(&mut source);

        board.validate().unwrap();
        assert_no_lookback_runs(&board);
    }

    #[test]
    fn generated_ids_are_unique() {
        let board = Board::generate(&mut RandomGemSource::new(3));
        let mut ids: Vec<_> = board.iter().map(|gem| gem.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn text_form_round_trips() {
        let board = Board::from_rows(&STRIPES, 0).unwrap();

        assert_eq!(board.kind_at((0, 1)), Some(GemType::Yellow));
        assert_eq!(board.get((1, 0)).unwrap().id, GemId(8));
        assert_eq!(board.to_string().lines().next(), Some("RYRYRYRY"));
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        let mut rows = STRIPES;
        rows[3] = "YRYRYRY";
        assert_eq!(Board::from_rows(&rows, 0), Err(GameError::InvalidBoard));

        rows[3] = "YRYRYRYX";
        assert_eq!(Board::from_rows(&rows, 0), Err(GameError::InvalidBoard));

        assert_eq!(Board::from_rows(&STRIPES[..7], 0), Err(GameError::InvalidBoard));
    }

    #[test]
    fn swap_updates_coordinates() {
        let mut board = Board::from_rows(&STRIPES, 0).unwrap();
        let before_a = *board.get((2, 3)).unwrap();
        let before_b = *board.get((2, 4)).unwrap();

        board.swap((2, 3), (2, 4));

        let after_a = board.get((2, 3)).unwrap();
        let after_b = board.get((2, 4)).unwrap();
        assert_eq!(after_a.id, before_b.id);
        assert_eq!(after_b.id, before_a.id);
        assert_eq!(after_a.pos(), (2, 3));
        assert_eq!(after_b.pos(), (2, 4));
        board.validate().unwrap();
    }

    #[test]
    fn validate_rejects_holes() {
        let mut board = Board::from_rows(&STRIPES, 0).unwrap();
        board.take((5, 5));

        assert!(!board.is_full());
        assert_eq!(board.validate(), Err(GameError::InvalidBoard));
    }

    #[test]
    fn out_of_range_coords_are_rejected() {
        let board = Board::empty();
        assert_eq!(board.validate_coords((8, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 8)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((7, 7)), Ok((7, 7)));
        assert_eq!(board.get((9, 9)), None);
    }
}
