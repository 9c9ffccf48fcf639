use alloc::vec::Vec;
use core::slice;
use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::*;

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

type Run = SmallVec<[Gem; BOARD_SIZE as usize]>;

/// Gems found in runs of three or more, each listed once no matter how many runs it sits in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchSet {
    gems: Vec<Gem>,
    ids: HashSet<GemId>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.gems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }

    pub fn contains(&self, id: GemId) -> bool {
        self.ids.contains(&id)
    }

    /// Matched gems in discovery order, rows first then columns.
    pub fn iter(&self) -> slice::Iter<'_, Gem> {
        self.gems.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = GemId> + '_ {
        self.gems.iter().map(|gem| gem.id)
    }

    fn insert(&mut self, gem: Gem) {
        if self.ids.insert(gem.id) {
            self.gems.push(gem);
        }
    }
}

impl FromIterator<Gem> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Gem>>(iter: I) -> Self {
        let mut set = Self::default();
        for gem in iter {
            set.insert(gem);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Gem;
    type IntoIter = slice::Iter<'a, Gem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scans every row and every column for runs of at least [`MIN_RUN`] gems of one colour.
///
/// Rows and columns are scanned independently, a gem at the crossing of a horizontal and a
/// vertical run is reported once. Empty slots break runs. The board is not touched.
pub fn find_matches(board: &Board) -> MatchSet {
    let mut matches = MatchSet::default();
    for row in 0..BOARD_SIZE {
        scan_line(board, (0..BOARD_SIZE).map(|col| (row, col)), &mut matches);
    }
    for col in 0..BOARD_SIZE {
        scan_line(board, (0..BOARD_SIZE).map(|row| (row, col)), &mut matches);
    }
    matches
}

fn scan_line(board: &Board, line: impl Iterator<Item = Coord2>, matches: &mut MatchSet) {
    let mut run = Run::new();
    for pos in line {
        match board.get(pos) {
            Some(gem) if run.last().is_some_and(|last| last.kind == gem.kind) => run.push(*gem),
            Some(gem) => {
                flush_run(&mut run, matches);
                run.push(*gem);
            }
            None => flush_run(&mut run, matches),
        }
    }
    flush_run(&mut run, matches);
}

fn flush_run(run: &mut Run, matches: &mut MatchSet) {
    if run.len() >= MIN_RUN {
        for gem in run.drain(..) {
            matches.insert(gem);
        }
    } else {
        run.clear();
    }
}

/// Every adjacent swap that would produce at least one match, ordered by the first cell.
pub fn possible_swaps(board: &Board) -> Vec<(Coord2, Coord2)> {
    let mut scratch = board.clone();
    let mut swaps = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = (row, col);
            for to in [(row, col + 1), (row + 1, col)] {
                if board.validate_coords(to).is_err() {
                    continue;
                }
                scratch.swap(from, to);
                if in_run(&scratch, from) || in_run(&scratch, to) {
                    swaps.push((from, to));
                }
                scratch.swap(from, to);
            }
        }
    }
    swaps
}

/// Whether the gem at `pos` is part of a horizontal or vertical run of [`MIN_RUN`].
fn in_run(board: &Board, pos: Coord2) -> bool {
    let Some(kind) = board.kind_at(pos) else {
        return false;
    };

    let stretch = |d_row: i8, d_col: i8| {
        let mut length = 0;
        let mut cursor = pos;
        while let (Some(row), Some(col)) = (
            cursor.0.checked_add_signed(d_row),
            cursor.1.checked_add_signed(d_col),
        ) {
            if board.kind_at((row, col)) != Some(kind) {
                break;
            }
            length += 1;
            cursor = (row, col);
        }
        length
    };

    1 + stretch(0, -1) + stretch(0, 1) >= MIN_RUN || 1 + stretch(-1, 0) + stretch(1, 0) >= MIN_RUN
}
