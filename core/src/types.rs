use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`, row 0 is the top of the board.
pub type Coord2 = (Coord, Coord);

/// Side length of the square board.
pub const BOARD_SIZE: Coord = 8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// True when `a` and `b` share an edge (Manhattan distance of exactly one).
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) as u16 + a.1.abs_diff(b.1) as u16 == 1
}

/// The six gem colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemType {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl GemType {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];

    pub const fn name(self) -> &'static str {
        use GemType::*;
        match self {
            Red => "red",
            Blue => "blue",
            Green => "green",
            Yellow => "yellow",
            Purple => "purple",
            Orange => "orange",
        }
    }

    /// Upper-case initial, used by the text form of a board.
    pub const fn letter(self) -> char {
        use GemType::*;
        match self {
            Red => 'R',
            Blue => 'B',
            Green => 'G',
            Yellow => 'Y',
            Purple => 'P',
            Orange => 'O',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for GemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Special gem flag. Carried through the model and serialized, but nothing produces or
/// reads a value other than `None` yet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Special {
    #[default]
    None,
    Horizontal,
    Vertical,
    Bomb,
    Magic,
}

/// Opaque gem identity, fresh for every spawned gem.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GemId(pub u64);

impl fmt::Display for GemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gem-{}", self.0)
    }
}

/// Content of a single board cell. `row`/`col` always mirror the slot the gem sits in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gem {
    pub id: GemId,
    #[serde(rename = "type")]
    pub kind: GemType,
    pub special: Special,
    pub row: Coord,
    pub col: Coord,
}

impl Gem {
    pub const fn new(id: GemId, kind: GemType, (row, col): Coord2) -> Self {
        Self {
            id,
            kind,
            special: Special::None,
            row,
            col,
        }
    }

    pub const fn pos(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub(crate) fn move_to(&mut self, (row, col): Coord2) {
        self.row = row;
        self.col = col;
    }
}

const DISPLACEMENTS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: (i8, i8)) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= BOARD_SIZE {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= BOARD_SIZE {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates over the up to four edge-sharing neighbours of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
