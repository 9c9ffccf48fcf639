use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::*;

/// Empties the slots of every matched gem still sitting where it was matched.
/// Returns the number of slots cleared.
pub fn clear_matches(board: &mut Board, matches: &MatchSet) -> usize {
    let mut cleared = 0;
    for gem in matches {
        if board.get(gem.pos()).is_some_and(|current| current.id == gem.id) {
            board.take(gem.pos());
            cleared += 1;
        }
    }
    cleared
}

/// Gravity and refill. In every column the remaining gems slide down keeping their order,
/// then the gap left at the top is filled top to bottom with fresh gems.
///
/// Refills are drawn without any run avoidance: new matches are how chains happen.
pub fn collapse_and_refill(board: &mut Board, source: &mut impl GemSource) -> Vec<Gem> {
    let mut spawned = Vec::new();
    for col in 0..BOARD_SIZE {
        let survivors: SmallVec<[Gem; BOARD_SIZE as usize]> = (0..BOARD_SIZE)
            .filter_map(|row| board.take((row, col)))
            .collect();
        let gap = BOARD_SIZE - survivors.len() as Coord;

        for (row, mut gem) in (gap..BOARD_SIZE).zip(survivors) {
            gem.move_to((row, col));
            board.place(gem);
        }
        for row in 0..gap {
            let gem = source.spawn((row, col));
            board.place(gem);
            spawned.push(gem);
        }
    }
    spawned
}

/// One clear, gravity and refill pass for a batch of matches.
pub fn resolve_step(
    board: &mut Board,
    matches: &MatchSet,
    source: &mut impl GemSource,
) -> Vec<Gem> {
    let cleared = clear_matches(board, matches);
    let spawned = collapse_and_refill(board, source);
    log::trace!("cleared {} gems, spawned {}\n{}", cleared, spawned.len(), board);
    spawned
}
