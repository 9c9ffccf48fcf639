use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of colours in a loop. Meant for scripted boards and refills.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceGemSource {
    kinds: Vec<GemType>,
    cursor: usize,
    next_id: u64,
}

impl SequenceGemSource {
    /// `first_id` lets the caller keep ids clear of gems already on a hand-built board.
    pub fn new(kinds: impl IntoIterator<Item = GemType>, first_id: u64) -> Self {
        let mut kinds: Vec<_> = kinds.into_iter().collect();
        if kinds.is_empty() {
            log::warn!("Empty gem sequence, falling back to every colour");
            kinds.extend(GemType::ALL);
        }
        Self {
            kinds,
            cursor: 0,
            next_id: first_id,
        }
    }
}

impl GemSource for SequenceGemSource {
    fn next_kind(&mut self) -> GemType {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }

    fn next_id(&mut self) -> GemId {
        let id = GemId(self.next_id);
        self.next_id += 1;
        id
    }
}
