use crate::*;
pub use random::*;
pub use sequence::*;

mod random;
mod sequence;

/// Supplies fresh gems for initial placement and for refills.
pub trait GemSource {
    fn next_kind(&mut self) -> GemType;

    fn next_id(&mut self) -> GemId;

    /// A brand new gem placed at `pos`.
    fn spawn(&mut self, pos: Coord2) -> Gem {
        let id = self.next_id();
        Gem::new(id, self.next_kind(), pos)
    }
}
