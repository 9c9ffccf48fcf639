use rand::prelude::*;

use super::*;

/// Uniform colour draws from a seeded small RNG, ids counted up from zero.
#[derive(Clone, Debug)]
pub struct RandomGemSource {
    rng: SmallRng,
    next_id: u64,
}

impl RandomGemSource {
    pub fn new(seed: u64) -> Self {
        Self::starting_at(seed, 0)
    }

    /// Same as [`RandomGemSource::new`] but hands out ids from `first_id` on, for boards
    /// that already hold gems with lower ids.
    pub fn starting_at(seed: u64, first_id: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            next_id: first_id,
        }
    }
}

impl GemSource for RandomGemSource {
    fn next_kind(&mut self) -> GemType {
        GemType::ALL[self.rng.random_range(0..GemType::ALL.len())]
    }

    fn next_id(&mut self) -> GemId {
        let id = GemId(self.next_id);
        self.next_id += 1;
        id
    }
}
