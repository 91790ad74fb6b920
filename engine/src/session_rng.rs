use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator owned by a single match, so a game can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
