use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_core::{random_move, Context, Move, MoveSource};

/// RandomBot picks uniformly from rock, paper and scissors.
/// Seed it for reproducible games.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomBot {
    fn name(&self) -> &'static str {
        "random-bot"
    }

    fn choose(&mut self, _ctx: &Context) -> Move {
        random_move(&mut self.rng)
    }
}
