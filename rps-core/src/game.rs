//! A session driver that owns its scoreboard and opponent.

use log::info;

use crate::{resolve, Context, Move, MoveSource, RoundRecord, Scoreboard};

/// One player against one computer opponent.
pub struct Game<S: MoveSource> {
    scoreboard: Scoreboard,
    opponent: S,
}

impl<S: MoveSource> Game<S> {
    pub fn new(opponent: S) -> Self {
        Self {
            scoreboard: Scoreboard::new(),
            opponent,
        }
    }

    pub fn opponent_name(&self) -> &'static str {
        self.opponent.name()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Play a round: ask the opponent, resolve, record.
    pub fn play(&mut self, player_move: Move) -> RoundRecord {
        let ctx = next_context(&self.scoreboard);
        let computer_move = self.opponent.choose(&ctx);
        let outcome = resolve(player_move, computer_move);

        self.scoreboard.record_round(player_move, computer_move, outcome)
    }

    pub fn reset(&mut self) {
        self.scoreboard.reset();
    }
}

fn next_context(scoreboard: &Scoreboard) -> Context {
    Context {
        round: scoreboard.total_rounds() + 1,
        previous: scoreboard.last_round().copied(),
    }
}

/// Pit two move sources against each other for a fixed number of rounds.
///
/// Both sides see the same context, so the "player" side reads the previous
/// round from the player's perspective like any other opponent would.
pub fn simulate_rounds(
    player: &mut dyn MoveSource,
    computer: &mut dyn MoveSource,
    rounds: u32,
) -> Scoreboard {
    let mut scoreboard = Scoreboard::new();

    for _ in 0..rounds {
        let ctx = next_context(&scoreboard);
        let player_move = player.choose(&ctx);
        let computer_move = computer.choose(&ctx);
        let outcome = resolve(player_move, computer_move);
        scoreboard.record_round(player_move, computer_move, outcome);
    }

    info!(
        "{} vs {} over {} rounds: {}",
        player.name(),
        computer.name(),
        rounds,
        scoreboard.score_summary()
    );
    scoreboard
}
