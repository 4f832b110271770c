use rps_core::{Context, Move, MoveSource};

/// ContrarianBot expects the player to repeat themselves and plays whatever
/// beats the player's last move. With nothing to react to it opens with rock.
pub struct ContrarianBot;

impl MoveSource for ContrarianBot {
    fn name(&self) -> &'static str {
        "contrarian-bot"
    }

    fn choose(&mut self, ctx: &Context) -> Move {
        match ctx.previous {
            None => Move::Rock,
            Some(last) => last.player_move.counter(),
        }
    }
}
