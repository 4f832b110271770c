use rps_core::{Context, Move, MoveSource};

/// CycleBot walks `Move::ALL` in order, one hand per round, so a patient
/// player can learn to beat it every time after the first few rounds.
pub struct CycleBot;

impl MoveSource for CycleBot {
    fn name(&self) -> &'static str {
        "cycle-bot"
    }

    fn choose(&mut self, ctx: &Context) -> Move {
        let step = ctx.round.saturating_sub(1) % Move::ALL.len() as u64;
        Move::ALL[step as usize]
    }
}
