use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod game;
pub mod scoreboard;

pub use error::ScoreboardError;
pub use game::{simulate_rounds, Game};
pub use scoreboard::{RoundRecord, ScoreReport, Scoreboard, Standing, HISTORY_LIMIT};

/// One of the three hand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Whether `self` wins against `other` under the fixed cycle.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// The move that beats `self`.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
        }
    }
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Player => write!(f, "player"),
            Outcome::Computer => write!(f, "computer"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

impl FromStr for Outcome {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Outcome::Player),
            "computer" => Ok(Outcome::Computer),
            "tie" => Ok(Outcome::Tie),
            other => Err(ScoreboardError::InvalidOutcome(other.to_string())),
        }
    }
}

/// Decide a round. Pure: the same pair always yields the same outcome.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Player
    } else {
        Outcome::Computer
    }
}

/// Uniform pick over the three moves from a caller-supplied generator.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    rng.gen()
}

/// What an opponent gets to see before choosing its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// 1-based round number since the last reset.
    pub round: u64,
    pub previous: Option<RoundRecord>,
}

/// Anything that can pick a move for a round: a seeded RNG, a fixed script,
/// or a strategy reacting to the previous round.
pub trait MoveSource {
    fn name(&self) -> &'static str;
    fn choose(&mut self, ctx: &Context) -> Move;
}

impl<T: MoveSource + ?Sized> MoveSource for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn choose(&mut self, ctx: &Context) -> Move {
        (**self).choose(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn equal_moves_tie() {
        for mv in Move::ALL {
            assert_eq!(resolve(mv, mv), Outcome::Tie);
        }
    }

    #[test]
    fn winning_pairs_resolve_both_ways() {
        let cycle = [
            (Move::Rock, Move::Scissors),
            (Move::Scissors, Move::Paper),
            (Move::Paper, Move::Rock),
        ];

        for (winner, loser) in cycle {
            assert_eq!(resolve(winner, loser), Outcome::Player);
            assert_eq!(resolve(loser, winner), Outcome::Computer);
        }
    }

    #[test]
    fn counter_beats_original() {
        for mv in Move::ALL {
            assert!(mv.counter().beats(mv));
            assert!(!mv.beats(mv));
        }
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(Move::Rock.to_string(), "rock");
        assert_eq!(Move::Paper.to_string(), "paper");
        assert_eq!(Move::Scissors.to_string(), "scissors");
        assert_eq!(Outcome::Computer.to_string(), "computer");
    }

    #[test]
    fn outcome_parses_known_words_only() {
        assert_eq!("tie".parse::<Outcome>().unwrap(), Outcome::Tie);
        assert_eq!("player".parse::<Outcome>().unwrap(), Outcome::Player);

        let err = "invalid".parse::<Outcome>().unwrap_err();
        assert_eq!(err, ScoreboardError::InvalidOutcome("invalid".to_string()));
    }

    #[test]
    fn random_move_is_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        let first: Vec<Move> = (0..50).map(|_| random_move(&mut a)).collect();
        let second: Vec<Move> = (0..50).map(|_| random_move(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn random_move_covers_every_move() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks: Vec<Move> = (0..300).map(|_| random_move(&mut rng)).collect();

        for mv in Move::ALL {
            assert!(picks.contains(&mv), "{} never picked", mv);
        }
    }

    #[test]
    fn moves_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        assert_eq!(serde_json::to_string(&Outcome::Tie).unwrap(), "\"tie\"");
    }
}
