//! Win/loss ledger for a game session.

use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{Move, Outcome};

/// Number of rounds kept in the history window.
pub const HISTORY_LIMIT: usize = 100;

/// A single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

/// Where the player stands against the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Winning(u32),
    Losing(u32),
    Tied,
}

/// Serializable snapshot of a scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
    pub total_rounds: u64,
    pub standing: Standing,
    pub history: Vec<RoundRecord>,
}

/// Counters for every round since the last reset, plus the most recent
/// [`HISTORY_LIMIT`] rounds in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    player_wins: u32,
    computer_wins: u32,
    ties: u32,
    history: VecDeque<RoundRecord>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            ..Self::default()
        }
    }

    /// Record one round and return its entry.
    ///
    /// Text outcomes go through `str::parse::<Outcome>` first, which is where
    /// anything outside player/computer/tie is rejected.
    pub fn record_round(
        &mut self,
        player_move: Move,
        computer_move: Move,
        outcome: Outcome,
    ) -> RoundRecord {
        match outcome {
            Outcome::Player => self.player_wins += 1,
            Outcome::Computer => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }

        let record = RoundRecord {
            player_move,
            computer_move,
            outcome,
        };
        self.history.push_back(record);
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }

        debug!(
            "round {}: {} vs {} -> {}",
            self.total_rounds(),
            player_move,
            computer_move,
            outcome
        );
        record
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds recorded since the last reset, including those evicted from history.
    pub fn total_rounds(&self) -> u64 {
        u64::from(self.player_wins) + u64::from(self.computer_wins) + u64::from(self.ties)
    }

    /// Retained rounds, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &RoundRecord> + '_ {
        self.history.iter()
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.back()
    }

    pub fn standing(&self) -> Standing {
        use std::cmp::Ordering;

        match self.player_wins.cmp(&self.computer_wins) {
            Ordering::Greater => Standing::Winning(self.player_wins - self.computer_wins),
            Ordering::Less => Standing::Losing(self.computer_wins - self.player_wins),
            Ordering::Equal => Standing::Tied,
        }
    }

    pub fn score_summary(&self) -> String {
        format!(
            "Score - You: {}, Computer: {}, Ties: {}",
            self.player_wins, self.computer_wins, self.ties
        )
    }

    pub fn detailed_stats(&self) -> String {
        let total = self.total_rounds();
        if total == 0 {
            return "No rounds played yet.".to_string();
        }

        let status = match self.standing() {
            Standing::Winning(by) => format!("You're winning by {}!", by),
            Standing::Losing(by) => format!("You're losing by {}.", by),
            Standing::Tied => "Tied!".to_string(),
        };

        format!(
            "=== SCOREBOARD ===\n\
             Player Wins: {}\n\
             Computer Wins: {}\n\
             Ties: {}\n\
             Total Rounds: {}\n\
             Status: {}\n",
            self.player_wins, self.computer_wins, self.ties, total, status
        )
    }

    pub fn report(&self) -> ScoreReport {
        ScoreReport {
            player_wins: self.player_wins,
            computer_wins: self.computer_wins,
            ties: self.ties,
            total_rounds: self.total_rounds(),
            standing: self.standing(),
            history: self.history.iter().copied().collect(),
        }
    }

    /// Zero the counters and drop the history in a single assignment.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("scoreboard reset");
    }
}
