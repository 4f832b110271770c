use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Invalid outcome value: {0}")]
    InvalidOutcome(String),
}
