//! Normalization of typed input into moves.

use rps_core::Move;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unrecognized choice: {0:?}")]
    Unrecognized(String),
}

/// Parse a line typed by the player. Case and surrounding whitespace are
/// ignored; single letters and the singular "scissor" are accepted.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let choice = line.trim().to_lowercase();
    match choice.as_str() {
        "rock" | "r" => Ok(Command::Play(Move::Rock)),
        "paper" | "p" => Ok(Command::Play(Move::Paper)),
        "scissors" | "scissor" | "s" => Ok(Command::Play(Move::Scissors)),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(InputError::Unrecognized(choice)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_names_and_shorthand() {
        assert_eq!(parse_command("rock"), Ok(Command::Play(Move::Rock)));
        assert_eq!(parse_command("p"), Ok(Command::Play(Move::Paper)));
        assert_eq!(parse_command("s"), Ok(Command::Play(Move::Scissors)));
        assert_eq!(parse_command("scissor"), Ok(Command::Play(Move::Scissors)));
    }

    #[test]
    fn ignores_case_and_whitespace() {
        assert_eq!(parse_command("  PAPER \n"), Ok(Command::Play(Move::Paper)));
        assert_eq!(parse_command("Quit\n"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(
            parse_command("lizard"),
            Err(InputError::Unrecognized("lizard".to_string()))
        );
        assert!(parse_command("").is_err());
    }
}
