//! Line-oriented interactive game loop.

use std::io::{self, BufRead, Write};

use log::debug;
use rps_core::{Game, MoveSource, Outcome};

use crate::input::{parse_command, Command};

const PROMPT: &str = "Enter rock, paper, scissors or quit to exit: ";
const FAREWELL: &str = "Thanks for playing!";

/// Read moves until the player quits or input runs out, printing the result
/// and running score after every round and the full stats on quit.
pub fn run_session<R, W, S>(mut input: R, mut output: W, game: &mut Game<S>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: MoveSource,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\n{}", FAREWELL)?;
            break;
        }

        match parse_command(&line) {
            Err(err) => {
                debug!("{}", err);
                writeln!(output, "Invalid choice. Please try again.")?;
            }
            Ok(Command::Quit) => {
                writeln!(output, "{}", game.scoreboard().detailed_stats())?;
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
            Ok(Command::Play(player_move)) => {
                let record = game.play(player_move);
                writeln!(output, "Computer chose: {}", record.computer_move)?;
                let verdict = match record.outcome {
                    Outcome::Player => "You win this round!",
                    Outcome::Computer => "Computer wins this round!",
                    Outcome::Tie => "It's a tie!",
                };
                writeln!(output, "{}", verdict)?;
                writeln!(output, "{}\n", game.scoreboard().score_summary())?;
            }
        }
    }

    Ok(())
}
