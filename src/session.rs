use std::io::BufRead;

use log::debug;

use crate::cli::{
    Command, display_error, display_exit_message, display_puzzle, display_solutions,
    display_usage, display_verdict, read_command,
};
use crate::engine::PuzzleEngine;

/// Interactive command loop: read a command, dispatch it to the engine,
/// print the outcome, repeat until `exit` or end of input. Engine errors
/// are reported and the session continues; they never end the loop.
pub fn command_loop<R: BufRead>(engine: &mut PuzzleEngine, mut reader: R) {
    loop {
        match read_command(&mut reader) {
            Command::Exit => {
                display_exit_message();
                break;
            }
            Command::Invalid => display_usage(),
            Command::Generate {
                difficulty,
                unsolvable,
            } => {
                debug!("generate requested: difficulty={difficulty:?} unsolvable={unsolvable}");
                match engine.generate(difficulty, unsolvable) {
                    Ok(puzzle) => display_puzzle(&puzzle),
                    Err(e) => display_error(&e),
                }
            }
            Command::Solve { puzzle } => match engine.solve(&puzzle) {
                Ok(solutions) => display_solutions(&solutions),
                Err(e) => display_error(&e),
            },
            Command::Verify { puzzle, answer } => match engine.verify(&puzzle, &answer) {
                Ok(correct) => display_verdict(correct),
                Err(e) => display_error(&e),
            },
        }
    }
}
