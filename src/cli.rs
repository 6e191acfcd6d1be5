use std::io::BufRead;

use clap::Parser;

use crate::error::EngineError;

/// Anagram puzzler CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<String>,

    /// Seed the random source for a reproducible puzzle stream
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Session input/output functions

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Generate {
        difficulty: Option<u8>,
        unsolvable: bool,
    },
    Solve {
        puzzle: String,
    },
    Verify {
        puzzle: String,
        answer: String,
    },
    Invalid,
    Exit,
}

pub fn read_command<R: BufRead>(reader: &mut R) -> Command {
    println!(
        "\nEnter a command (generate [1-5] [unsolvable] | solve <letters> | verify <puzzle> <answer> | exit):"
    );
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => Command::Exit,
        Ok(_) => parse_command(&input),
    }
}

fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Command::Invalid;
    };

    match verb.to_ascii_lowercase().as_str() {
        "exit" | "quit" => Command::Exit,
        "generate" => {
            let mut difficulty = None;
            let mut unsolvable = false;
            for token in tokens {
                if token.eq_ignore_ascii_case("unsolvable") {
                    unsolvable = true;
                } else if let Ok(level) = token.parse::<u8>() {
                    difficulty = Some(level);
                } else {
                    return Command::Invalid;
                }
            }
            Command::Generate {
                difficulty,
                unsolvable,
            }
        }
        "solve" => match (tokens.next(), tokens.next()) {
            (Some(puzzle), None) => Command::Solve {
                puzzle: puzzle.to_string(),
            },
            _ => Command::Invalid,
        },
        "verify" => match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(puzzle), Some(answer), None) => Command::Verify {
                puzzle: puzzle.to_string(),
                answer: answer.to_string(),
            },
            _ => Command::Invalid,
        },
        _ => Command::Invalid,
    }
}

pub fn display_greeting(word_count: usize) {
    println!("Anagram puzzler ready. Loaded {word_count} words.");
}

pub fn display_usage() {
    println!(
        "Commands: generate [1-5] [unsolvable] | solve <letters> | verify <puzzle> <answer> | exit"
    );
}

pub fn display_puzzle(puzzle: &str) {
    println!("Puzzle: {puzzle}");
}

pub fn display_solutions(solutions: &[String]) {
    if solutions.is_empty() {
        println!("No solutions. This puzzle is unsolvable.");
    } else {
        println!("Solutions ({}):", solutions.len());
        for word in solutions {
            println!("{word}");
        }
    }
}

pub fn display_verdict(correct: bool) {
    if correct {
        println!("Correct!");
    } else {
        println!("Not a valid solution.");
    }
}

pub fn display_error(error: &EngineError) {
    println!("Error: {error}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}
