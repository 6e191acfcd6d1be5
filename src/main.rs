use std::io;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use anagram_puzzler::cli::{display_greeting, parse_cli};
use anagram_puzzler::{
    EMBEDDED_DICTIONARY, PuzzleEngine, command_loop, load_dictionary_from_file,
    load_dictionary_from_str,
};

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let words = match &cli.dictionary_path {
        Some(path) => match load_dictionary_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load dictionary from '{path}': {e}");
                return;
            }
        },
        None => load_dictionary_from_str(EMBEDDED_DICTIONARY),
    };
    info!("loaded {} dictionary words", words.len());

    let engine = match cli.seed {
        Some(seed) => PuzzleEngine::with_rng(words, StdRng::seed_from_u64(seed)),
        None => PuzzleEngine::from_words(words),
    };
    let mut engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to initialize puzzle engine: {e}");
            return;
        }
    };

    display_greeting(engine.word_count());
    command_loop(&mut engine, io::stdin().lock());
}
