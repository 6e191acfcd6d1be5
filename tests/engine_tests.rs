// Integration tests for the anagram-puzzler engine
// These exercise the full pipeline: dictionary -> engine -> generate/solve/verify

use std::collections::HashSet;
use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;

use anagram_puzzler::*;

fn embedded_engine() -> PuzzleEngine {
    let words = load_dictionary_from_str(EMBEDDED_DICTIONARY);
    PuzzleEngine::with_rng(words, StdRng::seed_from_u64(99)).unwrap()
}

#[test]
fn test_solve_dgo_finds_dog_and_god() {
    let engine = embedded_engine();
    let solutions: HashSet<String> = engine.solve("dgo").unwrap().into_iter().collect();
    let expected: HashSet<String> = ["dog".to_string(), "god".to_string()].into();
    assert_eq!(solutions, expected);
}

#[test]
fn test_verify_dgo_answers() {
    let engine = embedded_engine();
    assert!(engine.verify("dgo", "dog").unwrap());
    assert!(!engine.verify("dgo", "cat").unwrap());
}

#[test]
fn test_solve_rejects_empty_and_punctuated_input() {
    let engine = embedded_engine();
    assert!(matches!(engine.solve(""), Err(EngineError::InvalidInput(_))));
    assert!(matches!(
        engine.solve("d-o-g"),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_generate_without_arguments_always_succeeds() {
    let mut engine = embedded_engine();
    for _ in 0..100 {
        let puzzle = engine.generate(None, false).unwrap();
        assert!(!puzzle.is_empty());
    }
}

#[test]
fn test_generate_every_difficulty_solvable_and_unsolvable() {
    let mut engine = embedded_engine();
    for level in 1..=5u8 {
        let solvable = engine.generate(Some(level), false).unwrap();
        assert!(
            !engine.solve(&solvable).unwrap().is_empty(),
            "level {level} solvable puzzle {solvable:?} has no solution"
        );

        let unsolvable = engine.generate(Some(level), true).unwrap();
        assert!(
            engine.solve(&unsolvable).unwrap().is_empty(),
            "level {level} unsolvable puzzle {unsolvable:?} has a solution"
        );
    }
}

#[test]
fn test_round_trip_every_dictionary_word() {
    let words = load_dictionary_from_str("dog\ngod\ncat\nhorse\nrabbit\npenguin\nelephant");
    let engine = PuzzleEngine::with_rng(words.clone(), StdRng::seed_from_u64(5)).unwrap();

    for word in &words {
        // Any scrambling of a word shares its signature, so solving the
        // signature-equivalent string must return the word itself.
        let scrambled: String = {
            let mut chars: Vec<char> = word.chars().collect();
            chars.reverse();
            chars.into_iter().collect()
        };
        assert!(engine.solve(&scrambled).unwrap().contains(word));
    }
}

#[test]
fn test_verify_consistent_with_solve() {
    let engine = embedded_engine();
    for puzzle in ["dgo", "tca", "ehors", "zzz"] {
        let solutions = engine.solve(puzzle).unwrap();
        for answer in ["dog", "cat", "horse", "shore", "act"] {
            assert_eq!(
                engine.verify(puzzle, answer).unwrap(),
                solutions.contains(&answer.to_string()),
                "verify({puzzle:?}, {answer:?}) disagrees with solve"
            );
        }
    }
}

#[test]
fn test_generated_puzzle_length_within_difficulty_band() {
    // Embedded dictionary spans lengths 2..=11, so buckets cover two
    // lengths each and generated puzzles must stay inside their band.
    let mut engine = embedded_engine();
    let bands = [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11)];
    for (level, (low, high)) in (1..=5u8).zip(bands) {
        for _ in 0..10 {
            let puzzle = engine.generate(Some(level), false).unwrap();
            assert!(
                (low..=high).contains(&puzzle.len()),
                "level {level} puzzle {puzzle:?} outside {low}..={high}"
            );
        }
    }
}

#[test]
fn test_two_engines_do_not_share_state() {
    let small = load_dictionary_from_str("dog\ngod");
    let large = load_dictionary_from_str(EMBEDDED_DICTIONARY);

    let engine_small = PuzzleEngine::with_rng(small, StdRng::seed_from_u64(1)).unwrap();
    let engine_large = PuzzleEngine::with_rng(large, StdRng::seed_from_u64(1)).unwrap();

    assert!(engine_large.solve("tca").unwrap().contains(&"cat".to_string()));
    assert!(engine_small.solve("tca").unwrap().is_empty());
}

#[test]
fn test_seeded_engines_replay_identically() {
    let words = load_dictionary_from_str(EMBEDDED_DICTIONARY);
    let mut a = PuzzleEngine::with_rng(words.clone(), StdRng::seed_from_u64(1234)).unwrap();
    let mut b = PuzzleEngine::with_rng(words, StdRng::seed_from_u64(1234)).unwrap();

    for _ in 0..25 {
        assert_eq!(a.generate(None, false), b.generate(None, false));
        assert_eq!(a.generate(None, true), b.generate(None, true));
    }
}

#[test]
fn test_session_end_to_end() {
    let mut engine = embedded_engine();
    let input = "generate 1\nsolve dgo\nverify dgo god\ngenerate 3 unsolvable\nbogus\nexit\n";
    let reader = Cursor::new(input);
    command_loop(&mut engine, reader);
}

#[test]
fn test_session_with_custom_dictionary_file() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("anagram_puzzler_session_dict.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "stop").unwrap();
        writeln!(file, "pots").unwrap();
        writeln!(file, "tops").unwrap();
        writeln!(file, "spot").unwrap();
    }

    let words = load_dictionary_from_file(&path).unwrap();
    assert_eq!(words.len(), 4);

    let engine = PuzzleEngine::with_rng(words, StdRng::seed_from_u64(3)).unwrap();
    let solutions: HashSet<String> = engine.solve("opst").unwrap().into_iter().collect();
    assert_eq!(solutions.len(), 4);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_signature_symmetry_over_dictionary() {
    let words = load_dictionary_from_str("listen\nsilent\ntinsel\nenlist\nlisted");
    for a in &words {
        for b in &words {
            let anagrams = {
                let mut x: Vec<char> = a.chars().collect();
                let mut y: Vec<char> = b.chars().collect();
                x.sort_unstable();
                y.sort_unstable();
                x == y
            };
            assert_eq!(
                signature_of(a).unwrap() == signature_of(b).unwrap(),
                anagrams,
                "signature equality must match anagram equality for {a:?}/{b:?}"
            );
        }
    }
}
