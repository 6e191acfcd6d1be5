use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Normalize raw lines into unique lowercase alphabetic words, keeping
/// first-occurrence order. Lines with whitespace, digits, punctuation, or
/// nothing at all are dropped silently; they are not puzzle candidates,
/// not malformed input to report.
pub fn load_dictionary_from_str(data: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    data.lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_ascii_lowercase();
        if !word.is_empty()
            && word.chars().all(|c| c.is_ascii_alphabetic())
            && seen.insert(word.clone())
        {
            words.push(word);
        }
    }
    Ok(words)
}
