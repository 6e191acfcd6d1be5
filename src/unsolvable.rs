use log::debug;

use crate::buckets::{BucketTable, DIFFICULTY_LEVELS};
use crate::error::EngineError;
use crate::signature::{SignatureIndex, signature_of};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Per-bucket pools of letter sequences that look like that bucket's words
/// but whose signature misses the index. Precomputed once at engine
/// construction; the per-call cost of an unsolvable puzzle afterward is a
/// pool pick plus a scramble.
#[derive(Debug)]
pub struct UnsolvablePool {
    pools: Vec<Vec<String>>,
}

impl UnsolvablePool {
    /// For each bucket, derive at most one entry per vowel-bearing word:
    /// the first single-vowel substitution whose signature has no index
    /// hit. Consonant-only words cannot participate and are skipped; they
    /// stay eligible as solvable puzzles. A bucket where every mutation of
    /// every candidate collides with a real word ends up with an empty
    /// pool, surfaced later as `NoUnsolvableAvailable`.
    pub fn build(table: &BucketTable, index: &SignatureIndex) -> Result<Self, EngineError> {
        let mut pools = Vec::with_capacity(DIFFICULTY_LEVELS as usize);
        for bucket in table.buckets() {
            let mut pool = Vec::new();
            for word in &bucket.words {
                if let Some(entry) = first_missed_mutation(word, index)? {
                    pool.push(entry);
                }
            }
            debug!(
                "unsolvable pool for lengths {}..{}: {} entries from {} words",
                bucket.low,
                bucket.high,
                pool.len(),
                bucket.words.len()
            );
            pools.push(pool);
        }
        Ok(Self { pools })
    }

    /// Entries for a 1-based difficulty level; empty outside 1..=5.
    pub fn entries(&self, difficulty: u8) -> &[String] {
        if (1..=DIFFICULTY_LEVELS).contains(&difficulty) {
            self.pools
                .get(difficulty as usize - 1)
                .map(Vec::as_slice)
                .unwrap_or(&[])
        } else {
            &[]
        }
    }
}

/// First single-vowel substitution of `word` whose signature misses the
/// index, scanning positions left to right and replacement vowels in
/// `aeiou` order. `None` if the word has no vowels or every mutation is
/// itself an anagram of a real word.
fn first_missed_mutation(
    word: &str,
    index: &SignatureIndex,
) -> Result<Option<String>, EngineError> {
    let letters: Vec<char> = word.chars().collect();
    for (pos, &current) in letters.iter().enumerate() {
        if !VOWELS.contains(&current) {
            continue;
        }
        for replacement in VOWELS {
            if replacement == current {
                continue;
            }
            let mut mutated = letters.clone();
            mutated[pos] = replacement;
            let candidate: String = mutated.into_iter().collect();
            if !index.contains(&signature_of(&candidate)?) {
                return Ok(Some(candidate));
            }
        }
    }
    Ok(None)
}
