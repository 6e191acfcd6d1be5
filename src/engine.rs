use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::buckets::{BucketTable, DIFFICULTY_LEVELS};
use crate::error::EngineError;
use crate::signature::{SignatureIndex, signature_of, validate_input};
use crate::unsolvable::UnsolvablePool;

/// An initialized anagram puzzle engine.
///
/// Construction runs the whole pipeline once (index, buckets, unsolvable
/// pools); every call afterward is bounded by puzzle length, not dictionary
/// size. All structures are immutable post-construction; the only mutable
/// state is the engine-owned RNG, so `generate` takes `&mut self` while
/// `solve` and `verify` are plain reads. Engines are self-contained, so
/// several with different dictionaries can coexist.
pub struct PuzzleEngine {
    index: SignatureIndex,
    buckets: BucketTable,
    pool: UnsolvablePool,
    rng: StdRng,
}

impl PuzzleEngine {
    /// Build an engine from normalized words, seeding the RNG from the OS.
    pub fn from_words(words: Vec<String>) -> Result<Self, EngineError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Build an engine with a caller-supplied RNG, for deterministic
    /// puzzle streams in tests.
    pub fn with_rng(words: Vec<String>, rng: StdRng) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::EmptyDictionary);
        }
        let index = SignatureIndex::build(&words)?;
        let buckets = BucketTable::build(&words)?;
        let pool = UnsolvablePool::build(&buckets, &index)?;
        info!(
            "engine ready: {} words, {} signature groups, lengths {}..={}",
            words.len(),
            index.group_count(),
            buckets.min_len(),
            buckets.max_len()
        );
        Ok(Self {
            index,
            buckets,
            pool,
            rng,
        })
    }

    /// Number of dictionary words the engine was built from.
    pub fn word_count(&self) -> usize {
        self.buckets.buckets().iter().map(|b| b.words.len()).sum()
    }

    /// Generate a puzzle at the given difficulty (random in 1..=5 when
    /// omitted). With `unsolvable` set, the puzzle is drawn from the
    /// precomputed pool and has no dictionary solution.
    pub fn generate(
        &mut self,
        difficulty: Option<u8>,
        unsolvable: bool,
    ) -> Result<String, EngineError> {
        let level = match difficulty {
            Some(d) if (1..=DIFFICULTY_LEVELS).contains(&d) => d,
            Some(d) => return Err(EngineError::InvalidDifficulty(d)),
            None => self.rng.random_range(1..=DIFFICULTY_LEVELS),
        };

        let source = if unsolvable {
            self.pool
                .entries(level)
                .choose(&mut self.rng)
                .ok_or(EngineError::NoUnsolvableAvailable(level))?
                .clone()
        } else {
            let bucket = self
                .buckets
                .bucket(level)
                .ok_or(EngineError::InvalidDifficulty(level))?;
            bucket
                .words
                .choose(&mut self.rng)
                .ok_or(EngineError::EmptyBucket(level))?
                .clone()
        };

        debug!("generated level-{level} puzzle from {}-letter source", source.len());
        Ok(self.scramble(&source))
    }

    /// All dictionary words that are anagrams of `puzzle`, in dictionary
    /// order. An empty result means the puzzle is genuinely unsolvable;
    /// only malformed input is an error.
    pub fn solve(&self, puzzle: &str) -> Result<Vec<String>, EngineError> {
        let sig = signature_of(puzzle)?;
        Ok(self.index.lookup(&sig).to_vec())
    }

    /// True iff `answer` is an anagram of `puzzle` and a real dictionary
    /// word. Both inputs go through the same validation as `solve`.
    pub fn verify(&self, puzzle: &str, answer: &str) -> Result<bool, EngineError> {
        let puzzle_norm = validate_input(puzzle)?;
        let answer_norm = validate_input(answer)?;
        if puzzle_norm.len() != answer_norm.len() {
            return Ok(false);
        }

        let puzzle_sig = signature_of(&puzzle_norm)?;
        let answer_sig = signature_of(&answer_norm)?;
        if puzzle_sig != answer_sig {
            return Ok(false);
        }

        Ok(self.index.lookup(&puzzle_sig).iter().any(|w| *w == answer_norm))
    }

    /// Random permutation of `source`, guaranteed to differ from it when at
    /// least two distinct characters exist. Length-1 and all-same-letter
    /// strings come back unchanged; no distinct permutation exists.
    fn scramble(&mut self, source: &str) -> String {
        let mut letters: Vec<char> = source.chars().collect();
        if letters.len() < 2 || letters.windows(2).all(|pair| pair[0] == pair[1]) {
            return source.to_string();
        }
        loop {
            letters.shuffle(&mut self.rng);
            let candidate: String = letters.iter().collect();
            if candidate != source {
                return candidate;
            }
        }
    }
}
