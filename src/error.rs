use thiserror::Error;

/// Everything that can go wrong inside the puzzle engine.
///
/// `Clone + PartialEq` so tests can assert on exact error values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Input to signature/solve/verify was empty or not purely alphabetic.
    /// This is a caller bug, never a puzzle-domain "no".
    #[error("input must be non-empty and alphabetic, got {0:?}")]
    InvalidInput(String),

    /// No valid words survived normalization; the engine cannot be built.
    #[error("dictionary contains no valid words")]
    EmptyDictionary,

    /// Difficulty outside the 1..=5 range.
    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),

    /// The requested difficulty bucket holds no real words.
    #[error("no words available at difficulty {0}")]
    EmptyBucket(u8),

    /// The requested bucket's precomputed unsolvable pool is empty.
    #[error("no unsolvable puzzle available at difficulty {0}")]
    NoUnsolvableAvailable(u8),
}
