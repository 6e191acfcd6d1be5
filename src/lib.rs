// Library interface for anagram-puzzler
// This allows the binary and integration tests to share the engine

pub mod buckets;
pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod session;
pub mod signature;
pub mod unsolvable;

// Re-export the public surface for easier use
pub use dictionary::{EMBEDDED_DICTIONARY, load_dictionary_from_file, load_dictionary_from_str};
pub use engine::PuzzleEngine;
pub use error::EngineError;
pub use session::command_loop;
pub use signature::{Signature, SignatureIndex, signature_of};
