use std::collections::HashMap;

use crate::error::EngineError;

/// Canonical form of a word or puzzle string: its letters sorted ascending.
/// Two strings are anagrams of each other iff their signatures are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lowercase `s` after checking it is non-empty and purely ASCII-alphabetic.
/// This one validation guards dictionary construction and every runtime
/// puzzle/answer check alike.
pub(crate) fn validate_input(s: &str) -> Result<String, EngineError> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::InvalidInput(s.to_string()));
    }
    Ok(s.to_ascii_lowercase())
}

pub fn signature_of(s: &str) -> Result<Signature, EngineError> {
    let mut chars: Vec<char> = validate_input(s)?.chars().collect();
    chars.sort_unstable();
    Ok(Signature(chars.into_iter().collect()))
}

/// Signature -> dictionary words sharing it. Built once at engine
/// construction and read-only afterward.
#[derive(Debug, Default)]
pub struct SignatureIndex {
    groups: HashMap<Signature, Vec<String>>,
}

impl SignatureIndex {
    /// Group `words` by signature. Every word lands in exactly one group,
    /// keyed by its own signature.
    pub fn build(words: &[String]) -> Result<Self, EngineError> {
        let mut groups: HashMap<Signature, Vec<String>> = HashMap::new();
        for word in words {
            let sig = signature_of(word)?;
            groups.entry(sig).or_default().push(word.clone());
        }
        Ok(Self { groups })
    }

    /// The group for `sig`, or an empty slice if absent. Absence is how
    /// "no real word matches these letters" is detected.
    pub fn lookup(&self, sig: &Signature) -> &[String] {
        self.groups.get(sig).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, sig: &Signature) -> bool {
        self.groups.contains_key(sig)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
