use crate::error::EngineError;

pub const DIFFICULTY_LEVELS: u8 = 5;

/// One difficulty level: a half-open word-length range `[low, high)` and the
/// dictionary words whose length falls inside it. The top bucket's `high` is
/// `max_len + 1`, so `max_len` is always covered.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub low: usize,
    pub high: usize,
    pub words: Vec<String>,
}

impl Bucket {
    pub fn contains_len(&self, len: usize) -> bool {
        (self.low..self.high).contains(&len)
    }
}

/// The five difficulty buckets, partitioning `[min_len, max_len]` by word
/// length with no gaps or overlaps. Built once; read-only afterward.
#[derive(Debug)]
pub struct BucketTable {
    buckets: Vec<Bucket>,
    min_len: usize,
    max_len: usize,
}

impl BucketTable {
    pub fn build(words: &[String]) -> Result<Self, EngineError> {
        let min_len = words
            .iter()
            .map(String::len)
            .min()
            .ok_or(EngineError::EmptyDictionary)?;
        let max_len = words
            .iter()
            .map(String::len)
            .max()
            .ok_or(EngineError::EmptyDictionary)?;

        let mut buckets: Vec<Bucket> = if min_len == max_len {
            // Degenerate dictionary: every bucket collapses to the same
            // single-length range and all words land in bucket 5.
            (0..DIFFICULTY_LEVELS)
                .map(|_| Bucket {
                    low: min_len,
                    high: max_len + 1,
                    words: Vec::new(),
                })
                .collect()
        } else {
            let span = max_len - min_len + 1;
            (0..DIFFICULTY_LEVELS as usize)
                .map(|i| Bucket {
                    low: min_len + (i * span).div_ceil(5),
                    high: min_len + ((i + 1) * span).div_ceil(5),
                    words: Vec::new(),
                })
                .collect()
        };

        for word in words {
            let idx = if min_len == max_len {
                DIFFICULTY_LEVELS as usize - 1
            } else {
                let span = max_len - min_len + 1;
                (word.len() - min_len) * 5 / span
            };
            buckets[idx].words.push(word.clone());
        }

        Ok(Self {
            buckets,
            min_len,
            max_len,
        })
    }

    /// The bucket for a 1-based difficulty level, or `None` outside 1..=5.
    pub fn bucket(&self, difficulty: u8) -> Option<&Bucket> {
        if (1..=DIFFICULTY_LEVELS).contains(&difficulty) {
            self.buckets.get(difficulty as usize - 1)
        } else {
            None
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}
