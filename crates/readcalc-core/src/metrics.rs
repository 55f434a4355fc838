//! Aggregate counts over a tokenized text.
//!
//! [`aggregate`] makes one pass over the word tokens and produces every count
//! the formulas need, including the [`WordLengthHistogram`] behind
//! `words_longer_than` queries.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::EasyWords;
use crate::syllables::SyllableCounter;

/// Words with at least this many syllables are polysyllabic.
pub const POLYSYLLABLE_THRESHOLD: usize = 3;

/// Number of words strictly longer than each length threshold.
///
/// Built once from the sorted word lengths; every lookup is a slice index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordLengthHistogram {
    /// `longer_than[x]` is the number of words with more than `x` chars.
    longer_than: Vec<usize>,
}

impl WordLengthHistogram {
    /// Build the histogram from word lengths (in chars), in any order.
    pub fn from_lengths(mut lengths: Vec<usize>) -> Self {
        lengths.sort_unstable();
        let Some(&max_len) = lengths.last() else {
            return Self::default();
        };

        let total = lengths.len();
        let longer_than = (0..=max_len)
            .map(|x| total - lengths.partition_point(|&len| len <= x))
            .collect();
        Self { longer_than }
    }

    /// Words strictly longer than `threshold` chars. 0 past the longest word.
    pub fn words_longer_than(&self, threshold: usize) -> usize {
        self.longer_than.get(threshold).copied().unwrap_or(0)
    }

    /// Length of the longest word, or `None` for an empty text.
    pub fn max_len(&self) -> Option<usize> {
        self.longer_than.len().checked_sub(1)
    }
}

/// Every count the readability formulas are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AggregateCounts {
    /// Sentences with at least one alphanumeric character.
    pub sentences: usize,
    /// Word tokens, duplicates included.
    pub words: usize,
    /// Distinct word tokens.
    pub unique_words: usize,
    /// Sum of word lengths in chars.
    pub characters: usize,
    /// Sum of syllables over all words.
    pub syllables: usize,
    /// Words with three or more syllables.
    pub polysyllable_words: usize,
    /// Words absent from the easy-word list.
    pub difficult_words: usize,
    /// Word-length distribution.
    pub histogram: WordLengthHistogram,
}

impl AggregateCounts {
    /// Words strictly longer than `threshold` chars.
    pub fn words_longer_than(&self, threshold: usize) -> usize {
        self.histogram.words_longer_than(threshold)
    }
}

/// Count everything in one pass over `words`.
///
/// `words` must already be normalized (see [`crate::text::extract_words`]).
pub fn aggregate(
    sentences: &[String],
    words: &[String],
    syllables: &SyllableCounter,
    easy_words: &EasyWords,
) -> AggregateCounts {
    let mut counts = AggregateCounts {
        sentences: sentences.len(),
        words: words.len(),
        ..AggregateCounts::default()
    };
    let mut unique = HashSet::with_capacity(words.len());
    let mut lengths = Vec::with_capacity(words.len());

    for word in words {
        let len = word.chars().count();
        counts.characters += len;
        lengths.push(len);

        let syl = syllables.count(word);
        counts.syllables += syl;
        if syl >= POLYSYLLABLE_THRESHOLD {
            counts.polysyllable_words += 1;
        }
        if easy_words.is_difficult(word) {
            counts.difficult_words += 1;
        }
        unique.insert(word.as_str());
    }

    counts.unique_words = unique.len();
    counts.histogram = WordLengthHistogram::from_lengths(lengths);

    tracing::debug!(
        sentences = counts.sentences,
        words = counts.words,
        syllables = counts.syllables,
        difficult = counts.difficult_words,
        "aggregated counts"
    );
    counts
}
