//! Readability formulas.
//!
//! Every function is total: when a denominator would be zero the score falls
//! back to a fixed value (100.0 for Flesch Reading Ease, 0.0 otherwise)
//! instead of producing NaN or infinity.
//!
//! | Score | Zero sentences | Zero words |
//! |---|---|---|
//! | Flesch Reading Ease | 100.0 | 100.0 |
//! | Coleman-Liau | evaluated | 0.0 |
//! | SMOG | 0.0 | evaluated |
//! | Dale-Chall known fraction | evaluated | 0.0 |
//! | everything else | 0.0 | 0.0 |

use crate::metrics::AggregateCounts;

/// Word length above which LIX counts a word as long.
pub const LIX_LONG_WORD: usize = 6;

/// Score returned by Flesch Reading Ease for an empty text.
pub const FLESCH_EMPTY_SCORE: f64 = 100.0;

/// `(words / sentences, syllables / words)`, or `None` if either is zero.
fn sentence_and_word_rates(counts: &AggregateCounts) -> Option<(f64, f64)> {
    if counts.sentences == 0 || counts.words == 0 {
        return None;
    }
    let words = counts.words as f64;
    Some((words / counts.sentences as f64, counts.syllables as f64 / words))
}

/// Flesch Reading Ease: `206.835 - 1.015 (W/S) - 85.6 (Syl/W)`.
///
/// Higher is easier. 100.0 for an empty text.
pub fn flesch_reading_ease(counts: &AggregateCounts) -> f64 {
    sentence_and_word_rates(counts).map_or(FLESCH_EMPTY_SCORE, |(wps, spw)| {
        (-85.6f64).mul_add(spw, (-1.015f64).mul_add(wps, 206.835))
    })
}

/// Flesch-Kincaid Grade Level: `0.39 (W/S) + 11.8 (Syl/W) - 15.59`.
pub fn flesch_kincaid_grade(counts: &AggregateCounts) -> f64 {
    sentence_and_word_rates(counts).map_or(0.0, |(wps, spw)| {
        0.39f64.mul_add(wps, 11.8 * spw) - 15.59
    })
}

/// Coleman-Liau Index: `5.89 (C/W) - 30 (S/W) - 15.8`.
///
/// Needs words only; a text with words but no sentence still scores.
pub fn coleman_liau_index(counts: &AggregateCounts) -> f64 {
    if counts.words == 0 {
        return 0.0;
    }
    let words = counts.words as f64;
    let chars_per_word = counts.characters as f64 / words;
    let sentences_per_word = counts.sentences as f64 / words;
    5.89f64.mul_add(chars_per_word, -30.0 * sentences_per_word) - 15.8
}

/// Gunning Fog Index: `0.4 ((W/S) + 100 (Poly/W))`.
pub fn gunning_fog_index(counts: &AggregateCounts) -> f64 {
    if counts.sentences == 0 || counts.words == 0 {
        return 0.0;
    }
    let words = counts.words as f64;
    let wps = words / counts.sentences as f64;
    let complex = counts.polysyllable_words as f64 / words;
    0.4 * 100.0f64.mul_add(complex, wps)
}

/// SMOG Index: `1.0430 sqrt(Poly * 30 / S) + 3.1291`.
pub fn smog_index(counts: &AggregateCounts) -> f64 {
    if counts.sentences == 0 {
        return 0.0;
    }
    let ratio = counts.polysyllable_words as f64 * 30.0 / counts.sentences as f64;
    1.0430f64.mul_add(ratio.sqrt(), 3.1291)
}

/// Automated Readability Index: `4.71 (C/W) + 0.5 (W/S) - 21.43`.
pub fn ari_index(counts: &AggregateCounts) -> f64 {
    if counts.sentences == 0 || counts.words == 0 {
        return 0.0;
    }
    let words = counts.words as f64;
    let chars_per_word = counts.characters as f64 / words;
    let wps = words / counts.sentences as f64;
    4.71f64.mul_add(chars_per_word, 0.5 * wps) - 21.43
}

/// LIX: `W/S + 100 L/W`, where `L` counts words longer than six chars.
pub fn lix_index(counts: &AggregateCounts) -> f64 {
    if counts.sentences == 0 || counts.words == 0 {
        return 0.0;
    }
    let words = counts.words as f64;
    let long_words = counts.words_longer_than(LIX_LONG_WORD) as f64;
    100.0f64.mul_add(long_words / words, words / counts.sentences as f64)
}

/// Dale-Chall score: `0.1579 (100 Diff/W) + 0.0496 (W/S)`.
///
/// Raw score, without the 3.6365 adjustment some variants add for texts
/// above 5% difficult words.
pub fn dale_chall_score(counts: &AggregateCounts) -> f64 {
    if counts.sentences == 0 || counts.words == 0 {
        return 0.0;
    }
    let words = counts.words as f64;
    let pct_difficult = counts.difficult_words as f64 / words * 100.0;
    0.1579f64.mul_add(pct_difficult, 0.0496 * (words / counts.sentences as f64))
}

/// Share of words found on the easy-word list, in `[0, 1]`.
pub fn dale_chall_known_fraction(counts: &AggregateCounts) -> f64 {
    if counts.words == 0 {
        return 0.0;
    }
    1.0 - counts.difficult_words as f64 / counts.words as f64
}
