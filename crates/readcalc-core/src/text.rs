//! Sentence and word segmentation.
//!
//! [`split_sentences`] finds sentence boundaries with context rules
//! (abbreviations, initials, token-internal periods, ellipses,
//! capitalization) and drops segments without any alphanumeric content.
//! [`extract_words`] splits on whitespace, separates treebank-style
//! contractions and normalizes every token with [`normalize_word`].

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::{is_abbreviation, is_word_like_abbreviation};

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\.(?:[A-Z]\.?)*$").expect("valid regex"));

/// Trailing clitics split off the word they attach to (`do|n't`, `john|'s`).
static CONTRACTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*\w)(n['’]t|['’](?:s|re|ve|ll|d|m))(\W*)$").expect("valid regex")
});

/// Whole-word splits from the Penn Treebank tokenizer (`cannot` → `can not`).
const FUSED_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Split text into sentences.
///
/// Runs of terminators and the closing quotes or brackets after them stay
/// with the sentence they end. Segments with no alphanumeric character
/// (`"!!"`, `">>"`, `"..."`) are discarded. `_` counts as content, the same
/// as in [`normalize_word`].
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_sentence_terminator(ch) {
            let mut end = i;
            while end + 1 < chars.len()
                && (is_sentence_terminator(chars[end + 1]) || is_closer(chars[end + 1]))
            {
                end += 1;
                current.push(chars[end]);
            }

            let context = extract_context(&chars, i, end);
            if is_sentence_boundary(&context, &current) {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
            i = end;
        }

        i += 1;
    }

    push_sentence(&mut sentences, &current);
    sentences
}

/// Split text into normalized word tokens.
///
/// Tokens keep their order and duplicates. Hyphenated words stay whole and
/// lose the hyphen during normalization.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .flat_map(split_contractions)
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Lowercase a token and delete every character that is not a letter, digit
/// or underscore.
///
/// Deletion is not splitting: `final.>>` becomes `final`, `e.g.` becomes `eg`.
pub fn normalize_word(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c))
        .collect()
}

/// Whether a character survives [`normalize_word`].
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let sentence = candidate.trim();
    if sentence.chars().any(is_word_char) {
        sentences.push(sentence.to_string());
    }
}

fn split_contractions(chunk: &str) -> Vec<&str> {
    if let Some(caps) = CONTRACTION_PATTERN.captures(chunk)
        && let Some(stem) = caps.get(1)
    {
        return vec![&chunk[..stem.end()], &chunk[stem.end()..]];
    }

    let start = chunk.find(is_word_char).unwrap_or(0);
    let core: String = chunk[start..]
        .chars()
        .take_while(|&c| is_word_char(c))
        .collect::<String>()
        .to_lowercase();
    for &(word, head) in FUSED_WORDS {
        if core == word {
            // Every fused entry is ASCII, so byte offsets match char offsets.
            let split = start + head;
            return vec![&chunk[..split], &chunk[split..]];
        }
    }

    vec![chunk]
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '>' | '»' | '\u{201D}' | '\u{2019}'
    )
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    /// Alphanumeric char directly after the terminator (`3.14`, `x.com`).
    inside_token: bool,
    word_before: String,
    char_after: Option<char>,
    text_after: String,
    is_end_of_text: bool,
}

/// `pos` is the first terminator of the run, `end` the last absorbed char.
fn extract_context(chars: &[char], pos: usize, end: usize) -> SentenceContext {
    let mut after_start = end + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    SentenceContext {
        punctuation: chars[pos],
        inside_token: chars.get(pos + 1).is_some_and(|c| c.is_alphanumeric()),
        word_before: get_word_before(chars, pos),
        char_after: chars.get(after_start).copied(),
        text_after: chars[after_start..].iter().take(20).collect(),
        is_end_of_text: after_start >= chars.len(),
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past periods and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.into_iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    if context.punctuation == '!' || context.punctuation == '?' {
        return check_next_char_capitalization(context);
    }

    if context.inside_token {
        return false;
    }

    if is_word_like(&context.word_before) {
        if context
            .char_after
            .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit())
        {
            return false;
        }
    } else if is_likely_abbreviation(&context.word_before)
        || is_likely_initial(&context.word_before)
    {
        return false;
    }

    if current_sentence.trim_end_matches(is_closer).ends_with("...") {
        return context.char_after.is_some_and(char::is_uppercase);
    }

    !context.char_after.is_some_and(char::is_lowercase)
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    match context.char_after {
        Some(c) if c.is_lowercase() => false,
        Some('"' | '\'' | '\u{201C}' | '\u{2018}') => context
            .text_after
            .chars()
            .nth(1)
            .is_none_or(|c| !c.is_lowercase()),
        _ => true,
    }
}

fn is_likely_abbreviation(word: &str) -> bool {
    let word_clean = word.trim_end_matches('.');
    if word_clean.is_empty() {
        return false;
    }
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter = likely initial
    let mut chars = word_clean.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.next().is_none()
}

/// Abbreviations that double as words, and the pronoun `I`.
fn is_word_like(word: &str) -> bool {
    let word_clean = word.trim_end_matches('.');
    word_clean == "I" || is_word_like_abbreviation(word_clean)
}

fn is_likely_initial(word: &str) -> bool {
    !word.is_empty() && INITIALS_PATTERN.is_match(word)
}
