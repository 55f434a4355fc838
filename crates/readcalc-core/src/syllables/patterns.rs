//! Liang hyphenation over TeX-format pattern sources.
//!
//! A pattern such as `a1b` or `.ab3` interleaves letters with priority
//! digits. For a word `w`, every substring of `.w.` that equals a pattern's
//! letters contributes its digits to the inter-letter positions it covers;
//! the highest digit wins. Odd values mark legal break points.

use std::collections::HashMap;

use crate::error::{ConfigError, ConfigResult};

/// Left and right break minima used by Pyphen and most TeX setups.
pub const DEFAULT_MINIMA: (usize, usize) = (2, 2);

/// A parsed hyphenation pattern table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTable {
    /// Pattern letters (may start or end with `.`) → digit per gap.
    patterns: HashMap<String, Vec<u8>>,
    /// Whole-word overrides: word → break offsets (in chars).
    exceptions: HashMap<String, Vec<usize>>,
    /// Longest pattern, in chars.
    max_len: usize,
    minima: (usize, usize),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Block {
    Top,
    Patterns,
    Exceptions,
    /// Some other `\command{`; its contents are skipped.
    Other,
}

impl PatternTable {
    /// Parse a TeX hyphenation source.
    ///
    /// Understands `%` comments, `\patterns{...}` and `\hyphenation{...}`
    /// blocks. Tokens outside any block are read as patterns, so a bare
    /// whitespace-separated list also works.
    pub fn parse(source: &str) -> ConfigResult<Self> {
        let mut table = Self {
            minima: DEFAULT_MINIMA,
            ..Self::default()
        };
        let mut block = Block::Top;

        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.split('%').next().unwrap_or_default();

            for token in line.split_whitespace() {
                let mut token = token;

                if let Some(rest) = token.strip_prefix('\\') {
                    let (command, tail) = rest.split_once('{').ok_or_else(|| {
                        malformed(line_no, format!("expected '{{' after \\{rest}"))
                    })?;
                    block = match command {
                        "patterns" => Block::Patterns,
                        "hyphenation" => Block::Exceptions,
                        _ => Block::Other,
                    };
                    token = tail;
                }

                let closes = token.ends_with('}');
                let body = token.trim_end_matches('}');
                if !body.is_empty() {
                    match block {
                        Block::Top | Block::Patterns => table.add_pattern(body, line_no)?,
                        Block::Exceptions => table.add_exception(body, line_no)?,
                        Block::Other => {}
                    }
                }
                if closes {
                    block = Block::Top;
                }
            }
        }

        if table.patterns.is_empty() {
            return Err(malformed(0, "no patterns found".to_string()));
        }
        Ok(table)
    }

    /// Replace the left/right break minima.
    #[must_use]
    pub const fn with_minima(mut self, left: usize, right: usize) -> Self {
        self.minima = (left, right);
        self
    }

    /// Number of patterns in the table.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false` for a successfully parsed table.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Char offsets inside `word` where a hyphen may be inserted.
    ///
    /// `word` is expected lowercase. Offsets are strictly increasing and lie
    /// in `left_min..=len - right_min`.
    pub fn breaks(&self, word: &str) -> Vec<usize> {
        if let Some(points) = self.exceptions.get(word) {
            return points.clone();
        }

        let letters: Vec<char> = word.chars().collect();
        let (left, right) = (self.minima.0.max(1), self.minima.1.max(1));
        if letters.len() < left + right {
            return Vec::new();
        }

        let mut dotted = Vec::with_capacity(letters.len() + 2);
        dotted.push('.');
        dotted.extend_from_slice(&letters);
        dotted.push('.');

        // scores[i] is the gap before dotted[i].
        let mut scores = vec![0u8; dotted.len() + 1];
        let mut key = String::new();
        for start in 0..dotted.len() {
            key.clear();
            let limit = dotted.len().min(start + self.max_len);
            for &ch in &dotted[start..limit] {
                key.push(ch);
                if let Some(digits) = self.patterns.get(&key) {
                    for (offset, &digit) in digits.iter().enumerate() {
                        let slot = &mut scores[start + offset];
                        *slot = (*slot).max(digit);
                    }
                }
            }
        }

        // A break before letters[p] is the gap before dotted[p + 1].
        (left..=letters.len() - right)
            .filter(|&p| scores[p + 1] % 2 == 1)
            .collect()
    }

    /// Syllables in `word`: one more than the number of breaks.
    pub fn count_syllables(&self, word: &str) -> usize {
        if word.is_empty() {
            0
        } else {
            self.breaks(word).len() + 1
        }
    }

    fn add_pattern(&mut self, token: &str, line: usize) -> ConfigResult<()> {
        let mut letters = String::new();
        let mut digits = vec![0u8];
        let char_count = token.chars().count();

        for (pos, ch) in token.chars().enumerate() {
            if let Some(d) = ch.to_digit(10) {
                let last = digits.len() - 1;
                // Fits in u8: single decimal digit.
                digits[last] = d as u8;
            } else if ch == '.' && (pos == 0 || pos + 1 == char_count) {
                letters.push('.');
                digits.push(0);
            } else if ch.is_alphabetic() || ch == '\'' || ch == '’' {
                letters.extend(ch.to_lowercase());
                digits.push(0);
            } else {
                return Err(malformed(line, format!("invalid character {ch:?} in {token:?}")));
            }
        }

        if !letters.chars().any(char::is_alphabetic) {
            return Err(malformed(line, format!("pattern {token:?} has no letters")));
        }

        // Digits one per gap: len(letters) + 1 entries.
        let len = letters.chars().count();
        digits.truncate(len + 1);
        self.max_len = self.max_len.max(len);
        self.patterns.insert(letters, digits);
        Ok(())
    }

    fn add_exception(&mut self, token: &str, line: usize) -> ConfigResult<()> {
        let mut word = String::new();
        let mut points = Vec::new();
        let mut len = 0;

        for ch in token.chars() {
            if ch == '-' {
                if len == 0 || points.last() == Some(&len) {
                    return Err(malformed(line, format!("misplaced hyphen in {token:?}")));
                }
                points.push(len);
            } else if ch.is_alphabetic() {
                word.extend(ch.to_lowercase());
                len += 1;
            } else {
                return Err(malformed(line, format!("invalid character {ch:?} in {token:?}")));
            }
        }

        if points.last() == Some(&len) {
            return Err(malformed(line, format!("trailing hyphen in {token:?}")));
        }
        self.exceptions.insert(word, points);
        Ok(())
    }
}

fn malformed(line: usize, reason: String) -> ConfigError {
    ConfigError::MalformedPatterns { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_digit_allows_break() {
        let table = PatternTable::parse("a1b").unwrap().with_minima(1, 1);
        assert_eq!(table.breaks("abab"), vec![1, 3]);
        assert_eq!(table.count_syllables("abab"), 3);
    }

    #[test]
    fn minima_suppress_edge_breaks() {
        let table = PatternTable::parse("a1b").unwrap();
        assert!(table.breaks("abab").is_empty());
        assert_eq!(table.count_syllables("abab"), 1);
    }

    #[test]
    fn higher_even_digit_inhibits() {
        let table = PatternTable::parse("a1b 2b").unwrap().with_minima(1, 1);
        assert!(table.breaks("abab").is_empty());
    }

    #[test]
    fn word_boundary_patterns_anchor() {
        let table = PatternTable::parse(".ab1").unwrap();
        assert_eq!(table.breaks("abab"), vec![2]);
        // Anchored at the start only.
        assert!(table.breaks("xabab").is_empty());
    }

    #[test]
    fn tex_blocks_and_comments() {
        let source = "% Sample patterns\n\\patterns{ % letters\n1ba\nc1\n}\n\\hyphenation{ta-ble}\n";
        let table = PatternTable::parse(source).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.breaks("table"), vec![2]);
        assert_eq!(table.breaks("ccccc"), vec![2, 3]);
    }

    #[test]
    fn exceptions_override_patterns() {
        let table = PatternTable::parse("\\patterns{1b}\n\\hyphenation{a-bb-a}").unwrap();
        assert_eq!(table.breaks("abba"), vec![1, 3]);
        assert_eq!(table.count_syllables("abba"), 3);
    }

    #[test]
    fn unknown_blocks_are_skipped() {
        let table = PatternTable::parse("\\message{hello there}\n\\patterns{a1b}").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn short_and_empty_words() {
        let table = PatternTable::parse("a1b").unwrap();
        assert!(table.breaks("ab").is_empty());
        assert_eq!(table.count_syllables("ab"), 1);
        assert_eq!(table.count_syllables(""), 0);
    }

    #[test]
    fn invalid_character_is_malformed() {
        let err = PatternTable::parse("a1b\nx#y").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPatterns { line: 2, .. }));
    }

    #[test]
    fn digits_only_is_malformed() {
        let err = PatternTable::parse("12").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPatterns { line: 1, .. }));
    }

    #[test]
    fn bad_exception_is_malformed() {
        let err = PatternTable::parse("a1b\n\\hyphenation{ta--ble}").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPatterns { line: 2, .. }));
    }

    #[test]
    fn empty_source_is_malformed() {
        let err = PatternTable::parse("% nothing\n").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPatterns { line: 0, .. }));
    }
}
