//! Easy-word reference list for Dale-Chall scoring.
//!
//! A word is *difficult* when it is absent from the list. The bundled list is
//! the Dale-Chall vocabulary of about 3000 words familiar to fourth-grade
//! readers. Custom lists use the same format: one word per line, blank lines
//! and `#` comments ignored.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use camino::Utf8Path;

use crate::error::{ConfigError, ConfigResult};
use crate::text::normalize_word;

const BUNDLED_LIST: &str = include_str!("../../data/dale_chall.txt");

static BUILTIN: OnceLock<Result<Arc<EasyWords>, String>> = OnceLock::new();

/// An immutable set of easy words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasyWords {
    words: HashSet<String>,
}

impl EasyWords {
    /// The bundled Dale-Chall list, parsed once per process.
    pub fn builtin() -> ConfigResult<Arc<Self>> {
        BUILTIN
            .get_or_init(|| {
                tracing::debug!("parsing bundled Dale-Chall list");
                Self::parse(BUNDLED_LIST)
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map_err(|reason| ConfigError::MalformedWordList { line: 0, reason })
    }

    /// Parse a word list.
    ///
    /// Each entry is normalized the same way word tokens are, so `Aren't`
    /// in the list matches the token `arent`.
    pub fn parse(source: &str) -> ConfigResult<Self> {
        let mut words = HashSet::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.contains(char::is_whitespace) {
                return Err(ConfigError::MalformedWordList {
                    line: idx + 1,
                    reason: format!("expected one word per line, found {line:?}"),
                });
            }
            let word = normalize_word(line);
            if word.is_empty() {
                return Err(ConfigError::MalformedWordList {
                    line: idx + 1,
                    reason: format!("{line:?} contains no letters or digits"),
                });
            }
            words.insert(word);
        }

        if words.is_empty() {
            return Err(ConfigError::MalformedWordList {
                line: 0,
                reason: "list has no entries".to_string(),
            });
        }

        Ok(Self { words })
    }

    /// Read and parse a word list file.
    pub fn from_file(path: &Utf8Path) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            ConfigError::ResourceFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let list = Self::parse(&source)?;
        tracing::debug!(path = %path, entries = list.len(), "loaded custom word list");
        Ok(list)
    }

    /// Whether `word` (an already normalized token) is on the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether `word` (an already normalized token) is absent from the list.
    pub fn is_difficult(&self, word: &str) -> bool {
        !self.contains(word)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a successfully parsed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_list_has_about_three_thousand_words() {
        let list = EasyWords::builtin().unwrap();
        assert!(list.len() > 2800, "only {} entries", list.len());
        assert!(list.len() < 3100, "{} entries", list.len());
    }

    #[test]
    fn builtin_is_shared() {
        let a = EasyWords::builtin().unwrap();
        let b = EasyWords::builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn familiar_words_are_easy() {
        let list = EasyWords::builtin().unwrap();
        for word in ["a", "apple", "house", "mother", "beautiful", "sentence", "yourself"] {
            assert!(!list.is_difficult(word), "{word} should be easy");
        }
    }

    #[test]
    fn rare_words_are_difficult() {
        let list = EasyWords::builtin().unwrap();
        for word in ["xenotransplantation", "epistemology", "text", "sentences"] {
            assert!(list.is_difficult(word), "{word} should be difficult");
        }
    }

    #[test]
    fn match_is_case_sensitive() {
        let list = EasyWords::builtin().unwrap();
        assert!(list.contains("apple"));
        assert!(!list.contains("Apple"));
    }

    #[test]
    fn entries_are_normalized() {
        let list = EasyWords::parse("# header\n\nAren't\nWELL-known\n  cat  \n").unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("arent"));
        assert!(list.contains("wellknown"));
        assert!(list.contains("cat"));
    }

    #[test]
    fn multi_word_entry_is_malformed() {
        let err = EasyWords::parse("cat\nice cream\n").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedWordList { line: 2, .. }));
    }

    #[test]
    fn punctuation_entry_is_malformed() {
        let err = EasyWords::parse("cat\n---\n").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedWordList { line: 2, .. }));
    }

    #[test]
    fn empty_list_is_malformed() {
        let err = EasyWords::parse("# nothing here\n\n").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedWordList { line: 0, .. }));
    }

    #[test]
    fn from_file_reads_list() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("easy.txt");
        fs::write(&path, "sun\nmoon\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let list = EasyWords::from_file(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.is_difficult("star"));
    }

    #[test]
    fn missing_file_is_resource_error() {
        let err = EasyWords::from_file(Utf8Path::new("/nonexistent/easy.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::ResourceFile { .. }));
    }
}
