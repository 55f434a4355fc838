//! Syllable counting through hyphenation.
//!
//! A word has one syllable more than it has hyphenation breaks. Built-in
//! English tables come from the `hyphenation` crate's embedded TeX patterns;
//! custom TeX pattern files go through [`PatternTable`].

mod patterns;

pub use patterns::{DEFAULT_MINIMA, PatternTable};

use std::sync::{Arc, OnceLock};

use camino::Utf8Path;
use hyphenation::{Hyphenator, Load, Standard};

use crate::config::Language;
use crate::error::{ConfigError, ConfigResult};

type Cached = OnceLock<Result<Arc<Standard>, String>>;

static EN_US: Cached = OnceLock::new();
static EN_GB: Cached = OnceLock::new();

#[derive(Debug)]
enum Backend {
    Embedded(Arc<Standard>),
    Custom(PatternTable),
}

/// Counts syllables for one language.
///
/// Cheap to clone; clones share the underlying table.
#[derive(Debug, Clone)]
pub struct SyllableCounter {
    backend: Arc<Backend>,
    language: String,
}

impl SyllableCounter {
    /// Counter backed by the built-in table for a language tag.
    ///
    /// The table is loaded at most once per process.
    pub fn for_language(tag: &str) -> ConfigResult<Self> {
        let language: Language = tag.parse()?;
        let dictionary = embedded(language)?;
        Ok(Self {
            backend: Arc::new(Backend::Embedded(dictionary)),
            language: language.as_str().to_string(),
        })
    }

    /// Counter backed by a TeX pattern file. `label` is reported as the
    /// counter's language.
    pub fn from_patterns_file(path: &Utf8Path, label: &str) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            ConfigError::ResourceFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let table = PatternTable::parse(&source)?;
        tracing::debug!(path = %path, patterns = table.len(), "loaded custom hyphenation patterns");
        Ok(Self::from_table(table, label))
    }

    /// Counter backed by an already parsed table.
    pub fn from_table(table: PatternTable, label: &str) -> Self {
        Self {
            backend: Arc::new(Backend::Custom(table)),
            language: label.to_string(),
        }
    }

    /// Syllables in a normalized (lowercase) word. The empty string has none.
    pub fn count(&self, word: &str) -> usize {
        if word.is_empty() {
            return 0;
        }
        match self.backend.as_ref() {
            Backend::Embedded(dictionary) => dictionary.hyphenate(word).breaks.len() + 1,
            Backend::Custom(table) => table.count_syllables(word),
        }
    }

    /// The language tag or label this counter was built for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

fn embedded(language: Language) -> ConfigResult<Arc<Standard>> {
    let (cell, tag) = match language {
        Language::EnUs => (&EN_US, hyphenation::Language::EnglishUS),
        Language::EnGb => (&EN_GB, hyphenation::Language::EnglishGB),
    };

    cell.get_or_init(|| {
        tracing::debug!(language = %language, "loading embedded hyphenation table");
        Standard::from_embedded(tag)
            .map(|mut dictionary| {
                dictionary.minima = DEFAULT_MINIMA;
                Arc::new(dictionary)
            })
            .map_err(|e| e.to_string())
    })
    .clone()
    .map_err(|reason| ConfigError::PatternsUnavailable {
        language: language.as_str().to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn counts_english_syllables() {
        let counter = SyllableCounter::for_language("en").unwrap();
        assert_eq!(counter.count("beautiful"), 3);
        assert_eq!(counter.count("cat"), 1);
        assert_eq!(counter.count("a"), 1);
    }

    #[test]
    fn empty_word_has_no_syllables() {
        let counter = SyllableCounter::for_language("en").unwrap();
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn every_nonempty_word_has_a_syllable() {
        let counter = SyllableCounter::for_language("en-gb").unwrap();
        for word in ["x", "rhythm", "strengths", "42", "snake_case"] {
            assert!(counter.count(word) >= 1, "{word}");
        }
    }

    #[test]
    fn language_tags_are_normalized() {
        for tag in ["en", "EN", "en-us", "en_US"] {
            assert_eq!(SyllableCounter::for_language(tag).unwrap().language(), "en-us");
        }
        assert_eq!(SyllableCounter::for_language("en_GB").unwrap().language(), "en-gb");
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = SyllableCounter::for_language("xx-unknown").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn embedded_table_is_shared() {
        let a = embedded(Language::EnUs).unwrap();
        let b = embedded(Language::EnUs).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn custom_table_counts() {
        let table = PatternTable::parse("a1b").unwrap().with_minima(1, 1);
        let counter = SyllableCounter::from_table(table, "test");
        assert_eq!(counter.language(), "test");
        assert_eq!(counter.count("abab"), 3);
        assert_eq!(counter.count("zzz"), 1);
    }

    #[test]
    fn patterns_file_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hyph-test.tex");
        fs::write(&path, "\\patterns{\n.ab1\n}\n\\hyphenation{ta-ble}\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let counter = SyllableCounter::from_patterns_file(&path, "custom").unwrap();
        assert_eq!(counter.count("abab"), 2);
        assert_eq!(counter.count("table"), 2);
    }

    #[test]
    fn missing_patterns_file_is_resource_error() {
        let err =
            SyllableCounter::from_patterns_file(Utf8Path::new("/nonexistent/hyph.tex"), "x")
                .unwrap_err();
        assert!(matches!(err, ConfigError::ResourceFile { .. }));
    }
}
