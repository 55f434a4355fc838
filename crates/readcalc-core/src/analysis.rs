//! Analysis sessions.
//!
//! An [`Analyzer`] holds the shared reference data for one language (the
//! syllable counter and the easy-word list). Each call to
//! [`Analyzer::analyze`] tokenizes one text and aggregates every count up
//! front, so the returned [`TextAnalysis`] answers all queries in constant
//! time.
//!
//! ```
//! use readcalc_core::Analyzer;
//!
//! let analyzer = Analyzer::new("en").unwrap();
//! let analysis = analyzer.analyze("The cat sat on the mat. The dog ran.");
//! assert_eq!(analysis.sentence_count(), 2);
//! assert!(analysis.flesch_reading_ease() > 80.0);
//! ```

use std::fmt;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_LANGUAGE};
use crate::dictionaries::EasyWords;
use crate::error::ConfigResult;
use crate::formulas;
use crate::metrics::{self, AggregateCounts};
use crate::syllables::SyllableCounter;
use crate::text;

/// The readability scores a [`TextAnalysis`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Flesch Reading Ease (higher is easier).
    FleschReadingEase,
    /// Flesch-Kincaid Grade Level.
    FleschKincaidGrade,
    /// Coleman-Liau Index.
    ColemanLiauIndex,
    /// Gunning Fog Index.
    GunningFogIndex,
    /// SMOG Index.
    SmogIndex,
    /// Automated Readability Index.
    AriIndex,
    /// LIX (Läsbarhetsindex).
    LixIndex,
    /// Dale-Chall score.
    DaleChallScore,
    /// Fraction of words on the easy-word list.
    DaleChallKnownFraction,
}

impl Metric {
    /// Every metric, in report order.
    pub const ALL: [Self; 9] = [
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
        Self::ColemanLiauIndex,
        Self::GunningFogIndex,
        Self::SmogIndex,
        Self::AriIndex,
        Self::LixIndex,
        Self::DaleChallScore,
        Self::DaleChallKnownFraction,
    ];

    /// Kebab-case identifier, as used on the command line and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FleschReadingEase => "flesch-reading-ease",
            Self::FleschKincaidGrade => "flesch-kincaid-grade",
            Self::ColemanLiauIndex => "coleman-liau-index",
            Self::GunningFogIndex => "gunning-fog-index",
            Self::SmogIndex => "smog-index",
            Self::AriIndex => "ari-index",
            Self::LixIndex => "lix-index",
            Self::DaleChallScore => "dale-chall-score",
            Self::DaleChallKnownFraction => "dale-chall-known-fraction",
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::FleschKincaidGrade => "Flesch Kincaid Grade Level",
            Self::ColemanLiauIndex => "Coleman Liau Index",
            Self::GunningFogIndex => "Gunning Fog Index",
            Self::SmogIndex => "SMOG Index",
            Self::AriIndex => "ARI Index",
            Self::LixIndex => "LIX Index",
            Self::DaleChallScore => "Dale-Chall Score",
            Self::DaleChallKnownFraction => "Dale-Chall Known Fraction",
        }
    }

    fn compute(self, counts: &AggregateCounts) -> f64 {
        match self {
            Self::FleschReadingEase => formulas::flesch_reading_ease(counts),
            Self::FleschKincaidGrade => formulas::flesch_kincaid_grade(counts),
            Self::ColemanLiauIndex => formulas::coleman_liau_index(counts),
            Self::GunningFogIndex => formulas::gunning_fog_index(counts),
            Self::SmogIndex => formulas::smog_index(counts),
            Self::AriIndex => formulas::ari_index(counts),
            Self::LixIndex => formulas::lix_index(counts),
            Self::DaleChallScore => formulas::dale_chall_score(counts),
            Self::DaleChallKnownFraction => formulas::dale_chall_known_fraction(counts),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every count and every score of one text, in a fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsReport {
    /// Number of sentences.
    pub sentences: usize,
    /// Number of word tokens.
    pub words: usize,
    /// Number of distinct word tokens.
    pub unique_words: usize,
    /// Total characters over all words.
    pub characters: usize,
    /// Total syllables over all words.
    pub syllables: usize,
    /// Words with three or more syllables.
    pub polysyllable_words: usize,
    /// Words absent from the easy-word list.
    pub difficult_words: usize,
    /// Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
    /// Coleman-Liau Index.
    pub coleman_liau_index: f64,
    /// Gunning Fog Index.
    pub gunning_fog_index: f64,
    /// SMOG Index.
    pub smog_index: f64,
    /// Automated Readability Index.
    pub ari_index: f64,
    /// LIX.
    pub lix_index: f64,
    /// Dale-Chall score.
    pub dale_chall_score: f64,
    /// Fraction of words on the easy-word list.
    pub dale_chall_known_fraction: f64,
}

impl MetricsReport {
    /// The value of one score.
    pub const fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FleschReadingEase => self.flesch_reading_ease,
            Metric::FleschKincaidGrade => self.flesch_kincaid_grade,
            Metric::ColemanLiauIndex => self.coleman_liau_index,
            Metric::GunningFogIndex => self.gunning_fog_index,
            Metric::SmogIndex => self.smog_index,
            Metric::AriIndex => self.ari_index,
            Metric::LixIndex => self.lix_index,
            Metric::DaleChallScore => self.dale_chall_score,
            Metric::DaleChallKnownFraction => self.dale_chall_known_fraction,
        }
    }
}

/// Shared reference data for analyzing texts in one language.
///
/// Cheap to clone. Clones share the syllable table and word list, and can be
/// moved to other threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    syllables: SyllableCounter,
    easy_words: Arc<EasyWords>,
}

impl Analyzer {
    /// Analyzer with the built-in hyphenation table for `language` and the
    /// bundled Dale-Chall list.
    pub fn new(language: &str) -> ConfigResult<Self> {
        Self::builder().language(language).build()
    }

    /// Start building an analyzer.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Analyzer for the language and resource files named in `config`.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let mut builder = Self::builder().language(&config.language);
        if let Some(path) = &config.patterns_file {
            builder = builder.patterns_file(path);
        }
        if let Some(path) = &config.word_list_file {
            builder = builder.word_list_file(path);
        }
        builder.build()
    }

    /// Tokenize and aggregate one text.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), language = self.language()))]
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let sentences = text::split_sentences(text);
        let words = text::extract_words(text);
        let counts = metrics::aggregate(&sentences, &words, &self.syllables, &self.easy_words);
        TextAnalysis {
            sentences,
            words,
            counts,
            language: self.language().to_string(),
        }
    }

    /// Language tag (or custom pattern label) syllables are counted for.
    pub fn language(&self) -> &str {
        self.syllables.language()
    }

    /// The syllable counter this analyzer uses.
    pub const fn syllables(&self) -> &SyllableCounter {
        &self.syllables
    }

    /// The easy-word list this analyzer uses.
    pub fn easy_words(&self) -> &EasyWords {
        &self.easy_words
    }
}

/// Builder for [`Analyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    language: String,
    patterns_file: Option<Utf8PathBuf>,
    word_list_file: Option<Utf8PathBuf>,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            patterns_file: None,
            word_list_file: None,
        }
    }
}

impl AnalyzerBuilder {
    /// Language tag for the built-in hyphenation table (default `en`).
    ///
    /// With [`patterns_file`](Self::patterns_file) set, the tag only labels
    /// the custom table.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Count syllables with a TeX hyphenation pattern file.
    #[must_use]
    pub fn patterns_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.patterns_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Classify difficult words against a custom easy-word list.
    #[must_use]
    pub fn word_list_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.word_list_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load every resource. All configuration errors surface here.
    pub fn build(self) -> ConfigResult<Analyzer> {
        let syllables = match &self.patterns_file {
            Some(path) => SyllableCounter::from_patterns_file(path, &self.language)?,
            None => SyllableCounter::for_language(&self.language)?,
        };
        let easy_words = match &self.word_list_file {
            Some(path) => Arc::new(EasyWords::from_file(path)?),
            None => EasyWords::builtin()?,
        };
        tracing::debug!(
            language = syllables.language(),
            easy_words = easy_words.len(),
            "analyzer ready"
        );
        Ok(Analyzer {
            syllables,
            easy_words,
        })
    }
}

/// Counts and scores for one text.
///
/// Immutable; every accessor is a field read or a formula over the
/// precomputed counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnalysis {
    sentences: Vec<String>,
    words: Vec<String>,
    counts: AggregateCounts,
    language: String,
}

impl TextAnalysis {
    /// Analyze `text` with a one-off [`Analyzer`] for `language`.
    pub fn new(text: &str, language: &str) -> ConfigResult<Self> {
        Ok(Analyzer::new(language)?.analyze(text))
    }

    /// The sentences found, trimmed.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// The normalized word tokens, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The aggregate counts.
    pub const fn counts(&self) -> &AggregateCounts {
        &self.counts
    }

    /// Language the syllables were counted for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of sentences.
    pub const fn sentence_count(&self) -> usize {
        self.counts.sentences
    }

    /// Number of word tokens.
    pub const fn word_count(&self) -> usize {
        self.counts.words
    }

    /// Number of distinct word tokens.
    pub const fn unique_word_count(&self) -> usize {
        self.counts.unique_words
    }

    /// Total characters over all words.
    pub const fn char_count(&self) -> usize {
        self.counts.characters
    }

    /// Total syllables.
    pub const fn syllable_count(&self) -> usize {
        self.counts.syllables
    }

    /// Words with three or more syllables.
    pub const fn polysyllable_count(&self) -> usize {
        self.counts.polysyllable_words
    }

    /// Words absent from the easy-word list.
    pub const fn difficult_word_count(&self) -> usize {
        self.counts.difficult_words
    }

    /// Words strictly longer than `threshold` chars.
    pub fn words_longer_than(&self, threshold: usize) -> usize {
        self.counts.words_longer_than(threshold)
    }

    /// See [`formulas::flesch_reading_ease`].
    pub fn flesch_reading_ease(&self) -> f64 {
        formulas::flesch_reading_ease(&self.counts)
    }

    /// See [`formulas::flesch_kincaid_grade`].
    pub fn flesch_kincaid_grade(&self) -> f64 {
        formulas::flesch_kincaid_grade(&self.counts)
    }

    /// See [`formulas::coleman_liau_index`].
    pub fn coleman_liau_index(&self) -> f64 {
        formulas::coleman_liau_index(&self.counts)
    }

    /// See [`formulas::gunning_fog_index`].
    pub fn gunning_fog_index(&self) -> f64 {
        formulas::gunning_fog_index(&self.counts)
    }

    /// See [`formulas::smog_index`].
    pub fn smog_index(&self) -> f64 {
        formulas::smog_index(&self.counts)
    }

    /// See [`formulas::ari_index`].
    pub fn ari_index(&self) -> f64 {
        formulas::ari_index(&self.counts)
    }

    /// See [`formulas::lix_index`].
    pub fn lix_index(&self) -> f64 {
        formulas::lix_index(&self.counts)
    }

    /// See [`formulas::dale_chall_score`].
    pub fn dale_chall_score(&self) -> f64 {
        formulas::dale_chall_score(&self.counts)
    }

    /// See [`formulas::dale_chall_known_fraction`].
    pub fn dale_chall_known_fraction(&self) -> f64 {
        formulas::dale_chall_known_fraction(&self.counts)
    }

    /// One score by name.
    pub fn score(&self, metric: Metric) -> f64 {
        metric.compute(&self.counts)
    }

    /// Every count and score.
    pub fn compute_all_metrics(&self) -> MetricsReport {
        let c = &self.counts;
        MetricsReport {
            sentences: c.sentences,
            words: c.words,
            unique_words: c.unique_words,
            characters: c.characters,
            syllables: c.syllables,
            polysyllable_words: c.polysyllable_words,
            difficult_words: c.difficult_words,
            flesch_reading_ease: self.flesch_reading_ease(),
            flesch_kincaid_grade: self.flesch_kincaid_grade(),
            coleman_liau_index: self.coleman_liau_index(),
            gunning_fog_index: self.gunning_fog_index(),
            smog_index: self.smog_index(),
            ari_index: self.ari_index(),
            lix_index: self.lix_index(),
            dale_chall_score: self.dale_chall_score(),
            dale_chall_known_fraction: self.dale_chall_known_fraction(),
        }
    }
}

impl fmt::Display for TextAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        writeln!(f, "# Sentences: {}", c.sentences)?;
        writeln!(f, "# Words: {}", c.words)?;
        writeln!(f, "# Unique words: {}", c.unique_words)?;
        writeln!(f, "# Chars: {}", c.characters)?;
        writeln!(f, "# Syllables: {}", c.syllables)?;
        writeln!(f, "# 3 Syllables or more: {}", c.polysyllable_words)?;
        writeln!(f, "# Difficult words: {}", c.difficult_words)?;
        writeln!(f, "---------------------------------")?;
        for (i, metric) in Metric::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {:.3}", metric.label(), self.score(*metric))?;
        }
        Ok(())
    }
}
