//! Error types for readcalc-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or the reference data the
/// analysis pipeline depends on.
///
/// All of these are static misconfigurations. None of them is retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// No hyphenation table exists for the requested language.
    #[error("unsupported language: {language}. Use: {supported}")]
    UnsupportedLanguage {
        /// The language tag that was requested.
        language: String,
        /// Comma-separated list of supported tags.
        supported: String,
    },

    /// A built-in hyphenation table exists but could not be loaded.
    #[error("hyphenation patterns for {language} are unavailable: {reason}")]
    PatternsUnavailable {
        /// The language whose table failed to load.
        language: String,
        /// Loader error message.
        reason: String,
    },

    /// A custom hyphenation pattern source could not be parsed.
    #[error("malformed hyphenation patterns (line {line}): {reason}")]
    MalformedPatterns {
        /// 1-based line number of the offending entry.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The easy-word reference list could not be parsed.
    #[error("malformed word list (line {line}): {reason}")]
    MalformedWordList {
        /// 1-based line number of the offending entry (0 for the whole list).
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A reference data file named in the configuration could not be read.
    #[error("failed to read {path}: {source}")]
    ResourceFile {
        /// The file that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
