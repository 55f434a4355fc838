//! Core library for readcalc.
//!
//! Readability metrics for plain text: Flesch Reading Ease, Flesch-Kincaid,
//! Coleman-Liau, Gunning Fog, SMOG, ARI, LIX and Dale-Chall.
//!
//! # Modules
//!
//! - [`text`] - Sentence and word segmentation
//! - [`syllables`] - Hyphenation-based syllable counting
//! - [`dictionaries`] - Abbreviations and the Dale-Chall easy-word list
//! - [`metrics`] - Aggregate counts and the word-length histogram
//! - [`formulas`] - The readability formulas
//! - [`analysis`] - Analysis sessions tying it all together
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use readcalc_core::{Analyzer, Metric};
//!
//! let analyzer = Analyzer::new("en").expect("built-in English tables");
//! let analysis = analyzer.analyze("The cat sat on the mat. The dog ran fast.");
//!
//! for metric in Metric::ALL {
//!     println!("{}: {:.2}", metric.label(), analysis.score(metric));
//! }
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod formulas;
pub mod metrics;
pub mod syllables;
pub mod text;

pub use analysis::{Analyzer, AnalyzerBuilder, Metric, MetricsReport, TextAnalysis};
pub use config::{Config, ConfigLoader, Language, LogLevel};
pub use dictionaries::EasyWords;
pub use error::{ConfigError, ConfigResult};
pub use metrics::{AggregateCounts, WordLengthHistogram};
pub use syllables::{PatternTable, SyllableCounter};

/// Default maximum input size the CLI reads (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
