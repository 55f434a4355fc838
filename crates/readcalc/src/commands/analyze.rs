//! Analyze command: readability metrics for one or more inputs.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readcalc_core::config::Config;
use readcalc_core::{Analyzer, Metric, MetricsReport, TextAnalysis};

use super::{read_input_file, read_stdin};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Files to analyze (`-` or none reads stdin).
    #[arg(conflicts_with = "text")]
    pub files: Vec<Utf8PathBuf>,

    /// Analyze this text instead of reading files.
    #[arg(long, short = 't', value_name = "TEXT")]
    pub text: Option<String>,

    /// Hyphenation language (overrides config).
    #[arg(long, short = 'l', value_name = "TAG")]
    pub language: Option<String>,

    /// TeX hyphenation pattern file (overrides config).
    #[arg(long, value_name = "FILE")]
    pub patterns: Option<Utf8PathBuf>,

    /// Easy-word list file (overrides config).
    #[arg(long, value_name = "FILE")]
    pub word_list: Option<Utf8PathBuf>,

    /// Only report these metrics (repeatable).
    #[arg(long, short = 'm', value_enum, value_name = "NAME")]
    pub metric: Vec<Metric>,

    /// Also report how many words are longer than N characters.
    #[arg(long, value_name = "N")]
    pub longer_than: Option<usize>,
}

enum Input {
    Inline(String),
    Stdin,
    File(Utf8PathBuf),
}

impl Input {
    fn name(&self) -> &str {
        match self {
            Self::Inline(_) => "<text>",
            Self::Stdin => "<stdin>",
            Self::File(path) => path.as_str(),
        }
    }

    fn read(&self, max_input_bytes: Option<usize>) -> anyhow::Result<String> {
        match self {
            Self::Inline(text) => {
                if let Some(max) = max_input_bytes
                    && text.len() > max
                {
                    anyhow::bail!("input too large: --text exceeds {max} bytes");
                }
                Ok(text.clone())
            }
            Self::Stdin => read_stdin(max_input_bytes),
            Self::File(path) => read_input_file(path, max_input_bytes),
        }
    }
}

#[derive(Serialize)]
struct ScoreEntry {
    metric: Metric,
    value: f64,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    source: &'a str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<MetricsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<ScoreEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words_longer_than: Option<LongerThan>,
}

#[derive(Serialize)]
struct LongerThan {
    threshold: usize,
    count: usize,
}

/// Build the analyzer from config plus command-line overrides.
fn build_analyzer(args: &AnalyzeArgs, config: &Config) -> anyhow::Result<Analyzer> {
    let language = args.language.as_deref().unwrap_or(&config.language);
    let mut builder = Analyzer::builder().language(language);
    if let Some(path) = args.patterns.as_ref().or(config.patterns_file.as_ref()) {
        builder = builder.patterns_file(path);
    }
    if let Some(path) = args.word_list.as_ref().or(config.word_list_file.as_ref()) {
        builder = builder.word_list_file(path);
    }
    builder
        .build()
        .with_context(|| format!("failed to prepare analyzer for language {language}"))
}

fn collect_inputs(args: &AnalyzeArgs) -> Vec<Input> {
    if let Some(text) = &args.text {
        return vec![Input::Inline(text.clone())];
    }
    if args.files.is_empty() {
        return vec![Input::Stdin];
    }
    args.files
        .iter()
        .map(|path| {
            if path.as_str() == "-" {
                Input::Stdin
            } else {
                Input::File(path.clone())
            }
        })
        .collect()
}

fn to_output<'a>(
    source: &'a str,
    analysis: &'a TextAnalysis,
    args: &AnalyzeArgs,
) -> AnalyzeOutput<'a> {
    let (report, scores) = if args.metric.is_empty() {
        (Some(analysis.compute_all_metrics()), None)
    } else {
        let scores = args
            .metric
            .iter()
            .map(|&metric| ScoreEntry {
                metric,
                value: analysis.score(metric),
            })
            .collect();
        (None, Some(scores))
    };
    AnalyzeOutput {
        source,
        language: analysis.language(),
        report,
        scores,
        words_longer_than: args.longer_than.map(|threshold| LongerThan {
            threshold,
            count: analysis.words_longer_than(threshold),
        }),
    }
}

fn print_text(source: &str, analysis: &TextAnalysis, args: &AnalyzeArgs, show_header: bool) {
    if show_header {
        println!("{}", format!("==> {source} <==").bold());
    }
    if args.metric.is_empty() {
        println!("{analysis}");
    } else {
        for metric in &args.metric {
            println!("{}: {:.3}", metric.label(), analysis.score(*metric));
        }
    }
    if let Some(threshold) = args.longer_than {
        println!(
            "Words longer than {threshold}: {}",
            analysis.words_longer_than(threshold)
        );
    }
}

/// Compute readability metrics for each input.
#[instrument(name = "cmd_analyze", skip_all, fields(inputs = tracing::field::Empty))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let inputs = collect_inputs(&args);
    tracing::Span::current().record("inputs", inputs.len());
    debug!(metrics = ?args.metric, longer_than = ?args.longer_than, "executing analyze command");

    let analyzer = build_analyzer(&args, config)?;

    let mut analyses = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let content = input.read(max_input_bytes)?;
        let analysis = analyzer.analyze(&content);
        debug!(
            source = input.name(),
            sentences = analysis.sentence_count(),
            words = analysis.word_count(),
            "analyzed input"
        );
        analyses.push(analysis);
    }

    if global_json {
        let outputs: Vec<_> = inputs
            .iter()
            .zip(&analyses)
            .map(|(input, analysis)| to_output(input.name(), analysis, &args))
            .collect();
        if let [single] = outputs.as_slice() {
            println!("{}", serde_json::to_string_pretty(single)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&outputs)?);
        }
    } else {
        let show_header = inputs.len() > 1;
        for (idx, (input, analysis)) in inputs.iter().zip(&analyses).enumerate() {
            if show_header && idx > 0 {
                println!();
            }
            print_text(input.name(), analysis, &args, show_header);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn inline(text: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            text: Some(text.to_string()),
            ..AnalyzeArgs::default()
        }
    }

    #[test]
    fn inline_text_is_analyzed() {
        let args = inline("The cat sat on the mat.");
        assert!(cmd_analyze(args, false, &Config::default(), None).is_ok());
    }

    #[test]
    fn json_with_selected_metrics() {
        let args = AnalyzeArgs {
            metric: vec![Metric::SmogIndex],
            longer_than: Some(3),
            ..inline("Short words here.")
        };
        assert!(cmd_analyze(args, true, &Config::default(), None).is_ok());
    }

    #[test]
    fn output_selects_scores() {
        let analysis = Analyzer::new("en").unwrap().analyze("Tiny text. Another one.");
        let args = AnalyzeArgs {
            metric: vec![Metric::LixIndex, Metric::AriIndex],
            longer_than: Some(4),
            ..AnalyzeArgs::default()
        };
        let output = to_output("<text>", &analysis, &args);
        assert!(output.report.is_none());
        let scores = output.scores.unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].metric, Metric::LixIndex);
        // Only "another" has more than four chars.
        assert_eq!(output.words_longer_than.unwrap().count, 1);
    }

    #[test]
    fn output_defaults_to_full_report() {
        let analysis = Analyzer::new("en").unwrap().analyze("");
        let output = to_output("<text>", &analysis, &AnalyzeArgs::default());
        let report = output.report.unwrap();
        assert_eq!(report.words, 0);
        assert!(output.scores.is_none());
    }

    #[test]
    fn inputs_default_to_stdin() {
        let inputs = collect_inputs(&AnalyzeArgs::default());
        assert!(matches!(inputs.as_slice(), [Input::Stdin]));

        let args = AnalyzeArgs {
            files: vec!["-".into(), "notes.txt".into()],
            ..AnalyzeArgs::default()
        };
        let names: Vec<_> = collect_inputs(&args)
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["<stdin>", "notes.txt"]);
    }

    #[test]
    fn inline_text_respects_limit() {
        let input = Input::Inline("x".repeat(20));
        assert!(input.read(Some(10)).is_err());
        assert!(input.read(Some(20)).is_ok());
    }

    #[test]
    fn unsupported_language_fails() {
        let args = AnalyzeArgs {
            language: Some("zz".to_string()),
            ..inline("Text.")
        };
        let err = cmd_analyze(args, false, &Config::default(), None).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported language"));
    }

    #[test]
    fn custom_word_list_overrides_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("easy.txt");
        fs::write(&path, "tiny\ntext\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let args = AnalyzeArgs {
            word_list: Some(path),
            ..AnalyzeArgs::default()
        };
        let analyzer = build_analyzer(&args, &Config::default()).unwrap();
        let analysis = analyzer.analyze("Tiny text here.");
        assert_eq!(analysis.difficult_word_count(), 1);
    }
}
