//! Analyze command: rank the words of well- and wrong-answered questions.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use quiz_lens_core::analysis::{self, AnalysisOptions, QuestionAnalysis};
use quiz_lens_core::config::Config;
use quiz_lens_core::question;
use quiz_lens_core::ranking::{Preset, WordCount};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of questions (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Correctness rate at or above which a question is well answered.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Top-word selection preset.
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Minimum occurrences for a word to be listed.
    #[arg(long)]
    pub min_frequency: Option<usize>,

    /// Maximum words listed per group.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl AnalyzeArgs {
    /// Resolve settings: flags first, then config, then preset defaults.
    pub fn options(&self, config: &Config) -> AnalysisOptions {
        let preset = self.preset.unwrap_or(config.preset);
        AnalysisOptions {
            threshold: self.threshold.unwrap_or(config.threshold),
            selection: preset
                .options()
                .overridden(config.min_frequency, config.limit)
                .overridden(self.min_frequency, self.limit),
        }
    }
}

/// Load questions from a file and report their top words.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, preset = ?args.preset, "executing analyze command");

    let options = args.options(config);
    options.validate()?;

    let content = super::read_input_file(&args.file, max_input)?;
    let questions = question::parse_questions(&content)
        .with_context(|| format!("failed to load questions from {}", args.file))?;

    let tokenizer = config.tokenizer();
    let report = analysis::analyze_questions(&questions, &tokenizer, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&args.file, &report);
    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &QuestionAnalysis) {
    println!("{}", file.bold());

    let Some(ref summary) = report.summary else {
        println!("\n  {}", "No questions to analyze.".yellow());
        return;
    };

    print_group("Well answered:", &report.well_answered);
    print_group("Wrong answered:", &report.wrong_answered);

    println!(
        "\n  {} {} questions ({} well answered, {} wrong answered)",
        "Summary:".cyan(),
        summary.total_questions,
        summary.well_answered_count.green(),
        summary.wrong_answered_count.red(),
    );
    println!(
        "           {} words analyzed, {:.2} per question",
        summary.words_analyzed, summary.average_words_per_question,
    );
}

fn print_group(label: &str, words: &[WordCount]) {
    println!("\n  {}", label.cyan());
    if words.is_empty() {
        println!("    {}", "(no words met the frequency floor)".dimmed());
        return;
    }
    for (rank, entry) in words.iter().enumerate() {
        println!("    {}. {} : {}", rank + 1, entry.word, entry.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            file: Utf8PathBuf::from(file),
            threshold: None,
            preset: None,
            min_frequency: None,
            limit: None,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let config = Config {
            threshold: 0.6,
            preset: Preset::Detailed,
            ..Config::default()
        };
        let options = args("q.json").options(&config);
        assert_eq!(options.threshold, 0.6);
        assert_eq!(options.selection, Preset::Detailed.options());
    }

    #[test]
    fn flags_beat_config() {
        let config = Config {
            limit: Some(7),
            min_frequency: Some(2),
            ..Config::default()
        };
        let mut a = args("q.json");
        a.limit = Some(1);
        a.threshold = Some(0.9);
        let options = a.options(&config);
        assert_eq!(options.threshold, 0.9);
        assert_eq!(options.selection.limit, 1);
        assert_eq!(options.selection.min_frequency, 2);
    }

    #[test]
    fn preset_flag_keeps_config_overrides() {
        let config = Config {
            limit: Some(5),
            ..Config::default()
        };
        let mut a = args("q.json");
        a.preset = Some(Preset::Detailed);
        let options = a.options(&config);
        assert_eq!(options.selection.min_frequency, 3);
        assert_eq!(options.selection.limit, 5);
    }

    #[test]
    fn invalid_threshold_fails_before_reading() {
        let mut a = args("/does/not/exist.json");
        a.threshold = Some(2.0);
        let err = cmd_analyze(a, true, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }
}
