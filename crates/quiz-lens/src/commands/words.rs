//! Words command: top words of a plain text document.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use quiz_lens_core::config::Config;
use quiz_lens_core::frequency::count_words;
use quiz_lens_core::ranking::{TopWordsOptions, WordCount, top_words};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Text file to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Minimum occurrences for a word to be listed.
    #[arg(long)]
    pub min_frequency: Option<usize>,

    /// Maximum words listed.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the filtered token stream instead of counts.
    #[arg(long)]
    pub tokens: bool,
}

/// Word ranking for a single document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsReport {
    /// Ranked words.
    pub top_words: Vec<WordCount>,
    /// Distinct words after filtering.
    pub distinct_words: usize,
    /// Words after filtering, duplicates included.
    pub total_words: usize,
}

/// Build the ranking for `text`.
pub fn words_report(text: &str, config: &Config, selection: TopWordsOptions) -> WordsReport {
    let words = config.tokenizer().tokenize(text);
    let freq = count_words(&words);
    WordsReport {
        top_words: top_words(&freq, selection),
        distinct_words: freq.len(),
        total_words: freq.total(),
    }
}

/// Rank the words of a text file.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.file))]
pub fn cmd_words(
    args: WordsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, tokens = args.tokens, "executing words command");

    let content = super::read_input_file(&args.file, max_input)?;

    if args.tokens {
        let words = config.tokenizer().tokenize(&content);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&words)?);
        } else {
            for word in &words {
                println!("{word}");
            }
        }
        return Ok(());
    }

    let selection = config
        .analysis_options()
        .selection
        .overridden(args.min_frequency, args.limit);
    let report = words_report(&content, config, selection);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} words, {} distinct",
        args.file.bold(),
        report.total_words,
        report.distinct_words
    );
    if report.top_words.is_empty() {
        println!("  {}", "(no words met the frequency floor)".dimmed());
    }
    for (rank, entry) in report.top_words.iter().enumerate() {
        println!("  {}. {} : {}", rank + 1, entry.word, entry.count);
    }

    Ok(())
}
