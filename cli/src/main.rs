//! Command-line front end: suggest corrections for one or more words.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use env_logger::Builder;
use log::{info, LevelFilter};

use spell_corrector::{
    load_frequency_file, load_word_counts, Alphabet, CorrectorConfig, CountFilter, SpellModel,
    PULAAR_LETTERS,
};

mod report;

use report::format_report;

/// Suggest spelling corrections ranked by corpus frequency
#[derive(Parser, Debug)]
#[command(name = "spell-corrector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(group(ArgGroup::new("source").required(true).args(["corpus", "frequencies"])))]
struct Args {
    /// Plain-text corpus to build word counts from
    #[arg(short, long, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// Tab-separated `word<TAB>count` frequency list
    #[arg(short, long, value_name = "PATH")]
    frequencies: Option<PathBuf>,

    /// Letters that substitution and insertion may introduce
    #[arg(short, long, default_value = PULAAR_LETTERS)]
    alphabet: String,

    /// Skip the distance-2 search for words longer than this
    #[arg(long, value_name = "N")]
    max_expansion_len: Option<usize>,

    /// Drop dictionary words containing letters outside the alphabet
    #[arg(long)]
    alphabet_only: bool,

    /// Ignore words seen fewer times than this
    #[arg(long, default_value = "1")]
    min_freq: usize,

    /// Maximum number of suggestions printed per word
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,

    /// Words to check
    #[arg(required = true)]
    words: Vec<String>,
}

/// Where the word counts come from.
enum Source {
    Corpus(PathBuf),
    Frequencies(PathBuf),
}

impl Source {
    fn from_args(args: &Args) -> Option<Source> {
        match (&args.corpus, &args.frequencies) {
            (Some(path), _) => Some(Source::Corpus(path.clone())),
            (None, Some(path)) => Some(Source::Frequencies(path.clone())),
            (None, None) => None,
        }
    }

    fn load(&self) -> spell_corrector::Result<spell_corrector::WordCounts> {
        match self {
            Source::Corpus(path) => load_word_counts(path),
            Source::Frequencies(path) => load_frequency_file(path),
        }
    }
}

fn run(args: Args, source: Source) -> spell_corrector::Result<()> {
    let word_counts = source.load()?;

    let alphabet = Alphabet::new(&args.alphabet);
    let filter = CountFilter {
        min_freq: args.min_freq,
        alphabet: args.alphabet_only.then(|| alphabet.clone()),
        ..Default::default()
    };
    let config = CorrectorConfig {
        alphabet,
        max_expansion_len: args.max_expansion_len,
    };
    let model = SpellModel::with_config(word_counts, filter, config)?;
    info!("vocabulary has {} words", model.vocabulary().len());

    let words: Vec<String> = args.words.iter().map(|w| w.to_lowercase()).collect();
    let results = model.correct_batch(&words)?;

    for (word, candidates) in words.iter().zip(results) {
        print!(
            "{}",
            format_report(word, model.is_correct(word), &candidates, args.limit)
        );
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let Some(source) = Source::from_args(&args) else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "one of --corpus or --frequencies is required",
            )
            .exit();
    };

    if let Err(e) = run(args, source) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_args() {
        let args = Args::try_parse_from(["spell-corrector", "-f", "freq.tsv", "ŋari"]).unwrap();
        assert!(matches!(Source::from_args(&args), Some(Source::Frequencies(_))));

        let args = Args::try_parse_from(["spell-corrector", "--corpus", "big.txt", "cet"]).unwrap();
        assert!(matches!(Source::from_args(&args), Some(Source::Corpus(_))));
        assert!(!args.alphabet_only);
        assert_eq!(args.alphabet, PULAAR_LETTERS);
    }

    #[test]
    fn test_missing_source_is_usage_error() {
        let err = Args::try_parse_from(["spell-corrector", "cet"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Args::try_parse_from(["spell-corrector", "-c", "a.txt", "-f", "b.tsv", "cet"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
