//! Command-line and environment configuration.

use crate::error::ConfigError;
use clap::Parser;
use drill_core::{LengthLimit, Thresholds};
use std::path::PathBuf;

/// Raw command-line arguments. Every option can also come from the
/// environment (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "vocab-drill", version, about = "Drill phrase translations from the terminal")]
pub struct Args {
    /// Phrase file (`phrase||translation|alternative` per line).
    #[arg(long, env = "VOCAB_PHRASES", default_value = "phrases.txt")]
    pub phrases: PathBuf,

    /// Repetition statistics file (JSON).
    #[arg(long, env = "VOCAB_STATS", default_value = "repetitions.json")]
    pub stats: PathBuf,

    /// Directory searched for data files that are not found as given.
    #[arg(long, env = "VOCAB_SEARCH_ROOT", default_value = ".")]
    pub search_root: PathBuf,

    /// Minimum similarity for a correct answer.
    #[arg(long, env = "VOCAB_LEVEL_EXCELLENT", default_value_t = 1.0)]
    pub excellent: f64,

    /// Minimum similarity for an almost correct answer.
    #[arg(long, env = "VOCAB_LEVEL_GOOD", default_value_t = 0.8)]
    pub good: f64,

    /// Minimum similarity for a passable answer.
    #[arg(long, env = "VOCAB_LEVEL_MEDIOCRE", default_value_t = 0.5)]
    pub mediocre: f64,

    /// Longest answer accepted, in characters.
    #[arg(long, env = "VOCAB_MAX_ANSWER_LEN", default_value_t = 256)]
    pub max_answer_len: usize,

    /// Ask at most this many phrases.
    #[arg(long, env = "VOCAB_LIMIT")]
    pub limit: Option<usize>,

    /// Name of the language answers are typed in.
    #[arg(long, env = "VOCAB_LANGUAGE", default_value = "English")]
    pub language: String,

    /// Disable colored output (also disabled when NO_COLOR is set).
    #[arg(long)]
    pub no_color: bool,
}

/// Settings the quiz loop needs.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub thresholds: Thresholds,
    pub max_answer_len: LengthLimit,
    pub max_phrases: Option<usize>,
    pub language: String,
    pub color: bool,
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub phrases_file: PathBuf,
    pub stats_file: PathBuf,
    pub search_root: PathBuf,
    pub session: SessionSettings,
}

impl Config {
    /// Validate arguments. `no_color_env` reflects whether `NO_COLOR` is set.
    pub fn from_args(args: Args, no_color_env: bool) -> Result<Self, ConfigError> {
        let thresholds = Thresholds::new(args.excellent, args.good, args.mediocre)
            .map_err(ConfigError::Thresholds)?;

        if args.max_answer_len == 0 {
            return Err(ConfigError::ZeroAnswerLength);
        }

        let language = args.language.trim().to_string();
        if language.is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }

        Ok(Self {
            phrases_file: args.phrases,
            stats_file: args.stats,
            search_root: args.search_root,
            session: SessionSettings {
                thresholds,
                max_answer_len: LengthLimit(args.max_answer_len),
                max_phrases: args.limit,
                language,
                color: !args.no_color && !no_color_env,
            },
        })
    }

    /// Parse the process arguments and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::from_args(Args::parse(), no_color_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let argv = std::iter::once("vocab-drill").chain(extra.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags_are_used() {
        let args = parse(&[
            "--phrases",
            "words.txt",
            "--excellent",
            "0.95",
            "--good",
            "0.8",
            "--mediocre",
            "0.4",
            "--limit",
            "3",
            "--no-color",
        ]);
        let config = Config::from_args(args, false).unwrap();
        assert_eq!(config.phrases_file, PathBuf::from("words.txt"));
        assert_eq!(config.session.thresholds.excellent(), 0.95);
        assert_eq!(config.session.thresholds.mediocre(), 0.4);
        assert_eq!(config.session.max_phrases, Some(3));
        assert!(!config.session.color);
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let args = parse(&["--excellent", "0.7", "--good", "0.8", "--mediocre", "0.5"]);
        let result = Config::from_args(args, false);
        assert!(matches!(result, Err(ConfigError::Thresholds(_))));
    }

    #[test]
    fn rejects_zero_answer_length() {
        let args = parse(&["--max-answer-len", "0"]);
        let result = Config::from_args(args, false);
        assert!(matches!(result, Err(ConfigError::ZeroAnswerLength)));
    }

    #[test]
    fn rejects_blank_language() {
        let args = parse(&["--language", "  "]);
        let result = Config::from_args(args, false);
        assert!(matches!(result, Err(ConfigError::EmptyLanguage)));
    }

    #[test]
    fn no_color_env_disables_color() {
        let args = parse(&[]);
        assert!(Config::from_args(args.clone(), false).unwrap().session.color);
        assert!(!Config::from_args(args, true).unwrap().session.color);
    }
}
