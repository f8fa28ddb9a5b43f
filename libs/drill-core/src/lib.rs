//! Core library for vocabulary drills.
//!
//! Provides:
//! - Edit-distance similarity and per-character correctness masks
//! - Best-translation selection and quality tiers
//! - Parser for `phrase||translation|alternative` files
//! - Shared types (TranslationSet, Thresholds, Verdict, etc.)

pub mod alignment;
pub mod error;
pub mod matching;
pub mod parser;
pub mod types;

pub use alignment::{diff_mask, levenshtein_distance, similarity};
pub use error::{MatchError, Result};
pub use matching::{classify, judge, select_best, select_best_within};
pub use parser::{parse_phrases, ParseWarning, PhraseBook, WarningKind};
pub use types::{LengthLimit, MatchOutcome, Phrase, QualityTier, Thresholds, TranslationSet, Verdict};
