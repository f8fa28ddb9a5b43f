//! Parser for phrase files.
//!
//! # Format
//! ```text
//! # Lines with '#' in the first column are comments
//! привет||hi|hello
//! доброе утро|утро доброе||good morning
//! ```
//!
//! The source side and the translation side are separated by `||`. Either
//! side may list alternatives separated by `|`. Every source alternative maps
//! to the whole list of translations. Lines without `||` are ignored.

use crate::types::{Phrase, TranslationSet};
use std::collections::HashMap;

const SIDE_SEPARATOR: &str = "||";
const ALTERNATIVE_SEPARATOR: char = '|';

/// Why a line was skipped or needs attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// More than one `||` on the line; the line is skipped.
    TooManySeparators { count: usize },
    /// Nothing left of the source side after trimming; the line is skipped.
    MissingPhrase,
    /// Nothing left of the translation side after trimming; the line is skipped.
    MissingTranslation,
    /// Phrase already defined earlier; its translations were replaced.
    DuplicatePhrase { phrase: Phrase, first_line: usize },
}

/// Diagnostic attached to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub line: usize,
    pub text: String,
    pub kind: WarningKind,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            WarningKind::TooManySeparators { count } => write!(
                f,
                "line {}: found {count} \"||\" separators, expected exactly one: {}",
                self.line, self.text
            ),
            WarningKind::MissingPhrase => write!(f, "line {}: no phrase before \"||\": {}", self.line, self.text),
            WarningKind::MissingTranslation => {
                write!(f, "line {}: no translation after \"||\": {}", self.line, self.text)
            }
            WarningKind::DuplicatePhrase { phrase, first_line } => write!(
                f,
                "line {}: phrase {phrase:?} already defined on line {first_line}, translations replaced",
                self.line
            ),
        }
    }
}

/// Phrases in file order with their translations.
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    entries: Vec<(Phrase, TranslationSet)>,
    index: HashMap<Phrase, (usize, usize)>,
    warnings: Vec<ParseWarning>,
}

impl PhraseBook {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translations for a phrase, matched exactly.
    pub fn get(&self, phrase: &str) -> Option<&TranslationSet> {
        self.index
            .get(phrase)
            .map(|&(position, _)| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationSet)> {
        self.entries
            .iter()
            .map(|(phrase, translations)| (phrase.as_str(), translations))
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    fn insert(&mut self, phrase: Phrase, translations: TranslationSet, line: usize, text: &str) {
        match self.index.get(&phrase) {
            Some(&(position, first_line)) => {
                self.warnings.push(ParseWarning {
                    line,
                    text: text.to_string(),
                    kind: WarningKind::DuplicatePhrase {
                        phrase,
                        first_line,
                    },
                });
                self.entries[position].1 = translations;
            }
            None => {
                self.index.insert(phrase.clone(), (self.entries.len(), line));
                self.entries.push((phrase, translations));
            }
        }
    }

    fn warn(&mut self, line: usize, text: &str, kind: WarningKind) {
        self.warnings.push(ParseWarning {
            line,
            text: text.to_string(),
            kind,
        });
    }
}

/// Parse phrase file content. Malformed lines are skipped and reported in
/// [`PhraseBook::warnings`].
pub fn parse_phrases(content: &str) -> PhraseBook {
    let mut book = PhraseBook::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        if raw.starts_with('#') {
            continue;
        }

        let line = raw.trim();
        if !line.contains(SIDE_SEPARATOR) {
            continue;
        }

        let sides: Vec<&str> = line.split(SIDE_SEPARATOR).collect();
        if sides.len() > 2 {
            book.warn(
                line_num,
                line,
                WarningKind::TooManySeparators {
                    count: sides.len() - 1,
                },
            );
            continue;
        }

        let phrases = split_alternatives(sides[0]);
        if phrases.is_empty() {
            book.warn(line_num, line, WarningKind::MissingPhrase);
            continue;
        }

        let translations = match TranslationSet::new(split_alternatives(sides[1])) {
            Ok(translations) => translations,
            Err(_) => {
                book.warn(line_num, line, WarningKind::MissingTranslation);
                continue;
            }
        };

        for phrase in phrases {
            book.insert(phrase, translations.clone(), line_num, line);
        }
    }

    book
}

fn split_alternatives(side: &str) -> Vec<String> {
    side.split(ALTERNATIVE_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
