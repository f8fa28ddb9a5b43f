//! Interactive quiz loop.

use crate::config::SessionSettings;
use crate::render::Renderer;
use crate::stats::RepetitionStats;
use chrono::Utc;
use drill_core::{judge, MatchError, PhraseBook, QualityTier, TranslationSet, Verdict};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Typing this instead of an answer ends the session.
pub const QUIT_COMMAND: &str = ":q";

/// What happened during one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub answered: usize,
    pub tiers: HashMap<QualityTier, usize>,
    /// Input ended or the learner quit before all phrases were asked.
    pub stopped_early: bool,
}

impl SessionSummary {
    pub fn count(&self, tier: QualityTier) -> usize {
        self.tiers.get(&tier).copied().unwrap_or(0)
    }

    fn record(&mut self, tier: QualityTier) {
        self.answered += 1;
        *self.tiers.entry(tier).or_default() += 1;
    }
}

enum Answer {
    Judged(Verdict),
    Stop,
}

/// Quiz the learner on every phrase of `book` in order, updating `stats`
/// after each judged answer.
pub fn run<R: BufRead, W: Write>(
    book: &PhraseBook,
    stats: &mut RepetitionStats,
    settings: &SessionSettings,
    mut input: R,
    mut output: W,
) -> io::Result<SessionSummary> {
    let renderer = Renderer::new(settings.color);
    let mut summary = SessionSummary::default();
    let total = settings.max_phrases.unwrap_or(usize::MAX);

    for (phrase, translations) in book.iter().take(total) {
        if let Err(e) = check_references(translations, settings) {
            tracing::warn!(phrase, error = %e, "translation exceeds the answer length limit, skipping phrase");
            continue;
        }

        match ask(phrase, translations, settings, &mut input, &mut output)? {
            Answer::Judged(verdict) => {
                renderer.feedback(&mut output, &verdict)?;
                stats.entry(phrase).record_attempt(verdict.score, Utc::now());
                summary.record(verdict.tier);
                tracing::debug!(phrase, score = verdict.score, tier = verdict.tier.as_str(), "judged answer");
            }
            Answer::Stop => {
                summary.stopped_early = true;
                break;
            }
        }
    }

    print_summary(&mut output, &summary)?;
    output.flush()?;
    Ok(summary)
}

fn check_references(translations: &TranslationSet, settings: &SessionSettings) -> Result<(), MatchError> {
    translations
        .iter()
        .try_for_each(|translation| settings.max_answer_len.check(translation))
}

fn ask<R: BufRead, W: Write>(
    phrase: &str,
    translations: &TranslationSet,
    settings: &SessionSettings,
    input: &mut R,
    output: &mut W,
) -> io::Result<Answer> {
    loop {
        writeln!(output, "Enter phrase \"{phrase}\" in {}: ", settings.language)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Answer::Stop);
        }
        let attempt = line.strip_suffix('\n').unwrap_or(&line);
        let attempt = attempt.strip_suffix('\r').unwrap_or(attempt);

        if attempt == QUIT_COMMAND {
            return Ok(Answer::Stop);
        }

        if let Err(MatchError::LimitExceeded { length, limit }) = settings.max_answer_len.check(attempt) {
            writeln!(
                output,
                "Answer is too long ({length} characters, at most {limit}). Try again."
            )?;
            continue;
        }

        // References were checked against the limit before prompting.
        let verdict = judge(
            attempt,
            translations.as_slice(),
            &settings.thresholds,
            Some(settings.max_answer_len),
        )
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        return Ok(Answer::Judged(verdict));
    }
}

fn print_summary<W: Write>(output: &mut W, summary: &SessionSummary) -> io::Result<()> {
    write!(output, "Answered {}", summary.answered)?;
    if summary.answered > 0 {
        let parts: Vec<String> = QualityTier::ALL
            .iter()
            .map(|tier| format!("{} {}", summary.count(*tier), tier.as_str()))
            .collect();
        write!(output, ": {}", parts.join(", "))?;
    }
    writeln!(output)
}
