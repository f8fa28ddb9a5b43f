//! Answer matching: pick the closest acceptable translation and grade it.

use crate::alignment::{diff_mask, similarity};
use crate::error::{MatchError, Result};
use crate::types::{LengthLimit, MatchOutcome, QualityTier, Thresholds, Verdict};

/// Score `attempt` against every candidate and return the best one.
///
/// The first candidate reaching the highest score wins, so results only
/// depend on candidate order.
pub fn select_best<S: AsRef<str>>(attempt: &str, candidates: &[S]) -> Result<MatchOutcome> {
    let mut best: Option<(f64, &str)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = similarity(attempt, candidate);
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, candidate)),
        }
    }

    best.map(|(score, reference)| MatchOutcome {
        score,
        reference: reference.to_string(),
    })
    .ok_or_else(|| MatchError::InvalidInput("candidate set is empty".to_string()))
}

/// Like [`select_best`], but refuses inputs longer than `limit` before doing
/// any alignment work.
pub fn select_best_within<S: AsRef<str>>(
    attempt: &str,
    candidates: &[S],
    limit: LengthLimit,
) -> Result<MatchOutcome> {
    limit.check(attempt)?;
    for candidate in candidates {
        limit.check(candidate.as_ref())?;
    }
    select_best(attempt, candidates)
}

/// Map a score onto a quality tier.
pub fn classify(score: f64, thresholds: &Thresholds) -> QualityTier {
    if score >= thresholds.excellent() {
        QualityTier::Excellent
    } else if score >= thresholds.good() {
        QualityTier::Good
    } else if score >= thresholds.mediocre() {
        QualityTier::Mediocre
    } else {
        QualityTier::Wrong
    }
}

/// Select, classify and diff in one go.
pub fn judge<S: AsRef<str>>(
    attempt: &str,
    candidates: &[S],
    thresholds: &Thresholds,
    limit: Option<LengthLimit>,
) -> Result<Verdict> {
    let outcome = match limit {
        Some(limit) => select_best_within(attempt, candidates, limit)?,
        None => select_best(attempt, candidates)?,
    };
    let mask = diff_mask(attempt, &outcome.reference);

    Ok(Verdict {
        score: outcome.score,
        tier: classify(outcome.score, thresholds),
        reference: outcome.reference,
        mask,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TranslationSet;
    use pretty_assertions::assert_eq;

    fn thresholds() -> Thresholds {
        Thresholds::new(0.95, 0.8, 0.5).unwrap()
    }

    #[test]
    fn select_best_rejects_empty_candidates() {
        let candidates: [&str; 0] = [];
        let result = select_best("cat", &candidates);
        assert!(matches!(result, Err(MatchError::InvalidInput(_))));
    }

    #[test]
    fn select_best_first_maximum_wins() {
        let outcome = select_best("cat", &["cot", "cat", "cat"]).unwrap();
        assert_eq!(outcome.score, 1.0);
        assert_eq!(outcome.reference, "cat");

        // Equal scores keep the earlier candidate.
        let outcome = select_best("bat", &["cat", "hat"]).unwrap();
        assert_eq!(outcome.reference, "cat");
    }

    #[test]
    fn select_best_picks_highest_score() {
        let outcome = select_best("morning", &["good morning", "morning"]).unwrap();
        assert_eq!(outcome.reference, "morning");
        assert_eq!(outcome.score, 1.0);
    }

    #[test]
    fn select_best_single_candidate() {
        let outcome = select_best("xyz", &["hello"]).unwrap();
        assert_eq!(outcome.reference, "hello");
        assert_eq!(outcome.score, 0.0);
    }

    #[test]
    fn select_best_accepts_translation_set() {
        let set = TranslationSet::new(vec!["hi".into(), "hello".into()]).unwrap();
        let outcome = select_best("hello", set.as_slice()).unwrap();
        assert_eq!(outcome.reference, "hello");
    }

    #[test]
    fn select_best_within_limit() {
        let limit = LengthLimit(5);
        assert!(select_best_within("hello", &["hello"], limit).is_ok());
        assert_eq!(
            select_best_within("hello!", &["hello"], limit),
            Err(MatchError::LimitExceeded { length: 6, limit: 5 })
        );
        assert_eq!(
            select_best_within("hi", &["hi", "greetings"], limit),
            Err(MatchError::LimitExceeded { length: 9, limit: 5 })
        );
    }

    #[test]
    fn select_best_within_still_rejects_empty() {
        let candidates: Vec<String> = vec![];
        let result = select_best_within("hi", &candidates, LengthLimit(10));
        assert!(matches!(result, Err(MatchError::InvalidInput(_))));
    }

    #[test]
    fn classify_boundaries() {
        let t = thresholds();
        assert_eq!(classify(1.0, &t), QualityTier::Excellent);
        assert_eq!(classify(0.95, &t), QualityTier::Excellent);
        assert_eq!(classify(0.94999, &t), QualityTier::Good);
        assert_eq!(classify(0.8, &t), QualityTier::Good);
        assert_eq!(classify(0.5, &t), QualityTier::Mediocre);
        assert_eq!(classify(0.49, &t), QualityTier::Wrong);
        assert_eq!(classify(0.0, &t), QualityTier::Wrong);
    }

    #[test]
    fn judge_missing_letter() {
        let verdict = judge("helo", &["hello"], &thresholds(), None).unwrap();
        assert_eq!(
            verdict,
            Verdict {
                score: 0.8,
                reference: "hello".to_string(),
                tier: QualityTier::Good,
                mask: vec![true, true, true, false, true],
            }
        );
    }

    #[test]
    fn judge_exact_match_first_candidate() {
        let verdict = judge("good morning", &["good morning", "morning"], &thresholds(), None).unwrap();
        assert_eq!(verdict.score, 1.0);
        assert_eq!(verdict.reference, "good morning");
        assert_eq!(verdict.tier, QualityTier::Excellent);
        assert_eq!(verdict.mask, vec![true; 12]);
    }

    #[test]
    fn judge_empty_attempt() {
        let verdict = judge("", &["yes"], &thresholds(), Some(LengthLimit(64))).unwrap();
        assert_eq!(verdict.tier, QualityTier::Wrong);
        assert_eq!(verdict.mask, vec![false, false, false]);
    }

    #[test]
    fn judge_is_case_sensitive() {
        let verdict = judge("Hello", &["hello"], &thresholds(), None).unwrap();
        assert_eq!(verdict.score, 0.8);
        assert_eq!(verdict.mask, vec![false, true, true, true, true]);
    }
}
