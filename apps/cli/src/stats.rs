//! Per-phrase repetition statistics.

use chrono::{DateTime, Utc};
use drill_core::PhraseBook;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Statistics for one phrase. Fields this program does not know about are
/// kept as-is and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepetitionRecord {
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl RepetitionRecord {
    pub fn record_attempt(&mut self, score: f64, now: DateTime<Utc>) {
        self.attempts = self.attempts.saturating_add(1);
        self.last_score = Some(score);
        self.last_seen = Some(now);
    }
}

/// Statistics document keyed by phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepetitionStats(BTreeMap<String, RepetitionRecord>);

impl RepetitionStats {
    pub fn get(&self, phrase: &str) -> Option<&RepetitionRecord> {
        self.0.get(phrase)
    }

    /// Record for `phrase`, created empty if missing.
    pub fn entry(&mut self, phrase: &str) -> &mut RepetitionRecord {
        self.0.entry(phrase.to_string()).or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Make sure every phrase in the book has a record carrying its current
    /// translations. Records for phrases no longer in the book are left alone.
    pub fn sync_with(&mut self, book: &PhraseBook) {
        let mut added = 0;
        for (phrase, translations) in book.iter() {
            let record = self.0.entry(phrase.to_string()).or_insert_with(|| {
                added += 1;
                RepetitionRecord::default()
            });
            record.translations = translations.to_vec();
        }
        tracing::debug!(added, total = self.0.len(), "synced repetition stats");
    }
}
