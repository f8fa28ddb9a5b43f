//! Core types for vocabulary drills.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Source-language prompt. Identity is the exact text.
pub type Phrase = String;

/// Ordered, non-empty list of acceptable answers for a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TranslationSet(Vec<String>);

impl TranslationSet {
    /// Build a set from translations in file order.
    pub fn new(translations: Vec<String>) -> Result<Self> {
        if translations.is_empty() {
            return Err(MatchError::InvalidInput(
                "translation set must contain at least one translation".to_string(),
            ));
        }
        Ok(Self(translations))
    }

    /// Set with a single acceptable translation.
    pub fn single(translation: impl Into<String>) -> Self {
        Self(vec![translation.into()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for TranslationSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<String>> for TranslationSet {
    type Error = MatchError;

    fn try_from(value: Vec<String>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TranslationSet> for Vec<String> {
    fn from(value: TranslationSet) -> Self {
        value.0
    }
}

/// Discrete feedback category for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Good,
    Mediocre,
    Wrong,
}

impl QualityTier {
    /// All tiers, best first.
    pub const ALL: [QualityTier; 4] = [Self::Excellent, Self::Good, Self::Mediocre, Self::Wrong];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Mediocre => "mediocre",
            Self::Wrong => "wrong",
        }
    }
}

/// Tier cutoffs. Always satisfies `1 >= excellent > good > mediocre >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    excellent: f64,
    good: f64,
    mediocre: f64,
}

impl Thresholds {
    pub fn new(excellent: f64, good: f64, mediocre: f64) -> Result<Self> {
        for (name, value) in [("excellent", excellent), ("good", good), ("mediocre", mediocre)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidInput(format!(
                    "{name} threshold {value} is outside [0, 1]"
                )));
            }
        }
        if !(excellent > good && good > mediocre) {
            return Err(MatchError::InvalidInput(format!(
                "thresholds must satisfy excellent > good > mediocre, got {excellent} / {good} / {mediocre}"
            )));
        }
        Ok(Self {
            excellent,
            good,
            mediocre,
        })
    }

    pub fn excellent(&self) -> f64 {
        self.excellent
    }

    pub fn good(&self) -> f64 {
        self.good
    }

    pub fn mediocre(&self) -> f64 {
        self.mediocre
    }
}

/// Maximum number of characters accepted on either side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimit(pub usize);

impl LengthLimit {
    /// Fail with `LimitExceeded` when `text` is longer than the limit.
    pub fn check(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length > self.0 {
            return Err(MatchError::LimitExceeded {
                length,
                limit: self.0,
            });
        }
        Ok(())
    }
}

/// Best reference for an attempt and its similarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub score: f64,
    pub reference: String,
}

/// Everything a renderer needs to give feedback on one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub score: f64,
    pub reference: String,
    pub tier: QualityTier,
    /// One flag per reference character.
    pub mask: Vec<bool>,
}
