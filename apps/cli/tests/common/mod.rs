//! Shared fixtures for integration tests.
//!
//! Every test gets its own temporary directory so files never leak between
//! tests running in parallel.

use drill_core::{LengthLimit, Thresholds};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use vocab_drill::config::SessionSettings;

/// Phrase file used by most tests.
pub const PHRASES: &str = "\
# greetings
привет||hi|hello
доброе утро|утро доброе||good morning
# broken line below
да||yes||no
спасибо||thank you
";

/// Temporary data directory.
pub struct TestContext {
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read fixture")
    }
}

/// Plain-text session settings with the default cutoffs.
pub fn settings() -> SessionSettings {
    SessionSettings {
        thresholds: Thresholds::new(1.0, 0.8, 0.5).expect("valid thresholds"),
        max_answer_len: LengthLimit(64),
        max_phrases: None,
        language: "English".to_string(),
        color: false,
    }
}
