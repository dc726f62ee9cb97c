//! Percent-to-severity classification.
//!
//! Callers always pass a "badness" percent: usage for memory, disk and load,
//! `100 - quality` for link quality and `100 - delivered` for ping.

use crate::theme::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// `> 75` is high, `(50, 75]` is medium, everything else is low.
    pub fn classify(percent: f64) -> Self {
        if percent > 75.0 {
            Severity::High
        } else if percent > 50.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn token(self) -> Token {
        match self {
            Severity::High => Token::Red,
            Severity::Medium => Token::Yellow,
            Severity::Low => Token::Green,
        }
    }
}

/// Colour token for a badness percent.
pub fn percent_token(percent: f64) -> Token {
    Severity::classify(percent).token()
}
