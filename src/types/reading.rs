//! Analysis result

use serde::{Deserialize, Serialize};
use crate::types::Emotion;

/// Dominant emotion with its user-facing confidence (2 decimals)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub emotion: Emotion,
    pub confidence: f64,
}

impl EmotionReading {
    pub fn new(emotion: Emotion, confidence: f64) -> Self {
        Self { emotion, confidence }
    }

    /// Format for terminal display
    pub fn to_terminal_string(&self) -> String {
        use colored::Colorize;
        format!(
            "{} emotion={} | confidence={:.2}",
            "●".color(self.emotion.color()),
            self.emotion.as_str().color(self.emotion.color()).bold(),
            self.confidence
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!("emotion={} | confidence={:.2}", self.emotion, self.confidence)
    }
}
