//! Emotion label definitions

use serde::{Deserialize, Serialize};

/// The emotion labels the analyzer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Angry,
    Excited,
    Calm,
    Confused,
    Confident,
    /// Fallback when no scores exist; never part of the lexicon
    Neutral,
}

impl Emotion {
    /// Lexicon labels, in iteration order (first wins on ties)
    pub const LEXICON: [Emotion; 8] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Angry,
        Emotion::Excited,
        Emotion::Calm,
        Emotion::Confused,
        Emotion::Confident,
    ];

    /// Label string as returned over the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Anxious => "Anxious",
            Emotion::Angry => "Angry",
            Emotion::Excited => "Excited",
            Emotion::Calm => "Calm",
            Emotion::Confused => "Confused",
            Emotion::Confident => "Confident",
            Emotion::Neutral => "Neutral",
        }
    }

    /// ANSI color for terminal display
    pub fn color(&self) -> colored::Color {
        use colored::Color;
        match self {
            Emotion::Happy => Color::Yellow,
            Emotion::Sad => Color::Blue,
            Emotion::Anxious => Color::Magenta,
            Emotion::Angry => Color::Red,
            Emotion::Excited => Color::BrightYellow,
            Emotion::Calm => Color::Green,
            Emotion::Confused => Color::Cyan,
            Emotion::Confident => Color::BrightGreen,
            Emotion::Neutral => Color::White,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
