//! Keyword lexicon: emotion label → trigger words
//!
//! Compiled once into whole-word regexes and shared read-only by every request.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::Emotion;

/// Raw keyword table, in lexicon order
pub const KEYWORDS: [(Emotion, &[&str]); 8] = [
    (Emotion::Happy, &[
        "happy", "joy", "excited", "great", "wonderful", "amazing",
        "fantastic", "delighted", "cheerful", "elated",
    ]),
    (Emotion::Sad, &[
        "sad", "depressed", "down", "upset", "disappointed", "heartbroken",
        "melancholy", "gloomy", "sorrowful",
    ]),
    (Emotion::Anxious, &[
        "nervous", "worried", "anxious", "stressed", "afraid", "scared",
        "panic", "overwhelmed", "tense", "uneasy",
    ]),
    (Emotion::Angry, &[
        "angry", "mad", "furious", "irritated", "annoyed", "frustrated",
        "rage", "outraged", "livid",
    ]),
    (Emotion::Excited, &[
        "excited", "thrilled", "enthusiastic", "eager", "pumped", "energized",
        "motivated", "inspired",
    ]),
    (Emotion::Calm, &[
        "calm", "peaceful", "relaxed", "serene", "tranquil", "content",
        "composed", "zen", "balanced",
    ]),
    (Emotion::Confused, &[
        "confused", "puzzled", "uncertain", "lost", "bewildered", "perplexed",
        "unclear", "mixed",
    ]),
    (Emotion::Confident, &[
        "confident", "sure", "determined", "strong", "capable", "ready",
        "prepared", "positive", "optimistic",
    ]),
];

/// One lexicon entry with its keywords compiled to `\bkeyword\b`
#[derive(Debug)]
pub struct CompiledEntry {
    pub emotion: Emotion,
    pub keywords: Vec<Regex>,
}

impl CompiledEntry {
    /// Total whole-word hits across all keywords (text must already be lower-cased)
    pub fn count_hits(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .map(|re| re.find_iter(lowered).count())
            .sum()
    }
}

lazy_static! {
    static ref COMPILED: Vec<CompiledEntry> = KEYWORDS
        .iter()
        .map(|(emotion, words)| CompiledEntry {
            emotion: *emotion,
            keywords: words
                .iter()
                .map(|w| Regex::new(&format!(r"\b{}\b", regex::escape(w))).unwrap())
                .collect(),
        })
        .collect();
}

/// Compiled lexicon, in lexicon order
pub fn lexicon() -> &'static [CompiledEntry] {
    &COMPILED
}

/// Supported labels, in lexicon order
pub fn labels() -> Vec<Emotion> {
    KEYWORDS.iter().map(|(e, _)| *e).collect()
}
