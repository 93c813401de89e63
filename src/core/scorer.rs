//! Scorer: text → score per emotion label
//!
//! Raw score is the count of whole-word keyword hits. Labels with hits get
//! `hits / keyword_count + U[0.1, 0.3)` capped at 1.0; labels without hits get
//! `U[0.0, 0.2)`. Every label draws its own noise, so identical input yields
//! different maps across calls.

use rand::Rng;
use crate::{MATCH_NOISE_RANGE, NO_MATCH_SCORE_RANGE};
use crate::core::lexicon::lexicon;
use crate::types::{Emotion, ScoreMap};

/// Keyword-frequency scorer with randomized smoothing
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionScorer;

impl EmotionScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score text with the thread-local generator
    pub fn score(&self, text: &str) -> ScoreMap {
        self.score_with(text, &mut rand::thread_rng())
    }

    /// Score text drawing noise from `rng`
    ///
    /// Always returns one entry per lexicon label, each in [0, 1].
    /// Empty or oversized text is the caller's concern.
    pub fn score_with<R: Rng>(&self, text: &str, rng: &mut R) -> ScoreMap {
        let lowered = text.to_lowercase();

        lexicon()
            .iter()
            .map(|entry| {
                let hits = entry.count_hits(&lowered);
                let score = if hits > 0 {
                    let base = hits as f64 / entry.keywords.len() as f64;
                    (base + rng.gen_range(MATCH_NOISE_RANGE.0..MATCH_NOISE_RANGE.1)).min(1.0)
                } else {
                    rng.gen_range(NO_MATCH_SCORE_RANGE.0..NO_MATCH_SCORE_RANGE.1)
                };
                (entry.emotion, score)
            })
            .collect()
    }

    /// Raw whole-word hit counts per label, no randomness involved
    pub fn keyword_hits(&self, text: &str) -> Vec<(Emotion, usize)> {
        let lowered = text.to_lowercase();
        lexicon()
            .iter()
            .map(|entry| (entry.emotion, entry.count_hits(&lowered)))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
