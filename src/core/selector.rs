//! Selector: ScoreMap → dominant emotion + confidence

use rand::Rng;
use crate::{CONFIDENCE_FALLBACK_RANGE, CONFIDENCE_FLOOR, NEUTRAL_CONFIDENCE};
use crate::types::{Emotion, EmotionReading, ScoreMap};

/// Picks the highest-scoring label and floors its confidence
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionSelector;

impl EmotionSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select with the thread-local generator
    pub fn select(&self, scores: &ScoreMap) -> EmotionReading {
        self.select_with(scores, &mut rand::thread_rng())
    }

    /// Select the dominant emotion, drawing any confidence fallback from `rng`
    ///
    /// Ties go to the label seen first. Confidence under 0.3 is replaced by a
    /// fresh draw from [0.3, 0.7). Result is rounded half away from zero to
    /// 2 decimals.
    pub fn select_with<R: Rng>(&self, scores: &ScoreMap, rng: &mut R) -> EmotionReading {
        let Some((emotion, mut confidence)) = dominant(scores) else {
            return EmotionReading::new(Emotion::Neutral, NEUTRAL_CONFIDENCE);
        };

        if confidence < CONFIDENCE_FLOOR {
            confidence = rng.gen_range(CONFIDENCE_FALLBACK_RANGE.0..CONFIDENCE_FALLBACK_RANGE.1);
        }

        EmotionReading::new(emotion, round2(confidence))
    }
}

/// First entry holding the maximum score
fn dominant(scores: &ScoreMap) -> Option<(Emotion, f64)> {
    let mut best: Option<(Emotion, f64)> = None;
    for (emotion, score) in scores.iter() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((emotion, score)),
        }
    }
    best
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// TESTS
// =============================================================================
