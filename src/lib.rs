//! Emotion Reflection: mock emotion analysis over HTTP
//!
//! text → EmotionScorer → ScoreMap → EmotionSelector → EmotionReading

pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum accepted input length, in characters (untrimmed)
pub const MAX_TEXT_CHARS: usize = 1000;

// =============================================================================
// SCORING NOISE
// =============================================================================

/// Noise added to a label that matched at least one keyword: [low, high)
pub const MATCH_NOISE_RANGE: (f64, f64) = (0.1, 0.3);

/// Score drawn for a label that matched nothing: [low, high)
pub const NO_MATCH_SCORE_RANGE: (f64, f64) = (0.0, 0.2);

// =============================================================================
// CONFIDENCE FLOOR
// =============================================================================

/// Confidence below this is replaced with a fresh draw
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Replacement confidence range: [low, high)
pub const CONFIDENCE_FALLBACK_RANGE: (f64, f64) = (0.3, 0.7);

/// Confidence reported when there is nothing to select from
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
