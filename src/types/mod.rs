//! Core types for Emotion Reflection

mod emotion;
mod scores;
mod reading;

pub use emotion::Emotion;
pub use scores::ScoreMap;
pub use reading::EmotionReading;
