//! Core modules for Emotion Reflection

pub mod lexicon;
pub mod scorer;
pub mod selector;
pub mod analyzer;
pub mod api;

pub use scorer::EmotionScorer;
pub use selector::EmotionSelector;
pub use analyzer::{EmotionAnalyzer, validate_text};
pub use api::{create_router, run_server, ServerConfig};
