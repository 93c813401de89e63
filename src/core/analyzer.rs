//! Analyzer: validate → score → select

use std::panic::{self, AssertUnwindSafe};

use rand::Rng;
use tracing::debug;

use crate::MAX_TEXT_CHARS;
use crate::core::{EmotionScorer, EmotionSelector};
use crate::error::{AnalysisError, Result};
use crate::types::EmotionReading;

/// Reject empty (after trim) or oversized (before trim) input
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AnalysisError::InputTooLong { max: MAX_TEXT_CHARS });
    }
    Ok(())
}

/// Full pipeline from raw text to reading
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionAnalyzer {
    scorer: EmotionScorer,
    selector: EmotionSelector,
}

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(&self, text: &str) -> Result<EmotionReading> {
        self.analyze_with(text, &mut rand::thread_rng())
    }

    /// Validate, score and select; a panic while scoring becomes `AnalysisFailed`
    pub fn analyze_with<R: Rng>(&self, text: &str, rng: &mut R) -> Result<EmotionReading> {
        validate_text(text)?;

        panic::catch_unwind(AssertUnwindSafe(|| {
            let scores = self.scorer.score_with(text, rng);
            debug!(?scores, "scored text");
            self.selector.select_with(&scores, rng)
        }))
        .map_err(|payload| AnalysisError::AnalysisFailed(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use crate::types::Emotion;

    /// Generator that blows up on first use
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            panic!("entropy source unavailable")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("entropy source unavailable")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("entropy source unavailable")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            panic!("entropy source unavailable")
        }
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        let analyzer = EmotionAnalyzer::new();
        assert_eq!(analyzer.analyze(""), Err(AnalysisError::EmptyInput));
        assert_eq!(analyzer.analyze(" \n\t "), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        assert!(validate_text(&"a".repeat(1000)).is_ok());
        assert_eq!(
            validate_text(&"a".repeat(1001)),
            Err(AnalysisError::InputTooLong { max: 1000 })
        );
        // multi-byte characters count once each
        assert!(validate_text(&"é".repeat(1000)).is_ok());
    }

    #[test]
    fn test_padding_counts_toward_limit() {
        let text = format!("{}happy", " ".repeat(996));
        assert!(validate_text(&text).is_err());
    }

    #[test]
    fn test_analysis_reading_in_range() {
        let analyzer = EmotionAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(21);
        let reading = analyzer.analyze_with("I am furious and livid", &mut rng).unwrap();
        assert_eq!(reading.emotion, Emotion::Angry);
        assert!((0.0..=1.0).contains(&reading.confidence));
    }

    #[test]
    fn test_panic_becomes_analysis_failed() {
        let analyzer = EmotionAnalyzer::new();
        let result = analyzer.analyze_with("hello", &mut BrokenRng);
        assert_eq!(
            result,
            Err(AnalysisError::AnalysisFailed("entropy source unavailable".into()))
        );
    }
}
