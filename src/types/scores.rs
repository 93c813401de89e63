//! Per-request score map

use serde::{Serialize, Serializer, ser::SerializeMap};
use crate::types::Emotion;

/// Score per emotion label, kept in insertion (lexicon) order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    entries: Vec<(Emotion, f64)>,
}

impl ScoreMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self { entries: Vec::with_capacity(Emotion::LEXICON.len()) }
    }

    /// Set the score for a label, replacing any previous value in place
    pub fn insert(&mut self, emotion: Emotion, score: f64) {
        match self.entries.iter_mut().find(|(e, _)| *e == emotion) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((emotion, score)),
        }
    }

    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        self.entries
            .iter()
            .find(|(e, _)| *e == emotion)
            .map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(Emotion, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (Emotion, f64)>>(iter: I) -> Self {
        let mut map = ScoreMap::new();
        for (emotion, score) in iter {
            map.insert(emotion, score);
        }
        map
    }
}

impl Serialize for ScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (emotion, score) in &self.entries {
            map.serialize_entry(emotion.as_str(), score)?;
        }
        map.end()
    }
}
