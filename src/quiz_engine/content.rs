//! The read-only topic → subtopics table a quiz draws from.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::quiz_engine::{error::QuizError, models::SubtopicRecord, topics};

/// Ordered mapping from topic name to its subtopic records.
///
/// Insertion order is kept: random topic picks index into it, so a seeded
/// session picks the same topic for the same store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    topics: Vec<(String, Vec<SubtopicRecord>)>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in dataset.
    pub fn builtin() -> Self {
        let mut store = ContentStore::new();
        for (name, subtopics) in topics::all() {
            store.insert_topic(name, subtopics);
        }
        store
    }

    /// Parse `{ "<topic>": [ { "title": ..., "content": ... }, ... ], ... }`.
    /// Topics keep document order.
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        let root: Map<String, Value> = serde_json::from_str(json)?;
        let mut store = ContentStore::new();
        for (name, records) in root {
            let subtopics: Vec<SubtopicRecord> = serde_json::from_value(records)?;
            store.insert_topic(name, subtopics);
        }
        log::debug!("loaded {} topics from JSON", store.len());
        Ok(store)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Add a topic, or replace the subtopics of an existing one in place.
    pub fn insert_topic(&mut self, name: impl Into<String>, subtopics: Vec<SubtopicRecord>) {
        let name = name.into();
        match self.topics.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = subtopics,
            None => self.topics.push((name, subtopics)),
        }
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|(n, _)| n.as_str())
    }

    /// Subtopics of `topic`; empty for an unknown topic.
    pub fn subtopics(&self, topic: &str) -> &[SubtopicRecord] {
        self.topics
            .iter()
            .find(|(n, _)| n == topic)
            .map(|(_, s)| s.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.topics.iter().any(|(n, _)| n == topic)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_topics_of_eight_subtopics() {
        let store = ContentStore::builtin();
        let names: Vec<&str> = store.topic_names().collect();
        assert_eq!(
            names,
            [
                "Reading Comprehension Strategies",
                "Grammatical Elements for Text Understanding",
                "Practice Questions",
                "Emerging Technologies Vocabulary",
            ]
        );
        for name in names {
            assert_eq!(store.subtopics(name).len(), 8, "{name}");
        }
    }

    #[test]
    fn json_keeps_document_order() {
        let store = ContentStore::from_json_str(
            r#"{
                "Zeta": [ { "title": "z", "content": "Z." } ],
                "Alpha": [ { "title": "a" }, { "content": "only content" } ]
            }"#,
        )
        .unwrap();
        assert_eq!(store.topic_names().collect::<Vec<_>>(), ["Zeta", "Alpha"]);
        assert_eq!(store.subtopics("Alpha").len(), 2);
        assert_eq!(store.subtopics("Alpha")[1].title(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ContentStore::from_json_str(r#"{ "T": "not a list" }"#).unwrap_err();
        assert!(matches!(err, QuizError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ContentStore::from_json_file("/nonexistent/quiz-data.json").unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
    }

    #[test]
    fn unknown_topic_has_no_subtopics() {
        let store = ContentStore::builtin();
        assert!(store.subtopics("Astronomy").is_empty());
        assert!(!store.contains("Astronomy"));
    }

    #[test]
    fn insert_replaces_existing_topic_in_place() {
        let mut store = ContentStore::new();
        store.insert_topic("A", vec![SubtopicRecord::new("a", "1")]);
        store.insert_topic("B", vec![]);
        store.insert_topic("A", vec![]);
        assert_eq!(store.topic_names().collect::<Vec<_>>(), ["A", "B"]);
        assert!(store.subtopics("A").is_empty());
    }
}
