use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Content primitives
// ---------------------------------------------------------------------------

/// One subtopic of a topic: the unit a single question is derived from.
///
/// Both fields may be missing in loaded content. Empty strings count as
/// missing; see [`SubtopicRecord::title`] and [`SubtopicRecord::content`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtopicRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SubtopicRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        SubtopicRecord {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Non-empty title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Non-empty content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Generated questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Shuffled; always contains `correct_option`.
    pub options: Vec<String>,
    pub correct_option: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }
}

// ---------------------------------------------------------------------------
// Request / outcome types
// ---------------------------------------------------------------------------

/// How to start a quiz.
///
/// With `topic: None` a topic is picked at random. With `rng_seed: Some(_)`
/// the whole session (topic pick, decoys, option order) is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Random topic, entropy-seeded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Result of submitting the selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_option: String,
}

/// Final tally shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub topic: String,
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
}

impl ResultsSummary {
    /// Share of questions answered correctly, 0.0 for an empty quiz.
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f32 * 100.0 / self.total as f32
    }
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} (correct {}, incorrect {})",
            self.topic, self.correct, self.total, self.correct, self.incorrect
        )
    }
}
