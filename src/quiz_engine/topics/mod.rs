//! Built-in quiz content, one module per topic.
//!
//! Each module exposes `NAME` and `subtopics()`. [`all`] lists them in the
//! canonical order the default [`ContentStore`](super::content::ContentStore)
//! uses for random topic picks.

pub mod grammar;
pub mod practice;
pub mod reading;
pub mod tech_vocabulary;

use crate::quiz_engine::models::SubtopicRecord;

fn records(pairs: &[(&str, &str)]) -> Vec<SubtopicRecord> {
    pairs.iter().map(|&(title, content)| SubtopicRecord::new(title, content)).collect()
}

/// Every built-in topic as `(name, subtopics)`, in canonical order.
pub fn all() -> Vec<(&'static str, Vec<SubtopicRecord>)> {
    vec![
        (reading::NAME, reading::subtopics()),
        (grammar::NAME, grammar::subtopics()),
        (practice::NAME, practice::subtopics()),
        (tech_vocabulary::NAME, tech_vocabulary::subtopics()),
    ]
}
