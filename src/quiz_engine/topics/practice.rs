//! Worked comprehension questions; each content carries the answer key.

use super::records;
use crate::quiz_engine::models::SubtopicRecord;

pub const NAME: &str = "Practice Questions";

const SUBTOPICS: &[(&str, &str)] = &[
    (
        "Questions 1-4 (Global Cities Text)",
        "Which city is currently driving global economic transformation in AI? a) London b) San Francisco c) Amsterdam d) Ghent. Correct answer: b) San Francisco.",
    ),
    (
        "Question 5 (Water Power Text)",
        "Which expression suggests human control over rivers? a) 'uproot trees' b) 'power is harnessed' c) 'waterfall roar' d) 'floodwaters'. Correct answer: b) 'power is harnessed'.",
    ),
    (
        "Question 6 (Climate Shadow Text)",
        "What makes a climate shadow grow? a) Individual actions b) Inspiring others c) Government policies d) Technology use. Correct answer: b) Inspiring others.",
    ),
    (
        "Question 7 (Shakespeare Text)",
        "What can we infer about Shakespeare's education? a) He attended university b) He studied Latin c) He disliked school d) He was homeschooled. Correct answer: b) He studied Latin.",
    ),
    (
        "Question 8 (Private Law Text)",
        "What complicates international private law today? a) Ancient origins b) Territorial premise challenges c) Language barriers d) Cultural differences. Correct answer: b) Territorial premise challenges.",
    ),
    (
        "Question 9 (Radio Story Text)",
        "Why was the car almost hit by a plow? a) No lights b) Speeding c) Wrong lane d) Bad weather. Correct answer: a) No lights.",
    ),
    (
        "Question 10 (Teaching Text)",
        "What does the author criticize in teacher education? a) Too much theory b) Hiding viewpoints c) Lack of technology d) Short courses. Correct answer: b) Hiding viewpoints.",
    ),
    (
        "Question 11 (Theoretical Text)",
        "What does 'theoretical red herring' mean? a) Popular theory b) Distracting theory c) Proven theory d) Simple theory. Correct answer: b) Distracting theory.",
    ),
];

pub fn subtopics() -> Vec<SubtopicRecord> {
    records(SUBTOPICS)
}
