//! Verb tenses and reference words.

use super::records;
use crate::quiz_engine::models::SubtopicRecord;

pub const NAME: &str = "Grammatical Elements for Text Understanding";

const SUBTOPICS: &[(&str, &str)] = &[
    (
        "Introduction",
        "Understanding English texts requires more than word recognition. It demands comprehension of grammatical elements that influence sentence meaning and interpretation. Two key elements are verb tenses and reference words.",
    ),
    (
        "Verb Tenses",
        "Verb tenses establish action timing in texts. They indicate when actions occur and can express duration, completion, or habitual aspects. Correct use helps understand event sequences and cause-effect relationships.",
    ),
    (
        "Simple Present",
        "Used for universal facts, permanent truths, and habitual actions. Example: 'The sun rises in the east.'",
    ),
    (
        "Present Continuous",
        "Used for ongoing actions or temporary situations. Example: 'She is studying English now.'",
    ),
    (
        "Simple Past",
        "Used for completed past actions with defined time. Example: 'They visited London last year.'",
    ),
    (
        "Present Perfect",
        "Connects past actions to present. Example: 'I have finished my homework.'",
    ),
    (
        "Reference Words",
        "Pronouns and reference expressions ensure text cohesion by avoiding repetition. They help identify connections between different text parts.",
    ),
    (
        "Personal Pronouns",
        "Examples: he, she, it, they. Help track subjects through text.",
    ),
];

pub fn subtopics() -> Vec<SubtopicRecord> {
    records(SUBTOPICS)
}
