//! Reading strategies for EFL texts.

use super::records;
use crate::quiz_engine::models::SubtopicRecord;

pub const NAME: &str = "Reading Comprehension Strategies";

const SUBTOPICS: &[(&str, &str)] = &[
    (
        "Introduction",
        "In learning English as a foreign language, reading plays a vital role in acquiring new information, developing vocabulary, and overall language comprehension. Effective use of reading strategies can significantly improve understanding and fluency.",
    ),
    (
        "Previewing",
        "Previewing involves preliminary exploration of a text before detailed reading. This strategy helps readers get a general idea about content and structure. Benefits include activating prior knowledge, identifying main topics, and reducing anxiety about full comprehension.",
    ),
    (
        "Inference",
        "Inferring means reading between the lines to understand unstated information. This strategy requires using contextual clues and prior knowledge. It improves deep understanding, develops critical thinking, and enhances interpretation skills.",
    ),
    (
        "Predicting",
        "Predicting involves guessing what comes next based on given information. This keeps readers engaged and focused. Benefits include active reading, improved logical connections, and better information retention.",
    ),
    (
        "Rereading",
        "Rereading means reading a text multiple times for deeper understanding. It can focus on difficult sections. Benefits include enhanced comprehension, better detail retention, and easier memorization of new vocabulary.",
    ),
    (
        "Summarizing",
        "Summarizing condenses main ideas into shorter form. This helps focus on key information. Benefits include identifying main ideas, retaining essential information, and improving overall text understanding.",
    ),
    (
        "Explicit Instruction",
        "Teachers directly demonstrate reading strategies before student practice. Recommended practices include clear demonstrations, practical examples, guided exercises, and continuous feedback.",
    ),
    (
        "Collaborative Learning",
        "Students work together to practice reading strategies through group discussions and shared reading activities. Recommended practices include guided group discussions, idea exchanges, and collective feedback.",
    ),
];

pub fn subtopics() -> Vec<SubtopicRecord> {
    records(SUBTOPICS)
}
