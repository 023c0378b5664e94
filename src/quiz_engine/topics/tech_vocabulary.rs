//! Short vocabulary definitions. Most contents are a single sentence.

use super::records;
use crate::quiz_engine::models::SubtopicRecord;

pub const NAME: &str = "Emerging Technologies Vocabulary";

const SUBTOPICS: &[(&str, &str)] = &[
    (
        "Artificial Intelligence",
        "AI systems simulate learning and decision-making. Includes machine learning and neural networks.",
    ),
    (
        "Blockchain",
        "Distributed ledger technology ensuring secure, immutable records. Used in cryptocurrencies.",
    ),
    (
        "Quantum Computing",
        "Uses qubits for exponentially faster calculations than classical computers.",
    ),
    (
        "IoT",
        "Internet of Things connects physical devices for data exchange.",
    ),
    (
        "5G",
        "Fifth-generation wireless enables high-speed, low-latency connections.",
    ),
    (
        "AR/VR",
        "Augmented Reality overlays digital content, Virtual Reality creates immersive environments.",
    ),
    (
        "Generative AI",
        "Creates new content like text, images, or code based on training data.",
    ),
    (
        "Edge Computing",
        "Processes data closer to its source rather than in centralized cloud servers.",
    ),
];

pub fn subtopics() -> Vec<SubtopicRecord> {
    records(SUBTOPICS)
}
