//! Core quiz engine: content, question generation, and session state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: subtopic records, questions, request/outcome structs |
//! | `random`    | `RandomSource`, the injectable randomness every draw goes through |
//! | `content`   | `ContentStore`: ordered topic table, built-in data, JSON loading |
//! | `topics`    | The built-in dataset, one module per topic |
//! | `generator` | Questions, correct answers, decoys, and the Fisher-Yates shuffle |
//! | `session`   | `QuizSession` state machine and the `start_quiz()` entry point |
//! | `view`      | Serialisable snapshot of the current screen |
//! | `error`     | `QuizError` |

pub mod content;
pub mod error;
pub mod generator;
pub mod models;
pub mod random;
pub mod session;
pub mod topics;
pub mod view;

// Re-export the public API surface so callers can use
// `quiz_engine::start_quiz` without reaching into sub-modules.
pub use content::ContentStore;
pub use error::QuizError;
pub use generator::generate_questions;
pub use models::{AnswerOutcome, Question, QuizRequest, ResultsSummary, SubtopicRecord};
pub use random::RandomSource;
pub use session::{start_quiz, Phase, QuizSession, SessionState};
pub use view::{OptionMark, OptionView, QuizView};
