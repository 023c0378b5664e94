//! # topic_quiz
//!
//! A small offline multiple-choice quiz engine.
//!
//! The engine picks a topic from a static content table, turns every
//! subtopic of that topic into a question, and tracks the user's progress,
//! score and completion. Rendering is left to the host: it reads a
//! [`QuizView`] snapshot and feeds user actions back as session commands.
//!
//! ## How it works
//!
//! 1. Build a [`ContentStore`]: the compiled-in [`ContentStore::builtin`]
//!    dataset, or JSON of the shape
//!    `{ "<topic>": [ { "title": "...", "content": "..." } ] }`.
//! 2. Call [`start_quiz`] with a [`QuizRequest`] (optional topic, optional
//!    RNG seed). Each subtopic yields a question whose correct option is
//!    the first sentence of its content, plus three decoy sentences drawn
//!    from the other subtopics, shuffled.
//! 3. Drive the returned [`QuizSession`] with `select_option`, `submit`,
//!    `next`, `retry` and `change_topic`.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the topic pick,
//!   decoys and option order exactly.
//! - **Injectable randomness**: sessions and the generator are generic over
//!   [`RandomSource`], implemented for every `rand::Rng`.
//! - **Explicit state**: the per-question [`Phase`] makes states such as
//!   "completed but unanswered" unrepresentable.
//!
//! ## Quick start
//!
//! ```rust
//! use topic_quiz::{start_quiz, ContentStore, QuizRequest, QuizView};
//!
//! let request = QuizRequest::new()
//!     .with_topic("Emerging Technologies Vocabulary")
//!     .with_seed(7);
//! let mut quiz = start_quiz(ContentStore::builtin(), &request).unwrap();
//!
//! while !quiz.state().unwrap().finished() {
//!     let first = quiz.state().unwrap().current_question().unwrap().options[0].clone();
//!     quiz.select_option(first).unwrap();
//!     let outcome = quiz.submit().unwrap();
//!     println!("correct: {} (answer: {})", outcome.correct, outcome.correct_option);
//!     quiz.next().unwrap();
//! }
//!
//! println!("{}", QuizView::of(&quiz).to_json());
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `topic_quiz::start_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_questions, start_quiz, AnswerOutcome, ContentStore, OptionMark, OptionView, Phase,
    Question, QuizError, QuizRequest, QuizSession, QuizView, RandomSource, ResultsSummary,
    SessionState, SubtopicRecord,
};
