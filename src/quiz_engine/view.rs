//! Screen snapshot for a presentation layer.
//!
//! [`QuizView::of`] reads a session and describes exactly what the widget
//! shows: the loading screen, the current question with per-option marks,
//! or the results. Hosts render it directly or ship it as JSON.

use serde::Serialize;
use serde_json::Value;

use crate::quiz_engine::{
    models::ResultsSummary,
    random::RandomSource,
    session::{QuizSession, SessionState},
};

pub const SUBMIT_LABEL: &str = "Submit";
pub const NEXT_LABEL: &str = "Next Question";
pub const RESULTS_LABEL: &str = "See Results";

/// How one option is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    Neutral,
    /// Pending choice, not submitted.
    Selected,
    /// The correct option, after submitting.
    Correct,
    /// The submitted option, when it was wrong.
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum QuizView {
    Loading,
    Question {
        topic: String,
        /// 1-based.
        number: usize,
        total: usize,
        prompt: String,
        options: Vec<OptionView>,
        score: usize,
        answered: bool,
        can_submit: bool,
        action_label: &'static str,
    },
    Results {
        #[serde(flatten)]
        summary: ResultsSummary,
        percentage: f32,
    },
}

impl QuizView {
    pub fn of<R: RandomSource>(session: &QuizSession<R>) -> Self {
        match session.state() {
            None => QuizView::Loading,
            Some(state) => Self::of_state(state),
        }
    }

    fn of_state(state: &SessionState) -> Self {
        if state.finished() {
            let summary = state.summary();
            return QuizView::Results {
                percentage: summary.percentage(),
                summary,
            };
        }
        // A topic without questions never gets past the loading screen.
        let Some(question) = state.current_question() else {
            return QuizView::Loading;
        };

        let answered = state.answered();
        let selected = state.selected_option();
        let options = question
            .options
            .iter()
            .map(|text| {
                let is_selected = selected == Some(text.as_str());
                let mark = match (answered, is_selected) {
                    (false, true) => OptionMark::Selected,
                    (false, false) => OptionMark::Neutral,
                    (true, _) if question.is_correct(text) => OptionMark::Correct,
                    (true, true) => OptionMark::Wrong,
                    (true, false) => OptionMark::Neutral,
                };
                OptionView { text: text.clone(), mark }
            })
            .collect();

        let action_label = match (answered, state.is_last_question()) {
            (false, _) => SUBMIT_LABEL,
            (true, false) => NEXT_LABEL,
            (true, true) => RESULTS_LABEL,
        };

        QuizView::Question {
            topic: state.topic().to_string(),
            number: state.current_index() + 1,
            total: state.questions().len(),
            prompt: question.prompt.clone(),
            options,
            score: state.correct_count(),
            answered,
            can_submit: !answered && selected.is_some(),
            action_label,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
