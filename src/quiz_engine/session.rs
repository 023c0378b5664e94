//! Quiz session state machine.
//!
//! A [`QuizSession`] starts out loading (no topic). Choosing a topic
//! generates its questions and puts the session on question 0. From there
//! the only mutations are the commands below:
//!
//! | Command         | Allowed when                         |
//! |-----------------|--------------------------------------|
//! | `initialize`    | no topic yet                         |
//! | `select_option` | current question not yet submitted   |
//! | `submit`        | an option is selected, not submitted |
//! | `next`          | current question submitted           |
//! | `retry`         | a topic is active                    |
//! | `change_topic`  | any time                             |
//! | `select_topic`  | any time                             |
//!
//! A command whose precondition fails returns [`QuizError::Precondition`]
//! (or [`QuizError::NotStarted`] before a topic exists) and leaves the
//! state untouched.

use rand::{rngs::StdRng, SeedableRng};

use crate::quiz_engine::{
    content::ContentStore,
    error::QuizError,
    generator,
    models::{AnswerOutcome, Question, QuizRequest, ResultsSummary},
    random::RandomSource,
};

/// Where the user is on the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Not submitted yet; may hold a pending selection.
    Choosing { selected: Option<String> },
    /// Submitted.
    Answered { selected: String, correct: bool },
    /// Advanced past the last question; the results screen.
    Completed,
}

/// Progress through one generated question set for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    topic: String,
    questions: Vec<Question>,
    current_index: usize,
    phase: Phase,
    correct_count: usize,
    incorrect_count: usize,
}

impl SessionState {
    fn new(topic: String, questions: Vec<Question>) -> Self {
        SessionState {
            topic,
            questions,
            current_index: 0,
            phase: Phase::Choosing { selected: None },
            correct_count: 0,
            incorrect_count: 0,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// `None` only for a topic without subtopics.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected_option(&self) -> Option<&str> {
        match &self.phase {
            Phase::Choosing { selected } => selected.as_deref(),
            Phase::Answered { selected, .. } => Some(selected),
            Phase::Completed => None,
        }
    }

    pub fn answered(&self) -> bool {
        !matches!(self.phase, Phase::Choosing { .. })
    }

    pub fn finished(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            topic: self.topic.clone(),
            correct: self.correct_count,
            incorrect: self.incorrect_count,
            total: self.questions.len(),
        }
    }
}

/// A quiz over a [`ContentStore`], driven by user commands.
///
/// Generic over the random source so tests can script every draw.
pub struct QuizSession<R: RandomSource = StdRng> {
    store: ContentStore,
    rng: R,
    state: Option<SessionState>,
}

/// Build a session from `request` and start it on the requested topic, or
/// on a random one.
pub fn start_quiz(store: ContentStore, request: &QuizRequest) -> Result<QuizSession, QuizError> {
    let rng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = QuizSession::new(store, rng);
    match &request.topic {
        Some(topic) => session.select_topic(topic)?,
        None => session.initialize()?,
    }
    Ok(session)
}

impl<R: RandomSource> QuizSession<R> {
    /// A loading session: no topic chosen yet.
    pub fn new(store: ContentStore, rng: R) -> Self {
        QuizSession { store, rng, state: None }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// `None` while loading.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_none()
    }

    pub fn topic(&self) -> Option<&str> {
        self.state.as_ref().map(SessionState::topic)
    }

    /// Pick a random topic and generate its questions.
    pub fn initialize(&mut self) -> Result<(), QuizError> {
        if self.state.is_some() {
            return Err(QuizError::precondition("initialize", "a topic is already active"));
        }
        let topic = self.pick_topic(None)?;
        self.start_topic(topic);
        Ok(())
    }

    /// Start over on `topic` with a freshly generated question set.
    pub fn select_topic(&mut self, topic: &str) -> Result<(), QuizError> {
        if !self.store.contains(topic) {
            return Err(QuizError::UnknownTopic(topic.to_string()));
        }
        self.start_topic(topic.to_string());
        Ok(())
    }

    /// Switch to a random topic other than the current one. Only the current
    /// topic is excluded, so A → B → A is possible.
    pub fn change_topic(&mut self) -> Result<(), QuizError> {
        let current = self.topic().map(str::to_string);
        let topic = self.pick_topic(current.as_deref())?;
        self.start_topic(topic);
        Ok(())
    }

    /// Select (or re-select) an option on the current, unsubmitted question.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<(), QuizError> {
        let state = self.state_mut()?;
        if state.current_question().is_none() {
            return Err(QuizError::precondition("select an option", "topic has no questions"));
        }
        match &mut state.phase {
            Phase::Choosing { selected } => {
                *selected = Some(option.into());
                Ok(())
            }
            _ => Err(QuizError::precondition("select an option", "question already answered")),
        }
    }

    /// Select the option displayed at `index`.
    pub fn select_option_at(&mut self, index: usize) -> Result<(), QuizError> {
        let option = self
            .state_mut()?
            .current_question()
            .and_then(|q| q.options.get(index))
            .cloned()
            .ok_or_else(|| QuizError::precondition("select an option", "option index out of range"))?;
        self.select_option(option)
    }

    /// Score the selected option by exact string match.
    pub fn submit(&mut self) -> Result<AnswerOutcome, QuizError> {
        let state = self.state_mut()?;
        let selected = match &state.phase {
            Phase::Choosing { selected: Some(s) } => s.clone(),
            Phase::Choosing { selected: None } => {
                return Err(QuizError::precondition("submit", "no option selected"))
            }
            _ => return Err(QuizError::precondition("submit", "question already answered")),
        };
        let question = state
            .current_question()
            .ok_or_else(|| QuizError::precondition("submit", "topic has no questions"))?;

        let correct = question.is_correct(&selected);
        let correct_option = question.correct_option.clone();
        if correct {
            state.correct_count += 1;
        } else {
            state.incorrect_count += 1;
        }
        log::debug!(
            "question {} of {:?}: {} (selected {:?})",
            state.current_index + 1,
            state.topic,
            if correct { "correct" } else { "incorrect" },
            selected
        );
        state.phase = Phase::Answered { selected, correct };

        Ok(AnswerOutcome { correct, correct_option })
    }

    /// Move past an answered question; past the last one the quiz completes
    /// and the index stays on the last question.
    pub fn next(&mut self) -> Result<(), QuizError> {
        let state = self.state_mut()?;
        if !matches!(state.phase, Phase::Answered { .. }) {
            let reason = if state.finished() { "quiz already completed" } else { "question not answered" };
            return Err(QuizError::precondition("advance", reason));
        }
        if state.is_last_question() {
            state.phase = Phase::Completed;
            log::info!("quiz complete: {}", state.summary());
        } else {
            state.current_index += 1;
            state.phase = Phase::Choosing { selected: None };
        }
        Ok(())
    }

    /// Restart the same question set from the first question.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        let state = self.state_mut()?;
        state.current_index = 0;
        state.correct_count = 0;
        state.incorrect_count = 0;
        state.phase = Phase::Choosing { selected: None };
        log::debug!("retrying {:?}", state.topic);
        Ok(())
    }

    fn state_mut(&mut self) -> Result<&mut SessionState, QuizError> {
        self.state.as_mut().ok_or(QuizError::NotStarted)
    }

    fn pick_topic(&mut self, exclude: Option<&str>) -> Result<String, QuizError> {
        if self.store.is_empty() {
            return Err(QuizError::EmptyContentStore);
        }
        let candidates: Vec<&str> = self
            .store
            .topic_names()
            .filter(|name| Some(*name) != exclude)
            .collect();
        if candidates.is_empty() {
            return Err(QuizError::NoAlternativeTopic(exclude.unwrap_or_default().to_string()));
        }
        Ok(candidates[self.rng.index(candidates.len())].to_string())
    }

    fn start_topic(&mut self, topic: String) {
        let questions = generator::generate_questions(&mut self.rng, self.store.subtopics(&topic));
        log::debug!("topic {:?}: generated {} questions", topic, questions.len());
        self.state = Some(SessionState::new(topic, questions));
    }
}
