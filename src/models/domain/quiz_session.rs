use serde::Serialize;

use crate::models::domain::quiz_attempt::{AnswerState, GradeReport};
use crate::models::domain::Quiz;
use crate::services::quiz_attempt_service::QuizAttemptService;

/// Client-side state of one quiz run. Submission is one-shot: after `submit`,
/// selections are frozen and further submits return the first report.
#[derive(Clone, Debug, Default, Serialize)]
pub struct QuizSession {
    quiz: Quiz,
    answers: AnswerState,
    report: Option<GradeReport>,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        QuizSession {
            quiz,
            answers: AnswerState::new(),
            report: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.report.is_some()
    }

    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    /// Records a selection. Returns false, leaving state untouched, once
    /// submitted or when the index or option does not exist.
    pub fn select(&mut self, index: usize, option: &str) -> bool {
        if self.is_submitted() {
            return false;
        }
        match self.quiz.get(index) {
            Some(item) if item.has_option(option) => {
                self.answers.insert(index, option.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn submit(&mut self, pass_threshold: u32) -> &GradeReport {
        self.report.get_or_insert_with(|| {
            QuizAttemptService::grade(&self.quiz, &self.answers, pass_threshold)
        })
    }

    /// Starts over with a freshly generated quiz.
    pub fn reset(&mut self, quiz: Quiz) {
        self.quiz = quiz;
        self.answers.clear();
        self.report = None;
    }
}
