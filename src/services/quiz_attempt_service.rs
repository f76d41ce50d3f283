use chrono::Utc;

use crate::models::domain::quiz_attempt::{AnswerState, GradeOutcome, GradeReport};
use crate::models::domain::Quiz;

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Counts the questions whose stored answer equals the selected option.
    pub fn score(quiz: &Quiz, answers: &AnswerState) -> u32 {
        quiz.items
            .iter()
            .enumerate()
            .filter(|(idx, item)| answers.get(idx).is_some_and(|selected| *selected == item.answer))
            .count() as u32
    }

    pub fn outcome(score: u32, pass_threshold: u32) -> GradeOutcome {
        if score >= pass_threshold {
            GradeOutcome::Success
        } else {
            GradeOutcome::KeepPracticing
        }
    }

    /// Grades an attempt in one pass. Holds no state, so repeated calls agree.
    pub fn grade(quiz: &Quiz, answers: &AnswerState, pass_threshold: u32) -> GradeReport {
        let score = Self::score(quiz, answers);
        let outcome = Self::outcome(score, pass_threshold);

        GradeReport {
            score,
            total: quiz.len() as u32,
            passed: outcome == GradeOutcome::Success,
            outcome,
            submitted_at: Utc::now(),
        }
    }
}
