pub mod parsed_document;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_session;
pub use parsed_document::ParsedDocument;
pub use quiz::{Quiz, QuizItem};
pub use quiz_attempt::{AnswerState, GradeOutcome, GradeReport};
pub use quiz_session::QuizSession;
