//! Contact evaluation shapes.
//!
//! Answers and notes are keyed by question reference id, so the submit request
//! carries map fields of nested shapes.

mod answers;
mod summary;

pub use answers::{
    EvaluationAnswerData, EvaluationAnswerInput, EvaluationNote, SubmitContactEvaluationRequest,
    SubmitContactEvaluationResponse,
};
pub use summary::{EvaluationMetadata, EvaluationScore, EvaluationStatus, EvaluationSummary};
