//! Evaluation answers and the submit request.

use crate::value_type;

value_type! {
    /// Answer value; exactly one member is expected to be present.
    pub struct EvaluationAnswerData {
        string_value: scalar(String) = "StringValue",
        numeric_value: scalar(f64) = "NumericValue",
        not_applicable: scalar(bool) = "NotApplicable",
    }
}

value_type! {
    pub struct EvaluationAnswerInput {
        value: scalar(EvaluationAnswerData) = "Value",
    }
}

value_type! {
    pub struct EvaluationNote {
        value: scalar(String) = "Value",
    }
}

value_type! {
    /// Submits a contact evaluation with answers and notes keyed by question id.
    pub struct SubmitContactEvaluationRequest {
        instance_id: scalar(String) = "InstanceId",
        evaluation_id: scalar(String) = "EvaluationId",
        answers: map(EvaluationAnswerInput) = "Answers",
        notes: map(EvaluationNote) = "Notes",
    }
}

value_type! {
    pub struct SubmitContactEvaluationResponse {
        evaluation_id: scalar(String) = "EvaluationId",
        evaluation_arn: scalar(String) = "EvaluationArn",
    }
}

impl EvaluationAnswerInput {
    /// Wraps a free-text answer.
    pub fn text(value: impl Into<String>) -> Self {
        let mut data = EvaluationAnswerData::new();
        data.with_string_value(value);
        let mut input = Self::new();
        input.with_value(data);
        input
    }

    /// Wraps a numeric answer.
    pub fn numeric(value: f64) -> Self {
        let mut data = EvaluationAnswerData::new();
        data.with_numeric_value(value);
        let mut input = Self::new();
        input.with_value(data);
        input
    }
}
