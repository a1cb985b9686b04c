//! Evaluation status, scores and summaries.

use crate::domain::foundation::Timestamp;
use crate::{strict_enum, value_type};

strict_enum! {
    pub enum EvaluationStatus {
        Draft = "DRAFT",
        Submitted = "SUBMITTED",
    }
}

value_type! {
    /// Score of an evaluation, a section or a question.
    pub struct EvaluationScore {
        percentage: scalar(f64) = "Percentage",
        not_applicable: scalar(bool) = "NotApplicable",
        automatic_fail: scalar(bool) = "AutomaticFail",
    }
}

value_type! {
    pub struct EvaluationMetadata {
        contact_id: scalar(String) = "ContactId",
        evaluator_arn: scalar(String) = "EvaluatorArn",
        contact_agent_id: scalar(String) = "ContactAgentId",
        score: scalar(EvaluationScore) = "Score",
    }
}

value_type! {
    pub struct EvaluationSummary {
        evaluation_id: scalar(String) = "EvaluationId",
        evaluation_arn: scalar(String) = "EvaluationArn",
        evaluation_form_title: scalar(String) = "EvaluationFormTitle",
        evaluation_form_id: scalar(String) = "EvaluationFormId",
        status: scalar(EvaluationStatus) = "Status",
        evaluator_arn: scalar(String) = "EvaluatorArn",
        score: scalar(EvaluationScore) = "Score",
        created_time: scalar(Timestamp) = "CreatedTime",
        last_modified_time: scalar(Timestamp) = "LastModifiedTime",
    }
}

impl EvaluationStatus {
    /// Returns true once the evaluation can no longer be edited.
    pub fn is_final(&self) -> bool {
        matches!(self, EvaluationStatus::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldValue;

    fn score(percentage: f64) -> EvaluationScore {
        let mut score = EvaluationScore::new();
        score.with_percentage(percentage).with_automatic_fail(false);
        score
    }

    #[test]
    fn submitted_is_final() {
        assert!(EvaluationStatus::Submitted.is_final());
        assert!(!EvaluationStatus::Draft.is_final());
    }

    #[test]
    fn score_renders_floats_with_fraction() {
        assert_eq!(score(90.0).to_string(), "{Percentage: 90.0,AutomaticFail: false}");
    }

    #[test]
    fn equal_scores_hash_equal() {
        assert_eq!(score(87.5), score(87.5));
        assert_eq!(score(87.5).stable_hash(), score(87.5).stable_hash());
        assert_ne!(score(87.5), score(88.0));
    }

    #[test]
    fn summary_timestamps_render_as_rfc3339() {
        let created = Timestamp::from_epoch_millis(1_705_276_800_000).unwrap();
        let mut summary = EvaluationSummary::new();
        summary
            .with_evaluation_id("ev-1")
            .with_status(EvaluationStatus::Draft)
            .with_created_time(created);

        assert_eq!(
            summary.to_string(),
            "{EvaluationId: ev-1,Status: DRAFT,CreatedTime: 2024-01-15T00:00:00.000Z}"
        );
    }

    #[test]
    fn summary_deserializes_epoch_seconds() {
        let json = r#"{"EvaluationId": "ev-1", "Status": "SUBMITTED", "CreatedTime": 1705276800.5}"#;
        let summary: EvaluationSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.status(), Some(&EvaluationStatus::Submitted));
        assert_eq!(
            summary.created_time().map(Timestamp::epoch_millis),
            Some(1_705_276_800_500)
        );
    }
}
