use serde::{Deserialize, Serialize};

/// Completion state of an action item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    Pending,
    InProgress,
    Done,
}

/// A follow-up task extracted from the discussion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    pub status: ActionStatus,
}

/// One phase of the discussion's decision flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionStep {
    /// Phase or key question in the thought process
    pub step: String,
    /// Considerations, arguments, or options discussed at this phase
    pub options: Vec<String>,
}

/// Structured meeting minutes produced by the summarizer
///
/// Field names on the wire are camelCase to match the response schema sent
/// to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    /// Main topic of discussion
    pub topic: String,
    /// Key arguments or points made, meeting-minutes style
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Tasks with owners and status
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    /// Final consensus or summary
    pub conclusion: String,
    /// Chronological decision flow; the model may omit this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_tree: Option<Vec<DecisionStep>>,
}

impl MeetingSummary {
    /// The sentinel record returned when summary generation fails
    pub fn fallback() -> Self {
        Self {
            topic: "Error generating summary".to_string(),
            key_points: Vec::new(),
            action_items: Vec::new(),
            conclusion: "Could not generate summary.".to_string(),
            decision_tree: None,
        }
    }

    /// Whether this is the failure sentinel rather than a real summary
    pub fn is_fallback(&self) -> bool {
        self.topic == "Error generating summary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_empty() {
        let summary = MeetingSummary::fallback();
        assert!(summary.key_points.is_empty());
        assert!(summary.action_items.is_empty());
        assert!(summary.decision_tree.is_none());
        assert!(summary.is_fallback());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{
            "topic": "Pricing",
            "keyPoints": ["Raise the base tier"],
            "actionItems": [{"task": "Model revenue", "owner": "Maya", "status": "Pending"}],
            "conclusion": "Agreed to test a price change."
        }"#;

        let summary: MeetingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.key_points.len(), 1);
        assert_eq!(summary.action_items[0].status, ActionStatus::Pending);
        assert!(summary.decision_tree.is_none());
    }

    #[test]
    fn test_status_round_trip() {
        let json = serde_json::to_string(&ActionStatus::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
    }
}
