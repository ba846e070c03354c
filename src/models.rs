//! Wire types exchanged with the Vanity server.
use chrono::{DateTime, Utc};
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// Outcome recorded when a participant completes a split test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum Outcome {
    /// Plain conversion.
    Boolean(bool),
    /// Conversion with a value attached, e.g. order total.
    Number(f64),
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Boolean(true)
    }
}

/// Body of `PUT /v1/split/{test}/{participant}`.
#[derive(Debug, Serialize)]
pub(crate) struct AssignRequest {
    pub alternative: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

/// Body of a 200 or 409 response to an assign request.
#[derive(Debug, Deserialize)]
pub(crate) struct AssignResponse {
    pub alternative: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParticipantResponse {
    pub alternative: u32,
    pub joined: DateTime<Utc>,
    #[serde(default)]
    pub completed: Option<DateTime<Utc>>,
}

/// Everything the server knows about one participant of a split test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantRecord {
    /// Participant identifier.
    pub participant: ParticipantId,
    /// Alternative stored for the participant.
    pub alternative: u32,
    /// When the participant joined the split test.
    pub joined: DateTime<Utc>,
    /// When the participant completed the split test, if they did.
    pub completed: Option<DateTime<Utc>>,
}

impl ParticipantRecord {
    pub(crate) fn from_response(participant: ParticipantId, response: ParticipantResponse) -> Self {
        ParticipantRecord {
            participant,
            alternative: response.alternative,
            joined: response.joined,
            completed: response.completed,
        }
    }
}

/// Aggregate statistics for a split test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitStats {
    /// Human friendly title.
    pub title: String,
    /// When the split test was created (first participant joined).
    pub created: DateTime<Utc>,
    /// Distribution of participants across alternatives, indexed by alternative.
    #[serde(alias = "alternative", default)]
    pub alternatives: Vec<AlternativeStats>,
}

/// Statistics for a single alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeStats {
    /// Alternative title, if the server has one.
    #[serde(default)]
    pub title: Option<String>,
    /// Number of participants shown this alternative.
    #[serde(default)]
    pub participants: u64,
    /// Number of those participants that completed.
    #[serde(default)]
    pub completed: u64,
    /// Any other fields reported by the server.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::{AssignRequest, Outcome, ParticipantResponse, SplitStats};

    #[test]
    fn assign_request_omits_missing_outcome() {
        let body = serde_json::to_value(AssignRequest {
            alternative: 1,
            outcome: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "alternative": 1 }));
    }

    #[test]
    fn completion_defaults_to_true() {
        let body = serde_json::to_value(AssignRequest {
            alternative: 0,
            outcome: Some(Outcome::default()),
        })
        .unwrap();
        assert_eq!(body, json!({ "alternative": 0, "outcome": true }));

        let body = serde_json::to_value(AssignRequest {
            alternative: 0,
            outcome: Some(Outcome::from(12.5)),
        })
        .unwrap();
        assert_eq!(body, json!({ "alternative": 0, "outcome": 12.5 }));
    }

    #[test]
    fn parses_participant_without_completion() {
        let response: ParticipantResponse = serde_json::from_value(json!({
            "alternative": 1,
            "joined": "2012-04-01T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(response.alternative, 1);
        assert_eq!(
            response.joined,
            Utc.with_ymd_and_hms(2012, 4, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(response.completed, None);
    }

    #[test]
    fn parses_stats_leniently() {
        let stats: SplitStats = serde_json::from_value(json!({
            "title": "Signup button",
            "created": "2012-04-01T10:00:00.000Z",
            "alternatives": [
                { "title": "Red", "participants": 120, "completed": 12 },
                { "title": "Green", "participants": 118, "completed": 19, "rate": 0.16 },
            ],
        }))
        .unwrap();
        assert_eq!(stats.title, "Signup button");
        assert_eq!(stats.alternatives.len(), 2);
        assert_eq!(stats.alternatives[1].completed, 19);
        assert_eq!(stats.alternatives[1].extra.get("rate"), Some(&json!(0.16)));
    }
}
