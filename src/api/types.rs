//! Wire Types
//!
//! DTOs exchanged with the CivicDesk backend. The client treats the backend
//! as the schema owner: optional and collection fields are tolerant of
//! omission, and the analytics aggregate keeps unknown keys verbatim so the
//! dashboard can render it as-is.

use std::collections::BTreeMap;

/// User id the client submits while the product has no sign-in flow.
pub const DEFAULT_CITIZEN_ID: i64 = 1;

/// Token issued by `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub role: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Assistant reply from `POST /chat`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default)]
    pub solution_steps: Vec<String>,
    pub confidence: f64,
    pub department: String,
    pub expected_resolution_time: String,
    #[serde(default)]
    pub similar_cases: Vec<SimilarCase>,
    #[serde(default)]
    pub escalation_note: Option<String>,
}

/// Precedent grievance attached to a chat reply.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SimilarCase {
    pub grievance_id: String,
    pub department: String,
    pub solution: String,
    pub similarity: f64,
}

/// Ticket issued by `POST /complaint/intake`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct IntakeReceipt {
    pub ticket_id: String,
    pub detected_department: String,
    pub detected_issue: String,
    pub confidence: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub authority_notified: bool,
    #[serde(default)]
    pub authority_reference: Option<String>,
}

/// Ticket state from `GET /status/{ticket_id}` (and `POST /complaint`,
/// which omits `created_at`).
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct StatusReport {
    pub ticket_id: String,
    pub department: String,
    /// Missing statuses deserialize empty and sit at the first timeline stage
    #[serde(default)]
    pub status: String,
    pub sla_hours: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One past interaction from `GET /history/{user_id}`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct HistoryItem {
    pub query: String,
    pub response: String,
    pub confidence: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate from `GET /analytics`.
///
/// Only `sentiment_distribution` is read field-by-field; every other key the
/// backend sends survives in `aggregate` so the dashboard can pretty-print
/// the whole payload without the client hardcoding its shape.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, u64>,
    #[serde(flatten)]
    pub aggregate: serde_json::Map<String, serde_json::Value>,
}

/// Topic-model highlight from `GET /topics`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Topic {
    pub topic_id: i64,
    pub size: u64,
    pub representative_text: String,
}

/// Hotspot row from `GET /alerts`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Alert {
    pub department: String,
    pub location: String,
    pub issue_count: u32,
    pub severity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_parses_full_backend_payload() {
        let body = r#"{
            "reply": "Water supply disruption registered.",
            "answer": "Water supply disruption registered.",
            "solution_steps": ["Valve inspection scheduled", "Tanker dispatched"],
            "confidence": 0.912,
            "department": "Water Board",
            "expected_resolution_time": "24 hours",
            "similar_cases": [
                {"grievance_id": "G-104", "department": "Water Board",
                 "solution": "Replaced the feeder valve", "similarity": 0.87}
            ],
            "escalation_note": "Repeat complaint from the same ward",
            "is_live_authority_contact": false
        }"#;

        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.department, "Water Board");
        assert_eq!(reply.expected_resolution_time, "24 hours");
        assert_eq!(reply.solution_steps.len(), 2);
        assert_eq!(reply.similar_cases[0].grievance_id, "G-104");
        assert_eq!(
            reply.escalation_note.as_deref(),
            Some("Repeat complaint from the same ward")
        );
    }

    #[test]
    fn test_chat_reply_tolerates_minimal_payload() {
        let body = r#"{
            "answer": "Noted.",
            "confidence": 0.5,
            "department": "General",
            "expected_resolution_time": "72 hours"
        }"#;

        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert!(reply.solution_steps.is_empty());
        assert!(reply.similar_cases.is_empty());
        assert!(reply.escalation_note.is_none());
    }

    #[test]
    fn test_intake_receipt_defaults_authority_fields() {
        let body = r#"{
            "ticket_id": "CIV-AB12CD34EF",
            "detected_department": "Electricity",
            "detected_issue": "streetlight outage",
            "confidence": 0.841
        }"#;

        let receipt: IntakeReceipt = serde_json::from_str(body).unwrap();
        assert!(!receipt.authority_notified);
        assert!(receipt.authority_reference.is_none());
    }

    #[test]
    fn test_status_report_tolerates_missing_status() {
        let body = r#"{
            "ticket_id": "CIV-FF00AA11BB",
            "department": "Roads",
            "sla_hours": 48
        }"#;

        let report: StatusReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.status, "");
    }

    #[test]
    fn test_analytics_snapshot_keeps_unknown_keys_for_as_is_rendering() {
        let body = r#"{
            "total_complaints": 42,
            "open_cases": 11,
            "avg_sla_hours": 63.5,
            "department_distribution": {"Water Board": 20, "Roads": 22},
            "sentiment_distribution": {"positive": 4, "neutral": 10, "negative": 28}
        }"#;

        let snapshot: AnalyticsSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.sentiment_distribution["negative"], 28);
        assert_eq!(snapshot.aggregate["total_complaints"], 42);

        // Round-trips so the dashboard's pretty-print shows the full payload.
        let rendered = serde_json::to_string(&snapshot).unwrap();
        let reparsed: AnalyticsSnapshot = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, snapshot);
    }

    #[test]
    fn test_alert_list_parses() {
        let body = r#"[
            {"department": "Sanitation", "location": "Rajajinagar",
             "issue_count": 7, "severity": "high"},
            {"department": "Water Board", "location": "Indiranagar",
             "issue_count": 3, "severity": "medium"}
        ]"#;

        let alerts: Vec<Alert> = serde_json::from_str(body).unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, "high");
        assert_eq!(alerts[1].issue_count, 3);
    }

    #[test]
    fn test_history_item_keeps_timestamp_opaque() {
        let body = r#"{
            "query": "No water since yesterday",
            "response": "Routed to Water Board",
            "confidence": 0.77,
            "created_at": "2024-05-01T10:12:03.412551"
        }"#;

        let item: HistoryItem = serde_json::from_str(body).unwrap();
        assert_eq!(item.created_at.as_deref(), Some("2024-05-01T10:12:03.412551"));
    }
}
