//! Conversation State
//!
//! Message log for the assistant page. User messages are appended
//! optimistically before the request goes out; every send resolves to
//! exactly one assistant entry, whether the backend answered or failed.

use crate::api::types::{ChatReply, IntakeReceipt};

/// Who authored a chat entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// Routing details shown alongside an assistant reply
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyMeta {
    pub department: String,
    pub eta: String,
    pub confidence: f64,
}

impl ReplyMeta {
    /// Confidence rendered to three decimals, matching backend rounding
    pub fn confidence_label(&self) -> String {
        format!("{:.3}", self.confidence)
    }
}

/// A single bubble in the conversation
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
    pub meta: Option<ReplyMeta>,
}

impl ChatEntry {
    /// Outgoing citizen message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            meta: None,
        }
    }

    /// Plain assistant message (greetings, errors, confirmations)
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            meta: None,
        }
    }

    /// Assistant reply with the answer body, numbered steps, and the
    /// escalation note when the backend attached one
    pub fn from_reply(reply: &ChatReply) -> Self {
        let mut text = reply.answer.clone();

        if !reply.solution_steps.is_empty() {
            text.push_str("\n\nSteps:");
            for (i, step) in reply.solution_steps.iter().enumerate() {
                text.push_str(&format!("\n{}. {}", i + 1, step));
            }
        }

        if let Some(note) = reply.escalation_note.as_deref() {
            if !note.is_empty() {
                text.push_str(&format!("\n\nNote: {}", note));
            }
        }

        Self {
            sender: Sender::Assistant,
            text,
            meta: Some(ReplyMeta {
                department: reply.department.clone(),
                eta: reply.expected_resolution_time.clone(),
                confidence: reply.confidence,
            }),
        }
    }

    /// Confirmation message for a freshly registered ticket
    pub fn from_receipt(receipt: &IntakeReceipt) -> Self {
        let mut text = format!(
            "✅ Complaint registered\nTicket: {}\nDepartment: {}\nDetected issue: {}\nConfidence: {:.3}",
            receipt.ticket_id,
            receipt.detected_department,
            receipt.detected_issue,
            receipt.confidence,
        );

        text.push_str(if receipt.authority_notified {
            "\nAuthority notified: Yes"
        } else {
            "\nAuthority notified: No"
        });

        if let Some(reference) = receipt.authority_reference.as_deref() {
            text.push_str(&format!(" ({})", reference));
        }

        Self {
            sender: Sender::Assistant,
            text,
            meta: None,
        }
    }
}

/// Ordered message log, oldest first
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub entries: Vec<ChatEntry>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            entries: vec![ChatEntry::assistant(
                "Hi! 👋 I am the CivicDesk assistant. Enter your name and issue below. \
                 I will capture your location, classify any evidence, and route the \
                 complaint to the right department.",
            )],
        }
    }
}

impl Conversation {
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reply() -> ChatReply {
        ChatReply {
            answer: "Water tanker dispatched to your ward.".to_string(),
            solution_steps: vec![
                "Keep your ticket ID handy.".to_string(),
                "Expect a call from the field team.".to_string(),
            ],
            confidence: 0.8571,
            department: "Water Board".to_string(),
            expected_resolution_time: "24 hours".to_string(),
            similar_cases: vec![],
            escalation_note: None,
        }
    }

    #[test]
    fn test_default_conversation_opens_with_greeting() {
        let convo = Conversation::default();
        assert_eq!(convo.entries.len(), 1);
        assert_eq!(convo.entries[0].sender, Sender::Assistant);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut convo = Conversation::default();
        convo.push(ChatEntry::user("No water supply"));
        convo.push(ChatEntry::assistant("Looking into it"));

        let senders: Vec<_> = convo.entries.iter().map(|e| e.sender).collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
    }

    #[test]
    fn test_reply_formats_numbered_steps() {
        let entry = ChatEntry::from_reply(&sample_reply());
        assert_eq!(entry.sender, Sender::Assistant);
        assert!(entry.text.starts_with("Water tanker dispatched"));
        assert!(entry.text.contains("Steps:\n1. Keep your ticket ID handy."));
        assert!(entry.text.contains("\n2. Expect a call from the field team."));
    }

    #[test]
    fn test_reply_without_steps_omits_header() {
        let mut reply = sample_reply();
        reply.solution_steps.clear();

        let entry = ChatEntry::from_reply(&reply);
        assert!(!entry.text.contains("Steps:"));
    }

    #[test]
    fn test_reply_carries_routing_meta() {
        let entry = ChatEntry::from_reply(&sample_reply());
        let meta = entry.meta.unwrap();
        assert_eq!(meta.department, "Water Board");
        assert_eq!(meta.eta, "24 hours");
        assert_eq!(meta.confidence_label(), "0.857");
    }

    #[test]
    fn test_reply_appends_escalation_note() {
        let mut reply = sample_reply();
        reply.escalation_note = Some("Third report from this ward this week".to_string());

        let entry = ChatEntry::from_reply(&reply);
        assert!(entry.text.ends_with("Note: Third report from this ward this week"));
    }

    #[test]
    fn test_receipt_confirmation_rounds_confidence() {
        let receipt = IntakeReceipt {
            ticket_id: "CIV-AB12CD34EF".to_string(),
            detected_department: "Electricity".to_string(),
            detected_issue: "streetlight outage".to_string(),
            confidence: 0.84129,
            location: None,
            authority_notified: false,
            authority_reference: None,
        };

        let entry = ChatEntry::from_receipt(&receipt);
        assert!(entry.text.contains("Ticket: CIV-AB12CD34EF"));
        assert!(entry.text.contains("Confidence: 0.841"));
        assert!(entry.text.ends_with("Authority notified: No"));
    }

    #[test]
    fn test_receipt_confirmation_includes_authority_reference() {
        let receipt = IntakeReceipt {
            ticket_id: "CIV-0011223344".to_string(),
            detected_department: "Sanitation".to_string(),
            detected_issue: "garbage pileup".to_string(),
            confidence: 0.9,
            location: Some("Rajajinagar".to_string()),
            authority_notified: true,
            authority_reference: Some("HTTP-200".to_string()),
        };

        let entry = ChatEntry::from_receipt(&receipt);
        assert!(entry.text.ends_with("Authority notified: Yes (HTTP-200)"));
    }
}
