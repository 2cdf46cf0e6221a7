//! Ticket Timeline
//!
//! Maps backend ticket statuses onto the three-stage journey shown by the
//! status tracker page.

use crate::api::types::StatusReport;

/// One stage of the ticket journey
pub struct Stage {
    pub number: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// The journey every ticket moves through, in order
pub const TIMELINE: [Stage; 3] = [
    Stage {
        number: 1,
        title: "Ticket Created",
        subtitle: "We registered your grievance and generated a ticket.",
    },
    Stage {
        number: 2,
        title: "Department Assigned",
        subtitle: "Case routed to the department and officer queue.",
    },
    Stage {
        number: 3,
        title: "Resolution Update",
        subtitle: "Issue resolved or closed. Feedback can be shared.",
    },
];

/// Highest completed stage for a backend status string.
///
/// Unrecognized statuses still show stage one: the ticket exists, so the
/// first step is done no matter what the backend calls its state.
pub fn stage_for(status: &str) -> u8 {
    match status.to_lowercase().as_str() {
        "resolved" | "closed" => 3,
        "escalated" | "in_progress" | "assigned" => 2,
        _ => 1,
    }
}

/// Outcome of a ticket lookup
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// Nothing searched yet
    Idle,
    /// Backend rejected the ticket ID
    Missing(String),
    /// Ticket found
    Found(StatusReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ticket_sits_at_stage_one() {
        assert_eq!(stage_for("open"), 1);
    }

    #[test]
    fn test_working_statuses_reach_stage_two() {
        assert_eq!(stage_for("escalated"), 2);
        assert_eq!(stage_for("in_progress"), 2);
        assert_eq!(stage_for("assigned"), 2);
    }

    #[test]
    fn test_terminal_statuses_reach_stage_three() {
        assert_eq!(stage_for("resolved"), 3);
        assert_eq!(stage_for("closed"), 3);
    }

    #[test]
    fn test_status_matching_ignores_case() {
        assert_eq!(stage_for("RESOLVED"), 3);
        assert_eq!(stage_for("Escalated"), 2);
    }

    #[test]
    fn test_unknown_status_falls_back_to_stage_one() {
        assert_eq!(stage_for("mystery_state"), 1);
        assert_eq!(stage_for(""), 1);
    }

    #[test]
    fn test_timeline_stage_numbers_are_sequential() {
        let numbers: Vec<_> = TIMELINE.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
