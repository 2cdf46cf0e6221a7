//! Guided Intake State
//!
//! Draft of the structured complaint form. Validation and multipart field
//! assembly live here so the form component stays thin.

use crate::api::types::DEFAULT_CITIZEN_ID;
use crate::state::geo::GeoPoint;

/// In-progress complaint form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeDraft {
    pub name: String,
    pub problem: String,
    pub location: String,
    pub coords: Option<GeoPoint>,
}

impl IntakeDraft {
    /// Submission needs a name and a problem description; location and
    /// coordinates are optional extras
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.problem.trim().is_empty()
    }

    /// Text fields for the multipart intake request, in backend order.
    /// Coordinates are only included once a live fix exists.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("problem", self.problem.clone()),
            ("location", self.location.clone()),
            ("user_id", DEFAULT_CITIZEN_ID.to_string()),
        ];

        if let Some(point) = self.coords {
            fields.push(("latitude", point.lat.to_string()));
            fields.push(("longitude", point.lng.to_string()));
        }

        fields
    }

    /// The optimistic chat entry shown for a submitted form
    pub fn summary(&self) -> String {
        format!("Name: {}\nProblem: {}", self.name, self.problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_is_not_submittable() {
        assert!(!IntakeDraft::default().is_submittable());
    }

    #[test]
    fn test_whitespace_only_fields_block_submission() {
        let draft = IntakeDraft {
            name: "   ".to_string(),
            problem: "No water supply".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_submittable());

        let draft = IntakeDraft {
            name: "Asha".to_string(),
            problem: "\n\t".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_name_and_problem_suffice() {
        let draft = IntakeDraft {
            name: "Asha".to_string(),
            problem: "No water supply".to_string(),
            ..Default::default()
        };
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_form_fields_without_fix_omit_coordinates() {
        let draft = IntakeDraft {
            name: "Asha".to_string(),
            problem: "Garbage not collected".to_string(),
            location: "Rajajinagar".to_string(),
            coords: None,
        };

        let fields = draft.form_fields();
        assert_eq!(
            fields,
            vec![
                ("name", "Asha".to_string()),
                ("problem", "Garbage not collected".to_string()),
                ("location", "Rajajinagar".to_string()),
                ("user_id", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_fields_with_fix_append_coordinates() {
        let draft = IntakeDraft {
            name: "Asha".to_string(),
            problem: "Streetlight out".to_string(),
            location: String::new(),
            coords: Some(GeoPoint {
                lat: 12.9716,
                lng: 77.5946,
            }),
        };

        let fields = draft.form_fields();
        assert!(fields.contains(&("latitude", "12.9716".to_string())));
        assert!(fields.contains(&("longitude", "77.5946".to_string())));
    }

    #[test]
    fn test_summary_pairs_name_with_problem() {
        let draft = IntakeDraft {
            name: "Ravi".to_string(),
            problem: "Power outage in Indiranagar".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.summary(), "Name: Ravi\nProblem: Power outage in Indiranagar");
    }
}
