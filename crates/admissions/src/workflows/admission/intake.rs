//! Boundary adapter turning raw form fields into typed stage inputs.
//!
//! Browsers and CLI prompts hand us strings. Coercion happens here so that the
//! evaluator only ever sees [`StageInputs`]. Nothing in this module fails:
//! unreadable values become absent fields, which the evaluator rejects.

use std::collections::BTreeMap;

use super::domain::{Stage, StageInputs};

/// Raw `name -> value` pairs as posted by a form.
pub type FormFields = BTreeMap<String, String>;

/// Prefix shared by the extracurricular checkboxes.
pub const ACTIVITY_PREFIX: &str = "activity_";

/// Extracurricular checkboxes offered on the activity form, with their labels.
pub const ACTIVITY_FIELDS: [(&str, &str); 3] = [
    ("activity_sports", "Competitive Sports Participation"),
    ("activity_certificate", "Advanced Skill Certificate"),
    ("activity_volunteer", "Volunteer/Community Service"),
];

/// Coerce `fields` into the input shape expected by `stage`.
///
/// Returns `None` for terminal stages, which take no input.
pub fn coerce_form(stage: Stage, fields: &FormFields) -> Option<StageInputs> {
    let inputs = match stage {
        Stage::DocumentCheck => StageInputs::Documents {
            documents_verified: Some(checkbox(fields, "documentsVerified")),
        },
        Stage::AcademicEvaluation => StageInputs::Academic {
            marks_2nd_year: number(fields, "marks2ndYear"),
            marks_admission_test: number(fields, "marksAdmissionTest"),
        },
        Stage::ActivityCheck => StageInputs::Activities {
            activity_count: activity_count(fields),
        },
        Stage::InterviewEvaluation => StageInputs::Interview {
            interview_percentage: number(fields, "interviewPercentage"),
        },
        Stage::Accepted | Stage::Rejected => return None,
    };
    Some(inputs)
}

/// An unchecked checkbox is simply missing from the posted fields.
fn checkbox(fields: &FormFields, name: &str) -> bool {
    fields
        .get(name)
        .map(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "on" | "true" | "1" | "yes"
            )
        })
        .unwrap_or(false)
}

fn number(fields: &FormFields, name: &str) -> Option<f64> {
    fields
        .get(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Count checked `activity_*` boxes, falling back to an explicit `activityCount`
/// when the form posted no activity checkboxes at all.
fn activity_count(fields: &FormFields) -> Option<u32> {
    let mut seen_checkbox = false;
    let mut checked = 0u32;
    for (name, value) in fields {
        if name.starts_with(ACTIVITY_PREFIX) {
            seen_checkbox = true;
            if value.trim() == "1" {
                checked += 1;
            }
        }
    }

    if seen_checkbox {
        return Some(checked);
    }

    match fields.get("activityCount") {
        Some(raw) => raw.trim().parse::<u32>().ok(),
        None => Some(0),
    }
}
