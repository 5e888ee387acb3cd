use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Steps of the admission workflow. `Accepted` and `Rejected` are terminal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    DocumentCheck,
    AcademicEvaluation,
    ActivityCheck,
    InterviewEvaluation,
    Accepted,
    Rejected,
}

impl Stage {
    pub const INITIAL: Stage = Stage::DocumentCheck;

    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Accepted | Stage::Rejected)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Stage::DocumentCheck => "S1",
            Stage::AcademicEvaluation => "S2",
            Stage::ActivityCheck => "S3",
            Stage::InterviewEvaluation => "S4",
            Stage::Accepted => "S5",
            Stage::Rejected => "S6",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Stage::DocumentCheck => "Documentation Submission & Verification",
            Stage::AcademicEvaluation => "Academic Evaluation (Percentage Based)",
            Stage::ActivityCheck => "Extracurricular Activities Check",
            Stage::InterviewEvaluation => "Interview Evaluation (Percentage)",
            Stage::Accepted => "Accepted (Accept State)",
            Stage::Rejected => "Rejected (Reject State)",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.title())
    }
}

/// Typed payload collected for one transient stage.
///
/// Every field is optional so that a submission with missing values can still be
/// represented; the evaluator resolves such input to a rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageInputs {
    Documents {
        #[serde(default, rename = "documentsVerified")]
        documents_verified: Option<bool>,
    },
    Academic {
        #[serde(default, rename = "marks2ndYear")]
        marks_2nd_year: Option<f64>,
        #[serde(default, rename = "marksAdmissionTest")]
        marks_admission_test: Option<f64>,
    },
    Activities {
        #[serde(default, rename = "activityCount")]
        activity_count: Option<u32>,
    },
    Interview {
        #[serde(default, rename = "interviewPercentage")]
        interview_percentage: Option<f64>,
    },
}

impl StageInputs {
    pub fn documents(verified: bool) -> Self {
        StageInputs::Documents {
            documents_verified: Some(verified),
        }
    }

    pub fn academic(marks_2nd_year: f64, marks_admission_test: f64) -> Self {
        StageInputs::Academic {
            marks_2nd_year: Some(marks_2nd_year),
            marks_admission_test: Some(marks_admission_test),
        }
    }

    pub fn activities(count: u32) -> Self {
        StageInputs::Activities {
            activity_count: Some(count),
        }
    }

    pub fn interview(percentage: f64) -> Self {
        StageInputs::Interview {
            interview_percentage: Some(percentage),
        }
    }

    /// The stage this payload was shaped for.
    pub const fn stage(&self) -> Stage {
        match self {
            StageInputs::Documents { .. } => Stage::DocumentCheck,
            StageInputs::Academic { .. } => Stage::AcademicEvaluation,
            StageInputs::Activities { .. } => Stage::ActivityCheck,
            StageInputs::Interview { .. } => Stage::InterviewEvaluation,
        }
    }

    /// Present fields keyed by their form names, for merging into the profile.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = Vec::new();
        match self {
            StageInputs::Documents { documents_verified } => {
                if let Some(verified) = documents_verified {
                    fields.push(("documentsVerified", FieldValue::Boolean(*verified)));
                }
            }
            StageInputs::Academic {
                marks_2nd_year,
                marks_admission_test,
            } => {
                if let Some(marks) = marks_2nd_year {
                    fields.push(("marks2ndYear", FieldValue::Number(*marks)));
                }
                if let Some(marks) = marks_admission_test {
                    fields.push(("marksAdmissionTest", FieldValue::Number(*marks)));
                }
            }
            StageInputs::Activities { activity_count } => {
                if let Some(count) = activity_count {
                    fields.push(("activityCount", FieldValue::Count(*count)));
                }
            }
            StageInputs::Interview {
                interview_percentage,
            } => {
                if let Some(percentage) = interview_percentage {
                    fields.push(("interviewPercentage", FieldValue::Number(*percentage)));
                }
            }
        }
        fields
    }
}

/// Value stored in the applicant profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Count(u32),
    Number(f64),
}

/// Every field submitted during the session, later submissions overwriting earlier keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantProfile {
    fields: BTreeMap<String, FieldValue>,
}

impl ApplicantProfile {
    pub fn merge(&mut self, inputs: &StageInputs) {
        for (name, value) in inputs.fields() {
            self.fields.insert(name.to_string(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn clear(&mut self) {
        self.fields.clear();
    }
}

/// Applicant details captured before the workflow starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub registration_number: String,
    pub program: String,
}

/// Output of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionResult {
    pub next_stage: Stage,
    pub outcome_label: String,
    pub condition_text: String,
    pub stage_score: f64,
}

/// Committed step of the applicant's path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from_stage: Stage,
    pub to_stage: Stage,
    pub outcome_label: String,
    pub condition_text: String,
    pub stage_score: f64,
}

impl TransitionRecord {
    pub fn new(from_stage: Stage, result: TransitionResult) -> Self {
        Self {
            from_stage,
            to_stage: result.next_stage,
            outcome_label: result.outcome_label,
            condition_text: result.condition_text,
            stage_score: result.stage_score,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.to_stage == Stage::Rejected
    }
}
