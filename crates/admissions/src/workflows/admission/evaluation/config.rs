use serde::{Deserialize, Serialize};

/// Pass marks and score ceilings used by the stage rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub academic_pass_percentage: f64,
    pub interview_pass_percentage: f64,
    pub max_second_year_marks: f64,
    pub max_admission_test_marks: f64,
    pub combined_max_score: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            academic_pass_percentage: 60.0,
            interview_pass_percentage: 50.0,
            max_second_year_marks: 1100.0,
            max_admission_test_marks: 100.0,
            combined_max_score: 1200.0,
        }
    }
}
