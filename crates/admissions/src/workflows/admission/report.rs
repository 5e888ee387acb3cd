use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Stage, StudentInfo, TransitionRecord};
use super::session::{AdmissionSession, SessionError};

/// One line of the running history log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryLogEntry {
    pub from_code: &'static str,
    pub to_code: &'static str,
    pub outcome_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_display: Option<String>,
    pub passed: bool,
}

impl HistoryLogEntry {
    fn from_record(record: &TransitionRecord) -> Self {
        // The activity stage scores 100 on every pass, which says nothing useful.
        let score_display = (record.stage_score > 0.0
            && record.from_stage != Stage::ActivityCheck)
            .then(|| format!("Score: {}%", record.stage_score));

        Self {
            from_code: record.from_stage.code(),
            to_code: record.to_stage.code(),
            outcome_label: record.outcome_label.clone(),
            score_display,
            passed: !record.is_rejection(),
        }
    }

    pub fn line(&self) -> String {
        match &self.score_display {
            Some(score) => format!(
                "{} → {} {} ({score})",
                self.from_code, self.to_code, self.outcome_label
            ),
            None => format!("{} → {} {}", self.from_code, self.to_code, self.outcome_label),
        }
    }
}

/// Log entries, newest first.
pub fn history_log(history: &[TransitionRecord]) -> Vec<HistoryLogEntry> {
    history.iter().rev().map(HistoryLogEntry::from_record).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Transient,
    Accept,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathNode {
    pub stage: Stage,
    pub code: &'static str,
    pub kind: NodeKind,
    pub initial: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEdge {
    pub from: Stage,
    pub to: Stage,
    pub label: String,
}

/// Visited stages and the transitions between them, ready for a diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionPath {
    pub nodes: Vec<PathNode>,
    pub edges: Vec<PathEdge>,
}

impl ExecutionPath {
    /// Nodes appear in first-visit order; edges carry the condition text.
    pub fn from_history(history: &[TransitionRecord]) -> Self {
        let mut path = ExecutionPath::default();
        for record in history {
            path.visit(record.from_stage);
            path.visit(record.to_stage);
            path.edges.push(PathEdge {
                from: record.from_stage,
                to: record.to_stage,
                label: record.condition_text.clone(),
            });
        }
        path
    }

    fn visit(&mut self, stage: Stage) {
        if self.nodes.iter().any(|node| node.stage == stage) {
            return;
        }
        let kind = match stage {
            Stage::Accepted => NodeKind::Accept,
            Stage::Rejected => NodeKind::Reject,
            _ => NodeKind::Transient,
        };
        self.nodes.push(PathNode {
            stage,
            code: stage.code(),
            kind,
            initial: self.nodes.is_empty(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Stage where a rejected applicant dropped out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectionPoint {
    pub stage: Stage,
    pub code: &'static str,
    pub title: &'static str,
    pub condition_text: String,
}

/// Final decision for a session that reached a terminal stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentInfo>,
    pub final_stage: Stage,
    pub accepted: bool,
    pub decision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<RejectionPoint>,
    pub history: Vec<TransitionRecord>,
    pub path: ExecutionPath,
    pub generated_at: DateTime<Utc>,
}

impl DecisionReport {
    pub fn from_session(session: &AdmissionSession) -> Result<Self, SessionError> {
        let final_stage = session.current_stage();
        let last = match session.history().last() {
            Some(record) if final_stage.is_terminal() => record,
            _ => return Err(SessionError::NotDecided { stage: final_stage }),
        };

        let accepted = final_stage == Stage::Accepted;
        let decision = if accepted {
            last.outcome_label.clone()
        } else {
            "Rejected".to_string()
        };

        let rejected_at = session.rejection().map(|record| RejectionPoint {
            stage: record.from_stage,
            code: record.from_stage.code(),
            title: record.from_stage.title(),
            condition_text: record.condition_text.clone(),
        });

        Ok(Self {
            student: session.student().cloned(),
            final_stage,
            accepted,
            decision,
            rejected_at,
            history: session.history().to_vec(),
            path: ExecutionPath::from_history(session.history()),
            generated_at: Utc::now(),
        })
    }

    pub fn summary(&self) -> String {
        match &self.rejected_at {
            Some(point) => format!(
                "FINAL DECISION: {} at {}: {} ({})",
                self.decision, point.code, point.title, point.condition_text
            ),
            None => format!("FINAL DECISION: {}", self.decision),
        }
    }
}
