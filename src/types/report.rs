use crate::types::scoring::{HealthStatus, RiskLevel, Score};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Scored(T),
    Degraded { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Outcome::Scored(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Scored(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            Outcome::Scored(_) => None,
            Outcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Scored(value) => Outcome::Scored(f(value)),
            Outcome::Degraded { value, reason } => Outcome::Degraded {
                value: f(value),
                reason,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHealthReport {
    pub status: HealthStatus,
    pub health_score: Score,
    pub metrics: TeamHealthMetrics,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHealthMetrics {
    pub total_issues: u32,
    pub done_issues: u32,
    pub in_progress: u32,
    pub blocked: u32,
    pub completion_rate: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusReport {
    pub title: String,
    pub completed_count: u32,
    pub active_count: u32,
    pub completion_rate: Score,
    pub focus_score: Score,
    pub estimated_hours: u32,
    pub high_priority_completed: u32,
    pub insights: Vec<String>,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSuggestions {
    pub suggestions: Vec<String>,
    pub metrics: WorkloadMetrics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadMetrics {
    pub task_count: u32,
    pub high_priority_count: u32,
    pub in_progress_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnoutAssessment {
    pub risk_level: RiskLevel,
    pub burnout_score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusScoreSummary {
    pub focus_score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_issues: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLoad {
    pub task_count: u32,
    pub total_story_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_per_sprint: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    pub total_issues: u32,
    pub high_priority_count: u32,
    pub team_size: u32,
    pub average_issues_per_member: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub generated_at: String,
    pub focus: FocusScoreSummary,
    pub workload: TaskLoad,
    pub burnout: BurnoutAssessment,
    pub team: TeamMetrics,
}
