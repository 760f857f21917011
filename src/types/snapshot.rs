use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IssueSnapshot {
    pub total_issues: u32,
    pub done_issues: u32,
    pub in_progress_issues: u32,
    pub blocked_issues: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WorkloadSnapshot {
    pub task_count: u32,
    pub total_story_points: u32,
    pub high_priority_count: u32,
    pub in_progress_count: u32,
    pub sprint_count: Option<u32>,
}

impl WorkloadSnapshot {
    pub fn average_per_sprint(&self) -> Option<f64> {
        match self.sprint_count {
            Some(sprints) if sprints > 0 => {
                Some(round_tenths(f64::from(self.task_count) / f64::from(sprints)))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FocusSnapshot {
    pub completed_count: u32,
    pub active_count: u32,
    pub high_priority_completed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ActivitySnapshot {
    pub issue_count: u32,
    pub comment_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TeamSnapshot {
    pub total_issues: u32,
    pub high_priority_count: u32,
    pub team_size: u32,
}

pub const DEFAULT_PERIOD_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub days: u32,
}

impl Period {
    pub fn new(days: u32) -> Self {
        Self { days: days.max(1) }
    }

    pub fn label(&self) -> String {
        format!("{} days", self.days)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self {
            days: DEFAULT_PERIOD_DAYS,
        }
    }
}

pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
