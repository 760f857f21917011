use crate::analyze::degraded;
use crate::source::SnapshotProvider;
use crate::types::report::{Outcome, TeamHealthMetrics, TeamHealthReport};
use crate::types::scoring::{HealthStatus, Score};
use crate::types::snapshot::IssueSnapshot;

const BLOCKED_PENALTY: f64 = 10.0;
const BLOCKED_ALERT_ABOVE: u32 = 3;

pub const REDUCE_WORKLOAD: &str =
    "High task volume detected. Consider reducing workload or getting team support.";
pub const RESOLUTION_SESSION: &str =
    "Multiple blocked items found. Schedule a resolution session.";
pub const BELOW_OPTIMAL: &str = "Task completion rate is below optimal. Review priorities.";

// Capped at 100 so more done than total cannot offset the blocked penalty.
pub fn completion_rate(snapshot: &IssueSnapshot) -> f64 {
    if snapshot.total_issues == 0 {
        return 0.0;
    }
    (f64::from(snapshot.done_issues) / f64::from(snapshot.total_issues) * 100.0).min(100.0)
}

pub fn score(snapshot: &IssueSnapshot) -> TeamHealthReport {
    let completion = completion_rate(snapshot);
    let raw = (completion - BLOCKED_PENALTY * f64::from(snapshot.blocked_issues)).clamp(0.0, 100.0);
    let status = HealthStatus::from_score(raw);

    let mut recommendations = Vec::new();
    match status {
        HealthStatus::Critical => {
            recommendations.push(REDUCE_WORKLOAD.to_string());
            recommendations.push(RESOLUTION_SESSION.to_string());
        }
        HealthStatus::Warning => recommendations.push(BELOW_OPTIMAL.to_string()),
        HealthStatus::Healthy | HealthStatus::Unknown => {}
    }
    if snapshot.blocked_issues > BLOCKED_ALERT_ABOVE {
        recommendations.push(format!(
            "{} blocked issues detected. Host a quick blitz session to unblock.",
            snapshot.blocked_issues
        ));
    }

    let report = TeamHealthReport {
        status,
        health_score: Score::from_real(raw),
        metrics: TeamHealthMetrics {
            total_issues: snapshot.total_issues,
            done_issues: snapshot.done_issues,
            in_progress: snapshot.in_progress_issues,
            blocked: snapshot.blocked_issues,
            completion_rate: Score::from_real(completion),
        },
        recommendations,
    };
    tracing::debug!(
        status = %report.status,
        health_score = %report.health_score,
        "scored team health"
    );
    report
}

pub fn neutral() -> TeamHealthReport {
    TeamHealthReport {
        status: HealthStatus::Unknown,
        health_score: Score::MIN,
        metrics: TeamHealthMetrics::default(),
        recommendations: Vec::new(),
    }
}

pub fn assess(provider: &dyn SnapshotProvider) -> Outcome<TeamHealthReport> {
    match provider.issues() {
        Ok(snapshot) => Outcome::Scored(score(&snapshot)),
        Err(e) => degraded("team health", e, neutral()),
    }
}
