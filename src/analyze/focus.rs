use crate::analyze::degraded;
use crate::source::SnapshotProvider;
use crate::types::report::{FocusReport, FocusScoreSummary, Outcome};
use crate::types::scoring::Score;
use crate::types::snapshot::{FocusSnapshot, Period};

const PRIORITY_BONUS: f64 = 5.0;
const HEAVY_WIP_ABOVE: u32 = 10;
const HEAVY_WIP_PENALTY: f64 = 20.0;
const HOURS_PER_TASK: u32 = 2;

pub const LOW_WIP: &str = "🎯 Excellent task management. Minimal work in progress.";
pub const HIGH_WIP: &str = "📊 High number of active tasks. Consider consolidating priorities.";
pub const LOW_COMPLETION: &str = "⚠️ Lower completion rate. Focus on finishing current tasks.";
pub const PRIORITY_EXCELLENT: &str = "🔥 Excellent work on high-priority items!";
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze data";

pub fn completion_rate(snapshot: &FocusSnapshot) -> f64 {
    let denominator = u64::from(snapshot.completed_count) + u64::from(snapshot.active_count);
    if denominator == 0 {
        return 0.0;
    }
    snapshot.completed_count as f64 / denominator as f64 * 100.0
}

fn raw_focus_score(snapshot: &FocusSnapshot, completion: f64) -> f64 {
    let wip_penalty = if snapshot.active_count > HEAVY_WIP_ABOVE {
        HEAVY_WIP_PENALTY
    } else {
        0.0
    };
    completion + PRIORITY_BONUS * f64::from(snapshot.high_priority_completed) - wip_penalty
}

pub fn focus_score(snapshot: &FocusSnapshot) -> Score {
    Score::from_real(raw_focus_score(snapshot, completion_rate(snapshot)))
}

// Order matters: productivity, then WIP, then priority.
fn insights(snapshot: &FocusSnapshot, period: Period) -> Vec<String> {
    let mut insights = Vec::new();

    let completed = snapshot.completed_count;
    if completed > 10 {
        insights.push(format!(
            "🚀 Great productivity! Completed {completed} tasks in the last {}.",
            period.label()
        ));
    } else if completed > 5 {
        insights.push(format!(
            "✅ Steady progress with {completed} completed tasks."
        ));
    } else {
        insights.push(LOW_COMPLETION.to_string());
    }

    if snapshot.active_count < 5 {
        insights.push(LOW_WIP.to_string());
    } else if snapshot.active_count > 15 {
        insights.push(HIGH_WIP.to_string());
    }

    if snapshot.high_priority_completed > 5 {
        insights.push(PRIORITY_EXCELLENT.to_string());
    }

    insights
}

pub fn generate(snapshot: &FocusSnapshot, period: Period) -> FocusReport {
    let completion = completion_rate(snapshot);
    let report = FocusReport {
        title: format!("Focus Report - Last {} Days", period.days),
        completed_count: snapshot.completed_count,
        active_count: snapshot.active_count,
        completion_rate: Score::from_real(completion),
        focus_score: Score::from_real(raw_focus_score(snapshot, completion)),
        estimated_hours: snapshot.completed_count.saturating_mul(HOURS_PER_TASK),
        high_priority_completed: snapshot.high_priority_completed,
        insights: insights(snapshot, period),
        period: period.label(),
    };
    tracing::debug!(
        focus_score = %report.focus_score,
        insights = report.insights.len(),
        "generated focus report"
    );
    report
}

pub fn summarize(snapshot: &FocusSnapshot) -> FocusScoreSummary {
    FocusScoreSummary {
        focus_score: focus_score(snapshot),
        total_issues: Some(snapshot.completed_count.saturating_add(snapshot.active_count)),
        completed_count: Some(snapshot.completed_count),
    }
}

pub fn neutral(period: Period) -> FocusReport {
    FocusReport {
        title: "Focus Report - Unable to Generate".to_string(),
        completed_count: 0,
        active_count: 0,
        completion_rate: Score::MIN,
        focus_score: Score::MIN,
        estimated_hours: 0,
        high_priority_completed: 0,
        insights: vec![UNABLE_TO_ANALYZE.to_string()],
        period: period.label(),
    }
}

pub fn neutral_summary() -> FocusScoreSummary {
    FocusScoreSummary {
        focus_score: Score::MIN,
        total_issues: None,
        completed_count: None,
    }
}

pub fn assess(
    provider: &dyn SnapshotProvider,
    account: Option<&str>,
    period: Period,
) -> Outcome<FocusReport> {
    match provider.focus(account, period) {
        Ok(snapshot) => Outcome::Scored(generate(&snapshot, period)),
        Err(e) => degraded("focus report", e, neutral(period)),
    }
}

pub fn assess_score(
    provider: &dyn SnapshotProvider,
    account: Option<&str>,
) -> Outcome<FocusScoreSummary> {
    match provider.focus(account, Period::default()) {
        Ok(snapshot) => Outcome::Scored(summarize(&snapshot)),
        Err(e) => degraded("focus score", e, neutral_summary()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::Offline;

    fn focus(completed: u32, active: u32, high_priority: u32) -> FocusSnapshot {
        FocusSnapshot {
            completed_count: completed,
            active_count: active,
            high_priority_completed: high_priority,
        }
    }

    #[test]
    fn weekly_report_matches_expected_figures() {
        let report = generate(&focus(12, 8, 5), Period::default());
        assert_eq!(report.title, "Focus Report - Last 7 Days");
        assert_eq!(report.period, "7 days");
        assert_eq!(report.completion_rate.value(), 60);
        assert_eq!(report.focus_score.value(), 85);
        assert_eq!(report.estimated_hours, 24);
    }

    #[test]
    fn middle_wip_band_produces_no_insight() {
        let report = generate(&focus(12, 8, 5), Period::default());
        assert_eq!(report.insights.len(), 1);
        assert!(report.insights[0].starts_with("🚀 Great productivity! Completed 12 tasks"));

        let report = generate(&focus(12, 8, 6), Period::default());
        assert_eq!(report.insights.len(), 2);
        assert!(report.insights[0].starts_with("🚀"));
        assert_eq!(report.insights[1], PRIORITY_EXCELLENT);
    }

    #[test]
    fn insights_keep_productivity_wip_priority_order() {
        let report = generate(&focus(3, 20, 9), Period::new(14));
        assert_eq!(
            report.insights,
            vec![
                LOW_COMPLETION.to_string(),
                HIGH_WIP.to_string(),
                PRIORITY_EXCELLENT.to_string(),
            ]
        );

        let report = generate(&focus(7, 2, 0), Period::default());
        assert_eq!(
            report.insights,
            vec![
                "✅ Steady progress with 7 completed tasks.".to_string(),
                LOW_WIP.to_string(),
            ]
        );
    }

    #[test]
    fn empty_window_scores_zero() {
        let report = generate(&focus(0, 0, 0), Period::default());
        assert_eq!(report.completion_rate, Score::MIN);
        assert_eq!(report.focus_score, Score::MIN);
        assert_eq!(report.insights[0], LOW_COMPLETION);
        assert_eq!(report.insights[1], LOW_WIP);
    }

    #[test]
    fn focus_score_never_drops_with_more_priority_work() {
        for active in [0, 5, 10, 11, 30] {
            let mut previous = Score::MIN;
            for high_priority in 0..30 {
                let current = focus_score(&focus(6, active, high_priority));
                assert!(current >= previous);
                previous = current;
            }
        }
    }

    #[test]
    fn heavy_wip_costs_twenty_points() {
        // 10 done of 20 vs 10 done of 21: the second also crosses the WIP line.
        assert_eq!(focus_score(&focus(10, 10, 0)).value(), 50);
        assert_eq!(focus_score(&focus(10, 11, 0)).value(), 28);
        assert_eq!(focus_score(&focus(0, 11, 1)), Score::MIN);
    }

    #[test]
    fn focus_score_is_clamped_to_hundred() {
        assert_eq!(focus_score(&focus(20, 0, 20)), Score::MAX);
    }

    #[test]
    fn summary_reports_window_totals() {
        let summary = summarize(&focus(12, 8, 5));
        assert_eq!(summary.focus_score.value(), 85);
        assert_eq!(summary.total_issues, Some(20));
        assert_eq!(summary.completed_count, Some(12));
    }

    #[test]
    fn assess_degrades_to_failure_shell() {
        let outcome = assess(&Offline, Some("alice"), Period::new(30));
        assert!(outcome.is_degraded());
        let report = outcome.into_value();
        assert_eq!(report.title, "Focus Report - Unable to Generate");
        assert_eq!(report.insights, vec![UNABLE_TO_ANALYZE.to_string()]);
        assert_eq!(report.period, "30 days");
        assert_eq!(report.focus_score, Score::MIN);
    }
}
