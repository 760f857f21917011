use crate::report::View;
use crate::types::report::{
    BurnoutAssessment, Dashboard, FocusReport, TeamHealthReport, WellnessSuggestions,
};
use crate::types::scoring::{RiskLevel, ScoreBand};

pub const BURNOUT_ALERT: &str =
    "Burnout alert: workload suggests high burnout risk. Consider discussing workload with your manager.";

pub fn to_markdown(view: View<'_>) -> String {
    match view {
        View::TeamHealth(report) => team_health(report),
        View::Focus(report) => focus(report),
        View::Suggestions(suggestions) => wellness(suggestions),
        View::Burnout(assessment) => burnout(assessment),
        View::Dashboard(dashboard) => overview(dashboard),
    }
}

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
}

fn team_health(report: &TeamHealthReport) -> String {
    let mut output = String::new();
    output.push_str("# Team Health\n\n");
    output.push_str(&format!(
        "Status: {} (score {})\n\n",
        report.status, report.health_score
    ));
    output.push_str("## Metrics\n\n");
    output.push_str(&format!(
        "- total issues: {}\n- done: {}\n- in progress: {}\n- blocked: {}\n- completion rate: {}%\n\n",
        report.metrics.total_issues,
        report.metrics.done_issues,
        report.metrics.in_progress,
        report.metrics.blocked,
        report.metrics.completion_rate
    ));
    output.push_str("## Recommendations\n\n");
    push_list(&mut output, &report.recommendations);
    output
}

fn focus(report: &FocusReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));
    output.push_str(&format!(
        "Focus score: {} ({})\n\n",
        report.focus_score,
        ScoreBand::of(report.focus_score).as_str()
    ));
    output.push_str(&format!(
        "- period: {}\n- completed: {}\n- active: {}\n- completion rate: {}%\n- estimated hours: {}\n- high-priority completed: {}\n\n",
        report.period,
        report.completed_count,
        report.active_count,
        report.completion_rate,
        report.estimated_hours,
        report.high_priority_completed
    ));
    output.push_str("## Insights\n\n");
    push_list(&mut output, &report.insights);
    output
}

fn wellness(suggestions: &WellnessSuggestions) -> String {
    let mut output = String::new();
    output.push_str("# Wellness Actions\n\n");
    output.push_str(&format!(
        "- tasks: {}\n- high priority: {}\n- in progress: {}\n\n",
        suggestions.metrics.task_count,
        suggestions.metrics.high_priority_count,
        suggestions.metrics.in_progress_count
    ));
    output.push_str("## Suggestions\n\n");
    push_list(&mut output, &suggestions.suggestions);
    output
}

fn burnout(assessment: &BurnoutAssessment) -> String {
    let mut output = String::new();
    output.push_str("# Burnout Risk\n\n");
    output.push_str(&format!(
        "Risk: {} (score {})\n",
        assessment.risk_level.as_str().to_uppercase(),
        assessment.burnout_score
    ));
    if let (Some(issues), Some(comments)) = (assessment.issue_count, assessment.comment_count) {
        output.push_str(&format!("\n- issues: {issues}\n- comments: {comments}\n"));
    }
    output
}

fn overview(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    output.push_str("# Wellness Dashboard\n\n");
    output.push_str(&format!("Generated at: {}\n\n", dashboard.generated_at));
    output.push_str(&format!(
        "- focus score: {} ({})\n",
        dashboard.focus.focus_score,
        ScoreBand::of(dashboard.focus.focus_score).as_str()
    ));
    output.push_str(&format!(
        "- task load: {} tasks, {} story points\n",
        dashboard.workload.task_count, dashboard.workload.total_story_points
    ));
    if let Some(average) = dashboard.workload.average_per_sprint {
        output.push_str(&format!("- average per sprint: {average:.1}\n"));
    }
    output.push_str(&format!(
        "- burnout risk: {} (score {})\n",
        dashboard.burnout.risk_level.as_str().to_uppercase(),
        dashboard.burnout.burnout_score
    ));
    output.push_str(&format!(
        "- team: {} members, {} issues ({} high priority), {:.1} per member\n",
        dashboard.team.team_size,
        dashboard.team.total_issues,
        dashboard.team.high_priority_count,
        dashboard.team.average_issues_per_member
    ));
    if dashboard.burnout.risk_level == RiskLevel::High {
        output.push_str(&format!("\n> {BURNOUT_ALERT}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{advisor, burnout, focus, team, team_health};
    use crate::types::config::BurnoutPolicy;
    use crate::types::scoring::Score;
    use crate::types::snapshot::{
        ActivitySnapshot, FocusSnapshot, Period, TeamSnapshot, WorkloadSnapshot,
    };

    #[test]
    fn markdown_team_health_contains_sections() {
        let rendered = to_markdown(View::TeamHealth(&team_health::neutral()));
        assert!(rendered.contains("# Team Health"));
        assert!(rendered.contains("Status: unknown (score 0)"));
        assert!(rendered.contains("## Recommendations\n\n- none"));
    }

    #[test]
    fn markdown_focus_shows_band_and_insights_in_order() {
        let report = focus::generate(
            &FocusSnapshot {
                completed_count: 12,
                active_count: 8,
                high_priority_completed: 6,
            },
            Period::default(),
        );
        let rendered = to_markdown(View::Focus(&report));
        assert!(rendered.contains("# Focus Report - Last 7 Days"));
        assert!(rendered.contains("Focus score: 90 (good)"));
        let productivity = rendered.find("Great productivity").expect("productivity insight");
        let priority = rendered.find("high-priority items").expect("priority insight");
        assert!(productivity < priority);
    }

    #[test]
    fn markdown_burnout_upper_cases_risk() {
        let assessment = burnout::classify(
            &ActivitySnapshot {
                issue_count: 32,
                comment_count: 28,
            },
            &BurnoutPolicy::default(),
        );
        let rendered = to_markdown(View::Burnout(&assessment));
        assert!(rendered.contains("Risk: MEDIUM (score 46)"));
        assert!(rendered.contains("- comments: 28"));
    }

    fn dashboard_with(risk_level: RiskLevel) -> Dashboard {
        Dashboard {
            generated_at: "2026-01-05T09:00:00+00:00".to_string(),
            focus: focus::neutral_summary(),
            workload: team::task_load(&WorkloadSnapshot::default()),
            burnout: BurnoutAssessment {
                risk_level,
                burnout_score: Score::from_real(85.0),
                issue_count: None,
                comment_count: None,
            },
            team: team::summarize(&TeamSnapshot::default()),
        }
    }

    #[test]
    fn markdown_dashboard_alerts_only_on_high_burnout() {
        let rendered = to_markdown(View::Dashboard(&dashboard_with(RiskLevel::High)));
        assert!(rendered.contains("# Wellness Dashboard"));
        assert!(rendered.contains("- burnout risk: HIGH (score 85)"));
        assert!(rendered.contains(BURNOUT_ALERT));

        let rendered = to_markdown(View::Dashboard(&dashboard_with(RiskLevel::Medium)));
        assert!(!rendered.contains(BURNOUT_ALERT));
    }

    #[test]
    fn markdown_suggestions_list_messages() {
        let suggestions = advisor::suggest(&WorkloadSnapshot {
            task_count: 20,
            ..WorkloadSnapshot::default()
        });
        let rendered = to_markdown(View::Suggestions(&suggestions));
        assert!(rendered.contains("# Wellness Actions"));
        assert!(rendered.contains(&format!("- {}", advisor::HIGH_WORKLOAD)));
    }
}
