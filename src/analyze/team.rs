use crate::analyze::degraded;
use crate::source::SnapshotProvider;
use crate::types::report::{Outcome, TaskLoad, TeamMetrics};
use crate::types::snapshot::{round_tenths, TeamSnapshot, WorkloadSnapshot};

pub fn summarize(team: &TeamSnapshot) -> TeamMetrics {
    let average = if team.team_size == 0 {
        0.0
    } else {
        round_tenths(f64::from(team.total_issues) / f64::from(team.team_size))
    };
    TeamMetrics {
        total_issues: team.total_issues,
        high_priority_count: team.high_priority_count,
        team_size: team.team_size,
        average_issues_per_member: average,
    }
}

pub fn task_load(workload: &WorkloadSnapshot) -> TaskLoad {
    TaskLoad {
        task_count: workload.task_count,
        total_story_points: workload.total_story_points,
        average_per_sprint: workload.average_per_sprint(),
    }
}

pub fn assess(provider: &dyn SnapshotProvider) -> Outcome<TeamMetrics> {
    match provider.team() {
        Ok(team) => Outcome::Scored(summarize(&team)),
        Err(e) => degraded("team metrics", e, summarize(&TeamSnapshot::default())),
    }
}

pub fn assess_task_load(
    provider: &dyn SnapshotProvider,
    account: Option<&str>,
) -> Outcome<TaskLoad> {
    match provider.workload(account) {
        Ok(workload) => Outcome::Scored(task_load(&workload)),
        Err(e) => degraded("task load", e, task_load(&WorkloadSnapshot::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::Offline;

    #[test]
    fn average_per_member_rounds_to_one_decimal() {
        let metrics = summarize(&TeamSnapshot {
            total_issues: 45,
            high_priority_count: 8,
            team_size: 6,
        });
        assert_eq!(metrics.average_issues_per_member, 7.5);

        let metrics = summarize(&TeamSnapshot {
            total_issues: 10,
            high_priority_count: 0,
            team_size: 3,
        });
        assert_eq!(metrics.average_issues_per_member, 3.3);
    }

    #[test]
    fn empty_team_has_zero_average() {
        let metrics = summarize(&TeamSnapshot {
            total_issues: 12,
            high_priority_count: 2,
            team_size: 0,
        });
        assert_eq!(metrics.average_issues_per_member, 0.0);
        assert_eq!(metrics.total_issues, 12);
    }

    #[test]
    fn task_load_carries_sprint_average_when_known() {
        let load = task_load(&WorkloadSnapshot {
            task_count: 8,
            total_story_points: 21,
            sprint_count: Some(1),
            ..WorkloadSnapshot::default()
        });
        assert_eq!(load.average_per_sprint, Some(8.0));
        assert_eq!(load.total_story_points, 21);
    }

    #[test]
    fn offline_source_degrades_both_summaries() {
        let team = assess(&Offline);
        assert!(team.is_degraded());
        assert_eq!(team.value().team_size, 0);

        let load = assess_task_load(&Offline, Some("alice"));
        assert!(load.is_degraded());
        assert_eq!(load.value().task_count, 0);
        assert_eq!(load.value().average_per_sprint, None);
    }
}
