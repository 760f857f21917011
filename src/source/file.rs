use crate::error::{Result, WellnessError};
use crate::source::SnapshotProvider;
use crate::types::snapshot::{
    ActivitySnapshot, FocusSnapshot, IssueSnapshot, Period, TeamSnapshot, WorkloadSnapshot,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SnapshotSet {
    pub issues: Option<IssueSnapshot>,
    pub workload: Option<WorkloadSnapshot>,
    pub focus: Option<FocusSnapshot>,
    pub activity: Option<ActivitySnapshot>,
    pub team: Option<TeamSnapshot>,
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountSnapshots>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountSnapshots {
    pub workload: Option<WorkloadSnapshot>,
    pub focus: Option<FocusSnapshot>,
    pub activity: Option<ActivitySnapshot>,
}

pub fn load_snapshots(path: &Path) -> Result<SnapshotSet> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let set: SnapshotSet = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    tracing::debug!(path = %path.display(), "loaded snapshot set");
    Ok(set)
}

impl SnapshotSet {
    fn account(&self, account: Option<&str>) -> Option<&AccountSnapshots> {
        let id = account?;
        let found = self.accounts.get(id);
        if found.is_none() {
            tracing::debug!(account = id, "no account snapshots, using team-level data");
        }
        found
    }
}

fn required<T: Copy>(section: Option<T>, name: &str) -> Result<T> {
    section.ok_or_else(|| WellnessError::SnapshotUnavailable(format!("no {name} snapshot")))
}

impl SnapshotProvider for SnapshotSet {
    fn issues(&self) -> Result<IssueSnapshot> {
        required(self.issues, "issues")
    }

    fn workload(&self, account: Option<&str>) -> Result<WorkloadSnapshot> {
        let scoped = self.account(account).and_then(|entry| entry.workload);
        required(scoped.or(self.workload), "workload")
    }

    fn focus(&self, account: Option<&str>, period: Period) -> Result<FocusSnapshot> {
        let scoped = self.account(account).and_then(|entry| entry.focus);
        required(scoped.or(self.focus), &format!("focus ({})", period.label()))
    }

    fn activity(&self, account: Option<&str>) -> Result<ActivitySnapshot> {
        let scoped = self.account(account).and_then(|entry| entry.activity);
        required(scoped.or(self.activity), "activity")
    }

    fn team(&self) -> Result<TeamSnapshot> {
        required(self.team, "team")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[issues]
totalIssues = 45
doneIssues = 28
inProgressIssues = 12
blockedIssues = 3

[workload]
taskCount = 8
totalStoryPoints = 21
highPriorityCount = 2
inProgressCount = 3

[team]
totalIssues = 45
highPriorityCount = 8
teamSize = 6

[accounts.alice.workload]
taskCount = 17
totalStoryPoints = 40
highPriorityCount = 6
inProgressCount = 5
"#;

    #[test]
    fn account_entry_overrides_team_section() {
        let set: SnapshotSet = toml::from_str(SAMPLE).expect("sample should parse");
        let team = set.workload(None).expect("team workload exists");
        let alice = set.workload(Some("alice")).expect("alice workload exists");
        let bob = set.workload(Some("bob")).expect("bob falls back to team workload");
        assert_eq!(team.task_count, 8);
        assert_eq!(alice.task_count, 17);
        assert_eq!(bob, team);
    }

    #[test]
    fn missing_section_is_unavailable() {
        let set: SnapshotSet = toml::from_str(SAMPLE).expect("sample should parse");
        assert!(matches!(
            set.activity(Some("alice")),
            Err(WellnessError::SnapshotUnavailable(_))
        ));
        assert!(matches!(
            set.focus(None, Period::default()),
            Err(WellnessError::SnapshotUnavailable(_))
        ));
    }

    #[test]
    fn load_snapshots_reads_toml_and_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let toml_path = dir.path().join("snapshots.toml");
        fs::write(&toml_path, SAMPLE).expect("toml snapshot should write");
        let json_path = dir.path().join("snapshots.json");
        fs::write(
            &json_path,
            r#"{"activity": {"issueCount": 32, "commentCount": 28}}"#,
        )
        .expect("json snapshot should write");

        let from_toml = load_snapshots(&toml_path).expect("toml should load");
        assert_eq!(
            from_toml.issues().expect("issues exist").blocked_issues,
            3
        );

        let from_json = load_snapshots(&json_path).expect("json should load");
        assert_eq!(
            from_json.activity(None).expect("activity exists").comment_count,
            28
        );
    }

    #[test]
    fn load_snapshots_rejects_unknown_sections() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("snapshots.toml");
        fs::write(&path, "[sprints]\ncount = 2\n").expect("snapshot should write");
        assert!(matches!(load_snapshots(&path), Err(WellnessError::Toml(_))));
    }
}
