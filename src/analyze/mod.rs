pub mod advisor;
pub mod burnout;
pub mod focus;
pub mod team;
pub mod team_health;

use crate::error::WellnessError;
use crate::source::SnapshotProvider;
use crate::types::config::BurnoutPolicy;
use crate::types::report::{Dashboard, Outcome};
use chrono::Utc;

pub(crate) fn degraded<T>(scorer: &str, error: WellnessError, neutral: T) -> Outcome<T> {
    tracing::warn!(scorer, error = %error, "snapshot unavailable, returning neutral result");
    Outcome::Degraded {
        value: neutral,
        reason: error.to_string(),
    }
}

pub fn dashboard(
    provider: &dyn SnapshotProvider,
    account: Option<&str>,
    policy: &BurnoutPolicy,
) -> Outcome<Dashboard> {
    let focus = focus::assess_score(provider, account);
    let workload = team::assess_task_load(provider, account);
    let burnout = burnout::assess(provider, account, policy);
    let team = team::assess(provider);

    let reasons = [
        focus.degraded_reason(),
        workload.degraded_reason(),
        burnout.degraded_reason(),
        team.degraded_reason(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect::<Vec<_>>();

    let dashboard = Dashboard {
        generated_at: Utc::now().to_rfc3339(),
        focus: focus.into_value(),
        workload: workload.into_value(),
        burnout: burnout.into_value(),
        team: team.into_value(),
    };

    if reasons.is_empty() {
        Outcome::Scored(dashboard)
    } else {
        Outcome::Degraded {
            value: dashboard,
            reason: reasons.join("; "),
        }
    }
}
