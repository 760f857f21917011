use crate::analyze::degraded;
use crate::source::SnapshotProvider;
use crate::types::config::BurnoutPolicy;
use crate::types::report::{BurnoutAssessment, Outcome};
use crate::types::scoring::{RiskLevel, Score};
use crate::types::snapshot::ActivitySnapshot;

// score = clamp(round(issue_weight * issues + comment_weight * comments), 0, 100)
pub fn burnout_score(activity: &ActivitySnapshot, policy: &BurnoutPolicy) -> Score {
    let raw = policy.issue_weight * f64::from(activity.issue_count)
        + policy.comment_weight * f64::from(activity.comment_count);
    Score::from_real(raw)
}

pub fn risk_level(score: Score, policy: &BurnoutPolicy) -> RiskLevel {
    if score.value() >= policy.high_threshold {
        RiskLevel::High
    } else if score.value() >= policy.medium_threshold {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn classify(activity: &ActivitySnapshot, policy: &BurnoutPolicy) -> BurnoutAssessment {
    let score = burnout_score(activity, policy);
    let assessment = BurnoutAssessment {
        risk_level: risk_level(score, policy),
        burnout_score: score,
        issue_count: Some(activity.issue_count),
        comment_count: Some(activity.comment_count),
    };
    tracing::debug!(
        risk = %assessment.risk_level,
        burnout_score = %assessment.burnout_score,
        "classified burnout risk"
    );
    assessment
}

pub fn neutral() -> BurnoutAssessment {
    BurnoutAssessment {
        risk_level: RiskLevel::Low,
        burnout_score: Score::MIN,
        issue_count: None,
        comment_count: None,
    }
}

pub fn assess(
    provider: &dyn SnapshotProvider,
    account: Option<&str>,
    policy: &BurnoutPolicy,
) -> Outcome<BurnoutAssessment> {
    match provider.activity(account) {
        Ok(activity) => Outcome::Scored(classify(&activity, policy)),
        Err(e) => degraded("burnout risk", e, neutral()),
    }
}
