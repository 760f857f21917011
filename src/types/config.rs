use crate::error::WellnessError;
use crate::types::snapshot::DEFAULT_PERIOD_DAYS;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WellnessConfig {
    pub burnout: Option<BurnoutConfig>,
    pub focus: Option<FocusConfig>,
    pub snapshots: Option<SnapshotsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BurnoutConfig {
    pub issue_weight: Option<f64>,
    pub comment_weight: Option<f64>,
    pub medium_threshold: Option<u8>,
    pub high_threshold: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusConfig {
    pub default_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotsConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnoutPolicy {
    pub issue_weight: f64,
    pub comment_weight: f64,
    pub medium_threshold: u8,
    pub high_threshold: u8,
}

impl Default for BurnoutPolicy {
    fn default() -> Self {
        Self {
            issue_weight: 1.0,
            comment_weight: 0.5,
            medium_threshold: 40,
            high_threshold: 70,
        }
    }
}

impl WellnessConfig {
    pub fn burnout_policy(&self) -> BurnoutPolicy {
        let defaults = BurnoutPolicy::default();
        match &self.burnout {
            Some(burnout) => BurnoutPolicy {
                issue_weight: burnout.issue_weight.unwrap_or(defaults.issue_weight),
                comment_weight: burnout.comment_weight.unwrap_or(defaults.comment_weight),
                medium_threshold: burnout
                    .medium_threshold
                    .unwrap_or(defaults.medium_threshold),
                high_threshold: burnout.high_threshold.unwrap_or(defaults.high_threshold),
            },
            None => defaults,
        }
    }

    pub fn default_days(&self) -> u32 {
        self.focus
            .as_ref()
            .and_then(|focus| focus.default_days)
            .unwrap_or(DEFAULT_PERIOD_DAYS)
    }

    pub fn snapshots_path(&self) -> Option<&PathBuf> {
        self.snapshots
            .as_ref()
            .and_then(|snapshots| snapshots.path.as_ref())
    }

    pub fn validate(&self) -> Result<(), WellnessError> {
        let policy = self.burnout_policy();
        for (key, weight) in [
            ("issue_weight", policy.issue_weight),
            ("comment_weight", policy.comment_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(WellnessError::ConfigParse(format!(
                    "burnout.{key} must be a non-negative number (found {weight})"
                )));
            }
        }

        if policy.medium_threshold == 0 {
            return Err(WellnessError::ConfigParse(
                "burnout.medium_threshold must be greater than 0".to_string(),
            ));
        }
        if policy.medium_threshold >= policy.high_threshold {
            return Err(WellnessError::ConfigParse(format!(
                "burnout.medium_threshold ({}) must be below burnout.high_threshold ({})",
                policy.medium_threshold, policy.high_threshold
            )));
        }
        if policy.high_threshold > 100 {
            return Err(WellnessError::ConfigParse(
                "burnout.high_threshold must be at most 100".to_string(),
            ));
        }

        if self.default_days() == 0 {
            return Err(WellnessError::ConfigParse(
                "focus.default_days must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
