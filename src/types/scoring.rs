use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    // Clamp first, then round.
    pub fn from_real(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Score(value.clamp(0.0, f64::from(Self::MAX.0)).round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Critical,
    Warning,
    Healthy,
    Unknown,
}

impl HealthStatus {
    pub const CRITICAL_BELOW: f64 = 30.0;
    pub const WARNING_BELOW: f64 = 60.0;

    // Lower bounds are strict: 30 is warning, 60 is healthy.
    pub fn from_score(score: f64) -> Self {
        if score < Self::CRITICAL_BELOW {
            HealthStatus::Critical
        } else if score < Self::WARNING_BELOW {
            HealthStatus::Warning
        } else {
            HealthStatus::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Critical => "critical",
            HealthStatus::Warning => "warning",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: Score) -> Self {
        if score.value() >= 70 {
            ScoreBand::Good
        } else if score.value() >= 40 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_and_rounds() {
        assert_eq!(Score::from_real(-40.0), Score::MIN);
        assert_eq!(Score::from_real(1_000.0), Score::MAX);
        assert_eq!(Score::from_real(62.22).value(), 62);
        assert_eq!(Score::from_real(62.5).value(), 63);
        assert_eq!(Score::from_real(f64::NAN), Score::MIN);
    }

    #[test]
    fn health_status_boundaries_are_strict_below() {
        assert_eq!(HealthStatus::from_score(29.99), HealthStatus::Critical);
        assert_eq!(HealthStatus::from_score(30.0), HealthStatus::Warning);
        assert_eq!(HealthStatus::from_score(59.99), HealthStatus::Warning);
        assert_eq!(HealthStatus::from_score(60.0), HealthStatus::Healthy);
    }

    #[test]
    fn health_status_tiers_cover_every_score() {
        for raw in 0..=100 {
            let status = HealthStatus::from_score(f64::from(raw));
            assert_ne!(status, HealthStatus::Unknown);
        }
    }

    #[test]
    fn risk_levels_are_ordered_and_serialize_lowercase() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::High.as_str(), "high");
        let json = serde_json::to_string(&RiskLevel::Medium).expect("risk should serialize");
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(ScoreBand::of(Score::from_real(70.0)), ScoreBand::Good);
        assert_eq!(ScoreBand::of(Score::from_real(69.0)), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(Score::from_real(40.0)), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(Score::from_real(39.0)), ScoreBand::Poor);
    }
}
