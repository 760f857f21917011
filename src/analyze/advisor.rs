use crate::analyze::degraded;
use crate::source::SnapshotProvider;
use crate::types::report::{Outcome, WellnessSuggestions, WorkloadMetrics};
use crate::types::snapshot::WorkloadSnapshot;

pub const HIGH_WORKLOAD: &str =
    "🚨 High workload detected. Consider delegating or breaking down large tasks.";
pub const MODERATE_WORKLOAD: &str = "⚠️ Moderate workload. Plan time blocks to maintain focus.";
pub const BALANCED_WORKLOAD: &str =
    "✅ Balanced workload. Maintain this pace for optimal performance.";
pub const MANY_PRIORITIES: &str =
    "🔥 Multiple high-priority tasks. Create a \"power hours\" block to tackle them.";
pub const SOME_PRIORITIES: &str =
    "⚡ Some high-priority tasks ahead. Tackle them during your peak hours.";
pub const TOO_MUCH_WIP: &str =
    "🎯 You have multiple tasks in progress. Consider \"finishing\" one before starting new ones.";
pub const ALL_GOOD: &str = "💚 Team wellness looks good! Keep up the balanced pace.";
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze current workload";

fn workload_tier(task_count: u32) -> &'static str {
    match task_count {
        n if n > 15 => HIGH_WORKLOAD,
        n if n > 8 => MODERATE_WORKLOAD,
        _ => BALANCED_WORKLOAD,
    }
}

fn priority_tier(high_priority_count: u32) -> Option<&'static str> {
    match high_priority_count {
        n if n > 5 => Some(MANY_PRIORITIES),
        n if n > 2 => Some(SOME_PRIORITIES),
        _ => None,
    }
}

pub fn suggest(workload: &WorkloadSnapshot) -> WellnessSuggestions {
    let mut suggestions = vec![workload_tier(workload.task_count).to_string()];
    if let Some(message) = priority_tier(workload.high_priority_count) {
        suggestions.push(message.to_string());
    }
    if workload.in_progress_count > 3 {
        suggestions.push(TOO_MUCH_WIP.to_string());
    }
    if suggestions.is_empty() {
        suggestions.push(ALL_GOOD.to_string());
    }

    WellnessSuggestions {
        suggestions,
        metrics: WorkloadMetrics {
            task_count: workload.task_count,
            high_priority_count: workload.high_priority_count,
            in_progress_count: workload.in_progress_count,
        },
    }
}

pub fn neutral() -> WellnessSuggestions {
    WellnessSuggestions {
        suggestions: vec![UNABLE_TO_ANALYZE.to_string()],
        metrics: WorkloadMetrics::default(),
    }
}

pub fn assess(provider: &dyn SnapshotProvider) -> Outcome<WellnessSuggestions> {
    match provider.workload(None) {
        Ok(workload) => Outcome::Scored(suggest(&workload)),
        Err(e) => degraded("wellness suggestions", e, neutral()),
    }
}
