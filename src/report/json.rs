use crate::report::View;

pub fn to_json(view: View<'_>) -> Result<String, serde_json::Error> {
    match view {
        View::TeamHealth(report) => serde_json::to_string_pretty(report),
        View::Focus(report) => serde_json::to_string_pretty(report),
        View::Suggestions(suggestions) => serde_json::to_string_pretty(suggestions),
        View::Burnout(assessment) => serde_json::to_string_pretty(assessment),
        View::Dashboard(dashboard) => serde_json::to_string_pretty(dashboard),
    }
}
