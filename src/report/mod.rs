pub mod json;
pub mod md;

use crate::error::WellnessError;
use crate::types::report::{
    BurnoutAssessment, Dashboard, FocusReport, TeamHealthReport, WellnessSuggestions,
};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    TeamHealth(&'a TeamHealthReport),
    Focus(&'a FocusReport),
    Suggestions(&'a WellnessSuggestions),
    Burnout(&'a BurnoutAssessment),
    Dashboard(&'a Dashboard),
}

pub fn render(view: View<'_>, format: OutputFormat) -> Result<String, WellnessError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(WellnessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}
