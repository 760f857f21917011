use crate::analyze::{advisor, burnout, focus, team, team_health};
use crate::error::{Result, WellnessError};
use crate::source::SnapshotProvider;
use crate::types::config::WellnessConfig;
use crate::types::report::{FocusReport, Outcome};
use crate::types::snapshot::{Period, TeamSnapshot, WorkloadSnapshot};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    GetFocusScore,
    GetTaskLoad,
    GetBurnoutRisk,
    GetTeamMetrics,
    AnalyzeTeamHealth,
    GenerateFocusReport,
    SuggestWellnessActions,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::GetFocusScore,
        Function::GetTaskLoad,
        Function::GetBurnoutRisk,
        Function::GetTeamMetrics,
        Function::AnalyzeTeamHealth,
        Function::GenerateFocusReport,
        Function::SuggestWellnessActions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Function::GetFocusScore => "getFocusScore",
            Function::GetTaskLoad => "getTaskLoad",
            Function::GetBurnoutRisk => "getBurnoutRisk",
            Function::GetTeamMetrics => "getTeamMetrics",
            Function::AnalyzeTeamHealth => "analyzeTeamHealth",
            Function::GenerateFocusReport => "generateFocusReport",
            Function::SuggestWellnessActions => "suggestWellnessActions",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountRequest {
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FocusReportRequest {
    pub account_id: Option<String>,
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmptyRequest {}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    FocusScore(AccountRequest),
    TaskLoad(AccountRequest),
    BurnoutRisk(AccountRequest),
    TeamMetrics(EmptyRequest),
    TeamHealth(EmptyRequest),
    FocusReport(FocusReportRequest),
    WellnessActions(EmptyRequest),
}

fn parse_payload<T: DeserializeOwned>(function: Function, payload: Value) -> Result<T> {
    let payload = if payload.is_null() {
        Value::Object(Map::new())
    } else {
        payload
    };
    serde_json::from_value(payload).map_err(|e| WellnessError::InvalidPayload {
        function: function.name().to_string(),
        reason: e.to_string(),
    })
}

impl Request {
    pub fn parse(function: Function, payload: Value) -> Result<Self> {
        let request = match function {
            Function::GetFocusScore => Request::FocusScore(parse_payload(function, payload)?),
            Function::GetTaskLoad => Request::TaskLoad(parse_payload(function, payload)?),
            Function::GetBurnoutRisk => Request::BurnoutRisk(parse_payload(function, payload)?),
            Function::GetTeamMetrics => Request::TeamMetrics(parse_payload(function, payload)?),
            Function::AnalyzeTeamHealth => Request::TeamHealth(parse_payload(function, payload)?),
            Function::GenerateFocusReport => {
                let request: FocusReportRequest = parse_payload(function, payload)?;
                if request.days == Some(0) {
                    return Err(WellnessError::InvalidPayload {
                        function: function.name().to_string(),
                        reason: "days must be greater than 0".to_string(),
                    });
                }
                Request::FocusReport(request)
            }
            Function::SuggestWellnessActions => {
                Request::WellnessActions(parse_payload(function, payload)?)
            }
        };
        Ok(request)
    }
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to encode result");
        Value::Object(Map::new())
    })
}

fn report_json(report: &FocusReport) -> Value {
    json!({ "report": to_json(report) })
}

fn execute(
    request: &Request,
    provider: &dyn SnapshotProvider,
    config: &WellnessConfig,
) -> Outcome<Value> {
    match request {
        Request::FocusScore(req) => {
            focus::assess_score(provider, req.account_id.as_deref()).map(|v| to_json(&v))
        }
        Request::TaskLoad(req) => {
            team::assess_task_load(provider, req.account_id.as_deref()).map(|v| to_json(&v))
        }
        Request::BurnoutRisk(req) => burnout::assess(
            provider,
            req.account_id.as_deref(),
            &config.burnout_policy(),
        )
        .map(|v| to_json(&v)),
        Request::TeamMetrics(_) => team::assess(provider).map(|v| to_json(&v)),
        Request::TeamHealth(_) => team_health::assess(provider).map(|v| to_json(&v)),
        Request::FocusReport(req) => {
            let period = Period::new(req.days.unwrap_or_else(|| config.default_days()));
            focus::assess(provider, req.account_id.as_deref(), period).map(|v| report_json(&v))
        }
        Request::WellnessActions(_) => advisor::assess(provider).map(|v| to_json(&v)),
    }
}

fn neutral(function: Function, config: &WellnessConfig) -> Value {
    match function {
        Function::GetFocusScore => to_json(&focus::neutral_summary()),
        Function::GetTaskLoad => to_json(&team::task_load(&WorkloadSnapshot::default())),
        Function::GetBurnoutRisk => to_json(&burnout::neutral()),
        Function::GetTeamMetrics => to_json(&team::summarize(&TeamSnapshot::default())),
        Function::AnalyzeTeamHealth => to_json(&team_health::neutral()),
        Function::GenerateFocusReport => {
            report_json(&focus::neutral(Period::new(config.default_days())))
        }
        Function::SuggestWellnessActions => to_json(&advisor::neutral()),
    }
}

fn unknown(name: &str) -> Outcome<Value> {
    tracing::warn!(function = name, "unknown function requested");
    Outcome::Degraded {
        value: Value::Object(Map::new()),
        reason: format!("unknown function: {name}"),
    }
}

fn rejected(
    function: Function,
    error: WellnessError,
    config: &WellnessConfig,
) -> Outcome<Value> {
    tracing::warn!(function = function.name(), error = %error, "rejected payload");
    Outcome::Degraded {
        value: neutral(function, config),
        reason: error.to_string(),
    }
}

pub fn invoke(
    name: &str,
    payload: Value,
    provider: &dyn SnapshotProvider,
    config: &WellnessConfig,
) -> Outcome<Value> {
    let Some(function) = Function::from_name(name) else {
        return unknown(name);
    };

    match Request::parse(function, payload) {
        Ok(request) => {
            tracing::info!(function = function.name(), "dispatching request");
            execute(&request, provider, config)
        }
        Err(e) => rejected(function, e, config),
    }
}

// Text boundary: a payload that is not JSON is a malformed payload, not an error.
pub fn dispatch(
    name: &str,
    payload: &str,
    provider: &dyn SnapshotProvider,
    config: &WellnessConfig,
) -> Outcome<Value> {
    let Some(function) = Function::from_name(name) else {
        return unknown(name);
    };

    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return invoke(name, Value::Null, provider, config);
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => invoke(name, value, provider, config),
        Err(e) => rejected(
            function,
            WellnessError::InvalidPayload {
                function: function.name().to_string(),
                reason: e.to_string(),
            },
            config,
        ),
    }
}
