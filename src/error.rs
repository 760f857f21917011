use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum WellnessError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("snapshot unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("invalid payload for {function}: {reason}")]
    InvalidPayload { function: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WellnessError>;
