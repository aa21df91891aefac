use inquire::InquireError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpendlogError {
    #[error("Invalid value: {0}")]
    Parse(String),
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("No record with id {0}")]
    RecordNotFound(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record file error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] InquireError),
}
