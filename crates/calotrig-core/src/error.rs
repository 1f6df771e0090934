use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaloError>;

#[derive(Debug, Error)]
pub enum CaloError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("link format error: {0}")]
    LinkFormat(String),

    #[error("config format error: {0}")]
    ConfigFormat(String),

    #[error("capture format error: {0}")]
    CaptureFormat(String),
}
