use thiserror::Error;

/// Errors raised while loading or validating shading configuration.
///
/// The geometry itself never fails: out-of-range sun angles and degenerate
/// shapes simply produce no shadow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid shade configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
