use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tracker config: {0}")]
    InvalidConfig(&'static str),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}
