use thiserror::Error;

/// GSC統一エラー型
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("Scheme not found: {0}")]
    SchemeNotFound(u32),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemeError>;
