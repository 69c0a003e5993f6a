use serde::Serialize;
use thiserror::Error;
use waste_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(#[from] waste_db::DbError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Error body returned to API callers. Store and internal failures are
/// reported generically; their detail only goes to the log.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(message) => Self {
                status: 400,
                error: message,
                code: Some("invalid_input".to_string()),
            },
            AppError::NotFound(message) => Self {
                status: 404,
                error: message,
                code: Some("not_found".to_string()),
            },
            AppError::Db(_) | AppError::Io(_) | AppError::Message(_) => {
                tracing::error!(error = %err, "internal error");
                Self {
                    status: 500,
                    error: "internal server error".to_string(),
                    code: None,
                }
            }
        }
    }
}
