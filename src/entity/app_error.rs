#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Validation(String),

    #[error("A swap is already being processed")]
    SwapInProgress,

    #[error("Prices are already being refreshed")]
    RefreshInProgress,

    #[error("No prices loaded yet, use /refresh first")]
    CatalogUnavailable,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}
