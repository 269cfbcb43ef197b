use thiserror::Error;

/// Failure of an underlying store operation.
///
/// The `Display` text is surfaced verbatim in 500 responses, so it stays the driver's
/// own message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[cfg(feature = "sqlite")]
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
