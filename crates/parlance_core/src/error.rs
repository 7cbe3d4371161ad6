use thiserror::Error;

/// Errors from the coordinator entry points and configuration.
#[derive(Debug, Error)]
pub enum ParlanceError {
    /// An init entry point ran after the coordinator was already created.
    #[error("locale coordinator already initialized")]
    AlreadyInitialized,

    /// The coordinator was looked up before any init entry point ran.
    #[error("locale coordinator should be initialized first")]
    NotInitialized,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors opening a persistent locale store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}
