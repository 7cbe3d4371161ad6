//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Descriptive metadata for a UI context (declared title, label) is absent
    #[error("UI context metadata unavailable: {0}")]
    MetadataUnavailable(String),

    /// Failed to create WebView
    #[error("WebView creation failed: {0}")]
    WebViewCreation(String),

    /// WebView operation failed
    #[error("WebView operation failed: {0}")]
    WebViewOperation(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
