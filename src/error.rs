/// Errors raised by a browser session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to connect to WebDriver at {endpoint}: {message}")]
    Connect { endpoint: String, message: String },

    #[error("failed to navigate to {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("timed out after {secs}s waiting for {url} to go idle")]
    Timeout { url: String, secs: u64 },

    #[error("script execution failed on {url}: {message}")]
    Script { url: String, message: String },

    #[error("failed to capture page source: {0}")]
    Capture(String),

    #[error("failed to close session: {0}")]
    Close(String),
}

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    #[error("browser session error: {0}")]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
