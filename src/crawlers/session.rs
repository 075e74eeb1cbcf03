use crate::error::SessionError;
use async_trait::async_trait;

/// An open browser tab the pipeline drives one page at a time
#[async_trait]
pub trait PageSession: Send {
    /// Load `url` and wait until the page's network activity settles
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError>;

    /// Rendered markup of the current page, after client-side scripts ran
    async fn content(&mut self) -> Result<String, SessionError>;

    /// Shut the session down and release the browser
    async fn close(self: Box<Self>) -> Result<(), SessionError>;
}

/// Starts browser sessions
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    async fn launch(&self, user_agent: &str) -> Result<Box<dyn PageSession>, SessionError>;
}

/// Closes a session, logging instead of failing
pub async fn close_quietly(session: Box<dyn PageSession>) {
    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    } else {
        ::log::debug!("Browser session closed");
    }
}
