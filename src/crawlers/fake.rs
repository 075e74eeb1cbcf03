use crate::crawlers::session::{PageSession, SessionLauncher};
use crate::error::SessionError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What the fake browser has been asked to do
#[derive(Debug, Default)]
pub struct FakeState {
    pub launches: usize,
    pub closes: usize,
    pub visited: Vec<String>,
    pub user_agents: Vec<String>,
}

/// Serves canned markup; unknown URLs fail to navigate
#[derive(Clone, Default)]
pub struct FakeLauncher {
    pages: HashMap<String, String>,
    fail_launch: bool,
    fail_capture: bool,
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn failing_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    pub fn failing_capture(mut self) -> Self {
        self.fail_capture = true;
        self
    }

    pub fn launches(&self) -> usize {
        self.state.lock().unwrap().launches
    }

    pub fn closes(&self) -> usize {
        self.state.lock().unwrap().closes
    }

    pub fn visited(&self) -> Vec<String> {
        self.state.lock().unwrap().visited.clone()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.state.lock().unwrap().user_agents.clone()
    }
}

#[async_trait]
impl SessionLauncher for FakeLauncher {
    async fn launch(&self, user_agent: &str) -> Result<Box<dyn PageSession>, SessionError> {
        if self.fail_launch {
            return Err(SessionError::Connect {
                endpoint: "fake://webdriver".to_string(),
                message: "connection refused".to_string(),
            });
        }

        {
            let mut state = self.state.lock().unwrap();
            state.launches += 1;
            state.user_agents.push(user_agent.to_string());
        }

        Ok(Box::new(FakeSession {
            pages: self.pages.clone(),
            fail_capture: self.fail_capture,
            current: None,
            state: Arc::clone(&self.state),
        }))
    }
}

struct FakeSession {
    pages: HashMap<String, String>,
    fail_capture: bool,
    current: Option<String>,
    state: Arc<Mutex<FakeState>>,
}

#[async_trait]
impl PageSession for FakeSession {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.state.lock().unwrap().visited.push(url.to_string());

        match self.pages.get(url) {
            Some(html) => {
                self.current = Some(html.clone());
                Ok(())
            }
            None => Err(SessionError::Navigation {
                url: url.to_string(),
                message: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            }),
        }
    }

    async fn content(&mut self) -> Result<String, SessionError> {
        if self.fail_capture {
            return Err(SessionError::Capture("target closed".to_string()));
        }
        self.current
            .clone()
            .ok_or_else(|| SessionError::Capture("no page loaded".to_string()))
    }

    async fn close(self: Box<Self>) -> Result<(), SessionError> {
        self.state.lock().unwrap().closes += 1;
        Ok(())
    }
}
