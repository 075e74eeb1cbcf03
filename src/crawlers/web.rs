use crate::config::EtlConfig;
use crate::crawlers::session::{PageSession, SessionLauncher};
use crate::error::SessionError;
use async_trait::async_trait;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Reports the document ready state and how many resources the page has fetched
const IDLE_PROBE: &str =
    "return [document.readyState, performance.getEntriesByType('resource').length];";

/// Delay between two idle probes
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Endpoints tried when the configured WebDriver refuses the connection
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Launches browser sessions through a WebDriver server
#[derive(Debug, Clone)]
pub struct WebDriverLauncher {
    webdriver_url: String,
    headless: bool,
    navigation_timeout: Duration,
    idle_window: Duration,
}

impl WebDriverLauncher {
    pub fn new(config: &EtlConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            headless: config.headless,
            navigation_timeout: config.navigation_timeout(),
            idle_window: config.idle_window(),
        }
    }

    /// Connects to the WebDriver instance, falling back to common local ports
    async fn connect(&self, capabilities: Capabilities) -> Result<Client, SessionError> {
        let first_error = match ClientBuilder::native()
            .capabilities(capabilities.clone())
            .connect(&self.webdriver_url)
            .await
        {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", self.webdriver_url);
                return Ok(client);
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    e
                );
                e.to_string()
            }
        };

        for url in FALLBACK_WEBDRIVER_URLS {
            if url == self.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native()
                .capabilities(capabilities.clone())
                .connect(url)
                .await
            {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(client);
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(SessionError::Connect {
            endpoint: self.webdriver_url.clone(),
            message: first_error,
        })
    }
}

#[async_trait]
impl SessionLauncher for WebDriverLauncher {
    async fn launch(&self, user_agent: &str) -> Result<Box<dyn PageSession>, SessionError> {
        let capabilities = browser_capabilities(user_agent, self.headless);
        let client = self.connect(capabilities).await?;

        Ok(Box::new(WebDriverSession {
            client,
            navigation_timeout: self.navigation_timeout,
            idle_window: self.idle_window,
            current_url: None,
        }))
    }
}

/// Builds capabilities for Chrome and Firefox drivers alike
pub fn browser_capabilities(user_agent: &str, headless: bool) -> Capabilities {
    let mut chrome_args = vec![
        format!("--user-agent={}", user_agent),
        "--window-size=1400,1200".to_string(),
        "--disable-gpu".to_string(),
        "--disable-dev-shm-usage".to_string(),
    ];
    let mut firefox_args = Vec::new();
    if headless {
        chrome_args.push("--headless=new".to_string());
        firefox_args.push("-headless".to_string());
    }

    let mut capabilities = Capabilities::new();
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        json!({ "args": chrome_args }),
    );
    capabilities.insert(
        "moz:firefoxOptions".to_string(),
        json!({
            "args": firefox_args,
            "prefs": { "general.useragent.override": user_agent }
        }),
    );
    capabilities
}

/// One WebDriver browser session
pub struct WebDriverSession {
    client: Client,
    navigation_timeout: Duration,
    idle_window: Duration,
    current_url: Option<String>,
}

impl WebDriverSession {
    async fn goto_and_settle(&self, url: &str) -> Result<(), SessionError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| navigation_error(url, e))?;

        let mut tracker = IdleTracker::new(self.idle_window);
        loop {
            let probe = self
                .client
                .execute(IDLE_PROBE, vec![])
                .await
                .map_err(|e| SessionError::Script {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

            let (complete, resources) = read_probe(&probe);
            if tracker.observe(complete, resources, Instant::now()) {
                ::log::debug!("{} went idle after {} resources", url, resources);
                return Ok(());
            }
            tokio::time::sleep(IDLE_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl PageSession for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        let started = Instant::now();
        match timeout(self.navigation_timeout, self.goto_and_settle(url)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(SessionError::Timeout {
                    url: url.to_string(),
                    secs: self.navigation_timeout.as_secs(),
                });
            }
        }

        ::log::debug!(
            "Loaded {} in {:.2} seconds",
            url,
            started.elapsed().as_secs_f64()
        );
        self.current_url = Some(url.to_string());
        Ok(())
    }

    async fn content(&mut self) -> Result<String, SessionError> {
        self.client.source().await.map_err(|e| {
            let page = self.current_url.as_deref().unwrap_or("<no page>");
            SessionError::Capture(format!("{}: {}", page, e))
        })
    }

    async fn close(self: Box<Self>) -> Result<(), SessionError> {
        self.client
            .close()
            .await
            .map_err(|e| SessionError::Close(e.to_string()))
    }
}

/// Maps a fantoccini command error, calling out lost sessions
fn navigation_error(url: &str, error: fantoccini::error::CmdError) -> SessionError {
    let message = error.to_string();
    if message.contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while accessing {}", url);
    }
    SessionError::Navigation {
        url: url.to_string(),
        message,
    }
}

/// Reads `[readyState, resourceCount]` as returned by [`IDLE_PROBE`]
fn read_probe(probe: &Value) -> (bool, u64) {
    let complete = probe.get(0).and_then(Value::as_str) == Some("complete");
    let resources = probe.get(1).and_then(Value::as_u64).unwrap_or(0);
    (complete, resources)
}

/// Decides when a page has been quiet for long enough.
///
/// The page is idle once the document is complete and the resource count
/// has not moved for the whole window.
#[derive(Debug)]
pub struct IdleTracker {
    window: Duration,
    last_count: Option<u64>,
    quiet_since: Option<Instant>,
}

impl IdleTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_count: None,
            quiet_since: None,
        }
    }

    /// Feeds one probe; returns true when the page counts as idle
    pub fn observe(&mut self, complete: bool, resources: u64, now: Instant) -> bool {
        if !complete {
            self.last_count = None;
            self.quiet_since = None;
            return false;
        }

        if self.last_count != Some(resources) {
            self.last_count = Some(resources);
            self.quiet_since = Some(now);
        }

        match self.quiet_since {
            Some(since) => now.duration_since(since) >= self.window,
            None => false,
        }
    }
}
