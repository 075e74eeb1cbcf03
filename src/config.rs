use crate::error::EtlError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Longest pause a window may ask for, in seconds
pub const MAX_PAUSE_SECS: f64 = 3600.0;

/// Bounds of a randomized pause, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauseWindow {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl PauseWindow {
    pub const fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }

    /// A window that never sleeps
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn is_valid(&self) -> bool {
        self.min_secs.is_finite()
            && self.max_secs.is_finite()
            && self.min_secs >= 0.0
            && self.min_secs <= self.max_secs
            && self.max_secs <= MAX_PAUSE_SECS
    }
}

/// Configuration for one discover → extract → save run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlConfig {
    /// Listing page the FAQ links are discovered on
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Substring an href must contain to count as an FAQ article link
    #[serde(default = "default_path_marker")]
    pub path_marker: String,

    /// Regex patterns for discovered URLs to drop
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Number of discovered links actually extracted
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,

    /// Where the JSON array of records is written
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Desktop user agent presented to the site
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Site-specific article body container, tried before `article` and `main`.
    ///
    /// This is tied to one rendering of the target site and breaks whenever
    /// the site regenerates its class names.
    #[serde(default = "default_primary_content_selector")]
    pub primary_content_selector: String,

    /// Upper bound for navigation plus the network idle wait
    #[serde(default = "default_navigation_timeout_secs")]
    pub navigation_timeout_secs: u64,

    /// How long the page must stay quiet to count as idle
    #[serde(default = "default_idle_window_ms")]
    pub idle_window_ms: u64,

    /// Pause after loading the listing page
    #[serde(default = "default_discovery_pause")]
    pub discovery_pause: PauseWindow,

    /// Pause after loading each article page
    #[serde(default = "default_article_pause")]
    pub article_pause: PauseWindow,
}

fn default_listing_url() -> String {
    "https://www.binance.com/en/support/faq".to_string()
}

fn default_path_marker() -> String {
    "/en/support/faq/".to_string()
}

fn default_batch_limit() -> usize {
    5
}

fn default_output_path() -> String {
    "./json/binance_faq_data.json".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36"
        .to_string()
}

fn default_primary_content_selector() -> String {
    "div.css-18z6mjt".to_string()
}

fn default_navigation_timeout_secs() -> u64 {
    30
}

fn default_idle_window_ms() -> u64 {
    500
}

fn default_discovery_pause() -> PauseWindow {
    PauseWindow::new(2.0, 5.0)
}

fn default_article_pause() -> PauseWindow {
    PauseWindow::new(1.5, 3.0)
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            path_marker: default_path_marker(),
            exclude_patterns: Vec::new(),
            batch_limit: default_batch_limit(),
            output_path: default_output_path(),
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            user_agent: default_user_agent(),
            primary_content_selector: default_primary_content_selector(),
            navigation_timeout_secs: default_navigation_timeout_secs(),
            idle_window_ms: default_idle_window_ms(),
            discovery_pause: default_discovery_pause(),
            article_pause: default_article_pause(),
        }
    }
}

impl EtlConfig {
    /// Create a configuration with default values for the given listing page
    pub fn new(listing_url: &str) -> Self {
        Self {
            listing_url: listing_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EtlError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, EtlError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL from `WEBDRIVER_URL` when it is set and non-empty
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), EtlError> {
        if self.listing_url.trim().is_empty() {
            return Err(EtlError::Config("listing_url must not be empty".into()));
        }
        url::Url::parse(&self.listing_url)
            .map_err(|e| EtlError::Config(format!("listing_url {}: {}", self.listing_url, e)))?;
        if self.path_marker.is_empty() {
            return Err(EtlError::Config("path_marker must not be empty".into()));
        }
        if self.batch_limit == 0 {
            return Err(EtlError::Config("batch_limit must be at least 1".into()));
        }
        if self.output_path.trim().is_empty() {
            return Err(EtlError::Config("output_path must not be empty".into()));
        }
        if self.navigation_timeout_secs == 0 {
            return Err(EtlError::Config(
                "navigation_timeout_secs must be at least 1".into(),
            ));
        }
        for (name, window) in [
            ("discovery_pause", &self.discovery_pause),
            ("article_pause", &self.article_pause),
        ] {
            if !window.is_valid() {
                return Err(EtlError::Config(format!(
                    "{} needs 0 <= min_secs <= max_secs <= {}, got {:?}",
                    name, MAX_PAUSE_SECS, window
                )));
            }
        }
        Ok(())
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.idle_window_ms)
    }
}
