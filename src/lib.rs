// Re-export modules
pub mod config;
pub mod crawlers;
pub mod delay;
pub mod error;
pub mod filter;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::EtlConfig;
pub use error::{EtlError, SessionError};
pub use results::{ArticleRecord, Outcome, RunSummary};

use crawlers::session::SessionLauncher;
use delay::Delay;
use filter::{LinkFilter, LinkFilterConfig};
use parsers::ContentSelectors;

/// How many discovered links are echoed to stdout
const SAMPLE_LINKS: usize = 5;

/// Builder for one discover → extract → save run against an FAQ listing page
#[derive(Debug, Clone, Default)]
pub struct FaqEtl {
    config: EtlConfig,
}

impl FaqEtl {
    /// Create a new builder for the given listing page with default settings
    pub fn new(listing_url: &str) -> Self {
        Self {
            config: EtlConfig::new(listing_url),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EtlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, EtlError> {
        let config = EtlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, EtlError> {
        let config = EtlConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set how many discovered links get extracted
    pub fn with_batch_limit(mut self, batch_limit: usize) -> Self {
        self.config.batch_limit = batch_limit;
        self
    }

    /// Set where the JSON output goes
    pub fn with_output(mut self, path: impl Into<String>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn config(&self) -> &EtlConfig {
        &self.config
    }

    /// Discover links, extract the first batch and write the records.
    ///
    /// Page-level failures are logged and skipped; only configuration and
    /// output errors are returned.
    pub async fn run(
        &self,
        launcher: &dyn SessionLauncher,
        delay: &dyn Delay,
    ) -> Result<RunSummary, EtlError> {
        let config = &self.config;
        config.validate()?;

        let filter = LinkFilter::new(LinkFilterConfig {
            base_url: config.listing_url.clone(),
            path_marker: config.path_marker.clone(),
            exclude_patterns: config.exclude_patterns.clone(),
        })
        .map_err(|e| EtlError::Config(e.to_string()))?;
        let selectors = ContentSelectors::new(&config.primary_content_selector)?;

        let links = match crawlers::discover::discover_links(launcher, delay, config, &filter).await
        {
            Outcome::Success(links) => links,
            Outcome::Failed(reason) => {
                ::log::warn!("Link discovery failed, continuing with no links: {}", reason);
                Vec::new()
            }
        };

        println!("\nFound {} articles.", links.len());
        for link in links.iter().take(SAMPLE_LINKS) {
            println!("\t{}", link);
        }

        let records =
            crawlers::batch::extract_batch(launcher, &links, delay, config, &selectors).await;

        let saved = output::save_records(&config.output_path, &records)?;
        println!(
            "Successfully saved {} articles to {}",
            saved,
            utils::display_file_name(&config.output_path)
        );

        Ok(RunSummary {
            discovered: links.len(),
            attempted: links.len().min(config.batch_limit),
            saved,
            output_path: config.output_path.clone(),
        })
    }
}
