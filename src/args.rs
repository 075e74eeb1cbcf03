use clap::Parser;
use faq_etl::EtlConfig;

#[derive(Parser, Debug)]
#[command(name = "faq-etl")]
#[command(about = "Extracts FAQ articles from a support site into a JSON file")]
#[command(version)]
pub struct Args {
    /// FAQ listing page to discover article links on
    #[arg(long)]
    pub url: Option<String>,

    /// Number of discovered articles to extract
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output JSON file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// WebDriver endpoint (overrides WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,
}

impl Args {
    /// Apply command-line overrides on top of file and environment settings
    pub fn apply(&self, config: &mut EtlConfig) {
        if let Some(url) = &self.url {
            config.listing_url = url.clone();
        }
        if let Some(limit) = self.limit {
            config.batch_limit = limit;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }
        if self.headed {
            config.headless = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_keeps_defaults() {
        let args = Args::parse_from(["faq-etl"]);
        let mut config = EtlConfig::default();
        args.apply(&mut config);

        assert_eq!(config.listing_url, "https://www.binance.com/en/support/faq");
        assert_eq!(config.batch_limit, 5);
        assert!(config.headless);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "faq-etl",
            "--limit",
            "2",
            "-o",
            "out/faq.json",
            "--webdriver-url",
            "http://localhost:9515",
            "--headed",
        ]);
        let mut config = EtlConfig::default();
        args.apply(&mut config);

        assert_eq!(config.batch_limit, 2);
        assert_eq!(config.output_path, "out/faq.json");
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert!(!config.headless);
    }
}
