use clap::Parser;
use faq_etl::crawlers::web::WebDriverLauncher;
use faq_etl::delay::RandomDelay;
use faq_etl::{EtlConfig, EtlError, FaqEtl};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), EtlError> {
    // Initialize logging; diagnostics go to stdout next to the run summary
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path);
            EtlConfig::from_file(path)?
        }
        None => EtlConfig::default(),
    };
    config.apply_env();
    args.apply(&mut config);

    ::log::info!(
        "Starting FAQ extraction for {} via WebDriver at {}",
        config.listing_url,
        config.webdriver_url
    );

    let launcher = WebDriverLauncher::new(&config);
    let start_time = std::time::Instant::now();

    let summary = FaqEtl::default()
        .with_config(config)
        .run(&launcher, &RandomDelay)
        .await?;

    ::log::info!(
        "Run complete - {} discovered, {} attempted, {} saved to {} in {:.2} seconds",
        summary.discovered,
        summary.attempted,
        summary.saved,
        summary.output_path,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
