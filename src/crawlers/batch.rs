use crate::config::EtlConfig;
use crate::crawlers::extract::extract_article;
use crate::crawlers::session::{SessionLauncher, close_quietly};
use crate::delay::Delay;
use crate::parsers::ContentSelectors;
use crate::results::{ArticleRecord, Outcome};

/// Extracts the first `config.batch_limit` URLs through one shared session.
///
/// Failed pages are skipped; successes keep their encounter order.
pub async fn extract_batch(
    launcher: &dyn SessionLauncher,
    urls: &[String],
    delay: &dyn Delay,
    config: &EtlConfig,
    selectors: &ContentSelectors,
) -> Vec<ArticleRecord> {
    let batch = &urls[..urls.len().min(config.batch_limit)];
    if batch.is_empty() {
        ::log::info!("No article URLs to extract");
        return Vec::new();
    }

    let mut session = match launcher.launch(&config.user_agent).await {
        Ok(session) => session,
        Err(e) => {
            ::log::error!("Could not start a browser for the article batch: {}", e);
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(batch.len());
    for url in batch {
        match extract_article(&mut *session, url, delay, config, selectors).await {
            Outcome::Success(record) => records.push(record),
            Outcome::Failed(reason) => ::log::debug!("Skipping {}: {}", url, reason),
        }
    }

    close_quietly(session).await;

    ::log::info!(
        "Extracted {} of {} articles in the batch",
        records.len(),
        batch.len()
    );
    records
}
