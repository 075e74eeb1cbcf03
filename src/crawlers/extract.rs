use crate::config::EtlConfig;
use crate::crawlers::session::PageSession;
use crate::delay::Delay;
use crate::error::SessionError;
use crate::parsers::{ContentSelectors, html};
use crate::results::{ArticleRecord, Outcome};
use crate::utils;

/// Loads one article in an already open session and turns it into a record
pub async fn extract_article(
    session: &mut dyn PageSession,
    url: &str,
    delay: &dyn Delay,
    config: &EtlConfig,
    selectors: &ContentSelectors,
) -> Outcome<ArticleRecord> {
    ::log::info!("Scraping: {}", url);

    match load_article(session, url, delay, config, selectors).await {
        Ok(record) => {
            ::log::debug!(
                "Extracted {:?} ({} chars) from {}",
                record.title,
                record.content.len(),
                url
            );
            Outcome::Success(record)
        }
        Err(e) => {
            ::log::error!("Failed to scrape {}: {}", url, e);
            Outcome::Failed(e.to_string())
        }
    }
}

async fn load_article(
    session: &mut dyn PageSession,
    url: &str,
    delay: &dyn Delay,
    config: &EtlConfig,
    selectors: &ContentSelectors,
) -> Result<ArticleRecord, SessionError> {
    session.navigate(url).await?;
    delay.pause(config.article_pause).await;
    let page = session.content().await?;

    let parts = html::parse_article(&page, selectors);
    Ok(ArticleRecord::new(
        url.to_string(),
        parts.title,
        parts.content,
        utils::timestamp_now(),
    ))
}
