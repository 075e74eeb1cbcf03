use crate::config::EtlConfig;
use crate::crawlers::session::{PageSession, SessionLauncher, close_quietly};
use crate::delay::Delay;
use crate::error::SessionError;
use crate::filter::LinkFilter;
use crate::parsers::html;
use crate::results::Outcome;

/// Loads the listing page in a fresh session and returns its unique FAQ links.
///
/// Launch, navigation and capture failures come back as `Outcome::Failed`
/// after being logged; a page without FAQ links is `Outcome::Success(vec![])`.
/// The session is closed on every path.
pub async fn discover_links(
    launcher: &dyn SessionLauncher,
    delay: &dyn Delay,
    config: &EtlConfig,
    filter: &LinkFilter,
) -> Outcome<Vec<String>> {
    let url = config.listing_url.as_str();
    ::log::info!("Navigating to: {}", url);

    let mut session = match launcher.launch(&config.user_agent).await {
        Ok(session) => session,
        Err(e) => {
            ::log::error!("Could not start a browser for {}: {}", url, e);
            return Outcome::Failed(e.to_string());
        }
    };

    let result = load_listing(&mut *session, url, delay, config, filter).await;
    close_quietly(session).await;

    match result {
        Ok(links) => {
            ::log::info!("Found {} FAQ links on {}", links.len(), url);
            Outcome::Success(links)
        }
        Err(e) => {
            ::log::error!("An error occurred while discovering links on {}: {}", url, e);
            Outcome::Failed(e.to_string())
        }
    }
}

async fn load_listing(
    session: &mut dyn PageSession,
    url: &str,
    delay: &dyn Delay,
    config: &EtlConfig,
    filter: &LinkFilter,
) -> Result<Vec<String>, SessionError> {
    session.navigate(url).await?;
    delay.pause(config.discovery_pause).await;
    let html = session.content().await?;
    Ok(html::parse_links(&html, filter))
}
