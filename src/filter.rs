use regex::Regex;
use url::Url;

/// Configuration for selecting FAQ article links out of raw hrefs
#[derive(Debug, Clone)]
pub struct LinkFilterConfig {
    /// Listing page URL; its scheme and host resolve root-relative hrefs
    pub base_url: String,

    /// Literal substring an href must contain to be kept
    pub path_marker: String,

    /// Regex patterns for resolved URLs to drop
    pub exclude_patterns: Vec<String>,
}

/// Keeps hrefs that point at FAQ articles and makes them absolute
#[derive(Debug)]
pub struct LinkFilter {
    origin: Url,
    /// `scheme://host[:port]` with no trailing slash
    origin_prefix: String,
    path_marker: String,
    exclude_regexes: Vec<Regex>,
}

/// Errors from building a [`LinkFilter`]
#[derive(Debug, thiserror::Error)]
pub enum LinkFilterError {
    #[error("invalid base URL {0}: {1}")]
    BaseUrl(String, url::ParseError),

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl LinkFilter {
    /// Create a new link filter from configuration
    pub fn new(config: LinkFilterConfig) -> Result<Self, LinkFilterError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| LinkFilterError::BaseUrl(config.base_url.clone(), e))?;

        let mut origin = base;
        origin.set_path("/");
        origin.set_query(None);
        origin.set_fragment(None);
        let origin_prefix = origin.as_str().trim_end_matches('/').to_string();

        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            origin,
            origin_prefix,
            path_marker: config.path_marker,
            exclude_regexes,
        })
    }

    /// Whether the raw href carries the FAQ path marker
    pub fn is_faq_link(&self, href: &str) -> bool {
        href.contains(&self.path_marker)
    }

    /// Turn an href into the URL that gets stored.
    ///
    /// Root-relative hrefs are appended verbatim to the listing page's
    /// origin, so dot segments are not collapsed. Protocol-relative hrefs take
    /// the listing page's scheme. Everything else is kept verbatim.
    pub fn resolve(&self, href: &str) -> String {
        if href.starts_with("//") {
            match self.origin.join(href) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    ::log::debug!("Could not resolve {}: {}", href, e);
                    href.to_string()
                }
            }
        } else if href.starts_with('/') {
            format!("{}{}", self.origin_prefix, href)
        } else {
            href.to_string()
        }
    }

    /// Filter and resolve one href, `None` when it is not kept
    pub fn accept(&self, href: &str) -> Option<String> {
        if !self.is_faq_link(href) {
            return None;
        }

        let resolved = self.resolve(href);
        if !self.is_faq_link(&resolved) {
            ::log::debug!("Resolved URL left the FAQ path: {} -> {}", href, resolved);
            return None;
        }
        for regex in &self.exclude_regexes {
            if regex.is_match(&resolved) {
                ::log::debug!("Exclude pattern {} rejected: {}", regex, resolved);
                return None;
            }
        }

        Some(resolved)
    }
}
