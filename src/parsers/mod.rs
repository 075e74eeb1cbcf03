pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::EtlError;
use scraper::Selector;

/// Title and body pulled out of one article page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleParts {
    pub title: String,
    pub content: String,
}

/// Compiled selectors for the body container cascade
#[derive(Debug, Clone)]
pub struct ContentSelectors {
    pub title: Selector,
    /// Tried in order; the first one that matches anything wins
    pub body: Vec<Selector>,
}

impl ContentSelectors {
    /// Compiles the cascade `primary`, then `article`, then `main`
    pub fn new(primary: &str) -> Result<Self, EtlError> {
        let body = [primary, "article", "main"]
            .into_iter()
            .map(compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: compile("h1")?,
            body,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, EtlError> {
    Selector::parse(selector)
        .map_err(|e| EtlError::Config(format!("invalid selector {:?}: {}", selector, e)))
}
