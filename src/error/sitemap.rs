use thiserror::Error;

use super::HttpError;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Sitemap request to '{url}' returned HTTP {status}.")]
    Fetch { url: String, status: u16 },
    #[error("Could not prepare sitemap request: {source}")]
    Client {
        #[source]
        source: HttpError,
    },
    #[error("Sitemap request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read sitemap body from '{url}': {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Sitemap is not well-formed XML: {source}")]
    Parse {
        #[source]
        source: roxmltree::Error,
    },
    #[error("Sitemap root element is '{found}', expected 'urlset'.")]
    UnexpectedRoot { found: String },
}
