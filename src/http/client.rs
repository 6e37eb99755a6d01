use std::time::Duration;

use reqwest::{Client, redirect};

use crate::args::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};
use crate::error::HttpError;

use super::UserAgent;

/// Redirect hops followed before a response is reported as-is.
const REDIRECT_LIMIT: usize = 10;

/// Everything needed to build an HTTP client for the sitemap fetch or a
/// single warm-up request.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub user_agent: UserAgent,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientSettings {
    #[must_use]
    pub const fn new(
        user_agent: UserAgent,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            user_agent,
            request_timeout,
            connect_timeout,
        }
    }

    /// Builds a fresh client that never reuses connections. Every warm-up
    /// request gets its own, so no request rides on another one's socket.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or resolver cannot be initialized.
    pub fn build_client(&self) -> Result<Client, HttpError> {
        Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)))
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(
            UserAgent::detect(),
            DEFAULT_REQUEST_TIMEOUT,
            DEFAULT_CONNECT_TIMEOUT,
        )
    }
}
