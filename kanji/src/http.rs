//! HTTP features

use crate::Error;
use crate::config::HttpConfig;

mod client {
    use crate::config::HttpConfig;

    pub use reqwest::Client;

    /// Returns an HTTP client builder configured from `config`.
    pub fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
        reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
    }
}

/// Builds an HTTP client from `config`.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the TLS backend or resolver cannot be initialized.
pub fn build_client(config: &HttpConfig) -> Result<client::Client, Error> {
    client::builder(config).build().map_err(Error::HttpClient)
}

/// Builds a dictionary client that uses the URLs and timeout from `config`.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the underlying HTTP client cannot be built.
pub fn build_jisho_client(config: &HttpConfig) -> Result<jisho::Client, Error> {
    let http_client = build_client(config)?;
    let client = jisho::Client::with_client(http_client)
        .with_timeout(config.timeout)
        .with_base_urls(config.search_url.clone(), config.phrase_api_url.clone());

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_from_config() {
        let config = HttpConfig::default();
        let client = build_jisho_client(&config).expect("jisho client");

        assert_eq!(client.search_url(), &config.search_url);
    }
}
