//! A client for looking up kanji and phrases on jisho.org.
//!
//! This module provides a high-level async interface for fetching kanji pages and word search
//! results and turning them into structured data.

use std::time::Duration;

use reqwest::{ClientBuilder, redirect::Policy};
use tracing::debug;
use url::Url;

use crate::phrase::PhraseSearchResponse;
use crate::{Error, KanjiRecord, PHRASE_API_URL, SEARCH_BASE_URL, uri_for_kanji_search};

/// The name of the query parameter used to specify the phrase to search for.
const KEYWORD_PARAM: &str = "keyword";

/// The default time to wait for a single request to complete.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An asynchronous client for jisho.org.
///
/// The client only handles fetching. Kanji pages are handed to
/// [`parse_kanji_page`](crate::parse_kanji_page) once they are fully received.
#[derive(Debug)]
pub struct Client {
    /// Base URL that kanji searches are appended to.
    search_url: Url,
    /// URL of the word search API.
    phrase_api_url: Url,
    /// Timeout applied to every request.
    timeout: Duration,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. This can happen in environments with
    /// misconfigured network or TLS dependencies. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`]. It disables redirects and uses
    /// [`DEFAULT_TIMEOUT`] for every request.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .redirect(Policy::none())
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// This is useful if you want to share an HTTP client between multiple services or require
    /// custom configuration (e.g., proxies, custom headers).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let search_url = Url::parse(SEARCH_BASE_URL).expect("valid search url");
        let phrase_api_url = Url::parse(PHRASE_API_URL).expect("valid phrase api url");

        Client {
            search_url,
            phrase_api_url,
            timeout: DEFAULT_TIMEOUT,
            client,
        }
    }

    /// Sets the timeout applied to each request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Client {
        self.timeout = timeout;
        self
    }

    /// Replaces the base URLs, e.g. to point the client at a mirror.
    #[must_use]
    pub fn with_base_urls(mut self, search_url: Url, phrase_api_url: Url) -> Client {
        self.search_url = search_url;
        self.phrase_api_url = phrase_api_url;
        self
    }

    /// Returns the base URL that kanji and example searches are built from.
    #[must_use]
    pub const fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Fetches the page of `kanji` and parses it into a [`KanjiRecord`].
    ///
    /// A page that does not describe `kanji` is not an error; the record is then marked as not
    /// found.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyQuery`]: If `kanji` is empty.
    /// - [`Error::InvalidBaseUrl`]: If the configured search URL cannot carry a path.
    /// - [`Error::Request`]: If the HTTP request fails due to network issues, a timeout, or a
    ///   non-successful status code.
    pub async fn search_for_kanji(&self, kanji: &str) -> Result<KanjiRecord, Error> {
        if kanji.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let url = uri_for_kanji_search(&self.search_url, kanji)?;

        debug!(%kanji, %url, "requesting kanji page");

        let request = self.client.get(url).timeout(self.timeout);
        let response = request.send().await.map_err(Error::Request)?;

        match response.error_for_status() {
            Ok(response) => {
                let body = response.text().await.map_err(Error::Request)?;

                debug!(%kanji, len = body.len(), "fetched kanji page");

                Ok(KanjiRecord::from_html(&body, kanji))
            }
            Err(err) => Err(Error::Request(err)),
        }
    }

    /// Searches the word API for `phrase`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyQuery`]: If `phrase` is empty.
    /// - [`Error::Request`]: If the HTTP request fails or returns a non-successful status code.
    /// - [`Error::Deserialize`]: If the response body is not a valid search response.
    pub async fn search_for_phrase(&self, phrase: &str) -> Result<PhraseSearchResponse, Error> {
        if phrase.is_empty() {
            return Err(Error::EmptyQuery);
        }

        debug!(%phrase, "searching for phrase");

        let request = self
            .client
            .get(self.phrase_api_url.clone())
            .query(&[(KEYWORD_PARAM, phrase)])
            .timeout(self.timeout);
        let response = request.send().await.map_err(Error::Request)?;

        match response.error_for_status() {
            Ok(response) => {
                let results: PhraseSearchResponse =
                    response.json().await.map_err(Error::Deserialize)?;

                debug!(num_results = results.data.len(), "fetched phrase results");

                Ok(results)
            }
            Err(err) => Err(Error::Request(err)),
        }
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}
