//! Drop-point sources and their HTTP implementation.
//!
//! [`DropPointSource`] abstracts where a drop-point batch comes from so the
//! pipeline and its tests do not depend on a live service.
//! [`HttpDropPointSource`] issues a single `GET {base}/litter-data` request
//! per call, scoped by the configured country code. There is no retry and
//! no pagination: one request, one batch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use plasticycle_core::DropPoint;

use crate::config::DropPointConfig;
use crate::openlittermap::{LitterFeatureCollection, into_drop_points};

/// Default user agent for upstream requests.
pub const DEFAULT_USER_AGENT: &str = "plasticycle-map/0.1";

/// Connect timeout applied to the HTTP client.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from fetching a drop-point batch.
///
/// Every variant is recoverable at the pipeline: the map degrades to an
/// empty marker set rather than surfacing the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request failed at the transport level.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Transport failure description.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body was not a feature collection.
    #[error("failed to decode drop-point response: {message}")]
    Parse {
        /// Decode failure description.
        message: String,
    },
}

/// Errors from building an [`HttpDropPointSource`].
#[derive(Debug, Error)]
pub enum SourceBuildError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    HttpClient {
        /// Underlying client builder failure.
        source: reqwest::Error,
    },
}

/// Fetch one normalized drop-point batch.
///
/// Implementations return the full batch for the configured scope; callers
/// replace any previous batch wholesale.
#[async_trait]
pub trait DropPointSource {
    /// Fetch and normalize the current drop points.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request or decoding fails.
    async fn fetch_drop_points(&self) -> Result<Vec<DropPoint>, FetchError>;
}

/// HTTP source backed by an OpenLitterMap-style endpoint.
///
/// # Examples
///
/// ```no_run
/// use plasticycle_data::{DropPointConfig, DropPointSource, HttpDropPointSource};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DropPointConfig::new("https://api.example.com", "ID")?;
/// let source = HttpDropPointSource::new(config)?;
/// let points = source.fetch_drop_points().await?;
/// println!("{} drop points", points.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpDropPointSource {
    client: Client,
    config: DropPointConfig,
}

impl HttpDropPointSource {
    /// Build a source for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client fails to build.
    pub fn new(config: DropPointConfig) -> Result<Self, SourceBuildError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|source| SourceBuildError::HttpClient { source })?;
        Ok(Self { client, config })
    }

    /// The `litter-data` endpoint scoped by the configured country code.
    ///
    /// The country code is query-encoded; a trailing slash on the base URL
    /// does not produce an empty path segment.
    fn endpoint(&self) -> Url {
        let mut url = self.config.base_url().clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("litter-data");
        }
        url.query_pairs_mut()
            .append_pair("country_code", self.config.country_code());
        url
    }
}

#[async_trait]
impl DropPointSource for HttpDropPointSource {
    async fn fetch_drop_points(&self) -> Result<Vec<DropPoint>, FetchError> {
        let url = self.endpoint();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, url.as_str()))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, url.as_str()))?;

        let collection: LitterFeatureCollection =
            response.json().await.map_err(|err| FetchError::Parse {
                message: err.to_string(),
            })?;

        Ok(into_drop_points(collection))
    }
}

fn convert_reqwest_error(error: &reqwest::Error, url: &str) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    FetchError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}
