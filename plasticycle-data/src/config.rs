//! Explicit configuration for the drop-point fetcher.
//!
//! The fetcher never reads ambient state: it receives a validated
//! [`DropPointConfig`] at construction. Validation happens here, before any
//! request is issued, so a missing or malformed endpoint fails fast with a
//! clear diagnostic instead of producing a nonsense request.

use thiserror::Error;
use url::Url;

/// Environment variable naming the upstream base URL.
pub const BASE_URL_VAR: &str = "OPENLITTERMAP_BASE_URL";

/// Environment variable naming the country-code filter.
pub const COUNTRY_CODE_VAR: &str = "OPENLITTERMAP_COUNTRY_CODE";

/// Errors raised while validating fetcher configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The base URL was missing or empty.
    #[error("base URL must not be empty")]
    EmptyBaseUrl,
    /// The base URL did not parse as an absolute URL.
    #[error("base URL {value:?} is not a valid absolute URL: {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        value: String,
        /// Underlying parse failure.
        source: url::ParseError,
    },
    /// The base URL used a scheme other than `http` or `https`.
    #[error("base URL {value:?} must use http or https")]
    UnsupportedScheme {
        /// The rejected input.
        value: String,
    },
    /// The country code was missing or empty.
    #[error("country code must not be empty")]
    EmptyCountryCode,
    /// A required environment variable was not set.
    #[error("environment variable {name} is not set")]
    MissingVariable {
        /// Name of the absent variable.
        name: &'static str,
    },
}

/// Validated configuration for a drop-point source.
///
/// # Examples
///
/// ```
/// use plasticycle_data::DropPointConfig;
///
/// # fn main() -> Result<(), plasticycle_data::ConfigError> {
/// let config = DropPointConfig::new("https://api.example.com", "ID")?;
/// assert_eq!(config.country_code(), "ID");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPointConfig {
    base_url: Url,
    country_code: String,
}

impl DropPointConfig {
    /// Validate and construct a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is empty, relative, or not
    /// `http`/`https`, or when the country code is empty.
    pub fn new(
        base_url: impl AsRef<str>,
        country_code: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref().trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let parsed = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: raw.to_owned(),
            });
        }
        let country_code = country_code.into().trim().to_owned();
        if country_code.is_empty() {
            return Err(ConfigError::EmptyCountryCode);
        }
        Ok(Self {
            base_url: parsed,
            country_code,
        })
    }

    /// Read configuration from `OPENLITTERMAP_BASE_URL` and
    /// `OPENLITTERMAP_COUNTRY_CODE`.
    ///
    /// # Errors
    ///
    /// Returns an error when either variable is unset or its value fails
    /// validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(BASE_URL_VAR).ok(),
            std::env::var(COUNTRY_CODE_VAR).ok(),
        )
    }

    fn from_vars(
        base_url: Option<String>,
        country_code: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.ok_or(ConfigError::MissingVariable { name: BASE_URL_VAR })?;
        let country_code = country_code.ok_or(ConfigError::MissingVariable {
            name: COUNTRY_CODE_VAR,
        })?;
        Self::new(base_url, country_code)
    }

    /// Validated upstream endpoint base.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Country-code filter passed to the upstream API.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}
