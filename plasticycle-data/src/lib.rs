//! Data access for the PlastiCycle drop-point map.
//!
//! Responsibilities:
//! - Deserialise the upstream litter feature collection and normalize it
//!   into validated [`plasticycle_core::DropPoint`] batches.
//! - Provide the [`DropPointSource`] trait with its HTTP implementation.
//! - Tie fetch, normalization and rendering together in [`MapSession`],
//!   including cancellation and fail-open degradation.
//!
//! Boundaries:
//! - Do not encode rendering rules (live in `plasticycle-core`).
//! - Configuration is explicit: no ambient environment lookup outside
//!   [`DropPointConfig::from_env`].
//!
//! Invariants:
//! - A fetch failure degrades to an empty marker set, never a panic and
//!   never an error surfaced to the host UI.
//! - Malformed individual features are dropped silently; they are expected
//!   noise in crowdsourced data.

mod config;
pub mod openlittermap;
mod pipeline;
mod source;

#[doc(hidden)]
pub mod test_support;

pub use config::{BASE_URL_VAR, COUNTRY_CODE_VAR, ConfigError, DropPointConfig};
pub use pipeline::MapSession;
pub use source::{
    DEFAULT_USER_AGENT, DropPointSource, FetchError, HttpDropPointSource, SourceBuildError,
};
