//! Facade crate for the PlastiCycle drop-point map pipeline.
//!
//! This crate re-exports the core rendering types and exposes the HTTP data
//! source and fetch pipeline behind a feature flag.

#![forbid(unsafe_code)]

pub use plasticycle_core::{
    DropPoint, DropPointError, MapRenderer, MapSurface, MapView, Marker, MarkerIcon, Popup,
    TileLayer,
};

#[cfg(feature = "source-http")]
pub use plasticycle_data::{
    ConfigError, DropPointConfig, DropPointSource, FetchError, HttpDropPointSource, MapSession,
    SourceBuildError,
};
