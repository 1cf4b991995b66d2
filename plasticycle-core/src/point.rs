//! Validated drop-point model.
//!
//! Upstream litter data is crowdsourced and noisy; the constructor here is
//! the only way to obtain a [`DropPoint`], so a value in hand always carries
//! finite coordinates. Zero is a legitimate coordinate on both axes.

use geo::Coord;
use thiserror::Error;

/// A recycling drop point ready for map display.
///
/// Coordinates are WGS84 degrees. `id` is the position of the point within
/// its normalized batch; it is stable only for the lifetime of that batch
/// and must not be treated as a durable identifier.
///
/// # Examples
/// ```
/// use plasticycle_core::DropPoint;
///
/// # fn main() -> Result<(), plasticycle_core::DropPointError> {
/// let point = DropPoint::new(0, "Plastic", -6.2, 106.8, "PET")?;
/// assert_eq!(point.name, "Plastic");
/// assert_eq!(point.latitude, -6.2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropPoint {
    /// Position within the normalized batch, dense from zero.
    pub id: usize,
    /// Display label shown in the marker popup heading.
    pub name: String,
    /// Latitude in degrees; always finite.
    pub latitude: f64,
    /// Longitude in degrees; always finite.
    pub longitude: f64,
    /// Popup body text.
    pub description: String,
}

/// Errors returned by [`DropPoint::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DropPointError {
    /// Latitude was NaN or infinite.
    #[error("latitude must be a finite number")]
    NonFiniteLatitude,
    /// Longitude was NaN or infinite.
    #[error("longitude must be a finite number")]
    NonFiniteLongitude,
}

impl DropPoint {
    /// Label applied when the source feature has no category.
    pub const DEFAULT_NAME: &'static str = "Litter Point";
    /// Description applied when the source feature has no material.
    pub const DEFAULT_DESCRIPTION: &'static str = "Data dari OpenLitterMap";

    /// Validates and constructs a [`DropPoint`].
    ///
    /// # Errors
    ///
    /// Returns an error when either coordinate is NaN or infinite.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        description: impl Into<String>,
    ) -> Result<Self, DropPointError> {
        if !latitude.is_finite() {
            return Err(DropPointError::NonFiniteLatitude);
        }
        if !longitude.is_finite() {
            return Err(DropPointError::NonFiniteLongitude);
        }
        Ok(Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            description: description.into(),
        })
    }

    /// Geospatial position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Coord {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}
