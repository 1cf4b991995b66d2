//! Core domain types for the PlastiCycle drop-point map.
//!
//! These models keep the rendering pipeline honest. A [`DropPoint`] can only
//! hold finite coordinates, so everything downstream of construction may rely
//! on every point being displayable. The [`MapSurface`] trait is the single
//! boundary through which a host UI is driven; [`MapRenderer`] translates
//! validated points into markers with popups on that surface.

mod point;
mod renderer;
mod surface;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use point::{DropPoint, DropPointError};
pub use renderer::MapRenderer;
pub use surface::{MapSurface, MapView, Marker, MarkerIcon, Popup, TileLayer};
