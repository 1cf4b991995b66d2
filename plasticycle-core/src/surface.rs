//! The render-surface boundary between the pipeline and its host UI.
//!
//! The core exposes one capability to a host: given drop points, display a
//! map. A host implements [`MapSurface`]; everything it receives through that
//! trait is already validated. Marker replacement is wholesale, so a surface
//! never has to diff batches.

use std::sync::Arc;

use geo::Coord;

use crate::DropPoint;

/// Camera state for the map: centre and zoom.
///
/// The default view frames the Indonesian archipelago so the base map is
/// meaningful before any data arrives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapView {
    /// Centre of the view with `x = longitude` and `y = latitude`.
    pub center: Coord,
    /// Zoom level in tile-pyramid units.
    pub zoom: f64,
}

impl MapView {
    /// View covering the Indonesian archipelago.
    #[must_use]
    pub const fn indonesia() -> Self {
        Self {
            center: Coord { x: 118.0, y: -2.5 },
            zoom: 4.5,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::indonesia()
    }
}

/// A raster tile layer with its mandatory attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayer {
    /// Tile URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    /// Attribution text the surface must display.
    pub attribution: String,
}

impl TileLayer {
    /// The public OpenStreetMap tile service.
    #[must_use]
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> \
                          contributors"
                .to_owned(),
        }
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

/// Bitmap icon shared by every marker in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerIcon {
    /// Source URL of the icon bitmap.
    pub url: String,
    /// Rendered size in pixels, width then height.
    pub size: [u32; 2],
    /// Anchor offset in pixels from the top-left corner.
    pub anchor: [u32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            url: "https://cdn-icons-png.flaticon.com/512/684/684908.png".to_owned(),
            size: [32, 32],
            anchor: [16, 32],
        }
    }
}

/// Popup content attached to a marker.
///
/// Surfaces render `title` emphasised above `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Popup {
    /// Emphasised heading.
    pub title: String,
    /// Plain body text.
    pub body: String,
}

/// A positioned marker ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Position with `x = longitude` and `y = latitude`.
    pub position: Coord,
    /// Icon shared across the batch; clones are reference-counted.
    pub icon: Arc<MarkerIcon>,
    /// Popup shown on interaction.
    pub popup: Popup,
}

impl Marker {
    /// Build a marker for `point` using the shared `icon`.
    #[must_use]
    pub fn for_point(point: &DropPoint, icon: &Arc<MarkerIcon>) -> Self {
        Self {
            position: point.location(),
            icon: Arc::clone(icon),
            popup: Popup {
                title: point.name.clone(),
                body: point.description.clone(),
            },
        }
    }
}

/// Host-UI boundary: an interactive map that can be driven by the pipeline.
///
/// Implementations receive a view and tile layer once on mount, then a full
/// marker batch whenever fresh data arrives. `replace_markers` discards the
/// previous batch entirely.
///
/// # Examples
///
/// ```
/// use plasticycle_core::{MapSurface, MapView, Marker, TileLayer};
///
/// #[derive(Default)]
/// struct CountingSurface {
///     markers: usize,
/// }
///
/// impl MapSurface for CountingSurface {
///     fn set_view(&mut self, _view: &MapView) {}
///     fn add_tile_layer(&mut self, _layer: &TileLayer) {}
///     fn replace_markers(&mut self, markers: Vec<Marker>) {
///         self.markers = markers.len();
///     }
/// }
///
/// let mut surface = CountingSurface::default();
/// surface.replace_markers(Vec::new());
/// assert_eq!(surface.markers, 0);
/// ```
pub trait MapSurface {
    /// Apply the camera state.
    fn set_view(&mut self, view: &MapView);
    /// Add a base tile layer with its attribution.
    fn add_tile_layer(&mut self, layer: &TileLayer);
    /// Replace the displayed marker set wholesale.
    fn replace_markers(&mut self, markers: Vec<Marker>);
}
