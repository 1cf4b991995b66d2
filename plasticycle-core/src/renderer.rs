//! Drives a [`MapSurface`] from validated drop points.
//!
//! The renderer has exactly two observable states: base-only (view and tile
//! layer, zero markers) after [`MapRenderer::mount`], and points-loaded after
//! [`MapRenderer::render_points`]. The marker icon is built once per renderer
//! lifetime and shared across every marker and every render.

use std::sync::{Arc, OnceLock};

use crate::surface::{MapSurface, MapView, Marker, MarkerIcon, TileLayer};
use crate::DropPoint;

/// Renders drop points as markers on a [`MapSurface`].
///
/// # Examples
///
/// ```
/// use plasticycle_core::{DropPoint, MapRenderer, MapSurface, MapView, Marker, TileLayer};
///
/// #[derive(Default)]
/// struct NullSurface;
///
/// impl MapSurface for NullSurface {
///     fn set_view(&mut self, _view: &MapView) {}
///     fn add_tile_layer(&mut self, _layer: &TileLayer) {}
///     fn replace_markers(&mut self, _markers: Vec<Marker>) {}
/// }
///
/// # fn main() -> Result<(), plasticycle_core::DropPointError> {
/// let mut renderer = MapRenderer::new(NullSurface);
/// renderer.mount();
///
/// let point = DropPoint::new(0, "Plastic", -6.2, 106.8, "PET")?;
/// let rendered = renderer.render_points(&[point]);
/// assert_eq!(rendered, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MapRenderer<S> {
    surface: S,
    icon: OnceLock<Arc<MarkerIcon>>,
}

impl<S: MapSurface> MapRenderer<S> {
    /// Wrap a surface; nothing is rendered until [`Self::mount`].
    #[must_use]
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            icon: OnceLock::new(),
        }
    }

    /// Render the base state: default view, default tile layer, no markers.
    pub fn mount(&mut self) {
        self.mount_with(&MapView::default(), &TileLayer::default());
    }

    /// Render the base state with an explicit view and tile layer.
    pub fn mount_with(&mut self, view: &MapView, layer: &TileLayer) {
        self.surface.set_view(view);
        self.surface.add_tile_layer(layer);
    }

    /// Replace the displayed markers with one marker per point.
    ///
    /// Returns the number of markers handed to the surface. The previous
    /// batch is discarded wholesale; an empty slice clears the map.
    pub fn render_points(&mut self, points: &[DropPoint]) -> usize {
        let icon = self.icon.get_or_init(|| Arc::new(MarkerIcon::default()));
        let markers: Vec<Marker> = points
            .iter()
            .map(|point| Marker::for_point(point, icon))
            .collect();
        let rendered = markers.len();
        self.surface.replace_markers(markers);
        rendered
    }

    /// Borrow the wrapped surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Unwrap the surface, discarding the renderer.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
