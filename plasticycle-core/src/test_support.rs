//! Test-only, in-memory `MapSurface` implementation used by unit and
//! behaviour tests.

use crate::surface::{MapSurface, MapView, Marker, TileLayer};

/// In-memory surface recording every call for later assertions.
///
/// Marker replacement is recorded batch by batch so tests can observe
/// wholesale replacement rather than just the final state.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    views: Vec<MapView>,
    tile_layers: Vec<TileLayer>,
    marker_batches: Vec<Vec<Marker>>,
}

impl RecordingSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently applied view, if any.
    #[must_use]
    pub fn view(&self) -> Option<&MapView> {
        self.views.last()
    }

    /// Tile layers in the order they were added.
    #[must_use]
    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    /// Markers currently displayed: the last replacement batch.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        self.marker_batches.last().map_or(&[], Vec::as_slice)
    }

    /// Every replacement batch in arrival order.
    #[must_use]
    pub fn marker_batches(&self) -> &[Vec<Marker>] {
        &self.marker_batches
    }
}

impl MapSurface for RecordingSurface {
    fn set_view(&mut self, view: &MapView) {
        self.views.push(view.clone());
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn replace_markers(&mut self, markers: Vec<Marker>) {
        self.marker_batches.push(markers);
    }
}
