//! The fetch → normalize → render pipeline.
//!
//! [`MapSession`] owns a source and a renderer for the lifetime of one map
//! widget. Data flows one way: a refresh awaits a single fetch, then
//! replaces the marker set. A fetch failure is recovered fail-open: it is
//! logged and rendered as zero markers, since the map must never show a
//! blocking error state.
//!
//! Teardown is explicit: the host keeps a [`CancellationToken`] clone and
//! cancels it when the widget is disposed. A fetch that resolves after
//! cancellation is discarded without touching the surface.

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use plasticycle_core::{MapRenderer, MapSurface};

use crate::source::DropPointSource;

/// One map widget's lifetime: source, renderer and teardown token.
///
/// `refresh` takes `&mut self`, so two fetches for the same session can
/// never be in flight at once.
///
/// # Examples
///
/// ```no_run
/// use plasticycle_core::{MapSurface, MapView, Marker, TileLayer};
/// use plasticycle_data::{DropPointConfig, HttpDropPointSource, MapSession};
///
/// # #[derive(Default)]
/// # struct HostSurface;
/// # impl MapSurface for HostSurface {
/// #     fn set_view(&mut self, _view: &MapView) {}
/// #     fn add_tile_layer(&mut self, _layer: &TileLayer) {}
/// #     fn replace_markers(&mut self, _markers: Vec<Marker>) {}
/// # }
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DropPointConfig::from_env()?;
/// let source = HttpDropPointSource::new(config)?;
/// let mut session = MapSession::new(source, HostSurface::default());
///
/// session.mount();
/// let teardown = session.cancel_handle();
/// let rendered = session.refresh().await;
/// println!("{rendered} markers");
/// # teardown.cancel();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MapSession<Src, Surf> {
    source: Src,
    renderer: MapRenderer<Surf>,
    cancel: CancellationToken,
}

impl<Src, Surf> MapSession<Src, Surf>
where
    Src: DropPointSource,
    Surf: MapSurface,
{
    /// Pair a source with a surface. Nothing is rendered until
    /// [`Self::mount`].
    #[must_use]
    pub fn new(source: Src, surface: Surf) -> Self {
        Self {
            source,
            renderer: MapRenderer::new(surface),
            cancel: CancellationToken::new(),
        }
    }

    /// Render the base map: default view and tile layer, zero markers.
    pub fn mount(&mut self) {
        self.renderer.mount();
    }

    /// Token for the host to cancel on teardown.
    ///
    /// Once cancelled, any in-flight or future refresh becomes a no-op.
    #[must_use]
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Fetch once and replace the marker set; returns the markers rendered.
    ///
    /// A fetch failure is logged and rendered as an empty batch. A refresh
    /// that is cancelled, or whose result arrives after cancellation,
    /// leaves the surface untouched and reports zero.
    pub async fn refresh(&mut self) -> usize {
        let outcome = tokio::select! {
            () = self.cancel.cancelled() => None,
            result = self.source.fetch_drop_points() => Some(result),
        };
        let Some(result) = outcome else {
            debug!("drop-point fetch cancelled before completion");
            return 0;
        };
        if self.cancel.is_cancelled() {
            debug!("discarding drop-point batch fetched after teardown");
            return 0;
        }
        let points = match result {
            Ok(points) => points,
            Err(err) => {
                warn!("drop-point fetch failed, rendering empty set: {err}");
                Vec::new()
            }
        };
        self.renderer.render_points(&points)
    }

    /// Borrow the underlying renderer.
    #[must_use]
    pub const fn renderer(&self) -> &MapRenderer<Surf> {
        &self.renderer
    }

    /// Borrow the host surface.
    #[must_use]
    pub const fn surface(&self) -> &Surf {
        self.renderer.surface()
    }
}
