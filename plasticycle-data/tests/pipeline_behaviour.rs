//! Behavioural tests for the fetch → normalize → render pipeline.
//!
//! These tests drive [`MapSession`] with stub sources and the recording
//! surface, so no network or host UI is involved.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use geo::Coord;
use plasticycle_core::test_support::RecordingSurface;
use plasticycle_core::{DropPoint, MapView, TileLayer};
use plasticycle_data::openlittermap::{LitterFeatureCollection, into_drop_points};
use plasticycle_data::test_support::{
    PendingDropPointSource, QueuedDropPointSource, StubDropPointSource,
};
use plasticycle_data::{DropPointSource, FetchError, MapSession};
use rstest::rstest;
use tokio_util::sync::CancellationToken;

fn jakarta_point() -> DropPoint {
    DropPoint::new(0, "Plastic", -6.2, 106.8, "PET").expect("finite input")
}

fn yogyakarta_point() -> DropPoint {
    DropPoint::new(0, "Glass", -7.8, 110.4, "Bottle").expect("finite input")
}

/// Source that tears the session down as its fetch resolves.
///
/// The teardown slot is filled with the session's cancel handle after the
/// session exists, so the fetch cancels the very session that awaits it.
#[derive(Debug, Default, Clone)]
struct TeardownRacingSource {
    teardown: Arc<OnceLock<CancellationToken>>,
    points: Vec<DropPoint>,
}

#[async_trait]
impl DropPointSource for TeardownRacingSource {
    async fn fetch_drop_points(&self) -> Result<Vec<DropPoint>, FetchError> {
        if let Some(token) = self.teardown.get() {
            token.cancel();
        }
        Ok(self.points.clone())
    }
}

fn session_with<Src: DropPointSource>(source: Src) -> MapSession<Src, RecordingSurface> {
    let mut session = MapSession::new(source, RecordingSurface::new());
    session.mount();
    session
}

#[rstest]
#[tokio::test]
async fn end_to_end_renders_one_marker_from_upstream_json() {
    let collection: LitterFeatureCollection = serde_json::from_str(
        r#"{"features":[{"properties":{"category":"Plastic","material":"PET"},
            "geometry":{"coordinates":[106.8,-6.2]}}]}"#,
    )
    .expect("fixture JSON should deserialise");
    let points = into_drop_points(collection);
    assert_eq!(points, vec![jakarta_point()]);

    let mut session = session_with(StubDropPointSource::with_points(points));
    let rendered = session.refresh().await;

    assert_eq!(rendered, 1);
    let markers = session.surface().markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].position, Coord { x: 106.8, y: -6.2 });
    assert_eq!(markers[0].popup.title, "Plastic");
    assert_eq!(markers[0].popup.body, "PET");
}

#[rstest]
#[tokio::test]
async fn mount_renders_base_map_before_any_fetch() {
    let session = session_with(StubDropPointSource::with_points(vec![jakarta_point()]));

    let surface = session.surface();
    assert_eq!(surface.view(), Some(&MapView::indonesia()));
    assert_eq!(surface.tile_layers(), [TileLayer::openstreetmap()]);
    assert!(surface.marker_batches().is_empty());
}

#[rstest]
#[tokio::test]
async fn fetch_failure_degrades_to_empty_marker_set() {
    let mut session = session_with(StubDropPointSource::with_error(FetchError::Network {
        url: "https://api.example.com/litter-data?country_code=ID".to_owned(),
        message: "connection refused".to_owned(),
    }));

    let rendered = session.refresh().await;

    assert_eq!(rendered, 0);
    // The failure is recovered: the base map stays, markers are empty.
    assert_eq!(session.surface().marker_batches().len(), 1);
    assert!(session.surface().markers().is_empty());
    assert_eq!(session.surface().view(), Some(&MapView::indonesia()));
}

#[rstest]
#[tokio::test]
async fn cancelled_refresh_leaves_surface_untouched() {
    let mut session = session_with(PendingDropPointSource);
    session.cancel_handle().cancel();

    let rendered = session.refresh().await;

    assert_eq!(rendered, 0);
    assert!(session.surface().marker_batches().is_empty());
}

#[rstest]
#[tokio::test]
async fn batch_resolved_after_teardown_is_discarded() {
    let source = TeardownRacingSource {
        teardown: Arc::new(OnceLock::new()),
        points: vec![jakarta_point()],
    };
    let teardown = Arc::clone(&source.teardown);
    let mut session = session_with(source);
    teardown
        .set(session.cancel_handle())
        .expect("teardown slot should be empty");

    let rendered = session.refresh().await;

    // The fetch resolved with a non-empty batch, but teardown had already
    // happened: the surface must not see it.
    assert_eq!(rendered, 0);
    assert!(session.surface().marker_batches().is_empty());
}

#[rstest]
#[tokio::test]
async fn second_refresh_replaces_markers_wholesale() {
    let first = vec![
        jakarta_point(),
        DropPoint::new(1, "Organic", -6.9, 107.6, "Compost").expect("finite input"),
    ];
    let second = vec![yogyakarta_point()];
    let mut session = session_with(QueuedDropPointSource::with_batches([first, second]));

    assert_eq!(session.refresh().await, 2);
    assert_eq!(session.refresh().await, 1);

    let batches = session.surface().marker_batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 2);

    // Only the second batch survives; nothing from the first is appended.
    let markers = session.surface().markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].popup.title, "Glass");
    assert_eq!(markers[0].position, Coord { x: 110.4, y: -7.8 });
}
