//! Test utilities for drop-point sources.
//!
//! [`StubDropPointSource`] returns pre-configured batches or errors without
//! touching the network; [`PendingDropPointSource`] never resolves, which
//! makes cancellation paths testable.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use plasticycle_core::DropPoint;

use crate::source::{DropPointSource, FetchError};

/// Stub `DropPointSource` returning a pre-configured response.
///
/// # Examples
///
/// ```
/// use plasticycle_core::DropPoint;
/// use plasticycle_data::DropPointSource;
/// use plasticycle_data::test_support::StubDropPointSource;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let point = DropPoint::new(0, "Plastic", -6.2, 106.8, "PET")?;
/// let source = StubDropPointSource::with_points(vec![point]);
/// assert_eq!(source.fetch_drop_points().await?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StubDropPointSource {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Points(Vec<DropPoint>),
    Error(FetchError),
}

impl StubDropPointSource {
    /// Create a source returning the given batch on every fetch.
    #[must_use]
    pub fn with_points(points: Vec<DropPoint>) -> Self {
        Self {
            response: StubResponse::Points(points),
        }
    }

    /// Create a source failing with the given error on every fetch.
    #[must_use]
    pub fn with_error(error: FetchError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

#[async_trait]
impl DropPointSource for StubDropPointSource {
    async fn fetch_drop_points(&self) -> Result<Vec<DropPoint>, FetchError> {
        match &self.response {
            StubResponse::Points(points) => Ok(points.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Source returning queued batches, one per fetch, in order.
///
/// Once the queue is exhausted, further fetches return an empty batch.
/// Useful for observing how a session treats successive refreshes.
#[derive(Debug, Default)]
pub struct QueuedDropPointSource {
    batches: Mutex<VecDeque<Vec<DropPoint>>>,
}

impl QueuedDropPointSource {
    /// Create a source that serves `batches` in order.
    #[must_use]
    pub fn with_batches<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<DropPoint>>,
    {
        Self {
            batches: Mutex::new(batches.into_iter().collect()),
        }
    }
}

#[async_trait]
impl DropPointSource for QueuedDropPointSource {
    async fn fetch_drop_points(&self) -> Result<Vec<DropPoint>, FetchError> {
        let mut batches = self
            .batches
            .lock()
            .expect("batch queue lock should not be poisoned");
        Ok(batches.pop_front().unwrap_or_default())
    }
}

/// Source whose fetch never resolves.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingDropPointSource;

#[async_trait]
impl DropPointSource for PendingDropPointSource {
    async fn fetch_drop_points(&self) -> Result<Vec<DropPoint>, FetchError> {
        std::future::pending().await
    }
}
