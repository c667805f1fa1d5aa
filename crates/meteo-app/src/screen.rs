//! Generic data-bound screen state.
//!
//! Every screen follows the same fetch-then-map cycle: enter `Loading`,
//! await the fetch, land in `Ready` or `Error`. The controller tags each
//! fetch with a monotonically increasing token so that when the city changes
//! while a request is still in flight, the superseded response is discarded
//! instead of overwriting fresher state.

use std::future::Future;
use std::sync::Arc;

use meteo_weather::WeatherError;
use parking_lot::Mutex;

/// Per-screen query state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ScreenState::Ready(_))
    }

    /// The user-visible message when in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ScreenState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Identifies one fetch cycle; only the latest token may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug)]
struct Inner<T> {
    state: ScreenState<T>,
    seq: u64,
}

/// Shared state holder for one screen.
#[derive(Debug)]
pub struct ScreenController<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for ScreenController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ScreenController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScreenController<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ScreenState::Loading,
                seq: 0,
            })),
        }
    }

    /// Start a new fetch cycle: resets to `Loading` (dropping any data from
    /// a previous city) and returns the token the eventual result must
    /// present to commit.
    pub fn begin(&self) -> RequestToken {
        let mut inner = self.inner.lock();
        inner.seq += 1;
        inner.state = ScreenState::Loading;
        RequestToken(inner.seq)
    }

    /// Commit a fetch result. Returns false (and leaves state untouched)
    /// when a newer fetch has started since `token` was issued.
    pub fn commit(&self, token: RequestToken, result: Result<T, WeatherError>) -> bool {
        let mut inner = self.inner.lock();
        if token.0 != inner.seq {
            tracing::debug!(
                "Discarding stale response (token {}, current {})",
                token.0,
                inner.seq
            );
            return false;
        }

        inner.state = match result {
            Ok(data) => ScreenState::Ready(data),
            Err(e) => {
                tracing::warn!("Screen fetch failed: {}", e);
                ScreenState::Error(e.user_message())
            }
        };
        true
    }
}

impl<T: Clone> ScreenController<T> {
    pub fn state(&self) -> ScreenState<T> {
        self.inner.lock().state.clone()
    }
}

/// Run one full fetch cycle on a controller and return the resulting state.
///
/// The returned state reflects whatever is current after the commit attempt,
/// which may belong to a newer request when this one was superseded.
pub async fn fetch_into<T, F, Fut>(controller: &ScreenController<T>, fetch: F) -> ScreenState<T>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, WeatherError>>,
{
    let token = controller.begin();
    let result = fetch().await;
    controller.commit(token, result);
    controller.state()
}
