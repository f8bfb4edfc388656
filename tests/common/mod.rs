//! Shared test utilities: doubles for each pipeline seam and a log capture.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;
use trivia_categories::config::ApiConfig;
use trivia_categories::data::{CategorySource, RawCategory, RawCategoryList};
use trivia_categories::domain::{CategoryDomain, FetchError, GetCategories, PipelineResult};

/// Port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: Some(2),
        timeout_seconds: Some(5),
        ..ApiConfig::default()
    }
}

pub fn raw_list(items: &[(i64, &str)]) -> RawCategoryList {
    RawCategoryList {
        items: items
            .iter()
            .map(|(id, name)| RawCategory {
                id: *id,
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn domain_list(items: &[(i64, &str)]) -> Vec<CategoryDomain> {
    items
        .iter()
        .map(|(id, name)| CategoryDomain::new(*id, *name))
        .collect()
}

pub fn serialization_error() -> FetchError {
    serde_json::from_str::<RawCategoryList>(r#"{"categories":[]}"#)
        .unwrap_err()
        .into()
}

pub fn status_error(status: u16) -> FetchError {
    FetchError::Status {
        url: "http://127.0.0.1/api_category.php".to_string(),
        status,
    }
}

// -- Source double -------------------------------------------------------------

/// Source that returns one scripted outcome and counts calls.
pub struct FakeSource {
    outcome: Mutex<Option<Result<RawCategoryList, FetchError>>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(outcome: Result<RawCategoryList, FetchError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategorySource for FakeSource {
    async fn fetch(&self) -> Result<RawCategoryList, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .lock()
            .take()
            .expect("FakeSource fetched more than once")
    }
}

// -- Use case double -----------------------------------------------------------

/// Use case double. Optionally blocks until released through its gate.
pub struct FakeGetCategories {
    outcome: Mutex<Option<PipelineResult<Vec<CategoryDomain>>>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl FakeGetCategories {
    pub fn returning(outcome: PipelineResult<Vec<CategoryDomain>>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Some(outcome)),
            gate: Mutex::new(None),
            calls: AtomicUsize::new(0),
        })
    }

    /// Like `returning`, but `invoke` waits until the sender fires.
    pub fn gated(outcome: PipelineResult<Vec<CategoryDomain>>) -> (Arc<Self>, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let fake = Arc::new(Self {
            outcome: Mutex::new(Some(outcome)),
            gate: Mutex::new(Some(rx)),
            calls: AtomicUsize::new(0),
        });
        (fake, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GetCategories for FakeGetCategories {
    async fn invoke(&self) -> PipelineResult<Vec<CategoryDomain>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.outcome
            .lock()
            .take()
            .expect("FakeGetCategories invoked more than once")
    }
}

// -- Log capture ---------------------------------------------------------------

/// Collects formatted log lines from a thread-local subscriber.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter(Arc::clone(&self.0))
    }
}

/// Install a capturing subscriber for the current thread.
///
/// Keep the guard alive for as long as records should be captured.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
