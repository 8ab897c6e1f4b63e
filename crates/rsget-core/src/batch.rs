//! Sequential batch runner: fetch each URL, write each body to a file.
//!
//! Items are processed strictly in input order, one fetch+write fully
//! resolving before the next begins. A failed item is recorded and reported
//! but never aborts the batch or affects any other item; the only hard
//! failures are construction-time invalid arguments, caught per item.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::fetch::{CurlTransport, FetchError, RequestSpec, Transport};
use crate::log_sink::{LogRecord, LogSink, NoopSink, SinkLevel};
use crate::naming::{self, NamingStrategy};
use crate::storage::{self, StorageError};

/// Failure of a single batch item: either the fetch or the write.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
    #[error("write: {0}")]
    Storage(#[from] StorageError),
}

/// Result of one batch item, in input order.
#[derive(Debug)]
pub struct ItemOutcome {
    /// Zero-based position in the input list.
    pub index: usize,
    /// The input URL as given.
    pub url: String,
    /// The written output path, or why the item failed.
    pub result: Result<PathBuf, ItemError>,
}

/// Ordered per-item results of one batch run. Nothing persists between runs.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    items: Vec<ItemOutcome>,
}

impl BatchOutcome {
    pub fn items(&self) -> &[ItemOutcome] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn all_succeeded(&self) -> bool {
        self.items.iter().all(|item| item.result.is_ok())
    }

    /// Failed items, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|item| item.result.is_err())
    }
}

/// Runs URL batches: derives an output path per item, fetches, writes.
///
/// Collaborators are injected at construction: the HTTP [`Transport`]
/// (default [`CurlTransport`]), the naming strategy (default positional
/// `request_<i>.html`), and the [`LogSink`] (default no-op).
pub struct BatchRunner {
    transport: Box<dyn Transport>,
    out_dir: PathBuf,
    naming: NamingStrategy,
    sink: Arc<dyn LogSink>,
}

impl BatchRunner {
    /// Runner writing into `out_dir` with the default transport, naming,
    /// and a no-op log sink.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport: Box::new(CurlTransport::default()),
            out_dir: out_dir.into(),
            naming: NamingStrategy::default(),
            sink: Arc::new(NoopSink),
        }
    }

    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    /// Replaces the log sink; `None` resets to the no-op sink.
    pub fn set_log_sink(&mut self, sink: Option<Arc<dyn LogSink>>) {
        self.sink = sink.unwrap_or_else(|| Arc::new(NoopSink));
    }

    /// Processes every URL exactly once, strictly in input order, and
    /// returns one [`ItemOutcome`] per URL. An empty input yields an empty
    /// outcome with no I/O. Never returns early: a failed item contributes
    /// a recorded error and the run continues with the next index.
    pub fn run(&self, urls: &[String]) -> BatchOutcome {
        self.record(
            SinkLevel::Debug,
            "run",
            &format!("starting batch of {} urls", urls.len()),
        );

        let mut items = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            let file_name = naming::derive_output_name(&self.naming, index, url);
            let path = self.out_dir.join(file_name);
            let result = match self.run_item(url, &path) {
                Ok(()) => {
                    tracing::debug!(index, url = url.as_str(), path = %path.display(), "saved");
                    Ok(path)
                }
                Err(err) => {
                    tracing::warn!(index, url = url.as_str(), "item failed: {err}");
                    self.record(SinkLevel::Error, "run", &format!("{index}: {err}"));
                    Err(err)
                }
            };
            items.push(ItemOutcome {
                index,
                url: url.clone(),
                result,
            });
        }

        self.record(
            SinkLevel::Debug,
            "run",
            &format!("batch finished: {} items", items.len()),
        );
        BatchOutcome { items }
    }

    /// One fetch-then-write step. If the fetch fails the write is never
    /// attempted, so no file appears at `path` for a failed item.
    fn run_item(&self, url: &str, path: &Path) -> Result<(), ItemError> {
        let spec = RequestSpec::new(url)?;
        let body = self.transport.get(&spec)?;
        storage::write_body(path, &body)?;
        Ok(())
    }

    fn record(&self, level: SinkLevel, function: &str, message: &str) {
        self.sink.log(&LogRecord {
            process: "rsget",
            module: "batch",
            file: "batch.rs",
            function,
            level,
            message,
        });
    }
}
