//! Inputs and per-worker state of a run.

use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Split};

use crate::app::{Reporter, ValidatedUrl};
use crate::concurrency::{GateSlot, WorkGuard};
use crate::config::STDIN_PATH;
use crate::error_handling::RunStats;
use crate::fetch::Fetch;

/// Source of URL lines.
///
/// URLs can come from a file, stdin, or any other async reader. Lines are
/// split on `\n` and handed out as raw bytes: a line that is not UTF-8 is a
/// bad line for the caller to report, not a read failure.
pub enum UrlSource {
    /// URLs from a file
    File(Split<BufReader<tokio::fs::File>>),
    /// URLs from stdin
    Stdin(Split<BufReader<tokio::io::Stdin>>),
    /// URLs from an arbitrary reader
    Reader(Split<BufReader<Box<dyn AsyncRead + Send + Unpin>>>),
}

impl UrlSource {
    /// Opens `path` for reading, or stdin when the path is `-`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub async fn open(path: &Path) -> std::io::Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            log::info!("Reading URLs from stdin");
            return Ok(UrlSource::Stdin(BufReader::new(tokio::io::stdin()).split(b'\n')));
        }
        let file = tokio::fs::File::open(path).await?;
        Ok(UrlSource::File(BufReader::new(file).split(b'\n')))
    }

    /// Wraps any async reader.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let boxed: Box<dyn AsyncRead + Send + Unpin> = Box::new(reader);
        UrlSource::Reader(BufReader::new(boxed).split(b'\n'))
    }

    /// Read the next line from the URL source, without its `\n`.
    ///
    /// Returns `Ok(Some(bytes))` if a line was read, `Ok(None)` if EOF,
    /// or an error if reading failed. Only I/O failures are errors; the bytes
    /// are not checked for UTF-8.
    pub async fn next_line(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        match self {
            UrlSource::File(lines) => lines.next_segment().await,
            UrlSource::Stdin(lines) => lines.next_segment().await,
            UrlSource::Reader(lines) => lines.next_segment().await,
        }
    }
}

/// Everything a worker holds for its lifetime.
///
/// Field order matters: fields drop in declaration order, so the gate slot is
/// released before the outstanding count is decremented. The barrier can
/// therefore never finish while a slot is still held.
#[derive(Debug)]
pub struct WorkerGuard {
    pub slot: GateSlot,
    pub work: WorkGuard,
}

/// Parameters for processing a single URL task.
pub struct WorkerParams<F: Fetch, R: Reporter> {
    /// The URL to process, owned by this worker alone
    pub url: ValidatedUrl,
    /// Shared fetcher
    pub fetcher: Arc<F>,
    /// Shared output
    pub reporter: Arc<R>,
    /// Run counters
    pub stats: Arc<RunStats>,
    /// Released when the task completes
    pub guard: WorkerGuard,
}
