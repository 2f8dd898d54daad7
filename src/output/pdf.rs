//! PDF statement stream writer
//!
//! The upstream PDF document is an opaque binary passthrough: the response
//! byte stream is copied chunk by chunk into the destination file. The copy
//! completes only once the stream is fully drained and the file flushed and
//! closed. A mid-transfer error invalidates the partial file: it is removed
//! and the error propagated.

use futures_util::{Stream, StreamExt};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use super::{OutputError, OutputResult};

/// Copy a response byte stream into `path`
///
/// # Arguments
/// * `path` - Destination file; created (or truncated) before the copy
/// * `stream` - Chunked response body
///
/// # Returns
/// Total number of bytes written.
///
/// # Errors
/// Returns [`OutputError::StreamError`] if the upstream stream aborts and
/// [`OutputError::IoError`]/[`OutputError::FlushError`] on write failures.
/// The partially written file is removed on any error.
pub async fn write_stream<S, B, E>(path: &Path, stream: S) -> OutputResult<u64>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let file = File::create(path)
        .await
        .map_err(|e| OutputError::IoError(format!("failed to create file: {e}")))?;

    match drain(file, stream).await {
        Ok(bytes_written) => {
            info!(path = %path.display(), bytes = bytes_written, "PDF statement written");
            Ok(bytes_written)
        }
        Err(e) => {
            // A truncated PDF is worse than none at all
            if let Err(remove_err) = tokio::fs::remove_file(path).await {
                warn!(
                    path = %path.display(),
                    error = %remove_err,
                    "failed to remove partial PDF file"
                );
            }
            Err(e)
        }
    }
}

/// Drain the stream into the file, consuming and closing the handle
async fn drain<S, B, E>(mut file: File, mut stream: S) -> OutputResult<u64>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| OutputError::StreamError(format!("stream aborted: {e}")))?;
        file.write_all(chunk.as_ref())
            .await
            .map_err(|e| OutputError::IoError(format!("write failed: {e}")))?;
        bytes_written += chunk.as_ref().len() as u64;
    }

    file.flush()
        .await
        .map_err(|e| OutputError::FlushError(format!("failed to flush: {e}")))?;
    file.sync_all()
        .await
        .map_err(|e| OutputError::IoError(format!("failed to sync file: {e}")))?;

    Ok(bytes_written)
}
