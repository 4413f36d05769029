use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::Notify;

/// Bytes drained from one worker stream, plus whether the ceiling cut the
/// stream short.
#[derive(Debug, Default, Clone)]
pub struct StreamCapture {
    pub bytes: Vec<u8>,
    pub truncated: bool,
}

/// Drains `stream` into memory, keeping at most `limit` bytes.
///
/// The moment the stream would exceed the limit, draining stops, the capture
/// is flagged truncated, and `overflow` is notified so the invoker can kill
/// the process. Output of exactly `limit` bytes followed by EOF is not
/// truncation. Partial bytes already captured are always preserved.
pub async fn drain_capped<R>(
    stream: Option<R>,
    limit: usize,
    overflow: Arc<Notify>,
) -> StreamCapture
where
    R: AsyncRead + Unpin,
{
    let mut capture = StreamCapture::default();
    let Some(mut reader) = stream else {
        return capture;
    };

    let mut chunk = [0u8; 8192];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let remaining = limit - capture.bytes.len();
                if n > remaining {
                    capture.bytes.extend_from_slice(&chunk[..remaining]);
                    capture.truncated = true;
                    overflow.notify_one();
                    break;
                }
                capture.bytes.extend_from_slice(&chunk[..n]);
            }
        }
    }

    capture
}
