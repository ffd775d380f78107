use std::sync::mpsc::Sender;

use futures::StreamExt;

use crate::domain::{entry::EntryId, events::AppEvent};

use super::decode::Utf8ChunkDecoder;

/// Consumes a streaming reply body chunk by chunk.
///
/// Each chunk is decoded to text and forwarded as a `ReplyChunk` event in
/// delivery order. End-of-stream flushes the decoder tail and emits
/// `ReplyFinished`; a read failure emits `ReplyFailed` with the failure's
/// description and stops further reads. A dropped receiver stops the pump.
pub async fn pump_reply(response: reqwest::Response, entry: EntryId, events: &Sender<AppEvent>) {
    let mut decoder = Utf8ChunkDecoder::default();
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => {
                let text = decoder.decode(&bytes);
                if text.is_empty() {
                    continue;
                }
                if events.send(AppEvent::ReplyChunk { entry, text }).is_err() {
                    tracing::debug!(
                        entry = entry.index(),
                        "reply receiver dropped, stopping pump"
                    );
                    return;
                }
            }
            Err(error) => {
                tracing::warn!(
                    entry = entry.index(),
                    error = %error,
                    "reply stream read failed"
                );
                let _ = events.send(AppEvent::ReplyFailed {
                    entry,
                    reason: error.to_string(),
                });
                return;
            }
        }
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        let _ = events.send(AppEvent::ReplyChunk { entry, text: tail });
    }
    let _ = events.send(AppEvent::ReplyFinished { entry });
}
