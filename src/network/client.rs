//! HTTP client wrapper - streams image bytes and reports progress

use std::time::{Duration, Instant};
use futures_util::StreamExt;
use tokio::sync::{mpsc, oneshot};

use crate::messages::ImageEvent;

/// Progress is reported at most once per this many bytes
const PROGRESS_STEP: usize = 16 * 1024;

/// Fetch an image, streaming the body so progress and cancellation work
/// mid-download. Always ends with exactly one terminal event unless cancelled.
pub async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
    size: u16,
    request_id: u64,
    event_tx: mpsc::UnboundedSender<ImageEvent>,
    mut cancel_rx: oneshot::Receiver<()>,
) {
    let start = Instant::now();
    tracing::info!(id = request_id, %url, size, "Fetching image");

    let resp = tokio::select! {
        biased;

        _ = &mut cancel_rx => {
            let _ = event_tx.send(ImageEvent::Cancelled { id: request_id });
            return;
        }
        result = client.get(url).send() => match result {
            Ok(resp) => resp,
            Err(e) => {
                let _ = event_tx.send(ImageEvent::Failed {
                    id: request_id,
                    message: describe_error(&e),
                });
                return;
            }
        },
    };

    let status = resp.status();
    if !status.is_success() {
        let _ = event_tx.send(ImageEvent::Failed {
            id: request_id,
            message: format!("HTTP {}", status.as_u16()),
        });
        return;
    }

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut stream = resp.bytes_stream();
    let mut total_bytes = 0usize;
    let mut last_reported = 0usize;

    loop {
        tokio::select! {
            biased;

            _ = &mut cancel_rx => {
                tracing::info!(id = request_id, total_bytes, "Image fetch cancelled");
                let _ = event_tx.send(ImageEvent::Cancelled { id: request_id });
                return;
            }
            chunk = stream.next() => {
                match chunk {
                    Some(Ok(bytes)) => {
                        total_bytes += bytes.len();
                        if total_bytes - last_reported >= PROGRESS_STEP {
                            last_reported = total_bytes;
                            let _ = event_tx.send(ImageEvent::Progress {
                                id: request_id,
                                received: total_bytes,
                            });
                        }
                    }
                    Some(Err(e)) => {
                        let _ = event_tx.send(ImageEvent::Failed {
                            id: request_id,
                            message: format!("Stream error: {}", e),
                        });
                        return;
                    }
                    None => {
                        let time_ms = start.elapsed().as_millis() as u64;
                        tracing::info!(id = request_id, total_bytes, time_ms, "Image fetched");
                        let _ = event_tx.send(ImageEvent::Loaded {
                            id: request_id,
                            bytes: total_bytes,
                            content_type,
                            time_ms,
                        });
                        return;
                    }
                }
            }
        }
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out (30s)".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_builder() {
        format!("Invalid image URL: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_fails_without_network() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        fetch_image(&create_client(), "not a url", 50, 7, tx, cancel_rx).await;

        match rx.recv().await {
            Some(ImageEvent::Failed { id, .. }) => assert_eq!(id, 7),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancel_before_response() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        cancel_tx.send(()).unwrap();
        fetch_image(&create_client(), "http://127.0.0.1:9/robot.png", 50, 3, tx, cancel_rx).await;

        assert_eq!(rx.recv().await, Some(ImageEvent::Cancelled { id: 3 }));
    }
}
