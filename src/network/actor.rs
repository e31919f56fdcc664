//! Image loader actor - runs image fetches in the Tokio async runtime

use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{ImageCommand, ImageEvent};
use crate::network::client::{create_client, fetch_image};

/// Image loader that fetches avatars on request and reports their status
pub struct ImageLoader {
    client: reqwest::Client,
    event_tx: mpsc::UnboundedSender<ImageEvent>,
    active_fetches: JoinSet<()>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl ImageLoader {
    pub fn new(event_tx: mpsc::UnboundedSender<ImageEvent>) -> Self {
        ImageLoader {
            client: create_client(),
            event_tx,
            active_fetches: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the loader message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ImageCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(ImageCommand::Fetch { id, url, size }) => {
                            let (cancel_tx, cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, cancel_tx);

                            let event_tx = self.event_tx.clone();
                            let client = self.client.clone();

                            self.active_fetches.spawn(async move {
                                fetch_image(&client, &url, size, id, event_tx, cancel_rx).await;
                            });
                        }

                        Some(ImageCommand::Cancel(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling image fetch");
                                let _ = cancel_tx.send(());
                            }
                        }

                        Some(ImageCommand::Shutdown) | None => {
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {
                    self.cancel_handles.retain(|_, tx| !tx.is_closed());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_reports_terminal_event() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(ImageLoader::new(event_tx).run(cmd_rx));

        cmd_tx
            .send(ImageCommand::Fetch { id: 1, url: "::bad::".into(), size: 50 })
            .unwrap();
        let event = event_rx.recv().await.unwrap();
        assert_eq!(event.id(), 1);
        assert!(event.is_terminal());

        cmd_tx.send(ImageCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_loop_ends_when_commands_close() {
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ImageCommand>();
        let handle = tokio::spawn(ImageLoader::new(event_tx).run(cmd_rx));
        drop(cmd_tx);
        handle.await.unwrap();
    }
}
