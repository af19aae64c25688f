//! WebSocket push feed for log lines.

use super::ClientError;
use crate::storage::DashboardStore;
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Handle for an open log stream.
///
/// Every text message received on the socket is appended to the store
/// verbatim, in arrival order. Call [`close`](Self::close) to shut the
/// connection down; once it returns, no further lines are appended.
/// Dropping the handle also signals the reader to close the socket, but does
/// not wait for it.
#[derive(Debug)]
pub struct LogStream {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<usize>>,
}

impl LogStream {
    /// Connects to `url` and starts feeding `store`.
    pub(crate) async fn connect(url: &str, store: Arc<DashboardStore>) -> Result<Self, ClientError> {
        let (socket, _response) = connect_async(url).await?;
        tracing::info!(%url, "Log stream connected");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(run_feed(socket, store, shutdown_rx));

        Ok(Self {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        })
    }

    /// Returns true once the reader has stopped, e.g. because the server
    /// closed the connection.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits until the reader stops on its own.
    ///
    /// This is cancel-safe; the stream can still be closed afterwards.
    pub async fn wait_closed(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Log stream reader failed");
            }
        }
        self.task = None;
    }

    /// Closes the connection and waits for the reader to stop.
    ///
    /// Returns the number of lines appended over the stream's lifetime, or
    /// `None` if the reader had already been awaited.
    pub async fn close(mut self) -> Option<usize> {
        if let Some(shutdown) = self.shutdown.take() {
            // The reader may already be gone; that's fine.
            let _ = shutdown.send(());
        }

        match self.task.take()?.await {
            Ok(received) => Some(received),
            Err(e) => {
                tracing::warn!(error = %e, "Log stream reader failed");
                None
            }
        }
    }
}

async fn run_feed(
    socket: Socket,
    store: Arc<DashboardStore>,
    mut shutdown: oneshot::Receiver<()>,
) -> usize {
    let (mut write, mut read) = socket.split();
    let mut received = 0usize;

    loop {
        tokio::select! {
            biased;

            // Fires on explicit close and when the handle is dropped.
            _ = &mut shutdown => {
                if let Err(e) = write.send(Message::Close(None)).await {
                    tracing::debug!(error = %e, "Failed to send close frame");
                }
                break;
            }
            message = read.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    store.append_log(text.as_str());
                    received += 1;
                }
                Some(Ok(Message::Close(frame))) => {
                    let reason = frame.map(|f| f.reason.to_string()).unwrap_or_default();
                    tracing::info!(%reason, "Log stream closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "Log stream error");
                    break;
                }
                None => break,
            },
        }
    }

    tracing::info!(received, "Log stream finished");
    received
}
