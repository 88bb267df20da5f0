//! WebSocket Transport
//!
//! `ChatTransport` implementation over tokio-tungstenite. Connections are
//! addressed as `{ws_base}/ws/chat/ws/{sender_id}/{receiver_id}`; both
//! ends derive the same address without negotiation. A reader task
//! forwards inbound text frames into an unbounded channel and drops its
//! sender on closure or error, which the front end reads as connection
//! loss.

use async_trait::async_trait;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::debug;

use crate::domain::transport::{ChatConnection, ChatSocket, ChatTransport};
use crate::shared::error::ChatError;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Transport connector for the real-time endpoint.
pub struct WsTransport {
    ws_base: String,
}

impl WsTransport {
    pub fn new(ws_base: impl Into<String>) -> Self {
        Self {
            ws_base: ws_base.into(),
        }
    }
}

/// Outbound half of a live connection.
struct WsSocket {
    sink: WsSink,
}

#[async_trait]
impl ChatSocket for WsSocket {
    async fn send_text(&mut self, text: &str) -> Result<(), ChatError> {
        self.sink.send(Message::text(text)).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ChatError> {
        // Close request only; the peer's close confirmation is not
        // awaited.
        self.sink.send(Message::Close(None)).await?;
        Ok(())
    }
}

#[async_trait]
impl ChatTransport for WsTransport {
    async fn connect(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<ChatConnection, ChatError> {
        let url = format!(
            "{}/ws/chat/ws/{}/{}",
            self.ws_base, sender_id, receiver_id
        );
        debug!(%url, "opening conversation channel");

        let (stream, _) = connect_async(url.as_str()).await?;
        let (sink, mut read) = stream.split();

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(frame) = read.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        if tx.send(text.to_string()).is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        debug!("conversation channel closed by peer");
                        break;
                    }
                    Err(e) => {
                        debug!(error = %e, "conversation channel errored");
                        break;
                    }
                    // Ping/pong is handled by the protocol layer; binary
                    // frames are outside the contract and ignored.
                    Ok(_) => {}
                }
            }
            // The sender drops here, closing the inbound channel.
        });

        Ok(ChatConnection::new(Box::new(WsSocket { sink }), rx))
    }
}
