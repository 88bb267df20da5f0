//! Real-time transport boundary.
//!
//! The duplex text channel a conversation runs over. Addressed
//! deterministically by `(sender_id, receiver_id)` so both ends derive
//! the same channel without negotiation. Payload is raw text, one message
//! per frame, no envelope.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::shared::error::ChatError;

/// Outbound half of an open connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatSocket: Send {
    /// Transmit one raw text frame.
    async fn send_text(&mut self, text: &str) -> Result<(), ChatError>;

    /// Issue a close request. Completion of the close handshake is not
    /// awaited; the handle must not be used afterwards.
    async fn close(&mut self) -> Result<(), ChatError>;
}

/// An open duplex connection: the send handle plus the inbound frame
/// stream. The inbound channel closing signals out-of-band connection
/// loss.
pub struct ChatConnection {
    pub socket: Box<dyn ChatSocket>,
    pub inbound: UnboundedReceiver<String>,
}

impl ChatConnection {
    pub fn new(socket: Box<dyn ChatSocket>, inbound: UnboundedReceiver<String>) -> Self {
        Self { socket, inbound }
    }
}

/// Connector for the real-time transport endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Open a duplex connection for the `(sender_id, receiver_id)` pair.
    /// Resolves when the transport signals readiness.
    async fn connect(
        &self,
        sender_id: i64,
        receiver_id: i64,
    ) -> Result<ChatConnection, ChatError>;
}
