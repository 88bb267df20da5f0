//! Conversation lifecycle.
//!
//! One active real-time exchange between the current user and exactly one
//! peer. `Closed` is terminal for a specific connection handle only; the
//! controller can re-enter `Connecting` for a new or the same peer at any
//! time.

/// Lifecycle state of the active conversation's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// No conversation selected
    Idle,
    /// Connection requested, transport has not signaled readiness yet
    Connecting,
    /// Duplex channel ready; sends are accepted only in this state
    Open,
    /// Connection handle closed; terminal for this handle
    Closed,
}

/// The active conversation with one peer.
#[derive(Debug)]
pub struct Conversation {
    pub peer_id: i64,
    state: ConversationState,
}

impl Conversation {
    /// A conversation starts life waiting on the transport.
    pub fn connecting(peer_id: i64) -> Self {
        Self {
            peer_id,
            state: ConversationState::Connecting,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Transport signaled readiness. Only valid out of `Connecting`;
    /// a closed handle never reopens.
    pub fn mark_open(&mut self) {
        if self.state == ConversationState::Connecting {
            self.state = ConversationState::Open;
        }
    }

    pub fn mark_closed(&mut self) {
        self.state = ConversationState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == ConversationState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connecting_to_open() {
        let mut conversation = Conversation::connecting(9);
        assert_eq!(conversation.state(), ConversationState::Connecting);

        conversation.mark_open();
        assert!(conversation.is_open());
    }

    #[test]
    fn test_closed_is_terminal() {
        let mut conversation = Conversation::connecting(9);
        conversation.mark_open();
        conversation.mark_closed();

        conversation.mark_open();
        assert_eq!(conversation.state(), ConversationState::Closed);
    }

    #[test]
    fn test_close_while_connecting() {
        let mut conversation = Conversation::connecting(9);
        conversation.mark_closed();
        assert_eq!(conversation.state(), ConversationState::Closed);
    }
}
