//! Conversation transcript.
//!
//! The ordered, non-persisted list of rendered message lines for the
//! active conversation. Inbound frames are appended verbatim in arrival
//! order; outgoing messages carry the sender's username prefix. No
//! buffering, coalescing or size limit.

/// Rendered message lines for the active conversation only.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Append a locally echoed outgoing message as `"{username}: {text}"`.
    pub fn push_outgoing(&mut self, username: &str, text: &str) {
        self.lines.push(format!("{username}: {text}"));
    }

    /// Append an inbound frame verbatim, without adding a sender prefix.
    pub fn push_inbound(&mut self, frame: &str) {
        self.lines.push(frame.to_owned());
    }

    /// Discard all lines when the conversation ends.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
