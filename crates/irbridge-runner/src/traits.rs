//! Collaborator boundaries of the bridge.
//!
//! The bridge core is hardware- and network-independent: the chat backend,
//! the IP link and the IR emitter are all injected at construction behind
//! these traits. Message transport and network association are external
//! systems; the core only polls them.

use thiserror::Error;

/// Opaque identifier for the chat a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// One inbound text message. Held by the bridge only for the duration of a
/// single dispatch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Chat the message came from; replies go back here.
    pub chat_id: ChatId,
    /// The message text.
    pub text: String,
}

/// Errors the message transport can report.
#[derive(Debug, Error)]
pub enum TransportError {
    /// An outbound reply could not be delivered.
    #[error("failed to deliver reply: {0}")]
    ReplyFailed(String),
}

/// Chat backend boundary.
///
/// Delivers inbound messages one at a time and carries replies back. If the
/// bridge is slow, pending messages queue inside the transport, never in
/// the bridge.
pub trait MessageTransport {
    /// Poll for the next pending message, if any.
    fn receive(&mut self) -> Option<InboundMessage>;

    /// Send a plain text reply.
    fn reply(&mut self, chat: &ChatId, text: &str) -> Result<(), TransportError>;

    /// Send a text reply together with a reply-keyboard button grid.
    fn send_keyboard(
        &mut self,
        chat: &ChatId,
        text: &str,
        keyboard: &[&[&str]],
    ) -> Result<(), TransportError>;
}

/// Network association boundary.
///
/// Connectivity is owned and updated by the link implementation; the bridge
/// only reads the flag at the top of each loop iteration. Loss of
/// connectivity is a transient state, not an error.
pub trait NetworkLink {
    /// Whether the uplink is currently usable.
    fn is_connected(&self) -> bool;
}
