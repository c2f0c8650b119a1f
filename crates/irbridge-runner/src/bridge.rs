//! The single-threaded polling dispatch loop.
//!
//! One inbound message is fully processed (route, transmit, reply) before
//! the next poll. Pulse transmission blocks the loop; frames last tens of
//! milliseconds, so this never backs the transport up noticeably. There is
//! no queue in the bridge and no state survives between messages.

use crate::{InboundMessage, MessageTransport, NetworkLink, TransportError};
use irbridge_protocol::{
    custom_sent, key_sent, route, Action, SendCodeError, KEYBOARD, TEXT_HELP, TEXT_SEND_BAD_ARG,
    TEXT_SEND_NO_ARG, TEXT_START,
};
use nec_ir::{NecSender, PulseTransmitter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pacing configuration for the polling loop.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Sleep between polls when no message is pending.
    pub idle_poll: Duration,
    /// Sleep between connectivity checks while the link is down.
    pub offline_poll: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            idle_poll: Duration::from_millis(1000),
            offline_poll: Duration::from_millis(100),
        }
    }
}

/// What a single poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The link was down; nothing was polled.
    Offline,
    /// The link was up but no message was pending.
    Idle,
    /// One message was dispatched to completion.
    Handled,
}

/// Chat-to-infrared bridge.
///
/// Owns handles to its three collaborators for the life of the process;
/// there are no hidden statics.
pub struct Bridge<T, L, X>
where
    T: MessageTransport,
    L: NetworkLink,
    X: PulseTransmitter,
{
    transport: T,
    link: L,
    sender: NecSender<X>,
    config: BridgeConfig,
}

impl<T, L, X> Bridge<T, L, X>
where
    T: MessageTransport,
    L: NetworkLink,
    X: PulseTransmitter,
{
    /// Create a bridge from its collaborators.
    pub fn new(transport: T, link: L, transmitter: X, config: BridgeConfig) -> Self {
        Bridge {
            transport,
            link,
            sender: NecSender::new(transmitter),
            config,
        }
    }

    /// Perform one poll cycle: check the link, receive at most one message
    /// and dispatch it to completion.
    pub fn step(&mut self) -> StepOutcome {
        if !self.link.is_connected() {
            return StepOutcome::Offline;
        }

        match self.transport.receive() {
            Some(msg) => {
                self.dispatch(msg);
                StepOutcome::Handled
            }
            None => StepOutcome::Idle,
        }
    }

    /// Run the polling loop until `shutdown` is set.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        info!("Bridge running");
        while !shutdown.load(Ordering::Relaxed) {
            match self.step() {
                StepOutcome::Offline => std::thread::sleep(self.config.offline_poll),
                StepOutcome::Idle => std::thread::sleep(self.config.idle_poll),
                StepOutcome::Handled => {}
            }
        }
        info!("Bridge stopped");
    }

    /// Dispatch one message: route it, fire the transmission if any, and
    /// compose the reply.
    fn dispatch(&mut self, msg: InboundMessage) {
        debug!("Received message from {:?}: {:?}", msg.chat_id, msg.text);

        let result = match route(&msg.text) {
            None => {
                // Unrecognized text gets no reply and no transmission.
                debug!("Ignoring unrecognized message");
                return;
            }
            Some(Action::Start) => {
                self.transport
                    .send_keyboard(&msg.chat_id, TEXT_START, KEYBOARD)
            }
            Some(Action::Help) => self.transport.reply(&msg.chat_id, TEXT_HELP),
            Some(Action::Send(Ok(code))) => {
                self.sender.send(code);
                self.transport.reply(&msg.chat_id, &custom_sent(code))
            }
            Some(Action::Send(Err(SendCodeError::MissingArgument))) => {
                self.transport.reply(&msg.chat_id, TEXT_SEND_NO_ARG)
            }
            Some(Action::Send(Err(SendCodeError::InvalidCode))) => {
                self.transport.reply(&msg.chat_id, TEXT_SEND_BAD_ARG)
            }
            Some(Action::Key(key)) => {
                self.sender.send(key.code());
                self.transport.reply(&msg.chat_id, &key_sent(key))
            }
        };

        // Replies are best-effort; a failed delivery never aborts the loop.
        if let Err(TransportError::ReplyFailed(reason)) = result {
            warn!("Dropping undeliverable reply: {}", reason);
        }
    }

    /// Access the transport (used by the integration tests).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Access the pulse transmitter.
    pub fn transmitter(&self) -> &X {
        self.sender.transmitter()
    }
}
