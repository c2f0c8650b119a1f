//! Console harness: a stdin/stdout transport and a logging transmitter.
//!
//! Lets the bridge be exercised end to end without a chat backend or IR
//! hardware: type a command line, see the reply and the pulse train that
//! would have been emitted.

use crate::{ChatId, InboundMessage, MessageTransport, NetworkLink, TransportError};
use crossbeam_channel::{Receiver, TryRecvError};
use nec_ir::PulseTransmitter;
use std::io::BufRead;
use tracing::info;

/// Chat id assigned to the local console session.
const CONSOLE_CHAT: ChatId = ChatId(0);

/// Transport backed by stdin/stdout.
///
/// A reader thread feeds lines into a channel so `receive` stays
/// non-blocking, matching the polling contract of the bridge.
pub struct ConsoleTransport {
    lines: Receiver<String>,
}

impl ConsoleTransport {
    /// Spawn the stdin reader thread and return the transport.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });
        ConsoleTransport { lines: rx }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageTransport for ConsoleTransport {
    fn receive(&mut self) -> Option<InboundMessage> {
        match self.lines.try_recv() {
            Ok(text) => Some(InboundMessage {
                chat_id: CONSOLE_CHAT,
                text,
            }),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    fn reply(&mut self, _chat: &ChatId, text: &str) -> Result<(), TransportError> {
        println!("{text}");
        Ok(())
    }

    fn send_keyboard(
        &mut self,
        _chat: &ChatId,
        text: &str,
        keyboard: &[&[&str]],
    ) -> Result<(), TransportError> {
        println!("{text}");
        for row in keyboard {
            println!("  [{}]", row.join(" | "));
        }
        Ok(())
    }
}

/// A link that is always up; the console has no uplink to lose.
pub struct AlwaysConnected;

impl NetworkLink for AlwaysConnected {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Transmitter that logs the pulse train instead of driving hardware.
#[derive(Default)]
pub struct LoggingTransmitter;

impl PulseTransmitter for LoggingTransmitter {
    fn transmit(&mut self, carrier_hz: u32, pulses: &[u32]) {
        let total_us: u32 = pulses.iter().sum();
        info!(
            "IR TX: {} pulses at {} Hz, {} us frame time",
            pulses.len(),
            carrier_hz,
            total_us
        );
    }
}
