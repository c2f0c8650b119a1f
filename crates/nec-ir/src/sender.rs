//! Fire-and-forget frame transmission through a hardware seam.
//!
//! The sender builds the pulse train and hands it to a [`PulseTransmitter`]
//! together with the carrier frequency. It never sleeps or times anything
//! itself, which keeps encoding testable without real hardware.

use crate::{NecFrame, CARRIER_HZ};
use log::debug;

/// Hardware boundary for emitting timed on/off pulses.
///
/// Implementations own the actual modulation (GPIO toggling, a kernel LIRC
/// device, a simulator, ...). Transmission is blocking and runs to
/// completion; the protocol's timing correctness depends on the sequence
/// not being interrupted mid-frame.
pub trait PulseTransmitter {
    /// Emit the given mark/space durations (microseconds, mark first)
    /// modulated on `carrier_hz`.
    fn transmit(&mut self, carrier_hz: u32, pulses: &[u32]);
}

/// Sends NEC frames through a [`PulseTransmitter`].
///
/// Sending is fire-and-forget: the underlying emitter has no feedback
/// channel, so failure is indistinguishable from success and the command
/// flow above never waits on an acknowledgement.
pub struct NecSender<T: PulseTransmitter> {
    transmitter: T,
}

impl<T: PulseTransmitter> NecSender<T> {
    /// Create a sender owning its transmitter handle.
    pub fn new(transmitter: T) -> Self {
        NecSender { transmitter }
    }

    /// Encode and transmit the frame for a 16-bit command code.
    pub fn send(&mut self, code: u16) {
        let frame = NecFrame::for_code(code);
        debug!("Transmitting NEC frame 0x{:08X}", frame.raw());
        self.transmitter.transmit(CARRIER_HZ, &frame.pulses());
    }

    /// Access the underlying transmitter.
    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_pulses, PULSES_PER_FRAME};

    /// Transmitter that records every call for inspection.
    #[derive(Default)]
    struct RecordingTransmitter {
        sent: Vec<(u32, Vec<u32>)>,
    }

    impl PulseTransmitter for RecordingTransmitter {
        fn transmit(&mut self, carrier_hz: u32, pulses: &[u32]) {
            self.sent.push((carrier_hz, pulses.to_vec()));
        }
    }

    #[test]
    fn test_send_emits_one_train() {
        let mut sender = NecSender::new(RecordingTransmitter::default());
        sender.send(0x10EF);

        let sent = &sender.transmitter().sent;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, CARRIER_HZ);
        assert_eq!(sent[0].1.len(), PULSES_PER_FRAME);
    }

    #[test]
    fn test_sent_train_decodes_to_frame() {
        let mut sender = NecSender::new(RecordingTransmitter::default());
        sender.send(0x40BF);

        let (_, pulses) = &sender.transmitter().sent[0];
        let decoded = decode_pulses(pulses).expect("should decode");
        assert_eq!(decoded.raw(), 0x20DF40BF);
    }
}
