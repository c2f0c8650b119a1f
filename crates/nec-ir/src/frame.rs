//! Frame construction and pulse-train encoding/decoding.
//!
//! A frame is a 32-bit quantity laid out as:
//!
//! | Field          | Bits  | Description                                |
//! |----------------|-------|--------------------------------------------|
//! | address prefix | 31-16 | Fixed per target device (`ADDRESS_PREFIX`) |
//! | command code   | 15-0  | Varies per remote-control function         |
//!
//! Encoding turns a frame into `PULSES_PER_FRAME` alternating mark/space
//! durations; decoding reverses that from a timing table with tolerance,
//! which is how the round-trip tests validate the encoder.

use crate::{
    NecError, ADDRESS_PREFIX, BIT_MARK_US, FRAME_BITS, LEADER_MARK_US, LEADER_SPACE_US,
    ONE_SPACE_US, PULSES_PER_FRAME, ZERO_SPACE_US,
};

/// Fractional timing tolerance accepted when decoding (1/4 = ±25%).
const TOLERANCE_DIV: u32 = 4;

/// A 32-bit NEC frame: fixed address prefix plus a 16-bit command code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NecFrame(u32);

impl NecFrame {
    /// Build the frame for a 16-bit command code.
    ///
    /// The upper 16 bits are always [`ADDRESS_PREFIX`]; only the lower
    /// 16 bits vary per command.
    pub fn for_code(code: u16) -> Self {
        NecFrame(((ADDRESS_PREFIX as u32) << 16) | code as u32)
    }

    /// Build a frame from a raw 32-bit value (used when decoding).
    pub fn from_raw(raw: u32) -> Self {
        NecFrame(raw)
    }

    /// The raw 32-bit frame value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// The 16-bit command code (lower half of the frame).
    pub fn code(&self) -> u16 {
        self.0 as u16
    }

    /// Encode the frame as a pulse train.
    ///
    /// Returns alternating mark/space durations in microseconds: the leader
    /// pair, 64 durations for the 32 data bits (MSB first), and the trailing
    /// stop mark. Constructed fresh per transmission and never persisted.
    pub fn pulses(&self) -> Vec<u32> {
        let mut buf = Vec::with_capacity(PULSES_PER_FRAME);

        // 1. Leader
        buf.push(LEADER_MARK_US);
        buf.push(LEADER_SPACE_US);

        // 2. Data bits, MSB first
        for bit in (0..FRAME_BITS).rev() {
            buf.push(BIT_MARK_US);
            if (self.0 >> bit) & 1 == 1 {
                buf.push(ONE_SPACE_US);
            } else {
                buf.push(ZERO_SPACE_US);
            }
        }

        // 3. Stop mark
        buf.push(BIT_MARK_US);

        buf
    }
}

/// Check whether a measured duration matches a nominal timing within
/// the decoder tolerance.
fn matches(duration_us: u32, nominal_us: u32) -> bool {
    let slack = nominal_us / TOLERANCE_DIV;
    duration_us >= nominal_us - slack && duration_us <= nominal_us + slack
}

/// Decode a pulse train back into the raw 32-bit frame value.
///
/// Expects exactly the layout produced by [`NecFrame::pulses`]: leader pair,
/// 32 mark/space bit pairs, stop mark. Durations may deviate from nominal by
/// up to ±25%, which covers the jitter of real capture hardware.
pub fn decode_pulses(pulses: &[u32]) -> Result<NecFrame, NecError> {
    if pulses.len() < PULSES_PER_FRAME {
        return Err(NecError::Truncated {
            expected: PULSES_PER_FRAME,
            actual: pulses.len(),
        });
    }

    // 1. Leader
    if !matches(pulses[0], LEADER_MARK_US) || !matches(pulses[1], LEADER_SPACE_US) {
        return Err(NecError::MissingLeader);
    }

    // 2. Data bits
    let mut raw: u32 = 0;
    for bit in 0..FRAME_BITS {
        let mark_idx = 2 + bit * 2;
        let space_idx = mark_idx + 1;

        if !matches(pulses[mark_idx], BIT_MARK_US) {
            return Err(NecError::BadPulse {
                index: mark_idx,
                duration_us: pulses[mark_idx],
            });
        }

        let space = pulses[space_idx];
        raw <<= 1;
        if matches(space, ONE_SPACE_US) {
            raw |= 1;
        } else if !matches(space, ZERO_SPACE_US) {
            return Err(NecError::BadPulse {
                index: space_idx,
                duration_us: space,
            });
        }
    }

    // 3. Stop mark
    let stop_idx = 2 + FRAME_BITS * 2;
    if !matches(pulses[stop_idx], BIT_MARK_US) {
        return Err(NecError::BadPulse {
            index: stop_idx,
            duration_us: pulses[stop_idx],
        });
    }

    Ok(NecFrame::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let frame = NecFrame::for_code(0x10EF);
        assert_eq!(frame.raw(), 0x20DF10EF);
        assert_eq!(frame.code(), 0x10EF);
    }

    #[test]
    fn test_prefix_is_invariant() {
        for code in [0x0000u16, 0x10EF, 0xABCD, 0xFFFE] {
            let frame = NecFrame::for_code(code);
            assert_eq!(frame.raw() >> 16, ADDRESS_PREFIX as u32);
        }
    }

    #[test]
    fn test_pulse_count() {
        let pulses = NecFrame::for_code(0x10EF).pulses();
        assert_eq!(pulses.len(), PULSES_PER_FRAME);
        assert_eq!(pulses.len(), 67);
    }

    #[test]
    fn test_pulse_leader_and_stop() {
        let pulses = NecFrame::for_code(0x0000).pulses();
        assert_eq!(pulses[0], LEADER_MARK_US);
        assert_eq!(pulses[1], LEADER_SPACE_US);
        assert_eq!(*pulses.last().unwrap(), BIT_MARK_US);
    }

    #[test]
    fn test_msb_first_bit_order() {
        // 0x20DF0000: the top bit of the prefix pattern is 0, second is 0,
        // third is 1 (0x2 = 0b0010).
        let pulses = NecFrame::for_code(0x0000).pulses();
        assert_eq!(pulses[3], ZERO_SPACE_US); // bit 31
        assert_eq!(pulses[5], ZERO_SPACE_US); // bit 30
        assert_eq!(pulses[7], ONE_SPACE_US); // bit 29
    }

    #[test]
    fn test_round_trip() {
        for code in [0x0000u16, 0x10EF, 0x40BF, 0x8877, 0xFFFE] {
            let frame = NecFrame::for_code(code);
            let decoded = decode_pulses(&frame.pulses()).expect("should decode");
            assert_eq!(decoded.raw(), frame.raw());
            assert_eq!(decoded.code(), code);
        }
    }

    #[test]
    fn test_round_trip_with_jitter() {
        let frame = NecFrame::for_code(0x10EF);
        let jittered: Vec<u32> = frame
            .pulses()
            .iter()
            .enumerate()
            .map(|(i, &d)| if i % 2 == 0 { d + d / 10 } else { d - d / 10 })
            .collect();
        let decoded = decode_pulses(&jittered).expect("should tolerate 10% jitter");
        assert_eq!(decoded.code(), 0x10EF);
    }

    #[test]
    fn test_decode_truncated() {
        let mut pulses = NecFrame::for_code(0x10EF).pulses();
        pulses.truncate(12);
        assert!(matches!(
            decode_pulses(&pulses),
            Err(NecError::Truncated { actual: 12, .. })
        ));
    }

    #[test]
    fn test_decode_missing_leader() {
        let mut pulses = NecFrame::for_code(0x10EF).pulses();
        pulses[0] = BIT_MARK_US;
        assert!(matches!(decode_pulses(&pulses), Err(NecError::MissingLeader)));
    }

    #[test]
    fn test_decode_bad_bit_space() {
        let mut pulses = NecFrame::for_code(0x10EF).pulses();
        pulses[3] = 4000; // neither a one-space nor a zero-space
        assert!(matches!(
            decode_pulses(&pulses),
            Err(NecError::BadPulse { index: 3, .. })
        ));
    }
}
